use {
    common::pub_fields_struct,
    def::Row,
    std::fmt,
};

pub_fields_struct! {
    /// Rows produced by a `SELECT`, each holding the requested columns in the
    /// requested order.
    #[derive(Clone, Debug, Default, PartialEq)]
    struct ResultSet {
        columns: Vec<String>,
        rows: Vec<Row>,
    }
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One line per row, values separated by tabs.
impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.rows {
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
