use {
    crate::error::{
        AutoincrementOverflowSnafu, InvalidAutoincrementSnafu, InvalidLiteralSnafu,
        MismatchedTypeSnafu, MissingValueSnafu, Result, ValuesCountSnafu,
    },
    def::{ColumnDef, DataType, Row, Value},
    snafu::{ensure, OptionExt, ResultExt},
    std::collections::HashMap,
    tracing::{debug, trace},
};

/// An in-memory table: a schema plus the rows appended to it, in insertion order.
#[derive(Debug)]
pub struct Table {
    name: String,
    columns: Vec<ColumnDef>,
    rows: Vec<Row>,
    /// Next value to hand out, keyed by column index.
    autoincrement_counters: HashMap<usize, i32>,
    /// Defaults converted on first use, indexed like `columns`.
    defaults: Vec<Option<Value>>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDef>) -> Result<Self> {
        let mut autoincrement_counters = HashMap::new();

        for (index, column) in columns.iter().enumerate() {
            if !column.is_autoincrement() {
                continue;
            }

            ensure!(
                column.data_type() == DataType::Int32,
                InvalidAutoincrementSnafu {
                    column: &column.name,
                    data_type: column.data_type(),
                }
            );
            autoincrement_counters.insert(index, 0);
        }

        Ok(Self {
            name: name.into(),
            defaults: vec![None; columns.len()],
            columns,
            rows: vec![],
            autoincrement_counters,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }

    /// Appends one row. `values` holds one slot per column; an empty slot is
    /// filled from the column's autoincrement counter, then from its default.
    /// A `bytes` column without a default falls back to the empty sequence.
    ///
    /// Nothing changes unless the whole row can be built: counters advance only
    /// for rows that are actually appended.
    pub fn insert_row(&mut self, values: Vec<Option<Value>>) -> Result<()> {
        ensure!(
            values.len() == self.columns.len(),
            ValuesCountSnafu {
                table: &self.name,
                expected: self.columns.len(),
                actual: values.len(),
            }
        );

        let mut advanced = vec![];
        let mut row = Row::with_capacity(values.len());

        for (index, value) in values.into_iter().enumerate() {
            let value = match value {
                Some(value) => {
                    let column = &self.columns[index];
                    ensure!(
                        value.data_type() == column.data_type(),
                        MismatchedTypeSnafu {
                            column: &column.name,
                            expected: column.data_type(),
                            found: value.data_type(),
                        }
                    );
                    value
                }
                None => self.fill_missing(index, &mut advanced)?,
            };
            row.push(value);
        }

        self.autoincrement_counters.extend(advanced);
        self.rows.push(row);
        debug!(table = %self.name, rows = self.rows.len(), "inserted row");

        Ok(())
    }

    /// Returns, for every row, the values at `indices` in that order.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds; use [`Table::column_index`] to obtain them.
    pub fn project(&self, indices: &[usize]) -> Vec<Row> {
        self.rows
            .iter()
            .map(|row| indices.iter().map(|&index| row[index].clone()).collect())
            .collect()
    }

    fn fill_missing(&mut self, index: usize, advanced: &mut Vec<(usize, i32)>) -> Result<Value> {
        if let Some(&next) = self.autoincrement_counters.get(&index) {
            let following = next.checked_add(1).context(AutoincrementOverflowSnafu {
                column: &self.columns[index].name,
            })?;
            advanced.push((index, following));

            return Ok(Value::Int32(next));
        }

        match self.default_value(index)? {
            Some(value) => Ok(value),
            None => MissingValueSnafu {
                column: &self.columns[index].name,
                table: &self.name,
            }
            .fail(),
        }
    }

    fn default_value(&mut self, index: usize) -> Result<Option<Value>> {
        if let Some(value) = &self.defaults[index] {
            return Ok(Some(value.clone()));
        }

        let column = &self.columns[index];
        let value = match column.default_as_value() {
            // any bytes literal converts to the empty sequence, so an omitted one does too
            Ok(None) if column.data_type() == DataType::Bytes => Some(Value::Bytes(vec![])),
            value => value.context(InvalidLiteralSnafu {
                column: &column.name,
            })?,
        };

        if let Some(value) = &value {
            trace!(table = %self.name, column = %column.name, %value, "memoized default");
            self.defaults[index] = Some(value.clone());
        }

        Ok(value)
    }
}
