use {
    super::Parser,
    crate::{
        ast::{InsertStmt, InsertValues, Literal},
        error::{Result, UnexpectedEndSnafu},
        Identifier,
    },
};

impl<'a> Parser<'a> {
    /// A `=` before the closing `)` switches the whole value list to the named form.
    pub(super) fn parse_insert_stmt(&mut self) -> Result<InsertStmt> {
        self.scanner.must_match_keyword("insert", "keyword 'INSERT'")?;
        self.scanner.must_match_char('(', "'(' after 'INSERT'")?;

        let values = if self.scanner.has_named_values() {
            InsertValues::Named(self.parse_comma_separated(Self::parse_assignment)?)
        } else {
            InsertValues::Positional(self.parse_positional_values()?)
        };
        self.scanner.must_match_char(')', "')' after values")?;

        self.scanner.must_match_keyword("to", "keyword 'TO'")?;
        let table = self.scanner.scan_identifier()?;

        Ok(InsertStmt { values, table })
    }

    fn parse_assignment(&mut self) -> Result<(Identifier, Literal)> {
        let column = self.scanner.scan_identifier()?;
        self.scanner.must_match_char('=', "'=' after column name")?;
        let value = self.scanner.scan_literal()?;

        Ok((column, value))
    }

    /// Stops in front of the closing `)`. Nothing between two commas is an empty slot.
    fn parse_positional_values(&mut self) -> Result<Vec<Option<Literal>>> {
        let mut values = vec![];

        loop {
            self.scanner.skip_whitespace();
            match self.scanner.peek_char() {
                Some(')') => break,
                Some(',') => {
                    self.scanner.next_if_char(',');
                    values.push(None);
                }
                Some(_) => {
                    values.push(Some(self.scanner.scan_literal()?));

                    self.scanner.skip_whitespace();
                    match self.scanner.peek_char() {
                        Some(',') => {
                            self.scanner.next_if_char(',');
                        }
                        Some(')') => break,
                        _ => return Err(self.scanner.expected("',' or ')' in value list")),
                    }
                }
                None => {
                    return UnexpectedEndSnafu {
                        expected: "value, ',' or ')'",
                    }
                    .fail()
                }
            }
        }

        Ok(values)
    }
}
