use {
    super::Parser,
    crate::{
        ast::SelectStmt,
        error::{EmptyConditionSnafu, Result},
    },
    snafu::ensure,
};

impl<'a> Parser<'a> {
    pub(super) fn parse_select_stmt(&mut self) -> Result<SelectStmt> {
        self.scanner.must_match_keyword("select", "keyword 'SELECT'")?;

        let columns = self.parse_comma_separated(|parser| parser.scanner.scan_identifier())?;

        self.scanner.must_match_keyword("from", "keyword 'FROM'")?;
        let table = self.scanner.scan_identifier()?;

        let condition = self.parse_where_clause()?;

        Ok(SelectStmt {
            columns,
            table,
            condition,
        })
    }

    /// Conditions are not supported: the text after `WHERE` is kept as is.
    fn parse_where_clause(&mut self) -> Result<Option<String>> {
        if !self.scanner.match_keyword("where") {
            return Ok(None);
        }

        self.scanner.skip_whitespace();
        let position = self.scanner.position();
        let condition = self.scanner.rest().trim_end().trim_end_matches(';').trim_end();
        ensure!(!condition.is_empty(), EmptyConditionSnafu { position });

        Ok(Some(condition.to_string()))
    }
}
