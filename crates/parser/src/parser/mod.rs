mod ddl;
mod insert;
mod query;

use crate::{
    ast::{CreateTableStmt, InsertStmt, SelectStmt, Statement},
    error::Result,
    lexer::Scanner,
};

pub struct Parser<'a> {
    scanner: Scanner<'a>,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            scanner: Scanner::new(src),
        }
    }

    /// Parses one statement of any supported kind, chosen by its leading keyword.
    pub fn parse(sql: &'a str) -> Result<Statement> {
        Self::complete(sql, |parser| {
            if parser.scanner.is_keyword_next("create") {
                parser.parse_create_table_stmt().map(Statement::CreateTable)
            } else if parser.scanner.is_keyword_next("insert") {
                parser.parse_insert_stmt().map(Statement::Insert)
            } else if parser.scanner.is_keyword_next("select") {
                parser.parse_select_stmt().map(Statement::Select)
            } else {
                Err(parser.scanner.expected("CREATE, INSERT or SELECT"))
            }
        })
    }

    pub fn parse_create_table(sql: &'a str) -> Result<CreateTableStmt> {
        Self::complete(sql, Self::parse_create_table_stmt)
    }

    pub fn parse_insert(sql: &'a str) -> Result<InsertStmt> {
        Self::complete(sql, Self::parse_insert_stmt)
    }

    pub fn parse_select(sql: &'a str) -> Result<SelectStmt> {
        Self::complete(sql, Self::parse_select_stmt)
    }

    /// Runs `func` over the whole of `sql`; only an optional `;` may follow the statement.
    fn complete<T>(sql: &'a str, func: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let mut parser = Self::new(sql);
        let stmt = func(&mut parser)?;
        parser.scanner.finish()?;

        Ok(stmt)
    }

    fn parse_comma_separated<T, F>(&mut self, mut func: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Parser<'a>) -> Result<T>,
    {
        let mut v = vec![];

        loop {
            v.push(func(self)?);

            if self.scanner.next_if_char(',').is_none() {
                break;
            }
        }

        Ok(v)
    }
}
