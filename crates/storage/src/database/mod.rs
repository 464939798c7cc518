mod insert;
mod select;

use {
    crate::{
        error::{ParseSnafu, Result, TableAlreadyExistsSnafu},
        ResultSet, Table,
    },
    parser::{ast::CreateTableStmt, ast::Statement, Identifier, Parser},
    snafu::{ensure, ResultExt},
    std::collections::HashMap,
    tracing::debug,
};

/// A named collection of tables. Table names are unique and case-sensitive.
#[derive(Debug, Default)]
pub struct Database {
    tables: HashMap<String, Table>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new, empty table built from a parsed schema.
    pub fn create_table(&mut self, stmt: CreateTableStmt) -> Result<()> {
        let CreateTableStmt {
            name: Identifier(name, _),
            columns,
        } = stmt;

        ensure!(
            !self.tables.contains_key(&name),
            TableAlreadyExistsSnafu { name }
        );

        let table = Table::new(name.clone(), columns)?;
        debug!(table = %name, columns = table.columns().len(), "created table");
        self.tables.insert(name, table);

        Ok(())
    }

    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn get_table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.get_mut(name)
    }

    /// Names of all tables, sorted.
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Parses and runs one `INSERT` statement.
    pub fn insert(&mut self, sql: &str) -> Result<()> {
        let stmt = Parser::parse_insert(sql).context(ParseSnafu)?;
        self.execute_insert(stmt)
    }

    /// Parses and runs one `SELECT` statement.
    pub fn select(&self, sql: &str) -> Result<ResultSet> {
        let stmt = Parser::parse_select(sql).context(ParseSnafu)?;
        self.execute_select(stmt)
    }

    /// Runs a statement of any supported kind. Only `SELECT` produces a result.
    pub fn execute(&mut self, sql: &str) -> Result<Option<ResultSet>> {
        match Parser::parse(sql).context(ParseSnafu)? {
            Statement::CreateTable(stmt) => self.create_table(stmt).map(|_| None),
            Statement::Insert(stmt) => self.execute_insert(stmt).map(|_| None),
            Statement::Select(stmt) => self.execute_select(stmt).map(Some),
        }
    }
}
