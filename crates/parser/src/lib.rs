pub mod ast;
mod common;
mod error;
mod lexer;
mod parser;

pub use self::{
    common::{Identifier, Span},
    error::{Error, Result},
    parser::Parser,
};

/// Parses a single `CREATE TABLE` statement into a table schema.
pub fn parse_create_table(sql: &str) -> Result<ast::CreateTableStmt> {
    Parser::parse_create_table(sql)
}
