mod ddl;
mod dml;

pub use self::{
    ddl::CreateTableStmt,
    dml::{InsertStmt, InsertValues, Literal, LiteralKind, SelectStmt},
};

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    CreateTable(CreateTableStmt),
    Insert(InsertStmt),
    Select(SelectStmt),
}
