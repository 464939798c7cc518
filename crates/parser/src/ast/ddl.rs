use {crate::Identifier, common::pub_fields_struct, def::ColumnDef};

pub_fields_struct! {
    /// `CREATE TABLE name (column, ...)`. Column order is the row slot order.
    #[derive(Clone, Debug, PartialEq)]
    struct CreateTableStmt {
        name: Identifier,
        columns: Vec<ColumnDef>,
    }
}
