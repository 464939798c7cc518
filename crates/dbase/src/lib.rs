//! A small in-memory table store driven by a SQL-like text language.
//!
//! ```
//! use dbase::{Database, Value};
//!
//! let mut db = Database::new();
//! db.execute("CREATE TABLE users ({key, autoincrement} id: int32, login: string[32])")
//!     .unwrap();
//! db.insert(r#"insert (login = "vasya") to users"#).unwrap();
//!
//! let result = db.select("select id, login from users").unwrap();
//! assert_eq!(result.rows, vec![vec![Value::Int32(0), Value::from("vasya")]]);
//! ```

pub use {
    def::{Attribute, ColumnDef, DataType, Row, TypeDefinition, Value},
    parser::{ast, parse_create_table, Identifier, Parser},
    storage::{Database, Error, Result, ResultSet, Table},
};
