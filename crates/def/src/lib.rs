mod column;
mod data_type;
mod error;
mod value;

pub use {
    column::{Attribute, ColumnDef},
    data_type::{DataType, TypeDefinition},
    error::{Error, Result},
    value::{Row, Value},
};
