mod database;
mod error;
mod result_set;
mod table;

pub use self::{
    database::Database,
    error::{Error, Result},
    result_set::ResultSet,
    table::Table,
};
