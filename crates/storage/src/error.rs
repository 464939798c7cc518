use {def::DataType, snafu::prelude::*};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("{}", source))]
    Parse { source: parser::Error },

    #[snafu(display(r#"invalid value for column "{}": {}"#, column, source))]
    InvalidLiteral { column: String, source: def::Error },

    #[snafu(display(r#"table "{}" already exists"#, name))]
    TableAlreadyExists { name: String },

    #[snafu(display(r#"table "{}" does not exist"#, name))]
    TableNotExists { name: String },

    #[snafu(display(r#"column "{}" of table "{}" does not exist"#, name, table))]
    ColumnNotExists { name: String, table: String },

    #[snafu(display(
        r#"table "{}" has {} columns but {} values were given"#,
        table,
        expected,
        actual
    ))]
    ValuesCount {
        table: String,
        expected: usize,
        actual: usize,
    },

    #[snafu(display(
        r#"INSERT has {} values but table "{}" only has {} columns"#,
        count,
        table,
        columns
    ))]
    TooManyValues {
        table: String,
        count: usize,
        columns: usize,
    },

    #[snafu(display(r#"no value provided for column "{}" of table "{}""#, column, table))]
    MissingValue { column: String, table: String },

    #[snafu(display(
        r#"column "{}" is of type {} but the value is of type {}"#,
        column,
        expected,
        found
    ))]
    MismatchedType {
        column: String,
        expected: DataType,
        found: DataType,
    },

    #[snafu(display(
        r#"autoincrement column "{}" must be of type int32, not {}"#,
        column,
        data_type
    ))]
    InvalidAutoincrement { column: String, data_type: DataType },

    #[snafu(display(r#"autoincrement counter of column "{}" is exhausted"#, column))]
    AutoincrementOverflow { column: String },
}
