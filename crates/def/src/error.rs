use {
    snafu::prelude::*,
    std::num::ParseIntError,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display(r#"invalid input syntax for type int32: "{}""#, text))]
    InvalidInteger { text: String, source: ParseIntError },

    #[snafu(display(r#"unknown data type "{}""#, name))]
    UnknownDataType { name: String },

    #[snafu(display(r#"unknown attribute "{}""#, name))]
    UnknownAttribute { name: String },
}
