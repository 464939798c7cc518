use {snafu::prelude::*, std::num::ParseIntError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("expected {} at position {}", expected, position))]
    Expected {
        expected: &'static str,
        position: usize,
    },

    #[snafu(display("unexpected end of input, expected {}", expected))]
    UnexpectedEnd { expected: &'static str },

    #[snafu(display("{} at position {}", source, position))]
    InvalidDefinition { position: usize, source: def::Error },

    #[snafu(display("invalid type size '{}' at position {}", text, position))]
    InvalidTypeSize {
        text: String,
        position: usize,
        source: ParseIntError,
    },

    #[snafu(display("unterminated string literal starting at position {}", position))]
    UnterminatedString { position: usize },

    #[snafu(display("expected a condition after WHERE at position {}", position))]
    EmptyCondition { position: usize },
}
