use {
    crate::{
        error::{InvalidIntegerSnafu, Result},
        DataType,
    },
    snafu::ResultExt,
    std::fmt,
};

/// A row always holds exactly one value per column of its table, in column order.
pub type Row = Vec<Value>;

macro_rules! define_value {
    ($($variant:ident($raw:ty),)*) => {
        /// A typed cell value. Each variant corresponds to the [`DataType`] of the same name.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum Value {
            $($variant($raw),)*
        }

        impl Value {
            pub fn data_type(&self) -> DataType {
                match self {
                    $(Self::$variant(_) => DataType::$variant,)*
                }
            }
        }

        $(
            impl From<$raw> for Value {
                fn from(raw: $raw) -> Self {
                    Value::$variant(raw)
                }
            }
        )*
    };
}

define_value! {
    Int32(i32),
    Bool(bool),
    String(String),
    Bytes(Vec<u8>),
}

impl From<&str> for Value {
    fn from(raw: &str) -> Self {
        Value::String(raw.to_string())
    }
}

impl Value {
    /// Converts literal text into a value of `data_type`.
    ///
    /// * `int32` parses a decimal integer and is the only conversion that can fail.
    /// * `bool` is `true` only for the exact text `true`; everything else,
    ///   `TRUE` included, is `false`.
    /// * `string` keeps the text as is.
    /// * `bytes` always yields an empty byte sequence, the literal digits are discarded.
    pub fn coerce(text: &str, data_type: DataType) -> Result<Self> {
        Ok(match data_type {
            DataType::Int32 => {
                Value::Int32(text.parse::<i32>().context(InvalidIntegerSnafu { text })?)
            }
            DataType::Bool => Value::Bool(text == "true"),
            DataType::String => Value::String(text.to_string()),
            DataType::Bytes => Value::Bytes(Vec::new()),
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Int32(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", v),
            Self::String(v) => f.write_str(v),
            Self::Bytes(v) => {
                f.write_str("0x")?;
                v.iter().try_for_each(|byte| write!(f, "{:02x}", byte))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::Error};

    #[test]
    fn coerce_int32() {
        assert_eq!(Value::coerce("42", DataType::Int32), Ok(Value::Int32(42)));
        assert_eq!(Value::coerce("-7", DataType::Int32), Ok(Value::Int32(-7)));

        for text in ["abc", "", "2147483648", "1.5"] {
            assert!(matches!(
                Value::coerce(text, DataType::Int32),
                Err(Error::InvalidInteger { text: t, .. }) if t == text
            ));
        }
    }

    #[test]
    fn coerce_bool_is_true_only_for_exact_literal() {
        assert_eq!(Value::coerce("true", DataType::Bool), Ok(Value::Bool(true)));

        for text in ["false", "TRUE", "True", "1", "yes", ""] {
            assert_eq!(Value::coerce(text, DataType::Bool), Ok(Value::Bool(false)));
        }
    }

    #[test]
    fn coerce_string_and_bytes() {
        assert_eq!(
            Value::coerce("vasya", DataType::String),
            Ok(Value::String("vasya".to_string()))
        );
        assert_eq!(
            Value::coerce("0xdeadbeef", DataType::Bytes),
            Ok(Value::Bytes(vec![]))
        );
    }

    #[test]
    fn data_type_of_value() {
        assert_eq!(Value::from(1i32).data_type(), DataType::Int32);
        assert_eq!(Value::from(false).data_type(), DataType::Bool);
        assert_eq!(Value::from("a").data_type(), DataType::String);
        assert_eq!(Value::from(vec![1u8]).data_type(), DataType::Bytes);
    }

    #[test]
    fn display() {
        assert_eq!(Value::Int32(-3).to_string(), "-3");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::from("admin").to_string(), "admin");
        assert_eq!(Value::Bytes(vec![0xde, 0x0a]).to_string(), "0xde0a");
        assert_eq!(Value::Bytes(vec![]).to_string(), "0x");
    }
}
