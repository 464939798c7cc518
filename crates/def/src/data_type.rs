use {
    crate::error::{Error, UnknownDataTypeSnafu},
    common::pub_fields_struct,
    std::{fmt, str::FromStr},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    Int32,
    Bool,
    String,
    Bytes,
}

impl DataType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Int32 => "int32",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Bytes => "bytes",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "int32" => Self::Int32,
            "bool" => Self::Bool,
            "string" => Self::String,
            "bytes" => Self::Bytes,
            _ => return UnknownDataTypeSnafu { name: s }.fail(),
        })
    }
}

pub_fields_struct! {
    /// A column type as declared in `CREATE TABLE`.
    ///
    /// `size` is the capacity written between brackets (`string[32]`). It is kept
    /// as metadata only and never checked against inserted values.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct TypeDefinition {
        data_type: DataType,
        size: Option<u32>,
    }
}

impl TypeDefinition {
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            size: None,
        }
    }

    pub fn sized(data_type: DataType, size: u32) -> Self {
        Self {
            data_type,
            size: Some(size),
        }
    }
}

impl From<DataType> for TypeDefinition {
    fn from(data_type: DataType) -> Self {
        Self::new(data_type)
    }
}

impl fmt::Display for TypeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.size {
            Some(size) => write!(f, "{}[{}]", self.data_type, size),
            None => write!(f, "{}", self.data_type),
        }
    }
}
