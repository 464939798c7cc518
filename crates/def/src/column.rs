use {
    crate::{
        error::{Error, Result, UnknownAttributeSnafu},
        DataType, TypeDefinition, Value,
    },
    common::pub_fields_struct,
    std::{collections::BTreeSet, fmt, str::FromStr},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attribute {
    Key,
    Autoincrement,
    Unique,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Key => "key",
            Self::Autoincrement => "autoincrement",
            Self::Unique => "unique",
        })
    }
}

impl FromStr for Attribute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "key" => Self::Key,
            "autoincrement" => Self::Autoincrement,
            "unique" => Self::Unique,
            _ => return UnknownAttributeSnafu { name: s }.fail(),
        })
    }
}

pub_fields_struct! {
    #[derive(Clone, Debug, PartialEq)]
    struct ColumnDef {
        name: String,
        type_def: TypeDefinition,
        attributes: BTreeSet<Attribute>,
        /// Raw literal text after `=`, converted only when a row needs it.
        default_value: Option<String>,
    }
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, type_def: impl Into<TypeDefinition>) -> Self {
        Self {
            name: name.into(),
            type_def: type_def.into(),
            attributes: BTreeSet::new(),
            default_value: None,
        }
    }

    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn data_type(&self) -> DataType {
        self.type_def.data_type
    }

    pub fn has_attribute(&self, attribute: Attribute) -> bool {
        self.attributes.contains(&attribute)
    }

    pub fn is_autoincrement(&self) -> bool {
        self.has_attribute(Attribute::Autoincrement)
    }

    /// Converts the declared default, if any, into a value of the column's type.
    pub fn default_as_value(&self) -> Result<Option<Value>> {
        self.default_value
            .as_deref()
            .map(|text| Value::coerce(text, self.data_type()))
            .transpose()
    }
}
