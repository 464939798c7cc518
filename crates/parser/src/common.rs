use std::{fmt, ops::RangeInclusive};

/// Inclusive byte range into the statement text.
pub type Span = RangeInclusive<usize>;

/// A name as written in the statement, with where it was written.
///
/// Two identifiers are equal when their names are, wherever they appear.
#[derive(Clone, Debug)]
pub struct Identifier(pub String, pub Span);

impl Identifier {
    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn position(&self) -> usize {
        *self.1.start()
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
pub(crate) fn identifier_from_str(s: &str) -> Identifier {
    Identifier(s.to_string(), 0..=s.len() - 1)
}
