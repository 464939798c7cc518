use {
    crate::{Identifier, Span},
    common::pub_fields_struct,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralKind {
    /// `"text"`; the quotes are not part of the literal text.
    Quoted,
    /// `0x` followed by hex digits; the text keeps the prefix.
    Hex,
    /// Anything else up to whitespace, `,` or `)`.
    Bare,
}

pub_fields_struct! {
    #[derive(Clone, Debug)]
    struct Literal {
        kind: LiteralKind,
        text: String,
        span: Span,
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum InsertValues {
    /// Values in column order; `None` marks a slot left empty between commas.
    Positional(Vec<Option<Literal>>),
    /// `column = value` pairs in the order they were written.
    Named(Vec<(Identifier, Literal)>),
}

pub_fields_struct! {
    /// `INSERT (values) TO table`
    #[derive(Clone, Debug, PartialEq)]
    struct InsertStmt {
        values: InsertValues,
        table: Identifier,
    }

    /// `SELECT column, ... FROM table [WHERE ...]`
    ///
    /// `condition` keeps the raw text after `WHERE`; it is never evaluated.
    #[derive(Clone, Debug, PartialEq)]
    struct SelectStmt {
        columns: Vec<Identifier>,
        table: Identifier,
        condition: Option<String>,
    }
}
