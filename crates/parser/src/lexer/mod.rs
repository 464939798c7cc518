use {
    crate::{
        ast::{Literal, LiteralKind},
        common::{Identifier, Span},
        error::{
            Error, ExpectedSnafu, Result, UnexpectedEndSnafu, UnterminatedStringSnafu,
        },
    },
    common::iter::{MultiPeek, MultiPeekable},
    std::str::CharIndices,
};

/// Character-level cursor shared by the DDL and DML grammars.
///
/// The cursor only moves forward; lookahead never consumes input.
pub(crate) struct Scanner<'a> {
    src: &'a str,
    iter: MultiPeekable<CharIndices<'a>>,
}

pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            iter: src.char_indices().multi_peekable(),
        }
    }

    /// Byte offset of the next unread character, or the input length at the end.
    pub(crate) fn position(&mut self) -> usize {
        self.iter.peek().map_or(self.src.len(), |&(i, _)| i)
    }

    pub(crate) fn peek_char(&mut self) -> Option<char> {
        self.iter.peek().map(|&(_, c)| c)
    }

    pub(crate) fn skip_whitespace(&mut self) {
        self.iter.next_while(|(_, c)| c.is_ascii_whitespace());
    }

    /// Builds the error for a missing `expected` at the cursor.
    pub(crate) fn expected(&mut self, expected: &'static str) -> Error {
        match self.iter.peek() {
            Some(&(position, _)) => ExpectedSnafu { expected, position }.build(),
            None => UnexpectedEndSnafu { expected }.build(),
        }
    }

    pub(crate) fn next_if_char(&mut self, expected: char) -> Option<usize> {
        self.skip_whitespace();
        self.iter
            .next_if(|&(_, c)| c == expected)
            .map(|(position, _)| position)
    }

    pub(crate) fn must_match_char(&mut self, c: char, expected: &'static str) -> Result<usize> {
        match self.next_if_char(c) {
            Some(position) => Ok(position),
            None => Err(self.expected(expected)),
        }
    }

    /// Checks, without consuming it, whether `keyword` comes next.
    ///
    /// Letters are compared case-insensitively and the keyword must not run into
    /// an identifier character, so `select` does not match `selection`.
    pub(crate) fn is_keyword_next(&mut self, keyword: &str) -> bool {
        self.skip_whitespace();

        let mut len = 0;
        for (n, k) in keyword.chars().enumerate() {
            if !matches!(self.iter.peek_nth(n), Some(&(_, c)) if c.eq_ignore_ascii_case(&k)) {
                return false;
            }
            len = n + 1;
        }

        !matches!(self.iter.peek_nth(len), Some(&(_, c)) if is_identifier_char(c))
    }

    pub(crate) fn match_keyword(&mut self, keyword: &str) -> bool {
        if !self.is_keyword_next(keyword) {
            return false;
        }

        for _ in keyword.chars() {
            self.iter.next();
        }
        true
    }

    pub(crate) fn must_match_keyword(
        &mut self,
        keyword: &str,
        expected: &'static str,
    ) -> Result<()> {
        match self.match_keyword(keyword) {
            true => Ok(()),
            false => Err(self.expected(expected)),
        }
    }

    /// Consumes the longest run of characters satisfying `func`.
    pub(crate) fn scan_while(&mut self, func: impl Fn(char) -> bool) -> Option<(&'a str, Span)> {
        let begin = self.position();
        if self.iter.next_while(|&(_, c)| func(c)) == 0 {
            return None;
        }

        let end = self.position();
        let src = self.src;
        Some((&src[begin..end], begin..=end - 1))
    }

    /// Scans a run of identifier characters, failing with `expected` if there is none.
    pub(crate) fn scan_word(&mut self, expected: &'static str) -> Result<(&'a str, Span)> {
        self.skip_whitespace();
        match self.scan_while(is_identifier_char) {
            Some(word) => Ok(word),
            None => Err(self.expected(expected)),
        }
    }

    pub(crate) fn scan_identifier(&mut self) -> Result<Identifier> {
        let (name, span) = self.scan_word("identifier")?;
        Ok(Identifier(name.to_string(), span))
    }

    /// Scans a value literal: `"quoted"`, `0x` hex, or a bare token that ends at
    /// whitespace, `,` or `)`.
    pub(crate) fn scan_literal(&mut self) -> Result<Literal> {
        self.skip_whitespace();

        let first = self.peek_char();
        let second = self.iter.peek_nth(1).map(|&(_, c)| c);

        match (first, second) {
            (Some('"'), _) => self.scan_quoted(),
            (Some('0'), Some('x' | 'X')) => Ok(self.scan_hex()),
            (Some(_), _) => self.scan_bare(),
            (None, _) => UnexpectedEndSnafu { expected: "literal" }.fail(),
        }
    }

    fn scan_quoted(&mut self) -> Result<Literal> {
        let begin = self.position();
        self.iter.next();

        let src = self.src;
        while let Some((i, c)) = self.iter.next() {
            if c == '"' {
                return Ok(Literal {
                    kind: LiteralKind::Quoted,
                    text: src[begin + 1..i].to_string(),
                    span: begin..=i,
                });
            }
        }

        UnterminatedStringSnafu { position: begin }.fail()
    }

    fn scan_hex(&mut self) -> Literal {
        let begin = self.position();
        // `0x`
        self.iter.next();
        self.iter.next();
        self.iter.next_while(|(_, c)| c.is_ascii_hexdigit());

        let end = self.position();
        let src = self.src;
        Literal {
            kind: LiteralKind::Hex,
            text: src[begin..end].to_string(),
            span: begin..=end - 1,
        }
    }

    fn scan_bare(&mut self) -> Result<Literal> {
        match self.scan_while(|c| !c.is_ascii_whitespace() && c != ',' && c != ')') {
            Some((text, span)) => Ok(Literal {
                kind: LiteralKind::Bare,
                text: text.to_string(),
                span,
            }),
            None => Err(self.expected("literal")),
        }
    }

    /// Returns the raw text up to the first character satisfying `stop` (or the
    /// end of input), without leading or trailing whitespace.
    pub(crate) fn scan_raw_until(&mut self, stop: impl Fn(char) -> bool) -> &'a str {
        self.skip_whitespace();
        let begin = self.position();
        self.iter.next_while(|&(_, c)| !stop(c));

        let end = self.position();
        let src = self.src;
        src[begin..end].trim_end()
    }

    /// Looks ahead for the first `=` or `)` outside of quotes and reports
    /// whether it is a `=`.
    pub(crate) fn has_named_values(&mut self) -> bool {
        let mut in_quotes = false;
        let found = self.iter.peek_position_from(0, |&(_, c)| {
            if c == '"' {
                in_quotes = !in_quotes;
            }
            !in_quotes && (c == '=' || c == ')')
        });

        matches!(found, Some((_, &(_, '='))))
    }

    /// Consumes everything that is left.
    pub(crate) fn rest(&mut self) -> &'a str {
        let begin = self.position();
        self.iter.next_while(|_| true);

        let src = self.src;
        &src[begin..]
    }

    /// Accepts trailing whitespace and at most one `;`, then requires the end of input.
    pub(crate) fn finish(&mut self) -> Result<()> {
        self.next_if_char(';');
        self.skip_whitespace();

        match self.iter.peek() {
            None => Ok(()),
            Some(&(position, _)) => ExpectedSnafu {
                expected: "end of statement",
                position,
            }
            .fail(),
        }
    }
}
