use {
    super::Parser,
    crate::{
        ast::CreateTableStmt,
        error::{InvalidDefinitionSnafu, InvalidTypeSizeSnafu, Result},
        Identifier,
    },
    def::{Attribute, ColumnDef, DataType, TypeDefinition},
    snafu::ResultExt,
    std::collections::BTreeSet,
};

impl<'a> Parser<'a> {
    pub(super) fn parse_create_table_stmt(&mut self) -> Result<CreateTableStmt> {
        self.scanner.must_match_keyword("create", "keyword 'CREATE'")?;
        self.scanner.must_match_keyword("table", "keyword 'TABLE' after 'CREATE'")?;

        let name = self.scanner.scan_identifier()?;
        self.scanner.must_match_char('(', "'(' after table name")?;

        let columns = self.parse_comma_separated(Self::parse_column_def)?;
        self.scanner.must_match_char(')', "',' or ')' in column definitions")?;

        Ok(CreateTableStmt { name, columns })
    }

    fn parse_column_def(&mut self) -> Result<ColumnDef> {
        let attributes = self.parse_attributes()?;

        let Identifier(name, _) = self.scanner.scan_identifier()?;
        self.scanner.must_match_char(':', "':' after column name")?;

        let type_def = self.parse_type_def()?;
        let default_value = self.parse_default_value();

        Ok(ColumnDef {
            name,
            type_def,
            attributes,
            default_value,
        })
    }

    fn parse_attributes(&mut self) -> Result<BTreeSet<Attribute>> {
        if self.scanner.next_if_char('{').is_none() {
            return Ok(BTreeSet::new());
        }

        let attributes = self.parse_comma_separated(|parser| {
            let (name, span) = parser.scanner.scan_word("attribute name")?;
            name.parse::<Attribute>().context(InvalidDefinitionSnafu {
                position: *span.start(),
            })
        })?;
        self.scanner.must_match_char('}', "'}'")?;

        Ok(attributes.into_iter().collect())
    }

    fn parse_type_def(&mut self) -> Result<TypeDefinition> {
        let (name, span) = self.scanner.scan_word("data type")?;
        let data_type = name.parse::<DataType>().context(InvalidDefinitionSnafu {
            position: *span.start(),
        })?;

        let size = match self.scanner.next_if_char('[') {
            None => None,
            Some(_) => {
                self.scanner.skip_whitespace();
                let (digits, span) = match self.scanner.scan_while(|c| c.is_ascii_digit()) {
                    Some(digits) => digits,
                    None => return Err(self.scanner.expected("type size")),
                };
                let size = digits.parse::<u32>().context(InvalidTypeSizeSnafu {
                    text: digits,
                    position: *span.start(),
                })?;
                self.scanner.must_match_char(']', "']'")?;

                Some(size)
            }
        };

        Ok(TypeDefinition { data_type, size })
    }

    /// The text after `=` is kept verbatim; it is only converted when a row needs it.
    fn parse_default_value(&mut self) -> Option<String> {
        self.scanner.next_if_char('=')?;

        let text = self.scanner.scan_raw_until(|c| c == ',' || c == ')');
        (!text.is_empty()).then(|| text.to_string())
    }
}
