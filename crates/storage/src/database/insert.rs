use {
    super::Database,
    crate::{
        error::{
            ColumnNotExistsSnafu, InvalidLiteralSnafu, Result, TableNotExistsSnafu,
            TooManyValuesSnafu,
        },
        Table,
    },
    def::{ColumnDef, Value},
    parser::{
        ast::{InsertStmt, InsertValues, Literal},
        Identifier,
    },
    snafu::{ensure, OptionExt, ResultExt},
};

impl Database {
    pub(super) fn execute_insert(&mut self, stmt: InsertStmt) -> Result<()> {
        let InsertStmt {
            values,
            table: Identifier(table_name, _),
        } = stmt;

        let table = self
            .tables
            .get_mut(&table_name)
            .context(TableNotExistsSnafu { name: &table_name })?;
        let values = bind_values(table, values)?;

        table.insert_row(values)
    }
}

/// Lays the literals out in column order, converted to each column's type.
/// Slots nothing was written to stay empty for the table to fill.
fn bind_values(table: &Table, values: InsertValues) -> Result<Vec<Option<Value>>> {
    let columns = table.columns();
    let mut slots = vec![None; columns.len()];

    match values {
        InsertValues::Named(assignments) => {
            // a column assigned twice keeps the last value
            for (Identifier(name, _), literal) in assignments {
                let index = table.column_index(&name).context(ColumnNotExistsSnafu {
                    name: &name,
                    table: table.name(),
                })?;
                slots[index] = Some(coerce(&columns[index], &literal)?);
            }
        }
        InsertValues::Positional(literals) => {
            ensure!(
                literals.len() <= columns.len(),
                TooManyValuesSnafu {
                    table: table.name(),
                    count: literals.len(),
                    columns: columns.len(),
                }
            );

            for (index, literal) in literals.into_iter().enumerate() {
                slots[index] = literal
                    .map(|literal| coerce(&columns[index], &literal))
                    .transpose()?;
            }
        }
    }

    Ok(slots)
}

fn coerce(column: &ColumnDef, literal: &Literal) -> Result<Value> {
    Value::coerce(&literal.text, column.data_type()).context(InvalidLiteralSnafu {
        column: &column.name,
    })
}

#[cfg(test)]
mod tests {
    use {super::*, crate::error::Error};

    const USERS: &str = "create table users ({key, autoincrement} id: int32, {unique} login: string[32], password_hash: bytes[8], is_admin: bool = false)";

    fn users() -> Database {
        let mut db = Database::new();
        db.create_table(parser::parse_create_table(USERS).unwrap())
            .unwrap();
        db
    }

    fn rows(db: &Database) -> &[def::Row] {
        db.get_table("users").unwrap().rows()
    }

    #[test]
    fn named_and_positional_build_the_same_row() {
        let mut named = users();
        named
            .insert(r#"insert (login = "vasya", password_hash = 0xdeadbeefdeadbeef) to users"#)
            .unwrap();

        let mut positional = users();
        positional
            .insert(r#"insert (, "vasya", 0xdeadbeefdeadbeef) to users"#)
            .unwrap();

        let expected = vec![vec![
            Value::Int32(0),
            Value::from("vasya"),
            Value::Bytes(vec![]),
            Value::Bool(false),
        ]];
        assert_eq!(rows(&named), expected.as_slice());
        assert_eq!(rows(&positional), expected.as_slice());
    }

    #[test]
    fn last_assignment_wins() {
        let mut db = users();
        db.insert(r#"insert (login = "a", login = "b", is_admin = true) to users"#)
            .unwrap();

        assert_eq!(rows(&db)[0][1], Value::from("b"));
        assert_eq!(rows(&db)[0][3], Value::Bool(true));
    }

    #[test]
    fn short_positional_list_leaves_trailing_slots_empty() {
        let mut db = users();
        db.insert(r#"insert (7, "a", 0x00) to users"#).unwrap();

        assert_eq!(
            rows(&db),
            &[vec![
                Value::Int32(7),
                Value::from("a"),
                Value::Bytes(vec![]),
                Value::Bool(false),
            ]]
        );
    }

    #[test]
    fn binding_errors() {
        let mut db = users();

        assert_eq!(
            db.insert(r#"insert (name = "a") to users"#),
            Err(Error::ColumnNotExists {
                name: "name".to_string(),
                table: "users".to_string(),
            })
        );
        assert_eq!(
            db.insert("insert (1, a, 0x, true, 5) to users"),
            Err(Error::TooManyValues {
                table: "users".to_string(),
                count: 5,
                columns: 4,
            })
        );
        assert_eq!(
            db.insert("insert (1) to accounts"),
            Err(Error::TableNotExists {
                name: "accounts".to_string()
            })
        );
        assert!(matches!(
            db.insert("insert (abc, \"a\") to users"),
            Err(Error::InvalidLiteral { column, .. }) if column == "id"
        ));
        assert_eq!(
            db.insert("insert (1, , 0x) to users"),
            Err(Error::MissingValue {
                column: "login".to_string(),
                table: "users".to_string(),
            })
        );
        assert!(matches!(
            db.insert("insert 1 to users"),
            Err(Error::Parse { .. })
        ));

        assert!(rows(&db).is_empty());
    }
}
