use dbase::{parse_create_table, Database, Error, ResultSet, Value};

const USERS: &str = "CREATE TABLE users ({key, autoincrement} id: int32, {unique} login: string[32], password_hash: bytes[8], is_admin: bool = false)";

fn users() -> Database {
    let mut db = Database::new();
    db.create_table(parse_create_table(USERS).unwrap()).unwrap();
    db
}

fn rows(db: &Database, table: &str) -> Vec<Vec<Value>> {
    db.get_table(table).unwrap().rows().to_vec()
}

#[test]
fn insert_and_select_users() {
    let mut db = users();

    db.insert(r#"INSERT (, "vasya", 0xdead) TO users"#).unwrap();
    assert_eq!(
        rows(&db, "users"),
        vec![vec![
            Value::Int32(0),
            Value::from("vasya"),
            Value::Bytes(vec![]),
            Value::Bool(false),
        ]]
    );

    db.insert(r#"INSERT (login = "admin", is_admin = true) TO users"#)
        .unwrap();
    assert_eq!(
        rows(&db, "users")[1],
        vec![
            Value::Int32(1),
            Value::from("admin"),
            Value::Bytes(vec![]),
            Value::Bool(true),
        ]
    );

    let result = db.select("SELECT id, login FROM users").unwrap();
    assert_eq!(
        result.rows,
        vec![
            vec![Value::Int32(0), Value::from("vasya")],
            vec![Value::Int32(1), Value::from("admin")],
        ]
    );
    assert_eq!(result.to_string(), "0\tvasya\n1\tadmin\n");
}

#[test]
fn too_many_positional_values() {
    let mut db = users();

    assert_eq!(
        db.insert("INSERT (1, 2, 3, 4, 5) TO users"),
        Err(Error::TooManyValues {
            table: "users".to_string(),
            count: 5,
            columns: 4,
        })
    );
    assert!(rows(&db, "users").is_empty());
}

#[test]
fn duplicate_table_keeps_existing_data() {
    let mut db = users();
    db.insert(r#"INSERT (, "vasya") TO users"#).unwrap();
    let before = rows(&db, "users");

    assert_eq!(
        db.create_table(parse_create_table(USERS).unwrap()),
        Err(Error::TableAlreadyExists {
            name: "users".to_string()
        })
    );
    assert_eq!(rows(&db, "users"), before);
}

#[test]
fn create_table_is_deterministic() {
    assert_eq!(
        parse_create_table(USERS).unwrap(),
        parse_create_table(USERS).unwrap()
    );
}

#[test]
fn named_and_positional_inserts_agree() {
    let mut named = users();
    let mut positional = users();

    for (login, is_admin) in [("a", "false"), ("b", "true"), ("c", "false")] {
        named
            .insert(&format!(
                r#"insert (is_admin = {}, password_hash = 0x01, login = "{}") to users"#,
                is_admin, login
            ))
            .unwrap();
        positional
            .insert(&format!(
                r#"insert (, "{}", 0x01, {}) to users"#,
                login, is_admin
            ))
            .unwrap();
    }

    assert_eq!(rows(&named, "users"), rows(&positional, "users"));
}

#[test]
fn autoincrement_counts_from_zero() {
    let mut db = Database::new();
    db.execute("create table events ({autoincrement} seq: int32, {autoincrement} other: int32, kind: string = none)")
        .unwrap();

    for i in 0..10 {
        if i % 3 == 0 {
            db.insert(r#"insert (kind = "tick") to events"#).unwrap();
        } else {
            db.insert("insert (, 100) to events").unwrap();
        }
    }

    let result = db.select("select seq from events").unwrap();
    let expected: Vec<_> = (0..10).map(|i| vec![Value::Int32(i)]).collect();
    assert_eq!(result.rows, expected);

    // explicit values for `other` in 6 of the 10 inserts
    let other = db.select("select other from events").unwrap();
    assert_eq!(
        other.rows.iter().filter(|row| row[0] == Value::Int32(100)).count(),
        6
    );
    assert_eq!(
        other.rows.iter().filter(|row| row[0] != Value::Int32(100)).count(),
        4
    );
}

#[test]
fn default_fallback_and_missing_value() {
    let mut db = Database::new();
    db.execute("create table t (a: int32 = 5, b: string, c: bool = true)")
        .unwrap();

    db.insert(r#"insert (b = "x") to t"#).unwrap();
    assert_eq!(
        rows(&db, "t"),
        vec![vec![Value::Int32(5), Value::from("x"), Value::Bool(true)]]
    );

    assert_eq!(
        db.insert("insert (a = 1) to t"),
        Err(Error::MissingValue {
            column: "b".to_string(),
            table: "t".to_string(),
        })
    );
    assert_eq!(rows(&db, "t").len(), 1);
}

#[test]
fn projection_order_and_where() {
    let mut db = users();
    db.insert(r#"insert (, "vasya") to users"#).unwrap();
    db.insert(r#"insert (, "admin", , true) to users"#).unwrap();

    let result = db
        .select("select is_admin, id from users where id = 0")
        .unwrap();
    assert_eq!(
        result,
        ResultSet {
            columns: vec!["is_admin".to_string(), "id".to_string()],
            rows: vec![
                vec![Value::Bool(false), Value::Int32(0)],
                vec![Value::Bool(true), Value::Int32(1)],
            ],
        }
    );
}

#[test]
fn errors_surface_to_the_caller() {
    let mut db = users();

    assert!(matches!(
        db.insert("insert (1 to users"),
        Err(Error::Parse { .. })
    ));
    assert!(matches!(
        db.select("select id from nowhere"),
        Err(Error::TableNotExists { .. })
    ));
    assert!(matches!(
        db.select("select id, email from users"),
        Err(Error::ColumnNotExists { .. })
    ));
    assert!(matches!(
        db.insert(r#"insert (email = "x") to users"#),
        Err(Error::ColumnNotExists { .. })
    ));
    assert!(matches!(
        db.insert(r#"insert (id = twelve, login = "x") to users"#),
        Err(Error::InvalidLiteral { .. })
    ));
    assert!(rows(&db, "users").is_empty());

    // a failed insert does not use up an autoincrement value
    db.insert(r#"insert (login = "x") to users"#).unwrap();
    assert_eq!(rows(&db, "users")[0][0], Value::Int32(0));
}

#[test]
fn execute_runs_a_script() {
    let mut db = Database::new();
    let script = [
        "CREATE TABLE users ({key, autoincrement} id: int32, login: string[32], is_admin: bool = false);",
        r#"INSERT (, "vasya") TO users;"#,
        r#"INSERT (login = "admin", is_admin = true) TO users;"#,
        "SELECT login, is_admin FROM users WHERE is_admin = true;",
    ];

    let results: Vec<_> = script
        .iter()
        .map(|sql| db.execute(sql).unwrap())
        .collect();

    assert!(results[..3].iter().all(Option::is_none));
    assert_eq!(
        results[3].as_ref().map(ToString::to_string),
        Some("vasya\tfalse\nadmin\ttrue\n".to_string())
    );
    assert_eq!(db.table_names(), vec!["users"]);
}
