use cqlorm::{create_table, Orm, Table, Value};
use jiff::Timestamp;
use pretty_assertions::assert_eq;
use tests::RecordingSession;

#[derive(Debug, Default, Clone, PartialEq, cqlorm::Model)]
struct Person {
    #[cql("pk")]
    name: String,

    #[cql("ck")]
    age: i8,

    address: String,

    #[name("-")]
    income: Option<f64>,

    #[name("lucky_number")]
    lucky_number: Vec<String>,

    created_time: Option<Timestamp>,
}

fn created() -> Timestamp {
    "2024-05-01T12:00:00Z".parse().unwrap()
}

fn tony() -> Person {
    Person {
        name: "Tony".to_string(),
        age: 30,
        address: "x".to_string(),
        income: Some(1000.0),
        lucky_number: vec!["a".to_string(), "b".to_string()],
        created_time: Some(created()),
    }
}

fn key_only() -> Person {
    Person {
        name: "Tony".to_string(),
        age: 30,
        ..Person::default()
    }
}

#[test]
fn create_person_table() {
    let session = RecordingSession::new();
    create_table::<Person>(&session).unwrap();

    let stmt = session.log().pop();
    assert_eq!(
        stmt.cql,
        "CREATE TABLE IF NOT EXISTS person (name text, age tinyint, address text, \
         lucky_number list<text>, created_time timestamp, PRIMARY KEY (name, age));"
    );
    assert!(stmt.params.is_empty());
    assert!(!stmt.query);
}

#[test]
fn insert_person() {
    let session = RecordingSession::new();
    let people = Table::<Person>::new(&session).unwrap();

    people.insert(&tony()).unwrap();

    let stmt = session.log().pop();
    assert_eq!(
        stmt.cql,
        "INSERT INTO person (name,age,address,lucky_number,created_time) VALUES (?,?,?,?,?);"
    );
    assert_eq!(
        stmt.params,
        [
            Value::from("Tony"),
            Value::I8(30),
            Value::from("x"),
            Value::List(vec![Value::from("a"), Value::from("b")]),
            Value::Timestamp(created()),
        ]
    );
}

#[test]
fn select_person() {
    let session = RecordingSession::new();
    let people = Table::<Person>::new(&session).unwrap();

    people.select(&key_only()).unwrap();

    let stmt = session.log().pop();
    assert_eq!(
        stmt.cql,
        "SELECT name, age, address, lucky_number, created_time FROM person WHERE name=? AND age=?;"
    );
    assert_eq!(stmt.params, [Value::from("Tony"), Value::I8(30)]);
    assert!(stmt.query);
    assert_eq!(session.closed_rows(), 1);
}

#[test]
fn update_person() {
    let session = RecordingSession::new();
    let people = Table::<Person>::new(&session).unwrap();

    let mut person = tony();
    person.address = "Updated".to_string();
    people.update(&person).unwrap();

    let stmt = session.log().pop();
    assert_eq!(
        stmt.cql,
        "UPDATE person SET address=?,lucky_number=?,created_time=? WHERE name=? AND age=?;"
    );
    assert_eq!(
        stmt.params,
        [
            Value::from("Updated"),
            Value::List(vec![Value::from("a"), Value::from("b")]),
            Value::Timestamp(created()),
            Value::from("Tony"),
            Value::I8(30),
        ]
    );
}

#[test]
fn delete_person() {
    let session = RecordingSession::new();
    let people = Table::<Person>::new(&session).unwrap();

    people.delete(&key_only()).unwrap();

    let stmt = session.log().pop();
    assert_eq!(stmt.cql, "DELETE FROM person WHERE name=? AND age=?;");
    assert_eq!(stmt.params, [Value::from("Tony"), Value::I8(30)]);
}

#[test]
fn ignored_field_never_bound() {
    let session = RecordingSession::new();
    let people = Table::<Person>::new(&session).unwrap();

    people.insert(&tony()).unwrap();
    people.update(&tony()).unwrap();

    for stmt in session.log().statements() {
        assert!(!stmt.cql.contains("income"));
        assert!(!stmt.params.contains(&Value::F64(1000.0)));
    }
}

#[test]
fn rows_are_materialized() {
    let session = RecordingSession::new();
    let people = Table::<Person>::new(&session).unwrap();

    session.push_rows(vec![
        vec![
            Value::from("Tony"),
            Value::I8(30),
            Value::from("x"),
            Value::List(vec![Value::from("a"), Value::from("b")]),
            Value::Timestamp(created()),
        ],
        vec![
            Value::from("Tony"),
            Value::I8(31),
            Value::Null,
            Value::Null,
            Value::Null,
        ],
    ]);

    let rows = people.select(&key_only()).unwrap();

    let mut expected = tony();
    expected.income = None;

    assert_eq!(
        rows,
        [
            expected,
            Person {
                name: "Tony".to_string(),
                age: 31,
                ..Person::default()
            },
        ]
    );
}

#[derive(Debug, Default, Clone, PartialEq, cqlorm::Model)]
struct Item {
    #[cql("pk")]
    id: i64,

    r#type: String,
}

#[test]
fn raw_identifiers_name_plain_columns() {
    let session = RecordingSession::new();
    create_table::<Item>(&session).unwrap();

    let item = Item {
        id: 1,
        r#type: "book".to_string(),
    };
    Table::<Item>::new(&session).unwrap().insert(&item).unwrap();

    assert_eq!(
        session.log().cql(),
        [
            "CREATE TABLE IF NOT EXISTS item (id bigint, type text, PRIMARY KEY (id));",
            "INSERT INTO item (id,type) VALUES (?,?);",
        ]
    );
}
