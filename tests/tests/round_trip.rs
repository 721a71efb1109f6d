use cqlorm::{create_table, Orm, Table};
use jiff::Timestamp;
use pretty_assertions::assert_eq;
use tests::MemSession;

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

#[derive(Debug, Default, Clone, PartialEq, cqlorm::Model)]
struct Visit {
    #[cql("pk")]
    site: String,

    #[cql("ck, date")]
    day: Timestamp,

    #[cql("static")]
    owner: Option<String>,

    hits: i32,

    #[name("-")]
    scratch: std::collections::HashMap<String, u64>,
}

fn setup() -> MemSession {
    tests::init_tracing();

    let session = MemSession::new();
    create_table::<Person>(&session).unwrap();
    create_table::<Visit>(&session).unwrap();
    session
}

fn tony() -> Person {
    Person {
        name: "Tony".to_string(),
        age: 30,
        address: "x".to_string(),
        income: None,
        lucky_number: vec!["a".to_string(), "b".to_string()],
        created_time: Some("2024-05-01T12:00:00Z".parse().unwrap()),
    }
}

fn key(person: &Person) -> Person {
    Person {
        name: person.name.clone(),
        age: person.age,
        ..Person::default()
    }
}

#[test]
fn insert_then_select() {
    let session = setup();
    let people = Table::<Person>::new(&session).unwrap();

    people.insert(&tony()).unwrap();

    assert_eq!(people.select(&key(&tony())).unwrap(), [tony()]);
}

#[test]
fn ignored_field_does_not_round_trip() {
    let session = setup();
    let people = Table::<Person>::new(&session).unwrap();

    let mut person = tony();
    person.income = Some(1000.0);
    people.insert(&person).unwrap();

    let rows = people.select(&key(&person)).unwrap();
    assert_eq!(rows[0].income, None);
}

#[test]
fn absent_optional_is_not_written() {
    let session = setup();
    let people = Table::<Person>::new(&session).unwrap();

    people.insert(&tony()).unwrap();

    let mut partial = tony();
    partial.created_time = None;
    people.insert(&partial).unwrap();

    // The earlier timestamp survives because the column was omitted.
    assert_eq!(people.select(&key(&tony())).unwrap(), [tony()]);
}

#[test]
fn update_is_idempotent() {
    let session = setup();
    let people = Table::<Person>::new(&session).unwrap();
    people.insert(&tony()).unwrap();

    let mut updated = tony();
    updated.address = "Updated".to_string();

    people.update(&updated).unwrap();
    let once = people.select(&key(&tony())).unwrap();

    people.update(&updated).unwrap();
    let twice = people.select(&key(&tony())).unwrap();

    assert_eq!(once, [updated]);
    assert_eq!(once, twice);
    assert_eq!(session.row_count("person"), 1);
}

#[test]
fn select_addresses_one_clustering_row() {
    let session = setup();
    let people = Table::<Person>::new(&session).unwrap();

    for age in [30, 31, 32] {
        people.insert(&Person { age, ..tony() }).unwrap();
    }

    let rows = people.select(&Person { age: 31, ..key(&tony()) }).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].age, 31);
    assert_eq!(session.row_count("person"), 3);
}

#[test]
fn delete_removes_row() {
    let session = setup();
    let people = Table::<Person>::new(&session).unwrap();

    people.insert(&tony()).unwrap();
    people.delete(&key(&tony())).unwrap();

    assert!(people.select(&key(&tony())).unwrap().is_empty());
    assert_eq!(session.row_count("person"), 0);
}

#[test]
fn date_column_truncates_to_day() {
    let session = setup();
    let visits = Table::<Visit>::new(&session).unwrap();

    let visit = Visit {
        site: "docs".to_string(),
        day: "2024-05-01T18:30:00Z".parse().unwrap(),
        owner: Some("ops".to_string()),
        hits: 12,
        scratch: [("tmp".to_string(), 1)].into_iter().collect(),
    };
    visits.insert(&visit).unwrap();

    let rows = visits
        .select(&Visit {
            site: "docs".to_string(),
            day: visit.day,
            ..Visit::default()
        })
        .unwrap();

    assert_eq!(
        rows,
        [Visit {
            day: "2024-05-01T00:00:00Z".parse().unwrap(),
            scratch: Default::default(),
            ..visit
        }]
    );
}

#[test]
fn every_select_closes_its_rows() {
    let session = setup();
    let people = Table::<Person>::new(&session).unwrap();

    people.select(&key(&tony())).unwrap();
    people.select(&key(&tony())).unwrap();

    assert_eq!(session.closed_rows(), 2);
}
