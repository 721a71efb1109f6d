#[derive(Debug, Default, cqlorm::Model)]
pub struct Event {
    #[name("event_id")]
    #[cql("pk")]
    id: i64,

    #[name("kind")]
    #[cql("ck")]
    event_kind: String,

    #[cql("static")]
    owner: String,
}

fn main() {
    let schema = cqlorm::TableSchema::of::<Event>().unwrap();
    let names: Vec<_> = schema.columns().map(|f| f.column_name.as_str()).collect();
    assert_eq!(names, ["event_id", "kind", "owner"]);
}
