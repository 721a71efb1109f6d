use cqlorm::Record;

#[derive(Debug, Default, Clone, PartialEq, cqlorm::Model)]
struct Everything {
    #[cql("pk")]
    flag: bool,

    #[cql("ck")]
    tiny: i8,

    small: i16,
    int: i32,
    big: i64,
    size: isize,
    float: f32,
    double: f64,
    text: String,
    at: jiff::Timestamp,

    #[cql("date")]
    day: Option<jiff::Timestamp>,

    maybe: Option<i64>,
    list: Vec<String>,
    maybe_list: Option<Vec<f64>>,
}

fn main() {
    let schema = cqlorm::TableSchema::of::<Everything>().unwrap();
    assert_eq!(schema.name, "everything");
    assert_eq!(Everything::fields().len(), 14);
    assert_eq!(Everything::default().values().len(), 14);
}
