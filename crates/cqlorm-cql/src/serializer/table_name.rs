use super::{Formatter, Params, Period, ToCql};

pub(super) struct TableName<'a> {
    pub(super) keyspace: Option<&'a str>,
    pub(super) name: &'a str,
}

impl ToCql for TableName<'_> {
    fn to_cql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self.keyspace {
            Some(keyspace) => fmt!(f, Period([keyspace, self.name])),
            None => fmt!(f, self.name),
        }
    }
}
