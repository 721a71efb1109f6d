use super::{Comma, Formatter, Params, ToCql};

use crate::stmt;

struct PrimaryKey<'a>(&'a stmt::CreateTable);

impl ToCql for &stmt::CreateTable {
    fn to_cql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = f.serializer.table_name(&self.name);
        let columns = Comma(&self.columns);
        let pk = PrimaryKey(self);

        fmt!(f, "CREATE TABLE IF NOT EXISTS " table " (" columns ", PRIMARY KEY " pk ")");
    }
}

/// `(pk[, ck...])`, with a composite partition key parenthesized.
impl ToCql for PrimaryKey<'_> {
    fn to_cql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let stmt = self.0;

        fmt!(f, "(");

        if let [pk] = &stmt.partition_key[..] {
            fmt!(f, pk);
        } else {
            fmt!(f, "(" Comma(&stmt.partition_key) ")");
        }

        for ck in &stmt.clustering_key {
            fmt!(f, ", " ck);
        }

        fmt!(f, ")");
    }
}
