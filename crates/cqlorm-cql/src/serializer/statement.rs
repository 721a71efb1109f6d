use super::{
    binding::{Column, Filter, Value},
    Comma, Delimited, Formatter, Params, ToCql,
};

use crate::stmt::{self, Statement};

impl ToCql for &Statement {
    fn to_cql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_cql(f),
            Statement::Delete(stmt) => stmt.to_cql(f),
            Statement::Insert(stmt) => stmt.to_cql(f),
            Statement::Select(stmt) => stmt.to_cql(f),
            Statement::Update(stmt) => stmt.to_cql(f),
        }
    }
}

impl ToCql for &stmt::Insert {
    fn to_cql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = f.serializer.table_name(&self.table);
        let columns = Delimited(self.values.iter().map(Column), ",");
        let values = Delimited(self.values.iter().map(Value), ",");

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");
    }
}

impl ToCql for &stmt::Select {
    fn to_cql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = f.serializer.table_name(&self.table);
        let columns = Comma(&self.columns);
        let filter = Filter(&self.filter);

        fmt!(f, "SELECT " columns " FROM " table filter);
    }
}

impl ToCql for &stmt::Update {
    fn to_cql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = f.serializer.table_name(&self.table);
        let assignments = Delimited(&self.assignments, ",");
        let filter = Filter(&self.filter);

        fmt!(f, "UPDATE " table " SET " assignments filter);
    }
}

impl ToCql for &stmt::Delete {
    fn to_cql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = f.serializer.table_name(&self.table);
        let filter = Filter(&self.filter);

        fmt!(f, "DELETE FROM " table filter);
    }
}
