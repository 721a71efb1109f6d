use super::{Formatter, Params, ToCql};

use crate::stmt::{self, Type};

impl ToCql for &stmt::ColumnDef {
    fn to_cql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let ty = &self.ty;
        fmt!(f, &self.name " " ty);

        if self.is_static {
            fmt!(f, " static");
        }
    }
}

impl ToCql for &Type {
    fn to_cql<T: Params>(self, f: &mut Formatter<'_, T>) {
        f.dst.push_str(&self.to_string());
    }
}
