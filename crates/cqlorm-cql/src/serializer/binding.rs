use super::{Formatter, Params, ToCql};

use crate::stmt::Binding;

/// `column=?`, pushing the bound value.
impl ToCql for &Binding {
    fn to_cql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let placeholder = f.params.push(&self.value);
        fmt!(f, &self.column "=" placeholder);
    }
}

/// A bare `?` for the value of a binding.
pub(super) struct Value<'a>(pub(super) &'a Binding);

impl ToCql for Value<'_> {
    fn to_cql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let placeholder = f.params.push(&self.0.value);
        fmt!(f, placeholder);
    }
}

/// The column name of a binding.
pub(super) struct Column<'a>(pub(super) &'a Binding);

impl ToCql for Column<'_> {
    fn to_cql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, &self.0.column);
    }
}

/// ` WHERE a=? AND b=?`, or nothing when there are no predicates.
pub(super) struct Filter<'a>(pub(super) &'a [Binding]);

impl ToCql for Filter<'_> {
    fn to_cql<T: Params>(self, f: &mut Formatter<'_, T>) {
        if !self.0.is_empty() {
            fmt!(f, " WHERE " super::Delimited(self.0, " AND "));
        }
    }
}
