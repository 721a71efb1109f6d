use super::{Formatter, ToCql};

use crate::stmt::Value;

/// Collects the values bound to placeholders.
pub trait Params {
    fn push(&mut self, value: &Value) -> Placeholder;
}

/// A positional placeholder. Holds the 1-based position of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params for Vec<Value> {
    fn push(&mut self, value: &Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToCql for Placeholder {
    fn to_cql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push('?');
    }
}
