use super::{Primitive, Value};
use crate::Result;

/// Storage for one record field that a row value can be written into.
pub trait Slot {
    fn set(&mut self, value: Value) -> Result<()>;
}

impl<T: Primitive> Slot for T {
    fn set(&mut self, value: Value) -> Result<()> {
        *self = T::load(value)?;
        Ok(())
    }
}

/// A field's slot paired with the field's byte offset inside the record.
pub struct FieldSlot<'a> {
    pub offset: usize,
    pub slot: &'a mut dyn Slot,
}

impl<'a> FieldSlot<'a> {
    pub fn new(offset: usize, slot: &'a mut dyn Slot) -> FieldSlot<'a> {
        FieldSlot { offset, slot }
    }
}

impl core::fmt::Debug for FieldSlot<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldSlot")
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}
