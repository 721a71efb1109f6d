use super::{Slot, Type, Value};
use crate::Result;

/// Where the driver writes one column of a scanned row.
pub enum Dest<'a> {
    /// A typed record field.
    Column {
        ty: &'a Type,
        optional: bool,
        slot: &'a mut dyn Slot,
    },

    /// The column has no field to land in; its value is dropped.
    Discard,
}

impl Dest<'_> {
    pub fn ty(&self) -> Option<&Type> {
        match self {
            Dest::Column { ty, .. } => Some(ty),
            Dest::Discard => None,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Dest::Column { optional: true, .. })
    }

    pub fn is_discard(&self) -> bool {
        matches!(self, Dest::Discard)
    }

    /// Writes a column value into the destination.
    ///
    /// A null written to a required field leaves the zero value in place.
    pub fn set(&mut self, value: Value) -> Result<()> {
        match self {
            Dest::Discard => Ok(()),
            Dest::Column { optional, .. } if !*optional && value.is_null() => Ok(()),
            Dest::Column { slot, .. } => slot.set(value),
        }
    }
}

impl core::fmt::Debug for Dest<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Dest::Column { ty, optional, .. } => f
                .debug_struct("Column")
                .field("ty", ty)
                .field("optional", optional)
                .finish_non_exhaustive(),
            Dest::Discard => f.write_str("Discard"),
        }
    }
}
