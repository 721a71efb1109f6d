mod dest;
pub use dest::Dest;

mod materialize;
pub use materialize::destinations;

mod primitive;
pub use primitive::Primitive;

mod slot;
pub use slot::{FieldSlot, Slot};

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;
