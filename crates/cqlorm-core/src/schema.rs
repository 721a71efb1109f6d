mod field;
pub use field::{FieldDescriptor, Role};

mod record;
pub use record::{FieldDecl, Record};

mod registry;
pub use registry::Registry;

mod table;
pub use table::TableSchema;

mod tag;
pub use tag::Tag;

mod type_map;
pub use type_map::{cql_type, map_type};
