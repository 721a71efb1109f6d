use super::Type;

use cqlorm_core::schema::FieldDescriptor;

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    /// Name of the column
    pub name: String,

    /// Column type
    pub ty: Type,

    /// Shared by every row of a partition
    pub is_static: bool,
}

impl ColumnDef {
    /// Returns `None` for fields that are not mapped to a column.
    pub fn from_field(field: &FieldDescriptor) -> Option<ColumnDef> {
        if field.is_ignored() {
            return None;
        }

        Some(ColumnDef {
            name: field.column_name.clone(),
            ty: field.ty.clone()?,
            is_static: field.is_static(),
        })
    }
}
