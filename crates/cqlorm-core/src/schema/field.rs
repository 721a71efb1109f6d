use crate::stmt::Type;

/// How a field participates in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Part of the partition key (`pk`)
    PartitionKey,

    /// Part of the clustering key (`ck`)
    ClusteringKey,

    /// Shared by all rows of a partition (`static`)
    Static,

    /// Ordinary column
    Regular,

    /// Not mapped to any column (`name` is `-`)
    Ignored,
}

impl Role {
    pub fn is_key(self) -> bool {
        matches!(self, Role::PartitionKey | Role::ClusteringKey)
    }

    pub fn is_ignored(self) -> bool {
        matches!(self, Role::Ignored)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Position of the field in the record declaration.
    pub index: usize,

    /// Rust identifier of the field.
    pub ident: String,

    /// Column name, from the `name` annotation.
    pub column_name: String,

    pub role: Role,

    /// Column type. `None` only for ignored fields, which are never mapped.
    pub ty: Option<Type>,

    /// True when the field can be absent (`Option<T>`).
    pub optional: bool,

    /// True when the field is a homogeneous list (`Vec<T>`).
    pub list: bool,

    /// Byte offset of the field inside the record.
    pub offset: usize,
}

impl FieldDescriptor {
    pub fn is_key(&self) -> bool {
        self.role.is_key()
    }

    pub fn is_ignored(&self) -> bool {
        self.role.is_ignored()
    }

    pub fn is_static(&self) -> bool {
        self.role == Role::Static
    }
}
