use crate::stmt::{FieldSlot, Value};

/// A record type that maps onto one table.
///
/// Usually implemented with `#[derive(Model)]`. The default value is the
/// zero-initialized instance rows are scanned into.
pub trait Record: Default + 'static {
    /// Simple name of the record type. The table name is its lowercase form.
    const NAME: &'static str;

    /// Field declarations in declaration order.
    fn fields() -> Vec<FieldDecl>;

    /// Current field values in declaration order. Ignored fields yield
    /// [`Value::Null`].
    fn values(&self) -> Vec<Value>;

    /// Writable slots for every field that is not ignored.
    fn slots(&mut self) -> Vec<FieldSlot<'_>>;
}

/// The raw declaration of one record field: identifier, annotations, type
/// name and layout offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    pub ident: &'static str,

    /// The `name` annotation. The identifier is used when absent.
    pub name: Option<&'static str>,

    /// The `cql` annotation, empty when absent.
    pub cql: &'static str,

    /// Type name as reported by `core::any::type_name`.
    pub ty: &'static str,

    pub offset: usize,
}

impl FieldDecl {
    pub const fn new(ident: &'static str, ty: &'static str, offset: usize) -> FieldDecl {
        FieldDecl {
            ident,
            name: None,
            cql: "",
            ty,
            offset,
        }
    }

    pub const fn name(mut self, name: &'static str) -> FieldDecl {
        self.name = Some(name);
        self
    }

    pub const fn cql(mut self, cql: &'static str) -> FieldDecl {
        self.cql = cql;
        self
    }
}
