use super::Error;

/// Error when a field type has no CQL column mapping (maps, nested records,
/// structs other than the timestamp type).
#[derive(Debug)]
pub(super) struct InvalidType {
    type_name: Box<str>,
}

impl std::error::Error for InvalidType {}

impl core::fmt::Display for InvalidType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid type: `{}` has no CQL column mapping", self.type_name)
    }
}

impl Error {
    /// Creates an invalid type error for the given source type name.
    pub fn invalid_type(type_name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidType(InvalidType {
            type_name: type_name.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid type error.
    pub fn is_invalid_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidType(_)))
    }
}
