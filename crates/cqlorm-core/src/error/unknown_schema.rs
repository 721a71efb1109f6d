use super::Error;

/// Error when an operation targets a record type that was never catalogued.
#[derive(Debug)]
pub(super) struct UnknownSchema {
    type_name: Box<str>,
}

impl std::error::Error for UnknownSchema {}

impl core::fmt::Display for UnknownSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown schema: `{}` was never catalogued", self.type_name)
    }
}

impl Error {
    /// Creates an unknown schema error.
    pub fn unknown_schema(type_name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownSchema(UnknownSchema {
            type_name: type_name.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown schema error.
    pub fn is_unknown_schema(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnknownSchema(_)))
    }
}
