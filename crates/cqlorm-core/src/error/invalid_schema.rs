use super::Error;

/// Error when a record's schema definition is invalid.
///
/// This occurs when:
/// - A `name` annotation is empty
/// - An ignored field carries `cql` tokens
/// - A `cql` token is unknown, or `pk`, `ck` and `static` are combined
/// - A record has no partition key or repeats a column name
///
/// These errors are raised while cataloguing a record type, before any
/// statement is emitted.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidSchema(_)))
    }
}
