use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

use thiserror::Error;

use crate::ops::ApplyError;

// -----------------------------------------------------------------------------
// Error

/// Category of an [`AccessError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A record has no field with the requested name.
    NoSuchField,
    /// A bracket step is malformed, or not accepted by the container.
    InvalidIndex,
    /// A map on the path is not keyed by `String`.
    InvalidKeyType,
    /// Text could not be parsed into the target scalar.
    InvalidValue,
    /// Text or bytes were written to a non-scalar value.
    UnsupportedAssignment,
    /// A link that has to be written through is shared.
    RootNotWritable,
    /// A value was written to storage of an incompatible type.
    MismatchedTypes,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoSuchField => "NoSuchField",
            Self::InvalidIndex => "InvalidIndex",
            Self::InvalidKeyType => "InvalidKeyType",
            Self::InvalidValue => "InvalidValue",
            Self::UnsupportedAssignment => "UnsupportedAssignment",
            Self::RootNotWritable => "RootNotWritable",
            Self::MismatchedTypes => "MismatchedTypes",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The error returned by every path operation.
///
/// ```
/// use refpath_reflect::access::{self, ErrorKind};
///
/// let err = access::get(&0_u8, "Name").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NoSuchField);
/// assert_eq!(err.path(), "Name");
/// assert_eq!(err.to_string(), "NoSuchField at `Name`: `u8` has no field `Name`");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind} at `{path}`: {message}")]
pub struct AccessError {
    kind: ErrorKind,
    path: String,
    message: Cow<'static, str>,
}

impl AccessError {
    /// Creates an error whose path is filled in by the public entry point.
    #[inline]
    pub(crate) fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            path: String::new(),
            message: message.into(),
        }
    }

    #[inline]
    pub(crate) fn with_path(mut self, path: &str) -> Self {
        if self.path.is_empty() {
            self.path.push_str(path);
        }
        self
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The full path given to the failed operation.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ApplyError> for AccessError {
    fn from(value: ApplyError) -> Self {
        let kind = match value {
            ApplyError::NotWritable { .. } => ErrorKind::RootNotWritable,
            _ => ErrorKind::MismatchedTypes,
        };
        Self::new(kind, alloc::format!("{value}"))
    }
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::string::ToString;

    use super::{AccessError, ErrorKind};
    use crate::ops::ApplyError;

    #[test]
    fn path_is_set_once() {
        let err = AccessError::new(ErrorKind::InvalidIndex, "bad")
            .with_path("A[x]")
            .with_path("ignored");
        assert_eq!(err.path(), "A[x]");
        assert_eq!(err.to_string(), "InvalidIndex at `A[x]`: bad");
    }

    #[test]
    fn shared_links_are_not_writable() {
        let err = AccessError::from(ApplyError::NotWritable {
            type_path: Cow::Borrowed("alloc::sync::Arc<u8>"),
        });
        assert_eq!(err.kind(), ErrorKind::RootNotWritable);
    }
}
