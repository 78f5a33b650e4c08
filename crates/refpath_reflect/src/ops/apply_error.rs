use alloc::borrow::Cow;

use thiserror::Error;

use crate::info::{ReflectKind, ReflectKindError};

/// Why [`try_apply`] refused a value.
///
/// [`try_apply`]: crate::Reflect::try_apply
#[derive(Debug, Error)]
pub enum ApplyError {
    /// Same kind, but the types can not be converted into each other.
    #[error("can not apply a `{from_type}` to a `{to_type}`")]
    MismatchedTypes {
        from_type: Cow<'static, str>,
        to_type: Cow<'static, str>,
    },
    /// Different kinds, e.g. a list given to a map.
    #[error("can not apply a {from_kind} value to a {to_kind} value")]
    MismatchedKinds {
        from_kind: ReflectKind,
        to_kind: ReflectKind,
    },
    /// The target is shared and cannot be written through.
    #[error("`{type_path}` is shared and cannot be written through")]
    NotWritable { type_path: Cow<'static, str> },
}

impl From<ReflectKindError> for ApplyError {
    fn from(err: ReflectKindError) -> Self {
        Self::MismatchedKinds {
            from_kind: err.received,
            to_kind: err.expected,
        }
    }
}
