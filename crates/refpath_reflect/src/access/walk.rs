//! Link following and error helpers shared by the path operations.

use alloc::format;
use alloc::string::String;

use crate::Reflect;
use crate::access::{AccessError, ErrorKind, Step, StepKind};
use crate::info::MapInfo;
use crate::ops::{Map, ReflectMut, ReflectRef, Struct};

// -----------------------------------------------------------------------------
// Links

/// Follows pointer links to the first non-pointer value.
///
/// `None` at the first null link.
pub(crate) fn deref(value: &dyn Reflect) -> Option<&dyn Reflect> {
    match value.reflect_ref() {
        ReflectRef::Pointer(pointer) => deref(pointer.target()?),
        _ => Some(value),
    }
}

/// Mutable [`deref`], never allocating.
pub(crate) fn deref_mut(value: &mut dyn Reflect) -> Result<Option<&mut dyn Reflect>, AccessError> {
    match value.reflect_mut() {
        ReflectMut::Pointer(pointer) => {
            if pointer.is_null() {
                return Ok(None);
            }
            let type_path = pointer.reflect_type_path();
            match pointer.target_mut() {
                Some(target) => deref_mut(target),
                None => Err(shared(type_path)),
            }
        }
        other => Ok(Some(other.into_reflect())),
    }
}

/// Follows pointer links, allocating the default target of every null one.
pub(crate) fn vivify(value: &mut dyn Reflect) -> Result<&mut dyn Reflect, AccessError> {
    match value.reflect_mut() {
        ReflectMut::Pointer(pointer) => {
            let type_path = pointer.reflect_type_path();
            if pointer.is_null() {
                log::trace!("allocating the target of an empty `{type_path}`");
            }
            match pointer.target_or_insert_default() {
                Some(target) => vivify(target),
                None => Err(shared(type_path)),
            }
        }
        other => Ok(other.into_reflect()),
    }
}

/// Whether `value` is in its empty state.
///
/// Only pointers, sequences and maps have one: a null pointer, an empty
/// sequence and an empty map are nil. Scalars and records never are.
///
/// ```
/// use refpath_reflect::access::is_nil;
///
/// assert!(is_nil(&None::<u8>));
/// assert!(is_nil(&Vec::<u8>::new()));
/// assert!(!is_nil(&Some(0_u8)));
/// assert!(!is_nil(&0_u8));
/// ```
pub fn is_nil(value: &dyn Reflect) -> bool {
    match value.reflect_ref() {
        ReflectRef::Pointer(pointer) => pointer.is_null(),
        ReflectRef::List(list) => list.is_empty(),
        ReflectRef::Map(map) => map.is_empty(),
        ReflectRef::Struct(_) | ReflectRef::Opaque(_) => false,
    }
}

// -----------------------------------------------------------------------------
// Containers

/// Resolves a field step against a record.
pub(crate) fn field_index(record: &dyn Struct, step: &Step<'_>) -> Result<usize, AccessError> {
    if step.kind != StepKind::Field {
        return Err(not_indexable(step, record));
    }
    record
        .index_of_ignore_case(step.token)
        .ok_or_else(|| no_such_field(record.reflect_type_path(), step.token))
}

/// Fails unless the map's keys are `String`s.
pub(crate) fn string_keyed(map: &dyn Map) -> Result<(), AccessError> {
    match map.reflect_type_info().as_map() {
        Ok(info) => string_keyed_info(info),
        Err(_) => Err(invalid_key_type(map.reflect_type_path())),
    }
}

pub(crate) fn string_keyed_info(info: &MapInfo) -> Result<(), AccessError> {
    if info.key().is::<String>() {
        Ok(())
    } else {
        Err(invalid_key_type(info.type_path()))
    }
}

/// The key addressed by a map step.
pub(crate) fn map_key(step: &Step<'_>) -> Result<String, AccessError> {
    match step.kind {
        StepKind::Append => Err(AccessError::new(
            ErrorKind::InvalidIndex,
            "`[]` cannot address a map entry",
        )),
        _ => Ok(String::from(step.token)),
    }
}

/// The index addressed by a sequence step.
pub(crate) fn list_index(step: &Step<'_>, list: &dyn Reflect) -> Result<usize, AccessError> {
    step.index().ok_or_else(|| not_indexable(step, list))
}

// -----------------------------------------------------------------------------
// Errors

pub(crate) fn no_such_field(type_path: &str, name: &str) -> AccessError {
    AccessError::new(
        ErrorKind::NoSuchField,
        format!("`{type_path}` has no field `{name}`"),
    )
}

fn not_indexable(step: &Step<'_>, value: &dyn Reflect) -> AccessError {
    AccessError::new(
        ErrorKind::InvalidIndex,
        format!("`{step}` cannot address a `{}`", value.reflect_type_path()),
    )
}

/// A step left over at a value that has no children.
pub(crate) fn unexpected_step(step: &Step<'_>, value: &dyn Reflect) -> AccessError {
    match step.kind {
        StepKind::Field => no_such_field(value.reflect_type_path(), step.token),
        _ => not_indexable(step, value),
    }
}

fn invalid_key_type(type_path: &str) -> AccessError {
    AccessError::new(
        ErrorKind::InvalidKeyType,
        format!("`{type_path}` is not keyed by `String`"),
    )
}

fn shared(type_path: &str) -> AccessError {
    AccessError::new(
        ErrorKind::RootNotWritable,
        format!("`{type_path}` is shared and cannot be written through"),
    )
}

pub(crate) fn mismatched(message: String) -> AccessError {
    AccessError::new(ErrorKind::MismatchedTypes, message)
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::sync::Arc;

    use super::{deref, deref_mut, vivify};
    use crate::access::ErrorKind;

    #[test]
    fn deref_stops_at_null() {
        let value: Option<Box<Option<u8>>> = Some(Box::new(None));
        assert!(deref(&value).is_none());

        let value = Some(Box::new(Some(4_u8)));
        assert_eq!(deref(&value).unwrap().downcast_ref::<u8>(), Some(&4));
    }

    #[test]
    fn vivify_allocates_every_link() {
        let mut value: Option<Box<Option<u8>>> = None;
        *vivify(&mut value).unwrap().downcast_mut::<u8>().unwrap() = 9;
        assert_eq!(value, Some(Box::new(Some(9))));
    }

    #[test]
    fn shared_arc_blocks_writes() {
        let mut value = Arc::new(Some(1_u8));
        let _other = Arc::clone(&value);

        assert!(deref(&value).is_some());
        let err = vivify(&mut value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RootNotWritable);
        let err = deref_mut(&mut value).map(|_| ()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RootNotWritable);
    }

    #[test]
    fn deref_mut_does_not_allocate() {
        let mut value: Option<u8> = None;
        assert!(deref_mut(&mut value).unwrap().is_none());
        assert!(value.is_none());
    }
}
