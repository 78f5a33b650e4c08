use alloc::borrow::Cow;
use core::fmt;

use crate::Reflect;
use crate::ops::{ApplyError, ReflectRef};
use crate::ops::{List, Map, Pointer, Struct};

// -----------------------------------------------------------------------------
// Names

/// Compares two names under Unicode case folding.
///
/// ```
/// use refpath_reflect::impls::eq_ignore_case;
///
/// assert!(eq_ignore_case("Departments", "departments"));
/// assert!(eq_ignore_case("ÉCOLE", "école"));
/// assert!(!eq_ignore_case("Name", "Names"));
/// ```
pub fn eq_ignore_case(x: &str, y: &str) -> bool {
    if x.len() == y.len() && x.eq_ignore_ascii_case(y) {
        return true;
    }
    x.chars()
        .flat_map(char::to_lowercase)
        .eq(y.chars().flat_map(char::to_lowercase))
}

fn mismatched(from: &dyn Reflect, to: &dyn Reflect) -> ApplyError {
    ApplyError::MismatchedTypes {
        from_type: Cow::Borrowed(from.reflect_type_path()),
        to_type: Cow::Borrowed(to.reflect_type_path()),
    }
}

// -----------------------------------------------------------------------------
// Struct

/// Applies `y` to the record `x` field by field.
///
/// Both records must be of the same type; records of different types are
/// never assignable to each other, even if their field names overlap.
///
/// ```ignore
/// fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError> {
///     struct_try_apply(self, value)
/// }
/// ```
#[inline(never)]
pub fn struct_try_apply(x: &mut dyn Struct, y: &dyn Reflect) -> Result<(), ApplyError> {
    if x.ty_id() != y.ty_id() {
        return Err(mismatched(y, &*x));
    }
    let y = y.reflect_ref().as_struct()?;

    for (idx, y_field) in y.iter_fields().enumerate() {
        if let Some(field) = x.field_at_mut(idx) {
            field.try_apply(y_field)?;
        }
    }
    Ok(())
}

#[inline(never)]
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_name());

    for (index, field) in dyn_struct.iter_fields().enumerate() {
        let name = dyn_struct.name_at(index).unwrap_or("?");
        debug.field(name, &field as &dyn fmt::Debug);
    }
    debug.finish()
}

// -----------------------------------------------------------------------------
// List

/// Applies `y` to the sequence `x` element by element.
///
/// Existing elements are applied in place, missing ones are created from the
/// zero element and surplus ones are dropped, so `x` ends with `y`'s length.
#[inline(never)]
pub fn list_try_apply(x: &mut dyn List, y: &dyn Reflect) -> Result<(), ApplyError> {
    let y = y.reflect_ref().as_list()?;

    for (idx, y_item) in y.iter().enumerate() {
        if let Some(item) = x.get_mut(idx) {
            item.try_apply(y_item)?;
            continue;
        }
        let mut item = x.zero_item();
        item.try_apply(y_item)?;
        if let Err(item) = x.try_push(item) {
            return Err(mismatched(&*item, &*x));
        }
    }

    while x.len() > y.len() {
        x.pop();
    }
    Ok(())
}

#[inline(never)]
pub fn list_debug(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_list.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

// -----------------------------------------------------------------------------
// Map

/// Applies `y` to the map `x` entry by entry.
///
/// Shared keys are applied in place, new keys are inserted and keys missing
/// from `y` are removed.
#[inline(never)]
pub fn map_try_apply(x: &mut dyn Map, y: &dyn Reflect) -> Result<(), ApplyError> {
    let y = y.reflect_ref().as_map()?;

    for (key, y_value) in y.iter() {
        if let Some(value) = x.get_mut(key) {
            value.try_apply(y_value)?;
            continue;
        }
        let mut value = x.zero_value();
        value.try_apply(y_value)?;
        if let Err((key, _)) = x.try_insert(key.reflect_clone(), value) {
            return Err(mismatched(&*key, &*x));
        }
    }

    x.retain(&mut |key, _| y.get(key).is_some());
    Ok(())
}

#[inline(never)]
pub fn map_debug(dyn_map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_map();
    for (key, value) in dyn_map.iter() {
        debug.entry(&key as &dyn fmt::Debug, &value as &dyn fmt::Debug);
    }
    debug.finish()
}

// -----------------------------------------------------------------------------
// Pointer

/// Applies `y` to the pointer `x` through its target.
///
/// A null pointer `y` resets `x`. Any other value is applied to the target of
/// `x`, allocating it first if absent. A failed write leaves a null `x` null.
#[inline(never)]
pub fn pointer_try_apply(x: &mut dyn Pointer, y: &dyn Reflect) -> Result<(), ApplyError> {
    if let ReflectRef::Pointer(y) = y.reflect_ref() {
        return match y.target() {
            Some(target) => pointer_try_apply(x, target),
            None => {
                x.reset();
                Ok(())
            }
        };
    }

    let was_null = x.is_null();
    let type_path = x.reflect_type_path();
    let result = match x.target_or_insert_default() {
        Some(target) => target.try_apply(y),
        None => {
            return Err(ApplyError::NotWritable {
                type_path: Cow::Borrowed(type_path),
            });
        }
    };
    if result.is_err() && was_null {
        x.reset();
    }
    result
}

/// Formats the target of a pointer, or `None` when absent.
#[inline(never)]
pub fn pointer_debug(dyn_pointer: &dyn Pointer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_pointer.target() {
        Some(target) => target.reflect_debug(f),
        None => f.write_str("None"),
    }
}
