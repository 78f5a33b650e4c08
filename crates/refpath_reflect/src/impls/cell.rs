//! Containers for static storage of type information.
//!
//! These back the `type_info` and `type_path` implementations.
//!
//! - [`NonGenericTypeInfoCell`] stores a single [`TypeInfo`] in a [`OnceLock`].
//! - [`GenericTypeInfoCell`] and [`GenericTypePathCell`] serve generic types, where
//!   one `static` inside a generic function is shared by every instantiation.
//!   They hold a [`TypeIdMap`] behind a [`RwLock`] and leak one value per type.

use alloc::{boxed::Box, string::String};
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use refpath_utils::TypeIdMap;

use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;
    use alloc::string::String;

    pub trait TypedProperty: 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

// -----------------------------------------------------------------------------
// NonGenericTypeCell

/// A cell for the static data of one non-generic type.
///
/// # Examples
///
/// ```
/// use refpath_reflect::impls::NonGenericTypeInfoCell;
/// use refpath_reflect::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
///
/// struct Token;
///
/// impl TypePath for Token {
///     fn type_path() -> &'static str { "demo::Token" }
///     fn type_name() -> &'static str { "Token" }
/// }
///
/// impl Typed for Token {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(Token::type_info().type_is::<Token>());
/// ```
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// See [`NonGenericTypeCell`].
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored value, initializing it with `f` on first use.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeCell

/// A cell for the static data of every instantiation of a generic type.
///
/// `f` runs outside the lock, so building one type's info may look up the
/// info of another type through the same cell.
///
/// # Examples
///
/// ```
/// use refpath_reflect::impls::GenericTypePathCell;
///
/// fn path_of<T: 'static>(name: &str) -> &'static str {
///     static CELL: GenericTypePathCell = GenericTypePathCell::new();
///     CELL.get_or_insert::<T>(|| format!("demo::Wrapper<{name}>"))
/// }
///
/// assert_eq!(path_of::<u8>("u8"), "demo::Wrapper<u8>");
/// // The first value stored for a type wins.
/// assert_eq!(path_of::<u8>("other"), "demo::Wrapper<u8>");
/// assert_eq!(path_of::<u16>("u16"), "demo::Wrapper<u16>");
/// ```
pub struct GenericTypeCell<T: TypedProperty>(RwLock<TypeIdMap<&'static T>>);

/// See [`GenericTypeCell`].
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// See [`GenericTypeCell`].
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the value stored for `G`, inserting the result of `f` if absent.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &'static T {
        let mut map = self.0.write().unwrap_or_else(PoisonError::into_inner);
        *map.get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}
