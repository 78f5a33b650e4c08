use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{DynamicTypePath, DynamicTyped, TypePath, Typed};
use crate::info::{OpaqueInfo, ReflectKind, TypeInfo};
use crate::ops::{ApplyError, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The base trait of every reflected type.
///
/// A reflected type knows its [`TypeInfo`], exposes its shape through
/// [`reflect_ref`](Reflect::reflect_ref) / [`reflect_mut`](Reflect::reflect_mut),
/// and can produce its zero value ([`reset`](Reflect::reset)) and deep copies
/// ([`reflect_clone`](Reflect::reflect_clone)). Those two are what path writes
/// need to allocate missing links and copy map entries out and back.
///
/// Implement it with `#[derive(Reflect)]`; the crate provides implementations
/// for numbers, `bool`, `String`, `Vec`, the common maps, `Option`, `Box`
/// and `Arc`.
///
/// # Examples
///
/// ```
/// use refpath_reflect::{Reflect, info::ReflectKind};
///
/// let mut value: Box<dyn Reflect> = Box::new(7_u16);
/// assert_eq!(value.reflect_kind(), ReflectKind::Opaque);
/// assert_eq!(value.reflect_type_path(), "u16");
///
/// value.try_apply(&9_u16).unwrap();
/// assert_eq!(value.downcast_ref::<u16>(), Some(&9));
///
/// value.reset();
/// assert_eq!(value.take::<u16>().unwrap(), 0);
/// ```
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts a boxed value to a boxed reflected value.
    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as a reflected value.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Replaces `self` with `value` if it holds the same type.
    ///
    /// Returns `value` unchanged otherwise.
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the [`ReflectKind`] of this value.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable view split by kind.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable view split by kind.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Replaces `self` with the zero value of its type.
    ///
    /// For optional references this clears the link; for owning references
    /// it replaces the target.
    fn reset(&mut self);

    /// Overwrites `self` with the contents of `value`.
    ///
    /// Same-type values are cloned over. Otherwise the value is applied by
    /// shape: sequences and maps element by element, pointers through their
    /// targets. Records only accept records of their own type.
    ///
    /// On error `self` may be partially updated.
    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError>;

    /// Returns a deep copy of this value.
    ///
    /// Shared references such as `Arc` are copied into a fresh allocation,
    /// so editing the copy never aliases the original.
    fn reflect_clone(&self) -> Box<dyn Reflect>;

    /// Debug formatter for the value.
    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::List(data) => impls::list_debug(data, f),
            ReflectRef::Map(data) => impls::map_debug(data, f),
            ReflectRef::Pointer(data) => impls::pointer_debug(data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts a boxed value, returning the box unchanged on mismatch.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        match any.downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type is already checked"),
        }
    }

    /// Downcasts and unboxes a value, returning the box unchanged on mismatch.
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl TypePath for dyn Reflect {
    #[inline]
    fn type_path() -> &'static str {
        "dyn refpath_reflect::Reflect"
    }

    #[inline]
    fn type_name() -> &'static str {
        "dyn Reflect"
    }
}

impl Typed for dyn Reflect {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements the kind-dependent methods of [`Reflect`] plus `set` and `reset`.
///
/// The type must implement `Default`.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }

        #[inline]
        fn reset(&mut self) {
            *self = <Self as ::core::default::Default>::default();
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::Reflect;

    #[test]
    fn downcast_keeps_box_on_mismatch() {
        let value: Box<dyn Reflect> = Box::new(String::from("x"));
        let value = value.downcast::<u8>().unwrap_err();
        assert_eq!(value.take::<String>().unwrap(), "x");
    }

    #[test]
    fn set_replaces_same_type_only() {
        let mut value = 1_i32;
        assert!(value.set(Box::new(5_i32)).is_ok());
        assert_eq!(value, 5);
        assert!(value.set(Box::new(5_i64)).is_err());
    }

    #[test]
    fn debug_goes_through_reflect_debug() {
        let value: Box<dyn Reflect> = Box::new(alloc::vec![1_u8, 2]);
        assert_eq!(alloc::format!("{value:?}"), "[1, 2]");
    }
}
