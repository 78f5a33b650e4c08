use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{List, Map, Pointer, Struct};

macro_rules! impl_kind_cast {
    ($name:ident : $kind:ident => $target:ty) => {
        #[doc = concat!("Casts to the `", stringify!($kind), "` subtrait, or returns a kind error.")]
        pub fn $name(self) -> Result<$target, ReflectKindError> {
            match self {
                Self::$kind(value) => Ok(value),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable view of a reflected value, split by [`ReflectKind`].
///
/// Obtained through [`Reflect::reflect_ref`].
///
/// ```
/// use refpath_reflect::{Reflect, ops::ReflectRef};
///
/// let value: Vec<i32> = vec![1, 2];
/// match value.reflect_ref() {
///     ReflectRef::List(list) => assert_eq!(list.len(), 2),
///     _ => unreachable!(),
/// }
/// ```
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Pointer(&'a dyn Pointer),
    Opaque(&'a dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    #[inline]
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the value as a plain `dyn Reflect` again.
    #[inline]
    pub fn into_reflect(self) -> &'a dyn Reflect {
        match self {
            Self::Struct(value) => value,
            Self::List(value) => value,
            Self::Map(value) => value,
            Self::Pointer(value) => value,
            Self::Opaque(value) => value,
        }
    }

    impl_kind_cast!(as_struct: Struct => &'a dyn Struct);
    impl_kind_cast!(as_list: List => &'a dyn List);
    impl_kind_cast!(as_map: Map => &'a dyn Map);
    impl_kind_cast!(as_pointer: Pointer => &'a dyn Pointer);
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable view of a reflected value, split by [`ReflectKind`].
///
/// Obtained through [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
    Pointer(&'a mut dyn Pointer),
    Opaque(&'a mut dyn Reflect),
}

impl<'a> ReflectMut<'a> {
    #[inline]
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the value as a plain `dyn Reflect` again, keeping the full
    /// borrow lifetime.
    #[inline]
    pub fn into_reflect(self) -> &'a mut dyn Reflect {
        match self {
            Self::Struct(value) => value,
            Self::List(value) => value,
            Self::Map(value) => value,
            Self::Pointer(value) => value,
            Self::Opaque(value) => value,
        }
    }

    impl_kind_cast!(as_struct: Struct => &'a mut dyn Struct);
    impl_kind_cast!(as_list: List => &'a mut dyn List);
    impl_kind_cast!(as_map: Map => &'a mut dyn Map);
    impl_kind_cast!(as_pointer: Pointer => &'a mut dyn Pointer);
}
