use core::fmt;

use thiserror::Error;

use crate::info::{ListInfo, MapInfo, OpaqueInfo, PointerInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// The runtime shape of a reflected type.
///
/// Path steps dispatch on this: records take field names, lists take indices
/// or the append marker, maps take string keys, pointers are looked through
/// and opaque values terminate a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// A record with named fields, see [`Struct`](crate::ops::Struct).
    Struct,
    /// A growable sequence, see [`List`](crate::ops::List).
    List,
    /// A key/value map, see [`Map`](crate::ops::Map).
    Map,
    /// An optional or owning reference, see [`Pointer`](crate::ops::Pointer).
    Pointer,
    /// A scalar or any other value without inner structure.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
            Self::Pointer => f.pad("Pointer"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Returned by the `as_*` casts of [`TypeInfo`] and [`ReflectRef`] when the
/// kinds differ.
///
/// [`ReflectRef`]: crate::ops::ReflectRef
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected a {expected} value, found a {received} value")]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time shape of a reflected type.
///
/// Obtained through [`Typed::type_info`](crate::info::Typed::type_info) or
/// [`DynamicTyped::reflect_type_info`](crate::info::DynamicTyped::reflect_type_info).
///
/// # Examples
///
/// ```
/// use refpath_reflect::info::{ReflectKind, Typed};
///
/// let info = <Vec<Option<String>> as Typed>::type_info();
/// assert_eq!(info.kind(), ReflectKind::List);
///
/// let item = info.as_list().unwrap().item().info();
/// assert_eq!(item.kind(), ReflectKind::Pointer);
/// assert!(item.as_pointer().unwrap().target().is::<String>());
/// ```
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    List(ListInfo),
    Map(MapInfo),
    Pointer(PointerInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the [`", stringify!($info), "`], or an error if this is another kind.")]
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

macro_rules! impl_is_method {
    ($name:ident : $kind:ident) => {
        #[inline]
        pub const fn $name(&self) -> bool {
            matches!(self, Self::$kind(..))
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    impl_is_method!(is_struct: Struct);
    impl_is_method!(is_list: List);
    impl_is_method!(is_map: Map);
    impl_is_method!(is_pointer: Pointer);
    impl_is_method!(is_opaque: Opaque);

    /// The [`Type`] this info describes.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Pointer(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// The [`ReflectKind`] matching this info.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Follows [`Pointer`](TypeInfo::Pointer) infos down to the first
    /// non-pointer target.
    ///
    /// ```
    /// use refpath_reflect::info::Typed;
    ///
    /// let info = <Option<Box<u32>> as Typed>::type_info();
    /// assert!(info.pointee().type_is::<u32>());
    /// ```
    pub fn pointee(&'static self) -> &'static TypeInfo {
        match self {
            Self::Pointer(pointer) => pointer.target().info().pointee(),
            _ => self,
        }
    }
}
