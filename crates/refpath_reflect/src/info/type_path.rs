use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// Stable names of a type, for error messages and logs.
///
/// [`core::any::type_name`] is allowed to change between compiler releases;
/// these strings are fixed by the implementation. `#[derive(Reflect)]` and
/// `impl_type_path!` write them.
///
/// # Examples
///
/// ```
/// use refpath_reflect::info::TypePath;
///
/// assert_eq!(<Vec<u8> as TypePath>::type_path(), "alloc::vec::Vec<u8>");
/// assert_eq!(<Vec<u8> as TypePath>::type_name(), "Vec<u8>");
/// assert_eq!(<Option<String> as TypePath>::type_name(), "Option<String>");
/// ```
pub trait TypePath: 'static {
    /// Module path, name and generic arguments.
    fn type_path() -> &'static str;

    /// Name and generic arguments, without the module path.
    fn type_name() -> &'static str;
}

/// [`TypePath`] through a value, usable on trait objects.
pub trait DynamicTypePath {
    fn reflect_type_path(&self) -> &'static str;

    fn reflect_type_name(&self) -> &'static str;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        T::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        T::type_name()
    }
}

// -----------------------------------------------------------------------------
// Type

/// The identity of a reflected type: its [`TypeId`] and its names.
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: fn() -> &'static str,
    name: fn() -> &'static str,
}

impl Type {
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: T::type_path,
            name: T::type_name,
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    #[inline]
    pub fn path(&self) -> &'static str {
        (self.path)()
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        (self.name)()
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Forwards the [`Type`] accessors of an info struct.
///
/// `impl_type_fn!(field)` also defines `ty()` returning that field; without
/// an argument the surrounding type must provide `ty()` itself.
macro_rules! impl_type_fn {
    ($field:ident) => {
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        $crate::info::impl_type_fn!();
    };
    () => {
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.ty().is::<T>()
        }

        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.ty().name()
        }
    };
}

pub(crate) use impl_type_fn;

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::Type;

    #[test]
    fn type_knows_its_names() {
        let ty = Type::of::<Vec<String>>();
        assert!(ty.is::<Vec<String>>());
        assert!(!ty.is::<Vec<u8>>());
        assert_eq!(ty.path(), "alloc::vec::Vec<alloc::string::String>");
        assert_eq!(ty.name(), "Vec<String>");
        assert_eq!(alloc::format!("{ty:?}"), ty.path());
    }
}
