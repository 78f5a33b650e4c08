use crate::Reflect;
use crate::derive::impl_type_path;
use crate::impls::NonGenericTypeInfoCell;
use crate::impls::utils::impl_simple_type_reflect;
use crate::info::{OpaqueInfo, TypeInfo, Typed};

macro_rules! impl_native_reflect {
    ($($ty:ty),* $(,)?) => {$(
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl Reflect for $ty {
            impl_simple_type_reflect!(Opaque);
        }
    )*};
}

impl_type_path!(bool);
impl_type_path!(i8);
impl_type_path!(i16);
impl_type_path!(i32);
impl_type_path!(i64);
impl_type_path!(i128);
impl_type_path!(isize);
impl_type_path!(u8);
impl_type_path!(u16);
impl_type_path!(u32);
impl_type_path!(u64);
impl_type_path!(u128);
impl_type_path!(usize);
impl_type_path!(f32);
impl_type_path!(f64);
impl_type_path!(::alloc::string::String);

impl_native_reflect!(
    bool,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    alloc::string::String,
);

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};
    use crate::ops::ApplyError;

    #[test]
    fn scalars_are_opaque() {
        assert!(<f64 as Typed>::type_info().is_opaque());
        assert_eq!(1_u8.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(<String as TypePath>::type_path(), "alloc::string::String");
        assert_eq!(<isize as TypePath>::type_path(), "isize");
    }

    #[test]
    fn apply_requires_same_type() {
        let mut value = String::from("a");
        value.try_apply(&String::from("b")).unwrap();
        assert_eq!(value, "b");

        let err = value.try_apply(&1_i32).unwrap_err();
        assert!(matches!(err, ApplyError::MismatchedTypes { .. }));
        assert_eq!(value, "b");
    }
}
