use alloc::boxed::Box;

use crate::Reflect;
use crate::derive::impl_type_path;
use crate::impls::GenericTypeInfoCell;
use crate::info::{PointerInfo, TypeInfo, Typed};
use crate::ops::{ApplyError, Pointer};

impl_type_path!(::core::option::Option<T>);

impl<T: Reflect + Typed + Default + Clone> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>(true)))
    }
}

/// `None` is the null pointer; the zero value of an `Option` is `None`.
impl<T: Reflect + Typed + Default + Clone> Reflect for Option<T> {
    crate::reflection::impl_reflect_cast_fn!(Pointer);

    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError> {
        if let Some(value) = value.downcast_ref::<Self>() {
            self.clone_from(value);
            return Ok(());
        }
        crate::impls::pointer_try_apply(self, value)
    }

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }
}

impl<T: Reflect + Typed + Default + Clone> Pointer for Option<T> {
    #[inline]
    fn target(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(Reflect::as_reflect)
    }

    #[inline]
    fn target_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn target_or_insert_default(&mut self) -> Option<&mut dyn Reflect> {
        Some(self.get_or_insert_with(T::default))
    }

    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::Typed;
    use crate::ops::Pointer;

    #[test]
    fn insert_default_allocates_once() {
        let mut value: Option<Box<String>> = None;
        assert!(value.is_null());

        value
            .target_or_insert_default()
            .unwrap()
            .try_apply(&String::from("x"))
            .unwrap();
        assert_eq!(value.as_deref().map(String::as_str), Some("x"));

        value.target_or_insert_default().unwrap();
        assert_eq!(value.as_deref().map(String::as_str), Some("x"));
    }

    #[test]
    fn pointee_skips_every_layer() {
        let info = <Option<Box<u32>> as Typed>::type_info();
        assert!(info.is_pointer());
        assert!(info.pointee().ty().is::<u32>());
    }

    #[test]
    fn applying_none_resets() {
        let mut value = Some(3_i32);
        value.try_apply(&None::<i32>).unwrap();
        assert_eq!(value, None);

        value.try_apply(&5_i32).unwrap();
        assert_eq!(value, Some(5));
    }
}
