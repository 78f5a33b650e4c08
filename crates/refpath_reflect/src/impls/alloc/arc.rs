use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::Reflect;
use crate::derive::impl_type_path;
use crate::impls::GenericTypeInfoCell;
use crate::info::{PointerInfo, TypeInfo, Typed};
use crate::ops::{ApplyError, Pointer};

impl_type_path!(::alloc::sync::Arc<T>);

impl<T: Reflect + Typed + Default + Clone> Typed for Arc<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>(false)))
    }
}

// Copies always allocate a fresh `Arc`, so writes through a copy never need
// to go through a shared target.
impl<T: Reflect + Typed + Default + Clone> Reflect for Arc<T> {
    crate::reflection::impl_reflect_cast_fn!(Pointer);

    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError> {
        if let Some(value) = value.downcast_ref::<Self>() {
            *self = Arc::new(T::clone(value));
            return Ok(());
        }
        crate::impls::pointer_try_apply(self, value)
    }

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(Arc::new(T::clone(self)))
    }
}

/// The target is writable only while this is the sole strong reference.
impl<T: Reflect + Typed + Default + Clone> Pointer for Arc<T> {
    #[inline]
    fn target(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }

    #[inline]
    fn target_mut(&mut self) -> Option<&mut dyn Reflect> {
        Arc::get_mut(self).map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn target_or_insert_default(&mut self) -> Option<&mut dyn Reflect> {
        Arc::get_mut(self).map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::sync::Arc;

    use crate::Reflect;
    use crate::ops::{ApplyError, Pointer};

    #[test]
    fn shared_arc_is_read_only() {
        let mut value = Arc::new(String::from("a"));
        assert!(value.target_mut().is_some());

        let other = Arc::clone(&value);
        assert!(value.target_mut().is_none());
        let err = value.try_apply(&String::from("b")).unwrap_err();
        assert!(matches!(err, ApplyError::NotWritable { .. }));
        assert_eq!(*other, "a");
    }

    #[test]
    fn clone_does_not_share() {
        let value = Arc::new(7_u8);
        let copy = value.reflect_clone().take::<Arc<u8>>().unwrap();
        assert_eq!(Arc::strong_count(&value), 1);
        assert_eq!(*copy, 7);
    }
}
