use alloc::boxed::Box;

use crate::Reflect;
use crate::derive::impl_type_path;
use crate::impls::GenericTypeInfoCell;
use crate::info::{PointerInfo, TypeInfo, Typed};
use crate::ops::{ApplyError, Pointer};

impl_type_path!(::alloc::boxed::Box<T>);

impl<T: Reflect + Typed + Default + Clone> Typed for Box<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>(false)))
    }
}

impl<T: Reflect + Typed + Default + Clone> Reflect for Box<T> {
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

impl<T: Reflect + Typed + Default + Clone> Pointer for Box<T> {
    #[inline]
    fn target(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }

    #[inline]
    fn target_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(&mut **self)
    }

    #[inline]
    fn target_or_insert_default(&mut self) -> Option<&mut dyn Reflect> {
        Some(&mut **self)
    }

    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}
