use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Reflect;
use crate::derive::impl_type_path;
use crate::impls::GenericTypeInfoCell;
use crate::info::{ListInfo, TypeInfo, Typed};
use crate::ops::{ApplyError, List, ListItemIter};

impl_type_path!(::alloc::vec::Vec<T>);

impl<T: Reflect + Typed + Default + Clone> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed + Default + Clone> Reflect for Vec<T> {
    crate::reflection::impl_reflect_cast_fn!(List);

    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError> {
        if let Some(value) = value.downcast_ref::<Self>() {
            self.clone_from(value);
            return Ok(());
        }
        crate::impls::list_try_apply(self, value)
    }

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::impls::list_debug(self, f)
    }
}

impl<T: Reflect + Typed + Default + Clone> List for Vec<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(Reflect::as_reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.as_mut_slice().get_mut(index).map(Reflect::as_reflect_mut)
    }

    fn try_push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        let value = value.take::<T>()?;
        Vec::push(self, value);
        Ok(())
    }

    #[inline]
    fn pop(&mut self) -> Option<Box<dyn Reflect>> {
        Vec::pop(self).map(Reflect::into_boxed_reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }

    fn drain(&mut self) -> Vec<Box<dyn Reflect>> {
        Vec::drain(self, ..).map(Reflect::into_boxed_reflect).collect()
    }

    #[inline]
    fn zero_item(&self) -> Box<dyn Reflect> {
        Box::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::List;

    #[test]
    fn type_path_includes_item() {
        assert_eq!(
            <Vec<Option<u8>> as TypePath>::type_path(),
            "alloc::vec::Vec<core::option::Option<u8>>",
        );
        assert_eq!(<Vec<Option<u8>> as TypePath>::type_name(), "Vec<Option<u8>>");
        let info = <Vec<u8> as Typed>::type_info().as_list().unwrap();
        assert!(info.item().is::<u8>());
    }

    #[test]
    fn drain_then_push_rebuilds() {
        let mut values = vec![1_u32, 2, 3];
        let list: &mut dyn List = &mut values;
        let drained = list.drain();
        assert!(list.is_empty());
        for item in drained.into_iter().rev() {
            list.try_push(item).unwrap();
        }
        assert_eq!(values, [3, 2, 1]);
    }

    #[test]
    fn apply_resizes_to_source() {
        let mut target: Vec<Option<u8>> = vec![Some(1), None, Some(3)];
        let source: Vec<u8> = vec![7, 8];
        target.try_apply(&source).unwrap();
        assert_eq!(target, [Some(7), Some(8)]);

        let rejected = (&mut target as &mut dyn List).try_push(Box::new(1_i8));
        assert!(rejected.is_err());
    }
}
