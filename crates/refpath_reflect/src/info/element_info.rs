use core::any::{Any, TypeId};

use crate::info::{TypeInfo, Typed};

/// The static type of a value held by another: a list item, a map key or
/// value, a pointer target or a record field.
///
/// The [`TypeInfo`] is looked up on demand, so a record can hold itself
/// through a sequence or pointer.
#[derive(Clone, Copy, Debug)]
pub struct ElementInfo {
    id: TypeId,
    info: fn() -> &'static TypeInfo,
}

impl ElementInfo {
    pub const fn of<T: Typed>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            info: T::type_info,
        }
    }

    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Whether the element is exactly `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    #[inline]
    pub fn info(&self) -> &'static TypeInfo {
        (self.info)()
    }
}
