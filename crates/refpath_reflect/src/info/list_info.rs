use crate::Reflect;
use crate::info::{ElementInfo, Type, TypePath, Typed, impl_type_fn};
use crate::ops::List;

/// Static layout of a growable sequence.
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    item: ElementInfo,
}

impl ListInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<L: List + TypePath, I: Reflect + Typed>() -> Self {
        Self {
            ty: Type::of::<L>(),
            item: ElementInfo::of::<I>(),
        }
    }

    /// Type of every item.
    #[inline]
    pub const fn item(&self) -> &ElementInfo {
        &self.item
    }
}
