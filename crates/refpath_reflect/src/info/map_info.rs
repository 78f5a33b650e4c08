use crate::Reflect;
use crate::info::{ElementInfo, Type, TypePath, Typed, impl_type_fn};
use crate::ops::Map;

/// Static layout of a key/value map.
///
/// Path access only walks maps keyed by
/// [`String`](alloc::string::String), checked with `key().is::<String>()`.
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    key: ElementInfo,
    value: ElementInfo,
}

impl MapInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<M: Map + TypePath, K: Reflect + Typed, V: Reflect + Typed>() -> Self {
        Self {
            ty: Type::of::<M>(),
            key: ElementInfo::of::<K>(),
            value: ElementInfo::of::<V>(),
        }
    }

    #[inline]
    pub const fn key(&self) -> &ElementInfo {
        &self.key
    }

    #[inline]
    pub const fn value(&self) -> &ElementInfo {
        &self.value
    }
}
