use crate::Reflect;
use crate::info::{ElementInfo, Type, TypePath, Typed, impl_type_fn};
use crate::ops::Pointer;

/// Static layout of a reference to a single target, such as `Option<T>`,
/// `Box<T>` or `Arc<T>`.
#[derive(Clone, Debug)]
pub struct PointerInfo {
    ty: Type,
    nullable: bool,
    target: ElementInfo,
}

impl PointerInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<P: Pointer + TypePath, T: Reflect + Typed>(nullable: bool) -> Self {
        Self {
            ty: Type::of::<P>(),
            nullable,
            target: ElementInfo::of::<T>(),
        }
    }

    /// Whether values of this type can be absent.
    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    #[inline]
    pub const fn target(&self) -> &ElementInfo {
        &self.target
    }
}
