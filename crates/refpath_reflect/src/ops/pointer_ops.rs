use crate::Reflect;

/// Runtime access to a reference holding at most one target.
///
/// Implemented for [`Option<T>`], [`Box<T>`](alloc::boxed::Box) and
/// [`Arc<T>`](alloc::sync::Arc). A `Box` is never null; an `Arc` is never null
/// but only writable while it is not shared.
///
/// # Examples
///
/// ```
/// use refpath_reflect::{Reflect, ops::Pointer};
///
/// let mut slot: Option<Box<u8>> = None;
/// assert!(slot.is_null());
///
/// let target = slot.target_or_insert_default().unwrap();
/// // The outer link was allocated; the inner `Box` is the new target.
/// assert!(target.downcast_ref::<Box<u8>>().is_some());
/// assert_eq!(slot, Some(Box::new(0)));
/// ```
pub trait Pointer: Reflect {
    /// Returns the target, or `None` if absent.
    fn target(&self) -> Option<&dyn Reflect>;

    /// Returns the target for writing.
    ///
    /// `None` if absent or if the target cannot be written through this link.
    fn target_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Returns the target for writing, storing the zero value first if absent.
    ///
    /// `None` only if the target cannot be written through this link.
    fn target_or_insert_default(&mut self) -> Option<&mut dyn Reflect>;

    /// Whether the target is absent.
    #[inline]
    fn is_null(&self) -> bool {
        self.target().is_none()
    }
}
