use crate::info::{ElementInfo, Typed};

/// A named field of a record.
#[derive(Clone, Debug)]
pub struct NamedField {
    name: &'static str,
    element: ElementInfo,
}

impl NamedField {
    /// Describes a field `name` of type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            element: ElementInfo::of::<T>(),
        }
    }

    /// The declared (or renamed) field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The field's type.
    #[inline]
    pub const fn element(&self) -> &ElementInfo {
        &self.element
    }
}
