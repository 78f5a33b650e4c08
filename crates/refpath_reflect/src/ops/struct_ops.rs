use crate::Reflect;
use crate::impls::eq_ignore_case;

/// Runtime access to the named fields of a record.
///
/// Implemented by `#[derive(Reflect)]` for structs with named fields.
///
/// # Examples
///
/// ```
/// use refpath_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect, Default, Clone)]
/// struct Phone {
///     number: String,
/// }
///
/// let mut phone = Phone { number: "555".into() };
/// let record: &mut dyn Struct = &mut phone;
///
/// assert_eq!(record.field_len(), 1);
/// assert_eq!(record.name_at(0), Some("number"));
/// assert_eq!(record.index_of_ignore_case("Number"), Some(0));
///
/// record.field_mut_as::<String>("number").unwrap().push('0');
/// assert_eq!(phone.number, "5550");
/// ```
pub trait Struct: Reflect {
    /// Returns the field named `name`, matched exactly.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the field named `name`, matched exactly.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns the field at `index` in declaration order.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the field at `index` in declaration order.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of reflected fields.
    fn field_len(&self) -> usize;

    /// Iterates field values in declaration order.
    fn iter_fields(&self) -> StructFieldIter<'_>;

    /// Finds the index of a field by name, ignoring case.
    ///
    /// An exact match is preferred; otherwise the first field in declaration
    /// order whose name equals `name` under Unicode case folding wins.
    fn index_of_ignore_case(&self, name: &str) -> Option<usize> {
        let len = self.field_len();
        (0..len)
            .find(|&index| self.name_at(index) == Some(name))
            .or_else(|| {
                (0..len).find(|&index| {
                    self.name_at(index)
                        .is_some_and(|field| eq_ignore_case(field, name))
                })
            })
    }
}

impl dyn Struct {
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }

    #[inline]
    pub fn field_mut_as<T: Reflect>(&mut self, name: &str) -> Option<&mut T> {
        self.field_mut(name).and_then(<dyn Reflect>::downcast_mut)
    }

    #[inline]
    pub fn field_at_as<T: Reflect>(&self, index: usize) -> Option<&T> {
        self.field_at(index).and_then(<dyn Reflect>::downcast_ref)
    }
}

// -----------------------------------------------------------------------------
// Struct Field Iterator

/// Iterator over the field values of a [`Struct`].
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.struct_val.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len().saturating_sub(self.index);
        (size, Some(size))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
