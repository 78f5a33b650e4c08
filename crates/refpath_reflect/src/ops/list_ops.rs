use alloc::{boxed::Box, vec::Vec};

use crate::Reflect;

/// Runtime access to a growable sequence such as [`Vec`].
///
/// Path writes never mutate an element through [`List::get_mut`] directly:
/// they [`drain`](List::drain) the sequence, edit the addressed element and
/// push everything back, so the sequence is rebuilt on every indexed write.
///
/// # Examples
///
/// ```
/// use refpath_reflect::{Reflect, ops::List};
///
/// let mut vec = vec![1_i32, 2];
/// let list: &mut dyn List = &mut vec;
///
/// assert!(list.try_push(Box::new(3_i32)).is_ok());
/// assert!(list.try_push(Box::new(1.5_f64)).is_err());
/// assert_eq!(list.zero_item().downcast_ref::<i32>(), Some(&0));
/// assert_eq!(vec, [1, 2, 3]);
/// ```
pub trait List: Reflect {
    /// Returns the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the element at `index`, or `None` if out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Appends an element.
    ///
    /// Returns the value unchanged if its type is not the element type.
    fn try_push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Removes and returns the last element.
    fn pop(&mut self) -> Option<Box<dyn Reflect>>;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates elements in order.
    fn iter(&self) -> ListItemIter<'_>;

    /// Removes every element and returns them in order.
    fn drain(&mut self) -> Vec<Box<dyn Reflect>>;

    /// Returns a fresh zero-valued element of the element type.
    fn zero_item(&self) -> Box<dyn Reflect>;
}

impl dyn List {
    #[inline]
    pub fn get_as<T: Reflect>(&self, index: usize) -> Option<&T> {
        self.get(index).and_then(<dyn Reflect>::downcast_ref)
    }
}

// -----------------------------------------------------------------------------
// List Item Iterator

/// Iterator over the elements of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    #[inline(always)]
    pub const fn new(list: &'a dyn List) -> Self {
        Self { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len().saturating_sub(self.index);
        (size, Some(size))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
