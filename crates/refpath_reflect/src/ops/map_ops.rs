use alloc::boxed::Box;

use crate::Reflect;

/// Runtime access to a key/value map.
///
/// Implemented for [`BTreeMap`](alloc::collections::BTreeMap) and the std and
/// `hashbrown` hash maps.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use refpath_reflect::{Reflect, ops::Map};
///
/// let mut phones = BTreeMap::<String, String>::new();
/// let map: &mut dyn Map = &mut phones;
///
/// let key = String::from("home");
/// assert!(map.get(&key).is_none());
///
/// map.try_insert(Box::new(key.clone()), Box::new(String::from("555"))).unwrap();
/// assert_eq!(map.get(&key).unwrap().downcast_ref::<String>().unwrap(), "555");
///
/// assert!(map.remove(&key).is_some());
/// assert!(map.is_empty());
/// ```
pub trait Map: Reflect {
    /// Returns the value stored under `key`.
    ///
    /// `None` if the key is absent or is not of the key type.
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect>;

    /// Returns the value stored under `key`.
    fn get_mut(&mut self, key: &dyn Reflect) -> Option<&mut dyn Reflect>;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates entries in the map's own order.
    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;

    /// Keeps only the entries for which `f` returns `true`.
    fn retain(&mut self, f: &mut dyn FnMut(&dyn Reflect, &mut dyn Reflect) -> bool);

    /// Inserts an entry, returning the replaced value if any.
    ///
    /// Returns both values unchanged if either has the wrong type.
    fn try_insert(
        &mut self,
        key: Box<dyn Reflect>,
        value: Box<dyn Reflect>,
    ) -> Result<Option<Box<dyn Reflect>>, (Box<dyn Reflect>, Box<dyn Reflect>)>;

    /// Removes the entry stored under `key`, returning its value.
    fn remove(&mut self, key: &dyn Reflect) -> Option<Box<dyn Reflect>>;

    /// Returns a fresh zero-valued value of the value type.
    fn zero_value(&self) -> Box<dyn Reflect>;
}

impl dyn Map {
    #[inline]
    pub fn get_as<T: Reflect>(&self, key: &dyn Reflect) -> Option<&T> {
        self.get(key).and_then(<dyn Reflect>::downcast_ref)
    }
}
