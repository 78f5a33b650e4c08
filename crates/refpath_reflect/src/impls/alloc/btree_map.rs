use alloc::boxed::Box;
use alloc::collections::BTreeMap;

use crate::Reflect;
use crate::derive::impl_type_path;
use crate::impls::GenericTypeInfoCell;
use crate::info::{MapInfo, TypeInfo, Typed};
use crate::ops::{ApplyError, Map};

impl_type_path!(::alloc::collections::BTreeMap<K, V>);

impl<K, V> Typed for BTreeMap<K, V>
where
    K: Reflect + Typed + Ord + Clone,
    V: Reflect + Typed + Default + Clone,
{
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
    }
}

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: Reflect + Typed + Ord + Clone,
    V: Reflect + Typed + Default + Clone,
{
    crate::reflection::impl_reflect_cast_fn!(Map);

    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError> {
        if let Some(value) = value.downcast_ref::<Self>() {
            self.clone_from(value);
            return Ok(());
        }
        crate::impls::map_try_apply(self, value)
    }

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::impls::map_debug(self, f)
    }
}

impl<K, V> Map for BTreeMap<K, V>
where
    K: Reflect + Typed + Ord + Clone,
    V: Reflect + Typed + Default + Clone,
{
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect> {
        let key = key.downcast_ref::<K>()?;
        Self::get(self, key).map(Reflect::as_reflect)
    }

    fn get_mut(&mut self, key: &dyn Reflect) -> Option<&mut dyn Reflect> {
        let key = key.downcast_ref::<K>()?;
        Self::get_mut(self, key).map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(Self::iter(self).map(|(key, value)| (key.as_reflect(), value.as_reflect())))
    }

    fn retain(&mut self, f: &mut dyn FnMut(&dyn Reflect, &mut dyn Reflect) -> bool) {
        Self::retain(self, |key, value| f(key, value));
    }

    fn try_insert(
        &mut self,
        key: Box<dyn Reflect>,
        value: Box<dyn Reflect>,
    ) -> Result<Option<Box<dyn Reflect>>, (Box<dyn Reflect>, Box<dyn Reflect>)> {
        let key = match key.take::<K>() {
            Ok(key) => key,
            Err(key) => return Err((key, value)),
        };
        let value = match value.take::<V>() {
            Ok(value) => value,
            Err(value) => return Err((Box::new(key), value)),
        };
        Ok(Self::insert(self, key, value).map(Reflect::into_boxed_reflect))
    }

    fn remove(&mut self, key: &dyn Reflect) -> Option<Box<dyn Reflect>> {
        let key = key.downcast_ref::<K>()?;
        Self::remove(self, key).map(Reflect::into_boxed_reflect)
    }

    #[inline]
    fn zero_value(&self) -> Box<dyn Reflect> {
        Box::new(V::default())
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::Typed;

    fn languages() -> BTreeMap<String, String> {
        [("en", "English"), ("fr", "French")]
            .into_iter()
            .map(|(code, name)| (String::from(code), String::from(name)))
            .collect()
    }

    #[test]
    fn apply_matches_source_keys() {
        let mut target = languages();
        let mut source = BTreeMap::<String, String>::new();
        source.insert("de".into(), "German".into());
        source.insert("en".into(), "Anglais".into());

        target.try_apply(&source).unwrap();
        assert_eq!(target, source);
    }

    #[test]
    fn string_keys_are_recorded() {
        let info = <BTreeMap<String, u8> as Typed>::type_info().as_map().unwrap();
        assert!(info.key().is::<String>());
        assert!(info.value().is::<u8>());
    }
}
