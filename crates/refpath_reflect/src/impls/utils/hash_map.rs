/// Implements `Typed`, `Reflect` and `Map` for a hash map type with `K, V, S`
/// parameters, such as `std::collections::HashMap<K, V, S>`.
///
/// `TypePath` must be implemented separately.
macro_rules! impl_reflect_for_hashmap {
    ($ty:path $(,)?) => {
        impl<K, V, S> $crate::info::Typed for $ty
        where
            K: $crate::Reflect + $crate::info::Typed + Eq + ::core::hash::Hash + Clone,
            V: $crate::Reflect + $crate::info::Typed + Default + Clone,
            S: $crate::info::TypePath + ::core::hash::BuildHasher + Default + Clone + Send + Sync,
        {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::GenericTypeInfoCell = $crate::impls::GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    $crate::info::TypeInfo::Map($crate::info::MapInfo::new::<Self, K, V>())
                })
            }
        }

        impl<K, V, S> $crate::Reflect for $ty
        where
            K: $crate::Reflect + $crate::info::Typed + Eq + ::core::hash::Hash + Clone,
            V: $crate::Reflect + $crate::info::Typed + Default + Clone,
            S: $crate::info::TypePath + ::core::hash::BuildHasher + Default + Clone + Send + Sync,
        {
            $crate::reflection::impl_reflect_cast_fn!(Map);

            fn try_apply(&mut self, value: &dyn $crate::Reflect) -> Result<(), $crate::ops::ApplyError> {
                if let Some(value) = <dyn $crate::Reflect>::downcast_ref::<Self>(value) {
                    Clone::clone_from(self, value);
                    return Ok(());
                }
                $crate::impls::map_try_apply(self, value)
            }

            #[inline]
            fn reflect_clone(&self) -> ::alloc::boxed::Box<dyn $crate::Reflect> {
                ::alloc::boxed::Box::new(Clone::clone(self))
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::impls::map_debug(self, f)
            }
        }

        impl<K, V, S> $crate::ops::Map for $ty
        where
            K: $crate::Reflect + $crate::info::Typed + Eq + ::core::hash::Hash + Clone,
            V: $crate::Reflect + $crate::info::Typed + Default + Clone,
            S: $crate::info::TypePath + ::core::hash::BuildHasher + Default + Clone + Send + Sync,
        {
            fn get(&self, key: &dyn $crate::Reflect) -> Option<&dyn $crate::Reflect> {
                let key = key.downcast_ref::<K>()?;
                Self::get(self, key).map(|value| value as &dyn $crate::Reflect)
            }

            fn get_mut(&mut self, key: &dyn $crate::Reflect) -> Option<&mut dyn $crate::Reflect> {
                let key = key.downcast_ref::<K>()?;
                Self::get_mut(self, key).map(|value| value as &mut dyn $crate::Reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                Self::len(self)
            }

            fn iter(
                &self,
            ) -> ::alloc::boxed::Box<dyn Iterator<Item = (&dyn $crate::Reflect, &dyn $crate::Reflect)> + '_> {
                ::alloc::boxed::Box::new(Self::iter(self).map(|(key, value)| {
                    (key as &dyn $crate::Reflect, value as &dyn $crate::Reflect)
                }))
            }

            fn retain(&mut self, f: &mut dyn FnMut(&dyn $crate::Reflect, &mut dyn $crate::Reflect) -> bool) {
                Self::retain(self, |key, value| f(key, value));
            }

            fn try_insert(
                &mut self,
                key: ::alloc::boxed::Box<dyn $crate::Reflect>,
                value: ::alloc::boxed::Box<dyn $crate::Reflect>,
            ) -> Result<
                Option<::alloc::boxed::Box<dyn $crate::Reflect>>,
                (::alloc::boxed::Box<dyn $crate::Reflect>, ::alloc::boxed::Box<dyn $crate::Reflect>),
            > {
                let key = match key.take::<K>() {
                    Ok(key) => key,
                    Err(key) => return Err((key, value)),
                };
                let value = match value.take::<V>() {
                    Ok(value) => value,
                    Err(value) => return Err((::alloc::boxed::Box::new(key), value)),
                };
                Ok(Self::insert(self, key, value).map($crate::Reflect::into_boxed_reflect))
            }

            fn remove(&mut self, key: &dyn $crate::Reflect) -> Option<::alloc::boxed::Box<dyn $crate::Reflect>> {
                let key = key.downcast_ref::<K>()?;
                Self::remove(self, key).map($crate::Reflect::into_boxed_reflect)
            }

            #[inline]
            fn zero_value(&self) -> ::alloc::boxed::Box<dyn $crate::Reflect> {
                ::alloc::boxed::Box::new(V::default())
            }
        }
    };
}

pub(crate) use impl_reflect_for_hashmap;
