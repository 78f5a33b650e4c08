use crate::derive::impl_type_path;
use crate::impls::utils::impl_reflect_for_hashmap;

impl_type_path!(::refpath_utils::hash::FixedHashState);
impl_type_path!(::refpath_utils::hash::NoOpHashState);
impl_type_path!(::refpath_utils::hash::hashbrown::HashMap<K, V, S>);

impl_reflect_for_hashmap!(::refpath_utils::hash::hashbrown::HashMap<K, V, S>);

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use refpath_utils::hash::HashMap;

    use crate::Reflect;
    use crate::info::Typed;
    use crate::ops::Map;

    #[test]
    fn fixed_state_map_is_reflected() {
        let mut map = HashMap::<String, u8>::default();
        map.insert("a".into(), 1);

        let info = <HashMap<String, u8> as Typed>::type_info();
        assert!(info.is_map());
        assert_eq!(Map::len(&map), 1);

        let copy = map.reflect_clone();
        assert_eq!(copy.take::<HashMap<String, u8>>().unwrap(), map);
    }
}
