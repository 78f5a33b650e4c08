use crate::derive::impl_type_path;
use crate::impls::utils::impl_reflect_for_hashmap;

impl_type_path!(::std::hash::RandomState);
impl_type_path!(::std::collections::HashMap<K, V, S>);

impl_reflect_for_hashmap!(::std::collections::HashMap<K, V, S>);

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::string::String;

    use crate::info::TypePath;
    use crate::ops::Map;

    #[test]
    fn hashmap_path_names_parameters() {
        assert_eq!(
            <HashMap<String, u8> as TypePath>::type_name(),
            "HashMap<String, u8, RandomState>",
        );
    }

    #[test]
    fn zero_value_matches_value_type() {
        let map = HashMap::<String, i64>::new();
        let zero = map.zero_value();
        assert_eq!(zero.downcast_ref::<i64>(), Some(&0));
    }
}
