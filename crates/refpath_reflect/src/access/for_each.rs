use alloc::format;
use core::any::Any;

use crate::Reflect;
use crate::access::AccessError;
use crate::access::walk::{deref, mismatched};
use crate::info::{TypeInfo, TypePath};
use crate::ops::ReflectRef;

/// Whether elements of type `info` can be handed out as `T`, possibly
/// through pointer links.
fn yields<T: Any>(info: &'static TypeInfo) -> bool {
    info.type_is::<T>() || info.pointee().type_is::<T>()
}

/// Calls `f` with every element of the sequence `value`, in order.
///
/// Elements may be `T` or pointers to `T`; null elements are skipped.
/// Pointer links on `value` itself are followed, and a nil `value` calls
/// nothing.
///
/// # Errors
///
/// [`MismatchedTypes`](crate::access::ErrorKind::MismatchedTypes) if `value`
/// is not a sequence, or its elements are not `T`.
///
/// # Examples
///
/// ```
/// use refpath_reflect::access;
///
/// let scores: Vec<Option<Box<u32>>> = vec![Some(Box::new(3)), None, Some(Box::new(4))];
///
/// let mut total = 0;
/// access::for_each::<u32>(&scores, |score| total += score).unwrap();
/// assert_eq!(total, 7);
///
/// assert!(access::for_each::<i64>(&scores, |_| {}).is_err());
/// ```
pub fn for_each<T: Reflect + TypePath>(
    value: &dyn Reflect,
    mut f: impl FnMut(&T),
) -> Result<(), AccessError> {
    let Some(value) = deref(value) else {
        return Ok(());
    };
    let ReflectRef::List(list) = value.reflect_ref() else {
        return Err(mismatched(format!(
            "`{}` is not a sequence",
            value.reflect_type_path(),
        )));
    };

    let items_match = list
        .reflect_type_info()
        .as_list()
        .is_ok_and(|info| yields::<T>(info.item().info()));
    if !items_match {
        return Err(mismatched(format!(
            "the elements of `{}` are not `{}`",
            value.reflect_type_path(),
            T::type_path(),
        )));
    }

    list.iter()
        .filter_map(deref)
        .filter_map(<dyn Reflect>::downcast_ref::<T>)
        .for_each(&mut f);
    Ok(())
}

/// Calls `f` with every entry of the map `value`, in the map's order.
///
/// Values may be `V` or pointers to `V`; null values are skipped. Pointer
/// links on `value` itself are followed, and a nil `value` calls nothing.
///
/// # Errors
///
/// [`MismatchedTypes`](crate::access::ErrorKind::MismatchedTypes) if `value`
/// is not a map, or its keys or values do not match `K` and `V`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use refpath_reflect::access;
///
/// let stock = BTreeMap::from([(String::from("apples"), 3_u32), (String::from("pears"), 5)]);
///
/// let mut names = Vec::new();
/// access::for_each_entry::<String, u32>(&stock, |name, count| {
///     names.push(format!("{name}={count}"));
/// })
/// .unwrap();
/// assert_eq!(names, ["apples=3", "pears=5"]);
/// ```
pub fn for_each_entry<K, V>(
    value: &dyn Reflect,
    mut f: impl FnMut(&K, &V),
) -> Result<(), AccessError>
where
    K: Reflect + TypePath,
    V: Reflect + TypePath,
{
    let Some(value) = deref(value) else {
        return Ok(());
    };
    let ReflectRef::Map(map) = value.reflect_ref() else {
        return Err(mismatched(format!("`{}` is not a map", value.reflect_type_path())));
    };

    let entries_match = map
        .reflect_type_info()
        .as_map()
        .is_ok_and(|info| yields::<K>(info.key().info()) && yields::<V>(info.value().info()));
    if !entries_match {
        return Err(mismatched(format!(
            "the entries of `{}` are not `{}` to `{}`",
            value.reflect_type_path(),
            K::type_path(),
            V::type_path(),
        )));
    }

    for (key, entry) in map.iter() {
        let key = deref(key).and_then(<dyn Reflect>::downcast_ref::<K>);
        let entry = deref(entry).and_then(<dyn Reflect>::downcast_ref::<V>);
        if let (Some(key), Some(entry)) = (key, entry) {
            f(key, entry);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{for_each, for_each_entry};
    use crate::access::fixtures::{Company, Department, company};
    use crate::access::{ErrorKind, get};

    #[test]
    fn visits_pointer_elements() {
        let company = company();
        let mut names = Vec::new();
        for_each::<Department>(&company.departments, |d| names.push(d.name.clone())).unwrap();
        assert_eq!(names, ["Engineering"]);
    }

    #[test]
    fn nil_values_call_nothing() {
        let mut calls = 0;
        for_each::<u8>(&None::<Vec<u8>>, |_| calls += 1).unwrap();
        for_each::<u8>(&Vec::<u8>::new(), |_| calls += 1).unwrap();
        for_each_entry::<String, u8>(&BTreeMap::<String, u8>::new(), |_, _| calls += 1).unwrap();
        assert_eq!(calls, 0);
    }

    #[test]
    fn type_mismatches_are_reported() {
        let list = vec![Some(Box::new(1_u8))];
        assert_eq!(
            for_each::<u16>(&list, |_| {}).unwrap_err().kind(),
            ErrorKind::MismatchedTypes,
        );
        assert_eq!(
            for_each::<u8>(&Company::default(), |_| {}).unwrap_err().kind(),
            ErrorKind::MismatchedTypes,
        );
        assert_eq!(
            for_each_entry::<String, u8>(&list, |_, _| {}).unwrap_err().kind(),
            ErrorKind::MismatchedTypes,
        );
    }

    #[test]
    fn works_on_fetched_values() {
        let company = company();
        let languages = get(&company, "Languages").unwrap().unwrap();

        let mut codes = Vec::new();
        for_each_entry::<String, crate::access::fixtures::Language>(&*languages, |code, language| {
            assert_eq!(*code, language.code);
            codes.push(code.clone());
        })
        .unwrap();
        assert_eq!(codes, ["en", "fr"]);

        let err = for_each_entry::<u32, String>(&*languages, |_, _| {}).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MismatchedTypes);
    }
}
