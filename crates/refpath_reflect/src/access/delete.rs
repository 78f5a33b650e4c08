use alloc::format;
use alloc::string::String;

use crate::Reflect;
use crate::access::set::{Input, push, write};
use crate::access::walk::{self, deref_mut, field_index, list_index};
use crate::access::walk::{string_keyed, string_keyed_info};
use crate::access::{AccessError, ErrorKind, Step, get_type};
use crate::info::TypeInfo;
use crate::ops::ReflectMut;

/// Removes the value at `path`.
///
/// - `Map[key]`: removes the entry in place.
/// - `List[n]`: rebuilds the sequence without element `n`. An index past
///   the end changes nothing.
/// - Any other path: resets the addressed value to its zero value, the
///   same as [`set`](crate::access::set) with [`Input::Nil`]. The empty
///   path resets the whole root.
///
/// Deleting from a container that is not there yet is a no-op.
///
/// # Errors
///
/// [`NoSuchField`](ErrorKind::NoSuchField) if the part before the final
/// bracket names nothing, or if a sequence index is not a non-negative
/// integer. [`InvalidIndex`](ErrorKind::InvalidIndex) if the final bracket
/// follows a value that is neither a sequence nor a map.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use refpath_reflect::{access, derive::Reflect};
///
/// #[derive(Reflect, Default, Clone)]
/// struct Catalog {
///     items: Vec<u32>,
///     tags: BTreeMap<String, String>,
///     title: String,
/// }
///
/// let mut catalog = Catalog {
///     items: vec![10, 20, 30],
///     tags: BTreeMap::from([("en".into(), "a".into()), ("fr".into(), "b".into())]),
///     title: "Winter".into(),
/// };
///
/// access::delete(&mut catalog, "Items[1]").unwrap();
/// access::delete(&mut catalog, "Items[999]").unwrap();
/// access::delete(&mut catalog, "Tags[en]").unwrap();
/// access::delete(&mut catalog, "Title").unwrap();
///
/// assert_eq!(catalog.items, [10, 30]);
/// assert_eq!(catalog.tags.len(), 1);
/// assert!(catalog.title.is_empty());
/// ```
pub fn delete(root: &mut dyn Reflect, path: &str) -> Result<(), AccessError> {
    delete_at(root, path).map_err(|err| err.with_path(path))
}

fn delete_at(root: &mut dyn Reflect, path: &str) -> Result<(), AccessError> {
    let (prefix, key) = Step::split_key(path).unwrap_or((path, ""));
    let Some(info) = get_type(root.reflect_type_info(), prefix) else {
        return Err(walk::no_such_field(root.reflect_type_path(), prefix));
    };

    if prefix.len() == path.len() {
        return write(root, path, Input::Nil);
    }

    match info.pointee() {
        TypeInfo::List(_) => {
            let Ok(index) = key.parse::<usize>() else {
                return Err(AccessError::new(
                    ErrorKind::NoSuchField,
                    format!("`{key}` is not a sequence index"),
                ));
            };
            let Some(target) = locate(root, prefix)? else {
                log::debug!("nothing to delete: `{prefix}` is empty");
                return Ok(());
            };
            let ReflectMut::List(list) = target.reflect_mut() else {
                return Ok(());
            };
            if index >= list.len() {
                log::debug!("nothing to delete: `{prefix}` has {} elements", list.len());
                return Ok(());
            }
            let items = list.drain();
            for (at, item) in items.into_iter().enumerate() {
                if at != index {
                    push(list, item)?;
                }
            }
            Ok(())
        }
        TypeInfo::Map(map_info) => {
            string_keyed_info(map_info)?;
            let Some(target) = locate(root, prefix)? else {
                log::debug!("nothing to delete: `{prefix}` is empty");
                return Ok(());
            };
            let ReflectMut::Map(map) = target.reflect_mut() else {
                return Ok(());
            };
            if map.remove(&String::from(key)).is_none() {
                log::debug!("nothing to delete: `{prefix}` has no key `{key}`");
            }
            Ok(())
        }
        other => Err(AccessError::new(
            ErrorKind::InvalidIndex,
            format!("`{}` cannot be indexed", other.type_path()),
        )),
    }
}

/// Walks `path` mutably without allocating.
///
/// `None` if a link on the way is null, or a sequence or map has no
/// element for a step.
fn locate<'a>(
    value: &'a mut dyn Reflect,
    path: &str,
) -> Result<Option<&'a mut dyn Reflect>, AccessError> {
    let Some(value) = deref_mut(value)? else {
        return Ok(None);
    };
    let Some(step) = Step::parse(path) else {
        return Ok(Some(value));
    };

    let next = match value.reflect_mut() {
        ReflectMut::Struct(record) => {
            let index = field_index(&*record, &step)?;
            record.field_at_mut(index)
        }
        ReflectMut::List(list) => {
            let index = list_index(&step, &*list)?;
            list.get_mut(index)
        }
        ReflectMut::Map(map) => {
            string_keyed(&*map)?;
            map.get_mut(&String::from(step.token))
        }
        other => return Err(walk::unexpected_step(&step, other.into_reflect())),
    };

    match next {
        Some(next) => locate(next, step.rest),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec;

    use super::delete;
    use crate::access::fixtures::{Company, Department, Person, Phone, company};
    use crate::access::{ErrorKind, set};

    #[test]
    fn removes_map_entry_only() {
        let mut company = Company::default();
        set(&mut company, "Languages.en.Name", "English").unwrap();
        set(&mut company, "Languages.fr.Name", "Anglais").unwrap();

        delete(&mut company, "Languages[en]").unwrap();
        assert_eq!(company.languages.len(), 1);
        assert_eq!(company.languages["fr"].name, "Anglais");

        delete(&mut company, "Languages[de]").unwrap();
        assert_eq!(company.languages.len(), 1);
    }

    #[test]
    fn removes_sequence_element() {
        let mut person = Person {
            phones: vec![Phone::new("1"), Phone::new("2"), Phone::new("3")],
            ..Person::default()
        };
        delete(&mut person, "Phones[0]").unwrap();
        assert_eq!(person.phones, [Phone::new("2"), Phone::new("3")]);
    }

    #[test]
    fn out_of_range_is_a_no_op() {
        let mut person = Person {
            phones: vec![Phone::new("1"), Phone::new("2"), Phone::new("3")],
            ..Person::default()
        };
        delete(&mut person, "Phones[999]").unwrap();
        assert_eq!(person.phones.len(), 3);
    }

    #[test]
    fn malformed_index_is_no_such_field() {
        let mut person = Person::default();
        let err = delete(&mut person, "Phones[x]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoSuchField);
        assert_eq!(err.path(), "Phones[x]");

        let err = delete(&mut person, "Phones[-1]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoSuchField);
    }

    #[test]
    fn unresolved_prefix_is_no_such_field() {
        let mut company = company();
        let err = delete(&mut company, "Branches[0]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoSuchField);

        let err = delete(&mut company, "Phone.Extension").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoSuchField);
    }

    #[test]
    fn nested_deletes_walk_existing_links() {
        let mut company = company();
        delete(&mut company, "Departments[0].Projects[0]").unwrap();
        let projects = &company.departments[0].as_ref().unwrap().projects;
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Compiler");

        let mut department = Department::default();
        set(&mut department, "Codes.eu[0].de", "DE").unwrap();
        set(&mut department, "Codes.eu[0].fr", "FR").unwrap();
        delete(&mut department, "Codes[eu][0][de]").unwrap();
        assert_eq!(department.codes["eu"][0].len(), 1);
    }

    #[test]
    fn absent_containers_are_left_alone() {
        let mut company = Company::default();
        delete(&mut company, "Departments[0].Projects[0]").unwrap();
        assert!(company.departments.is_empty());
    }

    #[test]
    fn fields_are_reset() {
        let mut company = company();
        delete(&mut company, "Phone").unwrap();
        assert!(company.phone.is_none());

        delete(&mut company, "Departments[0].Head.Age").unwrap();
        let head = company.departments[0].as_ref().unwrap().head.as_ref().unwrap();
        assert_eq!(head.age, 0);
        assert_eq!(head.name, "Ada");

        delete(&mut company, "").unwrap();
        assert_eq!(company, Company::default());
    }

    #[test]
    fn scalar_with_bracket_is_invalid_index() {
        let mut company = company();
        let err = delete(&mut company, "Name[0]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidIndex);
    }

    #[test]
    fn non_string_keys_are_rejected() {
        let mut company = company();
        let err = delete(&mut company, "Offices[1]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidKeyType);
    }

    #[test]
    fn shared_links_are_not_writable() {
        let mut phones = Arc::new(vec![Phone::new("1")]);
        let _other = Arc::clone(&phones);
        let err = delete(&mut phones, "[0]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RootNotWritable);
    }

    #[test]
    fn boxed_roots_are_followed() {
        let mut root: Option<Box<Person>> = Some(Box::new(Person {
            name: String::from("x"),
            ..Person::default()
        }));
        delete(&mut root, "Name").unwrap();
        assert_eq!(root.unwrap().name, "");
    }
}
