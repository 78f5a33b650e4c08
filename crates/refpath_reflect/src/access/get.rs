use alloc::boxed::Box;
use alloc::format;
use core::ops::Deref;

use crate::Reflect;
use crate::access::walk::{self, deref, field_index, list_index, map_key, string_keyed};
use crate::access::{AccessError, Step};
use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// Fetched

/// A value read by [`get`].
///
/// Values inside the root are borrowed. Reading a missing map key yields
/// the zero value of the map's value type, which has no place in the root
/// and is therefore owned.
#[derive(Debug)]
pub enum Fetched<'a> {
    Borrowed(&'a dyn Reflect),
    Owned(Box<dyn Reflect>),
}

impl Fetched<'_> {
    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    #[inline]
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        (**self).downcast_ref()
    }

    /// Detaches the value from the root, cloning a borrowed one.
    pub fn into_owned(self) -> Box<dyn Reflect> {
        match self {
            Self::Borrowed(value) => value.reflect_clone(),
            Self::Owned(value) => value,
        }
    }
}

impl Deref for Fetched<'_> {
    type Target = dyn Reflect;

    #[inline]
    fn deref(&self) -> &Self::Target {
        match self {
            Self::Borrowed(value) => *value,
            Self::Owned(value) => &**value,
        }
    }
}

// -----------------------------------------------------------------------------
// Get

/// Reads the value at `path`.
///
/// Returns `Ok(None)` when the walk meets a nil link: a null pointer, or an
/// empty sequence or map that still has steps to consume. An index past the
/// end of a sequence is `Ok(None)` as well. Pointers at the end of the path
/// are followed, so the result is never a pointer.
///
/// # Errors
///
/// - [`NoSuchField`](crate::access::ErrorKind::NoSuchField): a record has no
///   matching field.
/// - [`InvalidIndex`](crate::access::ErrorKind::InvalidIndex): a bracket
///   step the container does not accept, such as `[]`.
/// - [`InvalidKeyType`](crate::access::ErrorKind::InvalidKeyType): a map on
///   the path is not keyed by `String`.
///
/// # Examples
///
/// ```
/// use refpath_reflect::{access, derive::Reflect};
///
/// #[derive(Reflect, Default, Clone)]
/// struct Phone { number: String }
///
/// #[derive(Reflect, Default, Clone)]
/// struct Person { phones: Vec<Phone>, backup: Option<Box<Phone>> }
///
/// let person = Person {
///     phones: vec![Phone { number: "555-0100".into() }],
///     backup: None,
/// };
///
/// let number = access::get(&person, "Phones[0].Number").unwrap().unwrap();
/// assert_eq!(number.downcast_ref::<String>().unwrap(), "555-0100");
///
/// assert!(access::get(&person, "Phones[5].Number").unwrap().is_none());
/// assert!(access::get(&person, "Backup.Number").unwrap().is_none());
/// assert!(access::get(&person, "Phones[0].Extension").is_err());
/// ```
pub fn get<'a>(root: &'a dyn Reflect, path: &str) -> Result<Option<Fetched<'a>>, AccessError> {
    get_at(root, path).map_err(|err| err.with_path(path))
}

/// [`get`], then clones the result out as a `T`.
///
/// # Errors
///
/// The errors of [`get`], and
/// [`MismatchedTypes`](crate::access::ErrorKind::MismatchedTypes) if the value
/// is not a `T`.
pub fn get_as<T: Reflect + Clone>(
    root: &dyn Reflect,
    path: &str,
) -> Result<Option<T>, AccessError> {
    let Some(found) = get(root, path)? else {
        return Ok(None);
    };
    match found.downcast_ref::<T>() {
        Some(value) => Ok(Some(value.clone())),
        None => Err(walk::mismatched(format!(
            "found a `{}` where a `{}` was requested",
            found.reflect_type_path(),
            core::any::type_name::<T>(),
        ))
        .with_path(path)),
    }
}

/// [`get`] for paths already known to fit the value.
///
/// # Panics
///
/// Panics if [`get`] returns an error.
#[track_caller]
pub fn must_get<'a>(root: &'a dyn Reflect, path: &str) -> Option<Fetched<'a>> {
    match get(root, path) {
        Ok(found) => found,
        Err(err) => panic!("{err}"),
    }
}

fn get_at<'a>(value: &'a dyn Reflect, path: &str) -> Result<Option<Fetched<'a>>, AccessError> {
    let Some(value) = deref(value) else {
        return Ok(None);
    };
    let Some(step) = Step::parse(path) else {
        return Ok(Some(Fetched::Borrowed(value)));
    };

    match value.reflect_ref() {
        ReflectRef::Struct(record) => {
            let index = field_index(record, &step)?;
            match record.field_at(index) {
                Some(field) => get_at(field, step.rest),
                None => Ok(None),
            }
        }
        ReflectRef::List(list) => {
            let index = list_index(&step, value)?;
            match list.get(index) {
                Some(item) => get_at(item, step.rest),
                None => Ok(None),
            }
        }
        ReflectRef::Map(map) => {
            string_keyed(map)?;
            let key = map_key(&step)?;
            if map.is_empty() {
                return Ok(None);
            }
            if let Some(entry) = map.get(&key) {
                return get_at(entry, step.rest);
            }
            let zero = map.zero_value();
            Ok(get_at(&*zero, step.rest)?.map(|found| Fetched::Owned(found.into_owned())))
        }
        ReflectRef::Pointer(_) | ReflectRef::Opaque(_) => Err(walk::unexpected_step(&step, value)),
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;

    use super::{get, get_as, must_get};
    use crate::access::ErrorKind;
    use crate::access::fixtures::{Company, Language, Person, Phone, company};

    #[test]
    fn reads_nested_records() {
        let company = company();
        assert_eq!(
            get_as::<String>(&company, "Departments[0].Head.Name").unwrap().as_deref(),
            Some("Ada"),
        );
        assert_eq!(
            get_as::<String>(&company, "departments[0].projects[1].name").unwrap().as_deref(),
            Some("Compiler"),
        );
    }

    #[test]
    fn empty_path_is_the_root() {
        let phone = Phone::new("1");
        let found = get(&phone, "").unwrap().unwrap();
        assert!(!found.is_owned());
        assert_eq!(found.downcast_ref::<Phone>(), Some(&phone));

        let boxed: Option<Box<Phone>> = Some(Box::new(phone.clone()));
        assert_eq!(get_as::<Phone>(&boxed, "").unwrap(), Some(phone));
    }

    #[test]
    fn nil_links_are_absent() {
        let company = Company::default();
        assert!(get(&company, "Phone.Number").unwrap().is_none());
        assert!(get(&company, "Departments[0].Name").unwrap().is_none());
        assert!(get(&company, "Languages.en.Name").unwrap().is_none());
        assert!(get(&None::<Company>, "Name").unwrap().is_none());
    }

    #[test]
    fn missing_key_reads_zero_value() {
        let company = company();
        let found = get(&company, "Languages.de").unwrap().unwrap();
        assert!(found.is_owned());
        assert_eq!(found.downcast_ref::<Language>(), Some(&Language::default()));

        assert_eq!(
            get_as::<String>(&company, "Languages[de].Name").unwrap().as_deref(),
            Some(""),
        );
    }

    #[test]
    fn index_past_end_is_absent() {
        let company = company();
        assert!(get(&company, "Departments[7]").unwrap().is_none());
    }

    #[test]
    fn errors_carry_kind_and_path() {
        let company = company();

        let err = get(&company, "Departments[0].Budget").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoSuchField);
        assert_eq!(err.path(), "Departments[0].Budget");

        let err = get(&company, "Departments[]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidIndex);

        let err = get(&company, "Departments.first").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidIndex);

        let err = get(&company, "Name[0]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidIndex);

        let err = get(&company, "Offices.1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidKeyType);
    }

    #[test]
    fn key_type_is_checked_before_emptiness() {
        let company = Company::default();
        let err = get(&company, "Offices[1]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidKeyType);
    }

    #[test]
    fn get_as_checks_the_type() {
        let person = Person {
            age: 30,
            ..Person::default()
        };
        assert_eq!(get_as::<u8>(&person, "Age").unwrap(), Some(30));
        let err = get_as::<u32>(&person, "Age").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MismatchedTypes);
    }

    #[test]
    fn must_get_returns_value() {
        let list = vec![1_u8, 2, 3];
        assert_eq!(must_get(&list, "[2]").unwrap().downcast_ref::<u8>(), Some(&3));
    }

    #[test]
    #[should_panic(expected = "NoSuchField")]
    fn must_get_panics_on_error() {
        must_get(&Person::default(), "Salary");
    }
}
