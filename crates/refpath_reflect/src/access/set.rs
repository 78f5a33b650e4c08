use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::Reflect;
use crate::access::walk::{self, deref, field_index, list_index, map_key, string_keyed, vivify};
use crate::access::{AccessError, Step, StepKind, coerce};
use crate::ops::{List, Map, ReflectMut, Struct};

// -----------------------------------------------------------------------------
// Input

/// The value written by [`set`].
///
/// Text and bytes are coerced into scalar leaves. Any other value is
/// applied structurally with [`Reflect::try_apply`]. `Nil` resets the
/// target to its zero value.
///
/// ```
/// use refpath_reflect::access::Input;
///
/// assert!(matches!(Input::from("42"), Input::Text("42")));
/// assert!(matches!(Input::from(None::<&dyn refpath_reflect::Reflect>), Input::Nil));
/// assert!(matches!(Input::value(&7_u8), Input::Value(_)));
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
    Nil,
    Text(&'a str),
    Bytes(&'a [u8]),
    Value(&'a dyn Reflect),
}

impl<'a> Input<'a> {
    /// Wraps any reflected value.
    #[inline]
    pub fn value<T: Reflect>(value: &'a T) -> Self {
        Self::Value(value)
    }

    /// Follows the pointer links of a `Value`, and reclassifies strings and
    /// byte vectors as text and bytes.
    fn normalize(self) -> Self {
        let Self::Value(value) = self else {
            return self;
        };
        let Some(value) = deref(value) else {
            return Self::Nil;
        };
        if let Some(text) = value.downcast_ref::<String>() {
            Self::Text(text)
        } else if let Some(bytes) = value.downcast_ref::<Vec<u8>>() {
            Self::Bytes(bytes)
        } else {
            Self::Value(value)
        }
    }
}

impl<'a> From<&'a str> for Input<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    #[inline]
    fn from(value: &'a String) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    #[inline]
    fn from(value: &'a [u8]) -> Self {
        Self::Bytes(value)
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    #[inline]
    fn from(value: &'a Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl<'a> From<&'a dyn Reflect> for Input<'a> {
    #[inline]
    fn from(value: &'a dyn Reflect) -> Self {
        Self::Value(value)
    }
}

impl<'a> From<Option<&'a dyn Reflect>> for Input<'a> {
    #[inline]
    fn from(value: Option<&'a dyn Reflect>) -> Self {
        value.map_or(Self::Nil, Self::Value)
    }
}

// -----------------------------------------------------------------------------
// Set

/// Writes `value` at `path`, allocating every missing link on the way.
///
/// - Record fields are matched ignoring case.
/// - Map entries are copied out (or start from the zero value), written,
///   and inserted back under the key.
/// - `[]` appends a new element. An index inside a sequence rebuilds the
///   sequence around the written element. An index past the end pads the
///   sequence with zero values, then appends.
///
/// Changes made before an error are kept.
///
/// # Errors
///
/// Every [`ErrorKind`](crate::access::ErrorKind) but `MismatchedTypes` is
/// raised as described on the kind; `MismatchedTypes` comes from a
/// structural write between incompatible types.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use refpath_reflect::{access, derive::Reflect};
///
/// #[derive(Reflect, Default, Clone, Debug, PartialEq)]
/// struct Label { text: String }
///
/// #[derive(Reflect, Default, Clone, Debug)]
/// struct Doc {
///     size: u8,
///     labels: BTreeMap<String, Label>,
///     scores: Vec<i32>,
/// }
///
/// let mut doc = Doc::default();
/// access::set(&mut doc, "Size", "12").unwrap();
/// access::set(&mut doc, "labels.en.text", "English").unwrap();
/// access::set(&mut doc, "scores[2]", "7").unwrap();
/// access::set(&mut doc, "scores[]", "8").unwrap();
///
/// assert_eq!(doc.size, 12);
/// assert_eq!(doc.labels["en"].text, "English");
/// assert_eq!(doc.scores, [0, 0, 7, 8]);
///
/// let err = access::set(&mut doc, "Size", "300").unwrap_err();
/// assert_eq!(err.kind(), access::ErrorKind::InvalidValue);
/// ```
pub fn set<'v>(
    root: &mut dyn Reflect,
    path: &str,
    value: impl Into<Input<'v>>,
) -> Result<(), AccessError> {
    write(root, path, value.into().normalize()).map_err(|err| err.with_path(path))
}

/// Writes through the root's own pointer chain first, then walks `path`.
pub(crate) fn write(
    root: &mut dyn Reflect,
    path: &str,
    input: Input<'_>,
) -> Result<(), AccessError> {
    set_at(vivify(root)?, path, input)
}

fn set_at(value: &mut dyn Reflect, path: &str, input: Input<'_>) -> Result<(), AccessError> {
    let Some(step) = Step::parse(path) else {
        return assign(value, input);
    };

    match vivify(value)?.reflect_mut() {
        ReflectMut::Struct(record) => set_field(record, &step, input),
        ReflectMut::List(list) => set_item(list, &step, input),
        ReflectMut::Map(map) => set_entry(map, &step, input),
        other => Err(walk::unexpected_step(&step, other.into_reflect())),
    }
}

fn assign(value: &mut dyn Reflect, input: Input<'_>) -> Result<(), AccessError> {
    match input {
        Input::Nil => {
            value.reset();
            Ok(())
        }
        Input::Text(text) => coerce::assign_text(vivify(value)?, text),
        Input::Bytes(bytes) => coerce::assign_bytes(vivify(value)?, bytes),
        Input::Value(source) => value.try_apply(source).map_err(AccessError::from),
    }
}

fn set_field(
    record: &mut dyn Struct,
    step: &Step<'_>,
    input: Input<'_>,
) -> Result<(), AccessError> {
    let index = field_index(record, step)?;
    match record.field_at_mut(index) {
        Some(field) => set_at(field, step.rest, input),
        None => Err(walk::no_such_field(record.reflect_type_path(), step.token)),
    }
}

fn set_item(list: &mut dyn List, step: &Step<'_>, input: Input<'_>) -> Result<(), AccessError> {
    let index = match step.kind {
        StepKind::Append => list.len(),
        _ => list_index(step, &*list)?,
    };

    if index < list.len() {
        // Rebuild the sequence around the written element.
        let mut items = list.drain();
        let result = match items.get_mut(index) {
            Some(item) => set_at(&mut **item, step.rest, input),
            None => Ok(()),
        };
        for item in items {
            push(list, item)?;
        }
        return result;
    }

    let mut item = list.zero_item();
    set_at(&mut *item, step.rest, input)?;

    if list.len() < index {
        log::trace!(
            "padding `{}` from {} to {index} elements",
            list.reflect_type_path(),
            list.len(),
        );
    }
    while list.len() < index {
        let zero = list.zero_item();
        push(list, zero)?;
    }
    push(list, item)
}

fn set_entry(map: &mut dyn Map, step: &Step<'_>, input: Input<'_>) -> Result<(), AccessError> {
    string_keyed(map)?;
    let key = map_key(step)?;

    let mut slot = match map.get(&key) {
        Some(entry) => entry.reflect_clone(),
        None => map.zero_value(),
    };
    set_at(&mut *slot, step.rest, input)?;

    map.try_insert(Box::new(key), slot).map_err(|(_, value)| {
        walk::mismatched(format!(
            "cannot insert a `{}` into `{}`",
            value.reflect_type_path(),
            map.reflect_type_path(),
        ))
    })?;
    Ok(())
}

pub(crate) fn push(list: &mut dyn List, item: Box<dyn Reflect>) -> Result<(), AccessError> {
    list.try_push(item).map_err(|item| {
        walk::mismatched(format!(
            "cannot push a `{}` into `{}`",
            item.reflect_type_path(),
            list.reflect_type_path(),
        ))
    })
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{Input, set};
    use crate::Reflect;
    use crate::access::fixtures::{Company, Department, Language, Person, Phone, Project, company};
    use crate::access::{ErrorKind, get_as};

    #[test]
    fn set_then_get_round_trips() {
        let mut company = Company::default();
        set(&mut company, "Departments[0].Head.Name", "Ada").unwrap();
        set(&mut company, "Departments[0].Head.Age", "36").unwrap();
        set(&mut company, "Departments[0].Head.Height", "1.68").unwrap();
        set(&mut company, "Departments[0].Head.Active", "true").unwrap();

        let head = company.departments[0].as_ref().unwrap().head.as_ref().unwrap();
        assert_eq!(head.name, "Ada");
        assert_eq!(head.age, 36);
        assert_eq!(head.height, 1.68);
        assert!(head.active);
        assert_eq!(
            get_as::<String>(&company, "departments[0].head.name").unwrap().as_deref(),
            Some("Ada"),
        );
    }

    #[test]
    fn gap_filling_pads_with_zero_values() {
        let mut list: Vec<u32> = Vec::new();
        set(&mut list, "[3]", "9").unwrap();
        assert_eq!(list, [0, 0, 0, 9]);

        let mut company = Company::default();
        set(&mut company, "Departments[2].Name", "Research").unwrap();
        assert_eq!(company.departments.len(), 3);
        assert!(company.departments[0].is_none());
        assert_eq!(company.departments[2].as_ref().unwrap().name, "Research");
    }

    #[test]
    fn appends_in_call_order() {
        let mut person = Person::default();
        for number in ["1", "2", "3"] {
            set(&mut person, "Phones[].Number", number).unwrap();
        }
        let numbers: Vec<_> = person.phones.iter().map(|p| p.number.as_str()).collect();
        assert_eq!(numbers, ["1", "2", "3"]);
    }

    #[test]
    fn index_write_keeps_neighbours() {
        let mut person = Person {
            phones: vec![Phone::new("1"), Phone::new("2"), Phone::new("3")],
            ..Person::default()
        };
        set(&mut person, "Phones[1].Kind", "work").unwrap();
        assert_eq!(person.phones[0], Phone::new("1"));
        assert_eq!(person.phones[1].kind, "work");
        assert_eq!(person.phones[1].number, "2");
        assert_eq!(person.phones[2], Phone::new("3"));
    }

    #[test]
    fn failed_index_write_keeps_sequence() {
        let mut person = Person {
            phones: vec![Phone::new("1"), Phone::new("2")],
            ..Person::default()
        };
        let err = set(&mut person, "Phones[0].Fax", "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoSuchField);
        assert_eq!(person.phones, [Phone::new("1"), Phone::new("2")]);
    }

    #[test]
    fn map_entries_round_trip() {
        let mut company = Company::default();
        set(&mut company, "Languages.en.Name", "English").unwrap();
        set(&mut company, "Languages.fr.Name", "Anglais").unwrap();
        set(&mut company, "Languages[en].Code", "en").unwrap();

        assert_eq!(company.languages.len(), 2);
        assert_eq!(
            company.languages["en"],
            Language {
                code: "en".into(),
                name: "English".into(),
            },
        );
        assert_eq!(company.languages["fr"].name, "Anglais");
    }

    #[test]
    fn map_of_list_of_map() {
        let mut department = Department::default();
        set(&mut department, "Codes.eu[1].de", "DE-1").unwrap();
        set(&mut department, "Codes.eu[0].fr", "FR-0").unwrap();

        let eu = &department.codes["eu"];
        assert_eq!(eu.len(), 2);
        assert_eq!(eu[0]["fr"], "FR-0");
        assert_eq!(eu[1]["de"], "DE-1");
    }

    #[test]
    fn field_names_ignore_case() {
        let mut person = Person::default();
        set(&mut person, "name", "x").unwrap();
        set(&mut person, "NAME", "y").unwrap();
        assert_eq!(get_as::<String>(&person, "Name").unwrap().as_deref(), Some("y"));
    }

    #[test]
    fn coercion_overflow_is_invalid_value() {
        let mut person = Person::default();
        let err = set(&mut person, "Rank", "99999").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(err.path(), "Rank");
        assert_eq!(person.rank, 0);
    }

    #[test]
    fn bytes_and_text_cross_over() {
        let mut person = Person::default();
        set(&mut person, "Avatar", "png").unwrap();
        assert_eq!(person.avatar, b"png");

        set(&mut person, "Name", b"Grace".as_slice()).unwrap();
        assert_eq!(person.name, "Grace");

        let bytes = vec![b'4', b'2'];
        set(&mut person, "Age", &bytes).unwrap();
        assert_eq!(person.age, 42);
    }

    #[test]
    fn nil_resets_to_zero() {
        let mut company = company();
        set(&mut company, "Phone", Input::Nil).unwrap();
        assert!(company.phone.is_none());

        set(&mut company, "Departments", Input::Nil).unwrap();
        assert!(company.departments.is_empty());

        set(&mut company, "", Input::Nil).unwrap();
        assert_eq!(company, Company::default());
    }

    #[test]
    fn values_apply_structurally() {
        let mut company = Company::default();
        let phone = Phone::new("555");
        set(&mut company, "Phone", Input::value(&phone)).unwrap();
        assert_eq!(company.phone.as_deref(), Some(&phone));

        let boxed: Option<Box<Phone>> = Some(Box::new(Phone::new("777")));
        set(&mut company, "Phone", Input::value(&boxed)).unwrap();
        assert_eq!(company.phone.as_ref().unwrap().number, "777");

        let name = String::from("42");
        set(&mut company, "Departments[0].Head.Age", Input::value(&name)).unwrap();
        assert_eq!(
            get_as::<u8>(&company, "Departments[0].Head.Age").unwrap(),
            Some(42),
        );

        let empty: Option<Box<Phone>> = None;
        set(&mut company, "Phone", Input::value(&empty)).unwrap();
        assert!(company.phone.is_none());

        let err = set(&mut company, "Phone", Input::value(&5_u32)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MismatchedTypes);
    }

    #[test]
    fn other_record_types_are_rejected() {
        let language = Language {
            code: "en".into(),
            name: "English".into(),
        };

        let mut company = Company::default();
        let err = set(&mut company, "Phone", Input::value(&language)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MismatchedTypes);
        assert_eq!(err.path(), "Phone");
        assert!(company.phone.is_none());

        let mut company = company_with_phone();
        let err = set(&mut company, "Phone", Input::value(&language)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MismatchedTypes);
        assert_eq!(company.phone.as_deref(), Some(&Phone::new("555-0199")));

        let err = set(&mut company, "Departments[3].Head", Input::value(&language)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MismatchedTypes);
        assert_eq!(company.departments.len(), 1);
    }

    #[test]
    fn failed_value_write_keeps_earlier_elements() {
        let mut project = Project {
            members: vec![
                Some(Box::new(Person {
                    name: "Ada".into(),
                    ..Person::default()
                })),
                Some(Box::new(Person::default())),
            ],
            ..Project::default()
        };
        let phones: Vec<Option<Box<Phone>>> = vec![None, Some(Box::new(Phone::new("1")))];

        let err = set(&mut project, "Members", Input::value(&phones)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MismatchedTypes);
        assert_eq!(project.members.len(), 2);
        assert!(project.members[0].is_none());
        assert_eq!(project.members[1].as_deref(), Some(&Person::default()));
    }

    fn company_with_phone() -> Company {
        Company {
            phone: Some(Box::new(Phone::new("555-0199"))),
            ..Company::default()
        }
    }

    #[test]
    fn step_errors() {
        let mut company = Company::default();
        assert_eq!(set(&mut company, "Salary", "1").unwrap_err().kind(), ErrorKind::NoSuchField);
        assert_eq!(set(&mut company, "Name[0]", "1").unwrap_err().kind(), ErrorKind::InvalidIndex);
        assert_eq!(
            set(&mut company, "Departments[x].Name", "1").unwrap_err().kind(),
            ErrorKind::InvalidIndex,
        );
        assert_eq!(
            set(&mut company, "Languages[]", "1").unwrap_err().kind(),
            ErrorKind::InvalidIndex,
        );
        assert_eq!(
            set(&mut company, "Offices[1]", "a").unwrap_err().kind(),
            ErrorKind::InvalidKeyType,
        );
        assert_eq!(
            set(&mut company, "Departments[0]", "x").unwrap_err().kind(),
            ErrorKind::UnsupportedAssignment,
        );
    }

    #[test]
    fn shared_root_is_not_writable() {
        let mut shared = Arc::new(Phone::new("1"));
        let _other = Arc::clone(&shared);
        let err = set(&mut shared, "Number", "2").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RootNotWritable);

        let mut unique = Arc::new(Phone::new("1"));
        set(&mut unique, "Number", "2").unwrap();
        assert_eq!(unique.number, "2");
    }

    #[test]
    fn writes_before_a_failure_are_kept() {
        let mut company = Company::default();
        let err = set(&mut company, "Phone.Extension", "1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoSuchField);
        assert!(company.phone.is_some());
    }

    #[test]
    fn dynamic_roots_are_accepted() {
        let mut value: Box<dyn Reflect> = Box::new(Person::default());
        set(&mut *value, "Name", "Linus").unwrap();
        assert_eq!(value.downcast_ref::<Person>().unwrap().name, "Linus");
    }
}
