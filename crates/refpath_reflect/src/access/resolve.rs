use crate::access::{Step, StepKind};
use crate::info::{TypeInfo, Typed};

/// Resolves the type reachable at `path` from a value of type `info`,
/// without needing a value.
///
/// Pointer types are followed through. Sequence and map steps resolve to
/// the item or value type whatever their token. Record fields are matched
/// ignoring case. Returns `None` when a step names nothing.
///
/// With an empty path, `info` itself is returned.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use refpath_reflect::{access, derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Default, Clone)]
/// struct Office {
///     city: String,
///     desks: Vec<Option<Box<u32>>>,
///     rooms: BTreeMap<String, Vec<u8>>,
/// }
///
/// let info = <Office as Typed>::type_info();
/// assert!(access::get_type(info, "City").unwrap().type_is::<String>());
/// assert!(access::get_type(info, "desks[3]").unwrap().type_is::<Option<Box<u32>>>());
/// assert!(access::get_type(info, "rooms.any[0]").unwrap().type_is::<u8>());
/// assert!(access::get_type(info, "floor").is_none());
/// ```
pub fn get_type(info: &'static TypeInfo, path: &str) -> Option<&'static TypeInfo> {
    let Some(step) = Step::parse(path) else {
        return Some(info);
    };

    match info.pointee() {
        TypeInfo::List(list) => get_type(list.item().info(), step.rest),
        TypeInfo::Map(map) => get_type(map.value().info(), step.rest),
        TypeInfo::Struct(record) if step.kind == StepKind::Field => {
            get_type(record.field_ignore_case(step.token)?.element().info(), step.rest)
        }
        _ => None,
    }
}

/// [`get_type`] starting from `T`.
#[inline]
pub fn type_of<T: Typed>(path: &str) -> Option<&'static TypeInfo> {
    get_type(T::type_info(), path)
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::type_of;
    use crate::access::fixtures::{Company, Department, Person};

    #[test]
    fn resolves_through_pointers() {
        let info = type_of::<Company>("Departments[0].Head.Name").unwrap();
        assert!(info.type_is::<String>());

        let info = type_of::<Option<Company>>("departments").unwrap();
        assert!(info.is_list());
    }

    #[test]
    fn empty_path_keeps_pointer() {
        let info = type_of::<Option<Department>>("").unwrap();
        assert!(info.is_pointer());
    }

    #[test]
    fn unknown_or_bracketed_fields_fail() {
        assert!(type_of::<Person>("Nickname").is_none());
        assert!(type_of::<Person>("[0]").is_none());
        assert!(type_of::<Person>("Name.First").is_none());
    }
}
