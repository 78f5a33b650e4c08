use alloc::vec::Vec;
use core::any::TypeId;

use crate::Reflect;
use crate::access::AccessError;
use crate::access::walk::{is_nil, vivify};
use crate::ops::ReflectMut;

/// Allocates every empty pointer field of a record, recursively.
///
/// The root's own pointer chain is allocated first. Then each null pointer
/// field gets its default target, which is populated in turn. Pointers
/// that are already set are left as they are.
///
/// A field whose target type is already being populated further up is left
/// empty, so recursive types terminate.
///
/// # Errors
///
/// [`RootNotWritable`](crate::access::ErrorKind::RootNotWritable) if the
/// root chain contains a shared `Arc`.
///
/// # Examples
///
/// ```
/// use refpath_reflect::{access, derive::Reflect};
///
/// #[derive(Reflect, Default, Clone)]
/// struct Address { city: String }
///
/// #[derive(Reflect, Default, Clone)]
/// struct Employee {
///     address: Option<Box<Address>>,
///     manager: Option<Box<Employee>>,
/// }
///
/// let mut employee = Employee::default();
/// access::populate(&mut employee).unwrap();
///
/// assert!(employee.address.is_some());
/// assert!(employee.manager.is_none());
/// ```
pub fn populate(value: &mut dyn Reflect) -> Result<(), AccessError> {
    populate_in(value, &mut Vec::new())
}

fn populate_in(value: &mut dyn Reflect, active: &mut Vec<TypeId>) -> Result<(), AccessError> {
    let value = vivify(value)?;
    let Ok(info) = value.reflect_type_info().as_struct() else {
        return Ok(());
    };
    let ReflectMut::Struct(record) = value.reflect_mut() else {
        return Ok(());
    };

    active.push(info.ty_id());
    for (index, field_info) in info.iter().enumerate() {
        let field_type = field_info.element().info();
        if !field_type.is_pointer() {
            continue;
        }
        let Some(field) = record.field_at_mut(index) else {
            continue;
        };
        if !is_nil(field) {
            continue;
        }

        let target = field_type.pointee();
        if active.contains(&target.ty_id()) {
            log::warn!(
                "leaving `{}.{}` empty: `{}` is already being populated",
                info.type_name(),
                field_info.name(),
                target.type_path(),
            );
            continue;
        }
        populate_in(field, active)?;
    }
    active.pop();
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::sync::Arc;

    use super::populate;
    use crate::access::ErrorKind;
    use crate::access::fixtures::{Company, Person, Phone};

    #[test]
    fn fills_nested_pointers() {
        let mut company = Company::default();
        populate(&mut company).unwrap();
        assert_eq!(company.phone.as_deref(), Some(&Phone::default()));
        assert!(company.departments.is_empty());
    }

    #[test]
    fn recursive_fields_stay_empty() {
        let mut person = Person::default();
        populate(&mut person).unwrap();
        assert!(person.phone.is_some());
        assert!(person.spouse.is_none());
    }

    #[test]
    fn set_pointers_are_kept() {
        let mut person = Person {
            phone: Some(Box::new(Phone::new("42"))),
            ..Person::default()
        };
        populate(&mut person).unwrap();
        assert_eq!(person.phone.unwrap().number, "42");
    }

    #[test]
    fn root_chain_is_allocated() {
        let mut root: Option<Box<Person>> = None;
        populate(&mut root).unwrap();
        assert!(root.unwrap().phone.is_some());
    }

    #[test]
    fn shared_root_fails() {
        let mut root = Arc::new(Person::default());
        let _other = Arc::clone(&root);
        assert_eq!(populate(&mut root).unwrap_err().kind(), ErrorKind::RootNotWritable);
    }
}
