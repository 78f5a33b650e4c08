use alloc::boxed::Box;

use refpath_utils::hash::HashMap;

use crate::impls::eq_ignore_case;
use crate::info::{NamedField, Type, TypePath, impl_type_fn};
use crate::ops::Struct;

/// Static layout of a record: its fields in declaration order.
///
/// # Examples
///
/// ```
/// use refpath_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Default, Clone)]
/// struct Department {
///     id: i64,
///     name: String,
/// }
///
/// let info = Department::type_info().as_struct().unwrap();
/// assert_eq!(info.field_names(), &["id", "name"]);
/// assert!(info.field("id").unwrap().element().is::<i64>());
/// assert_eq!(info.field_ignore_case("NAME").unwrap().name(), "name");
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: HashMap<&'static str, NamedField>,
    field_names: Box<[&'static str]>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Builds the info for record `T` from its fields in declaration order.
    pub fn new<T: Struct + TypePath>(fields: &[NamedField]) -> Self {
        let field_names = fields.iter().map(NamedField::name).collect();
        let fields = fields.iter().map(|v| (v.name(), v.clone())).collect();

        Self {
            ty: Type::of::<T>(),
            fields,
            field_names,
        }
    }

    /// Looks up a field by its exact name.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(name)
    }

    /// Looks up a field by name, ignoring case.
    ///
    /// An exact match wins; otherwise the first field in declaration order
    /// whose name case-folds to `name` is returned.
    pub fn field_ignore_case(&self, name: &str) -> Option<&NamedField> {
        if let Some(field) = self.fields.get(name) {
            return Some(field);
        }
        self.field_names
            .iter()
            .find(|field_name| eq_ignore_case(field_name, name))
            .and_then(|field_name| self.fields.get(field_name))
    }

    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(self.field_names.get(index)?)
    }

    /// Iterates fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &NamedField> {
        self.field_names
            .iter()
            .filter_map(|name| self.fields.get(name))
    }

    #[inline]
    pub fn field_names(&self) -> &[&'static str] {
        &self.field_names
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_names.iter().position(|s| *s == name)
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.field_names.len()
    }
}
