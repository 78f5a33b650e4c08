//! Paths to items of `refpath_reflect` used by the generated code.
//!
//! Every helper takes the crate path returned by [`refpath_reflect`] and
//! appends the item's location inside the crate.

use proc_macro2::TokenStream;
use quote::quote;

pub(crate) mod fp;

/// Locates `refpath_reflect` from the caller's point of view.
///
/// `::refpath_reflect` when the caller depends on it directly,
/// `::refpath::reflect` when it only depends on the facade. Without either
/// dependency the direct path is used, which is what code inside
/// `refpath_reflect` itself needs.
///
/// Reading the manifest is not free, so callers resolve this once per
/// expansion and pass the path down.
pub(crate) fn refpath_reflect() -> syn::Path {
    refpath_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("refpath_reflect"))
}

macro_rules! item_paths {
    ($($helper:ident => $($segment:ident)::+;)*) => {$(
        #[inline]
        pub(crate) fn $helper(refpath_reflect_path: &syn::Path) -> TokenStream {
            quote! { #refpath_reflect_path $(::$segment)+ }
        }
    )*};
}

item_paths! {
    reflect_ => Reflect;
    impls_ => impls;
    macro_utils_ => __macro_exports::macro_utils;

    non_generic_type_info_cell_ => impls::NonGenericTypeInfoCell;
    generic_type_info_cell_ => impls::GenericTypeInfoCell;
    generic_type_path_cell_ => impls::GenericTypePathCell;

    type_path_ => info::TypePath;
    typed_ => info::Typed;
    type_info_ => info::TypeInfo;
    struct_info_ => info::StructInfo;
    named_field_ => info::NamedField;
    reflect_kind_ => info::ReflectKind;

    apply_error_ => ops::ApplyError;
    reflect_ref_ => ops::ReflectRef;
    reflect_mut_ => ops::ReflectMut;
    struct_ => ops::Struct;
    struct_field_iter_ => ops::StructFieldIter;
}
