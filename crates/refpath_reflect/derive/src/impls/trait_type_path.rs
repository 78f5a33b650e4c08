use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generates the `TypePath` implementation.
///
/// Names of non-generic types are string constants. Generic types build
/// theirs at runtime from the parameters' names, once per instantiation,
/// and keep them in a `GenericTypePathCell`.
pub(crate) fn impl_trait_type_path(meta: &ReflectMeta) -> TokenStream {
    let refpath_reflect_path = meta.refpath_reflect_path();
    let type_path_ = crate::path::type_path_(refpath_reflect_path);

    let (path_body, name_body) = if meta.impl_with_generic() {
        let path_cell_ = crate::path::generic_type_path_cell_(refpath_reflect_path);
        let macro_utils_ = crate::path::macro_utils_(refpath_reflect_path);
        let build_path = meta.type_path().to_string_expr(&macro_utils_);
        let build_name = meta.type_name().to_string_expr(&macro_utils_);
        (
            quote! {
                static PATHS: #path_cell_ = #path_cell_::new();
                PATHS.get_or_insert::<Self>(|| #build_path)
            },
            quote! {
                static NAMES: #path_cell_ = #path_cell_::new();
                NAMES.get_or_insert::<Self>(|| #build_name)
            },
        )
    } else {
        (meta.type_path().to_static(), meta.type_name().to_static())
    };

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(false);

    quote! {
        impl #impl_generics #type_path_ for #real_ident #ty_generics #where_clause {
            fn type_path() -> &'static str {
                #path_body
            }

            fn type_name() -> &'static str {
                #name_body
            }
        }
    }
}
