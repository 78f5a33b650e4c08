//! See following macros:
//!
//! - [`Reflect`]
//! - [`impl_type_path`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Record Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits for a struct with
/// named fields:
///
/// - `TypePath`
/// - `Typed`
/// - `Struct`
/// - `Reflect`
///
/// The type must also implement `Default` and `Clone`. `Default` provides
/// the zero value used when a path write allocates a missing link, `Clone`
/// backs `reflect_clone` and same-type `try_apply`.
///
/// Tuple structs, unit structs, enums and unions are rejected.
///
/// ## Field Names
///
/// Fields are reflected under their Rust identifier. Path lookups compare
/// names case-insensitively, so two fields whose names fold to the same
/// lowercase string are a compile error.
///
/// ```rust, ignore
/// #[derive(Reflect, Default, Clone)]
/// struct Person {
///     #[reflect(rename = "Name")]
///     name: String,
///     age: u8,
/// }
/// ```
///
/// ## Skipped Fields
///
/// `#[reflect(skip)]` hides a field from reflection entirely: it is absent
/// from the type information, `field_len` does not count it, and no path can
/// reach it. The field still takes part in `Clone` and `Default`.
///
/// ```rust, ignore
/// #[derive(Reflect, Default, Clone)]
/// struct Session {
///     user: String,
///     #[reflect(skip)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// ## Generics
///
/// Type parameters get `TypePath` bounds on the `TypePath` implementation,
/// and every field type gets `Reflect + Typed` bounds on the others.
/// Non-generic types carry no field bounds, which keeps self-referential
/// records such as `struct Node { next: Option<Box<Node>> }` well-formed.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}

/// Implements `TypePath` for a type defined outside the current crate.
///
/// The type must be written with its full path and a leading `::`.
/// Primitives are written bare.
///
/// ## Example
///
/// ```rust, ignore
/// impl_type_path!(u8);
/// impl_type_path!(::alloc::string::String);
/// impl_type_path!(::alloc::vec::Vec<T>);
/// impl_type_path!(::std::collections::HashMap<K, V, S>);
/// ```
///
/// Generic parameters receive `TypePath` bounds automatically, and the
/// generated `type_path` and `type_name` spell them out, e.g.
/// `alloc::vec::Vec<u8>` and `Vec<u8>`.
#[proc_macro]
pub fn impl_type_path(input: TokenStream) -> TokenStream {
    use crate::derive_data::{ForeignType, ReflectMeta, TypeNaming};

    let foreign = parse_macro_input!(input with ForeignType::parse);
    let meta = ReflectMeta::new(TypeNaming::foreign(&foreign));
    let assert_tokens = meta.assert_ident_tokens();

    let type_path_impls = impls::impl_trait_type_path(&meta);

    quote! {
        const _: () = {
            #assert_tokens
            #type_path_impls
        };
    }
    .into()
}
