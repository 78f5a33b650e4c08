use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, ImplGenerics, Path, Type, TypeGenerics};

use super::{NamePieces, TypeNaming};

/// What every generator needs to know about the reflected type.
pub(crate) struct ReflectMeta<'a> {
    refpath_reflect_path: Path,
    naming: TypeNaming<'a>,
    /// Types of the reflected fields.
    field_types: Vec<Type>,
}

impl<'a> ReflectMeta<'a> {
    pub fn new(naming: TypeNaming<'a>) -> Self {
        Self {
            refpath_reflect_path: crate::path::refpath_reflect(),
            naming,
            field_types: Vec::new(),
        }
    }

    pub(super) fn with_field_types(mut self, field_types: Vec<Type>) -> Self {
        self.field_types = field_types;
        self
    }

    #[inline]
    pub fn refpath_reflect_path(&self) -> &Path {
        &self.refpath_reflect_path
    }

    #[inline]
    pub fn generics(&self) -> &'a Generics {
        self.naming.generics()
    }

    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.naming.is_generic()
    }

    /// The type after `impl .. for`, without generic arguments.
    #[inline]
    pub fn real_ident(&self) -> &TokenStream {
        self.naming.self_ty()
    }

    /// A bare primitive given to `impl_type_path!` must name a type in scope.
    pub fn assert_ident_tokens(&self) -> Option<TokenStream> {
        if !self.naming.is_primitive() {
            return None;
        }
        let ty = self.real_ident();
        Some(quote! {
            type __AssertPrimitiveIsAType = #ty;
        })
    }

    pub fn type_name(&self) -> NamePieces {
        let (type_path_, macro_utils_) = self.name_paths();
        self.naming.type_name(&type_path_, &macro_utils_)
    }

    pub fn type_path(&self) -> NamePieces {
        let (type_path_, macro_utils_) = self.name_paths();
        self.naming.type_path(&type_path_, &macro_utils_)
    }

    fn name_paths(&self) -> (TokenStream, TokenStream) {
        (
            crate::path::type_path_(&self.refpath_reflect_path),
            crate::path::macro_utils_(&self.refpath_reflect_path),
        )
    }

    /// Generics for an implementation, with the where clause extended.
    ///
    /// Type parameters must implement `TypePath`. With `add_reflect`, every
    /// field type must implement `Reflect + Typed`, and `Self` must be
    /// `Default + Clone`.
    ///
    /// Non-generic types keep their where clause as written, so a record
    /// may contain itself through a pointer.
    pub fn split_generics(
        &self,
        add_reflect: bool,
    ) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        use crate::path::fp::{AnyFP, CloneFP, DefaultFP, SendFP, SyncFP};

        let generics = self.generics();
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
        if !self.impl_with_generic() {
            return (impl_generics, ty_generics, where_clause.to_token_stream());
        }

        let type_path_ = crate::path::type_path_(&self.refpath_reflect_path);
        let mut bounds = vec![quote!(Self: #AnyFP + #SendFP + #SyncFP)];
        if let Some(where_clause) = where_clause {
            bounds.extend(where_clause.predicates.iter().map(ToTokens::to_token_stream));
        }
        bounds.extend(generics.type_params().map(|param| {
            let ident = &param.ident;
            quote!(#ident: #type_path_)
        }));

        if add_reflect {
            let reflect_ = crate::path::reflect_(&self.refpath_reflect_path);
            let typed_ = crate::path::typed_(&self.refpath_reflect_path);
            bounds.extend(self.field_types.iter().map(|ty| quote!(#ty: #reflect_ + #typed_)));
            bounds.push(quote!(Self: #DefaultFP + #CloneFP));
        }

        (impl_generics, ty_generics, quote! { where #(#bounds,)* })
    }
}
