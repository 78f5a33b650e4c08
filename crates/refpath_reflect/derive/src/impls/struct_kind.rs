use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::{impl_trait_type_path, impl_trait_typed};

use crate::derive_data::{FieldAccessors, ReflectStruct};
use crate::path::fp::{CloneFP, DefaultFP, OptionFP, ResultFP};

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(info);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let refpath_reflect_path = meta.refpath_reflect_path();
    let struct_ = crate::path::struct_(refpath_reflect_path);
    let reflect_ = crate::path::reflect_(refpath_reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(refpath_reflect_path);
    let option_ = OptionFP.to_token_stream();

    let FieldAccessors {
        fields_ref,
        fields_mut,
        field_names,
        field_indices,
        field_count,
    } = FieldAccessors::new(info);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(#fields_ref),)*
                    _ => #option_::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #option_<&mut dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(#fields_mut),)*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(#fields_ref),)*
                    _ => #option_::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #option_<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(#fields_mut),)*
                    _ => #option_::None,
                }
            }

            fn name_at(&self, index: usize) -> #option_<&str> {
                match index {
                    #(#field_indices => #option_::Some(#field_names),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}

/// Generate `Reflect` trait implementation tokens.
///
/// Zero values come from `Default`, copies from `Clone`. Values of other
/// types are rejected by `struct_try_apply`.
fn impl_trait_reflect(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let refpath_reflect_path = meta.refpath_reflect_path();
    let reflect_ = crate::path::reflect_(refpath_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(refpath_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(refpath_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(refpath_reflect_path);
    let apply_error_ = crate::path::apply_error_(refpath_reflect_path);
    let impls_ = crate::path::impls_(refpath_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(refpath_reflect_path);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            fn set(
                &mut self,
                value: #macro_utils_::Box<dyn #reflect_>,
            ) -> #ResultFP<(), #macro_utils_::Box<dyn #reflect_>> {
                *self = <dyn #reflect_>::take::<Self>(value)?;
                #ResultFP::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Struct(self)
            }

            #[inline]
            fn reset(&mut self) {
                *self = <Self as #DefaultFP>::default();
            }

            fn try_apply(&mut self, value: &dyn #reflect_) -> #ResultFP<(), #apply_error_> {
                if let #OptionFP::Some(value) = <dyn #reflect_>::downcast_ref::<Self>(value) {
                    #CloneFP::clone_from(self, value);
                    return #ResultFP::Ok(());
                }
                #impls_::struct_try_apply(self, value)
            }

            #[inline]
            fn reflect_clone(&self) -> #macro_utils_::Box<dyn #reflect_> {
                #macro_utils_::Box::new(<Self as #CloneFP>::clone(self))
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #impls_::struct_debug(self, f)
            }
        }
    }
}
