use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, LitStr, Member, spanned::Spanned};

use super::{FieldAttributes, ReflectMeta, TypeNaming};
use crate::REFLECT_ATTRIBUTE_NAME;

/// A field of a reflected struct.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
    /// Position among all fields of the struct, skipped ones included.
    pub declaration_index: usize,
}

impl StructField<'_> {
    /// The name the field is reflected under.
    pub fn reflect_name(&self) -> LitStr {
        if let Some(rename) = &self.attrs.rename {
            return rename.clone();
        }
        match &self.data.ident {
            Some(ident) => LitStr::new(&ident.to_string(), ident.span()),
            None => LitStr::new(&self.declaration_index.to_string(), self.data.span()),
        }
    }

    /// The member used to access the field, e.g. `self.#member`.
    pub fn member(&self) -> Member {
        match &self.data.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(self.declaration_index.into()),
        }
    }
}

/// A struct with named fields, parsed from `#[derive(Reflect)]` input.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let named = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                Fields::Unnamed(_) => {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        "`Reflect` can not be derived for tuple structs, use named fields",
                    ));
                }
                Fields::Unit => {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        "`Reflect` can not be derived for unit structs",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`Reflect` can not be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`Reflect` can not be derived for unions",
                ));
            }
        };

        if let Some(attr) = input
            .attrs
            .iter()
            .find(|attr| attr.path().is_ident(REFLECT_ATTRIBUTE_NAME))
        {
            return Err(syn::Error::new(
                attr.span(),
                "`#[reflect(..)]` is only supported on fields",
            ));
        }

        if let Some(lifetime) = input.generics.lifetimes().next() {
            return Err(syn::Error::new(
                lifetime.span(),
                "reflected types must be `'static`, lifetime parameters are not supported",
            ));
        }

        let mut fields = Vec::with_capacity(named.named.len());
        for (declaration_index, data) in named.named.iter().enumerate() {
            let attrs = FieldAttributes::parse_attrs(&data.attrs)?;
            fields.push(StructField {
                data,
                attrs,
                declaration_index,
            });
        }

        let visible: Vec<&StructField> = fields.iter().filter(|f| !f.attrs.skip).collect();
        check_case_collisions(&visible)?;
        let active_types = visible.iter().map(|f| f.data.ty.clone()).collect();

        let meta = ReflectMeta::new(TypeNaming::local(&input.ident, &input.generics))
            .with_field_types(active_types);

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// The reflected fields in declaration order.
    ///
    /// The position in this iterator is the reflected field index.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| !field.attrs.skip)
    }

    /// Builds the `TypeInfo` expression:
    ///
    /// ```ignore
    /// TypeInfo::Struct(StructInfo::new::<Self>(&[
    ///     NamedField::new::<FieldTy>("name"),
    ///     ..
    /// ]))
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let refpath_reflect_path = self.meta.refpath_reflect_path();
        let type_info_ = crate::path::type_info_(refpath_reflect_path);
        let struct_info_ = crate::path::struct_info_(refpath_reflect_path);
        let named_field_ = crate::path::named_field_(refpath_reflect_path);

        let fields = self.active_fields().map(|field| {
            let ty = &field.data.ty;
            let name = field.reflect_name();
            quote! { #named_field_::new::<#ty>(#name) }
        });

        quote! {
            #type_info_::Struct(#struct_info_::new::<Self>(&[
                #(#fields),*
            ]))
        }
    }
}

/// Field lookups fold case, so no two names may fold to the same string.
fn check_case_collisions(fields: &[&StructField]) -> syn::Result<()> {
    let names: Vec<(String, LitStr)> = fields
        .iter()
        .map(|field| {
            let name = field.reflect_name();
            (name.value().to_lowercase(), name)
        })
        .collect();

    for (index, (folded, lit)) in names.iter().enumerate() {
        if let Some((_, earlier)) = names[..index].iter().find(|(f, _)| f == folded) {
            return Err(syn::Error::new(
                lit.span(),
                format!(
                    "field name `{}` collides with `{}` under case-insensitive lookup",
                    lit.value(),
                    earlier.value(),
                ),
            ));
        }
    }
    Ok(())
}

/// Field accessor tokens, one entry per reflected field, in index order.
pub(crate) struct FieldAccessors {
    /// `&self.x` coerced to `&dyn Reflect`.
    pub fields_ref: Vec<TokenStream>,
    /// `&mut self.x` coerced to `&mut dyn Reflect`.
    pub fields_mut: Vec<TokenStream>,
    /// The reflected names.
    pub field_names: Vec<LitStr>,
    /// The reflected indices, `0..field_count`.
    pub field_indices: Vec<usize>,
    pub field_count: usize,
}

impl FieldAccessors {
    pub fn new(info: &ReflectStruct) -> Self {
        let reflect_ = crate::path::reflect_(info.meta().refpath_reflect_path());

        let mut fields_ref = Vec::new();
        let mut fields_mut = Vec::new();
        let mut field_names = Vec::new();

        for field in info.active_fields() {
            let member = field.member();
            fields_ref.push(quote! {
                #reflect_::as_reflect(&self.#member)
            });
            fields_mut.push(quote! {
                #reflect_::as_reflect_mut(&mut self.#member)
            });
            field_names.push(field.reflect_name());
        }

        let field_count = field_names.len();

        Self {
            fields_ref,
            fields_mut,
            field_names,
            field_indices: (0..field_count).collect(),
            field_count,
        }
    }
}
