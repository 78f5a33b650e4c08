use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Options set through `#[reflect(..)]` on a field.
///
/// - `#[reflect(skip)]`
/// - `#[reflect(rename = "Name")]`
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    pub skip: bool,
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    if this.skip {
                        return Err(meta.error("duplicate `skip`"));
                    }
                    this.skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    if this.rename.is_some() {
                        return Err(meta.error("duplicate `rename`"));
                    }
                    let lit: LitStr = meta.value()?.parse()?;
                    let name = lit.value();
                    if name.is_empty() {
                        return Err(syn::Error::new(lit.span(), "field name can not be empty"));
                    }
                    if name.contains(['.', '[', ']']) {
                        return Err(syn::Error::new(
                            lit.span(),
                            "field name can not contain path separators",
                        ));
                    }
                    this.rename = Some(lit);
                    Ok(())
                } else {
                    Err(meta.error("unsupported reflect attribute, expected `skip` or `rename`"))
                }
            })?;
        }

        Ok(this)
    }
}
