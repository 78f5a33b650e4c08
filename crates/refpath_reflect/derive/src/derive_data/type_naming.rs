//! Type names spelled out by the generated `TypePath` implementations.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::parse::ParseStream;
use syn::{GenericParam, Generics, Ident, Path};

// -----------------------------------------------------------------------------
// Pieces

enum Piece {
    /// Text known while expanding.
    Text(String),
    /// A constant `&'static str` expression, e.g. `module_path!()`.
    Const(TokenStream),
    /// A `&str` only known at runtime.
    Runtime(TokenStream),
}

/// A type name under construction, as a sequence of string pieces.
#[derive(Default)]
pub(crate) struct NamePieces(Vec<Piece>);

impl NamePieces {
    fn text(&mut self, text: &str) {
        match self.0.last_mut() {
            Some(Piece::Text(last)) => last.push_str(text),
            _ => self.0.push(Piece::Text(text.to_owned())),
        }
    }

    fn push(&mut self, piece: Piece) {
        self.0.push(piece);
    }

    fn piece_tokens(&self) -> impl Iterator<Item = TokenStream> + '_ {
        self.0.iter().map(|piece| match piece {
            Piece::Text(text) => text.to_token_stream(),
            Piece::Const(tokens) | Piece::Runtime(tokens) => tokens.clone(),
        })
    }

    /// A `&'static str` expression.
    ///
    /// Only valid when no piece is computed at runtime, which holds for every
    /// type without generic parameters.
    pub fn to_static(&self) -> TokenStream {
        if let [Piece::Text(text)] = self.0.as_slice() {
            return text.to_token_stream();
        }
        let pieces = self.piece_tokens();
        quote! { ::core::concat!(#(#pieces),*) }
    }

    /// An expression allocating the name as a `String`.
    pub fn to_string_expr(&self, macro_utils_: &TokenStream) -> TokenStream {
        let pieces = self.piece_tokens();
        quote! { #macro_utils_::__concat(&[#(#pieces),*]) }
    }
}

// -----------------------------------------------------------------------------
// TypeNaming

/// Where the module part of a type path comes from.
enum Module {
    /// Primitives have none.
    None,
    /// Types declared by the deriving crate use `module_path!()`.
    Caller,
    /// Foreign types carry it in their path.
    Written(String),
}

/// The naming of one type: its ident, module and generic parameters.
pub(crate) struct TypeNaming<'a> {
    self_ty: TokenStream,
    ident: &'a Ident,
    module: Module,
    generics: &'a Generics,
}

impl<'a> TypeNaming<'a> {
    /// A type declared in the caller's crate.
    pub fn local(ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            self_ty: ident.to_token_stream(),
            ident,
            module: Module::Caller,
            generics,
        }
    }

    /// A type named by `impl_type_path!`.
    pub fn foreign(foreign: &'a ForeignType) -> Self {
        let segments = &foreign.path.segments;
        let module = match foreign.path.leading_colon {
            None => Module::None,
            Some(_) => Module::Written(
                segments
                    .iter()
                    .take(segments.len() - 1)
                    .map(|segment| segment.ident.to_string())
                    .collect::<Vec<_>>()
                    .join("::"),
            ),
        };
        Self {
            self_ty: foreign.path.to_token_stream(),
            ident: &foreign.ident,
            module,
            generics: &foreign.generics,
        }
    }

    /// The type as written after `impl .. for`, without generic arguments.
    #[inline]
    pub fn self_ty(&self) -> &TokenStream {
        &self.self_ty
    }

    #[inline]
    pub fn generics(&self) -> &'a Generics {
        self.generics
    }

    #[inline]
    pub fn is_primitive(&self) -> bool {
        matches!(self.module, Module::None)
    }

    /// Whether implementations need generic parameters; lifetimes alone
    /// do not count.
    pub fn is_generic(&self) -> bool {
        self.generics
            .params
            .iter()
            .any(|param| !matches!(param, GenericParam::Lifetime(_)))
    }

    /// `Name<A, B>`, where each argument is the parameter's `type_name()`.
    pub fn type_name(&self, type_path_: &TokenStream, macro_utils_: &TokenStream) -> NamePieces {
        let mut pieces = NamePieces::default();
        self.push_name(&mut pieces, quote!(type_name), type_path_, macro_utils_);
        pieces
    }

    /// `module::Name<A, B>`, where each argument is the parameter's
    /// `type_path()`.
    pub fn type_path(&self, type_path_: &TokenStream, macro_utils_: &TokenStream) -> NamePieces {
        let mut pieces = NamePieces::default();
        match &self.module {
            Module::None => {}
            Module::Caller => {
                pieces.push(Piece::Const(quote!(::core::module_path!())));
                pieces.text("::");
            }
            Module::Written(module) => {
                pieces.text(module);
                pieces.text("::");
            }
        }
        self.push_name(&mut pieces, quote!(type_path), type_path_, macro_utils_);
        pieces
    }

    fn push_name(
        &self,
        pieces: &mut NamePieces,
        param_fn: TokenStream,
        type_path_: &TokenStream,
        macro_utils_: &TokenStream,
    ) {
        pieces.text(&self.ident.to_string());
        if !self.is_generic() {
            return;
        }

        pieces.text("<");
        let params = self.generics.params.iter().filter_map(|param| match param {
            GenericParam::Type(param) => {
                let ident = &param.ident;
                Some(quote! { <#ident as #type_path_>::#param_fn() })
            }
            GenericParam::Const(param) => {
                let ident = &param.ident;
                Some(quote! { &#macro_utils_::ToString::to_string(&#ident) as &str })
            }
            GenericParam::Lifetime(_) => None,
        });
        for (index, param) in params.enumerate() {
            if index > 0 {
                pieces.text(", ");
            }
            pieces.push(Piece::Runtime(param));
        }
        pieces.text(">");
    }
}

// -----------------------------------------------------------------------------
// ForeignType

/// Input of `impl_type_path!`: `::path::to::Type<T, ..> where ..`, or a bare
/// primitive such as `u8`.
pub(crate) struct ForeignType {
    path: Path,
    ident: Ident,
    generics: Generics,
}

impl ForeignType {
    pub fn parse(input: ParseStream) -> syn::Result<Self> {
        let path = Path::parse_mod_style(input)?;
        let Some(last) = path.segments.last() else {
            return Err(input.error("expected a type path"));
        };
        if path.leading_colon.is_none() && path.segments.len() > 1 {
            return Err(syn::Error::new_spanned(
                &path,
                "write foreign types with a leading `::`, or a bare primitive",
            ));
        }
        let ident = last.ident.clone();

        let mut generics: Generics = input.parse()?;
        generics.where_clause = input.parse()?;

        Ok(Self {
            path,
            ident,
            generics,
        })
    }
}
