//! Fully qualified paths of `core` items.
//!
//! Generated code must not depend on what the caller has in scope, so every
//! prelude item is spelled out.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_fp {
    ($($name:ident => $path:path;)*) => {
        $(
            pub(crate) struct $name;

            impl ToTokens for $name {
                #[inline]
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    quote!($path).to_tokens(tokens);
                }
            }
        )*
    };
}

define_fp! {
    AnyFP => ::core::any::Any;
    CloneFP => ::core::clone::Clone;
    DefaultFP => ::core::default::Default;
    OptionFP => ::core::option::Option;
    ResultFP => ::core::result::Result;
    SendFP => ::core::marker::Send;
    SyncFP => ::core::marker::Sync;
}
