//! Items referenced by code generated from `refpath_reflect_derive`.
//!
//! Not part of the public API.

pub mod macro_utils {
    pub use ::alloc::boxed::Box;
    pub use ::alloc::string::ToString;

    pub use crate::impls::concat as __concat;
}
