//! Utilities for implementing the reflection traits, and the implementations
//! for foreign types.
//!
//! - [`concat`]: string concatenation used by generic `TypePath` implementations.
//! - [`NonGenericTypeInfoCell`], [`GenericTypeInfoCell`], [`GenericTypePathCell`]:
//!   static storage for type information.
//! - `xxx_try_apply`, `xxx_debug`: shape-generic bodies for
//!   the corresponding [`Reflect`](crate::Reflect) methods.
//! - [`eq_ignore_case`]: the name comparison used for record fields.
//!
//! ## Implemented Menu
//!
//! - native: `bool`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`, `String`
//! - core: `Option<T>`
//! - alloc: `Vec<T>`, `Box<T>`, `Arc<T>`, `BTreeMap<K, V>`
//! - std: `HashMap<K, V, S>`, `RandomState`
//! - refpath_utils: `hashbrown::HashMap<K, V, S>`, `FixedHashState`, `NoOpHashState`

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod utils;

mod alloc;
mod core;
mod native;
mod refpath_utils;
mod std;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

pub use utils::*;

/// String concatenation with a single allocation.
///
/// # Example
///
/// ```
/// use refpath_reflect::impls;
///
/// let s = impls::concat(&["module", "::", "name", "<", "T" , ">"]);
///
/// assert_eq!(s, "module::name<T>");
/// assert_eq!(s.capacity(), 15);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let len = arr.iter().map(|item| item.len()).sum();
    let mut res = ::alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}
