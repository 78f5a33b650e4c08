//! Static shape information for reflected types.
//!
//! Every reflected type has exactly one [`TypeInfo`], built lazily and cached
//! for the lifetime of the program. Path resolution (see
//! [`access::get_type`](crate::access::get_type)) walks these descriptors
//! without needing a value.
//!
//! - [`StructInfo`]: records with named fields.
//! - [`ListInfo`]: growable sequences.
//! - [`MapInfo`]: key/value maps.
//! - [`PointerInfo`]: optional or owning references to a single target.
//! - [`OpaqueInfo`]: scalars and anything else without inner structure.

// -----------------------------------------------------------------------------
// Modules

mod element_info;
mod field_info;
mod list_info;
mod map_info;
mod opaque_info;
mod pointer_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use element_info::ElementInfo;
pub use field_info::NamedField;
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use opaque_info::OpaqueInfo;
pub use pointer_info::PointerInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
