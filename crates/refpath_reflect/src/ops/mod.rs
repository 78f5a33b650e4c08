//! Runtime operations on reflected values.
//!
//! Each [`ReflectKind`](crate::info::ReflectKind) has a subtrait of
//! [`Reflect`](crate::Reflect) carrying the operations for that shape:
//!
//! - [`Struct`]: named field access for records.
//! - [`List`]: indexed access, push and drain for sequences.
//! - [`Map`]: keyed lookup, insert and remove.
//! - [`Pointer`]: looking through and allocating optional references.
//!
//! [`ReflectRef`] and [`ReflectMut`] select the right subtrait for a
//! `dyn Reflect`.

// -----------------------------------------------------------------------------
// Modules

mod apply_error;
mod kind;
mod list_ops;
mod map_ops;
mod pointer_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use apply_error::ApplyError;
pub use kind::{ReflectMut, ReflectRef};
pub use list_ops::{List, ListItemIter};
pub use map_ops::Map;
pub use pointer_ops::Pointer;
pub use struct_ops::{Struct, StructFieldIter};
