//! Parsing of macro input into the data the generators consume.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod reflect_meta;
mod reflect_struct;
mod type_naming;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use reflect_meta::ReflectMeta;
pub(crate) use reflect_struct::{FieldAccessors, ReflectStruct};
pub(crate) use type_naming::{ForeignType, NamePieces, TypeNaming};
