//! Path-addressed reads and writes on reflected values.
//!
//! A path is a chain of steps:
//!
//! - `Name` or `.Name`: a record field, matched ignoring case, or a map key;
//! - `[n]`: a sequence index;
//! - `[]`: the end of a sequence, for appending;
//! - `[key]`: a map key.
//!
//! For example `Departments[2].Head.Phones[].Number` or `Languages[en].Name`.
//! Map keys must be `String`s.
//!
//! | Operation | Function |
//! |-----------|----------|
//! | Read | [`get`], [`get_as`], [`must_get`] |
//! | Write, allocating missing links | [`set`] |
//! | Remove or reset | [`delete`] |
//! | Resolve a type without a value | [`get_type`], [`type_of`] |
//! | Iterate a sequence or map | [`for_each`], [`for_each_entry`] |
//! | Allocate empty pointer fields | [`populate`] |
//!
//! Pointer types are links: `Option<T>` may be null, `Box<T>` never is,
//! and `Arc<T>` can only be written through while it is not shared.
//!
//! # Examples
//!
//! ```
//! use refpath_reflect::{access, derive::Reflect};
//!
//! #[derive(Reflect, Default, Clone, Debug)]
//! struct Phone { number: String }
//!
//! #[derive(Reflect, Default, Clone, Debug)]
//! struct Person { name: String, phones: Vec<Phone> }
//!
//! let mut person = Person::default();
//! access::set(&mut person, "name", "Ada").unwrap();
//! access::set(&mut person, "Phones[].Number", "555-0100").unwrap();
//!
//! let number = access::get_as::<String>(&person, "phones[0].number").unwrap();
//! assert_eq!(number.as_deref(), Some("555-0100"));
//!
//! access::delete(&mut person, "Phones[0]").unwrap();
//! assert!(person.phones.is_empty());
//! ```

// -----------------------------------------------------------------------------
// Modules

mod coerce;
mod delete;
mod error;
mod for_each;
mod get;
mod populate;
mod resolve;
mod set;
mod step;
mod walk;

#[cfg(test)]
mod fixtures;

// -----------------------------------------------------------------------------
// Exports

pub use delete::delete;
pub use error::{AccessError, ErrorKind};
pub use for_each::{for_each, for_each_entry};
pub use get::{Fetched, get, get_as, must_get};
pub use populate::populate;
pub use resolve::{get_type, type_of};
pub use set::{Input, set};
pub use step::{Step, StepKind, Steps, steps};
pub use walk::is_nil;
