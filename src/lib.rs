#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use refpath_reflect as reflect;
pub use refpath_utils as utils;

pub use refpath_reflect::Reflect;
pub use refpath_reflect::derive::Reflect;

pub use refpath_reflect::access::{AccessError, ErrorKind, Fetched, Input};
pub use refpath_reflect::access::{delete, get, get_as, must_get, set};
pub use refpath_reflect::access::{for_each, for_each_entry, populate};
pub use refpath_reflect::access::{get_type, is_nil, type_of};
