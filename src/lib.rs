#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod checkers;
mod error;
mod helpers;
mod parser;

mod context;
mod link;
mod params_map;
mod snapshot;
mod uri;
mod uri_parts;

// Public API
pub use context::RequestContext;
pub use error::ParseError;
pub use link::congregate_link;
pub use params_map::{ParamValue, ParamsMap};
pub use parser::decompose;
pub use snapshot::UriSnapshot;
pub use uri::Uri;
pub use uri_parts::UriParts;

pub type Result<T> = core::result::Result<T, ParseError>;
