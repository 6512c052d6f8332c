#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! secretgen syntax nodes
//!
//! This crate defines the in-memory syntax structures that generators build
//! before handing them to a printer. Nodes carry no knowledge of the target
//! language's concrete syntax; escaping and layout are printer concerns.

pub mod enum_decl;

// Re-export the syntax nodes for convenience
pub use enum_decl::*;
