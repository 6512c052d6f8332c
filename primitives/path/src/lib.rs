// SPDX-License-Identifier: CC0-1.0

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Path utility functions for laying out generated modules.
//!
//! This crate provides utilities for computing output base paths, rewriting
//! template paths onto those bases, and normalising separators so that module
//! paths are slash-delimited on every platform.

pub mod path_utils;

// Re-export for convenience
pub use path_utils::*;
