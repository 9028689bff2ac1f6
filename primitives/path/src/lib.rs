// SPDX-License-Identifier: CC0-1.0

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Path utility functions for `.proto` file names and generated output names.
//!
//! This module provides the splitting of proto path names into directory, base and
//! suffix parts, and the file-naming policies used to derive output file names.

pub mod path_utils;

// Re-export for convenience
pub use path_utils::*;
