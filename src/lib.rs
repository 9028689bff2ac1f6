// SPDX-License-Identifier: CC0-1.0

//! Zap umbrella crate.
//!
//! This crate primarily serves as the workspace root for `protoc-gen-zap`.
//!
//! All functional code lives in the workspace member crates under
//! `primitives/` (descriptor model, path helpers) and `compiler/`
//! (semantics, code generation, configuration, logging, and the plugin pipeline).

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![warn(deprecated_in_future)]
#![doc(test(attr(warn(unused))))]

/// Miscellaneous metadata about the Zap workspace.
pub mod zap_meta {
    /// Version string for the umbrella crate, as reported by Cargo.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
