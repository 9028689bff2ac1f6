#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Swift connection client generation.
//!
//! This crate turns the services of one `.proto` file into a Swift source file holding, per
//! service, a connection protocol and four implementations of it: a native bridge
//! connection, a gRPC connection, a REST connection and a mock.
//!
//! It focuses solely on rendering text. Decoding the plugin request, configuration and
//! output file naming live in companion crates.

pub mod code_writer;
pub mod generators;
pub mod naming;

use thiserror::Error;

pub use generators::{Artifact, FileGenerator, GeneratorOptions, MethodContext, ServiceContext};

/// Name of the generator as recorded in generated file headers.
pub const GENERATOR_NAME: &str = "protoc-gen-zap";

/// Error type for code generation operations in this crate.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Formatting error when building generated source.
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
    /// A method refers to a message type missing from the request.
    #[error("Unknown message type '{type_name}' referenced by method {method}")]
    UnknownType {
        /// Fully-qualified type reference
        type_name: String,
        /// Referencing method
        method: String,
    },
}

/// Convenient result type for codegen functions in this crate.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Normalize generated text: trailing whitespace trimmed per line, trailing blank lines
/// dropped, exactly one final newline.
pub fn clean_generated_source(source: &str) -> String {
    let mut cleaned = source.lines().map(str::trim_end).collect::<Vec<_>>().join("\n");
    let trimmed_len = cleaned.trim_end_matches('\n').len();
    cleaned.truncate(trimmed_len);
    cleaned.push('\n');
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_generated_source() {
        assert_eq!(clean_generated_source("a  \n\tb\t\n\n\n"), "a\n\tb\n");
        assert_eq!(clean_generated_source("x"), "x\n");
        assert_eq!(clean_generated_source("line\n    \nnext"), "line\n\nnext\n");
    }
}
