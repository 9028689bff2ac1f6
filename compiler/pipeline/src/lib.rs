#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! High-level pipeline behind the `protoc-gen-zap` plugin binary.
//!
//! One invocation decodes a `CodeGeneratorRequest`, reads the plugin configuration from its
//! parameter string, renders a Swift file for every proto file that declares services and
//! encodes the `CodeGeneratorResponse`.
//!
//! ## Module Organization
//!
//! - `orchestration` - Entry points (`generate`, `run`)
//! - `output_naming` - Run-wide unique output file names

use thiserror::Error;

/// Convenient result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that abort a plugin run. None of them produce partial output.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The request could not be decoded or modelled.
    #[error(transparent)]
    Descriptor(#[from] descriptor::DescriptorError),
    /// The plugin parameter or configuration file is invalid.
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    /// Error propagated from the codegen crate.
    #[error(transparent)]
    Codegen(#[from] codegen::CodegenError),
    /// The response could not be encoded.
    #[error("Failed to encode CodeGeneratorResponse: {0}")]
    Encode(#[from] prost::EncodeError),
    /// I/O error on standard input or output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub mod orchestration;
pub mod output_naming;

pub use orchestration::{generate, run, FEATURE_PROTO3_OPTIONAL};
pub use output_naming::UniqueFileNameTable;
