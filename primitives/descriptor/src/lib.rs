#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Zap descriptor model
//!
//! This crate turns the raw `CodeGeneratorRequest` that `protoc` hands to a plugin into a
//! navigable, read-only model of files, services and methods. It is the bridge between the
//! host compiler's wire format and the code generators: everything downstream works on
//! [`DescriptorSet`] and never touches protobuf bytes again.
//!
//! The request is decoded through the wire views in [`wire`], which mirror the subset of
//! `descriptor.proto` the generator needs and additionally carry the `google.api.http`
//! method option as a typed [`HttpRule`]. `prost_types` is used for everything else
//! (message type trees, file options, the plugin response).

use thiserror::Error;

pub mod model;
pub mod options;
pub mod request;
pub mod type_index;
pub mod wire;

pub use model::{DescriptorSet, FileDescriptor, MethodDescriptor, ServiceDescriptor};
pub use options::{CustomHttpPattern, HttpRule, MethodOptions, HTTP_RULE_EXTENSION_TAG};
pub use request::PluginRequest;
pub use type_index::{MessageRef, TypeIndex};

/// Errors raised while building the descriptor model.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The request bytes are not a valid `CodeGeneratorRequest`.
    #[error("Malformed CodeGeneratorRequest: {0}")]
    Decode(#[from] prost::DecodeError),
    /// A descriptor is missing a name the generator depends on.
    #[error("{kind} descriptor at {location} has no name")]
    MissingName {
        /// Descriptor kind ("file", "service", "method")
        kind: &'static str,
        /// Human-readable location of the descriptor
        location: String,
    },
    /// The model could not be rendered as JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenient result type for descriptor operations.
pub type Result<T> = std::result::Result<T, DescriptorError>;
