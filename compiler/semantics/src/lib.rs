#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Semantic analysis of RPC method descriptors.
//!
//! Derives what a method means for code generation: its streaming shape, its REST binding
//! (read from the `google.api.http` annotation), and the protobuf-ecosystem identifier
//! casing that generated code uses for message fields and packages.

/// Identifier casing shared with the Swift protobuf runtime
pub mod case;
/// HTTP binding extraction from method options
pub mod http_binding;
/// Streaming shape classification
pub mod streaming;

pub use case::{to_lower_camel_case, to_upper_camel_case};
pub use http_binding::{
    binding_for, extract_binding, BindingError, HttpBinding, HttpMethod, PathSegment, PathTemplate,
};
pub use streaming::{classify, StreamingType};
