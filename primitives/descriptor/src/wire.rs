//! Wire-level views of the plugin request.
//!
//! These messages mirror the parts of `plugin.proto` and `descriptor.proto` that the
//! generator reads. Field tags match the upstream definitions, so the views decode real
//! `protoc` output and anything they encode is a valid `CodeGeneratorRequest`.
//!
//! The reason they exist at all is [`RawMethodOptions::http`]: `prost_types::MethodOptions`
//! drops extension fields, while the view declares the `google.api.http` extension as an
//! ordinary field.

use prost_types::{DescriptorProto, FileOptions};

use crate::options::{HttpRule, HTTP_RULE_EXTENSION_TAG};

/// `google.protobuf.compiler.CodeGeneratorRequest`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawCodeGeneratorRequest {
    /// Files explicitly listed on the `protoc` command line
    #[prost(string, repeated, tag = "1")]
    pub file_to_generate: Vec<String>,
    /// The `--zap_opt` parameter string
    #[prost(string, optional, tag = "2")]
    pub parameter: Option<String>,
    /// Every file in the request, dependencies first
    #[prost(message, repeated, tag = "15")]
    pub proto_file: Vec<RawFileDescriptor>,
}

/// `google.protobuf.FileDescriptorProto`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawFileDescriptor {
    /// Path relative to the proto root
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    /// Declared package, e.g. `lnrpc`
    #[prost(string, optional, tag = "2")]
    pub package: Option<String>,
    /// Top-level message types
    #[prost(message, repeated, tag = "4")]
    pub message_type: Vec<DescriptorProto>,
    /// Declared services
    #[prost(message, repeated, tag = "6")]
    pub service: Vec<RawServiceDescriptor>,
    /// File options (`swift_prefix` lives here)
    #[prost(message, optional, tag = "8")]
    pub options: Option<FileOptions>,
}

/// `google.protobuf.ServiceDescriptorProto`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawServiceDescriptor {
    /// Service name
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    /// Methods in declaration order
    #[prost(message, repeated, tag = "2")]
    pub method: Vec<RawMethodDescriptor>,
}

/// `google.protobuf.MethodDescriptorProto`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawMethodDescriptor {
    /// Method name
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    /// Fully-qualified input type, e.g. `.lnrpc.GetInfoRequest`
    #[prost(string, optional, tag = "2")]
    pub input_type: Option<String>,
    /// Fully-qualified output type
    #[prost(string, optional, tag = "3")]
    pub output_type: Option<String>,
    /// Method options including the HTTP annotation
    #[prost(message, optional, tag = "4")]
    pub options: Option<RawMethodOptions>,
    /// Whether the client streams requests
    #[prost(bool, optional, tag = "5")]
    pub client_streaming: Option<bool>,
    /// Whether the server streams responses
    #[prost(bool, optional, tag = "6")]
    pub server_streaming: Option<bool>,
}

/// `google.protobuf.MethodOptions` with the `google.api.http` extension.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawMethodOptions {
    /// `deprecated = true`
    #[prost(bool, optional, tag = "33")]
    pub deprecated: Option<bool>,
    /// `(google.api.http)`, extension field 72295728
    #[prost(message, optional, tag = "72295728")]
    pub http: Option<HttpRule>,
}

// The attribute above has to spell the tag literally.
const _: () = assert!(HTTP_RULE_EXTENSION_TAG == 72_295_728);
