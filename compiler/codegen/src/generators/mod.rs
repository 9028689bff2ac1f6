//! Emitters for the generated Swift file.
//!
//! Each service yields a fixed sequence of [`Artifact`]s. Every artifact is rendered by a
//! plain function over the same resolved [`ServiceContext`], so adding a transport means
//! adding one variant and one module.

/// Sub-module generates: **connection protocol**
///
/// The per-service `protocol <Service>Connection` every transport implements.
pub mod connection_protocol;

/// File header and import block
pub mod header;

/// Optional private helper section the connections rely on
pub mod helpers;

/// Canned-response test double
pub mod mock_connection;

/// REST connection driven by `google.api.http` bindings
pub mod rest_connection;

/// gRPC connection over the generated service client
pub mod rpc_connection;

/// Native bridge connection, compiled out of remote-only builds
pub mod streaming_connection;

use std::fmt;

use descriptor::{FileDescriptor, MethodDescriptor, ServiceDescriptor, TypeIndex};
use semantics::{binding_for, classify, BindingError, HttpBinding, StreamingType};

use crate::code_writer::CodeWriter;
use crate::cw_writeln;
use crate::naming::{bridge_function_name, method_function_name, resolve_message, ServiceNames};
use crate::{clean_generated_source, Result};

/// Spaces per indentation level in generated Swift
pub const INDENT_SPACES: usize = 4;

/// Writer type all emitters render into.
pub type SwiftWriter<'a> = CodeWriter<&'a mut String>;

/// The per-service declarations, in the order they appear in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// `protocol <S>Connection`
    ConnectionProtocol,
    /// `class Streaming<S>Connection`
    StreamingConnection,
    /// `final class RPC<S>Connection`
    RpcConnection,
    /// `final class Rest<S>Connection`
    RestConnection,
    /// `class Mock<S>Connection`
    MockConnection,
}

impl Artifact {
    /// Emission order within a service section.
    pub const ALL: [Artifact; 5] = [
        Artifact::ConnectionProtocol,
        Artifact::StreamingConnection,
        Artifact::RpcConnection,
        Artifact::RestConnection,
        Artifact::MockConnection,
    ];

    /// Render this artifact for `service`.
    pub fn emit(&self, w: &mut SwiftWriter<'_>, service: &ServiceContext) -> fmt::Result {
        match self {
            Artifact::ConnectionProtocol => connection_protocol::emit(w, service),
            Artifact::StreamingConnection => streaming_connection::emit(w, service),
            Artifact::RpcConnection => rpc_connection::emit(w, service),
            Artifact::RestConnection => rest_connection::emit(w, service),
            Artifact::MockConnection => mock_connection::emit(w, service),
        }
    }
}

/// Everything the emitters need to know about one method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodContext {
    /// Proto method name, e.g. `GetInfo`
    pub name: String,
    /// Swift function name, e.g. `getInfo`
    pub function_name: String,
    /// Swift request type
    pub input_type: String,
    /// Swift response type
    pub output_type: String,
    /// Streaming shape
    pub streaming: StreamingType,
    /// Native bridge entry point
    pub bridge_function: String,
    /// REST binding, or why there is none
    pub binding: std::result::Result<HttpBinding, BindingError>,
}

impl MethodContext {
    /// Resolve names, shape and binding of `method` declared by `service_name`.
    pub fn resolve(
        service_name: &str,
        method: &MethodDescriptor,
        types: &TypeIndex,
    ) -> Result<Self> {
        let streaming = classify(method);
        let binding = binding_for(method);

        if !streaming.is_supported() {
            tracing::debug!(
                service = service_name,
                method = %method.name,
                shape = streaming.as_str(),
                "Skipping method with unsupported streaming shape"
            );
        } else if let Err(reason) = &binding {
            match reason {
                BindingError::NoVersionedBinding => tracing::debug!(
                    service = service_name,
                    method = %method.name,
                    "No REST binding, emitting stub"
                ),
                _ => tracing::warn!(
                    service = service_name,
                    method = %method.name,
                    %reason,
                    "Unusable REST binding, emitting stub"
                ),
            }
        }

        Ok(Self {
            name: method.name.clone(),
            function_name: method_function_name(&method.name),
            input_type: resolve_message(types, &method.input_type, &method.name)?,
            output_type: resolve_message(types, &method.output_type, &method.name)?,
            streaming,
            bridge_function: bridge_function_name(service_name, &method.name),
            binding,
        })
    }

    /// Whether the artifacts implement this method
    pub fn is_supported(&self) -> bool { self.streaming.is_supported() }

    /// `func getInfo(_ request: In, completion: @escaping ApiCompletion<Out>)`
    pub fn signature(&self) -> String {
        format!(
            "func {}(_ request: {}, completion: @escaping ApiCompletion<{}>)",
            self.function_name, self.input_type, self.output_type
        )
    }
}

/// A service with all of its methods resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceContext {
    /// Service name
    pub name: String,
    /// Declaration names
    pub names: ServiceNames,
    /// Methods in declaration order, including unsupported ones
    pub methods: Vec<MethodContext>,
}

impl ServiceContext {
    /// Resolve `service` declared in `file`.
    pub fn resolve(
        file: &FileDescriptor,
        service: &ServiceDescriptor,
        types: &TypeIndex,
    ) -> Result<Self> {
        let methods = service
            .methods
            .iter()
            .map(|method| MethodContext::resolve(&service.name, method, types))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { name: service.name.clone(), names: ServiceNames::new(file, service), methods })
    }
}

/// Write the marker left in place of an unsupported method.
pub(crate) fn write_skipped(w: &mut SwiftWriter<'_>, method: &MethodContext) -> fmt::Result {
    cw_writeln!(w, "// skipped: {}", method.function_name)
}

/// Generation switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Emit the private helper section
    pub helpers: bool,
}

/// Renders one `.proto` file.
pub struct FileGenerator<'a> {
    file: &'a FileDescriptor,
    types: &'a TypeIndex,
    options: GeneratorOptions,
}

impl<'a> FileGenerator<'a> {
    /// Create a generator for `file`, resolving message types through `types`.
    pub fn new(file: &'a FileDescriptor, types: &'a TypeIndex, options: GeneratorOptions) -> Self {
        Self { file, types, options }
    }

    /// Resolve every service of the file.
    pub fn services(&self) -> Result<Vec<ServiceContext>> {
        self.file
            .services
            .iter()
            .map(|service| ServiceContext::resolve(self.file, service, self.types))
            .collect()
    }

    /// Render the complete, normalized Swift source.
    pub fn generate(&self) -> Result<String> {
        let services = self.services()?;

        let mut out = String::new();
        {
            let mut w = CodeWriter::with_indent_spaces(&mut out, INDENT_SPACES);
            header::emit(&mut w, &self.file.name)?;

            if self.options.helpers {
                w.blank_line()?;
                helpers::emit(&mut w)?;
            }

            for service in &services {
                w.blank_line()?;
                cw_writeln!(w, "// MARK: - {}", service.name)?;
                w.separated_by_blank_lines(Artifact::ALL, |w, artifact| artifact.emit(w, service))?;
            }
        }

        Ok(clean_generated_source(&out))
    }
}
