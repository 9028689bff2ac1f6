//! Read-only descriptor model handed to the code generators.

use serde::Serialize;

use crate::options::MethodOptions;
use crate::type_index::TypeIndex;
use crate::wire::{RawCodeGeneratorRequest, RawFileDescriptor, RawMethodDescriptor, RawServiceDescriptor};
use crate::{DescriptorError, Result};

/// All files of one plugin request plus the message type index spanning them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DescriptorSet {
    files: Vec<FileDescriptor>,
    types: TypeIndex,
}

/// A `.proto` file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileDescriptor {
    /// Path relative to the proto root, e.g. `lnrpc/lightning.proto`
    pub name: String,
    /// Declared package, empty when the file has none
    pub package: String,
    /// `option swift_prefix = "...";`
    pub swift_prefix: Option<String>,
    /// Declared services in order
    pub services: Vec<ServiceDescriptor>,
}

/// An RPC service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceDescriptor {
    /// Service name, e.g. `Lightning`
    pub name: String,
    /// Methods in declaration order
    pub methods: Vec<MethodDescriptor>,
}

/// An RPC method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodDescriptor {
    /// Method name, e.g. `GetInfo`
    pub name: String,
    /// Fully-qualified input message, e.g. `.lnrpc.GetInfoRequest`
    pub input_type: String,
    /// Fully-qualified output message
    pub output_type: String,
    /// Whether the client streams requests
    pub client_streaming: bool,
    /// Whether the server streams responses
    pub server_streaming: bool,
    /// Method options
    pub options: MethodOptions,
}

impl DescriptorSet {
    /// Build the model from a decoded request.
    pub fn from_request(request: &RawCodeGeneratorRequest) -> Result<Self> {
        let mut types = TypeIndex::new();
        let mut files = Vec::with_capacity(request.proto_file.len());

        for (index, raw) in request.proto_file.iter().enumerate() {
            let file = FileDescriptor::from_raw(raw, index)?;
            types.insert_file(&file.package, file.swift_prefix.as_deref(), &raw.message_type);
            files.push(file);
        }

        Ok(Self { files, types })
    }

    /// Files in request order
    pub fn files(&self) -> &[FileDescriptor] { &self.files }

    /// Message type index across all files
    pub fn types(&self) -> &TypeIndex { &self.types }

    /// Look up a file by its proto path
    pub fn file(&self, name: &str) -> Option<&FileDescriptor> {
        self.files.iter().find(|f| f.name == name)
    }

    /// Pretty JSON rendering of the model, for inspection.
    pub fn to_json(&self) -> Result<String> { Ok(serde_json::to_string_pretty(self)?) }
}

impl FileDescriptor {
    fn from_raw(raw: &RawFileDescriptor, index: usize) -> Result<Self> {
        let name = non_empty(raw.name.as_deref()).ok_or_else(|| DescriptorError::MissingName {
            kind: "file",
            location: format!("proto_file[{index}]"),
        })?;

        let services = raw
            .service
            .iter()
            .enumerate()
            .map(|(i, service)| ServiceDescriptor::from_raw(service, &name, i))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            package: raw.package.clone().unwrap_or_default(),
            swift_prefix: raw.options.as_ref().and_then(|o| o.swift_prefix.clone()),
            name,
            services,
        })
    }

    /// Whether the file declares at least one service
    pub fn has_services(&self) -> bool { !self.services.is_empty() }
}

impl ServiceDescriptor {
    fn from_raw(raw: &RawServiceDescriptor, file: &str, index: usize) -> Result<Self> {
        let name = non_empty(raw.name.as_deref()).ok_or_else(|| DescriptorError::MissingName {
            kind: "service",
            location: format!("{file} service[{index}]"),
        })?;

        let methods = raw
            .method
            .iter()
            .enumerate()
            .map(|(i, method)| MethodDescriptor::from_raw(method, &format!("{file} {name}"), i))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { name, methods })
    }
}

impl MethodDescriptor {
    fn from_raw(raw: &RawMethodDescriptor, service: &str, index: usize) -> Result<Self> {
        let name = non_empty(raw.name.as_deref()).ok_or_else(|| DescriptorError::MissingName {
            kind: "method",
            location: format!("{service} method[{index}]"),
        })?;

        let options = raw
            .options
            .as_ref()
            .map(|o| MethodOptions { deprecated: o.deprecated.unwrap_or(false), http: o.http.clone() })
            .unwrap_or_default();

        Ok(Self {
            name,
            input_type: raw.input_type.clone().unwrap_or_default(),
            output_type: raw.output_type.clone().unwrap_or_default(),
            client_streaming: raw.client_streaming.unwrap_or(false),
            server_streaming: raw.server_streaming.unwrap_or(false),
            options,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::HttpRule;
    use crate::wire::RawMethodOptions;

    fn raw_method(name: &str) -> RawMethodDescriptor {
        RawMethodDescriptor {
            name: Some(name.into()),
            input_type: Some(".lnrpc.Req".into()),
            output_type: Some(".lnrpc.Resp".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_request_keeps_order_and_options() {
        let mut streaming = raw_method("SubscribeInvoices");
        streaming.server_streaming = Some(true);
        let mut annotated = raw_method("GetInfo");
        annotated.options = Some(RawMethodOptions {
            deprecated: Some(true),
            http: Some(HttpRule::get("/v1/getinfo")),
        });

        let request = RawCodeGeneratorRequest {
            proto_file: vec![RawFileDescriptor {
                name: Some("lightning.proto".into()),
                package: Some("lnrpc".into()),
                service: vec![RawServiceDescriptor {
                    name: Some("Lightning".into()),
                    method: vec![annotated, streaming],
                }],
                ..Default::default()
            }],
            ..Default::default()
        };

        let set = DescriptorSet::from_request(&request).expect("request should build");
        let file = set.file("lightning.proto").expect("file should be present");
        assert!(file.has_services());
        let methods = &file.services[0].methods;
        assert_eq!(methods[0].name, "GetInfo");
        assert!(methods[0].options.deprecated);
        assert_eq!(methods[0].options.http, Some(HttpRule::get("/v1/getinfo")));
        assert_eq!(methods[1].name, "SubscribeInvoices");
        assert!(methods[1].server_streaming);
        assert!(!methods[1].client_streaming);
    }

    #[test]
    fn test_missing_method_name_is_an_error() {
        let request = RawCodeGeneratorRequest {
            proto_file: vec![RawFileDescriptor {
                name: Some("a.proto".into()),
                service: vec![RawServiceDescriptor {
                    name: Some("Svc".into()),
                    method: vec![RawMethodDescriptor::default()],
                }],
                ..Default::default()
            }],
            ..Default::default()
        };

        let err = DescriptorSet::from_request(&request).expect_err("nameless method must fail");
        assert_eq!(err.to_string(), "method descriptor at a.proto Svc method[0] has no name");
    }
}
