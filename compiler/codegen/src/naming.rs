//! Names used in generated Swift code.
//!
//! Message names follow the Swift protobuf runtime so that generated connections refer to
//! the same types its code generator emits.

use descriptor::{FileDescriptor, MessageRef, ServiceDescriptor, TypeIndex};
use semantics::to_upper_camel_case;

use crate::{CodegenError, Result};

/// Module prefix of the native bridge entry points.
pub const BRIDGE_MODULE: &str = "Lndmobile";

/// Services whose bridge entry points carry no service-name prefix.
pub const BRIDGE_PREFIX_EXEMPT: &[&str] = &["WalletUnlocker", "Lightning"];

/// Names Swift protobuf refuses for message types; such names get a `Message` suffix.
const RESERVED_TYPE_NAMES: &[&str] = &[
    "Any", "AnyObject", "Array", "Bool", "Character", "Data", "Decoder", "Dictionary", "Double",
    "Encoder", "Equatable", "Error", "Float", "Hashable", "Int", "Int32", "Int64", "Message",
    "Optional", "Protocol", "Result", "Self", "Set", "String", "Type", "UInt32", "UInt64",
    "Void",
];

/// `GetInfo` → `getInfo`. Only the first character changes.
pub fn method_function_name(method_name: &str) -> String {
    let mut chars = method_name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Bridge prefix for a service: empty for exempt services, otherwise the service name.
pub fn bridge_prefix(service_name: &str) -> &str {
    if BRIDGE_PREFIX_EXEMPT.contains(&service_name) {
        ""
    } else {
        service_name
    }
}

/// Native bridge entry point, e.g. `LndmobileGetInfo` or `LndmobileRouterSendPaymentV2`.
pub fn bridge_function_name(service_name: &str, method_name: &str) -> String {
    format!("{}{}{}", BRIDGE_MODULE, bridge_prefix(service_name), method_name)
}

/// Type prefix for declarations of a file.
///
/// `swift_prefix` wins when set; otherwise each package segment is upper camel cased and
/// joined with `_`, plus a trailing `_` (`some.package_name` → `Some_PackageName_`).
pub fn type_prefix(package: &str, swift_prefix: Option<&str>) -> String {
    if let Some(prefix) = swift_prefix {
        return prefix.to_string();
    }
    if package.is_empty() {
        return String::new();
    }
    let mut prefix =
        package.split('.').map(to_upper_camel_case).collect::<Vec<_>>().join("_");
    prefix.push('_');
    prefix
}

/// Swift name of a message, e.g. `Lnrpc_ChannelPoint` or `Lnrpc_Outer.Inner`.
pub fn message_type_name(message: &MessageRef) -> String {
    let prefix = type_prefix(&message.package, message.swift_prefix.as_deref());
    let path = message
        .path
        .iter()
        .enumerate()
        .map(|(depth, name)| {
            let exposed = depth > 0 || prefix.is_empty();
            if exposed && RESERVED_TYPE_NAMES.contains(&name.as_str()) {
                format!("{name}Message")
            } else {
                name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(".");
    format!("{prefix}{path}")
}

/// Resolve a fully-qualified descriptor type reference to its Swift name.
pub fn resolve_message(types: &TypeIndex, type_name: &str, method: &str) -> Result<String> {
    types.get(type_name).map(message_type_name).ok_or_else(|| CodegenError::UnknownType {
        type_name: type_name.to_string(),
        method: method.to_string(),
    })
}

/// Per-service declaration names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceNames {
    /// `LightningConnection`
    pub connection_protocol: String,
    /// `StreamingLightningConnection`
    pub streaming: String,
    /// `RPCLightningConnection`
    pub rpc: String,
    /// `RestLightningConnection`
    pub rest: String,
    /// `MockLightningConnection`
    pub mock: String,
    /// `Lnrpc_Lightning`; the package-qualified stem of gRPC declarations
    pub package_service: String,
}

impl ServiceNames {
    /// Derive all names for `service` declared in `file`.
    pub fn new(file: &FileDescriptor, service: &ServiceDescriptor) -> Self {
        let name = &service.name;
        let package_service = if file.package.is_empty() {
            name.clone()
        } else {
            format!("{}{}", type_prefix(&file.package, file.swift_prefix.as_deref()), name)
        };

        Self {
            connection_protocol: format!("{name}Connection"),
            streaming: format!("Streaming{name}Connection"),
            rpc: format!("RPC{name}Connection"),
            rest: format!("Rest{name}Connection"),
            mock: format!("Mock{name}Connection"),
            package_service,
        }
    }

    /// gRPC service class, e.g. `Lnrpc_LightningService`
    pub fn service_class(&self) -> String { format!("{}Service", self.package_service) }

    /// gRPC client constructor, e.g. `Lnrpc_LightningServiceClient`
    pub fn service_client(&self) -> String { format!("{}ServiceClient", self.package_service) }

    /// Server-streaming call type, e.g. `Lnrpc_LightningSubscribeInvoicesCall`
    pub fn call_type(&self, method_name: &str) -> String {
        format!("{}{}Call", self.package_service, method_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(package: &str, swift_prefix: Option<&str>, path: &[&str]) -> MessageRef {
        MessageRef {
            package: package.into(),
            swift_prefix: swift_prefix.map(Into::into),
            path: path.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn file(package: &str, swift_prefix: Option<&str>) -> FileDescriptor {
        FileDescriptor {
            name: "lightning.proto".into(),
            package: package.into(),
            swift_prefix: swift_prefix.map(Into::into),
            services: Vec::new(),
        }
    }

    #[test]
    fn test_method_function_name() {
        assert_eq!(method_function_name("GetInfo"), "getInfo");
        assert_eq!(method_function_name("SendPaymentV2"), "sendPaymentV2");
        assert_eq!(method_function_name("QueryRoutes"), "queryRoutes");
        assert_eq!(method_function_name("URLCheck"), "uRLCheck");
        assert_eq!(method_function_name(""), "");
    }

    #[test]
    fn test_bridge_function_name() {
        assert_eq!(bridge_function_name("Lightning", "GetInfo"), "LndmobileGetInfo");
        assert_eq!(bridge_function_name("WalletUnlocker", "InitWallet"), "LndmobileInitWallet");
        assert_eq!(
            bridge_function_name("Router", "SendPaymentV2"),
            "LndmobileRouterSendPaymentV2"
        );
    }

    #[test]
    fn test_type_prefix() {
        assert_eq!(type_prefix("lnrpc", None), "Lnrpc_");
        assert_eq!(type_prefix("some.package_name", None), "Some_PackageName_");
        assert_eq!(type_prefix("", None), "");
        assert_eq!(type_prefix("lnrpc", Some("LN")), "LN");
        assert_eq!(type_prefix("lnrpc", Some("")), "");
    }

    #[test]
    fn test_message_type_name() {
        assert_eq!(message_type_name(&message("lnrpc", None, &["GetInfoRequest"])), "Lnrpc_GetInfoRequest");
        assert_eq!(
            message_type_name(&message("lnrpc", None, &["Outer", "Inner"])),
            "Lnrpc_Outer.Inner"
        );
        assert_eq!(message_type_name(&message("", None, &["Type"])), "TypeMessage");
        assert_eq!(message_type_name(&message("lnrpc", None, &["Type"])), "Lnrpc_Type");
        assert_eq!(
            message_type_name(&message("lnrpc", None, &["Outer", "Error"])),
            "Lnrpc_Outer.ErrorMessage"
        );
    }

    #[test]
    fn test_service_names() {
        let service = ServiceDescriptor { name: "Lightning".into(), methods: Vec::new() };

        let names = ServiceNames::new(&file("lnrpc", None), &service);
        assert_eq!(names.connection_protocol, "LightningConnection");
        assert_eq!(names.rpc, "RPCLightningConnection");
        assert_eq!(names.service_class(), "Lnrpc_LightningService");
        assert_eq!(names.service_client(), "Lnrpc_LightningServiceClient");
        assert_eq!(names.call_type("SubscribeInvoices"), "Lnrpc_LightningSubscribeInvoicesCall");

        let unpackaged = ServiceNames::new(&file("", Some("LN")), &service);
        assert_eq!(unpackaged.service_class(), "LightningService");
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let types = TypeIndex::new();
        match resolve_message(&types, ".lnrpc.Missing", "GetInfo") {
            Err(CodegenError::UnknownType { type_name, method }) => {
                assert_eq!(type_name, ".lnrpc.Missing");
                assert_eq!(method, "GetInfo");
            }
            other => panic!("Expected UnknownType, got {:?}", other),
        }
    }
}
