//! Index of every message type declared anywhere in a request.
//!
//! Method input and output types are fully-qualified references that may point into any
//! file of the request, including dependencies. The index resolves such a reference to
//! the declaring file's package, its `swift_prefix` option and the message's nesting path.

use std::collections::BTreeMap;

use prost_types::DescriptorProto;
use serde::Serialize;

/// Location of a message type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRef {
    /// Package of the declaring file (may be empty)
    pub package: String,
    /// `swift_prefix` file option of the declaring file, if set
    pub swift_prefix: Option<String>,
    /// Message names from the outermost to the message itself
    pub path: Vec<String>,
}

impl MessageRef {
    /// Simple name of the message (last path component).
    pub fn name(&self) -> &str { self.path.last().map(String::as_str).unwrap_or_default() }
}

/// Fully-qualified message name → [`MessageRef`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct TypeIndex {
    messages: BTreeMap<String, MessageRef>,
}

impl TypeIndex {
    /// Create an empty index
    pub fn new() -> Self { Self::default() }

    /// Register all messages (recursively, including nested ones) declared by a file.
    pub fn insert_file(
        &mut self,
        package: &str,
        swift_prefix: Option<&str>,
        messages: &[DescriptorProto],
    ) {
        for message in messages {
            self.insert_message(package, swift_prefix, &[], message);
        }
    }

    fn insert_message(
        &mut self,
        package: &str,
        swift_prefix: Option<&str>,
        parents: &[String],
        message: &DescriptorProto,
    ) {
        let mut path = parents.to_vec();
        path.push(message.name().to_string());

        let qualified = if package.is_empty() {
            path.join(".")
        } else {
            format!("{}.{}", package, path.join("."))
        };

        for nested in &message.nested_type {
            self.insert_message(package, swift_prefix, &path, nested);
        }

        self.messages.insert(
            qualified,
            MessageRef {
                package: package.to_string(),
                swift_prefix: swift_prefix.map(str::to_string),
                path,
            },
        );
    }

    /// Look up a type reference. A leading `.` (as used in descriptors) is ignored.
    pub fn get(&self, type_name: &str) -> Option<&MessageRef> {
        self.messages.get(type_name.strip_prefix('.').unwrap_or(type_name))
    }

    /// Number of indexed message types
    pub fn len(&self) -> usize { self.messages.len() }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool { self.messages.is_empty() }
}
