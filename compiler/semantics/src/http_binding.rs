//! HTTP binding extraction
//!
//! A method's REST binding is read from the text rendering of its options. The selection
//! rule is line based: the first line mentioning `v1` carries `<tag>: "<path>"`, the tag
//! picks the verb, and any line holding `7: "*"` marks the whole request as the body.

use std::fmt;

use descriptor::MethodDescriptor;
use serde::Serialize;
use thiserror::Error;

use crate::case::to_lower_camel_case;

/// Marker identifying the canonical API version line.
pub const VERSION_MARKER: &str = "v1";

/// Marker for whole-message request bodies.
pub const BODY_MARKER: &str = "7: \"*\"";

/// Reasons a method has no usable REST binding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// No option line mentions the versioned path marker
    #[error("no line containing \"v1\" in method options")]
    NoVersionedBinding,
    /// The selected line is not `<tag>: "<path>"`
    #[error("binding line '{0}' is not of the form <tag>: \"<path>\"")]
    MalformedLine(String),
    /// The tag does not map to a supported verb
    #[error("unrecognized HTTP verb tag {0}")]
    UnrecognizedVerb(u32),
}

/// HTTP verbs generated REST connections can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HttpMethod {
    /// Tag 2
    Get,
    /// Tag 4
    Post,
    /// Tag 5
    Delete,
}

impl HttpMethod {
    /// Map an `HttpRule` pattern tag to a verb.
    pub fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            2 => Some(HttpMethod::Get),
            4 => Some(HttpMethod::Post),
            5 => Some(HttpMethod::Delete),
            _ => None,
        }
    }

    /// The `HttpRule` pattern tag of this verb
    pub fn tag(&self) -> u32 {
        match self {
            HttpMethod::Get => 2,
            HttpMethod::Post => 4,
            HttpMethod::Delete => 5,
        }
    }

    /// Enum case spelling in generated code (`.get`)
    pub fn swift_case(&self) -> &'static str {
        match self {
            HttpMethod::Get => ".get",
            HttpMethod::Post => ".post",
            HttpMethod::Delete => ".delete",
        }
    }
}

/// One `/`-separated piece of a path template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PathSegment {
    /// Copied verbatim
    Literal(String),
    /// Dotted lowerCamelCase field access on the request, e.g. `chanPoint.fundingTxidStr`
    Field(String),
}

/// A parsed REST path such as `/v1/channels/{chan_point.funding_txid_str}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathTemplate {
    segments: Vec<PathSegment>,
}

impl PathTemplate {
    /// Parse a raw path. Segments starting with `{` become field references.
    pub fn parse(path: &str) -> Self {
        let segments = path
            .split('/')
            .map(|segment| {
                if segment.starts_with('{') {
                    let field = segment
                        .trim_matches(['{', '}'])
                        .split('.')
                        .map(to_lower_camel_case)
                        .collect::<Vec<_>>()
                        .join(".");
                    PathSegment::Field(field)
                } else {
                    PathSegment::Literal(segment.to_string())
                }
            })
            .collect();
        Self { segments }
    }

    /// Segments in path order
    pub fn segments(&self) -> &[PathSegment] { &self.segments }

    /// Field references in path order
    pub fn parameters(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                PathSegment::Field(field) => Some(field.as_str()),
                PathSegment::Literal(_) => None,
            })
            .collect()
    }

    /// Render as the body of a Swift string literal, interpolating fields off `request`.
    pub fn to_swift_literal(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                PathSegment::Literal(text) => text.clone(),
                PathSegment::Field(field) => format!("\\(request.{field})"),
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .segments
            .iter()
            .map(|segment| match segment {
                PathSegment::Literal(text) => text.clone(),
                PathSegment::Field(field) => format!("{{{field}}}"),
            })
            .collect::<Vec<_>>()
            .join("/");
        f.write_str(&rendered)
    }
}

/// A resolved REST binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpBinding {
    /// Verb
    pub method: HttpMethod,
    /// Path with field references
    pub path: PathTemplate,
    /// Whether the JSON-encoded request is sent as the body
    pub has_body: bool,
}

/// Extract a binding from the text rendering of a method's options.
pub fn extract_binding(options_text: &str) -> Result<HttpBinding, BindingError> {
    let line = options_text
        .lines()
        .find(|line| line.contains(VERSION_MARKER))
        .ok_or(BindingError::NoVersionedBinding)?
        .trim();

    let mut parts = line.split(": ");
    let (tag, raw_path) = match (parts.next(), parts.next()) {
        (Some(tag), Some(path)) => (tag, path),
        _ => return Err(BindingError::MalformedLine(line.to_string())),
    };
    let tag: u32 = tag.parse().map_err(|_| BindingError::MalformedLine(line.to_string()))?;
    let method = HttpMethod::from_tag(tag).ok_or(BindingError::UnrecognizedVerb(tag))?;

    let path = PathTemplate::parse(raw_path.trim_matches('"'));
    let has_body = options_text.lines().any(|line| line.contains(BODY_MARKER));

    Ok(HttpBinding { method, path, has_body })
}

/// Extract the REST binding of `method` from its `google.api.http` option.
pub fn binding_for(method: &MethodDescriptor) -> Result<HttpBinding, BindingError> {
    extract_binding(&method.options.to_text_format())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_table() {
        assert_eq!(HttpMethod::from_tag(2), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::from_tag(4), Some(HttpMethod::Post));
        assert_eq!(HttpMethod::from_tag(5), Some(HttpMethod::Delete));
        assert_eq!(HttpMethod::from_tag(3), None);
        assert_eq!(HttpMethod::from_tag(6), None);
        for verb in [HttpMethod::Get, HttpMethod::Post, HttpMethod::Delete] {
            assert_eq!(HttpMethod::from_tag(verb.tag()), Some(verb));
        }
        assert_eq!(HttpMethod::Delete.swift_case(), ".delete");
    }

    #[test]
    fn test_simple_get() {
        let binding = extract_binding("72295728 {\n  2: \"/v1/balance/blockchain\"\n}\n")
            .expect("binding should be found");
        assert_eq!(binding.method, HttpMethod::Get);
        assert_eq!(binding.path.to_swift_literal(), "/v1/balance/blockchain");
        assert!(binding.path.parameters().is_empty());
        assert!(!binding.has_body);
    }

    #[test]
    fn test_field_interpolation_with_body() {
        let text = "72295728 {\n  5: \"/v1/channels/{chan_point.funding_txid_str}/{chan_point.output_index}\"\n  7: \"*\"\n}\n";
        let binding = extract_binding(text).expect("binding should be found");
        assert_eq!(binding.method, HttpMethod::Delete);
        assert!(binding.has_body);
        assert_eq!(
            binding.path.parameters(),
            vec!["chanPoint.fundingTxidStr", "chanPoint.outputIndex"]
        );
        assert_eq!(
            binding.path.to_swift_literal(),
            "/v1/channels/\\(request.chanPoint.fundingTxidStr)/\\(request.chanPoint.outputIndex)"
        );
        assert_eq!(
            binding.path.to_string(),
            "/v1/channels/{chanPoint.fundingTxidStr}/{chanPoint.outputIndex}"
        );
    }

    #[test]
    fn test_first_versioned_line_wins() {
        let text = "72295728 {\n  4: \"/v1/invoices\"\n  11 {\n    2: \"/v1/invoices/all\"\n  }\n}\n";
        let binding = extract_binding(text).expect("binding should be found");
        assert_eq!(binding.method, HttpMethod::Post);
        assert_eq!(binding.path.to_swift_literal(), "/v1/invoices");
    }

    #[test]
    fn test_missing_and_unrecognized_bindings() {
        assert_eq!(extract_binding(""), Err(BindingError::NoVersionedBinding));
        assert_eq!(
            extract_binding("72295728 {\n  2: \"/v2/info\"\n}\n"),
            Err(BindingError::NoVersionedBinding)
        );
        assert_eq!(
            extract_binding("72295728 {\n  3: \"/v1/info\"\n}\n"),
            Err(BindingError::UnrecognizedVerb(3))
        );
        assert!(matches!(
            extract_binding("path /v1/info"),
            Err(BindingError::MalformedLine(_))
        ));
    }
}
