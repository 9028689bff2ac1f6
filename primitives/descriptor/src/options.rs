//! Method options and the typed `google.api.http` rule.
//!
//! The generator matches HTTP bindings against the numeric-tag text rendering of a
//! method's options (see [`MethodOptions::to_text_format`]). The typed [`HttpRule`] is the
//! source of truth; the text form is what the binding rules are written against.

use serde::Serialize;

/// Field number of the `google.api.http` extension on `MethodOptions`.
pub const HTTP_RULE_EXTENSION_TAG: u32 = 72_295_728;

/// `google.api.HttpRule`
#[derive(Clone, PartialEq, Serialize, ::prost::Message)]
pub struct HttpRule {
    /// Method selector this rule applies to (only used in service config files)
    #[prost(string, tag = "1")]
    pub selector: String,
    /// Verb and path template
    #[prost(oneof = "http_rule::Pattern", tags = "2, 3, 4, 5, 6, 8")]
    pub pattern: Option<http_rule::Pattern>,
    /// Request field mapped to the HTTP body, `*` for the whole message
    #[prost(string, tag = "7")]
    pub body: String,
    /// Extra bindings for the same method
    #[prost(message, repeated, tag = "11")]
    pub additional_bindings: Vec<HttpRule>,
    /// Response field mapped to the HTTP body
    #[prost(string, tag = "12")]
    pub response_body: String,
}

/// Nested types for [`HttpRule`].
pub mod http_rule {
    use serde::Serialize;

    use super::CustomHttpPattern;

    /// The verb-specific path template of a rule.
    #[derive(Clone, PartialEq, Serialize, ::prost::Oneof)]
    pub enum Pattern {
        /// `get: "/v1/..."`
        #[prost(string, tag = "2")]
        Get(String),
        /// `put: "/v1/..."`
        #[prost(string, tag = "3")]
        Put(String),
        /// `post: "/v1/..."`
        #[prost(string, tag = "4")]
        Post(String),
        /// `delete: "/v1/..."`
        #[prost(string, tag = "5")]
        Delete(String),
        /// `patch: "/v1/..."`
        #[prost(string, tag = "6")]
        Patch(String),
        /// `custom: { kind: "HEAD" path: "/v1/..." }`
        #[prost(message, tag = "8")]
        Custom(CustomHttpPattern),
    }

    impl Pattern {
        /// Field number of the variant inside `HttpRule`
        pub fn tag(&self) -> u32 {
            match self {
                Pattern::Get(_) => 2,
                Pattern::Put(_) => 3,
                Pattern::Post(_) => 4,
                Pattern::Delete(_) => 5,
                Pattern::Patch(_) => 6,
                Pattern::Custom(_) => 8,
            }
        }
    }
}

/// `google.api.CustomHttpPattern`
#[derive(Clone, PartialEq, Serialize, ::prost::Message)]
pub struct CustomHttpPattern {
    /// Custom verb, e.g. `HEAD`
    #[prost(string, tag = "1")]
    pub kind: String,
    /// Path template
    #[prost(string, tag = "2")]
    pub path: String,
}

impl HttpRule {
    /// Rule with a single `get` binding.
    pub fn get(path: impl Into<String>) -> Self {
        Self { pattern: Some(http_rule::Pattern::Get(path.into())), ..Default::default() }
    }

    /// Rule with a single `post` binding.
    pub fn post(path: impl Into<String>) -> Self {
        Self { pattern: Some(http_rule::Pattern::Post(path.into())), ..Default::default() }
    }

    /// Rule with a single `delete` binding.
    pub fn delete(path: impl Into<String>) -> Self {
        Self { pattern: Some(http_rule::Pattern::Delete(path.into())), ..Default::default() }
    }

    /// Set the body mapping (`*` for the whole request).
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Append an additional binding.
    pub fn with_additional_binding(mut self, rule: HttpRule) -> Self {
        self.additional_bindings.push(rule);
        self
    }

    fn write_text(&self, out: &mut String, depth: usize) {
        let pad = "  ".repeat(depth);
        if !self.selector.is_empty() {
            push_line(out, format!("{pad}1: {}", quote(&self.selector)));
        }
        if let Some(pattern) = &self.pattern {
            match pattern {
                http_rule::Pattern::Custom(custom) => {
                    push_line(out, format!("{pad}8 {{"));
                    if !custom.kind.is_empty() {
                        push_line(out, format!("{pad}  1: {}", quote(&custom.kind)));
                    }
                    if !custom.path.is_empty() {
                        push_line(out, format!("{pad}  2: {}", quote(&custom.path)));
                    }
                    push_line(out, format!("{pad}}}"));
                }
                http_rule::Pattern::Get(path)
                | http_rule::Pattern::Put(path)
                | http_rule::Pattern::Post(path)
                | http_rule::Pattern::Delete(path)
                | http_rule::Pattern::Patch(path) => {
                    push_line(out, format!("{pad}{}: {}", pattern.tag(), quote(path)));
                }
            }
        }
        if !self.body.is_empty() {
            push_line(out, format!("{pad}7: {}", quote(&self.body)));
        }
        for binding in &self.additional_bindings {
            push_line(out, format!("{pad}11 {{"));
            binding.write_text(out, depth + 1);
            push_line(out, format!("{pad}}}"));
        }
        if !self.response_body.is_empty() {
            push_line(out, format!("{pad}12: {}", quote(&self.response_body)));
        }
    }
}

/// Options attached to a method that the generator cares about.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MethodOptions {
    /// `option deprecated = true;`
    pub deprecated: bool,
    /// `option (google.api.http) = { ... };`
    pub http: Option<HttpRule>,
}

impl MethodOptions {
    /// Render the options in numeric-tag text format, one field per line.
    ///
    /// Extensions are written by field number, the way a text printer renders fields it
    /// has no schema for:
    ///
    /// ```text
    /// 72295728 {
    ///   4: "/v1/channels"
    ///   7: "*"
    /// }
    /// ```
    pub fn to_text_format(&self) -> String {
        let mut out = String::new();
        if self.deprecated {
            push_line(&mut out, "deprecated: true");
        }
        if let Some(http) = &self.http {
            push_line(&mut out, format!("{HTTP_RULE_EXTENSION_TAG} {{"));
            http.write_text(&mut out, 1);
            push_line(&mut out, "}");
        }
        out
    }
}

fn push_line(out: &mut String, line: impl AsRef<str>) {
    out.push_str(line.as_ref());
    out.push('\n');
}

fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_format_get() {
        let options = MethodOptions { deprecated: false, http: Some(HttpRule::get("/v1/getinfo")) };
        assert_eq!(options.to_text_format(), "72295728 {\n  2: \"/v1/getinfo\"\n}\n");
    }

    #[test]
    fn test_text_format_post_with_body_and_additional_binding() {
        let rule = HttpRule::post("/v1/channels")
            .with_body("*")
            .with_additional_binding(HttpRule::post("/v2/channels").with_body("*"));
        let options = MethodOptions { deprecated: true, http: Some(rule) };
        let expected = "deprecated: true\n\
                        72295728 {\n  \
                        4: \"/v1/channels\"\n  \
                        7: \"*\"\n  \
                        11 {\n    \
                        4: \"/v2/channels\"\n    \
                        7: \"*\"\n  \
                        }\n\
                        }\n";
        assert_eq!(options.to_text_format(), expected);
    }

    #[test]
    fn test_text_format_custom_pattern() {
        let rule = HttpRule {
            pattern: Some(http_rule::Pattern::Custom(CustomHttpPattern {
                kind: "HEAD".into(),
                path: "/v1/ping".into(),
            })),
            ..Default::default()
        };
        let options = MethodOptions { deprecated: false, http: Some(rule) };
        assert_eq!(
            options.to_text_format(),
            "72295728 {\n  8 {\n    1: \"HEAD\"\n    2: \"/v1/ping\"\n  }\n}\n"
        );
    }

    #[test]
    fn test_text_format_empty() {
        assert_eq!(MethodOptions::default().to_text_format(), "");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }
}
