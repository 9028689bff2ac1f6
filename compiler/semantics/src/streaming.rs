//! Streaming shape classification
//!
//! A method's shape is a pure function of its two streaming flags. Generated connections
//! support unary and server-streaming calls only; the other two shapes are skipped by every
//! artifact alike.

use descriptor::MethodDescriptor;
use serde::Serialize;

/// Request/response cardinality of an RPC method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StreamingType {
    /// One request, one response
    Unary,
    /// Request stream, one response
    ClientStreaming,
    /// One request, response stream
    ServerStreaming,
    /// Streams in both directions
    BidirectionalStreaming,
}

impl StreamingType {
    /// Classify from the `(client_streaming, server_streaming)` flags.
    pub fn from_flags(client_streaming: bool, server_streaming: bool) -> Self {
        match (client_streaming, server_streaming) {
            (false, false) => StreamingType::Unary,
            (true, false) => StreamingType::ClientStreaming,
            (false, true) => StreamingType::ServerStreaming,
            (true, true) => StreamingType::BidirectionalStreaming,
        }
    }

    /// Whether generated connections implement methods of this shape
    pub fn is_supported(&self) -> bool {
        matches!(self, StreamingType::Unary | StreamingType::ServerStreaming)
    }

    /// Canonical display name
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamingType::Unary => "unary",
            StreamingType::ClientStreaming => "clientStreaming",
            StreamingType::ServerStreaming => "serverStreaming",
            StreamingType::BidirectionalStreaming => "bidirectionalStreaming",
        }
    }
}

/// Classify a method by its streaming flags.
pub fn classify(method: &MethodDescriptor) -> StreamingType {
    StreamingType::from_flags(method.client_streaming, method.server_streaming)
}

#[cfg(test)]
mod tests {
    use descriptor::MethodOptions;

    use super::*;

    fn method(name: &str, client_streaming: bool, server_streaming: bool) -> MethodDescriptor {
        MethodDescriptor {
            name: name.into(),
            input_type: ".lnrpc.Req".into(),
            output_type: ".lnrpc.Resp".into(),
            client_streaming,
            server_streaming,
            options: MethodOptions::default(),
        }
    }

    #[test]
    fn test_classify_all_flag_combinations() {
        assert_eq!(classify(&method("GetInfo", false, false)), StreamingType::Unary);
        assert_eq!(classify(&method("SendPayment", true, false)), StreamingType::ClientStreaming);
        assert_eq!(
            classify(&method("SubscribeInvoices", false, true)),
            StreamingType::ServerStreaming
        );
        assert_eq!(
            classify(&method("ChannelAcceptor", true, true)),
            StreamingType::BidirectionalStreaming
        );
    }

    #[test]
    fn test_supported_shapes() {
        assert!(StreamingType::Unary.is_supported());
        assert!(StreamingType::ServerStreaming.is_supported());
        assert!(!StreamingType::ClientStreaming.is_supported());
        assert!(!StreamingType::BidirectionalStreaming.is_supported());
        assert_eq!(StreamingType::BidirectionalStreaming.as_str(), "bidirectionalStreaming");
    }
}
