//! Decoding of the plugin request read from standard input.

use prost::Message;

use crate::model::DescriptorSet;
use crate::wire::RawCodeGeneratorRequest;
use crate::Result;

/// A decoded `CodeGeneratorRequest`.
#[derive(Debug, Clone, Default)]
pub struct PluginRequest {
    /// Raw `--zap_opt` parameter string
    pub parameter: Option<String>,
    /// Files explicitly requested on the command line
    pub files_to_generate: Vec<String>,
    /// Descriptor model of every file in the request
    pub descriptors: DescriptorSet,
}

impl PluginRequest {
    /// Decode a serialized `CodeGeneratorRequest`.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let raw = RawCodeGeneratorRequest::decode(bytes)?;
        Self::from_raw(&raw)
    }

    /// Build from an already decoded wire view.
    pub fn from_raw(raw: &RawCodeGeneratorRequest) -> Result<Self> {
        Ok(Self {
            parameter: raw.parameter.clone(),
            files_to_generate: raw.file_to_generate.clone(),
            descriptors: DescriptorSet::from_request(raw)?,
        })
    }

    /// The parameter string, if any was given
    pub fn parameter(&self) -> Option<&str> { self.parameter.as_deref() }
}
