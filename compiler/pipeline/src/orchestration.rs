//! Plugin run orchestration.
//!
//! [`generate`] is a pure function of the decoded request and the configuration; [`run`]
//! wraps it with decoding, logging setup and response encoding. Output is only written
//! once the whole response has been encoded, so a failed run leaves standard output empty.

use std::io::Write;

use codegen::{FileGenerator, GeneratorOptions};
use config::Config;
use descriptor::PluginRequest;
use prost::Message;
use prost_types::compiler::code_generator_response::{Feature, File};
use prost_types::compiler::CodeGeneratorResponse;

use crate::output_naming::UniqueFileNameTable;
use crate::Result;

/// `supported_features` bit announcing proto3 `optional` support to `protoc`.
pub const FEATURE_PROTO3_OPTIONAL: u64 = Feature::Proto3Optional as u64;

/// Render every file of `request` that declares at least one service.
///
/// Files are processed in request order. Output names come from the configured naming
/// policy and are unique across the response.
pub fn generate(request: &PluginRequest, config: &Config) -> Result<CodeGeneratorResponse> {
    let options = GeneratorOptions { helpers: config.codegen.helpers };
    let mut names =
        UniqueFileNameTable::new(config.codegen.component.clone(), config.codegen.file_naming);
    let types = request.descriptors.types();

    let mut files = Vec::new();
    for file in request.descriptors.files() {
        if !file.has_services() {
            logging::trace("orchestration", &format!("{} declares no services", file.name));
            continue;
        }

        let content = FileGenerator::new(file, types, options).generate()?;
        let name = names.claim(&file.name);
        tracing::info!(source = %file.name, output = %name, services = file.services.len(), "Generated");

        files.push(File { name: Some(name), content: Some(content), ..Default::default() });
    }

    Ok(CodeGeneratorResponse {
        supported_features: Some(FEATURE_PROTO3_OPTIONAL),
        file: files,
        ..Default::default()
    })
}

/// Decode `input`, generate, and write the encoded response to `output`.
///
/// Installs the global log subscriber at the configured level; an already installed
/// subscriber is kept.
pub fn run(input: &[u8], output: &mut impl Write) -> Result<()> {
    let request = PluginRequest::decode(input)?;
    let config = Config::from_parameter(request.parameter())?;
    logging::init(&config.logging.level);

    tracing::debug!(
        files = request.descriptors.files().len(),
        requested = request.files_to_generate.len(),
        naming = %config.codegen.file_naming,
        "Decoded request"
    );

    let response = generate(&request, &config)?;

    let mut encoded = Vec::with_capacity(response.encoded_len());
    response.encode(&mut encoded)?;
    output.write_all(&encoded)?;
    output.flush()?;
    Ok(())
}
