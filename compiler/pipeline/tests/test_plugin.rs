//! Runs the `protoc-gen-zap` binary the way `protoc` does.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use descriptor::wire::{RawCodeGeneratorRequest, RawFileDescriptor, RawMethodDescriptor, RawServiceDescriptor};
use prost::Message;
use prost_types::compiler::CodeGeneratorResponse;
use prost_types::DescriptorProto;
use tempfile::NamedTempFile;

fn plugin(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_protoc-gen-zap"))
        .args(args)
        .env_remove("ZAP_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("plugin should start");
    child.stdin.take().expect("stdin is piped").write_all(stdin).expect("write request");
    child.wait_with_output().expect("plugin should finish")
}

fn request(parameter: Option<&str>) -> Vec<u8> {
    RawCodeGeneratorRequest {
        file_to_generate: vec!["lnrpc/lightning.proto".into()],
        parameter: parameter.map(Into::into),
        proto_file: vec![RawFileDescriptor {
            name: Some("lnrpc/lightning.proto".into()),
            package: Some("lnrpc".into()),
            message_type: ["GetInfoRequest", "GetInfoResponse"]
                .into_iter()
                .map(|n| DescriptorProto { name: Some(n.into()), ..Default::default() })
                .collect(),
            service: vec![RawServiceDescriptor {
                name: Some("Lightning".into()),
                method: vec![RawMethodDescriptor {
                    name: Some("GetInfo".into()),
                    input_type: Some(".lnrpc.GetInfoRequest".into()),
                    output_type: Some(".lnrpc.GetInfoResponse".into()),
                    ..Default::default()
                }],
            }],
            options: None,
        }],
    }
    .encode_to_vec()
}

#[test]
fn test_plugin_round_trip() {
    let output = plugin(&[], &request(None));
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let response = CodeGeneratorResponse::decode(output.stdout.as_slice()).expect("valid response");
    assert_eq!(response.file.len(), 1);
    assert_eq!(response.file[0].name(), "lnrpc/lightning.zap.swift");
    assert!(response.file[0].content().contains("protocol LightningConnection {"));
}

#[test]
fn test_plugin_reads_config_file() {
    let config = NamedTempFile::new().expect("Failed to create temporary file");
    std::fs::write(&config, "[codegen]\nfile_naming = \"PathToUnderscores\"\nhelpers = true\n")
        .expect("Failed to write TOML content");
    let parameter = format!("ConfigFile={}", config.path().display());

    let output = plugin(&[], &request(Some(&parameter)));
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let response = CodeGeneratorResponse::decode(output.stdout.as_slice()).expect("valid response");
    assert_eq!(response.file[0].name(), "lnrpc_lightning.zap.swift");
    assert!(response.file[0].content().contains("// MARK: - Helper Methods"));
}

#[test]
fn test_plugin_fails_on_garbage_input() {
    let output = plugin(&[], &[0xff, 0x01, 0x02]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_plugin_fails_on_bad_parameter() {
    let output = plugin(&[], &request(Some("FileNaming=Sideways")));
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Sideways"));
}

#[test]
fn test_dump_ir() {
    let output = plugin(&["--dump-ir"], &request(None));
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8 JSON");
    assert!(stdout.contains("\"name\": \"Lightning\""));
    assert!(stdout.contains("\"input_type\": \".lnrpc.GetInfoRequest\""));
}
