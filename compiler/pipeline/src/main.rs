//! `protoc-gen-zap`: protoc plugin emitting Swift connection clients.
//!
//! `protoc` runs the binary with a serialized `CodeGeneratorRequest` on standard input and
//! reads the `CodeGeneratorResponse` from standard output. Diagnostics go to standard error.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use std::env;
use std::io::{self, Read};

use descriptor::PluginRequest;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("protoc-gen-zap {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("USAGE:");
        println!("    protoc --zap_out=<dir> [--zap_opt=<Key=Value,...>] <files>");
        println!("    protoc-gen-zap --dump-ir < request.bin");
        println!();
        println!("OPTIONS (--zap_opt):");
        println!("    FileNaming=<FullPath|PathToUnderscores|DropPath>   Output naming policy (default FullPath)");
        println!("    Component=<name>                                   Marker in output names (default zap)");
        println!("    Helpers=<true|false>                               Emit the private helper section");
        println!("    LogLevel=<filter>                                  Log filter, overridden by ZAP_LOG");
        println!("    ConfigFile=<path>                                  TOML file with [codegen] and [logging]");
        println!();
        println!("FLAGS:");
        println!("    --dump-ir                     Print the decoded descriptor model as JSON");
        println!("    --help, -h                    Show this help message");
        return;
    }

    let mut input = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut input) {
        fail(&format!("Failed to read CodeGeneratorRequest from stdin: {}", e));
    }

    if args.iter().any(|a| a == "--dump-ir") {
        match PluginRequest::decode(&input).and_then(|request| request.descriptors.to_json()) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(&e.to_string()),
        }
        return;
    }

    let mut stdout = io::stdout().lock();
    if let Err(e) = pipeline::run(&input, &mut stdout) {
        fail(&e.to_string());
    }
}

fn fail(message: &str) -> ! {
    logging::init(logging::DEFAULT_LEVEL);
    tracing::error!("{}", message);
    std::process::exit(1);
}
