//! gRPC connection.
//!
//! Unary methods hand the generated client a completion adapter. Server-streaming methods
//! open a call and re-arm `receive` after every message until the stream ends or fails.

use std::fmt;

use semantics::StreamingType;

use super::{write_skipped, MethodContext, ServiceContext, SwiftWriter};
use crate::cw_writeln;

/// Write `RPC<Service>Connection`.
pub fn emit(w: &mut SwiftWriter<'_>, service: &ServiceContext) -> fmt::Result {
    let names = &service.names;

    w.block(&format!("final class {}: {}", names.rpc, names.connection_protocol), |w| {
        cw_writeln!(w, "let service: {}", names.service_class())?;
        w.blank_line()?;
        w.block("public init(configuration: RPCCredentials)", |w| {
            cw_writeln!(w, "service = {}(configuration: configuration)", names.service_client())
        })?;

        for method in &service.methods {
            w.blank_line()?;
            match method.streaming {
                StreamingType::Unary => write_unary(w, method)?,
                StreamingType::ServerStreaming => {
                    write_server_streaming(w, method, &names.call_type(&method.name))?
                }
                StreamingType::ClientStreaming | StreamingType::BidirectionalStreaming => {
                    write_skipped(w, method)?
                }
            }
        }
        Ok(())
    })
}

fn write_unary(w: &mut SwiftWriter<'_>, method: &MethodContext) -> fmt::Result {
    w.block(&method.signature(), |w| {
        cw_writeln!(
            w,
            "_ = try? service.{}(request, completion: createHandler(completion))",
            method.function_name
        )
    })
}

fn write_server_streaming(
    w: &mut SwiftWriter<'_>,
    method: &MethodContext,
    call_type: &str,
) -> fmt::Result {
    let receive = format!("receive{}Update", method.name);

    w.block(&method.signature(), |w| {
        w.write_lines(&format!(
            "do {{\n    \
                 let call = try service.{function}(request) {{ Logger.error($0) }}\n    \
                 try {receive}(call: call, completion: completion)\n\
             }} catch {{\n    \
                 Logger.error(error)\n\
             }}",
            function = method.function_name,
        ))
    })?;

    w.block(
        &format!(
            "private func {}(call: {}, completion: @escaping ApiCompletion<{}>) throws",
            receive, call_type, method.output_type
        ),
        |w| {
            w.write_lines(&format!(
                "try call.receive {{ [weak self] in\n    \
                     do {{\n        \
                         guard try handleStreamResult($0, completion: completion) else {{ return }}\n        \
                         try self?.{receive}(call: call, completion: completion)\n    \
                     }} catch {{}}\n\
                 }}"
            ))
        },
    )
}
