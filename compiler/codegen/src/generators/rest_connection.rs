//! REST connection.
//!
//! Each method with a usable `google.api.http` binding calls `LNDRest.run` with the bound
//! verb and path; a `*` body sends the request as JSON. Methods without a binding get a stub
//! that logs and never completes.

use std::fmt;

use semantics::HttpBinding;

use super::{write_skipped, MethodContext, ServiceContext, SwiftWriter};
use crate::cw_writeln;

/// Log prefix of the stub diagnostic
const STUB_LOG_PREFIX: &str = "📺";

/// Write `Rest<Service>Connection`.
pub fn emit(w: &mut SwiftWriter<'_>, service: &ServiceContext) -> fmt::Result {
    let names = &service.names;

    w.block(&format!("final class {}: {}", names.rest, names.connection_protocol), |w| {
        w.writeln("private let lndRest: LNDRest")?;
        w.blank_line()?;
        w.block("init(lndRest: LNDRest)", |w| w.writeln("self.lndRest = lndRest"))?;

        for method in &service.methods {
            w.blank_line()?;
            if !method.is_supported() {
                write_skipped(w, method)?;
                continue;
            }
            w.block(&method.signature(), |w| match &method.binding {
                Ok(binding) => write_call(w, binding),
                Err(_) => write_stub(w, method),
            })?;
        }
        Ok(())
    })
}

fn write_call(w: &mut SwiftWriter<'_>, binding: &HttpBinding) -> fmt::Result {
    let verb = binding.method.swift_case();
    let path = binding.path.to_swift_literal();

    if binding.has_body {
        w.writeln("guard let json = try? request.jsonString() else { return }")?;
        cw_writeln!(
            w,
            "lndRest.run(method: {}, path: \"{}\", data: json, completion: completion)",
            verb,
            path
        )
    } else {
        cw_writeln!(
            w,
            "lndRest.run(method: {}, path: \"{}\", data: nil, completion: completion)",
            verb,
            path
        )
    }
}

fn write_stub(w: &mut SwiftWriter<'_>, method: &MethodContext) -> fmt::Result {
    cw_writeln!(
        w,
        "Logger.error(\"{} not implemented\", customPrefix: \"{}\")",
        method.name,
        STUB_LOG_PREFIX
    )
}
