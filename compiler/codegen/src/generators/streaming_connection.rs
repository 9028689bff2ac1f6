//! Native bridge connection.
//!
//! Calls the in-process `Lndmobile` entry points with the serialized request. The class only
//! exists in builds that link the bridge, hence the `REMOTEONLY` guard.

use std::fmt;

use super::{write_skipped, ServiceContext, SwiftWriter};
use crate::cw_writeln;

/// Write `Streaming<Service>Connection`.
pub fn emit(w: &mut SwiftWriter<'_>, service: &ServiceContext) -> fmt::Result {
    let names = &service.names;

    w.writeln("#if !REMOTEONLY")?;
    w.block(&format!("class {}: {}", names.streaming, names.connection_protocol), |w| {
        for method in &service.methods {
            if !method.is_supported() {
                write_skipped(w, method)?;
                continue;
            }
            w.block(&method.signature(), |w| {
                cw_writeln!(
                    w,
                    "{}(try? request.serializedData(), LndCallback(completion))",
                    method.bridge_function
                )
            })?;
        }
        Ok(())
    })?;
    w.writeln("#endif")
}
