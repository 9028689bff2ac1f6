//! `protocol <Service>Connection`

use std::fmt;

use super::{write_skipped, ServiceContext, SwiftWriter};

/// Write the connection protocol: one requirement per supported method.
pub fn emit(w: &mut SwiftWriter<'_>, service: &ServiceContext) -> fmt::Result {
    w.block(&format!("protocol {}", service.names.connection_protocol), |w| {
        for method in &service.methods {
            if method.is_supported() {
                w.writeln(&method.signature())?;
            } else {
                write_skipped(w, method)?;
            }
        }
        Ok(())
    })
}
