//! Mock connection with constructor-injected canned responses.

use std::fmt;

use super::{write_skipped, ServiceContext, SwiftWriter};
use crate::cw_writeln;

/// Write `Mock<Service>Connection`.
pub fn emit(w: &mut SwiftWriter<'_>, service: &ServiceContext) -> fmt::Result {
    let names = &service.names;
    let last_supported = service.methods.iter().rposition(|m| m.is_supported());

    w.block(&format!("class {}: {}", names.mock, names.connection_protocol), |w| {
        for method in &service.methods {
            if method.is_supported() {
                cw_writeln!(w, "private let {}: {}?", method.function_name, method.output_type)?;
            } else {
                write_skipped(w, method)?;
            }
        }

        w.blank_line()?;
        w.writeln("init(")?;
        {
            let _indent = w.indent();
            for (index, method) in service.methods.iter().enumerate() {
                if !method.is_supported() {
                    write_skipped(w, method)?;
                    continue;
                }
                let separator = if Some(index) == last_supported { "" } else { "," };
                cw_writeln!(
                    w,
                    "{}: {}? = nil{}",
                    method.function_name,
                    method.output_type,
                    separator
                )?;
            }
        }
        w.writeln(") {")?;
        {
            let _indent = w.indent();
            for method in service.methods.iter().filter(|m| m.is_supported()) {
                cw_writeln!(w, "self.{0} = {0}", method.function_name)?;
            }
        }
        w.writeln("}")?;

        for method in &service.methods {
            w.blank_line()?;
            if !method.is_supported() {
                write_skipped(w, method)?;
                continue;
            }
            w.block(&method.signature(), |w| {
                cw_writeln!(
                    w,
                    "completion(Result(value: {}, error: LndApiError.unknownError))",
                    method.function_name
                )
            })?;
        }
        Ok(())
    })
}
