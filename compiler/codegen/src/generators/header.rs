//! File header and import block.

use std::fmt;

use super::SwiftWriter;
use crate::{cw_writeln, GENERATOR_NAME};

/// Frameworks imported unconditionally
const IMPORTS: &[&str] = &["Logger"];

/// Write the do-not-edit banner naming the source file, then the imports.
pub fn emit(w: &mut SwiftWriter<'_>, source: &str) -> fmt::Result {
    w.writeln("//")?;
    w.writeln("// DO NOT EDIT.")?;
    w.writeln("//")?;
    cw_writeln!(w, "// Generated by `{}`.", GENERATOR_NAME)?;
    cw_writeln!(w, "// Source: {}", source)?;
    w.writeln("//")?;
    w.blank_line()?;

    w.writeln("#if !REMOTEONLY")?;
    w.writeln("import Lndmobile")?;
    w.writeln("#endif")?;
    for framework in IMPORTS {
        cw_writeln!(w, "import {}", framework)?;
    }
    Ok(())
}
