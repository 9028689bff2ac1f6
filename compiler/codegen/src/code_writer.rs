//! Indentation-tracking writer for generated Swift source.
//!
//! Indentation is held in an `Rc<Cell<usize>>` so that an [`IndentGuard`] can live across
//! mutable writes without borrowing the writer.
//!
//! ```
//! use zap_codegen::code_writer::CodeWriter;
//!
//! let mut out = String::new();
//! let mut w = CodeWriter::with_indent_spaces(&mut out, 4);
//! w.block("protocol LightningConnection", |w| w.writeln("// skipped: sendPayment"))
//!     .expect("writing to a String cannot fail");
//! assert_eq!(out, "protocol LightningConnection {\n    // skipped: sendPayment\n}\n");
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Writer that prefixes every non-empty line with the current indentation.
pub struct CodeWriter<W> {
    writer: W,
    indent_level: Rc<Cell<usize>>,
    indent_string: String,
    at_line_start: Cell<bool>,
}

impl<W: fmt::Write> CodeWriter<W> {
    /// Create a writer with the given indent unit.
    pub fn new(writer: W, indent_string: String) -> Self {
        Self {
            writer,
            indent_level: Rc::new(Cell::new(0)),
            indent_string,
            at_line_start: Cell::new(true),
        }
    }

    /// Create a writer indenting by `spaces` spaces per level
    pub fn with_indent_spaces(writer: W, spaces: usize) -> Self {
        Self::new(writer, " ".repeat(spaces))
    }

    /// Write text without a newline. Indents if at line start.
    pub fn write(&mut self, text: &str) -> fmt::Result {
        if text.is_empty() {
            return Ok(());
        }

        if self.at_line_start.get() && !text.trim().is_empty() {
            for _ in 0..self.indent_level.get() {
                self.writer.write_str(&self.indent_string)?;
            }
            self.at_line_start.set(false);
        }

        self.writer.write_str(text)
    }

    /// Write text followed by a newline.
    pub fn writeln(&mut self, text: &str) -> fmt::Result {
        self.write(text)?;
        self.writer.write_char('\n')?;
        self.at_line_start.set(true);
        Ok(())
    }

    /// Write an empty line
    pub fn blank_line(&mut self) -> fmt::Result {
        self.writer.write_char('\n')?;
        self.at_line_start.set(true);
        Ok(())
    }

    /// Write a multi-line snippet, indenting each line relative to the current level.
    pub fn write_lines(&mut self, text: &str) -> fmt::Result {
        for line in text.lines() {
            self.writeln(line)?;
        }
        Ok(())
    }

    /// Increase indentation until the returned guard is dropped.
    pub fn indent(&mut self) -> IndentGuard {
        self.indent_level.set(self.indent_level.get() + 1);
        IndentGuard { indent_level: Rc::clone(&self.indent_level) }
    }

    /// Write `header {`, the body one level deeper, then `}`.
    pub fn block<F>(&mut self, header: &str, body: F) -> fmt::Result
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        self.writeln(&format!("{} {{", header))?;
        {
            let _indent = self.indent();
            body(self)?;
        }
        self.writeln("}")
    }

    /// Run `write_item` for each item, with a blank line between consecutive items.
    pub fn separated_by_blank_lines<I, F>(&mut self, items: I, mut write_item: F) -> fmt::Result
    where
        I: IntoIterator,
        F: FnMut(&mut Self, I::Item) -> fmt::Result,
    {
        let mut first = true;
        for item in items {
            if !first {
                self.blank_line()?;
            }
            write_item(self, item)?;
            first = false;
        }
        Ok(())
    }

    /// Current indentation level
    pub fn indent_level(&self) -> usize { self.indent_level.get() }

    #[doc(hidden)]
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        let formatted = format!("{}", args);
        self.write(&formatted)
    }

    #[doc(hidden)]
    pub fn writeln_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        let formatted = format!("{}", args);
        self.writeln(&formatted)
    }
}

/// Restores the previous indentation level on drop.
pub struct IndentGuard {
    indent_level: Rc<Cell<usize>>,
}

impl Drop for IndentGuard {
    fn drop(&mut self) {
        let current = self.indent_level.get();
        self.indent_level.set(current.saturating_sub(1));
    }
}

/// Formatted line output for a [`CodeWriter`], like `std::writeln!`.
#[macro_export]
macro_rules! cw_writeln {
    ($writer:expr, $($arg:tt)*) => {
        $writer.writeln_fmt(format_args!($($arg)*))
    };
}
