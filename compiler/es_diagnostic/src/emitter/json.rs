//! JSON Emitter
//!
//! Writes a JSON array with one object per diagnostic. Positions in
//! `context` are UTF-16 code units.

use std::io::Write;

use crate::Diagnostic;

use super::{escape_json, DiagnosticEmitter};

pub struct JsonEmitter<W: Write> {
    writer: W,
    emitted: usize,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter { writer, emitted: 0 }
    }

    /// Open the array. Call once before the first `emit`.
    pub fn begin(&mut self) {
        let _ = write!(self.writer, "[");
    }

    /// Close the array.
    pub fn end(&mut self) {
        let _ = writeln!(self.writer, "]");
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if self.emitted > 0 {
            let _ = write!(self.writer, ",");
        }
        self.emitted += 1;

        let _ = write!(
            self.writer,
            "{{\"severity\":\"{}\",\"code\":\"{}\",\"muted\":{}",
            diagnostic.severity, diagnostic.code, diagnostic.is_muted
        );

        if !diagnostic.is_muted {
            let location = &diagnostic.location;
            let filename = location
                .filename
                .as_deref()
                .map_or_else(|| "null".to_string(), |f| format!("\"{}\"", escape_json(f)));
            let _ = write!(
                self.writer,
                ",\"message\":\"{}\",\"file\":{},\"line\":{},\"column\":{}",
                escape_json(&diagnostic.message),
                filename,
                location.line,
                location.column
            );
            if let Some(context) = &diagnostic.context {
                let _ = write!(
                    self.writer,
                    ",\"context\":{{\"text\":\"{}\",\"offset\":{},\"length\":{}}}",
                    escape_json(&context.text),
                    context.token_offset,
                    context.length
                );
            }
        }

        let _ = write!(self.writer, "}}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {
        // Counts are derivable from the array.
    }
}
