//! Turning a source offset into a reportable location.
//!
//! Columns are counted in UTF-16 code units whatever the source encoding,
//! so UTF-8 and UTF-16 tokenizers over the same text report the same
//! columns. A diagnostic on the line currently being scanned also carries a
//! window of that line's text; tokens spanning lines get none.

use tracing::debug;

use es_diagnostic::{Diagnostic, LineOfContext, Severity, SourceLocation};
use es_lexer_core::CodeUnit;

use super::Tokenizer;
use crate::lex_error::LexErrorKind;

impl<U: CodeUnit> Tokenizer<'_, U> {
    /// One-based line and zero-based UTF-16 column of `offset`. The first
    /// line's columns start at the configured initial column.
    pub fn line_and_column(&self, offset: u32) -> (u32, u32) {
        let index = self.coords.line_index_of(offset);
        let line = self.coords.line_num(offset);
        let line_start = self.coords.line_start(index);
        let prefix = self.units.code_units(line_start, offset);
        let mut column = u32::try_from(U::utf16_length(prefix)).unwrap_or(u32::MAX);
        if index == 0 {
            column = column.saturating_add(self.coords.initial_column());
        }
        (line, column)
    }

    /// Line and column where the current token begins.
    pub fn current_line_and_column(&self) -> (u32, u32) {
        self.line_and_column(self.current_token().pos.begin)
    }

    /// A window of the current line around `offset`, as UTF-16-indexed text.
    pub(super) fn line_of_context(&self, offset: u32) -> LineOfContext {
        let window_start = self.units.find_window_start(offset);
        let window_end = self.units.find_window_end(offset);
        let window = self.units.code_units(window_start, window_end);

        let mut scratch = Vec::with_capacity(window.len());
        U::for_each_utf16(window, |unit| scratch.push(unit));
        let token_offset = U::utf16_length(self.units.code_units(window_start, offset));

        LineOfContext {
            text: String::from_utf16_lossy(&scratch),
            token_offset: u32::try_from(token_offset).unwrap_or(u32::MAX),
            length: u32::try_from(scratch.len()).unwrap_or(u32::MAX),
        }
    }

    fn diagnostic_at(&self, severity: Severity, kind: &LexErrorKind, offset: u32) -> Diagnostic {
        let (line, column) = self.line_and_column(offset);
        let location = SourceLocation {
            filename: self.options.filename.clone(),
            line,
            column: column + 1,
        };
        let context = (line == self.lineno).then(|| self.line_of_context(offset));

        let diagnostic = match severity {
            Severity::Error => Diagnostic::error(kind.code()),
            Severity::Warning => Diagnostic::warning(kind.code()),
        };
        diagnostic
            .with_message(kind.to_string())
            .with_location(location)
            .with_context(context)
            .muted(self.options.muted_errors)
    }

    /// Queue a diagnostic for `kind` at `offset`.
    pub(super) fn report(&mut self, severity: Severity, kind: &LexErrorKind, offset: u32) {
        let diagnostic = self.diagnostic_at(severity, kind, offset);
        debug!(
            code = %diagnostic.code,
            line = diagnostic.location.line,
            column = diagnostic.location.column,
            "{kind}"
        );
        self.diagnostics.push(diagnostic);
    }
}
