//! Tokenizer configuration.

use std::cell::Cell;

/// Per-compilation options.
///
/// `line`, `column`, and `offset` place the source inside a larger
/// document: an inline `<script>` starting on line 40, or a function body
/// re-tokenized from the middle of its script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    /// Reported in diagnostics; `None` renders as `<anonymous>`.
    pub filename: Option<String>,
    /// Line number of the first line.
    pub line: u32,
    /// Column of the first unit of the first line.
    pub column: u32,
    /// Absolute offset of the first unit.
    pub offset: u32,
    /// Diagnostics omit source text and location detail when rendered.
    pub muted_errors: bool,
    /// Recognize `<!--` and `-->` as line comment openers.
    pub allow_html_comments: bool,
    /// Report lint-style warnings such as deprecated `//@` directives.
    pub extra_warnings: bool,
    /// Treat every warning as an error.
    pub werror: bool,
    /// Treat the whole source as strict mode code regardless of what the
    /// strict-mode getter says.
    pub force_strict_mode: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            filename: None,
            line: 1,
            column: 0,
            offset: 0,
            muted_errors: false,
            allow_html_comments: true,
            extra_warnings: false,
            werror: false,
            force_strict_mode: false,
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    #[must_use]
    pub fn with_column(mut self, column: u32) -> Self {
        self.column = column;
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn with_muted_errors(mut self, muted: bool) -> Self {
        self.muted_errors = muted;
        self
    }

    #[must_use]
    pub fn with_html_comments(mut self, allow: bool) -> Self {
        self.allow_html_comments = allow;
        self
    }

    #[must_use]
    pub fn with_extra_warnings(mut self, enabled: bool) -> Self {
        self.extra_warnings = enabled;
        self
    }

    #[must_use]
    pub fn with_werror(mut self, enabled: bool) -> Self {
        self.werror = enabled;
        self
    }

    #[must_use]
    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.force_strict_mode = strict;
        self
    }
}

/// Answers "is the code being scanned right now strict mode code?".
///
/// Strictness is a property of the parse context, which the tokenizer does
/// not see; the driving parser supplies it through this trait. It is asked
/// at the moment a legacy octal literal or escape is found, so a
/// `"use strict"` directive that the parser has just processed takes
/// effect for the very next token.
pub trait StrictModeGetter {
    fn strict_mode(&self) -> bool;
}

/// A flag the parser flips as it enters and leaves strict code.
impl StrictModeGetter for Cell<bool> {
    fn strict_mode(&self) -> bool {
        self.get()
    }
}

#[cfg(test)]
mod tests;
