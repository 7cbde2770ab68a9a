use std::fmt;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Where a diagnostic points.
///
/// `line` is the source line number (the first line is whatever the
/// caller configured, normally 1). `column` is one-based and counted in
/// UTF-16 code units whatever the source encoding.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SourceLocation {
    pub filename: Option<String>,
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filename = self.filename.as_deref().unwrap_or("<anonymous>");
        write!(f, "{filename}:{}:{}", self.line, self.column)
    }
}

/// A window of source text around a diagnostic's location.
///
/// The window never contains a line terminator. Offsets and lengths are
/// in UTF-16 code units.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LineOfContext {
    /// The window's text.
    pub text: String,
    /// Offset of the diagnostic within `text`.
    pub token_offset: u32,
    /// Length of `text`.
    pub length: u32,
}

impl LineOfContext {
    /// `token_offset` converted to a `char` count, for placing a caret.
    pub fn token_char_offset(&self) -> usize {
        let mut units = 0;
        self.text
            .chars()
            .take_while(|c| {
                units += c.len_utf16();
                units <= self.token_offset as usize
            })
            .count()
    }
}

/// A structured diagnostic record.
///
/// The message is the tokenizer's own rendering of the problem; consumers
/// that format their own text can key off `code` instead.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub location: SourceLocation,
    pub context: Option<LineOfContext>,
    /// Details of this diagnostic must not be shown to the user.
    pub is_muted: bool,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: String::new(),
            location: SourceLocation::default(),
            context: None,
            is_muted: false,
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(code: ErrorCode) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            ..Self::error(code)
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: Option<LineOfContext>) -> Self {
        self.context = context;
        self
    }

    #[must_use]
    pub fn muted(mut self, is_muted: bool) -> Self {
        self.is_muted = is_muted;
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.severity, self.code)?;
        if self.is_muted {
            return write!(f, ": script error");
        }
        write!(f, " {}: {}", self.location, self.message)
    }
}

#[cfg(test)]
mod tests;
