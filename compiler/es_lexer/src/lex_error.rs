//! Tokenizer error kinds.
//!
//! Every kind maps to one [`ErrorCode`]. The `Display` text is the
//! diagnostic message; the code carries the stable identity.

use thiserror::Error;

use es_diagnostic::ErrorCode;
use es_lexer_core::EncodingError;

use crate::token::InvalidEscapeType;

/// How a kind of error is treated.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LexErrorCategory {
    /// Malformed UTF-8. Always fatal.
    Encoding,
    /// Input that is not a token. Always fatal.
    Lexical,
    /// Legacy syntax: fatal in strict mode code, a warning elsewhere.
    StrictMode,
    /// A malformed template escape, reported by the parser only if the
    /// template turns out to be untagged.
    DeferredTemplate,
}

#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum LexErrorKind {
    // === Encoding ===
    #[error("{0}")]
    Encoding(EncodingError),

    // === Lexical ===
    #[error("illegal character U+{code_point:04X}")]
    IllegalCharacter { code_point: u32 },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated string literal: line terminator before closing quote")]
    EolInString,
    #[error("unterminated template literal")]
    UnterminatedTemplate,
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("unterminated regular expression literal")]
    UnterminatedRegExp,
    #[error("invalid regular expression flag {flag}")]
    BadRegExpFlag { flag: char },
    #[error("missing digits after '0{prefix}'")]
    MissingDigits { prefix: char },
    #[error("missing exponent")]
    MissingExponent,
    #[error("identifier starts immediately after numeric literal")]
    IdentifierAfterNumber,
    #[error("trailing numeric separator")]
    TrailingNumericSeparator,
    #[error("numeric separators must not be adjacent")]
    AdjacentNumericSeparators,
    #[error("numeric separator cannot follow a leading zero")]
    SeparatorAfterLeadingZero,
    #[error("invalid BigInt literal")]
    InvalidBigInt,
    #[error("{0}")]
    MalformedEscape(InvalidEscapeType),
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("out of memory")]
    OutOfMemory,

    // === Strict mode ===
    #[error("octal literals are deprecated")]
    DeprecatedOctalLiteral,
    #[error("decimals with leading zeros are deprecated")]
    DeprecatedLeadingZero,
    #[error("octal escape sequences are deprecated")]
    DeprecatedOctalEscape,
    #[error("\\8 and \\9 are deprecated")]
    DeprecatedEightOrNineEscape,

    // === Deferred ===
    #[error("{0} in template literal")]
    InvalidTemplateEscape(InvalidEscapeType),

    // === Lint ===
    #[error("//@ is deprecated for {pragma} pragmas; use //# instead")]
    DeprecatedPragma { pragma: &'static str },
}

impl LexErrorKind {
    pub fn category(&self) -> LexErrorCategory {
        match self {
            LexErrorKind::Encoding(_) => LexErrorCategory::Encoding,
            LexErrorKind::DeprecatedOctalLiteral
            | LexErrorKind::DeprecatedLeadingZero
            | LexErrorKind::DeprecatedOctalEscape
            | LexErrorKind::DeprecatedEightOrNineEscape => LexErrorCategory::StrictMode,
            LexErrorKind::InvalidTemplateEscape(_) => LexErrorCategory::DeferredTemplate,
            _ => LexErrorCategory::Lexical,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexErrorKind::Encoding(error) => match error {
                EncodingError::BadLeadUnit { .. } => ErrorCode::E0001,
                EncodingError::NotEnoughUnits { .. } => ErrorCode::E0002,
                EncodingError::BadTrailingUnit { .. } => ErrorCode::E0003,
                EncodingError::BadCodePoint { .. } => ErrorCode::E0004,
            },
            LexErrorKind::IllegalCharacter { .. } => ErrorCode::E0010,
            LexErrorKind::UnterminatedString => ErrorCode::E0011,
            LexErrorKind::EolInString => ErrorCode::E0012,
            LexErrorKind::UnterminatedTemplate => ErrorCode::E0013,
            LexErrorKind::UnterminatedComment => ErrorCode::E0014,
            LexErrorKind::UnterminatedRegExp => ErrorCode::E0015,
            LexErrorKind::BadRegExpFlag { .. } => ErrorCode::E0016,
            LexErrorKind::MissingDigits { .. } => ErrorCode::E0020,
            LexErrorKind::MissingExponent => ErrorCode::E0021,
            LexErrorKind::IdentifierAfterNumber => ErrorCode::E0022,
            LexErrorKind::TrailingNumericSeparator
            | LexErrorKind::AdjacentNumericSeparators
            | LexErrorKind::SeparatorAfterLeadingZero => ErrorCode::E0023,
            LexErrorKind::InvalidBigInt => ErrorCode::E0024,
            LexErrorKind::MalformedEscape(_) => ErrorCode::E0030,
            LexErrorKind::InvalidEscape => ErrorCode::E0031,
            LexErrorKind::DeprecatedOctalLiteral => ErrorCode::E0040,
            LexErrorKind::DeprecatedLeadingZero => ErrorCode::E0041,
            LexErrorKind::DeprecatedOctalEscape => ErrorCode::E0042,
            LexErrorKind::DeprecatedEightOrNineEscape => ErrorCode::E0043,
            LexErrorKind::InvalidTemplateEscape(kind) => match kind {
                InvalidEscapeType::Octal => ErrorCode::E0042,
                InvalidEscapeType::EightOrNine => ErrorCode::E0043,
                InvalidEscapeType::Hexadecimal
                | InvalidEscapeType::Unicode
                | InvalidEscapeType::UnicodeOverflow => ErrorCode::E0030,
            },
            LexErrorKind::DeprecatedPragma { .. } => ErrorCode::E0050,
            LexErrorKind::OutOfMemory => ErrorCode::E0090,
        }
    }
}

/// A fatal tokenizer error at an absolute source offset.
///
/// By the time one is returned its diagnostic is already in the
/// tokenizer's queue.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
#[error("{kind} at offset {offset}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub offset: u32,
}

impl LexError {
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }
}

#[cfg(test)]
mod tests;
