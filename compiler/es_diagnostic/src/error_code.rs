use std::fmt;

/// Error codes for tokenizer diagnostics.
///
/// Format: E00xx where the tens digit groups the code:
/// - E000x: encoding errors (UTF-8 sources only)
/// - E001x: unterminated or illegal input
/// - E002x: malformed numeric literals
/// - E003x: malformed escapes
/// - E004x: strict-mode violations (warnings in sloppy code)
/// - E005x: lint-style warnings
/// - E009x: resource exhaustion
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Encoding Errors (E000x)
    /// Invalid UTF-8 lead unit
    E0001,
    /// Truncated UTF-8 sequence
    E0002,
    /// Invalid UTF-8 continuation unit
    E0003,
    /// UTF-8 sequence encodes an invalid code point
    E0004,

    // Lexical Errors (E001x)
    /// Illegal character
    E0010,
    /// Unterminated string literal
    E0011,
    /// Line terminator inside a string literal
    E0012,
    /// Unterminated template literal
    E0013,
    /// Unterminated block comment
    E0014,
    /// Unterminated regular expression literal
    E0015,
    /// Invalid regular expression flag
    E0016,

    // Numeric Errors (E002x)
    /// Missing digits after a radix prefix
    E0020,
    /// Missing exponent digits
    E0021,
    /// Identifier starts immediately after a numeric literal
    E0022,
    /// Misplaced numeric separator
    E0023,
    /// Invalid BigInt literal
    E0024,

    // Escape Errors (E003x)
    /// Malformed escape sequence in a string or template
    E0030,
    /// Invalid escape sequence outside a literal
    E0031,

    // Strict Mode (E004x)
    /// Legacy octal literal
    E0040,
    /// Decimal literal with a leading zero
    E0041,
    /// Octal escape sequence
    E0042,
    /// `\8` or `\9` escape sequence
    E0043,

    // Warnings (E005x)
    /// Deprecated `//@` source directive
    E0050,

    // Resource Errors (E009x)
    /// Out of memory while buffering token text
    E0090,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0010,
        ErrorCode::E0011,
        ErrorCode::E0012,
        ErrorCode::E0013,
        ErrorCode::E0014,
        ErrorCode::E0015,
        ErrorCode::E0016,
        ErrorCode::E0020,
        ErrorCode::E0021,
        ErrorCode::E0022,
        ErrorCode::E0023,
        ErrorCode::E0024,
        ErrorCode::E0030,
        ErrorCode::E0031,
        ErrorCode::E0040,
        ErrorCode::E0041,
        ErrorCode::E0042,
        ErrorCode::E0043,
        ErrorCode::E0050,
        ErrorCode::E0090,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0010 => "E0010",
            ErrorCode::E0011 => "E0011",
            ErrorCode::E0012 => "E0012",
            ErrorCode::E0013 => "E0013",
            ErrorCode::E0014 => "E0014",
            ErrorCode::E0015 => "E0015",
            ErrorCode::E0016 => "E0016",
            ErrorCode::E0020 => "E0020",
            ErrorCode::E0021 => "E0021",
            ErrorCode::E0022 => "E0022",
            ErrorCode::E0023 => "E0023",
            ErrorCode::E0024 => "E0024",
            ErrorCode::E0030 => "E0030",
            ErrorCode::E0031 => "E0031",
            ErrorCode::E0040 => "E0040",
            ErrorCode::E0041 => "E0041",
            ErrorCode::E0042 => "E0042",
            ErrorCode::E0043 => "E0043",
            ErrorCode::E0050 => "E0050",
            ErrorCode::E0090 => "E0090",
        }
    }

    /// Numeric part of the code.
    pub fn number(&self) -> u16 {
        self.as_str()[1..].parse().unwrap_or(0)
    }

    /// Parse `E0011` (or `e0011`, or `11`) back into a code.
    pub fn parse(text: &str) -> Option<ErrorCode> {
        let digits = text
            .strip_prefix('E')
            .or_else(|| text.strip_prefix('e'))
            .unwrap_or(text);
        let number: u16 = digits.parse().ok()?;
        ErrorCode::ALL.iter().copied().find(|c| c.number() == number)
    }

    /// One-line explanation, used by `esc explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "A byte that cannot start a UTF-8 sequence: a continuation byte (0x80-0xBF) or 0xF5-0xFF."
            }
            ErrorCode::E0002 => "The source ends in the middle of a multi-byte UTF-8 sequence.",
            ErrorCode::E0003 => {
                "A multi-byte UTF-8 sequence contains a byte that is not a continuation byte."
            }
            ErrorCode::E0004 => {
                "A UTF-8 sequence is overlong, encodes a surrogate, or exceeds U+10FFFF."
            }
            ErrorCode::E0010 => "A character that cannot begin any token.",
            ErrorCode::E0011 => "A string literal is missing its closing quote.",
            ErrorCode::E0012 => {
                "String literals cannot span lines; use a line continuation or a template literal."
            }
            ErrorCode::E0013 => "A template literal is missing its closing backtick.",
            ErrorCode::E0014 => "A block comment is missing its closing `*/`.",
            ErrorCode::E0015 => "A regular expression literal is missing its closing `/`.",
            ErrorCode::E0016 => {
                "Regular expression flags must be distinct letters from `dgimsuvy`, and `u` cannot be combined with `v`."
            }
            ErrorCode::E0020 => "A `0x`, `0o`, or `0b` prefix must be followed by at least one digit.",
            ErrorCode::E0021 => "An exponent marker must be followed by at least one digit.",
            ErrorCode::E0022 => {
                "An identifier or keyword cannot immediately follow a numeric literal."
            }
            ErrorCode::E0023 => {
                "Numeric separators must sit between two digits and cannot follow a leading zero."
            }
            ErrorCode::E0024 => {
                "BigInt literals cannot have a fractional part, an exponent, or a legacy octal form."
            }
            ErrorCode::E0030 => "An escape sequence inside a string or template literal is malformed.",
            ErrorCode::E0031 => "A backslash outside a literal must begin a Unicode escape for an identifier.",
            ErrorCode::E0040 => "Legacy octal literals such as `017` are not allowed in strict mode.",
            ErrorCode::E0041 => "Decimal literals with a leading zero such as `08` are not allowed in strict mode.",
            ErrorCode::E0042 => {
                "Octal escape sequences are not allowed in strict mode or in untagged templates."
            }
            ErrorCode::E0043 => {
                "`\\8` and `\\9` are not allowed in strict mode or in untagged templates."
            }
            ErrorCode::E0050 => "`//@` source directives are deprecated; use `//#` instead.",
            ErrorCode::E0090 => "The tokenizer ran out of memory while buffering literal text.",
        }
    }

    /// Is this an encoding error?
    pub fn is_encoding_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003 | ErrorCode::E0004
        )
    }

    /// Is this a strict-mode error (a warning outside strict code)?
    pub fn is_strict_mode_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E0040 | ErrorCode::E0041 | ErrorCode::E0042 | ErrorCode::E0043
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
