//! Bit sets for tokenizer state and regular expression flags.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Tokenizer state saved and restored with each position snapshot.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TokenStreamFlags: u8 {
        /// The last real scan reached the end of the source.
        const IS_EOF = 1 << 0;
        /// A token has started on the current line. Gates `-->` comments.
        const IS_DIRTY_LINE = 1 << 1;
        /// Some string or template contained an octal escape.
        const SAW_OCTAL_ESCAPE = 1 << 2;
        /// Some string or template contained `\8` or `\9`.
        const SAW_EIGHT_OR_NINE_ESCAPE = 1 << 3;
        /// Scanning failed; no further tokens will be produced.
        const HAD_ERROR = 1 << 4;
        /// Some number was written as a legacy octal or `0`-prefixed decimal.
        const SAW_DEPRECATED_OCTAL_LITERAL = 1 << 5;
    }
}

bitflags! {
    /// Flags following a regular expression literal's closing `/`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct RegExpFlags: u8 {
        /// `d`
        const HAS_INDICES = 1 << 0;
        /// `g`
        const GLOBAL = 1 << 1;
        /// `i`
        const IGNORE_CASE = 1 << 2;
        /// `m`
        const MULTILINE = 1 << 3;
        /// `s`
        const DOT_ALL = 1 << 4;
        /// `u`
        const UNICODE = 1 << 5;
        /// `v`
        const UNICODE_SETS = 1 << 6;
        /// `y`
        const STICKY = 1 << 7;
    }
}

impl RegExpFlags {
    /// Flag for one ASCII flag letter.
    pub fn from_letter(letter: u8) -> Option<RegExpFlags> {
        Some(match letter {
            b'd' => RegExpFlags::HAS_INDICES,
            b'g' => RegExpFlags::GLOBAL,
            b'i' => RegExpFlags::IGNORE_CASE,
            b'm' => RegExpFlags::MULTILINE,
            b's' => RegExpFlags::DOT_ALL,
            b'u' => RegExpFlags::UNICODE,
            b'v' => RegExpFlags::UNICODE_SETS,
            b'y' => RegExpFlags::STICKY,
            _ => return None,
        })
    }
}

/// Canonical `dgimsuvy` order, as `RegExp.prototype.flags` prints them.
impl fmt::Display for RegExpFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, flag) in [
            ('d', RegExpFlags::HAS_INDICES),
            ('g', RegExpFlags::GLOBAL),
            ('i', RegExpFlags::IGNORE_CASE),
            ('m', RegExpFlags::MULTILINE),
            ('s', RegExpFlags::DOT_ALL),
            ('u', RegExpFlags::UNICODE),
            ('v', RegExpFlags::UNICODE_SETS),
            ('y', RegExpFlags::STICKY),
        ] {
            if self.contains(flag) {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}
