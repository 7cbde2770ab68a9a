//! Code-unit codecs for the two supported source encodings.
//!
//! Source text is either UTF-8 (`u8` units) or UTF-16 (`u16` units). The
//! tokenizer is written once against [`CodeUnit`]; the two implementations
//! here supply decoding, transcoding, and window-finding for their encoding.
//!
//! UTF-8 decoding is strict: overlong forms, surrogates, and code points
//! above U+10FFFF are rejected. UTF-16 decoding never fails; a lone
//! surrogate decodes as itself.

use std::fmt;

use crate::unicode::{
    self, is_lead_surrogate, is_trail_surrogate, LINE_SEPARATOR, NON_BMP_MAX, NON_BMP_MIN,
    PARA_SEPARATOR, REPLACEMENT_CHARACTER,
};

/// Maximum number of code units on either side of an offset included in a
/// diagnostic's line of context.
pub const WINDOW_RADIUS: usize = 60;

/// Source encoding, fixed when a tokenizer is constructed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Encoding {
    Utf8,
    Utf16,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Utf8 => write!(f, "UTF-8"),
            Encoding::Utf16 => write!(f, "UTF-16"),
        }
    }
}

/// A code point decoded without consuming it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct PeekedCodePoint {
    code_point: u32,
    length: u8,
}

impl PeekedCodePoint {
    #[inline]
    pub const fn new(code_point: u32, length: u8) -> Self {
        PeekedCodePoint { code_point, length }
    }

    #[inline]
    pub const fn code_point(self) -> u32 {
        self.code_point
    }

    /// Length of the encoded code point, in code units.
    #[inline]
    pub const fn length(self) -> u8 {
        self.length
    }
}

/// Why a structurally complete UTF-8 sequence was rejected.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BadCodePointReason {
    /// Encoded in more units than necessary.
    Overlong,
    /// U+D800..=U+DFFF, which UTF-8 may not encode.
    Surrogate,
    /// Above U+10FFFF.
    TooLarge,
}

/// Malformed UTF-8. UTF-16 sources never produce these.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EncodingError {
    /// A unit that cannot begin a sequence (a continuation unit, or 0xF5..=0xFF).
    BadLeadUnit { lead: u8 },
    /// The source ended before the sequence did.
    NotEnoughUnits { lead: u8, available: u8, required: u8 },
    /// A unit inside the sequence is not a continuation unit.
    BadTrailingUnit { lead: u8, units_observed: u8 },
    /// The sequence decodes to a value UTF-8 forbids.
    BadCodePoint {
        code_point: u32,
        length: u8,
        reason: BadCodePointReason,
    },
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            EncodingError::BadLeadUnit { lead } => {
                write!(f, "0x{lead:02X} is not a valid UTF-8 lead unit")
            }
            EncodingError::NotEnoughUnits {
                lead,
                available,
                required,
            } => write!(
                f,
                "UTF-8 lead unit 0x{lead:02X} needs {required} units, but only {available} remain"
            ),
            EncodingError::BadTrailingUnit {
                lead,
                units_observed,
            } => write!(
                f,
                "UTF-8 sequence starting with 0x{lead:02X} has a bad unit at position {units_observed}"
            ),
            EncodingError::BadCodePoint {
                code_point,
                length,
                reason,
            } => {
                let why = match reason {
                    BadCodePointReason::Overlong => "is an overlong encoding",
                    BadCodePointReason::Surrogate => "is a surrogate",
                    BadCodePointReason::TooLarge => "is not a Unicode code point",
                };
                write!(f, "{length}-unit UTF-8 sequence for 0x{code_point:X} {why}")
            }
        }
    }
}

impl std::error::Error for EncodingError {}

/// A fixed-width storage unit of source text.
///
/// The tokenizer state machine is generic over this trait; nothing outside
/// the two implementations below knows which encoding is in use.
pub trait CodeUnit: Copy + Eq + Ord + fmt::Debug + Send + Sync + 'static {
    const ENCODING: Encoding;

    /// Units occupied by U+2028 and U+2029.
    const SEPARATOR_LENGTH: u8;

    /// Numeric value of the unit.
    fn value(self) -> u32;

    fn from_ascii(byte: u8) -> Self;

    #[inline]
    fn is_ascii(self) -> bool {
        self.value() < 0x80
    }

    /// Whether this unit is the ASCII character `byte`.
    #[inline]
    fn is(self, byte: u8) -> bool {
        self.value() == u32::from(byte)
    }

    /// Decode the code point whose non-ASCII lead unit is `units[0]`.
    fn decode_non_ascii(units: &[Self]) -> Result<PeekedCodePoint, EncodingError>;

    /// Calls `f` with each UTF-16 unit of `units`.
    ///
    /// Invalid UTF-8 is replaced unit by unit with U+FFFD; callers only pass
    /// text that has already been scanned.
    fn for_each_utf16(units: &[Self], f: impl FnMut(u16));

    /// Length of `units` in UTF-16 code units.
    fn utf16_length(units: &[Self]) -> usize;

    /// Length of the longest prefix of `units` that is valid text free of
    /// line terminators. May stop short of a terminator; callers finish the
    /// job one code point at a time.
    fn skip_to_line_terminator(units: &[Self]) -> usize;

    /// Earliest index at most [`WINDOW_RADIUS`] units before `offset` such
    /// that `units[start..offset]` contains no line terminator and does not
    /// begin inside a code point.
    fn find_window_start(units: &[Self], offset: usize) -> usize;

    /// Latest index at most [`WINDOW_RADIUS`] units after `offset` such that
    /// `units[offset..end]` is validly encoded and contains no line
    /// terminator.
    fn find_window_end(units: &[Self], offset: usize) -> usize;
}

// === UTF-8 ===

#[inline]
fn is_utf8_trailing(unit: u8) -> bool {
    unit & 0xC0 == 0x80
}

/// Decode one non-ASCII UTF-8 sequence from the start of `units`.
fn decode_utf8(units: &[u8]) -> Result<PeekedCodePoint, EncodingError> {
    let Some(&lead) = units.first() else {
        return Err(EncodingError::NotEnoughUnits {
            lead: 0,
            available: 0,
            required: 1,
        });
    };

    let (required, min, mut code_point): (u8, u32, u32) = match lead {
        0xC0..=0xDF => (2, 0x80, u32::from(lead & 0x1F)),
        0xE0..=0xEF => (3, 0x800, u32::from(lead & 0x0F)),
        0xF0..=0xF4 => (4, NON_BMP_MIN, u32::from(lead & 0x07)),
        _ => return Err(EncodingError::BadLeadUnit { lead }),
    };

    let needed = usize::from(required);
    if units.len() < needed {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "fewer than four units are available here"
        )]
        let available = units.len() as u8;
        return Err(EncodingError::NotEnoughUnits {
            lead,
            available,
            required,
        });
    }

    for (i, &unit) in (1u8..).zip(&units[1..needed]) {
        if !is_utf8_trailing(unit) {
            return Err(EncodingError::BadTrailingUnit {
                lead,
                units_observed: i + 1,
            });
        }
        code_point = (code_point << 6) | u32::from(unit & 0x3F);
    }

    let reason = if code_point < min {
        Some(BadCodePointReason::Overlong)
    } else if unicode::is_surrogate(code_point) {
        Some(BadCodePointReason::Surrogate)
    } else if code_point > NON_BMP_MAX {
        Some(BadCodePointReason::TooLarge)
    } else {
        None
    };
    match reason {
        Some(reason) => Err(EncodingError::BadCodePoint {
            code_point,
            length: required,
            reason,
        }),
        None => Ok(PeekedCodePoint::new(code_point, required)),
    }
}

/// Walks `units` code point by code point, decoding invalid units as U+FFFD.
fn for_each_utf8_code_point(units: &[u8], mut f: impl FnMut(u32)) {
    let mut i = 0;
    while i < units.len() {
        let lead = units[i];
        if lead < 0x80 {
            f(u32::from(lead));
            i += 1;
            continue;
        }
        match decode_utf8(&units[i..]) {
            Ok(peeked) => {
                f(peeked.code_point());
                i += usize::from(peeked.length());
            }
            Err(_) => {
                f(REPLACEMENT_CHARACTER);
                i += 1;
            }
        }
    }
}

impl CodeUnit for u8 {
    const ENCODING: Encoding = Encoding::Utf8;
    const SEPARATOR_LENGTH: u8 = 3;

    #[inline]
    fn value(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn from_ascii(byte: u8) -> Self {
        debug_assert!(byte.is_ascii());
        byte
    }

    #[inline]
    fn decode_non_ascii(units: &[u8]) -> Result<PeekedCodePoint, EncodingError> {
        decode_utf8(units)
    }

    fn for_each_utf16(units: &[u8], mut f: impl FnMut(u16)) {
        for_each_utf8_code_point(units, |cp| unicode::utf16_encode(cp, &mut f));
    }

    fn utf16_length(units: &[u8]) -> usize {
        let mut length = 0;
        for_each_utf8_code_point(units, |cp| length += unicode::utf16_length(cp));
        length
    }

    fn skip_to_line_terminator(units: &[u8]) -> usize {
        // 0xE2 leads the encodings of U+2028 and U+2029.
        let candidate = memchr::memchr3(b'\n', b'\r', 0xE2, units).unwrap_or(units.len());
        match std::str::from_utf8(&units[..candidate]) {
            Ok(_) => candidate,
            Err(error) => error.valid_up_to(),
        }
    }

    fn find_window_start(units: &[u8], offset: usize) -> usize {
        let mut p = offset;
        while p > 0 && offset - p < WINDOW_RADIUS {
            let prev = units[p - 1];
            if prev == b'\r' || prev == b'\n' {
                break;
            }
            // U+2028 is E2 80 A8, U+2029 is E2 80 A9.
            if (prev == 0xA8 || prev == 0xA9)
                && p >= 3
                && units[p - 2] == 0x80
                && units[p - 3] == 0xE2
            {
                break;
            }

            // Step back over one whole code point.
            p -= 1;
            while p > 0 && is_utf8_trailing(units[p]) {
                p -= 1;
            }

            // A code point straddling the radius is excluded.
            if offset - p > WINDOW_RADIUS {
                p += 1;
                while p < offset && is_utf8_trailing(units[p]) {
                    p += 1;
                }
                break;
            }
        }
        p
    }

    fn find_window_end(units: &[u8], offset: usize) -> usize {
        let mut p = offset;
        while p < units.len() && p - offset < WINDOW_RADIUS {
            let lead = units[p];
            if lead < 0x80 {
                if lead == b'\r' || lead == b'\n' {
                    break;
                }
                p += 1;
                continue;
            }

            // Later text may be malformed even if the token itself was not.
            let Ok(peeked) = decode_utf8(&units[p..]) else {
                break;
            };
            let cp = peeked.code_point();
            if cp == LINE_SEPARATOR || cp == PARA_SEPARATOR {
                break;
            }
            let length = usize::from(peeked.length());
            if p - offset + length > WINDOW_RADIUS {
                break;
            }
            p += length;
        }
        p
    }
}

// === UTF-16 ===

impl CodeUnit for u16 {
    const ENCODING: Encoding = Encoding::Utf16;
    const SEPARATOR_LENGTH: u8 = 1;

    #[inline]
    fn value(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn from_ascii(byte: u8) -> Self {
        debug_assert!(byte.is_ascii());
        u16::from(byte)
    }

    fn decode_non_ascii(units: &[u16]) -> Result<PeekedCodePoint, EncodingError> {
        let Some(&lead) = units.first() else {
            return Err(EncodingError::NotEnoughUnits {
                lead: 0,
                available: 0,
                required: 1,
            });
        };
        let lead = u32::from(lead);
        if is_lead_surrogate(lead) {
            if let Some(&trail) = units.get(1) {
                let trail = u32::from(trail);
                if is_trail_surrogate(trail) {
                    return Ok(PeekedCodePoint::new(unicode::utf16_decode(lead, trail), 2));
                }
            }
        }
        Ok(PeekedCodePoint::new(lead, 1))
    }

    #[inline]
    fn for_each_utf16(units: &[u16], mut f: impl FnMut(u16)) {
        for &unit in units {
            f(unit);
        }
    }

    #[inline]
    fn utf16_length(units: &[u16]) -> usize {
        units.len()
    }

    fn skip_to_line_terminator(units: &[u16]) -> usize {
        units
            .iter()
            .position(|&u| unicode::is_line_terminator(u32::from(u)))
            .unwrap_or(units.len())
    }

    fn find_window_start(units: &[u16], offset: usize) -> usize {
        let mut p = offset;
        while p > 0 && offset - p < WINDOW_RADIUS {
            let prev = u32::from(units[p - 1]);
            if unicode::is_line_terminator(prev) {
                break;
            }
            // Lone surrogates are left out of the window.
            if is_lead_surrogate(prev) {
                break;
            }
            if is_trail_surrogate(prev) {
                let paired = p >= 2 && is_lead_surrogate(u32::from(units[p - 2]));
                if !paired || offset - p + 2 > WINDOW_RADIUS {
                    break;
                }
                p -= 1;
            }
            p -= 1;
        }
        p
    }

    fn find_window_end(units: &[u16], offset: usize) -> usize {
        let mut p = offset;
        while p < units.len() && p - offset < WINDOW_RADIUS {
            let c = u32::from(units[p]);
            if unicode::is_line_terminator(c) || is_trail_surrogate(c) {
                break;
            }
            p += 1;
            if !is_lead_surrogate(c) {
                continue;
            }
            // Keep the lead only when its trail fits too.
            let paired = units
                .get(p)
                .is_some_and(|&t| is_trail_surrogate(u32::from(t)));
            if p - offset >= WINDOW_RADIUS || !paired {
                p -= 1;
                break;
            }
            p += 1;
        }
        p
    }
}

#[cfg(test)]
mod tests;
