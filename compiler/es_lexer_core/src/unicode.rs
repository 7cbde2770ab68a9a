//! Unicode constants and property tests used by the tokenizer.
//!
//! Identifier properties come from `unicode-xid` (`XID_Start` /
//! `XID_Continue`), extended with the ECMAScript additions: `$` and `_`
//! start identifiers, ZWNJ and ZWJ continue them.

use unicode_xid::UnicodeXID;

pub const NO_BREAK_SPACE: u32 = 0x00A0;
pub const ZERO_WIDTH_NON_JOINER: u32 = 0x200C;
pub const ZERO_WIDTH_JOINER: u32 = 0x200D;
pub const LINE_SEPARATOR: u32 = 0x2028;
pub const PARA_SEPARATOR: u32 = 0x2029;
pub const BYTE_ORDER_MARK: u32 = 0xFEFF;
/// Byte-swapped byte order mark, tolerated as whitespace.
pub const BYTE_ORDER_MARK2: u32 = 0xFFFE;
pub const REPLACEMENT_CHARACTER: u32 = 0xFFFD;

pub const LEAD_SURROGATE_MIN: u32 = 0xD800;
pub const LEAD_SURROGATE_MAX: u32 = 0xDBFF;
pub const TRAIL_SURROGATE_MIN: u32 = 0xDC00;
pub const TRAIL_SURROGATE_MAX: u32 = 0xDFFF;
pub const NON_BMP_MIN: u32 = 0x1_0000;
pub const NON_BMP_MAX: u32 = 0x10_FFFF;

#[inline]
pub const fn is_lead_surrogate(unit: u32) -> bool {
    unit >= LEAD_SURROGATE_MIN && unit <= LEAD_SURROGATE_MAX
}

#[inline]
pub const fn is_trail_surrogate(unit: u32) -> bool {
    unit >= TRAIL_SURROGATE_MIN && unit <= TRAIL_SURROGATE_MAX
}

#[inline]
pub const fn is_surrogate(unit: u32) -> bool {
    unit >= LEAD_SURROGATE_MIN && unit <= TRAIL_SURROGATE_MAX
}

/// Combine a lead and trail surrogate into a supplementary code point.
#[inline]
pub const fn utf16_decode(lead: u32, trail: u32) -> u32 {
    NON_BMP_MIN + ((lead - LEAD_SURROGATE_MIN) << 10) + (trail - TRAIL_SURROGATE_MIN)
}

/// Calls `f` with the one or two UTF-16 units encoding `code_point`.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "each unit is masked into u16 range before the cast"
)]
pub fn utf16_encode(code_point: u32, mut f: impl FnMut(u16)) {
    if code_point < NON_BMP_MIN {
        f(code_point as u16);
    } else {
        let offset = code_point - NON_BMP_MIN;
        f((LEAD_SURROGATE_MIN + (offset >> 10)) as u16);
        f((TRAIL_SURROGATE_MIN + (offset & 0x3FF)) as u16);
    }
}

/// Number of UTF-16 units needed for `code_point`.
#[inline]
pub const fn utf16_length(code_point: u32) -> usize {
    if code_point < NON_BMP_MIN {
        1
    } else {
        2
    }
}

/// `LineTerminator`: LF, CR, LS, PS.
#[inline]
pub const fn is_line_terminator(code_point: u32) -> bool {
    matches!(code_point, 0x0A | 0x0D | LINE_SEPARATOR | PARA_SEPARATOR)
}

/// `WhiteSpace`: TAB, VT, FF, SP, NBSP, ZWNBSP, and category `Zs`.
pub const fn is_space(code_point: u32) -> bool {
    matches!(
        code_point,
        0x09 | 0x0B
            | 0x0C
            | 0x20
            | NO_BREAK_SPACE
            | 0x1680
            | 0x2000..=0x200A
            | 0x202F
            | 0x205F
            | 0x3000
            | BYTE_ORDER_MARK
    )
}

/// Whitespace, line terminators, and either byte order mark.
///
/// This is what the main scanning loop skips between tokens once a
/// non-ASCII code point has been decoded.
#[inline]
pub const fn is_space_or_bom2(code_point: u32) -> bool {
    is_space(code_point) || is_line_terminator(code_point) || code_point == BYTE_ORDER_MARK2
}

/// `IdentifierStart` for an arbitrary code point.
pub fn is_identifier_start(code_point: u32) -> bool {
    if code_point < 0x80 {
        return is_ascii_identifier_start(code_point);
    }
    char::from_u32(code_point).is_some_and(UnicodeXID::is_xid_start)
}

/// `IdentifierPart` for an arbitrary code point.
pub fn is_identifier_part(code_point: u32) -> bool {
    if code_point < 0x80 {
        return is_ascii_identifier_part(code_point);
    }
    if code_point == ZERO_WIDTH_NON_JOINER || code_point == ZERO_WIDTH_JOINER {
        return true;
    }
    char::from_u32(code_point).is_some_and(UnicodeXID::is_xid_continue)
}

#[inline]
pub const fn is_ascii_identifier_start(code_point: u32) -> bool {
    matches!(code_point, 0x24 | 0x5F | 0x41..=0x5A | 0x61..=0x7A)
}

#[inline]
pub const fn is_ascii_identifier_part(code_point: u32) -> bool {
    is_ascii_identifier_start(code_point) || matches!(code_point, 0x30..=0x39)
}

#[inline]
pub const fn is_ascii_digit(code_point: u32) -> bool {
    matches!(code_point, 0x30..=0x39)
}

/// Value of an ASCII hex digit, or `None`.
#[inline]
pub const fn hex_digit_value(code_point: u32) -> Option<u32> {
    match code_point {
        0x30..=0x39 => Some(code_point - 0x30),
        0x41..=0x46 => Some(code_point - 0x41 + 10),
        0x61..=0x66 => Some(code_point - 0x61 + 10),
        _ => None,
    }
}
