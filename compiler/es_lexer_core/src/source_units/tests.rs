use super::*;
use crate::unit::BadCodePointReason;
use pretty_assertions::assert_eq;

fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

// === Basic navigation ===

#[test]
fn get_peek_unget() {
    let mut units = SourceUnits::new(b"ab".as_slice(), 0);
    assert_eq!(units.peek_code_unit(), Some(b'a'));
    assert_eq!(units.get_code_unit(), Some(b'a'));
    assert_eq!(units.offset(), 1);
    units.unget_code_unit();
    assert_eq!(units.offset(), 0);
    assert_eq!(units.get_code_unit(), Some(b'a'));
    assert_eq!(units.get_code_unit(), Some(b'b'));
    assert!(units.at_end());
    assert_eq!(units.get_code_unit(), None);
    assert_eq!(units.offset(), 2);
}

#[test]
fn offsets_include_start_offset() {
    let mut units = SourceUnits::new(b"xyz".as_slice(), 100);
    assert_eq!(units.offset(), 100);
    assert_eq!(units.limit_offset(), 103);
    units.skip_code_units(2);
    assert_eq!(units.offset(), 102);
    assert_eq!(units.remaining(), 1);
    assert_eq!(units.code_units(100, 102), b"xy");
    units.set_offset(101);
    assert_eq!(units.peek_code_unit(), Some(b'y'));
}

#[test]
fn match_code_unit_only_consumes_on_match() {
    let mut units = SourceUnits::new(b"=>".as_slice(), 0);
    assert!(!units.match_code_unit(b'>'));
    assert!(units.match_code_unit(b'='));
    assert!(units.match_code_unit(b'>'));
    assert!(!units.match_code_unit(b'>'));
}

#[test]
fn match_hex_digits_all_or_nothing() {
    let mut units = SourceUnits::new(b"00aFz".as_slice(), 0);
    assert_eq!(units.match_hex_digits(4), Some(0x00AF));
    assert_eq!(units.offset(), 4);

    let mut units = SourceUnits::new(b"12g4".as_slice(), 0);
    assert_eq!(units.match_hex_digits(4), None);
    assert_eq!(units.offset(), 0);

    let mut units = SourceUnits::new(b"12".as_slice(), 0);
    assert_eq!(units.match_hex_digits(4), None);
    assert_eq!(units.offset(), 0);
}

#[test]
fn match_code_units_literal() {
    let text = utf16(" sourceURL=foo.js");
    let mut units = SourceUnits::new(text.as_slice(), 0);
    assert!(!units.match_code_units(b" sourceMappingURL="));
    assert_eq!(units.offset(), 0);
    assert!(units.match_code_units(b" sourceURL="));
    assert_eq!(units.offset(), 11);
}

#[test]
fn skip_and_unskip() {
    let mut units = SourceUnits::new(b"\\u{41}".as_slice(), 0);
    units.skip_code_units(3);
    assert_eq!(units.peek_code_unit(), Some(b'4'));
    units.unskip_code_units(3);
    assert_eq!(units.peek_code_unit(), Some(b'\\'));
}

// === Code points ===

#[test]
fn peek_then_consume_code_point() {
    let text = "é!";
    let mut units = SourceUnits::new(text.as_bytes(), 0);
    let peeked = units.peek_code_point();
    assert_eq!(peeked, Some(PeekedCodePoint::new(0xE9, 2)));
    assert_eq!(units.offset(), 0);
    if let Some(peeked) = peeked {
        units.consume_known_code_point(peeked);
    }
    assert_eq!(units.peek_code_unit(), Some(b'!'));
}

#[test]
fn peek_code_point_utf16_pair() {
    let text = utf16("😀");
    let units = SourceUnits::new(text.as_slice(), 0);
    assert_eq!(
        units.peek_code_point(),
        Some(PeekedCodePoint::new(0x1_F600, 2))
    );
}

#[test]
fn peek_code_point_rejects_bad_utf8() {
    let units = SourceUnits::new([0xC3u8, 0x28].as_slice(), 0);
    assert_eq!(units.peek_code_point(), None);
}

#[test]
fn get_non_ascii_code_point_success() {
    let text = "日本";
    let mut units = SourceUnits::new(text.as_bytes(), 0);
    let lead = units.get_code_unit().unwrap_or_default();
    assert_eq!(units.get_non_ascii_code_point(lead), Ok(0x65E5));
    assert_eq!(units.offset(), 3);
}

#[test]
fn get_non_ascii_code_point_failure_rewinds_to_lead() {
    let bytes = [b'a', 0xED, 0xA0, 0x80];
    let mut units = SourceUnits::new(bytes.as_slice(), 10);
    units.skip_code_units(1);
    let lead = units.get_code_unit().unwrap_or_default();
    assert_eq!(
        units.get_non_ascii_code_point(lead),
        Err(EncodingError::BadCodePoint {
            code_point: 0xD800,
            length: 3,
            reason: BadCodePointReason::Surrogate,
        })
    );
    assert_eq!(units.offset(), 11);
}

#[test]
fn unget_separator_in_both_encodings() {
    let text = "\u{2028}x";
    let mut units = SourceUnits::new(text.as_bytes(), 0);
    units.skip_code_units(3);
    units.unget_line_or_paragraph_separator();
    assert_eq!(units.offset(), 0);

    let wide = utf16(text);
    let mut units = SourceUnits::new(wide.as_slice(), 0);
    units.skip_code_units(1);
    units.unget_line_or_paragraph_separator();
    assert_eq!(units.offset(), 0);
}

// === Windows ===

#[test]
fn window_offsets_are_absolute() {
    let units = SourceUnits::new(b"ab\ncd ef\ngh".as_slice(), 50);
    assert_eq!(units.find_window_start(55), 53);
    assert_eq!(units.find_window_end(55), 58);
}

// === Poisoning ===

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "source cursor read after a tokenizer error")]
fn poisoned_cursor_panics_on_read() {
    let mut units = SourceUnits::new(b"abc".as_slice(), 0);
    units.poison();
    let _ = units.get_code_unit();
}

#[test]
fn set_offset_clears_poison() {
    let mut units = SourceUnits::new(b"abc".as_slice(), 0);
    units.skip_code_units(2);
    units.poison();
    units.set_offset(1);
    assert_eq!(units.get_code_unit(), Some(b'b'));
}

#[test]
fn raw_offset_survives_poison() {
    let mut units = SourceUnits::new(b"abc".as_slice(), 10);
    units.skip_code_units(2);
    units.poison();
    assert_eq!(units.raw_offset(), 12);
}
