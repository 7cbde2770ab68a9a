use super::*;
use pretty_assertions::assert_eq;

fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

// === UTF-8 decoding ===

#[test]
fn utf8_decodes_multi_unit_sequences() {
    assert_eq!(
        u8::decode_non_ascii("é".as_bytes()),
        Ok(PeekedCodePoint::new(0xE9, 2))
    );
    assert_eq!(
        u8::decode_non_ascii("\u{2028}".as_bytes()),
        Ok(PeekedCodePoint::new(LINE_SEPARATOR, 3))
    );
    assert_eq!(
        u8::decode_non_ascii("😀".as_bytes()),
        Ok(PeekedCodePoint::new(0x1_F600, 4))
    );
}

#[test]
fn utf8_bad_lead_units() {
    assert_eq!(
        u8::decode_non_ascii(&[0xFF]),
        Err(EncodingError::BadLeadUnit { lead: 0xFF })
    );
    assert_eq!(
        u8::decode_non_ascii(&[0x80, 0x80]),
        Err(EncodingError::BadLeadUnit { lead: 0x80 })
    );
    assert_eq!(
        u8::decode_non_ascii(&[0xF5, 0x80, 0x80, 0x80]),
        Err(EncodingError::BadLeadUnit { lead: 0xF5 })
    );
}

#[test]
fn utf8_truncated_sequence() {
    assert_eq!(
        u8::decode_non_ascii(&[0xE2, 0x80]),
        Err(EncodingError::NotEnoughUnits {
            lead: 0xE2,
            available: 2,
            required: 3,
        })
    );
}

#[test]
fn utf8_bad_trailing_unit() {
    assert_eq!(
        u8::decode_non_ascii(&[0xE2, 0x80, 0x41]),
        Err(EncodingError::BadTrailingUnit {
            lead: 0xE2,
            units_observed: 3,
        })
    );
    assert_eq!(
        u8::decode_non_ascii(&[0xC3, 0x28]),
        Err(EncodingError::BadTrailingUnit {
            lead: 0xC3,
            units_observed: 2,
        })
    );
}

#[test]
fn utf8_bad_code_points() {
    // C0/C1 leads can only produce overlong forms.
    assert_eq!(
        u8::decode_non_ascii(&[0xC0, 0xAF]),
        Err(EncodingError::BadCodePoint {
            code_point: 0x2F,
            length: 2,
            reason: BadCodePointReason::Overlong,
        })
    );
    assert_eq!(
        u8::decode_non_ascii(&[0xE0, 0x80, 0xAF]),
        Err(EncodingError::BadCodePoint {
            code_point: 0x2F,
            length: 3,
            reason: BadCodePointReason::Overlong,
        })
    );
    assert_eq!(
        u8::decode_non_ascii(&[0xED, 0xA0, 0x80]),
        Err(EncodingError::BadCodePoint {
            code_point: 0xD800,
            length: 3,
            reason: BadCodePointReason::Surrogate,
        })
    );
    assert_eq!(
        u8::decode_non_ascii(&[0xF4, 0x90, 0x80, 0x80]),
        Err(EncodingError::BadCodePoint {
            code_point: 0x11_0000,
            length: 4,
            reason: BadCodePointReason::TooLarge,
        })
    );
}

#[test]
fn encoding_error_display() {
    let message = EncodingError::BadLeadUnit { lead: 0xFF }.to_string();
    assert_eq!(message, "0xFF is not a valid UTF-8 lead unit");
}

// === UTF-16 decoding ===

#[test]
fn utf16_pairs_and_lone_surrogates() {
    assert_eq!(
        u16::decode_non_ascii(&utf16("😀")),
        Ok(PeekedCodePoint::new(0x1_F600, 2))
    );
    assert_eq!(
        u16::decode_non_ascii(&[0xD83D, 0x0041]),
        Ok(PeekedCodePoint::new(0xD83D, 1))
    );
    assert_eq!(
        u16::decode_non_ascii(&[0xDE00]),
        Ok(PeekedCodePoint::new(0xDE00, 1))
    );
    assert_eq!(
        u16::decode_non_ascii(&[0xD83D]),
        Ok(PeekedCodePoint::new(0xD83D, 1))
    );
}

// === Transcoding ===

#[test]
fn utf8_transcodes_to_utf16() {
    let source = "a\u{E9}\u{1F600}z";
    let mut out = Vec::new();
    u8::for_each_utf16(source.as_bytes(), |u| out.push(u));
    assert_eq!(out, utf16(source));
    assert_eq!(u8::utf16_length(source.as_bytes()), 5);
}

#[test]
fn utf8_transcoding_replaces_invalid_units() {
    let mut out = Vec::new();
    u8::for_each_utf16(&[b'a', 0xFF, b'b'], |u| out.push(u));
    assert_eq!(out, vec![0x61, 0xFFFD, 0x62]);
}

// === Fast line skipping ===

#[test]
fn utf8_skip_stops_at_terminators() {
    assert_eq!(u8::skip_to_line_terminator(b"abc\ndef"), 3);
    assert_eq!(u8::skip_to_line_terminator(b"abc\rdef"), 3);
    assert_eq!(u8::skip_to_line_terminator(b"abcdef"), 6);
    assert_eq!(u8::skip_to_line_terminator("ab\u{2028}c".as_bytes()), 2);
}

#[test]
fn utf8_skip_stops_before_invalid_text() {
    assert_eq!(u8::skip_to_line_terminator(&[b'a', b'b', 0xFF, b'\n']), 2);
    assert_eq!(u8::skip_to_line_terminator("é\n".as_bytes()), 2);
}

#[test]
fn utf16_skip_stops_at_separators() {
    assert_eq!(u16::skip_to_line_terminator(&utf16("ab\u{2029}c")), 2);
    assert_eq!(u16::skip_to_line_terminator(&[0x61, 0xD800, 0x62]), 3);
}

// === Window finding ===

#[test]
fn window_stops_at_line_breaks() {
    let source = b"first line\nlet x = @;\nlast";
    let at = 19;
    assert_eq!(u8::find_window_start(source, at), 11);
    assert_eq!(u8::find_window_end(source, at), 21);
}

#[test]
fn window_stops_at_paragraph_separator() {
    let text = "abc\u{2029}def\u{2028}ghi";
    let bytes = text.as_bytes();
    let at = text.find('e').unwrap_or_default();
    let start = u8::find_window_start(bytes, at);
    let end = u8::find_window_end(bytes, at);
    assert_eq!(&text[start..end], "def");

    let units = utf16(text);
    assert_eq!(u16::find_window_start(&units, 5), 4);
    assert_eq!(u16::find_window_end(&units, 5), 7);
}

#[test]
fn window_is_bounded_by_radius() {
    let source = vec![b'x'; 500];
    assert_eq!(u8::find_window_start(&source, 250), 250 - WINDOW_RADIUS);
    assert_eq!(u8::find_window_end(&source, 250), 250 + WINDOW_RADIUS);
}

#[test]
fn utf8_window_excludes_code_point_straddling_radius() {
    // A 2-unit code point, then 59 ASCII units before the offset: the code
    // point would put the window at 61 units, so it is left out whole.
    let mut source = "é".as_bytes().to_vec();
    source.extend_from_slice(&[b'a'; 59]);
    let offset = source.len();
    source.extend_from_slice(b"tail");
    let start = u8::find_window_start(&source, offset);
    assert_eq!(start, 2);
    assert!(!is_utf8_trailing(source[start]));
}

#[test]
fn utf8_window_end_stops_before_invalid_encoding() {
    let source = [b'a', b'b', 0xFF, b'c'];
    assert_eq!(u8::find_window_end(&source, 0), 2);
}

#[test]
fn utf16_window_never_splits_pairs() {
    let mut units = vec![0x61; 59];
    units.extend(utf16("😀"));
    units.push(0x62);
    let end = u16::find_window_end(&units, 0);
    assert_eq!(end, 59);

    let offset = units.len();
    let start = u16::find_window_start(&units, offset);
    // 1 unit for 'b', then the pair needs 2 more: 3 <= 60.
    assert!(start <= offset - 3);
    assert!(!is_trail_surrogate(u32::from(units[start])));
}

#[test]
fn utf16_window_excludes_lone_surrogates() {
    let units = [0x61, 0xDC00, 0x62, 0x63, 0xD800, 0x64];
    assert_eq!(u16::find_window_start(&units, 3), 2);
    assert_eq!(u16::find_window_end(&units, 2), 4);
}

mod proptest_windows {
    #![allow(
        clippy::disallowed_types,
        reason = "proptest macros internally use Arc"
    )]

    use super::*;
    use proptest::prelude::*;

    fn source_text() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                Just('a'),
                Just(' '),
                Just('\n'),
                Just('\r'),
                Just('é'),
                Just('\u{2028}'),
                Just('\u{2029}'),
                Just('日'),
                Just('😀'),
            ],
            0..200,
        )
        .prop_map(|chars| chars.into_iter().collect())
    }

    proptest! {
        #[test]
        fn utf8_window_contains_offset(text in source_text(), pick in any::<prop::sample::Index>()) {
            let bytes = text.as_bytes();
            let boundaries: Vec<usize> = text
                .char_indices()
                .map(|(i, _)| i)
                .chain(std::iter::once(text.len()))
                .collect();
            let offset = boundaries[pick.index(boundaries.len())];

            let start = u8::find_window_start(bytes, offset);
            let end = u8::find_window_end(bytes, offset);
            prop_assert!(start <= offset && offset <= end);
            prop_assert!(offset - start <= WINDOW_RADIUS);
            prop_assert!(end - offset <= WINDOW_RADIUS);

            let window = std::str::from_utf8(&bytes[start..end]);
            prop_assert!(window.is_ok());
            let window = window.unwrap_or_default();
            prop_assert!(!window.chars().any(|c| unicode::is_line_terminator(c as u32)));
        }

        #[test]
        fn utf16_window_contains_offset(text in source_text(), pick in any::<prop::sample::Index>()) {
            let units = utf16(&text);
            let offset = pick.index(units.len() + 1);
            // Offsets inside a pair never occur in practice.
            prop_assume!(offset == units.len() || !is_trail_surrogate(u32::from(units[offset])));

            let start = u16::find_window_start(&units, offset);
            let end = u16::find_window_end(&units, offset);
            prop_assert!(start <= offset && offset <= end);
            prop_assert!(offset - start <= WINDOW_RADIUS);
            prop_assert!(end - offset <= WINDOW_RADIUS);

            let window = String::from_utf16(&units[start..end]);
            prop_assert!(window.is_ok());
            let window = window.unwrap_or_default();
            prop_assert!(!window.chars().any(|c| unicode::is_line_terminator(c as u32)));
        }

        #[test]
        fn skip_to_line_terminator_prefix_is_clean(text in source_text()) {
            let bytes = text.as_bytes();
            let skipped = u8::skip_to_line_terminator(bytes);
            let prefix = std::str::from_utf8(&bytes[..skipped]);
            prop_assert!(prefix.is_ok());
            prop_assert!(!prefix.unwrap_or_default().chars().any(|c| unicode::is_line_terminator(c as u32)));
        }
    }
}
