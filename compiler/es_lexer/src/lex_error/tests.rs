use super::*;
use pretty_assertions::assert_eq;

#[test]
fn encoding_errors_map_to_encoding_codes() {
    let kind = LexErrorKind::Encoding(EncodingError::BadLeadUnit { lead: 0xFF });
    assert_eq!(kind.category(), LexErrorCategory::Encoding);
    assert_eq!(kind.code(), ErrorCode::E0001);
    assert!(kind.code().is_encoding_error());
}

#[test]
fn strict_mode_kinds() {
    for kind in [
        LexErrorKind::DeprecatedOctalLiteral,
        LexErrorKind::DeprecatedLeadingZero,
        LexErrorKind::DeprecatedOctalEscape,
        LexErrorKind::DeprecatedEightOrNineEscape,
    ] {
        assert_eq!(kind.category(), LexErrorCategory::StrictMode);
        assert!(kind.code().is_strict_mode_error(), "{kind:?}");
    }
}

#[test]
fn deferred_template_escapes_share_string_codes() {
    let octal = LexErrorKind::InvalidTemplateEscape(InvalidEscapeType::Octal);
    assert_eq!(octal.category(), LexErrorCategory::DeferredTemplate);
    assert_eq!(octal.code(), ErrorCode::E0042);
    let hex = LexErrorKind::InvalidTemplateEscape(InvalidEscapeType::Hexadecimal);
    assert_eq!(hex.code(), ErrorCode::E0030);
}

#[test]
fn messages() {
    assert_eq!(
        LexErrorKind::IllegalCharacter { code_point: 0x40 }.to_string(),
        "illegal character U+0040"
    );
    assert_eq!(
        LexErrorKind::BadRegExpFlag { flag: 'x' }.to_string(),
        "invalid regular expression flag x"
    );
    assert_eq!(
        LexErrorKind::MissingDigits { prefix: 'x' }.to_string(),
        "missing digits after '0x'"
    );
    let error = LexError {
        kind: LexErrorKind::UnterminatedString,
        offset: 7,
    };
    assert_eq!(error.to_string(), "unterminated string literal at offset 7");
    assert_eq!(error.code(), ErrorCode::E0011);
}
