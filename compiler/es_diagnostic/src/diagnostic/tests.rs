use super::*;
use pretty_assertions::assert_eq;

fn location() -> SourceLocation {
    SourceLocation {
        filename: Some("app.js".to_string()),
        line: 3,
        column: 9,
    }
}

#[test]
fn test_builder() {
    let diag = Diagnostic::error(ErrorCode::E0011)
        .with_message("unterminated string literal")
        .with_location(location());
    assert!(diag.is_error());
    assert!(!diag.is_warning());
    assert_eq!(diag.code, ErrorCode::E0011);
    assert_eq!(diag.location.line, 3);
    assert!(diag.context.is_none());
}

#[test]
fn test_warning_builder() {
    let diag = Diagnostic::warning(ErrorCode::E0050);
    assert!(diag.is_warning());
    assert_eq!(diag.severity, Severity::Warning);
}

#[test]
fn test_display() {
    let diag = Diagnostic::error(ErrorCode::E0011)
        .with_message("unterminated string literal")
        .with_location(location());
    assert_eq!(
        diag.to_string(),
        "error [E0011] app.js:3:9: unterminated string literal"
    );
}

#[test]
fn test_display_muted_hides_details() {
    let diag = Diagnostic::error(ErrorCode::E0011)
        .with_message("unterminated string literal")
        .with_location(location())
        .muted(true);
    assert_eq!(diag.to_string(), "error [E0011]: script error");
}

#[test]
fn test_anonymous_location() {
    let loc = SourceLocation {
        filename: None,
        line: 1,
        column: 1,
    };
    assert_eq!(loc.to_string(), "<anonymous>:1:1");
}

#[test]
fn test_token_char_offset_counts_pairs_once() {
    let ctx = LineOfContext {
        text: "a😀b".to_string(),
        token_offset: 3,
        length: 4,
    };
    assert_eq!(ctx.token_char_offset(), 2);

    let ascii = LineOfContext {
        text: "let x".to_string(),
        token_offset: 4,
        length: 5,
    };
    assert_eq!(ascii.token_char_offset(), 4);
}
