#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::{ErrorCode, LineOfContext, SourceLocation};
use pretty_assertions::assert_eq;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E0011)
        .with_message("unterminated string literal")
        .with_location(SourceLocation {
            filename: Some("app.js".to_string()),
            line: 3,
            column: 9,
        })
        .with_context(Some(LineOfContext {
            text: "let s = \"abc".to_string(),
            token_offset: 8,
            length: 12,
        }))
}

fn render(diagnostic: &Diagnostic) -> String {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit(diagnostic);
    emitter.flush();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_escape_json() {
    assert_eq!(escape_json("hello"), "hello");
    assert_eq!(escape_json("\"quoted\""), "\\\"quoted\\\"");
    assert_eq!(escape_json("line1\nline2"), "line1\\nline2");
    assert_eq!(escape_json("\u{1}"), "\\u0001");
}

#[test]
fn test_terminal_emitter_no_color() {
    let text = render(&sample_diagnostic());
    assert_eq!(
        text,
        "error[E0011]: unterminated string literal\n  --> app.js:3:9\n   |\n   | let s = \"abc\n   |         ^\n\n"
    );
}

#[test]
fn test_terminal_emitter_with_color() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Always, false);
    emitter.emit(&sample_diagnostic());
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\x1b[1;31m"));
    assert!(text.contains("E0011"));
}

#[test]
fn test_terminal_emitter_muted() {
    let text = render(&sample_diagnostic().muted(true));
    assert_eq!(text, "error[E0011]: script error\n\n");
}

#[test]
fn test_terminal_emitter_without_context() {
    let text = render(&sample_diagnostic().with_context(None));
    assert!(!text.contains('^'));
    assert!(text.contains("app.js:3:9"));
}

#[test]
fn test_emit_summary() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit_summary(2, 1);
    emitter.emit_summary(0, 3);
    emitter.emit_summary(0, 0);
    let text = String::from_utf8(output).unwrap();
    assert_eq!(
        text,
        "error: aborting due to 2 previous errors; 1 warning emitted\nwarning: 3 warnings emitted\n"
    );
}

#[test]
fn test_color_modes() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_json_emitter() {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);
    emitter.begin();
    emitter.emit_all(&[
        sample_diagnostic(),
        Diagnostic::warning(ErrorCode::E0050).muted(true),
    ]);
    emitter.end();
    let text = String::from_utf8(output).unwrap();
    assert_eq!(
        text,
        "[{\"severity\":\"error\",\"code\":\"E0011\",\"muted\":false,\
         \"message\":\"unterminated string literal\",\"file\":\"app.js\",\"line\":3,\"column\":9,\
         \"context\":{\"text\":\"let s = \\\"abc\",\"offset\":8,\"length\":12}},\
         {\"severity\":\"warning\",\"code\":\"E0050\",\"muted\":true}]\n"
    );
}
