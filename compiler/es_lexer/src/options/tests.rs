use super::*;
use pretty_assertions::assert_eq;

#[test]
fn defaults() {
    let options = CompileOptions::default();
    assert_eq!(options.line, 1);
    assert_eq!(options.column, 0);
    assert_eq!(options.offset, 0);
    assert!(options.allow_html_comments);
    assert!(!options.werror);
    assert!(!options.force_strict_mode);
    assert_eq!(options.filename, None);
}

#[test]
fn builders_chain() {
    let options = CompileOptions::new()
        .with_filename("page.html")
        .with_line(40)
        .with_column(8)
        .with_offset(1200)
        .with_html_comments(false)
        .with_extra_warnings(true)
        .with_werror(true)
        .with_strict_mode(true)
        .with_muted_errors(true);
    assert_eq!(options.filename.as_deref(), Some("page.html"));
    assert_eq!((options.line, options.column, options.offset), (40, 8, 1200));
    assert!(!options.allow_html_comments);
    assert!(options.extra_warnings && options.werror);
    assert!(options.force_strict_mode && options.muted_errors);
}

#[test]
fn cell_getter_tracks_updates() {
    let strict = Cell::new(false);
    assert!(!strict.strict_mode());
    strict.set(true);
    assert!(strict.strict_mode());
}
