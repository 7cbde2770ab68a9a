use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn defaults_with_one_file() {
    let options = parse_lex_args(&args(&["app.js"])).unwrap();
    assert_eq!(options.files, vec![PathBuf::from("app.js")]);
    assert_eq!(options.format, OutputFormat::Text);
    assert!(!options.utf16);
    assert_eq!(options.compile, CompileOptions::default());
}

#[test]
fn flags_map_onto_compile_options() {
    let options = parse_lex_args(&args(&[
        "--strict",
        "a.js",
        "--no-html-comments",
        "--extra-warnings",
        "--werror",
        "--muted",
        "--line=40",
        "--column=8",
        "--utf16",
        "--format=json",
        "b.js",
    ]))
    .unwrap();
    let expected = CompileOptions::default()
        .with_strict_mode(true)
        .with_html_comments(false)
        .with_extra_warnings(true)
        .with_werror(true)
        .with_muted_errors(true)
        .with_line(40)
        .with_column(8);
    assert_eq!(options.compile, expected);
    assert!(options.utf16);
    assert_eq!(options.format, OutputFormat::Json);
    assert_eq!(options.files, vec![PathBuf::from("a.js"), PathBuf::from("b.js")]);
}

#[test]
fn rejects_bad_input() {
    assert_eq!(parse_lex_args(&[]).unwrap_err(), "missing file path");
    assert_eq!(
        parse_lex_args(&args(&["--format=xml", "a.js"])).unwrap_err(),
        "unknown format 'xml' (expected text or json)"
    );
    assert_eq!(
        parse_lex_args(&args(&["--line=-1", "a.js"])).unwrap_err(),
        "--line expects a non-negative number, got '-1'"
    );
    assert_eq!(
        parse_lex_args(&args(&["--verbose", "a.js"])).unwrap_err(),
        "unknown flag '--verbose'"
    );
}
