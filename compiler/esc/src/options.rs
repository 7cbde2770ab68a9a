//! `esc lex` flag parsing.

use std::path::PathBuf;

use es_lexer::CompileOptions;

/// How diagnostics are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Token dump on stdout, human-readable diagnostics on stderr.
    #[default]
    Text,
    /// A JSON array of diagnostics on stdout; no token dump.
    Json,
}

/// Options for one `esc lex` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOptions {
    /// Transcode each file to UTF-16 before tokenizing.
    pub utf16: bool,
    pub format: OutputFormat,
    /// Applied to every file; the filename is filled in per file.
    pub compile: CompileOptions,
    pub files: Vec<PathBuf>,
}

impl Default for LexOptions {
    fn default() -> Self {
        LexOptions {
            utf16: false,
            format: OutputFormat::Text,
            compile: CompileOptions::default(),
            files: Vec::new(),
        }
    }
}

/// Parse the arguments following `esc lex`.
pub fn parse_lex_args(args: &[String]) -> Result<LexOptions, String> {
    let mut options = LexOptions::default();

    for arg in args {
        if let Some(format) = arg.strip_prefix("--format=") {
            options.format = match format {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                other => return Err(format!("unknown format '{other}' (expected text or json)")),
            };
        } else if let Some(line) = arg.strip_prefix("--line=") {
            options.compile.line = parse_number("--line", line)?;
        } else if let Some(column) = arg.strip_prefix("--column=") {
            options.compile.column = parse_number("--column", column)?;
        } else {
            match arg.as_str() {
                "--utf16" => options.utf16 = true,
                "--strict" => options.compile.force_strict_mode = true,
                "--no-html-comments" => options.compile.allow_html_comments = false,
                "--extra-warnings" => options.compile.extra_warnings = true,
                "--werror" => options.compile.werror = true,
                "--muted" => options.compile.muted_errors = true,
                flag if flag.starts_with('-') => return Err(format!("unknown flag '{flag}'")),
                path => options.files.push(PathBuf::from(path)),
            }
        }
    }

    if options.files.is_empty() {
        return Err("missing file path".to_string());
    }
    Ok(options)
}

fn parse_number(flag: &str, value: &str) -> Result<u32, String> {
    value
        .parse()
        .map_err(|_| format!("{flag} expects a non-negative number, got '{value}'"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]
mod tests;
