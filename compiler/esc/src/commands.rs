//! The `lex` and `explain` commands.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use es_diagnostic::emitter::{ColorMode, DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use es_lexer::{init_reserved_words, ErrorCode};

use crate::driver::{lex_source, LexOutput};
use crate::options::{LexOptions, OutputFormat};

/// Result of lexing one file.
pub struct FileReport {
    pub path: PathBuf,
    pub output: io::Result<LexOutput>,
}

/// Read and tokenize one file.
///
/// UTF-8 files are tokenized as bytes, so malformed UTF-8 is reported by
/// the tokenizer. With `--utf16` the file is decoded lossily first.
pub fn lex_file(path: &Path, options: &LexOptions) -> io::Result<LexOutput> {
    let bytes = fs::read(path)?;
    let compile = options
        .compile
        .clone()
        .with_filename(path.display().to_string());

    let output = if options.utf16 {
        let units: Vec<u16> = String::from_utf8_lossy(&bytes).encode_utf16().collect();
        lex_source(units.as_slice(), compile)
    } else {
        lex_source(bytes.as_slice(), compile)
    };
    Ok(output)
}

/// Tokenize every file, in parallel, keeping the command-line order.
pub fn lex_all(options: &LexOptions) -> Vec<FileReport> {
    // Build the shared keyword table before the workers race for it.
    init_reserved_words();
    options
        .files
        .par_iter()
        .map(|path| FileReport {
            path: path.clone(),
            output: lex_file(path, options),
        })
        .collect()
}

/// Write the token dump for one file.
pub fn render_tokens(out: &mut impl Write, path: &Path, output: &LexOutput) -> io::Result<()> {
    writeln!(
        out,
        "Tokens for '{}' ({} tokens):",
        path.display(),
        output.tokens.len()
    )?;
    for token in &output.tokens {
        match &token.text {
            Some(text) => writeln!(out, "  {:?} @ {} {text:?}", token.kind, token.pos)?,
            None => writeln!(out, "  {:?} @ {}", token.kind, token.pos)?,
        }
    }
    if let Some(url) = &output.display_url {
        writeln!(out, "  sourceURL: {url}")?;
    }
    if let Some(url) = &output.source_map_url {
        writeln!(out, "  sourceMappingURL: {url}")?;
    }
    Ok(())
}

/// Run `esc lex`. Returns the number of errors, read failures included.
pub fn lex_files(options: &LexOptions) -> usize {
    let reports = lex_all(options);
    let mut errors = 0;
    let mut warnings = 0;

    let stdout = io::stdout();
    match options.format {
        OutputFormat::Text => {
            let mut out = stdout.lock();
            let is_tty = io::stderr().is_terminal();
            let mut emitter =
                TerminalEmitter::with_color_mode(io::stderr(), ColorMode::Auto, is_tty);
            for report in &reports {
                match &report.output {
                    Ok(output) => {
                        if let Err(e) = render_tokens(&mut out, &report.path, output) {
                            debug!(error = %e, "stdout closed");
                        }
                        emitter.emit_all(&output.diagnostics);
                        errors += output.error_count();
                        warnings += output.warning_count();
                    }
                    Err(e) => {
                        eprintln!("error: cannot read '{}': {e}", report.path.display());
                        errors += 1;
                    }
                }
            }
            emitter.emit_summary(errors, warnings);
            emitter.flush();
        }
        OutputFormat::Json => {
            let mut emitter = JsonEmitter::new(stdout.lock());
            emitter.begin();
            for report in &reports {
                match &report.output {
                    Ok(output) => {
                        emitter.emit_all(&output.diagnostics);
                        errors += output.error_count();
                    }
                    Err(e) => {
                        eprintln!("error: cannot read '{}': {e}", report.path.display());
                        errors += 1;
                    }
                }
            }
            emitter.end();
            emitter.flush();
        }
    }
    errors
}

/// Run `esc explain`. Returns false for an unknown code.
pub fn explain_error(code_str: &str) -> bool {
    let Some(code) = ErrorCode::parse(code_str) else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0011, E0040");
        return false;
    };
    println!("{code}: {}", code.description());
    true
}
