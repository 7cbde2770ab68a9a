//! Command-line driver for the ECMAScript tokenizer.
//!
//! `esc lex` dumps tokens and diagnostics for one or more files; `esc
//! explain` describes an error code.

pub mod commands;
pub mod driver;
pub mod options;

pub use commands::{explain_error, lex_all, lex_file, lex_files, render_tokens, FileReport};
pub use driver::{ends_operand, lex_source, LexOutput, LexedToken};
pub use options::{parse_lex_args, LexOptions, OutputFormat};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=es_lexer=debug` or
/// `RUST_LOG=es_lexer=trace` (every token).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}
