//! Diagnostics for the ECMAScript tokenizer.
//!
//! - [`ErrorCode`]: stable numeric codes, one per kind of problem
//! - [`Diagnostic`]: a structured record with location, optional line of
//!   context, and a muted flag
//! - [`DiagnosticQueue`]: the sink a tokenizer reports into
//! - [`emitter`]: terminal and JSON renderers

mod diagnostic;
pub mod emitter;
mod error_code;
mod queue;

pub use diagnostic::{Diagnostic, LineOfContext, Severity, SourceLocation};
pub use error_code::ErrorCode;
pub use queue::DiagnosticQueue;
