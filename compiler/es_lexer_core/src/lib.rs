//! Source access layer for the ECMAScript tokenizer.
//!
//! This crate is standalone: it knows nothing about tokens or diagnostics.
//! It provides:
//!
//! - [`CodeUnit`]: the codec capability set, implemented for `u8` (UTF-8)
//!   and `u16` (UTF-16), so the tokenizer can be written once.
//! - [`SourceUnits`]: a cursor over an immutable source buffer.
//! - [`SourceCoords`]: the incrementally built line table.
//! - [`unicode`]: code point classification used while scanning.

mod source_coords;
mod source_units;
pub mod unicode;
mod unit;

pub use source_coords::SourceCoords;
pub use source_units::SourceUnits;
pub use unit::{
    BadCodePointReason, CodeUnit, Encoding, EncodingError, PeekedCodePoint, WINDOW_RADIUS,
};
