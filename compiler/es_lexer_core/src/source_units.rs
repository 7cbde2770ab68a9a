//! Cursor over an immutable buffer of source code units.
//!
//! Offsets exposed by [`SourceUnits`] are absolute: the first unit of the
//! buffer sits at `start_offset`, which is nonzero when the buffer is a
//! slice of a larger script (a lazily compiled function, an inline script
//! fragment). Internally the cursor is a plain index.
//!
//! # Poisoning
//!
//! After the tokenizer reports an error it poisons the cursor. In debug
//! builds any later read panics; release builds skip the check. Seeking
//! to a saved position clears the poison.

use crate::unicode;
use crate::unit::{CodeUnit, EncodingError, PeekedCodePoint};

/// Convert a buffer index to a `u32` offset, saturating on overflow.
#[inline]
fn to_offset(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}

/// Cursor over `&'src [U]` with get/peek/unget primitives.
#[derive(Clone, Debug)]
pub struct SourceUnits<'src, U: CodeUnit> {
    units: &'src [U],
    start_offset: u32,
    /// Index of the next unit to read.
    ptr: usize,
    #[cfg(debug_assertions)]
    poisoned: bool,
}

impl<'src, U: CodeUnit> SourceUnits<'src, U> {
    pub fn new(units: &'src [U], start_offset: u32) -> Self {
        SourceUnits {
            units,
            start_offset,
            ptr: 0,
            #[cfg(debug_assertions)]
            poisoned: false,
        }
    }

    #[inline]
    fn assert_not_poisoned(&self) {
        #[cfg(debug_assertions)]
        assert!(!self.poisoned, "source cursor read after a tokenizer error");
    }

    #[inline]
    fn index_of(&self, offset: u32) -> usize {
        debug_assert!(offset >= self.start_offset, "offset before start of source");
        (offset - self.start_offset) as usize
    }

    // === Position ===

    #[inline]
    pub fn at_end(&self) -> bool {
        self.assert_not_poisoned();
        self.ptr >= self.units.len()
    }

    /// Units left to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.assert_not_poisoned();
        self.units.len() - self.ptr
    }

    /// Absolute offset of the next unit.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.assert_not_poisoned();
        self.start_offset + to_offset(self.ptr)
    }

    /// Like [`offset`](Self::offset), but readable while poisoned, so a
    /// position snapshot can be taken after an error.
    #[inline]
    pub fn raw_offset(&self) -> u32 {
        self.start_offset + to_offset(self.ptr)
    }

    #[inline]
    pub fn start_offset(&self) -> u32 {
        self.start_offset
    }

    /// Absolute offset one past the last unit.
    #[inline]
    pub fn limit_offset(&self) -> u32 {
        self.start_offset + to_offset(self.units.len())
    }

    /// Move the cursor to an absolute offset. Clears poisoning.
    pub fn set_offset(&mut self, offset: u32) {
        let index = self.index_of(offset);
        debug_assert!(index <= self.units.len(), "offset past end of source");
        self.ptr = index.min(self.units.len());
        #[cfg(debug_assertions)]
        {
            self.poisoned = false;
        }
    }

    /// Forbid further reads until the next [`set_offset`](Self::set_offset).
    pub fn poison(&mut self) {
        #[cfg(debug_assertions)]
        {
            self.poisoned = true;
        }
    }

    /// The unread remainder of the buffer.
    #[inline]
    pub fn rest(&self) -> &'src [U] {
        self.assert_not_poisoned();
        &self.units[self.ptr..]
    }

    /// Units in the absolute range `begin..end`.
    pub fn code_units(&self, begin: u32, end: u32) -> &'src [U] {
        let begin = self.index_of(begin).min(self.units.len());
        let end = self.index_of(end).clamp(begin, self.units.len());
        &self.units[begin..end]
    }

    // === Single units ===

    #[inline]
    pub fn peek_code_unit(&self) -> Option<U> {
        self.assert_not_poisoned();
        self.units.get(self.ptr).copied()
    }

    /// Read and advance past the next unit.
    #[inline]
    pub fn get_code_unit(&mut self) -> Option<U> {
        let unit = self.peek_code_unit()?;
        self.ptr += 1;
        Some(unit)
    }

    /// Advance past a unit the caller already peeked.
    #[inline]
    pub fn consume_known_code_unit(&mut self, unit: U) {
        debug_assert_eq!(self.peek_code_unit(), Some(unit));
        self.ptr += 1;
    }

    /// Step back one unit. Only valid right after a successful get.
    #[inline]
    pub fn unget_code_unit(&mut self) {
        self.assert_not_poisoned();
        debug_assert!(self.ptr > 0, "unget at start of source");
        self.ptr -= 1;
    }

    /// The unit just before the cursor.
    #[inline]
    pub fn previous_code_unit(&self) -> Option<U> {
        self.assert_not_poisoned();
        self.ptr.checked_sub(1).map(|i| self.units[i])
    }

    /// Consume the next unit if it is the ASCII character `byte`.
    #[inline]
    pub fn match_code_unit(&mut self, byte: u8) -> bool {
        match self.peek_code_unit() {
            Some(unit) if unit.is(byte) => {
                self.ptr += 1;
                true
            }
            _ => false,
        }
    }

    /// Consume exactly `n` hex digits and return their value, or consume
    /// nothing.
    pub fn match_hex_digits(&mut self, n: usize) -> Option<u32> {
        debug_assert!(n <= 8, "hex value would overflow u32");
        let digits = self.rest().get(..n)?;
        let mut value = 0;
        for unit in digits {
            value = (value << 4) | unicode::hex_digit_value(unit.value())?;
        }
        self.ptr += n;
        Some(value)
    }

    /// Consume `literal` (ASCII) if the input starts with it.
    pub fn match_code_units(&mut self, literal: &[u8]) -> bool {
        let rest = self.rest();
        if rest.len() < literal.len() {
            return false;
        }
        let matched = rest
            .iter()
            .zip(literal)
            .all(|(&unit, &byte)| unit.is(byte));
        if matched {
            self.ptr += literal.len();
        }
        matched
    }

    #[inline]
    pub fn skip_code_units(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.ptr += n;
    }

    #[inline]
    pub fn unskip_code_units(&mut self, n: usize) {
        self.assert_not_poisoned();
        debug_assert!(n <= self.ptr);
        self.ptr -= n;
    }

    // === Code points ===

    /// Decode the next code point without consuming it.
    ///
    /// Returns `None` at end of input and, in UTF-8, when the next units are
    /// malformed.
    pub fn peek_code_point(&self) -> Option<PeekedCodePoint> {
        let rest = self.rest();
        let lead = *rest.first()?;
        if lead.is_ascii() {
            return Some(PeekedCodePoint::new(lead.value(), 1));
        }
        U::decode_non_ascii(rest).ok()
    }

    /// Commit a code point returned by [`peek_code_point`](Self::peek_code_point).
    #[inline]
    pub fn consume_known_code_point(&mut self, peeked: PeekedCodePoint) {
        debug_assert_eq!(self.peek_code_point(), Some(peeked));
        self.ptr += usize::from(peeked.length());
    }

    /// Finish decoding a non-ASCII code point whose `lead` unit was just
    /// consumed. On failure the cursor is left at `lead`.
    pub fn get_non_ascii_code_point(&mut self, lead: U) -> Result<u32, EncodingError> {
        self.assert_not_poisoned();
        debug_assert!(!lead.is_ascii());
        debug_assert_eq!(self.previous_code_unit(), Some(lead));
        match U::decode_non_ascii(&self.units[self.ptr - 1..]) {
            Ok(peeked) => {
                self.ptr += usize::from(peeked.length()) - 1;
                Ok(peeked.code_point())
            }
            Err(error) => {
                self.ptr -= 1;
                Err(error)
            }
        }
    }

    /// Step back over a just-consumed U+2028 or U+2029.
    pub fn unget_line_or_paragraph_separator(&mut self) {
        self.unskip_code_units(usize::from(U::SEPARATOR_LENGTH));
        debug_assert!(self
            .peek_code_point()
            .is_some_and(|p| matches!(
                p.code_point(),
                unicode::LINE_SEPARATOR | unicode::PARA_SEPARATOR
            )));
    }

    // === Diagnostic windows ===

    /// See [`CodeUnit::find_window_start`].
    pub fn find_window_start(&self, offset: u32) -> u32 {
        let index = self.index_of(offset).min(self.units.len());
        self.start_offset + to_offset(U::find_window_start(self.units, index))
    }

    /// See [`CodeUnit::find_window_end`].
    pub fn find_window_end(&self, offset: u32) -> u32 {
        let index = self.index_of(offset).min(self.units.len());
        self.start_offset + to_offset(U::find_window_end(self.units, index))
    }
}

#[cfg(test)]
mod tests;
