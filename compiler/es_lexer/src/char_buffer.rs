//! Scratch UTF-16 buffer for token text that is not a plain source slice.
//!
//! Growth is fallible: an allocation failure surfaces as an error the
//! tokenizer reports like any lexical error.

use smallvec::{CollectionAllocErr, SmallVec};

use es_lexer_core::{unicode, CodeUnit};

#[derive(Clone, Debug, Default)]
pub(crate) struct CharBuffer {
    units: SmallVec<[u16; 64]>,
}

impl CharBuffer {
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.units.clear();
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[u16] {
        &self.units
    }

    pub(crate) fn push_unit(&mut self, unit: u16) -> Result<(), CollectionAllocErr> {
        self.units.try_reserve(1)?;
        self.units.push(unit);
        Ok(())
    }

    pub(crate) fn push_code_point(&mut self, code_point: u32) -> Result<(), CollectionAllocErr> {
        self.units.try_reserve(unicode::utf16_length(code_point))?;
        unicode::utf16_encode(code_point, |u| self.units.push(u));
        Ok(())
    }

    /// Append already-scanned source text, transcoding to UTF-16.
    pub(crate) fn extend_from_units<U: CodeUnit>(
        &mut self,
        units: &[U],
    ) -> Result<(), CollectionAllocErr> {
        self.units.try_reserve(units.len())?;
        U::for_each_utf16(units, |u| self.units.push(u));
        Ok(())
    }
}

#[cfg(test)]
mod tests;
