//! Interned UTF-16 strings.
//!
//! Every name, string value, and regexp source the tokenizer produces is
//! interned here and referred to by [`Atom`]. Tokens stay `Copy`, and equal
//! strings compare equal by handle.

use rustc_hash::FxHashMap;

/// Handle to an interned string. Only meaningful with the table that made it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct Atom(u32);

impl Atom {
    /// The empty string, pre-interned in every table.
    pub const EMPTY: Atom = Atom(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Intern table mapping UTF-16 text to [`Atom`]s.
#[derive(Clone, Debug)]
pub struct AtomTable {
    map: FxHashMap<Box<[u16]>, Atom>,
    strings: Vec<Box<[u16]>>,
}

impl Default for AtomTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AtomTable {
    pub fn new() -> Self {
        let mut table = AtomTable {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        table.intern(&[]);
        table
    }

    /// Intern `units`, returning the existing atom if already present.
    pub fn intern(&mut self, units: &[u16]) -> Atom {
        if let Some(&atom) = self.map.get(units) {
            return atom;
        }
        let atom = Atom(u32::try_from(self.strings.len()).unwrap_or(u32::MAX));
        let owned: Box<[u16]> = units.into();
        self.strings.push(owned.clone());
        self.map.insert(owned, atom);
        atom
    }

    /// Intern a Rust string.
    pub fn intern_str(&mut self, text: &str) -> Atom {
        let units: Vec<u16> = text.encode_utf16().collect();
        self.intern(&units)
    }

    /// Look up `units` without interning.
    pub fn get(&self, units: &[u16]) -> Option<Atom> {
        self.map.get(units).copied()
    }

    /// UTF-16 text of `atom`.
    pub fn units(&self, atom: Atom) -> &[u16] {
        self.strings.get(atom.index()).map_or(&[], |s| &s[..])
    }

    /// Text of `atom`, with lone surrogates replaced by U+FFFD.
    pub fn to_string_lossy(&self, atom: Atom) -> String {
        String::from_utf16_lossy(self.units(atom))
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Always false: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests;
