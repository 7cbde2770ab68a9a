//! Reserved-word lookup.
//!
//! One process-wide table maps each reserved, strict-reserved, and
//! contextual word to its keyword kind. It is built once, by
//! [`init_reserved_words`] or on first lookup, and never changes after.
//! Drivers that tokenize on worker threads call [`init_reserved_words`] on
//! the main thread first, so no worker ever races to build it.
//!
//! Only escape-free identifiers are looked up: `if` is the name `if`,
//! never the keyword.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use es_lexer_core::CodeUnit;

use crate::TokenKind;

/// Shortest and longest reserved words.
const MIN_LENGTH: usize = 2;
const MAX_LENGTH: usize = 10;

const RESERVED_WORDS: &[(&str, TokenKind)] = &[
    ("break", TokenKind::Break),
    ("case", TokenKind::Case),
    ("catch", TokenKind::Catch),
    ("class", TokenKind::Class),
    ("const", TokenKind::Const),
    ("continue", TokenKind::Continue),
    ("debugger", TokenKind::Debugger),
    ("default", TokenKind::Default),
    ("delete", TokenKind::Delete),
    ("do", TokenKind::Do),
    ("else", TokenKind::Else),
    ("enum", TokenKind::Enum),
    ("export", TokenKind::Export),
    ("extends", TokenKind::Extends),
    ("false", TokenKind::False),
    ("finally", TokenKind::Finally),
    ("for", TokenKind::For),
    ("function", TokenKind::Function),
    ("if", TokenKind::If),
    ("import", TokenKind::Import),
    ("in", TokenKind::In),
    ("instanceof", TokenKind::InstanceOf),
    ("new", TokenKind::New),
    ("null", TokenKind::Null),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("switch", TokenKind::Switch),
    ("this", TokenKind::This),
    ("throw", TokenKind::Throw),
    ("true", TokenKind::True),
    ("try", TokenKind::Try),
    ("typeof", TokenKind::TypeOf),
    ("var", TokenKind::Var),
    ("void", TokenKind::Void),
    ("while", TokenKind::While),
    ("with", TokenKind::With),
    ("implements", TokenKind::Implements),
    ("interface", TokenKind::Interface),
    ("package", TokenKind::Package),
    ("private", TokenKind::Private),
    ("protected", TokenKind::Protected),
    ("public", TokenKind::Public),
    ("let", TokenKind::Let),
    ("static", TokenKind::Static),
    ("yield", TokenKind::Yield),
    ("as", TokenKind::As),
    ("async", TokenKind::Async),
    ("await", TokenKind::Await),
    ("from", TokenKind::From),
    ("get", TokenKind::Get),
    ("meta", TokenKind::Meta),
    ("of", TokenKind::Of),
    ("set", TokenKind::Set),
    ("target", TokenKind::Target),
];

static RESERVED_WORD_TABLE: OnceLock<FxHashMap<&'static [u8], TokenKind>> = OnceLock::new();

fn table() -> &'static FxHashMap<&'static [u8], TokenKind> {
    RESERVED_WORD_TABLE.get_or_init(|| {
        RESERVED_WORDS
            .iter()
            .map(|&(word, kind)| (word.as_bytes(), kind))
            .collect()
    })
}

/// Build the reserved-word table now. Idempotent.
pub fn init_reserved_words() {
    let table = table();
    tracing::debug!(words = table.len(), "reserved-word table ready");
}

/// Keyword kind for an escape-free identifier, if it is a reserved word.
pub(crate) fn find_reserved_word<U: CodeUnit>(units: &[U]) -> Option<TokenKind> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&units.len()) {
        return None;
    }
    let mut ascii = [0u8; MAX_LENGTH];
    for (slot, unit) in ascii.iter_mut().zip(units) {
        // Every reserved word is lowercase ASCII.
        let value = unit.value();
        if !(u32::from(b'a')..=u32::from(b'z')).contains(&value) {
            return None;
        }
        *slot = u8::try_from(value).ok()?;
    }
    table().get(&ascii[..units.len()]).copied()
}

#[cfg(test)]
mod tests;
