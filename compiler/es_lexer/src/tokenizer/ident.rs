//! Identifier names, reserved words, and private names.

use es_lexer_core::unicode::{self, NON_BMP_MAX};
use es_lexer_core::CodeUnit;

use super::{as_ascii, Tokenizer};
use crate::atoms::Atom;
use crate::keywords::find_reserved_word;
use crate::lex_error::LexError;
use crate::token::{Modifier, TokenKind, TokenValue};

/// Whether a name was written with a leading `#`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(super) enum NameVisibility {
    Public,
    Private,
}

impl<U: CodeUnit> Tokenizer<'_, U> {
    /// The rest of an identifier whose first code point (or escape) ends at
    /// the cursor. `ident_start` is where the name's text begins, which is
    /// after the `#` of a private name.
    pub(super) fn identifier_name(
        &mut self,
        start: u32,
        ident_start: u32,
        mut saw_escape: bool,
        visibility: NameVisibility,
        modifier: Modifier,
    ) -> Result<TokenKind, LexError> {
        while let Some(unit) = self.units.peek_code_unit() {
            if let Some(byte) = as_ascii(unit) {
                if unicode::is_ascii_identifier_part(u32::from(byte)) {
                    self.units.consume_known_code_unit(unit);
                    continue;
                }
                if byte == b'\\' {
                    self.units.consume_known_code_unit(unit);
                    if self.match_unicode_escape_ident().is_some() {
                        saw_escape = true;
                        continue;
                    }
                    self.units.unget_code_unit();
                }
                break;
            }

            match self.units.peek_code_point() {
                Some(peeked) if unicode::is_identifier_part(peeked.code_point()) => {
                    self.units.consume_known_code_point(peeked);
                }
                _ => break,
            }
        }

        let kind = match visibility {
            NameVisibility::Public => TokenKind::Name,
            NameVisibility::Private => TokenKind::PrivateName,
        };
        let end = self.units.offset();

        if saw_escape {
            // Escaped reserved words are still names; the parser decides
            // where they are allowed.
            let atom = self.put_ident_in_char_buffer(ident_start, end)?;
            let value = TokenValue::Name { atom, has_escapes: true };
            return Ok(self.new_token(kind, start, value, modifier));
        }

        let text = self.units.code_units(ident_start, end);
        let kind = match visibility {
            NameVisibility::Public => find_reserved_word(text).unwrap_or(kind),
            NameVisibility::Private => kind,
        };
        let atom = self.atomize_source(text)?;
        let value = TokenValue::Name { atom, has_escapes: false };
        Ok(self.new_token(kind, start, value, modifier))
    }

    /// Rescan `begin..end`, decoding escapes, and intern the result.
    fn put_ident_in_char_buffer(&mut self, begin: u32, end: u32) -> Result<Atom, LexError> {
        self.char_buffer.clear();
        self.units.set_offset(begin);
        while self.units.offset() < end {
            let Some(unit) = self.units.get_code_unit() else {
                break;
            };
            let code_point = if unit.is(b'\\') {
                let escaped = self.match_unicode_escape_ident();
                debug_assert!(escaped.is_some(), "escape validated by the first pass");
                escaped.map_or(u32::from(b'\\'), |(code_point, _)| code_point)
            } else if unit.is_ascii() {
                unit.value()
            } else {
                self.decode_non_ascii(unit)?
            };
            self.append_code_point(code_point)?;
        }
        Ok(self.drain_char_buffer_into_atom())
    }

    // === Unicode escapes ===
    //
    // Each matcher runs with the `\` consumed. On success it returns the
    // code point and the escape's length after the `\`; on failure the
    // cursor is back just after the `\`.

    /// `u` followed by four hex digits or a braced code point.
    pub(super) fn match_unicode_escape(&mut self) -> Option<(u32, usize)> {
        debug_assert!(self.units.previous_code_unit().is_some_and(|u| u.is(b'\\')));
        if !self.units.match_code_unit(b'u') {
            return None;
        }

        let unit = self.units.get_code_unit();
        if let Some(lead) = unit.and_then(|u| unicode::hex_digit_value(u.value())) {
            if let Some(rest) = self.units.match_hex_digits(3) {
                return Some(((lead << 12) | rest, 5));
            }
        } else if unit.is_some_and(|u| u.is(b'{')) {
            return self.match_extended_unicode_escape();
        }

        self.unget_unit(unit);
        self.units.unget_code_unit();
        None
    }

    /// The `{...}` form, with the `{` consumed.
    fn match_extended_unicode_escape(&mut self) -> Option<(u32, usize)> {
        let mut unit = self.units.get_code_unit();

        let mut leading_zeroes = 0;
        while unit.is_some_and(|u| u.is(b'0')) {
            leading_zeroes += 1;
            unit = self.units.get_code_unit();
        }

        let mut digits = 0;
        let mut code = 0u32;
        while digits < 6 {
            let Some(value) = unit.and_then(|u| unicode::hex_digit_value(u.value())) else {
                break;
            };
            code = (code << 4) | value;
            unit = self.units.get_code_unit();
            digits += 1;
        }

        // `u{`, the digits, and the unit after them unless input ended.
        let gotten = 2 + leading_zeroes + digits + usize::from(unit.is_some());
        let closed = unit.is_some_and(|u| u.is(b'}'));
        if closed && (leading_zeroes > 0 || digits > 0) && code <= NON_BMP_MAX {
            return Some((code, gotten));
        }
        self.units.unskip_code_units(gotten);
        None
    }

    /// A Unicode escape denoting an `IdentifierStart` code point.
    pub(super) fn match_unicode_escape_id_start(&mut self) -> Option<(u32, usize)> {
        let (code_point, length) = self.match_unicode_escape()?;
        if unicode::is_identifier_start(code_point) {
            return Some((code_point, length));
        }
        self.units.unskip_code_units(length);
        None
    }

    /// A Unicode escape denoting an `IdentifierPart` code point.
    pub(super) fn match_unicode_escape_ident(&mut self) -> Option<(u32, usize)> {
        let (code_point, length) = self.match_unicode_escape()?;
        if unicode::is_identifier_part(code_point) {
            return Some((code_point, length));
        }
        self.units.unskip_code_units(length);
        None
    }
}
