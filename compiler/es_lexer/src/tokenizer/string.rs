//! String literals and template chunks.
//!
//! Strings reject malformed escapes immediately. Templates record the first
//! one and produce no cooked value, because a tagged template may still
//! use the raw text.

use es_lexer_core::unicode::{self, LINE_SEPARATOR, NON_BMP_MAX, PARA_SEPARATOR};
use es_lexer_core::CodeUnit;

use super::{as_ascii, Tokenizer};
use crate::atoms::Atom;
use crate::flags::TokenStreamFlags;
use crate::lex_error::{LexError, LexErrorKind};
use crate::token::{InvalidEscape, InvalidEscapeType, Modifier, TokenKind, TokenValue};

impl<U: CodeUnit> Tokenizer<'_, U> {
    /// A string or template chunk whose opening delimiter (a quote, a
    /// backtick, or the `}` ending a substitution) has been consumed.
    /// `until` is the closing delimiter.
    pub(super) fn string_or_template(
        &mut self,
        until: u8,
        start: u32,
        modifier: Modifier,
    ) -> Result<TokenKind, LexError> {
        let parsing_template = until == b'`';
        let mut is_head = false;
        let mut invalid_escape = None;
        self.char_buffer.clear();

        loop {
            let Some(unit) = self.units.get_code_unit() else {
                return Err(self.premature_end_of_literal(parsing_template));
            };

            let Some(byte) = as_ascii(unit) else {
                let code_point = self.decode_non_ascii(unit)?;
                if matches!(code_point, LINE_SEPARATOR | PARA_SEPARATOR) {
                    self.update_line_info_for_eol();
                    self.update_flags_for_eol();
                }
                self.append_code_point(code_point)?;
                continue;
            };

            if byte == until {
                break;
            }
            match byte {
                b'\\' => {
                    let escape_start = self.units.offset() - 1;
                    if let Some(code_point) =
                        self.escape_sequence(escape_start, parsing_template, &mut invalid_escape)?
                    {
                        self.append_code_point(code_point)?;
                    }
                }
                b'\r' | b'\n' => {
                    if !parsing_template {
                        self.units.unget_code_unit();
                        return Err(self.bad_token_here(LexErrorKind::EolInString));
                    }
                    if byte == b'\r' {
                        self.units.match_code_unit(b'\n');
                    }
                    self.update_line_info_for_eol();
                    self.update_flags_for_eol();
                    self.append_code_point(u32::from(b'\n'))?;
                }
                b'$' if parsing_template && self.units.match_code_unit(b'{') => {
                    is_head = true;
                    break;
                }
                _ => self.append_code_point(u32::from(byte))?,
            }
        }

        if !parsing_template {
            let atom = self.drain_char_buffer_into_atom();
            let value = TokenValue::String { atom };
            return Ok(self.new_token(TokenKind::String, start, value, modifier));
        }

        let cooked = if invalid_escape.is_some() {
            self.char_buffer.clear();
            None
        } else {
            Some(self.drain_char_buffer_into_atom())
        };
        let kind = if is_head {
            TokenKind::TemplateHead
        } else {
            TokenKind::NoSubsTemplate
        };
        let value = TokenValue::Template { cooked, invalid_escape };
        Ok(self.new_token(kind, start, value, modifier))
    }

    fn premature_end_of_literal(&mut self, parsing_template: bool) -> LexError {
        let kind = if parsing_template {
            LexErrorKind::UnterminatedTemplate
        } else {
            LexErrorKind::UnterminatedString
        };
        self.bad_token_here(kind)
    }

    /// A malformed escape: fatal in a string, recorded in a template.
    fn invalid_escape(
        &mut self,
        offset: u32,
        kind: InvalidEscapeType,
        parsing_template: bool,
        invalid: &mut Option<InvalidEscape>,
    ) -> Result<Option<u32>, LexError> {
        if parsing_template {
            if invalid.is_none() {
                *invalid = Some(InvalidEscape { offset, kind });
            }
            return Ok(None);
        }
        Err(self.bad_token(LexErrorKind::MalformedEscape(kind), offset))
    }

    /// The escape after a consumed `\`. Returns the code point it denotes,
    /// or `None` for a line continuation or a recorded template error.
    fn escape_sequence(
        &mut self,
        escape_start: u32,
        parsing_template: bool,
        invalid: &mut Option<InvalidEscape>,
    ) -> Result<Option<u32>, LexError> {
        let Some(unit) = self.units.get_code_unit() else {
            return Err(self.premature_end_of_literal(parsing_template));
        };
        let Some(byte) = as_ascii(unit) else {
            // `\` before U+2028 or U+2029 is a line continuation.
            let code_point = self.get_non_ascii_code_point(unit)?;
            return Ok((code_point != u32::from(b'\n')).then_some(code_point));
        };

        let code_point = match byte {
            b'b' => 0x08,
            b'f' => 0x0C,
            b'n' => 0x0A,
            b'r' => 0x0D,
            b't' => 0x09,
            b'v' => 0x0B,

            b'\r' | b'\n' => {
                if byte == b'\r' {
                    self.units.match_code_unit(b'\n');
                }
                self.update_line_info_for_eol();
                return Ok(None);
            }

            b'u' => return self.unicode_escape(escape_start, parsing_template, invalid),

            b'x' => match self.units.match_hex_digits(2) {
                Some(value) => value,
                None => {
                    return self.invalid_escape(
                        escape_start,
                        InvalidEscapeType::Hexadecimal,
                        parsing_template,
                        invalid,
                    );
                }
            },

            b'8' | b'9' => {
                if parsing_template {
                    return self.invalid_escape(
                        escape_start,
                        InvalidEscapeType::EightOrNine,
                        parsing_template,
                        invalid,
                    );
                }
                self.strict_mode_error(LexErrorKind::DeprecatedEightOrNineEscape, escape_start)?;
                self.flags.insert(TokenStreamFlags::SAW_EIGHT_OR_NINE_ESCAPE);
                u32::from(byte)
            }

            b'0'..=b'7' => {
                let next = self.units.peek_code_unit().and_then(as_ascii);
                // `\0` alone is NUL, not an octal escape.
                if byte != b'0' || next.is_some_and(|b| b.is_ascii_digit()) {
                    if parsing_template {
                        return self.invalid_escape(
                            escape_start,
                            InvalidEscapeType::Octal,
                            parsing_template,
                            invalid,
                        );
                    }
                    self.strict_mode_error(LexErrorKind::DeprecatedOctalEscape, escape_start)?;
                    self.flags.insert(TokenStreamFlags::SAW_OCTAL_ESCAPE);
                }
                self.octal_escape_value(byte, next)
            }

            _ => u32::from(byte),
        };
        Ok(Some(code_point))
    }

    /// Up to three octal digits, the first already consumed, valued at
    /// most 0xFF.
    fn octal_escape_value(&mut self, first: u8, next: Option<u8>) -> u32 {
        let mut value = u32::from(first - b'0');
        let Some(second @ b'0'..=b'7') = next else {
            return value;
        };
        value = value * 8 + u32::from(second - b'0');
        self.units.skip_code_units(1);

        if let Some(third @ b'0'..=b'7') = self.units.peek_code_unit().and_then(as_ascii) {
            let extended = value * 8 + u32::from(third - b'0');
            if extended <= 0xFF {
                value = extended;
                self.units.skip_code_units(1);
            }
        }
        value
    }

    /// `\u` escapes, with the `u` consumed.
    fn unicode_escape(
        &mut self,
        escape_start: u32,
        parsing_template: bool,
        invalid: &mut Option<InvalidEscape>,
    ) -> Result<Option<u32>, LexError> {
        if self.units.match_code_unit(b'{') {
            let mut code_point = 0u32;
            let mut saw_digit = false;
            loop {
                let unit = self.units.get_code_unit();
                if unit.is_some_and(|u| u.is(b'}')) && saw_digit {
                    return Ok(Some(code_point));
                }
                let Some(digit) = unit.and_then(|u| unicode::hex_digit_value(u.value())) else {
                    // Leave a line terminator or closing delimiter for the
                    // literal scanner.
                    self.unget_unit(unit);
                    return self.invalid_escape(
                        escape_start,
                        InvalidEscapeType::Unicode,
                        parsing_template,
                        invalid,
                    );
                };
                code_point = (code_point << 4) | digit;
                if code_point > NON_BMP_MAX {
                    return self.invalid_escape(
                        escape_start,
                        InvalidEscapeType::UnicodeOverflow,
                        parsing_template,
                        invalid,
                    );
                }
                saw_digit = true;
            }
        }

        let unit = self.units.get_code_unit();
        if let Some(lead) = unit.and_then(|u| unicode::hex_digit_value(u.value())) {
            if let Some(rest) = self.units.match_hex_digits(3) {
                return Ok(Some((lead << 12) | rest));
            }
        }
        self.unget_unit(unit);
        self.invalid_escape(escape_start, InvalidEscapeType::Unicode, parsing_template, invalid)
    }

    /// Raw text of the current template token: the source between its
    /// delimiters, with CR and CRLF normalized to LF.
    pub fn raw_template_string_atom(&mut self) -> Result<Atom, LexError> {
        let token = *self.current_token();
        debug_assert!(token.kind.is_template(), "{} is not a template", token.kind);

        let begin = token.pos.begin + 1;
        let end = match token.kind {
            TokenKind::TemplateHead => token.pos.end - 2,
            _ => token.pos.end - 1,
        };
        let units = self.units.code_units(begin, end);

        self.char_buffer.clear();
        let mut segment_start = 0;
        let mut i = 0;
        while i < units.len() {
            if units[i].is(b'\r') {
                let pushed = self
                    .char_buffer
                    .extend_from_units(&units[segment_start..i])
                    .and_then(|()| self.char_buffer.push_unit(u16::from(b'\n')));
                if pushed.is_err() {
                    return Err(self.bad_token(LexErrorKind::OutOfMemory, begin));
                }
                if units.get(i + 1).is_some_and(|u| u.is(b'\n')) {
                    i += 1;
                }
                segment_start = i + 1;
            }
            i += 1;
        }
        if self.char_buffer.extend_from_units(&units[segment_start..]).is_err() {
            return Err(self.bad_token(LexErrorKind::OutOfMemory, begin));
        }
        Ok(self.drain_char_buffer_into_atom())
    }
}
