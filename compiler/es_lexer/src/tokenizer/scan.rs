//! The main scanning loop: whitespace, comments, punctuators, and regular
//! expressions. Names, numbers, and strings are handed to their own
//! scanners.

use tracing::debug;

use es_lexer_core::unicode::{self, LINE_SEPARATOR, PARA_SEPARATOR};
use es_lexer_core::CodeUnit;

use super::ident::NameVisibility;
use super::{as_ascii, Tokenizer};
use crate::char_class::{FirstCharKind, FIRST_CHAR_KINDS};
use crate::flags::{RegExpFlags, TokenStreamFlags};
use crate::lex_error::{LexError, LexErrorKind};
use crate::token::{Modifier, TokenKind, TokenValue};

impl<U: CodeUnit> Tokenizer<'_, U> {
    /// Scan one token into the next ring slot.
    pub(super) fn get_token_internal(&mut self, modifier: Modifier) -> Result<TokenKind, LexError> {
        loop {
            let start = self.units.offset();
            let Some(unit) = self.units.get_code_unit() else {
                self.flags.insert(TokenStreamFlags::IS_EOF);
                return Ok(self.new_token(TokenKind::Eof, start, TokenValue::None, modifier));
            };

            let Some(byte) = as_ascii(unit) else {
                let code_point = self.get_non_ascii_code_point(unit)?;
                if code_point == u32::from(b'\n') {
                    self.update_flags_for_eol();
                    continue;
                }
                if unicode::is_space_or_bom2(code_point) {
                    continue;
                }
                if unicode::is_identifier_start(code_point) {
                    let visibility = NameVisibility::Public;
                    return self.identifier_name(start, start, false, visibility, modifier);
                }
                return Err(self.bad_token(LexErrorKind::IllegalCharacter { code_point }, start));
            };

            match FIRST_CHAR_KINDS[usize::from(byte)] {
                FirstCharKind::OneChar(TokenKind::RightCurly)
                    if modifier == Modifier::TemplateTail =>
                {
                    return self.string_or_template(b'`', start, modifier);
                }
                FirstCharKind::OneChar(kind) => {
                    return Ok(self.new_token(kind, start, TokenValue::None, modifier));
                }
                FirstCharKind::Space => continue,
                FirstCharKind::Ident => {
                    let visibility = NameVisibility::Public;
                    return self.identifier_name(start, start, false, visibility, modifier);
                }
                FirstCharKind::Dec => {
                    return self.decimal_number(Some(unit), start, start, modifier);
                }
                FirstCharKind::String => return self.string_or_template(byte, start, modifier),
                FirstCharKind::Eol => {
                    if byte == b'\r' {
                        self.units.match_code_unit(b'\n');
                    }
                    self.update_line_info_for_eol();
                    self.update_flags_for_eol();
                    continue;
                }
                FirstCharKind::ZeroDigit => return self.zero_digit_number(start, modifier),
                FirstCharKind::Other => {}
            }

            let kind = match byte {
                b'.' => {
                    if self.next_is_ascii_digit() {
                        return self.decimal_number(Some(unit), start, start, modifier);
                    }
                    if self.units.match_code_units(b"..") {
                        TokenKind::TripleDot
                    } else {
                        TokenKind::Dot
                    }
                }

                b'=' => {
                    if self.units.match_code_unit(b'=') {
                        if self.units.match_code_unit(b'=') {
                            TokenKind::StrictEq
                        } else {
                            TokenKind::Eq
                        }
                    } else if self.units.match_code_unit(b'>') {
                        TokenKind::Arrow
                    } else {
                        TokenKind::Assign
                    }
                }

                b'+' => {
                    if self.units.match_code_unit(b'+') {
                        TokenKind::Increment
                    } else if self.units.match_code_unit(b'=') {
                        TokenKind::AddAssign
                    } else {
                        TokenKind::Add
                    }
                }

                b'\\' => {
                    if self.match_unicode_escape_id_start().is_some() {
                        let visibility = NameVisibility::Public;
                        return self.identifier_name(start, start, true, visibility, modifier);
                    }
                    return Err(self.bad_token(LexErrorKind::InvalidEscape, start));
                }

                b'|' => {
                    if self.units.match_code_unit(b'|') {
                        if self.units.match_code_unit(b'=') {
                            TokenKind::OrAssign
                        } else {
                            TokenKind::Or
                        }
                    } else if self.units.match_code_unit(b'=') {
                        TokenKind::BitOrAssign
                    } else {
                        TokenKind::BitOr
                    }
                }

                b'^' => {
                    if self.units.match_code_unit(b'=') {
                        TokenKind::BitXorAssign
                    } else {
                        TokenKind::BitXor
                    }
                }

                b'&' => {
                    if self.units.match_code_unit(b'&') {
                        if self.units.match_code_unit(b'=') {
                            TokenKind::AndAssign
                        } else {
                            TokenKind::And
                        }
                    } else if self.units.match_code_unit(b'=') {
                        TokenKind::BitAndAssign
                    } else {
                        TokenKind::BitAnd
                    }
                }

                b'?' => {
                    if self.units.match_code_unit(b'.') {
                        // `a?.5:b` is a conditional.
                        if self.next_is_ascii_digit() {
                            self.units.unget_code_unit();
                            TokenKind::Hook
                        } else {
                            TokenKind::OptionalChain
                        }
                    } else if self.units.match_code_unit(b'?') {
                        if self.units.match_code_unit(b'=') {
                            TokenKind::CoalesceAssign
                        } else {
                            TokenKind::Coalesce
                        }
                    } else {
                        TokenKind::Hook
                    }
                }

                b'!' => {
                    if self.units.match_code_unit(b'=') {
                        if self.units.match_code_unit(b'=') {
                            TokenKind::StrictNe
                        } else {
                            TokenKind::Ne
                        }
                    } else {
                        TokenKind::Not
                    }
                }

                b'<' => {
                    if self.options.allow_html_comments && self.units.match_code_units(b"!--") {
                        self.consume_rest_of_single_line_comment()?;
                        continue;
                    }
                    if self.units.match_code_unit(b'<') {
                        if self.units.match_code_unit(b'=') {
                            TokenKind::LshAssign
                        } else {
                            TokenKind::Lsh
                        }
                    } else if self.units.match_code_unit(b'=') {
                        TokenKind::Le
                    } else {
                        TokenKind::Lt
                    }
                }

                b'>' => {
                    if self.units.match_code_unit(b'=') {
                        TokenKind::Ge
                    } else if self.units.match_code_unit(b'>') {
                        if self.units.match_code_unit(b'>') {
                            if self.units.match_code_unit(b'=') {
                                TokenKind::UrshAssign
                            } else {
                                TokenKind::Ursh
                            }
                        } else if self.units.match_code_unit(b'=') {
                            TokenKind::RshAssign
                        } else {
                            TokenKind::Rsh
                        }
                    } else {
                        TokenKind::Gt
                    }
                }

                b'*' => {
                    if self.units.match_code_unit(b'*') {
                        if self.units.match_code_unit(b'=') {
                            TokenKind::PowAssign
                        } else {
                            TokenKind::Pow
                        }
                    } else if self.units.match_code_unit(b'=') {
                        TokenKind::MulAssign
                    } else {
                        TokenKind::Mul
                    }
                }

                b'/' => {
                    if self.units.match_code_unit(b'/') {
                        let next = self.units.peek_code_unit().and_then(as_ascii);
                        if let Some(sigil @ (b'@' | b'#')) = next {
                            self.units.skip_code_units(1);
                            self.get_directives(false, sigil == b'@')?;
                        }
                        self.consume_rest_of_single_line_comment()?;
                        continue;
                    }
                    if self.units.match_code_unit(b'*') {
                        self.block_comment()?;
                        continue;
                    }
                    if modifier == Modifier::Operand {
                        return self.regexp_literal(start, modifier);
                    }
                    if self.units.match_code_unit(b'=') {
                        TokenKind::DivAssign
                    } else {
                        TokenKind::Div
                    }
                }

                b'%' => {
                    if self.units.match_code_unit(b'=') {
                        TokenKind::ModAssign
                    } else {
                        TokenKind::Mod
                    }
                }

                b'-' => {
                    if self.units.match_code_unit(b'-') {
                        if self.options.allow_html_comments
                            && !self.flags.contains(TokenStreamFlags::IS_DIRTY_LINE)
                            && self.units.match_code_unit(b'>')
                        {
                            self.consume_rest_of_single_line_comment()?;
                            continue;
                        }
                        TokenKind::Decrement
                    } else if self.units.match_code_unit(b'=') {
                        TokenKind::SubAssign
                    } else {
                        TokenKind::Sub
                    }
                }

                b'#' => {
                    if start == self.units.start_offset() && self.units.match_code_unit(b'!') {
                        self.consume_rest_of_single_line_comment()?;
                        continue;
                    }
                    return self.private_name(start, modifier);
                }

                _ => {
                    return Err(self.bad_token(
                        LexErrorKind::IllegalCharacter {
                            code_point: u32::from(byte),
                        },
                        start,
                    ));
                }
            };

            return Ok(self.new_token(kind, start, TokenValue::None, modifier));
        }
    }

    /// `#name`, with the `#` already consumed.
    fn private_name(&mut self, start: u32, modifier: Modifier) -> Result<TokenKind, LexError> {
        let ident_start = self.units.offset();
        if self.units.match_code_unit(b'\\') {
            if self.match_unicode_escape_id_start().is_some() {
                let visibility = NameVisibility::Private;
                return self.identifier_name(start, ident_start, true, visibility, modifier);
            }
            self.units.unget_code_unit();
        } else if let Some(peeked) = self.units.peek_code_point() {
            if unicode::is_identifier_start(peeked.code_point()) {
                self.units.consume_known_code_point(peeked);
                let visibility = NameVisibility::Private;
                return self.identifier_name(start, ident_start, false, visibility, modifier);
            }
        }
        Err(self.bad_token(
            LexErrorKind::IllegalCharacter {
                code_point: u32::from(b'#'),
            },
            start,
        ))
    }

    // === Comments ===

    /// Skip to (not past) the line terminator ending a single-line comment.
    fn consume_rest_of_single_line_comment(&mut self) -> Result<(), LexError> {
        loop {
            let skip = U::skip_to_line_terminator(self.units.rest());
            self.units.skip_code_units(skip);

            let Some(unit) = self.units.peek_code_unit() else {
                return Ok(());
            };
            if unit.is(b'\n') || unit.is(b'\r') {
                return Ok(());
            }
            if unit.is_ascii() {
                self.units.consume_known_code_unit(unit);
                continue;
            }
            match self.units.peek_code_point() {
                Some(peeked) if matches!(peeked.code_point(), LINE_SEPARATOR | PARA_SEPARATOR) => {
                    return Ok(());
                }
                Some(peeked) => self.units.consume_known_code_point(peeked),
                None => {
                    // Malformed: decoding reports it.
                    self.units.consume_known_code_unit(unit);
                    self.decode_non_ascii(unit)?;
                }
            }
        }
    }

    /// The rest of a `/* */` comment, with the opening already consumed.
    fn block_comment(&mut self) -> Result<(), LexError> {
        let lineno_before = self.lineno;
        loop {
            let Some(unit) = self.units.get_code_unit() else {
                return Err(self.bad_token_here(LexErrorKind::UnterminatedComment));
            };
            match as_ascii(unit) {
                Some(b'*') if self.units.match_code_unit(b'/') => break,
                Some(sigil @ (b'@' | b'#')) => self.get_directives(true, sigil == b'@')?,
                Some(b'\r') => {
                    self.units.match_code_unit(b'\n');
                    self.update_line_info_for_eol();
                }
                Some(b'\n') => self.update_line_info_for_eol(),
                Some(_) => {}
                None => {
                    self.get_non_ascii_code_point(unit)?;
                }
            }
        }
        if self.lineno != lineno_before {
            self.update_flags_for_eol();
        }
        Ok(())
    }

    // === Directives ===

    /// Look for source URL directives after a comment's `@` or `#`.
    fn get_directives(
        &mut self,
        is_multiline: bool,
        should_warn_deprecated: bool,
    ) -> Result<(), LexError> {
        if let Some(url) =
            self.get_directive(is_multiline, should_warn_deprecated, b" sourceURL=", "sourceURL")?
        {
            self.display_url = Some(url);
        }
        if let Some(url) = self.get_directive(
            is_multiline,
            should_warn_deprecated,
            b" sourceMappingURL=",
            "sourceMappingURL",
        )? {
            self.source_map_url = Some(url);
        }
        Ok(())
    }

    /// The directive's value, if `directive` comes next and is followed by
    /// a non-empty URL. The URL ends at whitespace, a line terminator, or
    /// (in a block comment) the closing `*/`.
    fn get_directive(
        &mut self,
        is_multiline: bool,
        should_warn_deprecated: bool,
        directive: &[u8],
        pragma: &'static str,
    ) -> Result<Option<String>, LexError> {
        let sigil_offset = self.units.offset() - 1;
        if !self.units.match_code_units(directive) {
            return Ok(None);
        }
        if should_warn_deprecated && self.options.extra_warnings {
            self.warning(LexErrorKind::DeprecatedPragma { pragma }, sigil_offset)?;
        }

        self.char_buffer.clear();
        while let Some(unit) = self.units.peek_code_unit() {
            if unit.is_ascii() {
                let value = unit.value();
                if unicode::is_space(value) || unicode::is_line_terminator(value) {
                    break;
                }
                self.units.consume_known_code_unit(unit);
                let closes_comment = self.units.peek_code_unit().is_some_and(|u| u.is(b'/'));
                if is_multiline && unit.is(b'*') && closes_comment {
                    self.units.unget_code_unit();
                    break;
                }
                self.append_code_point(value)?;
                continue;
            }

            let Some(peeked) = self.units.peek_code_point() else {
                break;
            };
            let code_point = peeked.code_point();
            if unicode::is_space(code_point) || unicode::is_line_terminator(code_point) {
                break;
            }
            self.units.consume_known_code_point(peeked);
            self.append_code_point(code_point)?;
        }

        if self.char_buffer.as_slice().is_empty() {
            return Ok(None);
        }
        let url = String::from_utf16_lossy(self.char_buffer.as_slice());
        self.char_buffer.clear();
        debug!(pragma, %url, "source directive");
        Ok(Some(url))
    }

    // === Regular expressions ===

    /// A regular expression literal, with the opening `/` consumed.
    fn regexp_literal(&mut self, start: u32, modifier: Modifier) -> Result<TokenKind, LexError> {
        self.char_buffer.clear();
        let mut in_char_class = false;
        loop {
            let Some(unit) = self.units.get_code_unit() else {
                return Err(self.bad_token_here(LexErrorKind::UnterminatedRegExp));
            };
            let Some(mut byte) = as_ascii(unit) else {
                self.regexp_non_ascii(unit)?;
                continue;
            };

            if byte == b'\\' {
                self.append_code_point(u32::from(b'\\'))?;
                let Some(escaped) = self.units.get_code_unit() else {
                    return Err(self.bad_token_here(LexErrorKind::UnterminatedRegExp));
                };
                let Some(escaped_byte) = as_ascii(escaped) else {
                    self.regexp_non_ascii(escaped)?;
                    continue;
                };
                byte = escaped_byte;
            } else if byte == b'[' {
                in_char_class = true;
            } else if byte == b']' {
                in_char_class = false;
            } else if byte == b'/' && !in_char_class {
                break;
            }

            if byte == b'\r' || byte == b'\n' {
                self.units.unget_code_unit();
                return Err(self.bad_token_here(LexErrorKind::UnterminatedRegExp));
            }
            self.append_code_point(u32::from(byte))?;
        }
        let pattern = self.drain_char_buffer_into_atom();

        let mut flags = RegExpFlags::empty();
        while let Some(letter) = self.units.peek_code_unit().and_then(as_ascii) {
            let Some(flag) = RegExpFlags::from_letter(letter) else {
                break;
            };
            let conflicts = flags.contains(flag)
                || (flag == RegExpFlags::UNICODE && flags.contains(RegExpFlags::UNICODE_SETS))
                || (flag == RegExpFlags::UNICODE_SETS && flags.contains(RegExpFlags::UNICODE));
            if conflicts {
                let flag = char::from(letter);
                return Err(self.bad_token_here(LexErrorKind::BadRegExpFlag { flag }));
            }
            self.units.skip_code_units(1);
            flags |= flag;
        }

        if let Some(unit) = self.units.peek_code_unit() {
            let code_point = if unit.is_ascii() {
                Some(unit.value())
            } else {
                self.units.peek_code_point().map(|peeked| peeked.code_point())
            };
            if let Some(code_point) = code_point {
                if code_point == u32::from(b'\\') || unicode::is_identifier_part(code_point) {
                    let flag = char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER);
                    return Err(self.bad_token_here(LexErrorKind::BadRegExpFlag { flag }));
                }
            }
        }

        let value = TokenValue::RegExp { pattern, flags };
        Ok(self.new_token(TokenKind::RegExp, start, value, modifier))
    }

    fn next_is_ascii_digit(&self) -> bool {
        self.units
            .peek_code_unit()
            .is_some_and(|u| unicode::is_ascii_digit(u.value()))
    }

    /// A non-ASCII unit inside a regular expression body.
    fn regexp_non_ascii(&mut self, lead: U) -> Result<(), LexError> {
        let code_point = self.decode_non_ascii(lead)?;
        if matches!(code_point, LINE_SEPARATOR | PARA_SEPARATOR) {
            self.units.unget_line_or_paragraph_separator();
            return Err(self.bad_token_here(LexErrorKind::UnterminatedRegExp));
        }
        self.append_code_point(code_point)
    }
}
