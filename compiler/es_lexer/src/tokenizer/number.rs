//! Numeric and BigInt literals.
//!
//! Separators (`_`) may appear only between two digits. Legacy octal
//! (`017`) and zero-prefixed decimal (`08`) forms are strict mode errors.

use es_lexer_core::unicode;
use es_lexer_core::CodeUnit;

use super::{as_ascii, Tokenizer};
use crate::flags::TokenStreamFlags;
use crate::lex_error::{LexError, LexErrorKind};
use crate::token::{DecimalPoint, Modifier, TokenKind, TokenValue};

fn is_decimal_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

fn is_hex_digit(byte: u8) -> bool {
    byte.is_ascii_hexdigit()
}

fn is_octal_digit(byte: u8) -> bool {
    matches!(byte, b'0'..=b'7')
}

fn is_binary_digit(byte: u8) -> bool {
    matches!(byte, b'0' | b'1')
}

#[inline]
fn unit_is<U: CodeUnit>(unit: Option<U>, test: fn(u8) -> bool) -> bool {
    unit.and_then(as_ascii).is_some_and(test)
}

impl<U: CodeUnit> Tokenizer<'_, U> {
    /// Consume the rest of a digit run whose first digit was just read.
    /// Returns the unit after the run, already consumed (`None` at end of
    /// input).
    fn match_integer_after_first_digit(
        &mut self,
        is_digit: fn(u8) -> bool,
    ) -> Result<Option<U>, LexError> {
        loop {
            let unit = self.units.get_code_unit();
            match unit.and_then(as_ascii) {
                Some(byte) if is_digit(byte) => {}
                Some(b'_') => {
                    let next = self.units.get_code_unit();
                    if unit_is(next, is_digit) {
                        continue;
                    }
                    if next.is_some_and(|u| u.is(b'_')) {
                        self.units.unget_code_unit();
                        return Err(self.bad_token(
                            LexErrorKind::AdjacentNumericSeparators,
                            self.units.offset(),
                        ));
                    }
                    self.unget_unit(next);
                    self.units.unget_code_unit();
                    return Err(self.bad_token(
                        LexErrorKind::TrailingNumericSeparator,
                        self.units.offset(),
                    ));
                }
                _ => return Ok(unit),
            }
        }
    }

    /// A decimal literal. `unit` is the last unit consumed: its first digit,
    /// a leading `.`, or for `08`-style literals whatever followed the
    /// digits. `num_start` is where the digits to convert begin.
    pub(super) fn decimal_number(
        &mut self,
        mut unit: Option<U>,
        start: u32,
        num_start: u32,
        modifier: Modifier,
    ) -> Result<TokenKind, LexError> {
        if unit_is(unit, is_decimal_digit) {
            unit = self.match_integer_after_first_digit(is_decimal_digit)?;
        }

        let mut decimal_point = DecimalPoint::NoDecimal;
        let mut is_bigint = false;
        match unit.and_then(as_ascii) {
            Some(b'n') => is_bigint = true,
            Some(byte @ (b'.' | b'e' | b'E')) => {
                if byte == b'.' {
                    decimal_point = DecimalPoint::HasDecimal;
                    unit = self.units.get_code_unit();
                    if unit_is(unit, is_decimal_digit) {
                        unit = self.match_integer_after_first_digit(is_decimal_digit)?;
                    }
                }
                if unit.is_some_and(|u| u.is(b'e') || u.is(b'E')) {
                    unit = self.units.get_code_unit();
                    if unit.is_some_and(|u| u.is(b'+') || u.is(b'-')) {
                        unit = self.units.get_code_unit();
                    }
                    if !unit_is(unit, is_decimal_digit) {
                        self.unget_unit(unit);
                        return Err(self.bad_token_here(LexErrorKind::MissingExponent));
                    }
                    unit = self.match_integer_after_first_digit(is_decimal_digit)?;
                }
                self.unget_unit(unit);
            }
            _ => self.unget_unit(unit),
        }

        self.check_no_identifier_after_number()?;
        if is_bigint {
            return self.bigint_literal(start, modifier);
        }

        let value = parse_decimal(self.units.code_units(num_start, self.units.offset()));
        let value = TokenValue::Number { value, decimal_point };
        Ok(self.new_token(TokenKind::Number, start, value, modifier))
    }

    /// A literal starting with `0`, which has been consumed.
    pub(super) fn zero_digit_number(
        &mut self,
        start: u32,
        modifier: Modifier,
    ) -> Result<TokenKind, LexError> {
        let unit = self.units.get_code_unit();
        let (radix, num_start, next) = match unit.and_then(as_ascii) {
            Some(b'x' | b'X') => {
                let (num_start, next) = self.radix_digits('x', is_hex_digit)?;
                (16, num_start, next)
            }
            Some(b'b' | b'B') => {
                let (num_start, next) = self.radix_digits('b', is_binary_digit)?;
                (2, num_start, next)
            }
            Some(b'o' | b'O') => {
                let (num_start, next) = self.radix_digits('o', is_octal_digit)?;
                (8, num_start, next)
            }
            Some(byte) if byte.is_ascii_digit() => {
                let num_start = self.units.offset() - 1;
                let mut is_noctal = false;
                let mut unit = unit;
                while let Some(digit) = unit.and_then(as_ascii).filter(u8::is_ascii_digit) {
                    is_noctal |= digit >= b'8';
                    unit = self.units.get_code_unit();
                }
                if unit.is_some_and(|u| u.is(b'_')) {
                    self.units.unget_code_unit();
                    return Err(self.bad_token_here(LexErrorKind::SeparatorAfterLeadingZero));
                }
                if unit.is_some_and(|u| u.is(b'n')) {
                    self.units.unget_code_unit();
                    return Err(self.bad_token_here(LexErrorKind::InvalidBigInt));
                }

                self.flags.insert(TokenStreamFlags::SAW_DEPRECATED_OCTAL_LITERAL);
                if is_noctal {
                    self.strict_mode_error(LexErrorKind::DeprecatedLeadingZero, start)?;
                    return self.decimal_number(unit, start, num_start, modifier);
                }
                self.strict_mode_error(LexErrorKind::DeprecatedOctalLiteral, start)?;
                (8, num_start, unit)
            }
            Some(b'_') => {
                self.units.unget_code_unit();
                return Err(self.bad_token_here(LexErrorKind::SeparatorAfterLeadingZero));
            }
            _ => {
                self.unget_unit(unit);
                return self.decimal_number(Some(U::from_ascii(b'0')), start, start, modifier);
            }
        };

        let is_bigint = next.is_some_and(|u| u.is(b'n'));
        if !is_bigint {
            self.unget_unit(next);
        }
        self.check_no_identifier_after_number()?;
        if is_bigint {
            return self.bigint_literal(start, modifier);
        }

        // Digits end before the unit that stopped the run.
        let digits = self.units.code_units(num_start, self.units.offset());
        let value = parse_radix_integer(digits, radix);
        let value = TokenValue::Number {
            value,
            decimal_point: DecimalPoint::NoDecimal,
        };
        Ok(self.new_token(TokenKind::Number, start, value, modifier))
    }

    /// Digits after a `0x`, `0b`, or `0o` prefix. Returns where they begin
    /// and the unit after them.
    fn radix_digits(
        &mut self,
        prefix: char,
        is_digit: fn(u8) -> bool,
    ) -> Result<(u32, Option<U>), LexError> {
        let unit = self.units.get_code_unit();
        if !unit_is(unit, is_digit) {
            self.unget_unit(unit);
            return Err(self.bad_token_here(LexErrorKind::MissingDigits { prefix }));
        }
        let num_start = self.units.offset() - 1;
        let next = self.match_integer_after_first_digit(is_digit)?;
        Ok((num_start, next))
    }

    /// A numeric literal may not run straight into an identifier: `3in` is
    /// an error, not `3 in`. A `\` counts, since it can only begin an
    /// escaped identifier start.
    fn check_no_identifier_after_number(&mut self) -> Result<(), LexError> {
        let Some(unit) = self.units.peek_code_unit() else {
            return Ok(());
        };
        let starts_identifier = if unit.is_ascii() {
            unit.is(b'\\') || unicode::is_ascii_identifier_start(unit.value())
        } else {
            self.units
                .peek_code_point()
                .is_some_and(|peeked| unicode::is_identifier_start(peeked.code_point()))
        };
        if starts_identifier {
            return Err(self.bad_token_here(LexErrorKind::IdentifierAfterNumber));
        }
        Ok(())
    }

    /// Finish a BigInt whose `n` suffix has been consumed.
    fn bigint_literal(&mut self, start: u32, modifier: Modifier) -> Result<TokenKind, LexError> {
        debug_assert!(self.units.previous_code_unit().is_some_and(|u| u.is(b'n')));
        self.char_buffer.clear();
        for unit in self.units.code_units(start, self.units.offset() - 1) {
            if !unit.is(b'_') {
                self.append_code_point(unit.value())?;
            }
        }
        let digits = self.drain_char_buffer_into_atom();
        Ok(self.new_token(TokenKind::BigInt, start, TokenValue::BigInt { digits }, modifier))
    }
}

/// Value of decimal literal text, separators ignored. Correctly rounded;
/// overflows to infinity.
fn parse_decimal<U: CodeUnit>(units: &[U]) -> f64 {
    let text: String = units
        .iter()
        .filter(|unit| !unit.is(b'_'))
        .filter_map(|unit| u8::try_from(unit.value()).ok().map(char::from))
        .collect();
    text.parse().unwrap_or(f64::NAN)
}

/// Value of binary, octal, or hex digits, separators ignored.
///
/// Keeps the top 64 significant bits plus a sticky bit for anything below
/// them, so the final conversion rounds to nearest-even exactly as if every
/// digit had been kept.
fn parse_radix_integer<U: CodeUnit>(units: &[U], radix: u32) -> f64 {
    debug_assert!(matches!(radix, 2 | 8 | 16));
    let bits_per_digit = radix.trailing_zeros();

    let mut mantissa = 0u64;
    let mut significant_bits = 0u32;
    let mut dropped_bits = 0u32;
    let mut sticky = false;
    for unit in units {
        let Some(digit) = unicode::hex_digit_value(unit.value()) else {
            continue;
        };
        for shift in (0..bits_per_digit).rev() {
            let bit = (digit >> shift) & 1;
            if significant_bits == 0 && bit == 0 {
                continue;
            }
            if significant_bits < u64::BITS {
                mantissa = (mantissa << 1) | u64::from(bit);
                significant_bits += 1;
            } else {
                sticky |= bit != 0;
                dropped_bits = dropped_bits.saturating_add(1);
            }
        }
    }
    if sticky {
        mantissa |= 1;
    }

    #[allow(clippy::cast_precision_loss, reason = "rounding to f64 is the conversion")]
    let value = mantissa as f64;
    if dropped_bits == 0 {
        return value;
    }
    // Beyond 2^1024 everything is infinite.
    let exponent = i32::try_from(dropped_bits.min(2048)).unwrap_or(2048);
    value * 2f64.powi(exponent)
}
