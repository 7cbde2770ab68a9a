//! The scanning state machine and its token ring buffer.
//!
//! A [`Tokenizer`] owns one cursor over the source and one line table, and
//! hands tokens to a driving parser on demand. The parser decides how
//! context-sensitive characters scan by passing a [`Modifier`] with each
//! request: `/` is division after an operand and a regular expression where
//! an operand is expected.
//!
//! # Ring buffer
//!
//! Four token slots hold the current token plus up to two tokens of
//! lookahead. `peek_token` scans ahead and pushes the token back; the next
//! `get_token` replays it without scanning. A replayed token keeps the
//! modifier it was scanned with, so debug builds check that the replaying
//! request agrees (see [`ModifierException`] for the two sanctioned
//! disagreements).
//!
//! # Errors
//!
//! Every scanning failure leaves through one exit that records a
//! diagnostic, sets the error flag, and poisons the cursor. The tokenizer
//! never resynchronizes: after an `Err` the caller stops asking for tokens,
//! or seeks back to a position saved before the error.

mod error_context;
mod ident;
mod number;
mod scan;
mod string;

use std::rc::Rc;

use tracing::{debug, trace};

use es_diagnostic::{Diagnostic, DiagnosticQueue, Severity};
use es_lexer_core::{CodeUnit, SourceCoords, SourceUnits};

use crate::atoms::{Atom, AtomTable};
use crate::char_buffer::CharBuffer;
use crate::flags::TokenStreamFlags;
use crate::lex_error::{LexError, LexErrorKind};
use crate::options::{CompileOptions, StrictModeGetter};
use crate::token::{
    InvalidEscape, Modifier, ModifierException, Token, TokenKind, TokenPos, TokenValue,
};

const NTOKENS: usize = 4;
const NTOKENS_MASK: usize = NTOKENS - 1;
/// Tokens that may be scanned ahead of the current one.
pub const MAX_LOOKAHEAD: usize = 2;

/// The unit as an ASCII byte, or `None` if it is not ASCII.
#[inline]
fn as_ascii<U: CodeUnit>(unit: U) -> Option<u8> {
    if unit.is_ascii() {
        u8::try_from(unit.value()).ok()
    } else {
        None
    }
}

/// Saved tokenizer state, restored by [`Tokenizer::seek`].
///
/// Atoms in the saved tokens belong to the table of the tokenizer that took
/// the snapshot.
#[derive(Copy, Clone, Debug)]
pub struct TokenStreamPosition {
    offset: u32,
    flags: TokenStreamFlags,
    lineno: u32,
    linebase: u32,
    prev_linebase: Option<u32>,
    current_token: Token,
    lookahead: usize,
    lookahead_tokens: [Token; MAX_LOOKAHEAD],
}

impl TokenStreamPosition {
    /// Source offset the tokenizer will resume scanning from.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn current_token(&self) -> &Token {
        &self.current_token
    }
}

/// Tokenizer over a UTF-8 (`U = u8`) or UTF-16 (`U = u16`) source.
pub struct Tokenizer<'src, U: CodeUnit> {
    options: CompileOptions,
    units: SourceUnits<'src, U>,
    coords: SourceCoords,

    tokens: [Token; NTOKENS],
    /// Slot of the current token.
    cursor: usize,
    /// Buffered tokens after the current one.
    lookahead: usize,

    /// Line the cursor is on.
    lineno: u32,
    /// Offset where line `lineno` starts.
    linebase: u32,
    /// Start of the previous line, once there is one.
    prev_linebase: Option<u32>,
    flags: TokenStreamFlags,

    char_buffer: CharBuffer,
    atoms: AtomTable,
    display_url: Option<String>,
    source_map_url: Option<String>,
    strict_mode_getter: Option<Rc<dyn StrictModeGetter>>,
    diagnostics: DiagnosticQueue,
}

impl<'src, U: CodeUnit> Tokenizer<'src, U> {
    /// Tokenizer over `units`, whose first unit sits at `options.offset`.
    pub fn new(options: CompileOptions, units: &'src [U]) -> Self {
        let coords = SourceCoords::new(options.line, options.column, options.offset);
        Tokenizer {
            units: SourceUnits::new(units, options.offset),
            coords,
            tokens: [Token::default(); NTOKENS],
            cursor: 0,
            lookahead: 0,
            lineno: options.line,
            linebase: options.offset,
            prev_linebase: None,
            flags: TokenStreamFlags::empty(),
            char_buffer: CharBuffer::default(),
            atoms: AtomTable::new(),
            display_url: None,
            source_map_url: None,
            strict_mode_getter: None,
            diagnostics: DiagnosticQueue::new(),
            options,
        }
    }

    /// Consult `getter` whenever legacy octal syntax is found.
    #[must_use]
    pub fn with_strict_mode_getter(mut self, getter: Rc<dyn StrictModeGetter>) -> Self {
        self.strict_mode_getter = Some(getter);
        self
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    // === Ring buffer ===

    #[inline]
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.cursor]
    }

    #[inline]
    fn next_token(&self) -> &Token {
        debug_assert!(self.lookahead > 0);
        &self.tokens[(self.cursor + 1) & NTOKENS_MASK]
    }

    #[inline]
    fn advance_cursor(&mut self) {
        self.cursor = (self.cursor + 1) & NTOKENS_MASK;
    }

    #[inline]
    fn retract_cursor(&mut self) {
        self.cursor = (self.cursor + NTOKENS_MASK) & NTOKENS_MASK;
    }

    /// Advance to the next token and return its kind.
    pub fn get_token(&mut self, modifier: Modifier) -> Result<TokenKind, LexError> {
        if self.lookahead > 0 {
            self.lookahead -= 1;
            self.advance_cursor();
            let token = *self.current_token();
            verify_consistent_modifier(modifier, &token);
            trace!(kind = %token.kind, begin = token.pos.begin, "replay");
            return Ok(token.kind);
        }
        self.get_token_internal(modifier)
    }

    /// Kind of the next token, without advancing.
    pub fn peek_token(&mut self, modifier: Modifier) -> Result<TokenKind, LexError> {
        if self.lookahead > 0 {
            let next = *self.next_token();
            verify_consistent_modifier(modifier, &next);
            return Ok(next.kind);
        }
        let kind = self.get_token_internal(modifier)?;
        self.unget_token();
        Ok(kind)
    }

    /// Position of the next token, without advancing.
    pub fn peek_token_pos(&mut self, modifier: Modifier) -> Result<TokenPos, LexError> {
        self.peek_token(modifier)?;
        Ok(self.next_token().pos)
    }

    /// Like [`peek_token`](Self::peek_token), but returns
    /// [`TokenKind::Eol`] when a line break separates the current token from
    /// the next one.
    pub fn peek_token_same_line(&mut self, modifier: Modifier) -> Result<TokenKind, LexError> {
        let current_end = self.current_token().pos.end;

        // The cursor is past the next token; if the current token ends on
        // the cursor's line, so does everything in between.
        if self.lookahead > 0 && self.coords.is_on_this_line(current_end, self.lineno) {
            let next = *self.next_token();
            verify_consistent_modifier(modifier, &next);
            return Ok(next.kind);
        }

        let kind = self.peek_token(modifier)?;
        let next_begin = self.next_token().pos.begin;
        if self.coords.line_num(current_end) == self.coords.line_num(next_begin) {
            Ok(kind)
        } else {
            Ok(TokenKind::Eol)
        }
    }

    /// Consume the next token if it is `kind`.
    pub fn match_token(&mut self, kind: TokenKind, modifier: Modifier) -> Result<bool, LexError> {
        if self.peek_token(modifier)? != kind {
            return Ok(false);
        }
        self.get_token(modifier)?;
        Ok(true)
    }

    /// Consume a next token the caller has already peeked.
    pub fn consume_known_token(
        &mut self,
        kind: TokenKind,
        modifier: Modifier,
    ) -> Result<(), LexError> {
        let matched = self.match_token(kind, modifier)?;
        debug_assert!(matched, "consume_known_token({kind}) found something else");
        Ok(())
    }

    /// Push the current token back; the previous token becomes current.
    pub fn unget_token(&mut self) {
        debug_assert!(self.lookahead < MAX_LOOKAHEAD, "too many tokens ungotten");
        self.lookahead += 1;
        self.retract_cursor();
    }

    /// Allow the buffered next token to be re-requested with a modifier
    /// other than the one it was scanned with. Checked in debug builds only.
    pub fn add_modifier_exception(&mut self, exception: ModifierException) {
        #[cfg(debug_assertions)]
        {
            assert!(self.lookahead > 0, "modifier exception without a buffered token");
            let next = &mut self.tokens[(self.cursor + 1) & NTOKENS_MASK];

            // The token after a yield with no operand already allows
            // replay as an operator; a later automatic semicolon may add
            // the reverse, which is already covered.
            if next.modifier_exception == ModifierException::NoneIsOperand {
                assert_eq!(exception, ModifierException::OperandIsNone);
                assert_ne!(next.kind, TokenKind::RegExp, "token is ambiguous without a modifier");
                return;
            }

            assert_eq!(
                next.modifier_exception,
                ModifierException::NoException,
                "token already has a modifier exception"
            );
            match exception {
                ModifierException::NoneIsOperand => {
                    assert_eq!(next.modifier, Modifier::Operand);
                    assert_ne!(
                        next.kind,
                        TokenKind::RegExp,
                        "token is ambiguous without a modifier"
                    );
                }
                ModifierException::OperandIsNone => {
                    assert_eq!(next.modifier, Modifier::None);
                    assert!(
                        !matches!(next.kind, TokenKind::Div | TokenKind::DivAssign),
                        "token is ambiguous without a modifier"
                    );
                }
                ModifierException::NoException => panic!("NoException is not an exception"),
            }
            next.modifier_exception = exception;
        }
        #[cfg(not(debug_assertions))]
        let _ = exception;
    }

    // === Snapshots ===

    /// Capture the full scanning state.
    pub fn position(&self) -> TokenStreamPosition {
        let mut lookahead_tokens = [Token::default(); MAX_LOOKAHEAD];
        for (i, slot) in lookahead_tokens.iter_mut().enumerate().take(self.lookahead) {
            *slot = self.tokens[(self.cursor + 1 + i) & NTOKENS_MASK];
        }
        TokenStreamPosition {
            offset: self.units.raw_offset(),
            flags: self.flags,
            lineno: self.lineno,
            linebase: self.linebase,
            prev_linebase: self.prev_linebase,
            current_token: *self.current_token(),
            lookahead: self.lookahead,
            lookahead_tokens,
        }
    }

    /// Restore a state captured by [`position`](Self::position). Lines
    /// discovered since then stay in the line table.
    pub fn seek(&mut self, pos: &TokenStreamPosition) {
        self.units.set_offset(pos.offset);
        self.flags = pos.flags;
        self.lineno = pos.lineno;
        self.linebase = pos.linebase;
        self.prev_linebase = pos.prev_linebase;
        self.lookahead = pos.lookahead;
        self.tokens[self.cursor] = pos.current_token;
        for (i, token) in pos.lookahead_tokens.iter().enumerate().take(pos.lookahead) {
            self.tokens[(self.cursor + 1 + i) & NTOKENS_MASK] = *token;
        }
        debug!(offset = pos.offset, lookahead = pos.lookahead, "seek");
    }

    /// Seek to a position taken by another tokenizer over the same source,
    /// adopting the lines it discovered.
    pub fn seek_and_fill(&mut self, pos: &TokenStreamPosition, other: &SourceCoords) {
        self.coords.fill(other);
        self.seek(pos);
    }

    pub fn source_coords(&self) -> &SourceCoords {
        &self.coords
    }

    // === Current token ===

    pub fn name_has_escapes(&self) -> bool {
        self.current_token().name_has_escapes()
    }

    /// Report the current template token's deferred escape error, if it has
    /// one. Parsers call this for untagged templates.
    pub fn check_for_invalid_template_escape_error(&mut self) -> Result<(), LexError> {
        let Some(InvalidEscape { offset, kind }) = self.current_token().invalid_template_escape()
        else {
            return Ok(());
        };
        let kind = LexErrorKind::InvalidTemplateEscape(kind);
        self.report(Severity::Error, &kind, offset);
        self.flags.insert(TokenStreamFlags::HAD_ERROR);
        Err(LexError { kind, offset })
    }

    // === State ===

    /// Line the cursor is on.
    pub fn line_num(&self) -> u32 {
        self.lineno
    }

    pub fn is_eof(&self) -> bool {
        self.flags.contains(TokenStreamFlags::IS_EOF)
    }

    pub fn had_error(&self) -> bool {
        self.flags.contains(TokenStreamFlags::HAD_ERROR)
    }

    pub fn saw_octal_escape(&self) -> bool {
        self.flags.contains(TokenStreamFlags::SAW_OCTAL_ESCAPE)
    }

    pub fn saw_eight_or_nine_escape(&self) -> bool {
        self.flags.contains(TokenStreamFlags::SAW_EIGHT_OR_NINE_ESCAPE)
    }

    /// Some number was written `017` or `08`. A parser that later sees a
    /// `"use strict"` directive uses this to reject earlier directives.
    pub fn saw_deprecated_octal_literal(&self) -> bool {
        self.flags.contains(TokenStreamFlags::SAW_DEPRECATED_OCTAL_LITERAL)
    }

    /// URL from the last `//# sourceURL=` directive.
    pub fn display_url(&self) -> Option<&str> {
        self.display_url.as_deref()
    }

    /// URL from the last `//# sourceMappingURL=` directive.
    pub fn source_map_url(&self) -> Option<&str> {
        self.source_map_url.as_deref()
    }

    pub fn diagnostics(&self) -> &DiagnosticQueue {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    pub fn atoms(&self) -> &AtomTable {
        &self.atoms
    }

    pub fn into_atoms(self) -> AtomTable {
        self.atoms
    }

    // === Scanning support ===

    fn strict_mode(&self) -> bool {
        self.options.force_strict_mode
            || self
                .strict_mode_getter
                .as_ref()
                .is_some_and(|getter| getter.strict_mode())
    }

    /// Write a freshly scanned token into the next slot.
    fn new_token(
        &mut self,
        kind: TokenKind,
        begin: u32,
        value: TokenValue,
        modifier: Modifier,
    ) -> TokenKind {
        let end = self.units.offset();
        self.advance_cursor();
        self.tokens[self.cursor] = Token::new(kind, TokenPos::new(begin, end), value, modifier);
        self.flags.insert(TokenStreamFlags::IS_DIRTY_LINE);
        trace!(%kind, begin, end, "scan");
        kind
    }

    /// The one exit for a failed scan.
    fn bad_token(&mut self, kind: LexErrorKind, offset: u32) -> LexError {
        self.report(Severity::Error, &kind, offset);
        self.flags.insert(TokenStreamFlags::HAD_ERROR);
        self.units.poison();
        LexError { kind, offset }
    }

    /// [`bad_token`](Self::bad_token) at the cursor.
    fn bad_token_here(&mut self, kind: LexErrorKind) -> LexError {
        let offset = self.units.offset();
        self.bad_token(kind, offset)
    }

    /// Report a warning, or fail if warnings are errors.
    fn warning(&mut self, kind: LexErrorKind, offset: u32) -> Result<(), LexError> {
        if self.options.werror {
            return Err(self.bad_token(kind, offset));
        }
        self.report(Severity::Warning, &kind, offset);
        Ok(())
    }

    /// Fail in strict mode code, warn elsewhere.
    fn strict_mode_error(&mut self, kind: LexErrorKind, offset: u32) -> Result<(), LexError> {
        if self.strict_mode() {
            return Err(self.bad_token(kind, offset));
        }
        self.warning(kind, offset)
    }

    fn update_line_info_for_eol(&mut self) {
        self.prev_linebase = Some(self.linebase);
        self.linebase = self.units.offset();
        self.lineno += 1;
        self.coords.add(self.lineno, self.linebase);
    }

    #[inline]
    fn update_flags_for_eol(&mut self) {
        self.flags.remove(TokenStreamFlags::IS_DIRTY_LINE);
    }

    /// Step back over `unit` unless it marks the end of input.
    #[inline]
    fn unget_unit(&mut self, unit: Option<U>) {
        if unit.is_some() {
            self.units.unget_code_unit();
        }
    }

    /// Decode the rest of a non-ASCII code point whose `lead` was just
    /// consumed. U+2028 and U+2029 come back as-is.
    fn decode_non_ascii(&mut self, lead: U) -> Result<u32, LexError> {
        match self.units.get_non_ascii_code_point(lead) {
            Ok(code_point) => Ok(code_point),
            Err(error) => Err(self.bad_token_here(LexErrorKind::Encoding(error))),
        }
    }

    /// Like [`decode_non_ascii`](Self::decode_non_ascii), but U+2028 and
    /// U+2029 end the line and come back as `\n`.
    fn get_non_ascii_code_point(&mut self, lead: U) -> Result<u32, LexError> {
        let code_point = self.decode_non_ascii(lead)?;
        if matches!(
            code_point,
            es_lexer_core::unicode::LINE_SEPARATOR | es_lexer_core::unicode::PARA_SEPARATOR
        ) {
            self.update_line_info_for_eol();
            return Ok(u32::from(b'\n'));
        }
        Ok(code_point)
    }

    fn append_code_point(&mut self, code_point: u32) -> Result<(), LexError> {
        if self.char_buffer.push_code_point(code_point).is_err() {
            return Err(self.bad_token_here(LexErrorKind::OutOfMemory));
        }
        Ok(())
    }

    fn drain_char_buffer_into_atom(&mut self) -> Atom {
        let atom = self.atoms.intern(self.char_buffer.as_slice());
        self.char_buffer.clear();
        atom
    }

    /// Intern escape-free source text.
    fn atomize_source(&mut self, units: &[U]) -> Result<Atom, LexError> {
        self.char_buffer.clear();
        if self.char_buffer.extend_from_units(units).is_err() {
            return Err(self.bad_token_here(LexErrorKind::OutOfMemory));
        }
        Ok(self.drain_char_buffer_into_atom())
    }
}

/// Check that a replayed token is requested the way it was scanned.
#[cfg(debug_assertions)]
fn verify_consistent_modifier(modifier: Modifier, token: &Token) {
    let consistent = modifier == token.modifier
        || (token.modifier_exception == ModifierException::OperandIsNone
            && modifier == Modifier::Operand
            && token.modifier == Modifier::None)
        || (token.modifier_exception == ModifierException::NoneIsOperand
            && modifier == Modifier::None
            && token.modifier == Modifier::Operand);
    assert!(
        consistent,
        "{} was scanned with modifier {:?} but requested with {modifier:?}",
        token.kind, token.modifier
    );
}

#[cfg(not(debug_assertions))]
#[inline]
fn verify_consistent_modifier(_modifier: Modifier, _token: &Token) {}
