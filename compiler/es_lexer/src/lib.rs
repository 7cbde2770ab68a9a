//! ECMAScript tokenizer over UTF-8 or UTF-16 source.
//!
//! The tokenizer is pull-based: a parser asks for one token at a time and
//! says, through a [`Modifier`], whether an operand or an operator may come
//! next. That decides how `/` and `}` scan.
//!
//! ```text
//! let mut tokenizer = Utf8Tokenizer::new(CompileOptions::default(), b"x = /a/g");
//! tokenizer.get_token(Modifier::None)?;     // Name
//! tokenizer.get_token(Modifier::None)?;     // Assign
//! tokenizer.get_token(Modifier::Operand)?;  // RegExp
//! ```
//!
//! Up to two tokens of lookahead are buffered; [`Tokenizer::position`] and
//! [`Tokenizer::seek`] snapshot and rewind the whole scanning state.
//! Problems are queued as [`Diagnostic`]s, with the fatal ones also
//! returned as a [`LexError`].

mod atoms;
mod char_buffer;
mod char_class;
mod flags;
mod keywords;
mod lex_error;
mod options;
mod token;
mod tokenizer;

pub use atoms::{Atom, AtomTable};
pub use flags::{RegExpFlags, TokenStreamFlags};
pub use keywords::init_reserved_words;
pub use lex_error::{LexError, LexErrorCategory, LexErrorKind};
pub use options::{CompileOptions, StrictModeGetter};
pub use token::{
    DecimalPoint, InvalidEscape, InvalidEscapeType, Modifier, ModifierException, Token, TokenKind,
    TokenPos, TokenValue,
};
pub use tokenizer::{TokenStreamPosition, Tokenizer, MAX_LOOKAHEAD};

pub use es_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode, Severity};
pub use es_lexer_core::{CodeUnit, Encoding, EncodingError, SourceCoords};

/// Tokenizer over UTF-8 bytes.
pub type Utf8Tokenizer<'src> = Tokenizer<'src, u8>;

/// Tokenizer over UTF-16 code units.
pub type Utf16Tokenizer<'src> = Tokenizer<'src, u16>;
