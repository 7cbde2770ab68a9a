//! Classification of the first code unit of a token.

use crate::TokenKind;

/// What an ASCII unit at a token boundary starts.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum FirstCharKind {
    /// A punctuator that is never the prefix of a longer one.
    OneChar(TokenKind),
    /// Whitespace other than line terminators.
    Space,
    /// `IdentifierStart`.
    Ident,
    /// `1` through `9`.
    Dec,
    /// A quote or backtick.
    String,
    /// LF or CR.
    Eol,
    /// `0`, which may begin a radix prefix.
    ZeroDigit,
    /// Everything else: operators, `.`, `\`, `#`, and illegal characters.
    Other,
}

/// Indexed by ASCII code unit.
pub(crate) static FIRST_CHAR_KINDS: [FirstCharKind; 128] = build_table();

const fn build_table() -> [FirstCharKind; 128] {
    let mut table = [FirstCharKind::Other; 128];

    table[b'(' as usize] = FirstCharKind::OneChar(TokenKind::LeftParen);
    table[b')' as usize] = FirstCharKind::OneChar(TokenKind::RightParen);
    table[b',' as usize] = FirstCharKind::OneChar(TokenKind::Comma);
    table[b':' as usize] = FirstCharKind::OneChar(TokenKind::Colon);
    table[b';' as usize] = FirstCharKind::OneChar(TokenKind::Semi);
    table[b'[' as usize] = FirstCharKind::OneChar(TokenKind::LeftBracket);
    table[b']' as usize] = FirstCharKind::OneChar(TokenKind::RightBracket);
    table[b'{' as usize] = FirstCharKind::OneChar(TokenKind::LeftCurly);
    table[b'}' as usize] = FirstCharKind::OneChar(TokenKind::RightCurly);
    table[b'~' as usize] = FirstCharKind::OneChar(TokenKind::BitNot);

    table[b'\t' as usize] = FirstCharKind::Space;
    table[0x0B] = FirstCharKind::Space;
    table[0x0C] = FirstCharKind::Space;
    table[b' ' as usize] = FirstCharKind::Space;

    table[b'\n' as usize] = FirstCharKind::Eol;
    table[b'\r' as usize] = FirstCharKind::Eol;

    table[b'\'' as usize] = FirstCharKind::String;
    table[b'"' as usize] = FirstCharKind::String;
    table[b'`' as usize] = FirstCharKind::String;

    table[b'0' as usize] = FirstCharKind::ZeroDigit;
    let mut c = b'1';
    while c <= b'9' {
        table[c as usize] = FirstCharKind::Dec;
        c += 1;
    }

    table[b'$' as usize] = FirstCharKind::Ident;
    table[b'_' as usize] = FirstCharKind::Ident;
    let mut c = b'a';
    while c <= b'z' {
        table[c as usize] = FirstCharKind::Ident;
        table[(c - b'a' + b'A') as usize] = FirstCharKind::Ident;
        c += 1;
    }

    table
}
