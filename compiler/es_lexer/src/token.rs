//! Token kinds, positions, and decoded payloads.
//!
//! A [`Token`] is plain `Copy` data: atoms are handles into the tokenizer's
//! [`AtomTable`](crate::AtomTable), so holding a token never borrows the
//! tokenizer. Ring-buffer slots are overwritten as scanning proceeds; a
//! consumer that needs a token past the next two `get_token` calls copies it.

use std::fmt;

use crate::atoms::Atom;
use crate::flags::RegExpFlags;

/// Token kinds, with keyword kinds in one contiguous block.
///
/// `Eol` is a pseudo-kind returned only by
/// [`peek_token_same_line`](crate::Tokenizer::peek_token_same_line); no
/// token ever carries it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    // === Special ===
    Eof,
    Eol,

    // === Names and literals ===
    Name,
    PrivateName,
    Number,
    BigInt,
    String,
    /// Template chunk ending in `${`.
    TemplateHead,
    /// Template chunk ending in the closing backtick.
    NoSubsTemplate,
    RegExp,

    // === Punctuation ===
    Semi,
    Comma,
    Hook,
    Colon,
    Dot,
    TripleDot,
    OptionalChain,
    Arrow,
    LeftBracket,
    RightBracket,
    LeftCurly,
    RightCurly,
    LeftParen,
    RightParen,

    // === Operators ===
    Increment,
    Decrement,
    Not,
    BitNot,
    Coalesce,
    Or,
    And,
    BitOr,
    BitXor,
    BitAnd,
    StrictEq,
    Eq,
    StrictNe,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Lsh,
    Rsh,
    Ursh,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,

    // === Assignment ===
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    PowAssign,
    LshAssign,
    RshAssign,
    UrshAssign,
    BitOrAssign,
    BitXorAssign,
    BitAndAssign,
    CoalesceAssign,
    OrAssign,
    AndAssign,

    // === Reserved words ===
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    Enum,
    Export,
    Extends,
    False,
    Finally,
    For,
    Function,
    If,
    Import,
    In,
    InstanceOf,
    New,
    Null,
    Return,
    Super,
    Switch,
    This,
    Throw,
    True,
    Try,
    TypeOf,
    Var,
    Void,
    While,
    With,

    // === Reserved only in strict mode code ===
    Implements,
    Interface,
    Package,
    Private,
    Protected,
    Public,
    Let,
    Static,
    Yield,

    // === Contextual keywords ===
    As,
    Async,
    Await,
    From,
    Get,
    Meta,
    Of,
    Set,
    Target,
}

impl TokenKind {
    /// Any word the reserved-word table can produce.
    pub fn is_keyword(self) -> bool {
        (self as u8) >= (TokenKind::Break as u8)
    }

    /// Reserved in all code.
    pub fn is_reserved_word(self) -> bool {
        (TokenKind::Break as u8..=TokenKind::With as u8).contains(&(self as u8))
    }

    /// Reserved only in strict mode code.
    pub fn is_strict_reserved_word(self) -> bool {
        (TokenKind::Implements as u8..=TokenKind::Yield as u8).contains(&(self as u8))
    }

    /// Has meaning in some contexts, but is an ordinary identifier elsewhere.
    pub fn is_contextual_keyword(self) -> bool {
        (self as u8) >= (TokenKind::As as u8)
    }

    /// Can this token be used where the grammar expects an identifier in
    /// sloppy mode code?
    pub fn is_name_or_non_reserved_keyword(self) -> bool {
        self == TokenKind::Name || self.is_strict_reserved_word() || self.is_contextual_keyword()
    }

    pub fn is_assignment(self) -> bool {
        (TokenKind::Assign as u8..=TokenKind::AndAssign as u8).contains(&(self as u8))
    }

    /// A template chunk of either kind.
    pub fn is_template(self) -> bool {
        matches!(self, TokenKind::TemplateHead | TokenKind::NoSubsTemplate)
    }

    /// Human-readable name for diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "end of script",
            TokenKind::Eol => "line terminator",
            TokenKind::Name => "identifier",
            TokenKind::PrivateName => "private name",
            TokenKind::Number => "numeric literal",
            TokenKind::BigInt => "BigInt literal",
            TokenKind::String => "string literal",
            TokenKind::TemplateHead => "template literal head",
            TokenKind::NoSubsTemplate => "template literal",
            TokenKind::RegExp => "regular expression literal",
            TokenKind::Semi => "';'",
            TokenKind::Comma => "','",
            TokenKind::Hook => "'?'",
            TokenKind::Colon => "':'",
            TokenKind::Dot => "'.'",
            TokenKind::TripleDot => "'...'",
            TokenKind::OptionalChain => "'?.'",
            TokenKind::Arrow => "'=>'",
            TokenKind::LeftBracket => "'['",
            TokenKind::RightBracket => "']'",
            TokenKind::LeftCurly => "'{'",
            TokenKind::RightCurly => "'}'",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::Increment => "'++'",
            TokenKind::Decrement => "'--'",
            TokenKind::Not => "'!'",
            TokenKind::BitNot => "'~'",
            TokenKind::Coalesce => "'??'",
            TokenKind::Or => "'||'",
            TokenKind::And => "'&&'",
            TokenKind::BitOr => "'|'",
            TokenKind::BitXor => "'^'",
            TokenKind::BitAnd => "'&'",
            TokenKind::StrictEq => "'==='",
            TokenKind::Eq => "'=='",
            TokenKind::StrictNe => "'!=='",
            TokenKind::Ne => "'!='",
            TokenKind::Lt => "'<'",
            TokenKind::Le => "'<='",
            TokenKind::Gt => "'>'",
            TokenKind::Ge => "'>='",
            TokenKind::Lsh => "'<<'",
            TokenKind::Rsh => "'>>'",
            TokenKind::Ursh => "'>>>'",
            TokenKind::Add => "'+'",
            TokenKind::Sub => "'-'",
            TokenKind::Mul => "'*'",
            TokenKind::Div => "'/'",
            TokenKind::Mod => "'%'",
            TokenKind::Pow => "'**'",
            TokenKind::Assign => "'='",
            TokenKind::AddAssign => "'+='",
            TokenKind::SubAssign => "'-='",
            TokenKind::MulAssign => "'*='",
            TokenKind::DivAssign => "'/='",
            TokenKind::ModAssign => "'%='",
            TokenKind::PowAssign => "'**='",
            TokenKind::LshAssign => "'<<='",
            TokenKind::RshAssign => "'>>='",
            TokenKind::UrshAssign => "'>>>='",
            TokenKind::BitOrAssign => "'|='",
            TokenKind::BitXorAssign => "'^='",
            TokenKind::BitAndAssign => "'&='",
            TokenKind::CoalesceAssign => "'??='",
            TokenKind::OrAssign => "'||='",
            TokenKind::AndAssign => "'&&='",
            TokenKind::Break => "'break'",
            TokenKind::Case => "'case'",
            TokenKind::Catch => "'catch'",
            TokenKind::Class => "'class'",
            TokenKind::Const => "'const'",
            TokenKind::Continue => "'continue'",
            TokenKind::Debugger => "'debugger'",
            TokenKind::Default => "'default'",
            TokenKind::Delete => "'delete'",
            TokenKind::Do => "'do'",
            TokenKind::Else => "'else'",
            TokenKind::Enum => "'enum'",
            TokenKind::Export => "'export'",
            TokenKind::Extends => "'extends'",
            TokenKind::False => "'false'",
            TokenKind::Finally => "'finally'",
            TokenKind::For => "'for'",
            TokenKind::Function => "'function'",
            TokenKind::If => "'if'",
            TokenKind::Import => "'import'",
            TokenKind::In => "'in'",
            TokenKind::InstanceOf => "'instanceof'",
            TokenKind::New => "'new'",
            TokenKind::Null => "'null'",
            TokenKind::Return => "'return'",
            TokenKind::Super => "'super'",
            TokenKind::Switch => "'switch'",
            TokenKind::This => "'this'",
            TokenKind::Throw => "'throw'",
            TokenKind::True => "'true'",
            TokenKind::Try => "'try'",
            TokenKind::TypeOf => "'typeof'",
            TokenKind::Var => "'var'",
            TokenKind::Void => "'void'",
            TokenKind::While => "'while'",
            TokenKind::With => "'with'",
            TokenKind::Implements => "'implements'",
            TokenKind::Interface => "'interface'",
            TokenKind::Package => "'package'",
            TokenKind::Private => "'private'",
            TokenKind::Protected => "'protected'",
            TokenKind::Public => "'public'",
            TokenKind::Let => "'let'",
            TokenKind::Static => "'static'",
            TokenKind::Yield => "'yield'",
            TokenKind::As => "'as'",
            TokenKind::Async => "'async'",
            TokenKind::Await => "'await'",
            TokenKind::From => "'from'",
            TokenKind::Get => "'get'",
            TokenKind::Meta => "'meta'",
            TokenKind::Of => "'of'",
            TokenKind::Set => "'set'",
            TokenKind::Target => "'target'",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Half-open `[begin, end)` range of absolute source offsets.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenPos {
    pub begin: u32,
    pub end: u32,
}

impl TokenPos {
    #[inline]
    pub const fn new(begin: u32, end: u32) -> Self {
        debug_assert!(begin <= end);
        TokenPos { begin, end }
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.begin
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.begin == self.end
    }
}

impl fmt::Display for TokenPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.begin, self.end)
    }
}

/// Whether a numeric literal was written with a `.`.
///
/// `1.` and `1` are the same value, but `1.toString()` is a syntax error
/// while `1..toString()` is not, so the parser needs to know.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DecimalPoint {
    NoDecimal,
    HasDecimal,
}

/// Kind of a malformed escape found inside a template literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum InvalidEscapeType {
    /// `\x` not followed by two hex digits.
    Hexadecimal,
    /// `\u` not followed by four hex digits or a braced code point.
    Unicode,
    /// `\u{...}` above U+10FFFF.
    UnicodeOverflow,
    /// `\1`..`\7`, or `\0` followed by a digit.
    Octal,
    /// `\8` or `\9`.
    EightOrNine,
}

impl fmt::Display for InvalidEscapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidEscapeType::Hexadecimal => write!(f, "malformed hexadecimal escape sequence"),
            InvalidEscapeType::Unicode => write!(f, "malformed Unicode character escape sequence"),
            InvalidEscapeType::UnicodeOverflow => {
                write!(f, "Unicode code point escape out of range")
            }
            InvalidEscapeType::Octal => write!(f, "octal escape sequence"),
            InvalidEscapeType::EightOrNine => write!(f, "\\8 or \\9 escape sequence"),
        }
    }
}

/// A malformed template escape, recorded instead of reported.
///
/// Tagged templates may contain these; the parser decides whether to report
/// one via
/// [`check_for_invalid_template_escape_error`](crate::Tokenizer::check_for_invalid_template_escape_error).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct InvalidEscape {
    pub offset: u32,
    pub kind: InvalidEscapeType,
}

/// Decoded payload, keyed by the token's kind.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub enum TokenValue {
    #[default]
    None,
    /// `Name`, `PrivateName` (without the `#`), and keywords.
    Name { atom: Atom, has_escapes: bool },
    Number { value: f64, decimal_point: DecimalPoint },
    /// Digits as written, radix prefix included, separators and `n` removed.
    BigInt { digits: Atom },
    String { atom: Atom },
    /// `cooked` is `None` when the chunk holds an invalid escape.
    Template {
        cooked: Option<Atom>,
        invalid_escape: Option<InvalidEscape>,
    },
    RegExp { pattern: Atom, flags: RegExpFlags },
}

/// How an ambiguous leading character should be scanned.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Modifier {
    /// Operator position: `/` is division.
    #[default]
    None,
    /// Operand position: `/` starts a regular expression.
    Operand,
    /// `}` closes a template substitution and continues the template.
    TemplateTail,
}

/// Permission to re-request a buffered token with a different modifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ModifierException {
    #[default]
    NoException,
    /// Scanned as `Operand`, may be replayed as `None`: the token after a
    /// `yield` with no operand, or after an arrow function with a block body.
    NoneIsOperand,
    /// Scanned as `None`, may be replayed as `Operand`: the token after an
    /// automatically inserted semicolon.
    OperandIsNone,
}

/// A scanned token.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: TokenPos,
    pub value: TokenValue,
    #[cfg(debug_assertions)]
    pub(crate) modifier: Modifier,
    #[cfg(debug_assertions)]
    pub(crate) modifier_exception: ModifierException,
}

impl Default for Token {
    fn default() -> Self {
        Token::new(TokenKind::Eof, TokenPos::default(), TokenValue::None, Modifier::None)
    }
}

impl Token {
    #[inline]
    pub(crate) fn new(
        kind: TokenKind,
        pos: TokenPos,
        value: TokenValue,
        modifier: Modifier,
    ) -> Self {
        #[cfg(not(debug_assertions))]
        let _ = modifier;
        Token {
            kind,
            pos,
            value,
            #[cfg(debug_assertions)]
            modifier,
            #[cfg(debug_assertions)]
            modifier_exception: ModifierException::NoException,
        }
    }

    /// Identifier, private name, or keyword text.
    pub fn name(&self) -> Option<Atom> {
        match self.value {
            TokenValue::Name { atom, .. } => Some(atom),
            _ => None,
        }
    }

    pub fn name_has_escapes(&self) -> bool {
        matches!(self.value, TokenValue::Name { has_escapes: true, .. })
    }

    pub fn number(&self) -> Option<f64> {
        match self.value {
            TokenValue::Number { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn decimal_point(&self) -> Option<DecimalPoint> {
        match self.value {
            TokenValue::Number { decimal_point, .. } => Some(decimal_point),
            _ => None,
        }
    }

    pub fn bigint_digits(&self) -> Option<Atom> {
        match self.value {
            TokenValue::BigInt { digits } => Some(digits),
            _ => None,
        }
    }

    /// String literal value, or the cooked value of a template chunk.
    pub fn atom(&self) -> Option<Atom> {
        match self.value {
            TokenValue::String { atom } => Some(atom),
            TokenValue::Template { cooked, .. } => cooked,
            _ => None,
        }
    }

    pub fn invalid_template_escape(&self) -> Option<InvalidEscape> {
        match self.value {
            TokenValue::Template { invalid_escape, .. } => invalid_escape,
            _ => None,
        }
    }

    pub fn reg_exp_pattern(&self) -> Option<Atom> {
        match self.value {
            TokenValue::RegExp { pattern, .. } => Some(pattern),
            _ => None,
        }
    }

    pub fn reg_exp_flags(&self) -> Option<RegExpFlags> {
        match self.value {
            TokenValue::RegExp { flags, .. } => Some(flags),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
