//! Tokenize a whole source without a parser.
//!
//! A parser knows whether an operand or an operator comes next. This driver
//! guesses from the previous token instead, and tracks open template
//! substitutions so the `}` closing one is rescanned as a template
//! continuation.

use tracing::debug;

use es_lexer::{CodeUnit, CompileOptions, Diagnostic, Modifier, TokenKind, TokenPos, Tokenizer};

/// One scanned token, detached from the tokenizer's atom table.
#[derive(Clone, Debug, PartialEq)]
pub struct LexedToken {
    pub kind: TokenKind,
    pub pos: TokenPos,
    /// Decoded payload: names, literal values, regexp source.
    pub text: Option<String>,
}

/// Everything one tokenizer run produced.
#[derive(Debug, Default)]
pub struct LexOutput {
    /// Tokens up to `Eof`, or up to the first error.
    pub tokens: Vec<LexedToken>,
    pub diagnostics: Vec<Diagnostic>,
    pub display_url: Option<String>,
    pub source_map_url: Option<String>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }
}

/// Can an operator follow this token?
///
/// Strict-reserved and contextual keywords count as identifiers. `)` and
/// `}` are assumed to close an expression, so `if (x) /re/` misreads.
pub fn ends_operand(kind: TokenKind) -> bool {
    use TokenKind::{
        BigInt, Decrement, False, Increment, Name, NoSubsTemplate, Null, Number, PrivateName,
        RegExp, RightBracket, RightCurly, RightParen, String, Super, This, True,
    };
    matches!(
        kind,
        Name | PrivateName
            | Number
            | BigInt
            | String
            | NoSubsTemplate
            | RegExp
            | RightParen
            | RightBracket
            | RightCurly
            | Increment
            | Decrement
            | This
            | Super
            | True
            | False
            | Null
    ) || kind.is_strict_reserved_word()
        || kind.is_contextual_keyword()
}

/// An open `${` awaiting its `}`.
struct Substitution {
    /// Unclosed `{` inside the substitution.
    depth: u32,
    /// The template follows an operand, so bad escapes are allowed.
    tagged: bool,
}

/// Tokenize `units` to the end or to the first error.
#[tracing::instrument(level = "debug", skip_all)]
pub fn lex_source<U: CodeUnit>(units: &[U], options: CompileOptions) -> LexOutput {
    let mut t = Tokenizer::new(options, units);
    let mut tokens = Vec::new();
    let mut substitutions: Vec<Substitution> = Vec::new();
    let mut modifier = Modifier::Operand;

    loop {
        let closes_substitution = substitutions.last().is_some_and(|s| s.depth == 0);
        let snapshot = closes_substitution.then(|| t.position());

        let Ok(mut kind) = t.get_token(modifier) else {
            break;
        };
        let mut tagged = modifier == Modifier::None;

        if kind == TokenKind::RightCurly {
            // Only a `}` at depth zero closes the substitution; inner ones
            // are plain braces.
            if let Some(snapshot) = snapshot {
                if let Some(substitution) = substitutions.pop() {
                    t.seek(&snapshot);
                    tagged = substitution.tagged;
                    match t.get_token(Modifier::TemplateTail) {
                        Ok(continued) => kind = continued,
                        Err(_) => break,
                    }
                }
            }
        }

        match kind {
            TokenKind::TemplateHead => substitutions.push(Substitution { depth: 0, tagged }),
            TokenKind::LeftCurly => {
                if let Some(substitution) = substitutions.last_mut() {
                    substitution.depth += 1;
                }
            }
            TokenKind::RightCurly => {
                if let Some(substitution) = substitutions.last_mut() {
                    substitution.depth = substitution.depth.saturating_sub(1);
                }
            }
            _ => {}
        }

        if kind.is_template() && !tagged && t.check_for_invalid_template_escape_error().is_err() {
            break;
        }

        tokens.push(describe(&t, kind));
        if kind == TokenKind::Eof {
            break;
        }
        modifier = if ends_operand(kind) {
            Modifier::None
        } else {
            Modifier::Operand
        };
    }

    debug!(tokens = tokens.len(), had_error = t.had_error(), "lexed source");
    LexOutput {
        tokens,
        display_url: t.display_url().map(str::to_owned),
        source_map_url: t.source_map_url().map(str::to_owned),
        diagnostics: t.take_diagnostics(),
    }
}

fn describe<U: CodeUnit>(t: &Tokenizer<'_, U>, kind: TokenKind) -> LexedToken {
    let token = t.current_token();
    let atoms = t.atoms();
    let text = match kind {
        TokenKind::Number => token.number().map(|value| value.to_string()),
        TokenKind::BigInt => token
            .bigint_digits()
            .map(|digits| format!("{}n", atoms.to_string_lossy(digits))),
        TokenKind::RegExp => token
            .reg_exp_pattern()
            .zip(token.reg_exp_flags())
            .map(|(pattern, flags)| format!("/{}/{flags}", atoms.to_string_lossy(pattern))),
        _ => token
            .name()
            .or_else(|| token.atom())
            .map(|atom| atoms.to_string_lossy(atom)),
    };
    LexedToken {
        kind,
        pos: token.pos,
        text,
    }
}
