use super::*;
use pretty_assertions::assert_eq;

#[test]
fn keyword_ranges_partition() {
    assert!(!TokenKind::Name.is_keyword());
    assert!(!TokenKind::AndAssign.is_keyword());

    assert!(TokenKind::Break.is_reserved_word());
    assert!(TokenKind::With.is_reserved_word());
    assert!(!TokenKind::Implements.is_reserved_word());

    assert!(TokenKind::Let.is_strict_reserved_word());
    assert!(TokenKind::Yield.is_strict_reserved_word());
    assert!(!TokenKind::As.is_strict_reserved_word());

    assert!(TokenKind::Target.is_contextual_keyword());
    assert!(!TokenKind::Yield.is_contextual_keyword());
}

#[test]
fn names_usable_as_identifiers() {
    assert!(TokenKind::Name.is_name_or_non_reserved_keyword());
    assert!(TokenKind::Let.is_name_or_non_reserved_keyword());
    assert!(TokenKind::Async.is_name_or_non_reserved_keyword());
    assert!(!TokenKind::If.is_name_or_non_reserved_keyword());
    assert!(!TokenKind::PrivateName.is_name_or_non_reserved_keyword());
}

#[test]
fn assignment_range() {
    assert!(TokenKind::Assign.is_assignment());
    assert!(TokenKind::CoalesceAssign.is_assignment());
    assert!(TokenKind::AndAssign.is_assignment());
    assert!(!TokenKind::Eq.is_assignment());
    assert!(!TokenKind::Break.is_assignment());
}

#[test]
fn display_names() {
    assert_eq!(TokenKind::Add.to_string(), "'+'");
    assert_eq!(TokenKind::UrshAssign.to_string(), "'>>>='");
    assert_eq!(TokenKind::InstanceOf.to_string(), "'instanceof'");
    assert_eq!(TokenKind::Name.to_string(), "identifier");
    assert!(TokenKind::TemplateHead.is_template());
    assert!(!TokenKind::String.is_template());
}

#[test]
fn token_pos_len() {
    let pos = TokenPos::new(3, 8);
    assert_eq!(pos.len(), 5);
    assert!(!pos.is_empty());
    assert!(TokenPos::new(4, 4).is_empty());
    assert_eq!(pos.to_string(), "3..8");
}

#[test]
fn payload_accessors() {
    let number = Token::new(
        TokenKind::Number,
        TokenPos::new(0, 3),
        TokenValue::Number {
            value: 1.5,
            decimal_point: DecimalPoint::HasDecimal,
        },
        Modifier::None,
    );
    assert_eq!(number.number(), Some(1.5));
    assert_eq!(number.decimal_point(), Some(DecimalPoint::HasDecimal));
    assert_eq!(number.name(), None);
    assert_eq!(number.atom(), None);

    let template = Token::new(
        TokenKind::NoSubsTemplate,
        TokenPos::new(0, 6),
        TokenValue::Template {
            cooked: None,
            invalid_escape: Some(InvalidEscape {
                offset: 2,
                kind: InvalidEscapeType::Unicode,
            }),
        },
        Modifier::None,
    );
    assert_eq!(template.atom(), None);
    assert_eq!(
        template.invalid_template_escape().map(|e| e.kind),
        Some(InvalidEscapeType::Unicode)
    );

    let name = Token::new(
        TokenKind::Name,
        TokenPos::new(0, 6),
        TokenValue::Name {
            atom: Atom::EMPTY,
            has_escapes: true,
        },
        Modifier::None,
    );
    assert!(name.name_has_escapes());
    assert_eq!(name.name(), Some(Atom::EMPTY));
}

#[test]
fn default_token_is_eof() {
    let token = Token::default();
    assert_eq!(token.kind, TokenKind::Eof);
    assert_eq!(token.value, TokenValue::None);
}
