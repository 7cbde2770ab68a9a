use super::*;
use pretty_assertions::assert_eq;

fn lookup_utf16(word: &str) -> Option<TokenKind> {
    let units: Vec<u16> = word.encode_utf16().collect();
    find_reserved_word(&units)
}

#[test]
fn finds_every_reserved_word_in_both_encodings() {
    for &(word, kind) in RESERVED_WORDS {
        assert_eq!(find_reserved_word(word.as_bytes()), Some(kind), "{word}");
        assert_eq!(lookup_utf16(word), Some(kind), "{word}");
        assert!(kind.is_keyword(), "{word}");
    }
}

#[test]
fn length_bounds_match_table() {
    let shortest = RESERVED_WORDS.iter().map(|(w, _)| w.len()).min();
    let longest = RESERVED_WORDS.iter().map(|(w, _)| w.len()).max();
    assert_eq!(shortest, Some(MIN_LENGTH));
    assert_eq!(longest, Some(MAX_LENGTH));
}

#[test]
fn rejects_non_keywords() {
    for word in ["x", "If", "iff", "instanceofx", "undefined", "constructor", "ǐf"] {
        assert_eq!(find_reserved_word(word.as_bytes()), None, "{word}");
        assert_eq!(lookup_utf16(word), None, "{word}");
    }
}

#[test]
fn init_is_idempotent() {
    init_reserved_words();
    init_reserved_words();
    assert_eq!(find_reserved_word(b"while"), Some(TokenKind::While));
}

#[test]
fn lookup_from_many_threads() {
    init_reserved_words();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| find_reserved_word(b"yield")))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().ok().flatten(), Some(TokenKind::Yield));
    }
}
