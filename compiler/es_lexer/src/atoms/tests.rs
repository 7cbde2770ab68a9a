use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_is_preinterned() {
    let mut table = AtomTable::new();
    assert_eq!(table.intern(&[]), Atom::EMPTY);
    assert_eq!(table.len(), 1);
    assert_eq!(table.to_string_lossy(Atom::EMPTY), "");
}

#[test]
fn interning_deduplicates() {
    let mut table = AtomTable::new();
    let a = table.intern_str("foo");
    let b = table.intern_str("bar");
    let c = table.intern_str("foo");
    assert_eq!(a, c);
    assert_ne!(a, b);
    assert_eq!(table.to_string_lossy(b), "bar");
    assert_eq!(table.get(&[0x66, 0x6F, 0x6F]), Some(a));
    assert_eq!(table.get(&[0x7A]), None);
}

#[test]
fn lone_surrogates_survive_interning() {
    let mut table = AtomTable::new();
    let atom = table.intern(&[0x61, 0xD800]);
    assert_eq!(table.units(atom), &[0x61, 0xD800]);
    assert_eq!(table.to_string_lossy(atom), "a\u{FFFD}");
}
