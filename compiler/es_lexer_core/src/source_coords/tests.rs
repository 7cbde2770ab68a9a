use super::*;
use pretty_assertions::assert_eq;

/// Build a table the way the tokenizer does: one `add` per line break,
/// treating CRLF as a single break.
fn coords_for(source: &[u8], initial_line: u32, initial_column: u32) -> SourceCoords {
    let mut coords = SourceCoords::new(initial_line, initial_column, 0);
    let mut line = initial_line;
    let mut i = 0;
    while i < source.len() {
        let c = source[i];
        i += 1;
        if c == b'\r' && source.get(i) == Some(&b'\n') {
            i += 1;
        }
        if c == b'\r' || c == b'\n' {
            line += 1;
            coords.add(line, i as u32);
        }
    }
    coords
}

/// O(n) reference: walk from the start counting breaks.
fn naive_line_and_column(
    source: &[u8],
    offset: usize,
    initial_line: u32,
    initial_column: u32,
) -> (u32, u32) {
    let mut line = initial_line;
    let mut line_start = 0;
    let mut i = 0;
    while i < offset {
        let c = source[i];
        i += 1;
        if c == b'\r' && source.get(i) == Some(&b'\n') {
            if i == offset {
                // Offset sits between CR and LF: still on the CR's line.
                break;
            }
            i += 1;
        }
        if c == b'\r' || c == b'\n' {
            line += 1;
            line_start = i;
        }
    }
    let column = (offset - line_start) as u32;
    let column = if line == initial_line {
        column + initial_column
    } else {
        column
    };
    (line, column)
}

#[test]
fn single_line() {
    let coords = coords_for(b"let x = 1;", 1, 0);
    assert_eq!(coords.line_num_and_column_index(0), (1, 0));
    assert_eq!(coords.line_num_and_column_index(4), (1, 4));
    assert_eq!(coords.line_count(), 1);
}

#[test]
fn multiple_lines() {
    let source = b"a\nbc\r\nd\re";
    let coords = coords_for(source, 1, 0);
    assert_eq!(coords.line_count(), 4);
    assert_eq!(coords.line_num_and_column_index(0), (1, 0));
    assert_eq!(coords.line_num_and_column_index(2), (2, 0));
    assert_eq!(coords.line_num_and_column_index(3), (2, 1));
    assert_eq!(coords.line_num_and_column_index(6), (3, 0));
    assert_eq!(coords.line_num_and_column_index(8), (4, 0));
}

#[test]
fn initial_line_and_column_apply_to_first_line_only() {
    let coords = coords_for(b"ab\ncd", 10, 7);
    assert_eq!(coords.line_num_and_column_index(1), (10, 8));
    assert_eq!(coords.line_num_and_column_index(4), (11, 1));
    assert_eq!(coords.initial_line_num(), 10);
    assert_eq!(coords.initial_column(), 7);
}

#[test]
fn nonzero_initial_offset() {
    let mut coords = SourceCoords::new(1, 0, 100);
    coords.add(2, 105);
    assert_eq!(coords.line_num_and_column_index(103), (1, 3));
    assert_eq!(coords.line_num_and_column_index(107), (2, 2));
}

#[test]
fn re_adding_a_known_line_is_a_no_op() {
    let mut coords = SourceCoords::new(1, 0, 0);
    coords.add(2, 4);
    coords.add(3, 9);
    coords.add(2, 4);
    assert_eq!(coords.line_count(), 3);
    assert_eq!(coords.line_num(8), 2);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "known line rediscovered at a different offset")]
fn re_adding_at_a_different_offset_panics() {
    let mut coords = SourceCoords::new(1, 0, 0);
    coords.add(2, 4);
    coords.add(3, 9);
    coords.add(2, 5);
}

#[test]
fn fill_appends_only_new_lines() {
    let mut short = SourceCoords::new(1, 0, 0);
    short.add(2, 3);

    let mut long = SourceCoords::new(1, 0, 0);
    long.add(2, 3);
    long.add(3, 8);
    long.add(4, 12);

    short.fill(&long);
    assert_eq!(short.line_count(), 4);
    assert_eq!(short.line_num(10), 3);
    assert_eq!(short.line_num(12), 4);

    // Filling from a shorter table leaves the longer one alone.
    let mut other = SourceCoords::new(1, 0, 0);
    other.add(2, 3);
    long.fill(&other);
    assert_eq!(long.line_count(), 4);
}

#[test]
fn lookups_in_any_order() {
    let source = b"a\nb\nc\nd\ne\nf\ng\nh";
    let coords = coords_for(source, 1, 0);
    for &offset in &[14, 0, 8, 2, 12, 4, 6, 10, 0, 14] {
        assert_eq!(
            coords.line_num(offset),
            u32::from(offset as u8 / 2) + 1,
            "offset {offset}"
        );
    }
}

#[test]
fn is_on_this_line() {
    let coords = coords_for(b"ab\ncd\nef", 1, 0);
    assert!(coords.is_on_this_line(0, 1));
    assert!(coords.is_on_this_line(2, 1));
    assert!(!coords.is_on_this_line(3, 1));
    assert!(coords.is_on_this_line(4, 2));
    assert!(coords.is_on_this_line(7, 3));
    assert!(!coords.is_on_this_line(7, 4));
    assert!(!coords.is_on_this_line(0, 0));
}

mod proptest_coords {
    #![allow(
        clippy::disallowed_types,
        reason = "proptest macros internally use Arc"
    )]

    use super::*;
    use proptest::prelude::*;

    fn source_bytes() -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'x'), Just(b' '), Just(b'\n'), Just(b'\r')],
            0..300,
        )
    }

    proptest! {
        #[test]
        fn matches_naive_scan_forward(
            source in source_bytes(),
            line in 1u32..1000,
            column in 0u32..100,
        ) {
            let coords = coords_for(&source, line, column);
            for offset in 0..=source.len() {
                prop_assert_eq!(
                    coords.line_num_and_column_index(offset as u32),
                    naive_line_and_column(&source, offset, line, column)
                );
            }
        }

        #[test]
        fn matches_naive_scan_random_order(
            source in source_bytes(),
            picks in proptest::collection::vec(any::<prop::sample::Index>(), 1..50),
        ) {
            let coords = coords_for(&source, 1, 0);
            for pick in picks {
                let offset = pick.index(source.len() + 1);
                prop_assert_eq!(
                    coords.line_num_and_column_index(offset as u32),
                    naive_line_and_column(&source, offset, 1, 0)
                );
            }
        }
    }
}
