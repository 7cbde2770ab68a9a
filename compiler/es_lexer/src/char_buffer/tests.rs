use super::*;
use pretty_assertions::assert_eq;

#[test]
fn push_units_and_code_points() {
    let mut buffer = CharBuffer::default();
    assert!(buffer.push_unit(0x61).is_ok());
    assert!(buffer.push_code_point(0x1_F600).is_ok());
    assert_eq!(buffer.as_slice(), &[0x61, 0xD83D, 0xDE00]);
    buffer.clear();
    assert!(buffer.as_slice().is_empty());
}

#[test]
fn extend_transcodes_utf8() {
    let mut buffer = CharBuffer::default();
    assert!(buffer.extend_from_units("é日".as_bytes()).is_ok());
    assert_eq!(buffer.as_slice(), &[0xE9, 0x65E5]);
}

#[test]
fn grows_past_inline_capacity() {
    let mut buffer = CharBuffer::default();
    let long = vec![0x78u16; 500];
    assert!(buffer.extend_from_units(&long).is_ok());
    assert_eq!(buffer.as_slice().len(), 500);
}
