use snafu::Snafu;

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum Error {
    #[snafu(display("XOR key must be at least one byte long"))]
    InvalidKey {},

    #[snafu(display("known-plaintext fragment is empty"))]
    EmptyFragment {},

    #[snafu(display("offset {offset} lies beyond the ciphertext ({cipher_len} bytes)"))]
    OffsetOutOfRange { offset: usize, cipher_len: usize },

    #[snafu(display("{fragment_len} byte fragment at offset {offset} overruns the ciphertext ({cipher_len} bytes)"))]
    FragmentExceedsBounds { offset: usize, fragment_len: usize, cipher_len: usize },
}

pub fn is_printable_ascii(arr: &[u8]) -> bool {
    arr.iter()
        .all(|&b| b.is_ascii_graphic() || b == b' ')
}

#[test]
fn test_is_printable_ascii() {
    assert!(is_printable_ascii(b"crypto{k3y}"));
    assert!(is_printable_ascii(b"two words"));
    assert!(!is_printable_ascii(b"\x00\x01"));
    assert!(!is_printable_ascii(b"tab\there"));
    assert!(!is_printable_ascii(&[0xff, 0xfe]));
}
