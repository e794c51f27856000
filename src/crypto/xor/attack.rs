use itertools::Itertools;

use crate::crypto::{common, xor};
use crate::util::Error;

/// Longest repeating-key period the known-plaintext attack searches for.
pub const MAX_KEY_PERIOD: usize = 40;

/// One trial of the single-byte brute force.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub score: u32,
    pub key: u8,
    pub plaintext: Vec<u8>,
}

// Smallest prefix of `partial` that tiles to the whole of it, scanning
// periods in ascending order so the minimal one wins. A fragment spanning
// several repetitions of a short key collapses to that key. When nothing
// up to `max_len` tiles, the fragment itself is the best key we have.
pub fn detect_repeating_key(partial: &[u8], max_len: usize) -> Vec<u8> {
    for l in 1..=std::cmp::min(partial.len(), max_len) {
        if partial.iter()
            .zip(partial[..l].iter().cycle())
            .all(|(x,y)| x == y) {
            return partial[..l].to_vec();
        }
    }
    partial.to_vec()
}

#[test]
fn test_detect_repeating_key() {
    assert_eq!(b"a".to_vec(),      detect_repeating_key(b"aaaa", MAX_KEY_PERIOD));
    assert_eq!(b"abc".to_vec(),    detect_repeating_key(b"abcabc", MAX_KEY_PERIOD));
    // partial repetitions still collapse
    assert_eq!(b"abc".to_vec(),    detect_repeating_key(b"abcabcab", MAX_KEY_PERIOD));
    // no shorter period: the whole fragment is its own minimal period
    assert_eq!(b"abcd".to_vec(),   detect_repeating_key(b"abcd", MAX_KEY_PERIOD));
}

#[test]
fn test_detect_repeating_key_respects_max_len() {
    // every period up to 3 fails, so the raw fragment comes back
    assert_eq!(b"abcdef".to_vec(), detect_repeating_key(b"abcdef", 3));
    assert_eq!(b"abcabc".to_vec(), detect_repeating_key(b"abcabc", 2));
}

/// Known-plaintext attack: XOR the fragment against its ciphertext window
/// to expose that stretch of keystream, collapse it to its minimal period,
/// and decrypt the whole ciphertext under the recovered key.
pub fn recover_with_known(cipher: &[u8], known: &[u8], offset: usize) -> Result<(Vec<u8>, Vec<u8>), Error> {
    if offset >= cipher.len() {
        return Err(Error::OffsetOutOfRange { offset, cipher_len: cipher.len() });
    }
    if offset + known.len() > cipher.len() {
        return Err(Error::FragmentExceedsBounds {
            offset,
            fragment_len: known.len(),
            cipher_len: cipher.len(),
        });
    }
    if known.is_empty() {
        return Err(Error::EmptyFragment {});
    }

    let partial = xor::fixed_xor(&cipher[offset..offset + known.len()], known);
    let mut key = detect_repeating_key(&partial, MAX_KEY_PERIOD);
    // The exposed keystream starts mid-cycle whenever the offset is not a
    // multiple of the period; rotate so the key tiles from byte zero.
    let shift = offset % key.len();
    key.rotate_right(shift);
    let plaintext = xor::repeating_key_xor(cipher, &key)?;
    Ok((key, plaintext))
}

#[test]
fn test_recover_with_known_full_period_fragment() {
    let source = b"The quick brown fox jumps over the lazy dog";
    let cipher = xor::repeating_key_xor(source, b"KEY").unwrap();
    let (key, plaintext) = recover_with_known(&cipher, &source[..6], 0).unwrap();
    assert_eq!(b"KEY".to_vec(), key);
    assert_eq!(source.to_vec(), plaintext);
}

#[test]
fn test_recover_with_known_unaligned_offset() {
    let source = b"The quick brown fox jumps over the lazy dog";
    let cipher = xor::repeating_key_xor(source, b"KEY").unwrap();
    // offset 4 is mid-period; the rotation must still line the key up
    let (key, plaintext) = recover_with_known(&cipher, &source[4..13], 4).unwrap();
    assert_eq!(b"KEY".to_vec(), key);
    assert_eq!(source.to_vec(), plaintext);
}

#[test]
fn test_recover_with_known_single_byte_key() {
    let source = b"Now that the party is jumping";
    let cipher = xor::repeating_key_xor(source, &[0x3a]).unwrap();
    let (key, plaintext) = recover_with_known(&cipher, &source[10..14], 10).unwrap();
    assert_eq!(vec![0x3a], key);
    assert_eq!(source.to_vec(), plaintext);
}

#[test]
fn test_recover_with_known_short_fragment_matches_its_window() {
    let source = b"some rather longer piece of text";
    let cipher = xor::repeating_key_xor(source, b"LONGKEY").unwrap();
    // a 3 byte fragment cannot span the 7 byte period, so only the
    // fragment window is guaranteed to decrypt correctly
    let (_, plaintext) = recover_with_known(&cipher, &source[2..5], 2).unwrap();
    assert_eq!(&source[2..5], &plaintext[2..5]);
    assert_ne!(source.to_vec(), plaintext);
}

#[test]
fn test_recover_with_known_rejects_bad_inputs() {
    assert_eq!(
        Err(Error::EmptyFragment {}),
        recover_with_known(b"\x01\x02", b"", 0)
    );
    assert_eq!(
        Err(Error::OffsetOutOfRange { offset: 2, cipher_len: 2 }),
        recover_with_known(b"\x01\x02", b"a", 2)
    );
    assert_eq!(
        Err(Error::FragmentExceedsBounds { offset: 0, fragment_len: 3, cipher_len: 2 }),
        recover_with_known(b"\x01\x02", b"abc", 0)
    );
    assert_eq!(
        Err(Error::FragmentExceedsBounds { offset: 1, fragment_len: 2, cipher_len: 2 }),
        recover_with_known(b"\x01\x02", b"ab", 1)
    );
}

/// Try every single-byte key and rank the decryptions by English score,
/// best first. The sort is stable over the 0..=255 enumeration, so equal
/// scores keep ascending key order.
pub fn brute_force(cipher: &[u8]) -> Result<Vec<Candidate>, Error> {
    Ok((0..=u8::MAX)
        .map(|key| {
            let plaintext = xor::byte_xor(cipher, key);
            let score = common::english_score(&plaintext);
            Candidate { score, key, plaintext }
        })
        .sorted_by(|c1, c2| c2.score.cmp(&c1.score) )
        .collect())
}

#[test]
fn test_brute_force_covers_every_key_once() {
    let candidates = brute_force(b"anything").unwrap();
    assert_eq!(256, candidates.len());
    let keys: std::collections::HashSet<u8> = candidates.iter().map(|c| c.key ).collect();
    assert_eq!(256, keys.len());
}

#[test]
fn test_brute_force_is_deterministic_and_sorted() {
    let cipher = hex!("1b37373331363f78151b7f2b783431333d78397828372d363c78373e783a393b3736");
    let first = brute_force(&cipher).unwrap();
    let second = brute_force(&cipher).unwrap();
    assert_eq!(first, second);
    assert!(first.windows(2).all(|w| w[0].score >= w[1].score ));
}

#[test]
fn test_brute_force_ranks_alphabetic_plaintext() {
    // "cat" under key 0x01
    let cipher = hex!("626075");
    let candidates = brute_force(&cipher).unwrap();
    let pos_of = |key: u8| candidates.iter().position(|c| c.key == key ).unwrap();

    let cat = &candidates[pos_of(0x01)];
    assert_eq!(b"cat".to_vec(), cat.plaintext);
    assert_eq!(14, cat.score); // C=11, A=2, T=1

    // anything decrypting to non-alphabetic garbage scores zero and ranks below
    let garbage = &candidates[pos_of(0xff)];
    assert_eq!(0, garbage.score);
    assert!(pos_of(0x01) < pos_of(0xff));
}

#[test]
fn test_brute_force_empty_ciphertext() {
    let candidates = brute_force(b"").unwrap();
    assert_eq!(256, candidates.len());
    assert!(candidates.iter().all(|c| c.score == 0 && c.plaintext.is_empty() ));
    // all ties, so enumeration order survives the stable sort
    assert!(candidates.iter().enumerate().all(|(i, c)| c.key as usize == i ));
}
