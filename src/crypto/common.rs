use std::collections::HashMap;

use lazy_static::lazy_static;

// English letters, most common first. A letter scores its position here,
// so 'E' is worth nothing and 'Z' the most.
static ENGLISH_FREQUENCY_ORDER: &[u8; 26] = b"ETAOINSHRDLCUMWFGYPBVKJXQZ";

// We cannot build the HashMap statically/constantly, annoyingly
lazy_static! {
    static ref LETTER_RANKS: HashMap<u8, u32> = ENGLISH_FREQUENCY_ORDER
        .iter()
        .enumerate()
        .map(|(rank, &letter)| (letter, rank as u32) )
        .collect();
}

// Rank-sum heuristic: every alphabetic byte adds its letter's rank,
// everything else adds nothing. There is no normalisation by length, so
// texts with more letters score higher regardless of key correctness.
pub fn english_score(arr: &[u8]) -> u32 {
    arr.iter()
        .filter(|b| b.is_ascii_alphabetic() )
        .filter_map(|b| LETTER_RANKS.get(&b.to_ascii_uppercase()) )
        .sum()
}

#[test]
fn test_english_score_ignores_non_alphabetic() {
    assert_eq!(0, english_score(b""));
    assert_eq!(0, english_score(b"1234"));
    assert_eq!(0, english_score(b" .,!\n"));
    assert_eq!(0, english_score(&[0x00, 0x80, 0xff]));
}

#[test]
fn test_english_score_rank_lookup() {
    // 'E' sits at rank zero and contributes nothing
    assert_eq!(0, english_score(b"e"));
    assert_eq!(0, english_score(b"E"));
    assert_eq!(25, english_score(b"z"));
    assert_eq!(english_score(b"z"), english_score(b"Z"));
    // C=11, A=2, T=1
    assert_eq!(14, english_score(b"cat"));
    assert_eq!(14, english_score(b"c4a-t"));
}
