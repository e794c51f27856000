pub mod common;
pub mod xor;

#[cfg(test)]
mod generic_tests {
    use rand::Rng;

    use crate::crypto::xor;

    // A fragment covering two full key periods pins the detected period to
    // a divisor of the real one, so decryption must reproduce the source.
    #[test]
    fn test_recover_with_known_random_round_trip() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let key_len = rng.gen_range(1..=40);
            let key: Vec<u8> = (0..key_len).map(|_| rng.gen() ).collect();
            let source: Vec<u8> = (0..256).map(|_| rng.gen() ).collect();
            let cipher = xor::repeating_key_xor(&source, &key).unwrap();

            let fragment_len = 2 * key_len;
            let offset = rng.gen_range(0..=(source.len() - fragment_len));
            let known = &source[offset..offset + fragment_len];

            let (_, plaintext) = xor::attack::recover_with_known(&cipher, known, offset).unwrap();
            assert_eq!(source, plaintext);
        }
    }

    #[test]
    fn test_fragment_match_invariant_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let key_len = rng.gen_range(1..=40);
            let key: Vec<u8> = (0..key_len).map(|_| rng.gen() ).collect();
            let source: Vec<u8> = (0..256).map(|_| rng.gen() ).collect();
            let cipher = xor::repeating_key_xor(&source, &key).unwrap();

            // Short fragments may recover a wrong key, but the plaintext
            // must still agree with the fragment at its own window.
            let fragment_len = rng.gen_range(1..=source.len());
            let offset = rng.gen_range(0..=(source.len() - fragment_len));
            let known = &source[offset..offset + fragment_len];

            let (_, plaintext) = xor::attack::recover_with_known(&cipher, known, offset).unwrap();
            assert_eq!(known, &plaintext[offset..offset + fragment_len]);
        }
    }
}
