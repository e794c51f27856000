use crate::util::Error;

pub mod attack;

pub fn fixed_xor(buf1: &[u8], buf2: &[u8]) -> Vec<u8> {
    assert_eq!(buf1.len(), buf2.len());
    buf1.iter()
        .zip(buf2.iter())
        .map(|(x,y)| x ^ y)
        .collect()
}

#[test]
fn test_fixed_xor() {
    let case_buf1 = hex!("1c0111001f010100061a024b53535009181c");
    let case_buf2 = hex!("686974207468652062756c6c277320657965");
    let expected = hex!("746865206b696420646f6e277420706c6179");
    let result = fixed_xor(&case_buf1, &case_buf2);
    assert_eq!(result, expected);
}

pub fn byte_xor(buf: &[u8], b: u8) -> Vec<u8> {
    buf.iter()
        .map(|x| x ^ b )
        .collect()
}

#[test]
fn test_byte_xor() {
    assert_eq!(b"cat".to_vec(), byte_xor(&hex!("626075"), 0x01));
    assert_eq!(Vec::<u8>::new(), byte_xor(b"", 0x42));
}

pub fn repeating_key_xor(buf: &[u8], key: &[u8]) -> Result<Vec<u8>, Error> {
    if key.is_empty() {
        return Err(Error::InvalidKey {});
    }
    Ok(buf.iter()
        .zip(key.iter().cycle())
        .map(|(x,y)| x ^ y)
        .collect())
}

#[test]
fn test_repeating_key_xor() {
    let case = b"Burning 'em, if you ain't quick and nimble\nI go crazy when I hear a cymbal";
    let key = b"ICE";
    let encoded = repeating_key_xor(case, key).unwrap();
    let expected = hex!("0b3637272a2b2e63622c2e69692a23693a2a3c6324202d623d63343c2a26226324272765272a282b2f20430a652e2c652a3124333a653e2b2027630c692b20283165286326302e27282f");
    assert_eq!(encoded, expected);
}

#[test]
fn test_repeating_key_xor_single_byte_matches_byte_xor() {
    let case = hex!("deadbeef");
    assert_eq!(Ok(byte_xor(&case, 0x5a)), repeating_key_xor(&case, &[0x5a]));
}

#[test]
fn test_repeating_key_xor_empty_key_fails() {
    assert_eq!(Err(Error::InvalidKey {}), repeating_key_xor(b"data", b""));
}

#[test]
fn test_repeating_key_xor_empty_data() {
    assert_eq!(Ok(vec![]), repeating_key_xor(b"", b"key"));
}
