use rand::{Rng, SeedableRng};
use scratchkit_base64::{
    create_from_base64, create_to_base64, from_base64, from_base64_url, to_base64, to_base64_url,
    ALPHABET_URL,
};

#[test]
fn encode_decode_roundtrip_matrix() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5c7a7c4);
    for len in 0..128 {
        let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        assert_eq!(from_base64(&to_base64(&data)), data, "len {}", len);
        assert_eq!(from_base64_url(&to_base64_url(&data)), data, "len {}", len);
    }
}

#[test]
fn factory_matches_direct_functions() {
    let encode = create_to_base64(None, Some('=')).unwrap();
    let decode = create_from_base64(None).unwrap();
    let encode_url = create_to_base64(Some(ALPHABET_URL), None).unwrap();

    let data = b"any carnal pleasure.";
    assert_eq!(encode(data), to_base64(data));
    assert_eq!(encode_url(data), to_base64_url(data));
    assert_eq!(decode(&to_base64(data)), data.to_vec());
}

#[test]
fn permissive_decode_skips_noise() {
    // Invalid characters vanish; the remaining alphabet characters decode
    // as if the noise were never there.
    assert_eq!(from_base64("aGVs!bG8="), from_base64("aGVsbG8="));
    assert_eq!(from_base64("==aGVsbG8="), b"hello");
}
