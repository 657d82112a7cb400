use rho_utils::seed_from_str;

#[test]
fn test_seed_from_str() {
    assert_eq!(seed_from_str("seed"), seed_from_str("seed"));
    assert_ne!(seed_from_str("seed"), seed_from_str("seed "));
    // keyed, so not the plain digest of the input
    assert_ne!(seed_from_str(""), *blake3::hash(b"").as_bytes());
}
