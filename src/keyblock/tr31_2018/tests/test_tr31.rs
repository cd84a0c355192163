use crate::keyblock::tr31_2018::parse;

#[test]
fn parses_header_and_first_optional_block_per_seed_vector() {
    // Follows the header shape from the spec's TR-31 seed vector
    // (version B, usage B1, algorithm T, mode X, kvn 00, exportability N,
    // 3 optional blocks, first one KS of length 18) with a self-consistent
    // body so the declared total length checks out.
    let block = "B0128B1TX00N0300KS18AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAKC04BBBBBBBBPB04CCCCCCCCDDDDDDDDDDDDDDDDDDDDDDDDDDDDDDDDEEEEEEEEEEEEEEEE";
    assert_eq!(block.len(), 128);

    let parsed = parse(block, None).unwrap();
    assert_eq!(parsed.header.version_id(), 'B');
    assert_eq!(parsed.header.block_length(), 128);
    assert_eq!(parsed.header.key_usage(), "B1");
    assert_eq!(parsed.header.algorithm(), 'T');
    assert_eq!(parsed.header.mode_of_use(), 'X');
    assert_eq!(parsed.header.exportability(), 'N');
    assert_eq!(parsed.header.num_optional_blocks(), 3);

    assert_eq!(parsed.optional_blocks.len(), 3);
    assert_eq!(parsed.optional_blocks[0].id, "KS");
    assert_eq!(parsed.optional_blocks[0].length_bytes, 18);
    assert_eq!(
        parsed.optional_blocks[0].value,
        "AA".repeat(18)
    );

    // Version B is neither 'D' nor 'C', so the authenticator is a 16-char
    // TDEA-MAC and the rest is the encrypted key.
    assert_eq!(parsed.authenticator, "EE".repeat(8));
    assert_eq!(parsed.encrypted_key, "DD".repeat(16));
}

#[test]
fn strips_leading_transport_marker() {
    let block = "B0128B1TX00N0300KS18AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAKC04BBBBBBBBPB04CCCCCCCCDDDDDDDDDDDDDDDDDDDDDDDDDDDDDDDDEEEEEEEEEEEEEEEE";
    let with_marker = format!("R{block}");
    let parsed = parse(&with_marker, None).unwrap();
    assert_eq!(parsed.header.version_id(), 'B');
}

#[test]
fn d_version_uses_64_char_hmac_authenticator() {
    // header(16) + 0 optional blocks + encrypted key + 64-char authenticator
    let header = "D0096P0AE00N0000";
    let encrypted_key = "11".repeat(8); // 16 hex chars
    let authenticator = "22".repeat(32); // 64 hex chars
    let block = format!("{header}{encrypted_key}{authenticator}");
    assert_eq!(block.len(), 96);

    let parsed = parse(&block, None).unwrap();
    assert_eq!(parsed.authenticator.len(), 64);
    assert_eq!(parsed.encrypted_key, encrypted_key);
}

#[test]
fn c_version_aes_cmac_uses_32_char_authenticator() {
    let header = "C0064P0AE00N0000";
    let encrypted_key = "33".repeat(8); // 16 hex chars
    let authenticator = "44".repeat(16); // 32 hex chars
    let block = format!("{header}{encrypted_key}{authenticator}");
    assert_eq!(block.len(), 64);

    let parsed = parse(&block, None).unwrap();
    assert_eq!(parsed.authenticator.len(), 32);
}

#[test]
fn over_declared_optional_block_count_stops_early() {
    // Header declares 2 optional blocks but only 1 is actually present;
    // the remainder must still be recoverable as key + authenticator.
    let opt1 = "KS02ABCD"; // id KS, length 2 bytes -> 4 hex chars of value
    let key = "EE".repeat(4); // 8 hex chars
    let authenticator = "FF".repeat(8); // 16 hex chars
    let body_len = 16 + opt1.len() + key.len() + authenticator.len();
    let header = format!("B{:04}P0AE00N0200", body_len);
    let block = format!("{header}{opt1}{key}{authenticator}");

    let parsed = parse(&block, None).unwrap();
    assert_eq!(parsed.optional_blocks.len(), 1);
    assert_eq!(parsed.optional_blocks[0].id, "KS");
    assert_eq!(parsed.encrypted_key, key);
    assert_eq!(parsed.authenticator, authenticator);
}

#[test]
fn rejects_declared_length_mismatch() {
    let block = "D0999P0AE00N00001122334455667788";
    assert!(parse(block, None).is_err());
}

#[test]
fn rejects_too_short_input() {
    assert!(parse("D01", None).is_err());
}
