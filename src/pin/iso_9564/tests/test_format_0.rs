use crate::hex_xor;
use crate::pin::iso_9564::*;

#[test]
fn encode_pin_and_pan_fields_seed_vector() {
    let pin = "1234";
    let pan = "43219876543210987";

    let pin_field = encode_pin_field_iso_0(pin).unwrap();
    assert_eq!(hex_xor::encode(&pin_field), "041234FFFFFFFFFF");

    let pan_field = encode_pan_field_iso_0(pan).unwrap();
    assert_eq!(hex_xor::encode(&pan_field), "0000987654321098");
}

#[test]
fn pinblock_roundtrip() {
    let test_cases = [
        ("1234", "43219876543210987"),
        ("123456", "4532015112830366"),
        ("123456789012", "1234567890123456789"),
    ];

    for (pin, pan) in test_cases {
        let block = pinblock_iso_0(pin, pan).unwrap();
        let decoded = decode_pinblock_iso_0(&block, pan).unwrap();
        assert_eq!(decoded, pin, "failed roundtrip for PIN {pin}, PAN {pan}");
    }
}

#[test]
fn rejects_pin_out_of_range() {
    assert!(encode_pin_field_iso_0("123").is_err());
    assert!(encode_pin_field_iso_0("1234567890123").is_err());
    assert!(encode_pin_field_iso_0("12a4").is_err());
}

#[test]
fn rejects_pan_below_precondition() {
    assert!(encode_pan_field_iso_0("123456789012").is_err());
}

#[test]
fn decode_rejects_wrong_control_nibble() {
    let mut field = encode_pin_field_iso_0("1234").unwrap();
    field[0] = 0x34;
    assert!(decode_pin_field_iso_0(&field).is_err());
}

#[test]
fn decode_rejects_bad_filler() {
    let mut field = encode_pin_field_iso_0("1234").unwrap();
    field[7] = 0x12;
    assert!(decode_pin_field_iso_0(&field).is_err());
}
