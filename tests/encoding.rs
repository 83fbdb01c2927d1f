//! Codec round-trips through the public surface.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;
use primecurve::{Curve, Signature, arithmetic, der, encoding, pem};
use proptest::prelude::*;

#[test]
fn fixed_width_round_trip() {
    let n = BigInt::from(0xdead_beefu32);
    let bytes = encoding::int_to_be_bytes(&n, 8);
    assert_eq!(bytes.len(), 8);
    assert_eq!(bytes[..4], [0, 0, 0, 0]);
    assert_eq!(encoding::int_from_be_bytes(&bytes), n);
}

#[test]
fn top_bit_integer_keeps_its_sign_pad() {
    let n = encoding::int_from_be_bytes(&[0x80, 0x01]);
    let der_bytes = der::encode_integer(&n);
    assert_eq!(der_bytes, [0x02, 0x03, 0x00, 0x80, 0x01]);
    let (decoded, rest) = der::read_integer(&der_bytes).unwrap();
    assert!(rest.is_empty());
    assert_eq!(decoded, n);
}

#[test]
fn registry_oids_round_trip_through_der() {
    for curve in Curve::all() {
        let bytes = der::encode_oid(&curve.oid);
        let (decoded, rest) = der::read_oid(&bytes).unwrap();
        assert!(rest.is_empty(), "{}", curve.name);
        assert_eq!(decoded, curve.oid, "{}", curve.name);
    }
}

#[test]
fn pem_round_trip_survives_crlf() {
    let payload: Vec<u8> = (0u8..200).collect();
    let text = pem::encode("PUBLIC KEY", &payload);
    let crlf = text.replace('\n', "\r\n");
    assert_eq!(pem::decode("PUBLIC KEY", &crlf).unwrap(), payload);
}

#[test]
fn signature_base64_round_trip() {
    let signature = Signature::new(BigInt::from(123_456_789u64), BigInt::from(987_654_321u64));
    let text = signature.to_base64();
    assert_eq!(Signature::from_base64(&text).unwrap(), signature);
    assert!(Signature::from_base64("!!!not base64!!!").is_err());
}

#[test]
fn signature_der_rejects_trailing_bytes() {
    let signature = Signature::new(BigInt::from(7), BigInt::from(9));
    let mut der_bytes = signature.to_der();
    der_bytes.push(0);
    assert!(Signature::from_der(&der_bytes).is_err());
}

proptest! {
    #[test]
    fn signature_der_round_trip(r in any::<[u8; 24]>(), s in any::<[u8; 24]>()) {
        let signature = Signature::new(
            encoding::int_from_be_bytes(&r),
            encoding::int_from_be_bytes(&s),
        );
        let decoded = Signature::from_der(&signature.to_der()).unwrap();
        prop_assert_eq!(decoded, signature);
    }

    #[test]
    fn modular_inverse_law(bytes in any::<[u8; 32]>()) {
        let n = &Curve::nist_p256().n;
        let a = encoding::int_from_be_bytes(&bytes).mod_floor(&(n - 1u32)) + 1u32;
        let inverse = arithmetic::inv_mod(&a, n);
        prop_assert!((&a * &inverse).mod_floor(n).is_one());
    }
}
