//! Curve registry and scalar multiplication laws.

use num_bigint::BigInt;
use primecurve::{AffinePoint, Curve, ObjectIdentifier};

#[test]
fn generators_are_on_their_curves() {
    for curve in Curve::all() {
        assert!(curve.contains(&curve.g), "{}", curve.name);
    }
}

#[test]
fn containment_is_a_total_predicate() {
    let curve = Curve::secp256k1();
    assert!(!curve.contains(&AffinePoint::Identity));
    assert!(!curve.contains(&AffinePoint::new(-1, 1)));
    assert!(!curve.contains(&AffinePoint::new(curve.p.clone(), BigInt::from(0))));
    assert!(!curve.contains(&AffinePoint::new(1, -1)));
    // On-curve x with perturbed y.
    let (gx, gy) = curve.g.coordinates().unwrap();
    assert!(!curve.contains(&AffinePoint::new(gx.clone(), gy + 1u32)));
}

#[test]
fn scalar_multiplication_laws() {
    for curve in Curve::all() {
        assert!(
            curve.mul(&curve.g, &BigInt::from(0)).is_identity(),
            "{}",
            curve.name
        );
        assert_eq!(curve.mul(&curve.g, &BigInt::from(1)), curve.g, "{}", curve.name);
        assert!(
            curve.mul(&curve.g, &curve.n).is_identity(),
            "{}",
            curve.name
        );
    }
}

#[test]
fn small_multiples_stay_on_curve() {
    for curve in Curve::all() {
        let mut point = curve.g.clone();
        for k in 2u32..6 {
            point = curve.add(&point, &curve.g);
            assert!(curve.contains(&point), "{}·G on {}", k, curve.name);
            assert_eq!(point, curve.mul(&curve.g, &BigInt::from(k)));
        }
    }
}

#[test]
fn encoded_len_matches_order_width() {
    let expected = [
        ("secp256k1", 32),
        ("secp192r1", 24),
        ("secp224r1", 28),
        ("secp256r1", 32),
        ("secp384r1", 48),
        ("secp521r1", 66),
    ];
    for (name, len) in expected {
        let curve = Curve::all().iter().find(|c| c.name == name).unwrap();
        assert_eq!(curve.encoded_len(), len, "{name}");
    }
}

#[test]
fn registry_lookup_is_by_oid_value() {
    for curve in Curve::all() {
        let found = Curve::by_oid(&ObjectIdentifier::new(curve.oid.arcs())).unwrap();
        assert!(std::ptr::eq(found, curve), "{}", curve.name);
    }
    assert!(Curve::by_oid(&ObjectIdentifier::new([1u64, 2, 3, 4])).is_none());
}
