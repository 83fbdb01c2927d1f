//! Affine point arithmetic and modular inversion.
//!
//! Pure functions over arbitrary-precision integers. Affine coordinates
//! keep the formulas auditable at the cost of one modular inversion per
//! group operation, which is acceptable at the few dozen point operations
//! a sign or verify performs.
//!
//! Everything here is variable-time in its operands, including the scalar
//! in [`mul`]; see the crate documentation for the security caveat.

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::point::AffinePoint;

/// Multiplicative inverse of `k` modulo `modulus`, by the extended
/// Euclidean algorithm.
///
/// # Panics
///
/// Panics if `gcd(k, modulus) != 1`. The protocol layer only inverts
/// nonzero residues modulo a prime, so a violation is a programming error,
/// not an input error.
pub fn inv_mod(k: &BigInt, modulus: &BigInt) -> BigInt {
    let mut r0 = modulus.clone();
    let mut r1 = k.mod_floor(modulus);
    let mut t0 = BigInt::zero();
    let mut t1 = BigInt::one();
    while !r1.is_zero() {
        let (q, r) = r0.div_rem(&r1);
        let t = &t0 - &q * &t1;
        r0 = r1;
        r1 = r;
        t0 = t1;
        t1 = t;
    }
    assert!(r0.is_one(), "no inverse: operands are not coprime");
    t0.mod_floor(modulus)
}

/// Sum of two points on the curve `y² = x³ + a·x + b` over GF(`p`).
///
/// Special cases in order: an identity operand returns the other point;
/// equal points with equal nonzero `y` double; equal `x` otherwise is a
/// vertical line and returns the identity. The general case uses the chord
/// slope `(y2 - y1) / (x2 - x1)`.
pub fn add(lhs: &AffinePoint, rhs: &AffinePoint, a: &BigInt, p: &BigInt) -> AffinePoint {
    let Some((x1, y1)) = lhs.coordinates() else {
        return rhs.clone();
    };
    let Some((x2, y2)) = rhs.coordinates() else {
        return lhs.clone();
    };

    if x1 == x2 {
        if y1 == y2 && !y1.is_zero() {
            return double(lhs, a, p);
        }
        return AffinePoint::Identity;
    }

    let slope = ((y2 - y1) * inv_mod(&(x2 - x1), p)).mod_floor(p);
    let x3 = (&slope * &slope - x1 - x2).mod_floor(p);
    let y3 = (&slope * &(x1 - &x3) - y1).mod_floor(p);
    AffinePoint::Finite { x: x3, y: y3 }
}

/// Double a point, using the tangent slope `(3x² + a) / 2y`.
///
/// A point with `y = 0` has a vertical tangent and doubles to the identity.
pub fn double(point: &AffinePoint, a: &BigInt, p: &BigInt) -> AffinePoint {
    let Some((x, y)) = point.coordinates() else {
        return AffinePoint::Identity;
    };
    if y.is_zero() {
        return AffinePoint::Identity;
    }
    let slope = ((x * x * 3u32 + a) * inv_mod(&(y * 2u32), p)).mod_floor(p);
    let x3 = (&slope * &slope - x - x).mod_floor(p);
    let y3 = (&slope * &(x - &x3) - y).mod_floor(p);
    AffinePoint::Finite { x: x3, y: y3 }
}

/// Scalar multiple `k·point`, by a most-significant-bit-first
/// double-and-add scan.
///
/// `k = 0` yields the identity. Runs in `O(bits(k))` point operations.
///
/// # Panics
///
/// Panics if `k` is negative.
pub fn mul(point: &AffinePoint, k: &BigInt, a: &BigInt, p: &BigInt) -> AffinePoint {
    assert!(k.sign() != Sign::Minus, "scalar must be non-negative");
    let magnitude = k.magnitude();
    let mut acc = AffinePoint::Identity;
    for i in (0..magnitude.bits()).rev() {
        acc = double(&acc, a, p);
        if magnitude.bit(i) {
            acc = add(&acc, point, a, p);
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    // Textbook curve y² = x³ + 2x + 2 over GF(17); (5, 1) generates the
    // whole group of order 19.
    fn params() -> (BigInt, BigInt) {
        (BigInt::from(2), BigInt::from(17))
    }

    fn g() -> AffinePoint {
        AffinePoint::new(5, 1)
    }

    #[test]
    fn doubling_matches_hand_computation() {
        let (a, p) = params();
        assert_eq!(double(&g(), &a, &p), AffinePoint::new(6, 3));
        assert_eq!(add(&g(), &g(), &a, &p), AffinePoint::new(6, 3));
    }

    #[test]
    fn chord_addition_matches_hand_computation() {
        let (a, p) = params();
        let two_g = double(&g(), &a, &p);
        assert_eq!(add(&two_g, &g(), &a, &p), AffinePoint::new(10, 6));
    }

    #[test]
    fn identity_is_neutral() {
        let (a, p) = params();
        assert_eq!(add(&g(), &AffinePoint::Identity, &a, &p), g());
        assert_eq!(add(&AffinePoint::Identity, &g(), &a, &p), g());
        assert!(
            add(&AffinePoint::Identity, &AffinePoint::Identity, &a, &p).is_identity()
        );
    }

    #[test]
    fn inverse_pair_adds_to_identity() {
        let (a, p) = params();
        let neg_g = AffinePoint::new(5, 16);
        assert!(add(&g(), &neg_g, &a, &p).is_identity());
    }

    #[test]
    fn two_torsion_doubles_to_identity() {
        let (a, p) = params();
        let point = AffinePoint::new(3, 0);
        assert!(double(&point, &a, &p).is_identity());
        assert!(add(&point, &point, &a, &p).is_identity());
    }

    #[test]
    fn scalar_multiples_walk_the_group() {
        let (a, p) = params();
        assert!(mul(&g(), &BigInt::zero(), &a, &p).is_identity());
        assert_eq!(mul(&g(), &BigInt::one(), &a, &p), g());
        // 3G via scalar scan must match repeated addition.
        let three_g = add(&double(&g(), &a, &p), &g(), &a, &p);
        assert_eq!(mul(&g(), &BigInt::from(3), &a, &p), three_g);
        // The subgroup order annihilates the generator.
        assert!(mul(&g(), &BigInt::from(19), &a, &p).is_identity());
        // One past the order cycles back around.
        assert_eq!(mul(&g(), &BigInt::from(20), &a, &p), g());
    }

    #[test]
    fn inverse_law_holds() {
        let p = BigInt::from(65537);
        for k in [1u32, 2, 3, 17, 40_000, 65_536] {
            let k = BigInt::from(k);
            let inverse = inv_mod(&k, &p);
            assert!((&k * &inverse).mod_floor(&p).is_one(), "k = {k}");
        }
    }

    #[test]
    fn inverse_of_negative_operand_is_normalized() {
        let p = BigInt::from(17);
        let inverse = inv_mod(&BigInt::from(-3), &p);
        assert!((&inverse * BigInt::from(-3)).mod_floor(&p).is_one());
        assert!(inverse.sign() != Sign::Minus && inverse < p);
    }

    #[test]
    #[should_panic(expected = "not coprime")]
    fn non_coprime_inverse_is_an_invariant_violation() {
        inv_mod(&BigInt::from(6), &BigInt::from(9));
    }
}
