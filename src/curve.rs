//! Named curve parameters and the process-wide registry.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Signed;
use once_cell::sync::Lazy;

use crate::{arithmetic, oid::ObjectIdentifier, point::AffinePoint};

/// Short-Weierstrass curve `y² = x³ + a·x + b (mod p)` with a generator of
/// prime order `n`.
///
/// Instances are built once into the registry at first use and only ever
/// handed out by shared reference; every key and signature borrows its
/// curve from there, so the parameters outlive all of them and are never
/// mutated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Curve {
    /// Coefficient `a`.
    pub a: BigInt,
    /// Coefficient `b`.
    pub b: BigInt,
    /// Prime field modulus.
    pub p: BigInt,
    /// Order of the generator.
    pub n: BigInt,
    /// Generator point.
    pub g: AffinePoint,
    /// SEC2 curve name.
    pub name: &'static str,
    /// Named-curve object identifier.
    pub oid: ObjectIdentifier,
    /// Byte length of the digest conventionally paired with this curve.
    pub digest_size: usize,
}

impl Curve {
    /// All supported curves, in registry order.
    pub fn all() -> &'static [Curve] {
        &REGISTRY
    }

    /// Look up a curve by named-curve object identifier.
    pub fn by_oid(oid: &ObjectIdentifier) -> Option<&'static Curve> {
        REGISTRY.iter().find(|curve| &curve.oid == oid)
    }

    /// secp256k1, the Koblitz curve used by Bitcoin.
    pub fn secp256k1() -> &'static Curve {
        &REGISTRY[0]
    }

    /// NIST P-192 (secp192r1).
    pub fn nist_p192() -> &'static Curve {
        &REGISTRY[1]
    }

    /// NIST P-224 (secp224r1).
    pub fn nist_p224() -> &'static Curve {
        &REGISTRY[2]
    }

    /// NIST P-256 (secp256r1, prime256v1).
    pub fn nist_p256() -> &'static Curve {
        &REGISTRY[3]
    }

    /// NIST P-384 (secp384r1).
    pub fn nist_p384() -> &'static Curve {
        &REGISTRY[4]
    }

    /// NIST P-521 (secp521r1).
    pub fn nist_p521() -> &'static Curve {
        &REGISTRY[5]
    }

    /// Whether `point` is a finite point on this curve.
    ///
    /// Total predicate: the identity, out-of-range coordinates, and
    /// coordinates failing the curve equation all yield `false`.
    pub fn contains(&self, point: &AffinePoint) -> bool {
        let Some((x, y)) = point.coordinates() else {
            return false;
        };
        if x.is_negative() || x >= &self.p || y.is_negative() || y >= &self.p {
            return false;
        }
        let lhs = (y * y).mod_floor(&self.p);
        let rhs = (x * x * x + &self.a * x + &self.b).mod_floor(&self.p);
        lhs == rhs
    }

    /// Number of bytes needed to hold a value less than the curve order.
    pub fn encoded_len(&self) -> usize {
        self.n.bits().div_ceil(8) as usize
    }

    /// `lhs + rhs` on this curve.
    pub fn add(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> AffinePoint {
        arithmetic::add(lhs, rhs, &self.a, &self.p)
    }

    /// `2·point` on this curve.
    pub fn double(&self, point: &AffinePoint) -> AffinePoint {
        arithmetic::double(point, &self.a, &self.p)
    }

    /// `k·point` on this curve.
    pub fn mul(&self, point: &AffinePoint, k: &BigInt) -> AffinePoint {
        arithmetic::mul(point, k, &self.a, &self.p)
    }
}

static REGISTRY: Lazy<Vec<Curve>> = Lazy::new(|| {
    vec![
        // SEC2 2.4.1
        curve(
            "secp256k1",
            &[1, 3, 132, 0, 10],
            32,
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
            "0",
            "7",
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
            "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
        ),
        // SEC2 2.2.2
        curve(
            "secp192r1",
            &[1, 2, 840, 10045, 3, 1, 1],
            20,
            "fffffffffffffffffffffffffffffffeffffffffffffffff",
            "fffffffffffffffffffffffffffffffefffffffffffffffc",
            "64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
            "188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012",
            "07192b95ffc8da78631011ed6b24cdd573f977a11e794811",
            "ffffffffffffffffffffffff99def836146bc9b1b4d22831",
        ),
        // SEC2 2.3.2
        curve(
            "secp224r1",
            &[1, 3, 132, 0, 33],
            28,
            "ffffffffffffffffffffffffffffffff000000000000000000000001",
            "fffffffffffffffffffffffffffffffefffffffffffffffffffffffe",
            "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
            "b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21",
            "bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34",
            "ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d",
        ),
        // SEC2 2.4.2
        curve(
            "secp256r1",
            &[1, 2, 840, 10045, 3, 1, 7],
            32,
            "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
            "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc",
            "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
            "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
            "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
            "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
        ),
        // SEC2 2.5.1
        curve(
            "secp384r1",
            &[1, 3, 132, 0, 34],
            48,
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe\
             ffffffff0000000000000000ffffffff",
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe\
             ffffffff0000000000000000fffffffc",
            "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875a\
             c656398d8a2ed19d2a85c8edd3ec2aef",
            "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a38\
             5502f25dbf55296c3a545e3872760ab7",
            "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c0\
             0a60b1ce1d7e819d7a431d7c90ea0e5f",
            "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf\
             581a0db248b0a77aecec196accc52973",
        ),
        // SEC2 2.6.1
        curve(
            "secp521r1",
            &[1, 3, 132, 0, 35],
            64,
            "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff\
             ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff\
             ffff",
            "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff\
             ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff\
             fffc",
            "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef1\
             09e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b50\
             3f00",
            "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d\
             3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5\
             bd66",
            "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e\
             662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd1\
             6650",
            "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff\
             fffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e9138\
             6409",
        ),
    ]
});

fn curve(
    name: &'static str,
    oid: &[u64],
    digest_size: usize,
    p: &str,
    a: &str,
    b: &str,
    gx: &str,
    gy: &str,
    n: &str,
) -> Curve {
    Curve {
        a: hex_int(a),
        b: hex_int(b),
        p: hex_int(p),
        n: hex_int(n),
        g: AffinePoint::new(hex_int(gx), hex_int(gy)),
        name,
        oid: ObjectIdentifier::new(oid),
        digest_size,
    }
}

fn hex_int(hex: &str) -> BigInt {
    BigInt::parse_bytes(hex.as_bytes(), 16).expect("registry constants are well-formed hex")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_order_and_names() {
        let names: Vec<&str> = Curve::all().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            [
                "secp256k1",
                "secp192r1",
                "secp224r1",
                "secp256r1",
                "secp384r1",
                "secp521r1"
            ]
        );
    }

    #[test]
    fn named_accessors_agree_with_the_registry() {
        assert_eq!(Curve::secp256k1().name, "secp256k1");
        assert_eq!(Curve::nist_p192().name, "secp192r1");
        assert_eq!(Curve::nist_p224().name, "secp224r1");
        assert_eq!(Curve::nist_p256().name, "secp256r1");
        assert_eq!(Curve::nist_p384().name, "secp384r1");
        assert_eq!(Curve::nist_p521().name, "secp521r1");
    }

    #[test]
    fn every_generator_satisfies_its_curve_equation() {
        for curve in Curve::all() {
            assert!(curve.contains(&curve.g), "{}", curve.name);
        }
    }

    #[test]
    fn field_and_order_widths_agree() {
        for curve in Curve::all() {
            assert_eq!(curve.p.bits(), curve.n.bits(), "{}", curve.name);
        }
    }
}
