//! Public keys: curve points with validated group membership.

use crate::{
    Error, Result,
    curve::Curve,
    der, encoding,
    oid::ObjectIdentifier,
    pem,
    point::AffinePoint,
};

const PEM_LABEL: &str = "PUBLIC KEY";

/// Two-byte uncompressed-point marker carried inside the BIT STRING.
const UNCOMPRESSED_MARKER: [u8; 2] = [0x00, 0x04];

fn ec_public_key_oid() -> ObjectIdentifier {
    ObjectIdentifier::new([1u64, 2, 840, 10045, 2, 1])
}

/// Public key: a point on a registered curve.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKey {
    point: AffinePoint,
    curve: &'static Curve,
}

impl PublicKey {
    /// Wrap a point after validating it: finite, on the curve, and inside
    /// the order-`n` subgroup.
    pub fn from_affine(point: AffinePoint, curve: &'static Curve) -> Result<Self> {
        validate(&point, curve)?;
        Ok(Self { point, curve })
    }

    /// Wrap a point already known valid (derived as `d·G`).
    pub(crate) fn from_parts(point: AffinePoint, curve: &'static Curve) -> Self {
        Self { point, curve }
    }

    /// The curve point.
    pub fn point(&self) -> &AffinePoint {
        &self.point
    }

    /// The curve this key belongs to.
    pub fn curve(&self) -> &'static Curve {
        self.curve
    }

    /// Fixed-width big-endian `X ‖ Y`, each coordinate padded to
    /// `encoded_len` bytes, optionally prefixed with the two-byte
    /// uncompressed-point marker.
    pub fn to_encoded_point(&self, with_marker: bool) -> Vec<u8> {
        let (x, y) = self
            .point
            .coordinates()
            .expect("validated key point is finite");
        let width = self.curve.encoded_len();
        let mut out = Vec::with_capacity(2 + 2 * width);
        if with_marker {
            out.extend_from_slice(&UNCOMPRESSED_MARKER);
        }
        out.extend_from_slice(&encoding::int_to_be_bytes(x, width));
        out.extend_from_slice(&encoding::int_to_be_bytes(y, width));
        out
    }

    /// Decode a fixed-width `X ‖ Y` coordinate string (marker already
    /// stripped), optionally validating the point.
    pub fn from_encoded_point(
        bytes: &[u8],
        curve: &'static Curve,
        validate_point: bool,
    ) -> Result<Self> {
        let width = curve.encoded_len();
        if bytes.len() != 2 * width {
            return Err(Error::parse(
                "public key point",
                format!(
                    "expected {} coordinate bytes for {}, found {}",
                    2 * width,
                    curve.name,
                    bytes.len()
                ),
            ));
        }
        let (xs, ys) = bytes.split_at(width);
        let point = AffinePoint::Finite {
            x: encoding::int_from_be_bytes(xs),
            y: encoding::int_from_be_bytes(ys),
        };
        if validate_point {
            validate(&point, curve)?;
        }
        Ok(Self { point, curve })
    }

    /// Encode as DER: `SEQUENCE { SEQUENCE { OID(id-ecPublicKey),
    /// OID(curve) }, BIT STRING(marker ‖ X ‖ Y) }`.
    pub fn to_der(&self) -> Vec<u8> {
        let algorithm = der::encode_sequence(&[
            &der::encode_oid(&ec_public_key_oid()),
            &der::encode_oid(&self.curve.oid),
        ]);
        der::encode_sequence(&[
            &algorithm,
            &der::encode_bit_string(&self.to_encoded_point(true)),
        ])
    }

    /// Decode from DER, validating structure, curve, and point.
    pub fn from_der(input: &[u8]) -> Result<Self> {
        let (body, rest) = der::read_sequence(input)?;
        der::expect_empty(rest, "public key")?;
        let (algorithm, body) = der::read_sequence(body)?;
        let (alg_oid, algorithm) = der::read_oid(algorithm)?;
        if alg_oid != ec_public_key_oid() {
            return Err(Error::parse(
                "public key",
                format!("unexpected algorithm oid {alg_oid}"),
            ));
        }
        let (curve_oid, algorithm) = der::read_oid(algorithm)?;
        der::expect_empty(algorithm, "public key algorithm identifiers")?;
        let curve = Curve::by_oid(&curve_oid).ok_or(Error::UnknownCurve(curve_oid))?;
        let (payload, body) = der::read_bit_string(body)?;
        der::expect_empty(body, "public key")?;
        let point_bytes = payload
            .strip_prefix(&UNCOMPRESSED_MARKER[..])
            .ok_or_else(|| {
                Error::parse(
                    "public key point",
                    format!(
                        "missing uncompressed marker, payload starts with {}",
                        hex::encode(&payload[..payload.len().min(2)])
                    ),
                )
            })?;
        Self::from_encoded_point(point_bytes, curve, true)
    }

    /// PEM `PUBLIC KEY` envelope of the DER encoding.
    pub fn to_pem(&self) -> String {
        pem::encode(PEM_LABEL, &self.to_der())
    }

    /// Decode from a PEM `PUBLIC KEY` envelope.
    pub fn from_pem(text: &str) -> Result<Self> {
        Self::from_der(&pem::decode(PEM_LABEL, text)?)
    }
}

fn validate(point: &AffinePoint, curve: &Curve) -> Result<()> {
    let Some((x, y)) = point.coordinates() else {
        return Err(Error::validation(format!(
            "public key point for {} is the point at infinity",
            curve.name
        )));
    };
    if !curve.contains(point) {
        return Err(Error::validation(format!(
            "point ({x}, {y}) is not on {}",
            curve.name
        )));
    }
    if !curve.mul(point, &curve.n).is_identity() {
        return Err(Error::validation(format!(
            "point ({x}, {y}) is outside the order-n subgroup of {}",
            curve.name
        )));
    }
    Ok(())
}
