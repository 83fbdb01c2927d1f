//! Secret keys: private scalars bound to a registered curve.

use core::fmt;

use num_bigint::BigInt;
use num_traits::{One, Zero};
use rand_core::{CryptoRng, OsRng, RngCore};

use crate::{
    Error, Result,
    curve::Curve,
    der, encoding, pem,
    public_key::PublicKey,
};

const PEM_LABEL: &str = "EC PRIVATE KEY";

/// Secret key: a scalar `d` with `1 <= d < n`.
///
/// Every construction path enforces the range invariant, so a held key is
/// always usable for signing.
#[derive(Clone)]
pub struct SecretKey {
    d: BigInt,
    curve: &'static Curve,
}

impl SecretKey {
    /// Generate a key with an ephemeral scalar drawn from `rng` by
    /// rejection sampling.
    pub fn random<R>(curve: &'static Curve, rng: &mut R) -> Result<Self>
    where
        R: CryptoRng + RngCore,
    {
        Ok(Self {
            d: random_scalar(curve, rng)?,
            curve,
        })
    }

    /// Generate a key from the operating system's secure random source.
    pub fn generate(curve: &'static Curve) -> Result<Self> {
        Self::random(curve, &mut OsRng)
    }

    /// Wrap an existing scalar, checking `1 <= d < n`.
    pub fn from_scalar(d: BigInt, curve: &'static Curve) -> Result<Self> {
        if d < BigInt::one() || d >= curve.n {
            return Err(Error::validation(format!(
                "secret scalar out of range [1, n-1] for {}",
                curve.name
            )));
        }
        Ok(Self { d, curve })
    }

    /// Parse a big-endian scalar byte string.
    pub fn from_bytes(bytes: &[u8], curve: &'static Curve) -> Result<Self> {
        Self::from_scalar(encoding::int_from_be_bytes(bytes), curve)
    }

    /// Serialize the scalar as `encoded_len` big-endian bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        encoding::int_to_be_bytes(&self.d, self.curve.encoded_len())
    }

    /// The private scalar.
    pub fn secret_scalar(&self) -> &BigInt {
        &self.d
    }

    /// The curve this key belongs to.
    pub fn curve(&self) -> &'static Curve {
        self.curve
    }

    /// Derive the public key `Q = d·G`.
    pub fn public_key(&self) -> PublicKey {
        let point = self.curve.mul(&self.curve.g, &self.d);
        PublicKey::from_parts(point, self.curve)
    }

    /// Encode as a SEC1 `ECPrivateKey` structure.
    pub fn to_der(&self) -> Vec<u8> {
        der::encode_sequence(&[
            &der::encode_integer(&BigInt::one()),
            &der::encode_octet_string(&self.to_bytes()),
            &der::encode_context(0, &der::encode_oid(&self.curve.oid)),
            &der::encode_context(
                1,
                &der::encode_bit_string(&self.public_key().to_encoded_point(true)),
            ),
        ])
    }

    /// Decode a SEC1 `ECPrivateKey` structure.
    pub fn from_der(input: &[u8]) -> Result<Self> {
        let (body, rest) = der::read_sequence(input)?;
        der::expect_empty(rest, "EC private key")?;
        let (version, body) = der::read_integer(body)?;
        if !version.is_one() {
            return Err(Error::parse(
                "EC private key",
                format!("unsupported version {version}"),
            ));
        }
        let (scalar_bytes, body) = der::read_octet_string(body)?;
        let (params, body) = der::read_context(body, 0)?;
        let (oid, params_rest) = der::read_oid(params)?;
        der::expect_empty(params_rest, "EC private key parameters")?;
        // The optional [1] block repeats the public point, which is
        // derivable; it is checked for shape but not interpreted.
        if !body.is_empty() {
            let (_, after) = der::read_context(body, 1)?;
            der::expect_empty(after, "EC private key")?;
        }
        let curve = Curve::by_oid(&oid).ok_or(Error::UnknownCurve(oid))?;
        Self::from_bytes(scalar_bytes, curve)
    }

    /// PEM `EC PRIVATE KEY` envelope of the DER encoding.
    pub fn to_pem(&self) -> String {
        pem::encode(PEM_LABEL, &self.to_der())
    }

    /// Decode from a PEM `EC PRIVATE KEY` envelope.
    pub fn from_pem(text: &str) -> Result<Self> {
        Self::from_der(&pem::decode(PEM_LABEL, text)?)
    }
}

impl fmt::Debug for SecretKey {
    /// The scalar is deliberately omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("curve", &self.curve.name)
            .finish_non_exhaustive()
    }
}

/// Draw a scalar uniformly from `[1, n-1]` by rejection sampling: take
/// `encoded_len` random bytes, reject zero and anything not below `n`.
pub(crate) fn random_scalar<R>(curve: &Curve, rng: &mut R) -> Result<BigInt>
where
    R: CryptoRng + RngCore,
{
    let mut buf = vec![0u8; curve.encoded_len()];
    loop {
        rng.try_fill_bytes(&mut buf)
            .map_err(|_| Error::RandomSource)?;
        let candidate = encoding::int_from_be_bytes(&buf);
        if !candidate.is_zero() && candidate < curve.n {
            return Ok(candidate);
        }
    }
}
