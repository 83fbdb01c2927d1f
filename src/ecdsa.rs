//! ECDSA signing and verification.
//!
//! The message digest is a collaborator's output and arrives here as bytes;
//! it is interpreted as a big-endian integer in full, without truncation to
//! the bit length of the curve order. With a digest no wider than the order
//! (the pairing each registered curve documents in `digest_size`) this
//! matches the canonical conversion.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand_core::{CryptoRng, OsRng, RngCore};

use crate::{
    Result,
    arithmetic::inv_mod,
    encoding,
    public_key::PublicKey,
    secret_key::{SecretKey, random_scalar},
    signature::Signature,
};

/// Sign `digest` with an ephemeral scalar from the operating system's
/// secure random source.
pub fn sign(digest: &[u8], secret_key: &SecretKey) -> Result<Signature> {
    sign_with_rng(digest, secret_key, &mut OsRng)
}

/// Sign `digest` with an ephemeral scalar drawn from `rng`.
///
/// The ephemeral scalar is rejection-sampled uniformly from `[1, n-1]`.
/// In the never-observed event that `r` or `s` comes out zero (a
/// cryptographically unusable signature) the scalar is redrawn, so the
/// returned components are always in `[1, n-1]`. A failure of `rng` is
/// fatal to the operation and surfaces as [`Error::RandomSource`].
///
/// [`Error::RandomSource`]: crate::Error::RandomSource
pub fn sign_with_rng<R>(digest: &[u8], secret_key: &SecretKey, rng: &mut R) -> Result<Signature>
where
    R: CryptoRng + RngCore,
{
    let z = encoding::int_from_be_bytes(digest);
    loop {
        let k = random_scalar(secret_key.curve(), rng)?;
        if let Some(signature) = sign_once(&z, secret_key, &k) {
            return Ok(signature);
        }
    }
}

/// Verify `signature` over `digest` with `public_key`.
///
/// Mathematically rejected signatures (out-of-range `r`/`s`, an identity
/// result point, a mismatched `r`) all report as `false`; this function
/// never errors. Structurally malformed input is rejected earlier, by the
/// decoding constructors of [`Signature`] and [`PublicKey`].
pub fn verify(digest: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    let curve = public_key.curve();
    let n = &curve.n;
    let one = BigInt::one();
    if signature.r() < &one || signature.r() >= n || signature.s() < &one || signature.s() >= n {
        return false;
    }
    let z = encoding::int_from_be_bytes(digest);
    let w = inv_mod(signature.s(), n);
    let u1 = curve.mul(&curve.g, &(&z * &w).mod_floor(n));
    let u2 = curve.mul(public_key.point(), &(signature.r() * &w).mod_floor(n));
    match curve.add(&u1, &u2).coordinates() {
        Some((x, _)) => &x.mod_floor(n) == signature.r(),
        None => false,
    }
}

/// One signing attempt; `None` when `r` or `s` degenerates to zero.
fn sign_once(z: &BigInt, secret_key: &SecretKey, k: &BigInt) -> Option<Signature> {
    let curve = secret_key.curve();
    // k in [1, n-1] cannot reach the identity.
    let point = curve.mul(&curve.g, k);
    let (x, _) = point.coordinates()?;
    let r = x.mod_floor(&curve.n);
    if r.is_zero() {
        return None;
    }
    let s = ((z + &r * secret_key.secret_scalar()) * inv_mod(k, &curve.n)).mod_floor(&curve.n);
    if s.is_zero() {
        return None;
    }
    Some(Signature::new(r, s))
}

/// Lower-level signing with caller-managed hazards.
pub mod hazmat {
    use super::*;
    use crate::Error;

    /// Sign `digest` with a caller-supplied ephemeral scalar `k`.
    ///
    /// Exists for published test vectors and for deterministic schemes
    /// layered on top. Reusing or leaking `k` reveals the secret key.
    /// Unlike [`sign_with_rng`](super::sign_with_rng), nothing redraws
    /// here: `k` outside `[1, n-1]`, or a `k` that degenerates `r` or `s`
    /// to zero, is reported as an error.
    pub fn sign_prehashed(digest: &[u8], secret_key: &SecretKey, k: &BigInt) -> Result<Signature> {
        let curve = secret_key.curve();
        if k < &BigInt::one() || k >= &curve.n {
            return Err(Error::validation(format!(
                "ephemeral scalar out of range [1, n-1] for {}",
                curve.name
            )));
        }
        let z = encoding::int_from_be_bytes(digest);
        sign_once(&z, secret_key, k)
            .ok_or_else(|| Error::validation("ephemeral scalar degenerates r or s to zero"))
    }
}
