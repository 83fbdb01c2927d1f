//! ECDSA signatures.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use num_bigint::BigInt;

use crate::{Error, Result, der};

/// ECDSA signature: the component pair `(r, s)`.
///
/// Inert data between construction and use. No range checks happen here:
/// signing only ever produces components in `[1, n-1]`, and verification
/// rejects anything outside that range, so decoded signatures may hold any
/// non-negative integers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Signature {
    r: BigInt,
    s: BigInt,
}

impl Signature {
    /// Assemble a signature from its components.
    pub fn new(r: BigInt, s: BigInt) -> Self {
        Self { r, s }
    }

    /// The `r` component.
    pub fn r(&self) -> &BigInt {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &BigInt {
        &self.s
    }

    /// Encode as DER `SEQUENCE { INTEGER(r), INTEGER(s) }`.
    pub fn to_der(&self) -> Vec<u8> {
        der::encode_sequence(&[&der::encode_integer(&self.r), &der::encode_integer(&self.s)])
    }

    /// Decode from DER, requiring exact consumption inside and out.
    pub fn from_der(input: &[u8]) -> Result<Self> {
        let (body, rest) = der::read_sequence(input)?;
        der::expect_empty(rest, "signature")?;
        let (r, body) = der::read_integer(body)?;
        let (s, body) = der::read_integer(body)?;
        der::expect_empty(body, "signature integers")?;
        Ok(Self { r, s })
    }

    /// Base64 of the DER encoding, with no PEM envelope.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_der())
    }

    /// Decode from Base64-wrapped DER.
    pub fn from_base64(text: &str) -> Result<Self> {
        let der_bytes = STANDARD
            .decode(text.trim())
            .map_err(|e| Error::parse("signature base64", e.to_string()))?;
        Self::from_der(&der_bytes)
    }
}
