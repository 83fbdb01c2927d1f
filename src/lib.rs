#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

pub mod arithmetic;
pub mod der;
pub mod ecdsa;
pub mod encoding;
pub mod pem;

mod curve;
mod error;
mod oid;
mod point;
mod public_key;
mod secret_key;
mod signature;

pub use num_bigint::{self, BigInt};

pub use crate::{
    curve::Curve,
    error::{Error, Result},
    oid::ObjectIdentifier,
    point::AffinePoint,
    public_key::PublicKey,
    secret_key::SecretKey,
    signature::Signature,
};
