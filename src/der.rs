//! Minimal DER encoder/decoder.
//!
//! Covers exactly the constructs the key and signature formats need:
//! SEQUENCE, INTEGER, OBJECT IDENTIFIER, BIT STRING, OCTET STRING, and
//! context-specific constructed blocks. Every `read_*` function returns the
//! decoded value together with the unconsumed remainder; callers enforce
//! exact consumption with [`expect_empty`] wherever the format forbids
//! trailing data.

use num_bigint::{BigInt, Sign};

use crate::{Error, Result, encoding, oid::ObjectIdentifier};

const TAG_INTEGER: u8 = 0x02;
const TAG_BIT_STRING: u8 = 0x03;
const TAG_OCTET_STRING: u8 = 0x04;
const TAG_OID: u8 = 0x06;
const TAG_SEQUENCE: u8 = 0x30;
const TAG_CONTEXT: u8 = 0xa0;

/// Encode a SEQUENCE from already-encoded children.
pub fn encode_sequence(children: &[&[u8]]) -> Vec<u8> {
    encode_tlv(TAG_SEQUENCE, &children.concat())
}

/// Encode a non-negative INTEGER.
///
/// A leading zero octet is prepended whenever the top bit of the minimal
/// magnitude encoding is set, since a set sign bit would read as negative.
///
/// # Panics
///
/// Panics if `n` is negative; the formats here carry only non-negative
/// values.
pub fn encode_integer(n: &BigInt) -> Vec<u8> {
    let (sign, bytes) = n.to_bytes_be();
    assert!(sign != Sign::Minus, "DER integers here are non-negative");
    let mut body = Vec::with_capacity(bytes.len() + 1);
    if bytes[0] & 0x80 != 0 {
        body.push(0);
    }
    body.extend_from_slice(&bytes);
    encode_tlv(TAG_INTEGER, &body)
}

/// Encode an OBJECT IDENTIFIER.
///
/// The first two arcs combine into `40·arc0 + arc1`; each later arc is
/// base-128 with the continuation bit set on all but its final byte.
pub fn encode_oid(oid: &ObjectIdentifier) -> Vec<u8> {
    let arcs = oid.arcs();
    assert!(arcs.len() >= 2, "object identifier needs at least two arcs");
    let mut body = vec![(arcs[0] * 40 + arcs[1]) as u8];
    for &arc in &arcs[2..] {
        body.extend_from_slice(&encode_base128(arc));
    }
    encode_tlv(TAG_OID, &body)
}

/// Encode a BIT STRING with zero unused bits.
pub fn encode_bit_string(payload: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(payload.len() + 1);
    body.push(0);
    body.extend_from_slice(payload);
    encode_tlv(TAG_BIT_STRING, &body)
}

/// Encode an OCTET STRING.
pub fn encode_octet_string(payload: &[u8]) -> Vec<u8> {
    encode_tlv(TAG_OCTET_STRING, payload)
}

/// Encode a context-specific constructed block `[slot]`.
pub fn encode_context(slot: u8, body: &[u8]) -> Vec<u8> {
    encode_tlv(TAG_CONTEXT | slot, body)
}

/// Read a SEQUENCE, returning its contents and the unconsumed remainder.
pub fn read_sequence(input: &[u8]) -> Result<(&[u8], &[u8])> {
    read_tlv(input, TAG_SEQUENCE, "DER sequence")
}

/// Read a non-negative INTEGER.
pub fn read_integer(input: &[u8]) -> Result<(BigInt, &[u8])> {
    let (body, rest) = read_tlv(input, TAG_INTEGER, "DER integer")?;
    if body.is_empty() {
        return Err(Error::parse("DER integer", "empty integer body"));
    }
    if body[0] & 0x80 != 0 {
        return Err(Error::parse("DER integer", "negative integer"));
    }
    Ok((encoding::int_from_be_bytes(body), rest))
}

/// Read an OBJECT IDENTIFIER.
pub fn read_oid(input: &[u8]) -> Result<(ObjectIdentifier, &[u8])> {
    const CONTEXT: &str = "DER object identifier";
    let (body, rest) = read_tlv(input, TAG_OID, CONTEXT)?;
    let (&head, tail) = body
        .split_first()
        .ok_or_else(|| Error::parse(CONTEXT, "empty body"))?;
    let mut arcs = vec![u64::from(head / 40), u64::from(head % 40)];
    let mut arc = 0u64;
    let mut continued = false;
    for &byte in tail {
        if arc > u64::MAX >> 7 {
            return Err(Error::parse(CONTEXT, "arc does not fit in 64 bits"));
        }
        arc = (arc << 7) | u64::from(byte & 0x7f);
        if byte & 0x80 == 0 {
            arcs.push(arc);
            arc = 0;
            continued = false;
        } else {
            continued = true;
        }
    }
    if continued {
        return Err(Error::parse(CONTEXT, "truncated arc"));
    }
    Ok((ObjectIdentifier::new(arcs), rest))
}

/// Read a BIT STRING, checking and stripping the unused-bits octet.
pub fn read_bit_string(input: &[u8]) -> Result<(&[u8], &[u8])> {
    let (body, rest) = read_tlv(input, TAG_BIT_STRING, "DER bit string")?;
    let (&unused, payload) = body
        .split_first()
        .ok_or_else(|| Error::parse("DER bit string", "missing unused-bits octet"))?;
    if unused != 0 {
        return Err(Error::parse(
            "DER bit string",
            format!("{unused} unused bits, expected 0"),
        ));
    }
    Ok((payload, rest))
}

/// Read an OCTET STRING.
pub fn read_octet_string(input: &[u8]) -> Result<(&[u8], &[u8])> {
    read_tlv(input, TAG_OCTET_STRING, "DER octet string")
}

/// Read a context-specific constructed block `[slot]`.
pub fn read_context(input: &[u8], slot: u8) -> Result<(&[u8], &[u8])> {
    read_tlv(input, TAG_CONTEXT | slot, "DER context block")
}

/// Fail with a parse error if `rest` still holds bytes.
///
/// Used by structures that must be exactly consumed.
pub fn expect_empty(rest: &[u8], context: &'static str) -> Result<()> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(Error::parse(
            context,
            format!("trailing bytes {}", hex::encode(rest)),
        ))
    }
}

fn encode_tlv(tag: u8, body: &[u8]) -> Vec<u8> {
    let mut out = vec![tag];
    out.extend_from_slice(&encode_length(body.len()));
    out.extend_from_slice(body);
    out
}

fn encode_length(len: usize) -> Vec<u8> {
    if len < 0x80 {
        return vec![len as u8];
    }
    let bytes = len.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    let mut out = vec![0x80 | (bytes.len() - skip) as u8];
    out.extend_from_slice(&bytes[skip..]);
    out
}

fn encode_base128(mut arc: u64) -> Vec<u8> {
    let mut out = vec![(arc & 0x7f) as u8];
    arc >>= 7;
    while arc > 0 {
        out.push((arc & 0x7f) as u8 | 0x80);
        arc >>= 7;
    }
    out.reverse();
    out
}

fn read_tlv<'a>(input: &'a [u8], tag: u8, context: &'static str) -> Result<(&'a [u8], &'a [u8])> {
    let (&first, rest) = input
        .split_first()
        .ok_or_else(|| Error::parse(context, "unexpected end of input"))?;
    if first != tag {
        return Err(Error::parse(
            context,
            format!("expected tag {tag:#04x}, found {first:#04x}"),
        ));
    }
    let (len, rest) = read_length(rest, context)?;
    if rest.len() < len {
        return Err(Error::parse(
            context,
            format!("length {len} exceeds the {} remaining bytes", rest.len()),
        ));
    }
    Ok(rest.split_at(len))
}

fn read_length<'a>(input: &'a [u8], context: &'static str) -> Result<(usize, &'a [u8])> {
    let (&first, rest) = input
        .split_first()
        .ok_or_else(|| Error::parse(context, "missing length octet"))?;
    if first & 0x80 == 0 {
        return Ok((usize::from(first), rest));
    }
    let count = usize::from(first & 0x7f);
    if count == 0 || count > size_of::<usize>() {
        return Err(Error::parse(
            context,
            format!("unsupported length-of-length {count}"),
        ));
    }
    if rest.len() < count {
        return Err(Error::parse(context, "truncated long-form length"));
    }
    let mut len = 0usize;
    for &byte in &rest[..count] {
        len = (len << 8) | usize::from(byte);
    }
    Ok((len, &rest[count..]))
}
