//! PEM envelopes.
//!
//! Base64 (RFC 4648 standard alphabet, padded) of DER bytes between
//! `-----BEGIN <LABEL>-----` / `-----END <LABEL>-----` lines, with the body
//! wrapped at 64 columns. Decoding tolerates surrounding text and CRLF line
//! endings.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::{Error, Result};

const LINE_WIDTH: usize = 64;

/// Wrap DER bytes in a labeled PEM envelope.
pub fn encode(label: &str, der: &[u8]) -> String {
    let body = STANDARD.encode(der);
    let mut out = format!("-----BEGIN {label}-----\n");
    let mut rest = body.as_str();
    while !rest.is_empty() {
        let (line, tail) = rest.split_at(rest.len().min(LINE_WIDTH));
        out.push_str(line);
        out.push('\n');
        rest = tail;
    }
    out.push_str("-----END ");
    out.push_str(label);
    out.push_str("-----\n");
    out
}

/// Extract and decode the Base64 body of a labeled PEM envelope.
pub fn decode(label: &str, text: &str) -> Result<Vec<u8>> {
    let header = format!("-----BEGIN {label}-----");
    let footer = format!("-----END {label}-----");
    let start = text
        .find(&header)
        .ok_or_else(|| Error::parse("PEM envelope", format!("missing `{header}` header")))?;
    let after = &text[start + header.len()..];
    let end = after
        .find(&footer)
        .ok_or_else(|| Error::parse("PEM envelope", format!("missing `{footer}` footer")))?;
    let body: String = after[..end]
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    STANDARD
        .decode(body.as_bytes())
        .map_err(|e| Error::parse("PEM envelope", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_wraps_at_64_columns() {
        let payload: Vec<u8> = (0u8..=99).collect();
        let text = encode("PUBLIC KEY", &payload);
        assert!(text.starts_with("-----BEGIN PUBLIC KEY-----\n"));
        assert!(text.ends_with("-----END PUBLIC KEY-----\n"));
        let longest = text.lines().map(str::len).max().unwrap();
        assert_eq!(longest, 64);
        assert_eq!(decode("PUBLIC KEY", &text).unwrap(), payload);
    }

    #[test]
    fn decode_tolerates_crlf_and_surrounding_text() {
        let text = encode("EC PRIVATE KEY", b"tolerant");
        let wrapped = format!("preamble\r\n{}\r\ntrailer", text.replace('\n', "\r\n"));
        assert_eq!(decode("EC PRIVATE KEY", &wrapped).unwrap(), b"tolerant");
    }

    #[test]
    fn wrong_label_is_a_parse_error() {
        let text = encode("PUBLIC KEY", b"payload");
        assert!(matches!(
            decode("EC PRIVATE KEY", &text),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn corrupt_body_is_a_parse_error() {
        let text = "-----BEGIN PUBLIC KEY-----\n!!!!\n-----END PUBLIC KEY-----\n";
        assert!(matches!(
            decode("PUBLIC KEY", text),
            Err(Error::Parse { .. })
        ));
    }
}
