// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Data URI codec — `data:<mime>;base64,<payload>`.
//
// This is the only format the widget hands to its host: the preview image
// and the `on_upload` payload are the same string.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use loanpal_core::error::{LoanpalError, Result};

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// Binary content tagged with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl DataUri {
    pub fn new(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            bytes,
        }
    }

    /// Encode as a base64 data URI.
    pub fn encode(&self) -> String {
        encode(&self.mime, &self.bytes)
    }

    /// Parse a base64 data URI back into its MIME type and bytes.
    ///
    /// Only the base64 form is accepted; percent-encoded payloads are never
    /// produced by the widget.
    pub fn parse(uri: &str) -> Result<Self> {
        let rest = uri
            .strip_prefix(SCHEME)
            .ok_or_else(|| LoanpalError::InvalidDataUri("missing `data:` scheme".into()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| LoanpalError::InvalidDataUri("missing `,` separator".into()))?;
        let mime = header
            .strip_suffix(BASE64_MARKER)
            .ok_or_else(|| LoanpalError::InvalidDataUri("payload is not base64".into()))?;
        if mime.is_empty() {
            return Err(LoanpalError::InvalidDataUri("missing MIME type".into()));
        }
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| LoanpalError::InvalidDataUri(format!("bad base64 payload: {e}")))?;
        Ok(Self::new(mime, bytes))
    }
}

/// Encode `bytes` as a data URI without taking ownership.
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    let payload = STANDARD.encode(bytes);
    let mut uri = String::with_capacity(SCHEME.len() + mime.len() + BASE64_MARKER.len() + 1 + payload.len());
    uri.push_str(SCHEME);
    uri.push_str(mime);
    uri.push_str(BASE64_MARKER);
    uri.push(',');
    uri.push_str(&payload);
    uri
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_value() {
        assert_eq!(encode("image/png", b"hello"), "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn parse_recovers_exact_bytes() {
        let bytes: Vec<u8> = (0..=255).collect();
        let uri = DataUri::new("image/jpeg", bytes.clone()).encode();
        let parsed = DataUri::parse(&uri).expect("parse");
        assert_eq!(parsed.mime, "image/jpeg");
        assert_eq!(parsed.bytes, bytes);
    }

    #[test]
    fn rejects_missing_scheme() {
        let err = DataUri::parse("image/png;base64,aGVsbG8=").unwrap_err();
        assert!(matches!(err, LoanpalError::InvalidDataUri(_)));
    }

    #[test]
    fn rejects_plain_text_payload() {
        assert!(DataUri::parse("data:text/plain,hello").is_err());
    }

    #[test]
    fn rejects_corrupt_base64() {
        assert!(DataUri::parse("data:image/png;base64,@@@").is_err());
    }

    #[test]
    fn rejects_empty_mime() {
        assert!(DataUri::parse("data:;base64,aGVsbG8=").is_err());
    }
}
