// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Host-side receipts for documents handed over by a capture slot.
//
// The widget's contract ends at `on_upload(data_uri)`. A host that accepts
// the document validates the URI and keeps a small fingerprint of it; the
// payload itself is not stored here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;
use uuid::Uuid;

use loanpal_core::error::{LoanpalError, Result};

use crate::data_uri::DataUri;
use crate::mime::sniff_image;

/// What the host recorded for one received document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReceipt {
    pub id: Uuid,
    pub document_type: String,
    pub mime: String,
    pub size_bytes: u64,
    /// SHA-256 of the decoded bytes, lowercase hex.
    pub sha256: String,
    pub received_at: DateTime<Utc>,
}

impl DocumentReceipt {
    /// Validate a data URI from a slot and fingerprint its content.
    ///
    /// Rejects URIs that do not decode, carry no bytes, or whose declared
    /// MIME type disagrees with the sniffed content.
    pub fn from_data_uri(document_type: &str, uri: &str) -> Result<Self> {
        let parsed = DataUri::parse(uri)?;
        if parsed.bytes.is_empty() {
            return Err(LoanpalError::EmptyFile);
        }
        match sniff_image(&parsed.bytes) {
            Some(sniffed) if sniffed.eq_ignore_ascii_case(&parsed.mime) => {}
            Some(sniffed) => {
                return Err(LoanpalError::InvalidDataUri(format!(
                    "declared {} but content is {sniffed}",
                    parsed.mime
                )));
            }
            None => return Err(LoanpalError::UnsupportedType(parsed.mime)),
        }

        let receipt = Self {
            id: Uuid::new_v4(),
            document_type: document_type.to_string(),
            sha256: hex::encode(Sha256::digest(&parsed.bytes)),
            size_bytes: parsed.bytes.len() as u64,
            mime: parsed.mime,
            received_at: Utc::now(),
        };
        info!(
            receipt_id = %receipt.id,
            document_type,
            mime = %receipt.mime,
            bytes = receipt.size_bytes,
            sha256 = %receipt.sha256,
            "document received"
        );
        Ok(receipt)
    }

    /// Size for display, e.g. "12 KB".
    pub fn display_size(&self) -> String {
        if self.size_bytes < 1024 {
            format!("{} B", self.size_bytes)
        } else {
            format!("{} KB", self.size_bytes / 1024)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_uri::encode;
    use crate::fixtures::sample_jpeg;

    #[test]
    fn fingerprints_decoded_bytes() {
        let jpeg = sample_jpeg();
        let receipt =
            DocumentReceipt::from_data_uri("drivers_license", &encode("image/jpeg", &jpeg)).expect("receipt");

        assert_eq!(receipt.document_type, "drivers_license");
        assert_eq!(receipt.mime, "image/jpeg");
        assert_eq!(receipt.size_bytes, jpeg.len() as u64);
        assert_eq!(receipt.sha256, hex::encode(Sha256::digest(&jpeg)));
        assert_eq!(receipt.sha256.len(), 64);
    }

    #[test]
    fn mismatched_mime_is_rejected() {
        let uri = encode("image/png", &sample_jpeg());
        let err = DocumentReceipt::from_data_uri("drivers_license", &uri).unwrap_err();
        assert!(matches!(err, LoanpalError::InvalidDataUri(_)));
    }

    #[test]
    fn non_image_payload_is_rejected() {
        let uri = encode("application/pdf", b"%PDF-1.7");
        let err = DocumentReceipt::from_data_uri("bank_statement", &uri).unwrap_err();
        assert!(matches!(err, LoanpalError::UnsupportedType(_)));
    }

    #[test]
    fn empty_payload_is_rejected() {
        let err = DocumentReceipt::from_data_uri("bank_statement", "data:image/png;base64,").unwrap_err();
        assert!(matches!(err, LoanpalError::EmptyFile));
    }

    #[test]
    fn display_size_uses_kilobytes() {
        let mut receipt =
            DocumentReceipt::from_data_uri("pay_stub", &encode("image/jpeg", &sample_jpeg())).expect("receipt");
        receipt.size_bytes = 10 * 1024 + 5;
        assert_eq!(receipt.display_size(), "10 KB");
        receipt.size_bytes = 900;
        assert_eq!(receipt.display_size(), "900 B");
    }
}
