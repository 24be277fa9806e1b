// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application state — what the hosting screen knows about each slot.
//
// Capture slots keep their own transient state; the host only records the
// receipts it accepted and derives every slot's `is_uploaded` from them.

use std::collections::BTreeMap;

use loanpal_capture::DocumentReceipt;
use loanpal_core::error::Result;
use loanpal_core::human_errors::humanize_error;
use loanpal_core::types::DocumentRequirement;

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug, Clone, Default)]
pub struct ApplicationState {
    /// Accepted documents keyed by document type.
    pub receipts: BTreeMap<String, DocumentReceipt>,
    /// Last problem with a received document.
    pub notice: Option<String>,
}

impl ApplicationState {
    /// Accept a data URI from a capture slot.
    ///
    /// A document that fails validation leaves the slot open and sets the
    /// notice.
    pub fn record(&mut self, document_type: &str, data_uri: &str) -> Result<()> {
        match DocumentReceipt::from_data_uri(document_type, data_uri) {
            Ok(receipt) => {
                self.receipts.insert(document_type.to_string(), receipt);
                self.notice = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(document_type, error = %e, "document rejected");
                self.notice = Some(humanize_error(&e).inline());
                Err(e)
            }
        }
    }

    pub fn is_uploaded(&self, document_type: &str) -> bool {
        self.receipts.contains_key(document_type)
    }

    pub fn uploaded_count(&self, requirements: &[DocumentRequirement]) -> usize {
        requirements
            .iter()
            .filter(|r| self.is_uploaded(&r.document_type))
            .count()
    }

    pub fn all_uploaded(&self, requirements: &[DocumentRequirement]) -> bool {
        self.uploaded_count(requirements) == requirements.len()
    }
}
