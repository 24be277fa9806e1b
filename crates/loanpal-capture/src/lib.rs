// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// loanpal-capture — Headless engine behind the DocumentCapture widget.
//
// Provides the per-slot state machine and its render model, MIME filtering
// and content sniffing, the data-URI codec handed to hosts, the async
// capture cycle (read → preview → simulated processing → hand-off) bound to
// the widget's lifetime, and host-side receipts for received documents.

pub mod cycle;
pub mod data_uri;
pub mod mime;
pub mod receipt;
pub mod slot;
pub mod source;

#[cfg(test)]
mod fixtures;

pub use cycle::{CycleOutcome, LifetimeGuard, SlotHandle, SlotLifetime, resume_cycle, run_cycle};
pub use data_uri::DataUri;
pub use mime::MimeFilter;
pub use receipt::DocumentReceipt;
pub use slot::{Caption, CaptionTone, CaptureSlot, PreviewImage, SlotView};
