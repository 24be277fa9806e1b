// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Documents page — one capture slot per required document, progress, and
// the receipts the application has accepted so far.

use dioxus::prelude::*;

use crate::components::document_capture::DocumentCapture;
use crate::services::capture_services::CaptureServices;
use crate::state::ApplicationState;

#[component]
pub fn ApplicationDocuments() -> Element {
    let mut state = use_context::<Signal<ApplicationState>>();
    let svc = use_context::<CaptureServices>();
    let mut ready = use_signal(|| false);

    let requirements = svc.config().requirements.clone();
    let total = requirements.len();
    let uploaded = state.read().uploaded_count(&requirements);
    let complete = state.read().all_uploaded(&requirements);

    rsx! {
        div {
            h1 { "Your Documents" }
            p { style: "color: #666;",
                "Take a clear photo of each document. Make sure all four corners are visible."
            }
            p { style: "font-size: 14px; color: #007aff; margin-bottom: 16px;",
                "{uploaded} of {total} documents uploaded"
            }

            for req in requirements.iter() {
                {
                    let document_type = req.document_type.clone();
                    let is_uploaded = state.read().is_uploaded(&document_type);
                    let received_type = document_type.clone();
                    rsx! {
                        DocumentCapture {
                            key: "{document_type}",
                            document_type: document_type.clone(),
                            label: req.label.clone(),
                            is_uploaded,
                            on_upload: move |uri: String| {
                                if let Err(e) = state.write().record(&received_type, &uri) {
                                    tracing::debug!(error = %e, "slot left open for another capture");
                                }
                            },
                        }
                    }
                }
            }

            if let Some(ref notice) = state.read().notice {
                div { style: "padding: 12px; margin: 12px 0; border-radius: 8px; background: #fef2f2; color: #b91c1c; font-size: 14px;",
                    "{notice}"
                }
            }

            if !state.read().receipts.is_empty() {
                h2 { style: "margin-top: 24px;", "Received" }
                for receipt in state.read().receipts.values() {
                    {
                        let size = receipt.display_size();
                        let short = receipt.sha256.get(..12).unwrap_or(&receipt.sha256).to_string();
                        let time = receipt.received_at.format("%H:%M:%S").to_string();
                        rsx! {
                            div { key: "{receipt.id}",
                                style: "display: flex; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid #f0f0f0; font-size: 14px;",
                                span { "{receipt.document_type}" }
                                span { style: "color: #888;", "{receipt.mime} \u{00B7} {size} \u{00B7} {short} \u{00B7} {time}" }
                            }
                        }
                    }
                }
            }

            button {
                style: "width: 100%; margin-top: 24px; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px;",
                disabled: !complete,
                onclick: move |_| {
                    tracing::info!("all documents received");
                    ready.set(true);
                },
                "Continue"
            }

            if ready() && complete {
                p { style: "margin-top: 12px; color: #16a34a; text-align: center;",
                    "All documents received"
                }
            }
        }
    }
}
