// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// DocumentCapture — one slot: capture, preview, hand off to the host.
//
// All decisions live in `loanpal_capture::CaptureSlot`; this component only
// renders its `SlotView` and starts cycles. The host owns `is_uploaded`.

use dioxus::prelude::*;

use loanpal_capture::slot::PROCESSING_LABEL;
use loanpal_capture::{CaptureSlot, SlotHandle, SlotLifetime, resume_cycle};

use crate::services::capture_services::CaptureServices;

/// Slot state held in a Dioxus signal.
struct SignalSlot(Signal<CaptureSlot>);

impl SlotHandle for SignalSlot {
    fn update<R>(&mut self, f: impl FnOnce(&mut CaptureSlot) -> R) -> R {
        let mut slot = self.0.write();
        f(&mut *slot)
    }
}

#[component]
pub fn DocumentCapture(
    document_type: String,
    label: String,
    on_upload: EventHandler<String>,
    is_uploaded: bool,
) -> Element {
    let svc = use_context::<CaptureServices>();
    let capture = svc.capture_config().clone();
    let mut slot = use_signal(|| CaptureSlot::new(&capture));

    // Cycles still in flight when the slot unmounts must not call back.
    let lifetime = use_hook(SlotLifetime::new);
    {
        let lifetime = lifetime.clone();
        use_drop(move || lifetime.end());
    }

    let view = slot.read().view(&document_type, &label, is_uploaded);
    let border = if view.show_completion { "#22c55e" } else { "#e0e0e0" };
    let caption_color = view.caption.tone.color();
    let preview_height = capture.preview_max_height_px;

    let on_capture = move |_: MouseEvent| {
        if !slot.peek().can_capture(is_uploaded) {
            return;
        }
        let picked = match svc.select_document() {
            Ok(picked) => picked,
            Err(e) => {
                tracing::error!(error = %e, "document selection failed");
                slot.write().record_failure(&e);
                return;
            }
        };
        let Some(picked) = picked else {
            tracing::debug!("selection cancelled");
            return;
        };
        // Busy check and phase change happen here, before any task is spawned.
        let id = match slot.write().begin(Some(&picked), is_uploaded) {
            Ok(Some(id)) => id,
            Ok(None) => return,
            Err(e) => {
                tracing::debug!(error = %e, "capture not started");
                return;
            }
        };
        let guard = lifetime.guard();
        let delay = capture.processing_delay();
        spawn(async move {
            let result = resume_cycle(SignalSlot(slot), id, picked, delay, guard, move |uri| {
                on_upload.call(uri)
            })
            .await;
            if let Err(e) = result {
                tracing::debug!(error = %e, "capture cycle did not deliver");
            }
        });
    };

    rsx! {
        div { class: "document-capture",
            style: "border: 1px solid {border}; border-radius: 12px; padding: 16px; margin-bottom: 12px; background: white;",

            div { style: "display: flex; align-items: center; justify-content: space-between;",
                div { style: "display: flex; align-items: center; gap: 16px;",
                    div { style: "display: flex; width: 40px; height: 40px; align-items: center; justify-content: center; border-radius: 50%; background: #e7f0ff; font-size: 20px;",
                        "\u{1F4C4}"
                    }
                    div {
                        h3 { style: "margin: 0; font-size: 16px; font-weight: 500;", "{view.label}" }
                        p { style: "margin: 4px 0 0; font-size: 14px; color: {caption_color};",
                            "{view.caption.text}"
                        }
                    }
                }

                if view.show_capture {
                    button {
                        style: "padding: 6px 12px; border-radius: 8px; border: 1px solid #ccc; background: white; font-size: 14px;",
                        onclick: on_capture,
                        "\u{1F4F7} {view.capture_label}"
                    }
                }

                if view.show_progress {
                    div { style: "display: flex; align-items: center;",
                        div { class: "spinner",
                            style: "width: 20px; height: 20px; border-radius: 50%; border: 2px solid #e0e0e0; border-bottom-color: #007aff; animation: spin 1s linear infinite;",
                        }
                        span { style: "margin-left: 8px; font-size: 14px;", "{PROCESSING_LABEL}" }
                    }
                }

                if view.show_completion {
                    span { style: "font-size: 24px; color: #16a34a;", "\u{2713}" }
                }
            }

            if let Some(ref preview) = view.preview {
                div { style: "margin-top: 16px; text-align: center;",
                    img {
                        src: "{preview.src}",
                        alt: "{preview.alt}",
                        style: "max-height: {preview_height}px; border-radius: 6px;",
                    }
                }
            }
        }
    }
}
