// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Capture slot — the state machine behind one DocumentCapture widget.
//
// Phases: Idle → Reading(id) → Processing(id) → Idle (preview kept).
// The parent owns completion: the slot can be busy, never "uploaded".
// Every transition is synchronous; the async parts (reading, the processing
// delay) live in `cycle`.

use loanpal_core::config::CaptureConfig;
use loanpal_core::error::{LoanpalError, Result};
use loanpal_core::human_errors::{HumanError, Severity, humanize_error};
use loanpal_core::types::{CaptureId, PickedFile, SlotStatus};
use tracing::{debug, info, instrument, warn};

use crate::data_uri;
use crate::mime::{MimeFilter, sniff_image};

/// Label next to the progress indicator.
pub const PROCESSING_LABEL: &str = "Processing...";

const CAPTION_IDLE: &str = "Upload or take a photo";
const CAPTION_UPLOADED: &str = "Document uploaded successfully";

const ACTION_CAPTURE: &str = "Capture";
const ACTION_RETAKE: &str = "Retake";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Reading(CaptureId),
    Processing(CaptureId),
}

/// Local, transient state of one capture slot.
#[derive(Debug, Clone)]
pub struct CaptureSlot {
    filter: MimeFilter,
    max_file_bytes: u64,
    phase: Phase,
    preview: Option<String>,
    failure: Option<HumanError>,
}

impl CaptureSlot {
    pub fn new(config: &CaptureConfig) -> Self {
        Self {
            filter: MimeFilter::parse(&config.accept),
            max_file_bytes: config.max_file_bytes,
            phase: Phase::Idle,
            preview: None,
            failure: None,
        }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn is_busy(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Data URI of the current preview, if any.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Inline notice left by the last failed cycle.
    pub fn failure(&self) -> Option<&HumanError> {
        self.failure.as_ref()
    }

    /// Largest file a cycle may read.
    pub fn max_file_bytes(&self) -> u64 {
        self.max_file_bytes
    }

    /// Whether the capture action may be offered.
    pub fn can_capture(&self, is_uploaded: bool) -> bool {
        !is_uploaded && !self.is_busy()
    }

    // -- Transitions ----------------------------------------------------------

    /// Start a cycle for the file the user picked.
    ///
    /// `None` means the dialog was dismissed: nothing changes and `Ok(None)`
    /// is returned. A declared type outside the filter, or no declared type
    /// at all unless the filter accepts anything, is rejected before the slot
    /// goes busy.
    #[instrument(skip(self, picked), fields(file = ?picked.map(|p| &p.name)))]
    pub fn begin(&mut self, picked: Option<&PickedFile>, is_uploaded: bool) -> Result<Option<CaptureId>> {
        let Some(picked) = picked else {
            debug!("selection cancelled");
            return Ok(None);
        };
        if is_uploaded {
            return Err(LoanpalError::SlotCompleted);
        }
        if self.is_busy() {
            warn!("capture already in flight, ignoring selection");
            return Err(LoanpalError::SlotBusy);
        }
        let rejected = match picked.declared_mime.as_deref() {
            Some(mime) if self.filter.accepts(mime) => None,
            Some(mime) => Some(mime.to_string()),
            None if self.filter.accepts_any() => None,
            None => Some(format!("unknown ({})", picked.name)),
        };
        if let Some(kind) = rejected {
            let err = LoanpalError::UnsupportedType(kind);
            self.record_failure(&err);
            return Err(err);
        }

        let id = CaptureId::new();
        self.phase = Phase::Reading(id);
        self.preview = None;
        self.failure = None;
        info!(capture_id = %id, "capture started");
        Ok(Some(id))
    }

    /// Accept the result of reading the file.
    ///
    /// On success the preview is set immediately and the slot enters its
    /// processing window; the returned data URI is what the host will get.
    /// Any failure exits the busy state and clears the preview.
    #[instrument(skip(self, read))]
    pub fn loaded(&mut self, id: CaptureId, read: Result<Vec<u8>>) -> Result<String> {
        if self.phase != Phase::Reading(id) {
            return Err(LoanpalError::StaleCapture);
        }

        let bytes = match read {
            Ok(bytes) => bytes,
            Err(e) => return Err(self.fail(e)),
        };
        if bytes.is_empty() {
            return Err(self.fail(LoanpalError::EmptyFile));
        }
        let size = bytes.len() as u64;
        if size > self.max_file_bytes {
            return Err(self.fail(LoanpalError::FileTooLarge {
                size,
                limit: self.max_file_bytes,
            }));
        }
        let mime = match sniff_image(&bytes) {
            Some(mime) if self.filter.accepts(mime) => mime,
            Some(mime) => return Err(self.fail(LoanpalError::UnsupportedType(mime.to_string()))),
            None => {
                return Err(self.fail(LoanpalError::UnsupportedType(
                    "unrecognised file content".into(),
                )));
            }
        };

        let uri = data_uri::encode(mime, &bytes);
        info!(mime, bytes = bytes.len(), "preview ready");
        self.preview = Some(uri.clone());
        self.phase = Phase::Processing(id);
        Ok(uri)
    }

    /// Close the processing window and return the payload for the host.
    ///
    /// The preview is kept for the life of the slot.
    #[instrument(skip(self))]
    pub fn finish(&mut self, id: CaptureId) -> Result<String> {
        if self.phase != Phase::Processing(id) {
            return Err(LoanpalError::StaleCapture);
        }
        self.phase = Phase::Idle;
        let uri = self.preview.clone().ok_or(LoanpalError::StaleCapture)?;
        info!("capture complete");
        Ok(uri)
    }

    /// Show a failure that happened outside a cycle (e.g. the picker failed).
    pub fn record_failure(&mut self, err: &LoanpalError) {
        warn!(error = %err, "capture failed");
        self.failure = Some(humanize_error(err));
    }

    fn fail(&mut self, err: LoanpalError) -> LoanpalError {
        self.phase = Phase::Idle;
        self.preview = None;
        self.record_failure(&err);
        err
    }

    // -- Rendering ------------------------------------------------------------

    /// Render model for the current state and props.
    pub fn view(&self, document_type: &str, label: &str, is_uploaded: bool) -> SlotView {
        let busy = self.is_busy();
        let notice = self.failure.as_ref().filter(|_| !busy);
        let caption = match notice {
            _ if is_uploaded => Caption::new(CAPTION_UPLOADED, CaptionTone::Success),
            Some(failure) => Caption::new(failure.inline(), CaptionTone::for_severity(failure.severity)),
            None => Caption::new(CAPTION_IDLE, CaptionTone::Muted),
        };
        let capture_label = match notice {
            Some(failure) if failure.retriable => ACTION_RETAKE,
            _ => ACTION_CAPTURE,
        };

        SlotView {
            label: label.to_string(),
            status: SlotStatus::derive(is_uploaded, busy),
            caption,
            show_capture: !is_uploaded && !busy,
            capture_label,
            show_progress: !is_uploaded && busy,
            show_completion: is_uploaded,
            preview: self.preview.as_ref().map(|src| PreviewImage {
                src: src.clone(),
                alt: format!("{document_type} preview"),
            }),
        }
    }
}

impl Default for CaptureSlot {
    fn default() -> Self {
        Self::new(&CaptureConfig::default())
    }
}

/// What the widget draws. Exactly one of `show_capture`, `show_progress`,
/// `show_completion` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotView {
    pub label: String,
    pub status: SlotStatus,
    pub caption: Caption,
    pub show_capture: bool,
    /// Text of the capture action: "Retake" after a failure worth retrying.
    pub capture_label: &'static str,
    pub show_progress: bool,
    pub show_completion: bool,
    pub preview: Option<PreviewImage>,
}

/// Line under the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    pub text: String,
    pub tone: CaptionTone,
}

impl Caption {
    fn new(text: impl Into<String>, tone: CaptionTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionTone {
    Muted,
    Success,
    /// A transient failure; trying again is likely to work.
    Warning,
    Error,
}

impl CaptionTone {
    fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Transient => Self::Warning,
            Severity::ActionRequired | Severity::Permanent => Self::Error,
        }
    }

    /// CSS colour for the caption.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Muted => "#6b7280",
            Self::Success => "#16a34a",
            Self::Warning => "#b45309",
            Self::Error => "#b91c1c",
        }
    }
}

/// Thumbnail under the slot row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub src: String,
    pub alt: String,
}
