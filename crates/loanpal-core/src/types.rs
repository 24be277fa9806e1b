// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for LoanPal document capture.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one capture cycle (selection → preview → hand-off).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaptureId(pub Uuid);

impl CaptureId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CaptureId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CaptureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One document the hosting screen asks the applicant for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRequirement {
    /// Opaque identifier, e.g. `drivers_license`.
    pub document_type: String,
    /// Title shown to the applicant.
    pub label: String,
}

impl DocumentRequirement {
    pub fn new(document_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            document_type: document_type.into(),
            label: label.into(),
        }
    }
}

/// Visible status of a capture slot.
///
/// `Uploaded` is only ever derived from the parent's flag; the widget itself
/// can go no further than `Uploading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotStatus {
    /// Nothing in flight, parent has not confirmed the slot.
    Empty,
    /// A selection is being read or processed.
    Uploading,
    /// The parent marked the slot complete.
    Uploaded,
}

impl SlotStatus {
    /// Derive the status from the parent's flag and the local busy flag.
    pub fn derive(is_uploaded: bool, busy: bool) -> Self {
        if is_uploaded {
            Self::Uploaded
        } else if busy {
            Self::Uploading
        } else {
            Self::Empty
        }
    }
}

/// Which camera the platform should offer first during selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureHint {
    /// Rear-facing camera (documents on a table).
    #[default]
    Environment,
    /// Front-facing camera.
    User,
    /// Plain file selection, no camera preference.
    None,
}

impl CaptureHint {
    pub fn prefers_camera(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Constraints handed to the platform when asking for a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRequest {
    /// Comma-separated MIME patterns, e.g. `image/*`.
    pub accept: String,
    pub capture: CaptureHint,
}

impl SelectionRequest {
    pub fn new(accept: impl Into<String>, capture: CaptureHint) -> Self {
        Self {
            accept: accept.into(),
            capture,
        }
    }

    /// Any image, rear camera preferred.
    pub fn images() -> Self {
        Self::new("image/*", CaptureHint::Environment)
    }
}

impl Default for SelectionRequest {
    fn default() -> Self {
        Self::images()
    }
}

/// Where the bytes of a picked file live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// A file on the local filesystem (desktop pickers).
    Path(PathBuf),
    /// Bytes already in memory (camera bridges).
    Bytes(Vec<u8>),
}

/// A file the user chose, before its content has been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    /// Display name (file name or a synthetic camera name).
    pub name: String,
    /// MIME type the platform reported or the extension implies.
    pub declared_mime: Option<String>,
    pub source: FileSource,
}

impl PickedFile {
    /// Build from a filesystem path, inferring the MIME type from the extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".into());
        let declared_mime = path
            .extension()
            .and_then(|e| ImageKind::from_extension(&e.to_string_lossy()))
            .map(|kind| kind.mime_type().to_string());
        Self {
            name,
            declared_mime,
            source: FileSource::Path(path),
        }
    }

    /// Wrap a JPEG handed back by a native camera.
    pub fn from_camera(bytes: Vec<u8>) -> Self {
        Self {
            name: "camera-capture.jpg".into(),
            declared_mime: Some(ImageKind::Jpeg.mime_type().into()),
            source: FileSource::Bytes(bytes),
        }
    }
}

/// Image formats the capture flow recognises by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageKind {
    Jpeg,
    Png,
    Gif,
    WebP,
    Bmp,
    Tiff,
}

impl ImageKind {
    pub const ALL: [ImageKind; 6] = [
        Self::Jpeg,
        Self::Png,
        Self::Gif,
        Self::WebP,
        Self::Bmp,
        Self::Tiff,
    ];

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::WebP => "image/webp",
            Self::Bmp => "image/bmp",
            Self::Tiff => "image/tiff",
        }
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Jpeg => &["jpg", "jpeg"],
            Self::Png => &["png"],
            Self::Gif => &["gif"],
            Self::WebP => &["webp"],
            Self::Bmp => &["bmp"],
            Self::Tiff => &["tif", "tiff"],
        }
    }

    /// Infer the image kind from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.extensions().contains(&ext.as_str()))
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.mime_type().eq_ignore_ascii_case(mime))
    }
}
