// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Desktop bridge — native open-file dialog through `rfd`.
//
// Desktops have no camera intent to launch, so the capture hint is ignored
// and every request becomes an image-filtered file dialog.

use loanpal_core::error::Result;
use loanpal_core::types::{CaptureHint, ImageKind, PickedFile, SelectionRequest};

use crate::traits::*;

/// Bridge used on Linux, macOS, and Windows.
pub struct DesktopBridge;

impl DesktopBridge {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DesktopBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformBridge for DesktopBridge {
    fn platform_name(&self) -> &str {
        "Desktop"
    }
}

impl NativeCamera for DesktopBridge {
    fn has_camera(&self) -> bool {
        false
    }

    fn capture_image(&self, _facing: CaptureHint) -> Result<Option<Vec<u8>>> {
        Err(loanpal_core::LoanpalError::PlatformUnavailable)
    }
}

impl NativeFilePicker for DesktopBridge {
    fn pick_file(&self, request: &SelectionRequest) -> Result<Option<PickedFile>> {
        let extensions = extensions_for_accept(&request.accept);
        tracing::debug!(accept = %request.accept, ?extensions, "opening file dialog");

        let mut dialog = rfd::FileDialog::new().set_title("Choose a photo of your document");
        if !extensions.is_empty() {
            dialog = dialog.add_filter("Images", extensions.as_slice());
        }

        Ok(dialog.pick_file().map(|path| {
            tracing::info!(path = %path.display(), "file chosen");
            PickedFile::from_path(path)
        }))
    }
}

/// File extensions matching a comma-separated MIME accept list.
///
/// An empty result means "no filter" (e.g. `*/*`).
fn extensions_for_accept(accept: &str) -> Vec<&'static str> {
    let mut extensions = Vec::new();
    for pattern in accept.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if pattern == "*/*" || pattern == "*" {
            return Vec::new();
        }
        let kinds: Vec<ImageKind> = if pattern.eq_ignore_ascii_case("image/*") {
            ImageKind::ALL.to_vec()
        } else {
            ImageKind::from_mime(pattern).into_iter().collect()
        };
        for kind in kinds {
            for ext in kind.extensions() {
                if !extensions.contains(ext) {
                    extensions.push(*ext);
                }
            }
        }
    }
    extensions
}
