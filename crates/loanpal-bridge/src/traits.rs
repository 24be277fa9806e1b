// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for file selection.
//
// The capture widget only ever asks for "a file matching these constraints".
// Whether that becomes a camera, a gallery, or a desktop dialog is decided
// here.

use loanpal_core::error::{LoanpalError, Result};
use loanpal_core::types::{CaptureHint, PickedFile, SelectionRequest};

/// Unified bridge that groups the native capabilities the capture flow needs.
pub trait PlatformBridge: NativeFilePicker + NativeCamera {
    /// Human-readable platform name (e.g. "Desktop", "Android 14").
    fn platform_name(&self) -> &str;

    /// Resolve a selection request to a picked file.
    ///
    /// Prefers the camera when the request carries a capture hint and the
    /// device has one. A camera that turns out to be unavailable falls back
    /// to the file picker; cancelling the camera does not.
    /// Returns Ok(None) if the user cancelled.
    fn select_document(&self, request: &SelectionRequest) -> Result<Option<PickedFile>> {
        if request.capture.prefers_camera() && self.has_camera() {
            match self.capture_image(request.capture) {
                Ok(Some(bytes)) => {
                    tracing::info!(bytes = bytes.len(), "image captured from camera");
                    return Ok(Some(PickedFile::from_camera(bytes)));
                }
                Ok(None) => return Ok(None),
                Err(LoanpalError::PlatformUnavailable) => {
                    tracing::debug!("camera unavailable, falling back to file picker");
                }
                Err(e) => return Err(e),
            }
        }
        self.pick_file(request)
    }
}

/// Capture images from the device camera.
pub trait NativeCamera {
    /// Whether the device exposes a camera the bridge can drive.
    fn has_camera(&self) -> bool;

    /// Launch the system camera facing the hinted direction and return the
    /// captured JPEG bytes.
    /// Returns Ok(None) if the user cancelled.
    fn capture_image(&self, facing: CaptureHint) -> Result<Option<Vec<u8>>>;
}

/// Pick files from the device storage.
pub trait NativeFilePicker {
    /// Show a file picker filtered to the request's MIME patterns.
    /// Returns None if cancelled.
    fn pick_file(&self, request: &SelectionRequest) -> Result<Option<PickedFile>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use loanpal_core::types::FileSource;

    /// Scripted bridge recording which capability was used.
    struct FakeBridge {
        camera: Option<Result<Option<Vec<u8>>>>,
        calls: RefCell<Vec<&'static str>>,
    }

    impl FakeBridge {
        fn new(camera: Option<Result<Option<Vec<u8>>>>) -> Self {
            Self {
                camera,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl PlatformBridge for FakeBridge {
        fn platform_name(&self) -> &str {
            "Fake"
        }
    }

    impl NativeCamera for FakeBridge {
        fn has_camera(&self) -> bool {
            self.camera.is_some()
        }

        fn capture_image(&self, _facing: CaptureHint) -> Result<Option<Vec<u8>>> {
            self.calls.borrow_mut().push("camera");
            match &self.camera {
                Some(Ok(bytes)) => Ok(bytes.clone()),
                Some(Err(LoanpalError::PlatformUnavailable)) => Err(LoanpalError::PlatformUnavailable),
                Some(Err(e)) => Err(LoanpalError::Bridge(e.to_string())),
                None => Err(LoanpalError::PlatformUnavailable),
            }
        }
    }

    impl NativeFilePicker for FakeBridge {
        fn pick_file(&self, _request: &SelectionRequest) -> Result<Option<PickedFile>> {
            self.calls.borrow_mut().push("picker");
            Ok(Some(PickedFile::from_path("/tmp/statement.png")))
        }
    }

    #[test]
    fn camera_is_preferred_when_present() {
        let bridge = FakeBridge::new(Some(Ok(Some(vec![0xFF, 0xD8, 0xFF]))));
        let picked = bridge
            .select_document(&SelectionRequest::images())
            .expect("select")
            .expect("picked");

        assert_eq!(picked.declared_mime.as_deref(), Some("image/jpeg"));
        assert_eq!(picked.source, FileSource::Bytes(vec![0xFF, 0xD8, 0xFF]));
        assert_eq!(*bridge.calls.borrow(), vec!["camera"]);
    }

    #[test]
    fn cancelled_camera_does_not_open_picker() {
        let bridge = FakeBridge::new(Some(Ok(None)));
        let picked = bridge.select_document(&SelectionRequest::images()).expect("select");

        assert!(picked.is_none());
        assert_eq!(*bridge.calls.borrow(), vec!["camera"]);
    }

    #[test]
    fn unavailable_camera_falls_back_to_picker() {
        let bridge = FakeBridge::new(Some(Err(LoanpalError::PlatformUnavailable)));
        let picked = bridge
            .select_document(&SelectionRequest::images())
            .expect("select")
            .expect("picked");

        assert_eq!(picked.name, "statement.png");
        assert_eq!(*bridge.calls.borrow(), vec!["camera", "picker"]);
    }

    #[test]
    fn no_hint_goes_straight_to_picker() {
        let bridge = FakeBridge::new(Some(Ok(Some(vec![1]))));
        let request = SelectionRequest::new("image/*", CaptureHint::None);
        bridge.select_document(&request).expect("select");

        assert_eq!(*bridge.calls.borrow(), vec!["picker"]);
    }

    #[test]
    fn camera_failure_propagates() {
        let bridge = FakeBridge::new(Some(Err(LoanpalError::Bridge("intent refused".into()))));
        let err = bridge.select_document(&SelectionRequest::images()).unwrap_err();

        assert!(matches!(err, LoanpalError::Bridge(_)));
    }
}
