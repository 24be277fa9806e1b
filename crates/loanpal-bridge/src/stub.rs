// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for targets without a native binding yet.
//
// Every trait method returns `PlatformUnavailable`; the widget shows that as
// an inline notice instead of opening anything.

use loanpal_core::error::{LoanpalError, Result};
use loanpal_core::types::{CaptureHint, PickedFile, SelectionRequest};

use crate::traits::*;

/// No-op bridge.
pub struct StubBridge;

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Mobile (stub)"
    }
}

impl NativeCamera for StubBridge {
    fn has_camera(&self) -> bool {
        false
    }

    fn capture_image(&self, _facing: CaptureHint) -> Result<Option<Vec<u8>>> {
        tracing::warn!("NativeCamera::capture_image called on stub bridge");
        Err(LoanpalError::PlatformUnavailable)
    }
}

impl NativeFilePicker for StubBridge {
    fn pick_file(&self, _request: &SelectionRequest) -> Result<Option<PickedFile>> {
        tracing::warn!("NativeFilePicker::pick_file called on stub bridge");
        Err(LoanpalError::PlatformUnavailable)
    }
}
