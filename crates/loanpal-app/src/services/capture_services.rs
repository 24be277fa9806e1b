// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Capture services — configuration plus the platform bridge, shared with
// every component via `use_context::<CaptureServices>()`.

use std::sync::Arc;

use loanpal_bridge::platform_bridge;
use loanpal_bridge::traits::PlatformBridge;
use loanpal_core::error::Result;
use loanpal_core::types::PickedFile;
use loanpal_core::{AppConfig, CaptureConfig};
use tracing::info;

/// Cheaply cloneable handle to the app's configuration and platform bridge.
#[derive(Clone)]
pub struct CaptureServices {
    bridge: Arc<dyn PlatformBridge>,
    config: Arc<AppConfig>,
}

impl CaptureServices {
    /// Load configuration and pick the bridge for this platform. Call once at
    /// app startup.
    pub fn init() -> Self {
        let config = AppConfig::load();
        let bridge: Arc<dyn PlatformBridge> = Arc::from(platform_bridge());
        info!(
            platform = bridge.platform_name(),
            requirements = config.requirements.len(),
            delay_ms = config.capture.processing_delay_ms,
            "capture services initialised"
        );
        Self {
            bridge,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn capture_config(&self) -> &CaptureConfig {
        &self.config.capture
    }

    /// Ask the platform for a document using the configured MIME filter and
    /// camera hint. Blocks until the dialog closes.
    pub fn select_document(&self) -> Result<Option<PickedFile>> {
        self.bridge
            .select_document(&self.config.capture.selection_request())
    }
}
