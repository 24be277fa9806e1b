// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.
//
// Read-only: the JSON file named by `LOANPAL_CONFIG` is loaded once at
// startup. Nothing is ever written back.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{LoanpalError, Result};
use crate::types::{CaptureHint, DocumentRequirement, SelectionRequest};

/// Environment variable naming the JSON config file.
pub const CONFIG_ENV: &str = "LOANPAL_CONFIG";

/// Settings for a single capture slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Simulated processing time between preview and hand-off.
    pub processing_delay_ms: u64,
    /// Comma-separated MIME patterns the slot accepts.
    pub accept: String,
    /// Camera preference passed to the platform picker.
    pub capture_hint: CaptureHint,
    /// Largest file the slot will encode.
    pub max_file_bytes: u64,
    /// Height cap for the preview thumbnail.
    pub preview_max_height_px: u32,
}

impl CaptureConfig {
    pub fn processing_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.processing_delay_ms)
    }

    pub fn selection_request(&self) -> SelectionRequest {
        SelectionRequest::new(self.accept.clone(), self.capture_hint)
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: 2000,
            accept: "image/*".into(),
            capture_hint: CaptureHint::Environment,
            max_file_bytes: 20 * 1024 * 1024,
            preview_max_height_px: 160,
        }
    }
}

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub capture: CaptureConfig,
    /// Documents the application screen asks for, in display order.
    pub requirements: Vec<DocumentRequirement>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            capture: CaptureConfig::default(),
            requirements: vec![
                DocumentRequirement::new("drivers_license", "Driver's License"),
                DocumentRequirement::new("proof_of_income", "Proof of Income"),
                DocumentRequirement::new("bank_statement", "Bank Statement"),
            ],
        }
    }
}

impl AppConfig {
    /// Parse a config file. Missing fields fall back to their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        if config.capture.accept.trim().is_empty() {
            return Err(LoanpalError::Config("`capture.accept` must not be empty".into()));
        }
        Ok(config)
    }

    /// Load from `LOANPAL_CONFIG`, or defaults when the variable is unset.
    ///
    /// A config that cannot be read or parsed is logged and replaced by the
    /// defaults so the application still starts.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };
        let path = Path::new(&path);
        match Self::from_file(path) {
            Ok(config) => {
                info!(path = %path.display(), "configuration loaded");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "invalid configuration, using defaults");
                Self::default()
            }
        }
    }
}
