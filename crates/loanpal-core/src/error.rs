// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for LoanPal.

use thiserror::Error;

/// Top-level error type for all LoanPal operations.
#[derive(Debug, Error)]
pub enum LoanpalError {
    // -- Capture errors --
    #[error("file could not be read: {0}")]
    UnreadableFile(String),

    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("file is empty")]
    EmptyFile,

    #[error("file is too large: {size} bytes (limit {limit})")]
    FileTooLarge { size: u64, limit: u64 },

    // -- Slot state --
    #[error("a capture is already in progress for this slot")]
    SlotBusy,

    #[error("this slot has already been completed")]
    SlotCompleted,

    #[error("capture cycle is no longer current")]
    StaleCapture,

    // -- Encoding --
    #[error("invalid data URI: {0}")]
    InvalidDataUri(String),

    // -- Configuration / I/O --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, LoanpalError>;
