// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for applicants.
//
// Every technical error is mapped to plain English with a clear suggestion.
// The capture widget shows these inline, in place of the progress label.

use crate::error::LoanpalError;

/// Severity of an error from the applicant's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Something flaky happened; trying again will probably work.
    Transient,
    /// The applicant must do something different (pick another file).
    ActionRequired,
    /// Cannot be fixed from inside the widget.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanError {
    /// Plain English summary.
    pub message: String,
    /// What the applicant should try.
    pub suggestion: String,
    /// Whether offering the capture action again makes sense.
    pub retriable: bool,
    pub severity: Severity,
}

impl HumanError {
    /// Message and suggestion joined for a single inline line.
    pub fn inline(&self) -> String {
        format!("{} {}", self.message, self.suggestion)
    }
}

/// Convert a `LoanpalError` into a `HumanError` an applicant can act on.
pub fn humanize_error(err: &LoanpalError) -> HumanError {
    match err {
        LoanpalError::UnreadableFile(_) | LoanpalError::Io(_) => HumanError {
            message: "We couldn't open that file.".into(),
            suggestion: "It may be damaged or blocked. Please try another photo.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        LoanpalError::UnsupportedType(detail) => HumanError {
            message: "That file isn't a picture.".into(),
            suggestion: format!("Please choose a photo such as a JPEG or PNG. (File type: {detail})"),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        LoanpalError::EmptyFile => HumanError {
            message: "That file is empty.".into(),
            suggestion: "Please take the photo again.".into(),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        LoanpalError::FileTooLarge { limit, .. } => HumanError {
            message: "That photo is too large.".into(),
            suggestion: format!(
                "Please choose a photo smaller than {} MB.",
                limit / (1024 * 1024)
            ),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        LoanpalError::SlotBusy => HumanError {
            message: "We're still processing your last photo.".into(),
            suggestion: "Please wait a moment.".into(),
            retriable: false,
            severity: Severity::Transient,
        },

        LoanpalError::SlotCompleted => HumanError {
            message: "This document is already uploaded.".into(),
            suggestion: "No further action is needed.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        LoanpalError::StaleCapture => HumanError {
            message: "That photo was replaced by a newer one.".into(),
            suggestion: "No further action is needed.".into(),
            retriable: false,
            severity: Severity::Transient,
        },

        LoanpalError::InvalidDataUri(_) => HumanError {
            message: "We received a damaged document.".into(),
            suggestion: "Please capture it again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        LoanpalError::PlatformUnavailable => HumanError {
            message: "This device can't open photos or the camera here.".into(),
            suggestion: "Try continuing your application on another device.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        LoanpalError::Bridge(detail) => HumanError {
            message: "The camera or file chooser didn't open.".into(),
            suggestion: format!("Please try again. ({detail})"),
            retriable: true,
            severity: Severity::Transient,
        },

        LoanpalError::Config(_) | LoanpalError::Serialization(_) => HumanError {
            message: "The app is set up incorrectly.".into(),
            suggestion: "Please contact support.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_is_transient() {
        let human = humanize_error(&LoanpalError::UnreadableFile("permission denied".into()));
        assert_eq!(human.severity, Severity::Transient);
        assert!(human.retriable);
    }

    #[test]
    fn unsupported_type_names_the_type() {
        let human = humanize_error(&LoanpalError::UnsupportedType("application/pdf".into()));
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(human.suggestion.contains("application/pdf"));
    }

    #[test]
    fn too_large_reports_limit_in_megabytes() {
        let human = humanize_error(&LoanpalError::FileTooLarge {
            size: 30 * 1024 * 1024,
            limit: 20 * 1024 * 1024,
        });
        assert!(human.suggestion.contains("20 MB"));
    }

    #[test]
    fn inline_joins_message_and_suggestion() {
        let human = humanize_error(&LoanpalError::EmptyFile);
        assert_eq!(human.inline(), "That file is empty. Please take the photo again.");
    }

    #[test]
    fn missing_platform_is_permanent() {
        let human = humanize_error(&LoanpalError::PlatformUnavailable);
        assert_eq!(human.severity, Severity::Permanent);
        assert!(!human.retriable);
    }
}
