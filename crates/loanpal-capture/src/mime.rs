// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// MIME filtering and content sniffing.
//
// The picker's filter is only a hint: some platforms let the user override
// it. Declared types are checked before the slot goes busy, and the bytes
// themselves are sniffed once read.

use tracing::debug;

/// Parsed `accept` list, e.g. `image/*` or `image/png, image/jpeg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeFilter {
    patterns: Vec<String>,
}

impl MimeFilter {
    pub fn parse(accept: &str) -> Self {
        let patterns = accept
            .split(',')
            .map(|p| p.trim().to_ascii_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        Self { patterns }
    }

    /// Whether the filter lets through files of any type, including ones
    /// whose type is unknown.
    pub fn accepts_any(&self) -> bool {
        self.patterns.is_empty() || self.patterns.iter().any(|p| p == "*" || p == "*/*")
    }

    /// Whether `mime` matches any pattern. An empty filter accepts everything.
    pub fn accepts(&self, mime: &str) -> bool {
        if self.accepts_any() {
            return true;
        }
        let mime = mime.trim().to_ascii_lowercase();
        let essence = mime.split(';').next().unwrap_or_default().trim();
        self.patterns.iter().any(|pattern| match pattern.as_str() {
            "*" | "*/*" => true,
            p => match p.strip_suffix("/*") {
                Some(top) => essence
                    .split_once('/')
                    .is_some_and(|(t, _)| t == top),
                None => p == essence,
            },
        })
    }
}

impl Default for MimeFilter {
    fn default() -> Self {
        Self::parse("image/*")
    }
}

/// Identify an image by its magic bytes and return its MIME type.
pub fn sniff_image(data: &[u8]) -> Option<&'static str> {
    let format = image::guess_format(data).ok()?;
    let mime = format.to_mime_type();
    debug!(?format, mime, "sniffed image format");
    Some(mime)
}
