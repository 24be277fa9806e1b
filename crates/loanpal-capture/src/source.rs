// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Asynchronous reads of picked files, bounded by the slot's size limit.

use loanpal_core::error::{LoanpalError, Result};
use loanpal_core::types::FileSource;
use tokio::io::AsyncReadExt;
use tracing::{debug, instrument};

fn unreadable(e: std::io::Error) -> LoanpalError {
    LoanpalError::UnreadableFile(e.to_string())
}

/// Load the full content of a picked file.
///
/// Files over `limit` bytes are rejected from their metadata before any
/// content is buffered; at most `limit + 1` bytes are ever read.
#[instrument(skip(source))]
pub async fn read(source: &FileSource, limit: u64) -> Result<Vec<u8>> {
    match source {
        FileSource::Path(path) => {
            let size = tokio::fs::metadata(path).await.map_err(unreadable)?.len();
            if size > limit {
                return Err(LoanpalError::FileTooLarge { size, limit });
            }

            let file = tokio::fs::File::open(path).await.map_err(unreadable)?;
            let mut bytes = Vec::with_capacity(size as usize);
            file.take(limit + 1)
                .read_to_end(&mut bytes)
                .await
                .map_err(unreadable)?;
            // The file may have grown since the metadata call.
            if bytes.len() as u64 > limit {
                return Err(LoanpalError::FileTooLarge {
                    size: bytes.len() as u64,
                    limit,
                });
            }
            debug!(path = %path.display(), bytes = bytes.len(), "file read");
            Ok(bytes)
        }
        FileSource::Bytes(bytes) => {
            let size = bytes.len() as u64;
            if size > limit {
                return Err(LoanpalError::FileTooLarge { size, limit });
            }
            Ok(bytes.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const LIMIT: u64 = 1024;

    #[tokio::test]
    async fn reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"\xFF\xD8\xFFjpeg").expect("write");

        let bytes = read(&FileSource::Path(file.path().to_path_buf()), LIMIT)
            .await
            .expect("read");
        assert_eq!(bytes, b"\xFF\xD8\xFFjpeg");
    }

    #[tokio::test]
    async fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = read(&FileSource::Path(dir.path().join("gone.jpg")), LIMIT)
            .await
            .unwrap_err();
        assert!(matches!(err, LoanpalError::UnreadableFile(_)));
    }

    #[tokio::test]
    async fn oversized_file_is_rejected_from_metadata() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        // Sparse: no content is written, only the length.
        file.as_file().set_len(64 * 1024 * 1024).expect("set_len");

        let err = read(&FileSource::Path(file.path().to_path_buf()), LIMIT)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LoanpalError::FileTooLarge { size, limit: LIMIT } if size == 64 * 1024 * 1024
        ));
    }

    #[tokio::test]
    async fn file_at_the_limit_is_accepted() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        file.as_file().set_len(LIMIT).expect("set_len");

        let bytes = read(&FileSource::Path(file.path().to_path_buf()), LIMIT)
            .await
            .expect("read");
        assert_eq!(bytes.len() as u64, LIMIT);
    }

    #[tokio::test]
    async fn in_memory_bytes_pass_through() {
        let bytes = read(&FileSource::Bytes(vec![1, 2, 3]), LIMIT).await.expect("read");
        assert_eq!(bytes, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn oversized_in_memory_bytes_are_rejected() {
        let err = read(&FileSource::Bytes(vec![0; LIMIT as usize + 1]), LIMIT)
            .await
            .unwrap_err();
        assert!(matches!(err, LoanpalError::FileTooLarge { .. }));
    }
}
