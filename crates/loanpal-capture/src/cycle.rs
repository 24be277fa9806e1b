// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Capture cycle — the async half of a slot.
//
// One cycle has two suspension points: reading the picked file and the
// simulated processing delay. Both race the slot's lifetime, so a widget
// torn down mid-cycle never sees its state touched or its host called back.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use loanpal_core::error::Result;
use loanpal_core::types::{CaptureId, PickedFile};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::slot::CaptureSlot;
use crate::source;

/// Access to the slot state a cycle drives.
///
/// The UI implements this over its reactive signal; headless callers use
/// `Arc<Mutex<CaptureSlot>>`.
pub trait SlotHandle {
    fn update<R>(&mut self, f: impl FnOnce(&mut CaptureSlot) -> R) -> R;
}

impl SlotHandle for Arc<Mutex<CaptureSlot>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut CaptureSlot) -> R) -> R {
        let mut slot = self.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *slot)
    }
}

/// Lifetime of one mounted widget instance.
///
/// Ends when [`SlotLifetime::end`] is called or the last clone is dropped.
#[derive(Debug, Clone)]
pub struct SlotLifetime {
    tx: Arc<watch::Sender<bool>>,
}

impl SlotLifetime {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Mark the instance as unmounted.
    pub fn end(&self) {
        self.tx.send_replace(true);
    }

    /// Token handed to a cycle.
    pub fn guard(&self) -> LifetimeGuard {
        LifetimeGuard {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for SlotLifetime {
    fn default() -> Self {
        Self::new()
    }
}

/// Observer side of a [`SlotLifetime`].
#[derive(Debug)]
pub struct LifetimeGuard {
    rx: watch::Receiver<bool>,
}

impl LifetimeGuard {
    /// Resolves once the lifetime has ended.
    pub async fn ended(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                return;
            }
        }
    }
}

/// How a cycle finished without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The user dismissed the dialog.
    Cancelled,
    /// The host was called with the encoded document.
    Delivered { capture_id: CaptureId },
    /// The widget went away before the cycle completed.
    Abandoned,
}

/// Run one capture cycle: begin → read → preview → delay → hand-off.
///
/// The slot settles (busy cleared) before `on_upload` runs, so a host
/// callback that panics unwinds through an already-consistent widget.
/// Failures are recorded on the slot as inline notices and also returned.
pub async fn run_cycle<H, F>(
    mut slot: H,
    picked: Option<PickedFile>,
    is_uploaded: bool,
    delay: Duration,
    guard: LifetimeGuard,
    on_upload: F,
) -> Result<CycleOutcome>
where
    H: SlotHandle,
    F: FnOnce(String),
{
    let Some(picked) = picked else {
        debug!("selection cancelled");
        return Ok(CycleOutcome::Cancelled);
    };
    let Some(id) = slot.update(|s| s.begin(Some(&picked), is_uploaded))? else {
        return Ok(CycleOutcome::Cancelled);
    };
    resume_cycle(slot, id, picked, delay, guard, on_upload).await
}

/// Drive a cycle whose `begin` already ran, e.g. synchronously inside the
/// event handler that opened the dialog.
pub async fn resume_cycle<H, F>(
    mut slot: H,
    id: CaptureId,
    picked: PickedFile,
    delay: Duration,
    mut guard: LifetimeGuard,
    on_upload: F,
) -> Result<CycleOutcome>
where
    H: SlotHandle,
    F: FnOnce(String),
{
    let limit = slot.update(|s| s.max_file_bytes());
    let read = tokio::select! {
        biased;
        _ = guard.ended() => {
            debug!(capture_id = %id, "slot unmounted during read");
            return Ok(CycleOutcome::Abandoned);
        }
        read = source::read(&picked.source, limit) => read,
    };
    slot.update(|s| s.loaded(id, read))?;

    tokio::select! {
        biased;
        _ = guard.ended() => {
            debug!(capture_id = %id, "slot unmounted during processing");
            return Ok(CycleOutcome::Abandoned);
        }
        _ = tokio::time::sleep(delay) => {}
    }

    let uri = slot.update(|s| s.finish(id))?;
    info!(capture_id = %id, bytes = uri.len(), "handing document to host");
    on_upload(uri);
    Ok(CycleOutcome::Delivered { capture_id: id })
}
