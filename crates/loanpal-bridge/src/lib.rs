// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! LoanPal — Native platform bridge abstractions.
//!
//! The capture widget never opens a dialog itself. It hands a
//! [`SelectionRequest`](loanpal_core::SelectionRequest) (MIME filter plus
//! camera hint) to a [`traits::PlatformBridge`] and gets back the picked
//! file, or `None` when the user backed out.

pub mod traits;

#[cfg(not(any(target_os = "ios", target_os = "android")))]
pub mod desktop;

#[cfg(any(target_os = "ios", target_os = "android"))]
pub mod stub;

/// Retrieves the bridge implementation for the target operating system.
pub fn platform_bridge() -> Box<dyn traits::PlatformBridge> {
    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    {
        // Desktop: native dialogs through `rfd`.
        Box::new(desktop::DesktopBridge::new())
    }
    #[cfg(any(target_os = "ios", target_os = "android"))]
    {
        // Mobile bindings are not wired yet; every call reports unavailability.
        Box::new(stub::StubBridge)
    }
}
