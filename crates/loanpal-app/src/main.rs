// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// LoanPal — loan application document capture
//
// Entry point. Initialises logging, capture services, app state, and launches
// the Dioxus UI.

mod components;
mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use pages::documents::ApplicationDocuments;
use services::capture_services::CaptureServices;
use state::ApplicationState;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("LoanPal starting");

    dioxus::launch(app);
}

/// Root component.
fn app() -> Element {
    let svc = use_hook(CaptureServices::init);

    use_context_provider(|| svc.clone());
    use_context_provider(|| Signal::new(ApplicationState::default()));

    rsx! {
        style { "@keyframes spin {{ to {{ transform: rotate(360deg); }} }}" }
        div { class: "app-container",
            style: "max-width: 560px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",
            ApplicationDocuments {}
        }
    }
}
