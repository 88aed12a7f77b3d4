//! Analyzer page: layout plus the upload→analyze orchestration.
//!
//! ARCHITECTURE
//! ============
//! The page drives the pure state machine in `state::analyzer` through the
//! network: take a ticket, upload if the ticket demands it, then request
//! analysis, then apply the outcome generation-checked. Every path through
//! `run_analyze` ends in `finish`, so the surface always leaves `Busy` and
//! a stale response can never clobber newer state.

use leptos::prelude::*;

use crate::app::FileStore;
use crate::components::results_panel::ResultsPanel;
use crate::components::toast_stack::{ToastStack, notify};
use crate::components::upload_panel::UploadPanel;
use crate::state::analyzer::{AnalyzeOutcome, AnalyzeRejection, AnalyzerState};
use crate::state::toast::{Severity, ToastQueue};

/// Single-screen analyzer page.
#[component]
pub fn AnalyzerPage() -> impl IntoView {
    let analyzer = expect_context::<RwSignal<AnalyzerState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let files = expect_context::<RwSignal<FileStore>>();

    view! {
        <main class="analyzer-page">
            <header class="analyzer-page__header">
                <h1>"Plate Lens"</h1>
                <p>"Vehicle plate OCR and registration lookup"</p>
            </header>
            <div class="analyzer-page__layout">
                <section class="control-pane">
                    <UploadPanel />
                    <div class="control-pane__actions">
                        <button
                            class="button button--primary"
                            disabled=move || !analyzer.get().can_analyze()
                            on:click=move |_| run_analyze(analyzer, toasts, files)
                        >
                            "Analyze"
                        </button>
                        <button
                            class="button"
                            disabled=move || !analyzer.get().can_clear()
                            on:click=move |_| clear_all(analyzer, toasts, files)
                        >
                            "Clear"
                        </button>
                    </div>
                </section>
                <ResultsPanel />
            </div>
            <ToastStack />
        </main>
    }
}

/// Kick off one upload/analyze cycle.
///
/// Invalid invocations (nothing staged, already running) are guarded no-ops
/// with a toast; the state machine enforces this even though the buttons
/// are also disabled.
pub fn run_analyze(
    analyzer: RwSignal<AnalyzerState>,
    toasts: RwSignal<ToastQueue>,
    files: RwSignal<FileStore>,
) {
    let Some(begun) = analyzer.try_update(AnalyzerState::begin_analyze) else {
        return;
    };
    let ticket = match begun {
        Ok(ticket) => ticket,
        Err(AnalyzeRejection::NothingStaged) => {
            notify(toasts, "No file selected.", Severity::Error);
            return;
        }
        Err(AnalyzeRejection::AlreadyRunning) => {
            notify(toasts, "Analysis is already in progress.", Severity::Info);
            return;
        }
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let generation = ticket.generation;
        let outcome = execute_run(analyzer, files, ticket).await;
        let failure = match &outcome {
            AnalyzeOutcome::Success(_) => None,
            AnalyzeOutcome::Failure(reason) => Some(reason.clone()),
        };

        let applied = analyzer
            .try_update(|state| state.finish(generation, outcome))
            .unwrap_or(false);
        // A superseded run stays silent: its outcome was already replaced.
        if applied {
            match failure {
                None => notify(toasts, "Analysis complete!", Severity::Success),
                Some(reason) => notify(toasts, reason, Severity::Error),
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = files;
        let _ = analyzer.try_update(|state| {
            state.finish(
                ticket.generation,
                AnalyzeOutcome::Failure("not available off-browser".to_owned()),
            )
        });
    }
}

/// Upload (when needed) and analyze, strictly in that order.
#[cfg(feature = "hydrate")]
async fn execute_run(
    analyzer: RwSignal<AnalyzerState>,
    files: RwSignal<FileStore>,
    ticket: crate::state::analyzer::AnalyzeTicket,
) -> AnalyzeOutcome {
    use crate::net::api;

    if ticket.needs_upload {
        let Some(file) = files.get_untracked().file else {
            return AnalyzeOutcome::Failure("No file selected.".to_owned());
        };
        if let Err(reason) = api::upload_image(&file).await {
            // Upload failed: analysis is never attempted and the staged
            // image keeps uploaded = false for a clean retry.
            return AnalyzeOutcome::Failure(reason);
        }
        let _ = analyzer.try_update(|state| state.mark_uploaded(&ticket));
    }

    match api::run_analysis().await {
        Ok(records) => AnalyzeOutcome::Success(records),
        Err(reason) => AnalyzeOutcome::Failure(reason),
    }
}

/// Reset local state and ask the server to discard its images.
///
/// The endpoint call is fire-and-forget for state purposes: local state is
/// already `Empty` when it completes, and its result only shapes the toast.
pub fn clear_all(
    analyzer: RwSignal<AnalyzerState>,
    toasts: RwSignal<ToastQueue>,
    files: RwSignal<FileStore>,
) {
    let _ = analyzer.try_update(AnalyzerState::reset);
    let _ = files.try_update(FileStore::clear);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::clear_images().await {
            Ok(message) => notify(
                toasts,
                message.unwrap_or_else(|| "Cleared successfully.".to_owned()),
                Severity::Success,
            ),
            Err(reason) => notify(toasts, reason, Severity::Error),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toasts;
    }
}
