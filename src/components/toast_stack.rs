//! Toast overlay and per-toast expiry scheduling.
//!
//! DESIGN
//! ======
//! `notify` is the single entry point for user feedback: it records the
//! toast in the shared queue and, in the browser, arms its auto-dismiss
//! timer. Each toast owns an independent timer; dismissing one never
//! disturbs the others. Off-browser the timers are skipped, which keeps the
//! queue model testable natively.

use leptos::prelude::*;
use uuid::Uuid;

use crate::state::toast::{Severity, ToastPhase, ToastQueue};

/// Record a toast and schedule its auto-dismissal.
///
/// Never fails: the queue update is total, and timer setup is best-effort
/// browser behavior.
pub fn notify(toasts: RwSignal<ToastQueue>, message: impl Into<String>, severity: Severity) {
    let message = message.into();
    let Some(id) = toasts.try_update(|queue| queue.push(message, severity)) else {
        // Display surface already torn down; notifying becomes a no-op.
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        use crate::state::toast::DWELL_MS;
        gloo_timers::callback::Timeout::new(DWELL_MS, move || dismiss(toasts, id)).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Dismiss one toast, playing its leave animation before removal.
///
/// Idempotent: repeated calls for the same toast are no-ops, so the expiry
/// timer and a manual close click cannot double-remove.
pub fn dismiss(toasts: RwSignal<ToastQueue>, id: Uuid) {
    let began = toasts
        .try_update(|queue| queue.begin_dismiss(id))
        .unwrap_or(false);
    if !began {
        return;
    }

    #[cfg(feature = "hydrate")]
    {
        use crate::state::toast::EXIT_MS;
        gloo_timers::callback::Timeout::new(EXIT_MS, move || {
            let _ = toasts.try_update(|queue| queue.remove(id));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toasts.try_update(|queue| queue.remove(id));
    }
}

/// Overlay rendering every live toast with its severity styling.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .toasts()
                    .iter()
                    .map(|toast| {
                        let id = toast.id;
                        let leaving = toast.phase == ToastPhase::Leaving;
                        let class = format!(
                            "toast toast--{}{}",
                            toast.severity.css_modifier(),
                            if leaving { " toast--leaving" } else { "" },
                        );
                        view! {
                            <div class=class>
                                <div class="toast__body">
                                    <h4 class="toast__title">{toast.severity.title()}</h4>
                                    <p class="toast__message">{toast.message.clone()}</p>
                                </div>
                                <button
                                    class="toast__close"
                                    on:click=move |_| dismiss(toasts, id)
                                >
                                    "\u{d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
