//! Application root: shared context and the staged-file store.
//!
//! ARCHITECTURE
//! ============
//! `App` provides the analyzer state, toast queue, and file store as
//! `RwSignal` context so pages and components never reach for globals;
//! separate `App` instances (e.g. in tests) cannot interfere. The file
//! store keeps the actual browser `File` handle and preview URL out of the
//! pure state machine, which only tracks the file's name and media type.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::analyzer::AnalyzerPage;
use crate::state::analyzer::AnalyzerState;
use crate::state::toast::ToastQueue;

/// Browser-side handle for the staged image.
#[derive(Clone, Debug, Default)]
pub struct FileStore {
    /// The staged `File`, kept for the upload call.
    #[cfg(feature = "hydrate")]
    pub file: Option<web_sys::File>,
    /// Object URL used by the upload surface preview.
    pub preview_url: Option<String>,
}

impl FileStore {
    /// Drop the staged file and release its preview URL.
    pub fn clear(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            self.file = None;
        }
        if let Some(url) = self.preview_url.take() {
            revoke_preview_url(&url);
        }
    }

    /// Stage a new file, replacing (and releasing) any previous preview.
    #[cfg(feature = "hydrate")]
    pub fn replace(&mut self, file: web_sys::File, preview_url: Option<String>) {
        if let Some(old) = self.preview_url.take() {
            revoke_preview_url(&old);
        }
        self.file = Some(file);
        self.preview_url = preview_url;
    }
}

fn revoke_preview_url(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = web_sys::Url::revoke_object_url(url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Stage a freshly picked or dropped file.
///
/// Non-image selections are a guarded no-op: state is untouched and the
/// user gets exactly one error toast.
#[cfg(feature = "hydrate")]
pub fn select_image(
    analyzer: RwSignal<AnalyzerState>,
    toasts: RwSignal<ToastQueue>,
    files: RwSignal<FileStore>,
    file: web_sys::File,
) {
    use crate::components::toast_stack::notify;
    use crate::state::toast::Severity;

    let name = file.name();
    let media_type = file.type_();
    let staged = analyzer
        .try_update(|state| state.stage(&name, &media_type))
        .unwrap_or(Err(crate::state::analyzer::StageError::NotAnImage));
    if staged.is_err() {
        notify(
            toasts,
            "Please select a valid image file (PNG, JPG, WEBP).",
            Severity::Error,
        );
        return;
    }

    let preview_url = web_sys::Url::create_object_url_with_blob(&file).ok();
    files.update(|store| store.replace(file, preview_url));
    notify(toasts, "Image loaded! Ready to analyze.", Severity::Success);
}

/// Application root component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(AnalyzerState::default()));
    provide_context(RwSignal::new(ToastQueue::default()));
    provide_context(RwSignal::new(FileStore::default()));

    view! {
        <Title text="Plate Lens" />
        <AnalyzerPage />
    }
}
