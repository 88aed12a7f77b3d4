//! File pick and drag-and-drop surface with staged-image preview.
//!
//! Both entry paths (picker and drop) funnel into `app::select_image`, so
//! validation and staging behave identically regardless of how the file
//! arrived.

use leptos::prelude::*;

use crate::app::FileStore;
use crate::state::analyzer::AnalyzerState;
use crate::state::toast::ToastQueue;

/// Upload surface: instructions when empty, preview once an image is staged.
#[component]
pub fn UploadPanel() -> impl IntoView {
    let analyzer = expect_context::<RwSignal<AnalyzerState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let files = expect_context::<RwSignal<FileStore>>();

    let drag_over = RwSignal::new(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Keep the native input in sync when the staged image is discarded, so
    // reselecting the same file still fires a change event.
    Effect::new(move || {
        if analyzer.get().staged.is_none() {
            if let Some(input) = input_ref.get() {
                input.set_value("");
            }
        }
    });

    let on_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let picked = input_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|list| list.get(0));
            if let Some(file) = picked {
                crate::app::select_image(analyzer, toasts, files, file);
            }
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_over.set(false);
        #[cfg(feature = "hydrate")]
        {
            let dropped = ev
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|list| list.get(0));
            if let Some(file) = dropped {
                crate::app::select_image(analyzer, toasts, files, file);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&toasts, &files);
        }
    };

    let staged_name = move || analyzer.get().staged.map(|staged| staged.file_name);

    view! {
        <div
            class=move || {
                if drag_over.get() { "upload-area upload-area--drag-over" } else { "upload-area" }
            }
            on:click=move |_| {
                if let Some(input) = input_ref.get_untracked() {
                    input.click();
                }
            }
            on:dragover=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                drag_over.set(true);
            }
            on:dragleave=move |_| drag_over.set(false)
            on:drop=on_drop
        >
            <input
                type="file"
                accept="image/*"
                class="upload-area__input"
                node_ref=input_ref
                on:click=move |ev| ev.stop_propagation()
                on:change=on_change
            />
            <Show
                when=move || files.get().preview_url.is_some()
                fallback=|| {
                    view! {
                        <div class="upload-area__instructions">
                            <p>"Drag & drop a vehicle image here"</p>
                            <p class="upload-area__hint">"or click to browse (PNG, JPG, WEBP)"</p>
                        </div>
                    }
                }
            >
                <div class="upload-area__preview">
                    <img
                        class="upload-area__image"
                        src=move || files.get().preview_url.unwrap_or_default()
                        alt="Staged vehicle image"
                    />
                    <p class="upload-area__filename">{staged_name}</p>
                </div>
            </Show>
        </div>
    }
}
