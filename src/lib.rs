//! Browser client for the vehicle plate analysis pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server owns upload storage and the OCR + registration-lookup
//! pipeline; this crate owns the interaction state machine around it:
//! staging an image, sequencing upload-then-analyze, and rendering the
//! per-plate results with toast feedback. Pure state and decoding logic
//! compiles natively for tests; browser glue is gated behind the `hydrate`
//! feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("mounting plate-lens client");
    leptos::mount::mount_to_body(app::App);
}
