//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the analyzer chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod results_panel;
pub mod toast_stack;
pub mod upload_panel;
