//! Client-side interaction state.
//!
//! DESIGN
//! ======
//! State modules are pure Rust with no DOM or network access so every
//! transition can be unit tested natively. Pages and components own the
//! browser glue and drive these models through `RwSignal` context.

pub mod analyzer;
pub mod toast;
