//! Networking modules for the analysis pipeline endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the upload/analyze/clear HTTP calls and `types` decodes the
//! per-plate lookup records and error bodies those calls return.

pub mod api;
pub mod types;
