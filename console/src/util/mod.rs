//! Utility helpers shared across console UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, downloads)
//! from page and component logic to improve reuse and testability.

pub mod auth;
pub mod download;
pub mod session;
