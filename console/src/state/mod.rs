//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `mocks`, `editor`) so pages can depend
//! on small focused models whose transitions are testable without a browser.

pub mod auth;
pub mod editor;
pub mod mocks;
