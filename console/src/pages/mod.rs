//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch, submit, navigate) and
//! delegates decisions to `state` and `net` so they stay testable.

pub mod dashboard;
pub mod login;
pub mod mock_editor;
pub mod mocks;
pub mod signup;
pub mod tester;
