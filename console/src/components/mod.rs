//! Reusable UI components shared by pages.

pub mod json_view;
pub mod nav_bar;
