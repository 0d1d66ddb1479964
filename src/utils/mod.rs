//! Shared helpers

pub mod helpers;

pub use helpers::{is_valid_url, sample_url, suggest_display_name};
