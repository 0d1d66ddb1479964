//! Core data models for patterns, extraction and resolution

pub mod pattern;
pub mod extraction;
pub mod resolution;
pub mod settings;

pub use pattern::*;
pub use extraction::*;
pub use resolution::*;
pub use settings::*;
