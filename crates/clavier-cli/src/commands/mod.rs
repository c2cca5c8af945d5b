//! CLI command implementations.

pub mod analyze;
pub mod common;
pub mod devices;
pub mod keys;
pub mod notes;
pub mod play;
pub mod render;
