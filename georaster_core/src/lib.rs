//! Shared base types for georaster: the extent accumulator and progress reporting.

pub mod progress;

mod types;
pub use types::*;
