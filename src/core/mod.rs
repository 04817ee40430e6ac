//! Core types and foundational components
//!
//! This module contains the run/outcome data types, error handling,
//! and constants used throughout the application.

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items for convenience
pub use error::{ApifixError, Result};
pub use types::{FileOutcome, Pass, RunSummary};
