//! Source file discovery
//!
//! Walks a directory tree and yields the files a pass should rewrite.

pub mod walker;

// Re-export commonly used items
pub use walker::{SourceWalker, has_target_extension};
