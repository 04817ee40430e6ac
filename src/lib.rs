//! apifix rewrites a hard-coded development host in front-end sources into
//! a templated configuration expression, and repairs template literals
//! that were opened with a backtick but closed with a single quote.
//!
//! ```
//! use apifix::{repair_quotes, rewrite_urls};
//!
//! assert_eq!(
//!     rewrite_urls("fetch('http://localhost:3000/api/users')"),
//!     "fetch(`${config.API_URL}/api/users`)"
//! );
//! assert_eq!(
//!     repair_quotes("fetch(`${config.API_URL}/api/users')"),
//!     "fetch(`${config.API_URL}/api/users`)"
//! );
//! ```

pub mod config;
pub mod core;
pub mod discovery;
pub mod fsio;
pub mod reporting;
pub mod rewrite;
pub mod runner;
pub mod ui;

pub use crate::core::{ApifixError, FileOutcome, Pass, Result, RunSummary};
pub use config::Config;
pub use rewrite::{RuleSet, Template, repair_quotes, rewrite_urls};
pub use runner::{Reporter, RunOptions, Runner};
