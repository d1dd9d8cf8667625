//! strops - Python-compatible string primitives and a labelled demo harness
//!
//! strops provides:
//! - `str`-style classification, case, search, padding, strip and split helpers
//! - a line-oriented reporter with text and JSON output
//! - a fixed walkthrough that prints every operation's result in order

// Enforce error handling best practices
#![cfg_attr(
    not(test),
    warn(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
    )
)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used,))]

pub mod config;
pub mod demo;
pub mod error;
pub mod report;
pub mod utils;

// CLI support for command-line argument parsing
#[cfg(feature = "cli")]
pub mod cli;

// Re-export main types for public API
pub use config::{DemoConfig, ReportConfig};
pub use demo::StringOpsDemo;
pub use error::{Error, Result};
pub use report::{Field, OutputFormat, Reporter};
pub use utils::Range;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::utils::{classify, pad, search, split, strip, transform};
    pub use crate::*;
}
