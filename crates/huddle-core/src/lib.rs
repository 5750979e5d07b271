//! # Huddle Core
//!
//! Shared utilities for the Huddle deployment packager.
//!
//! This crate provides:
//!
//! - **Logging**: tracing subscriber initialization with env-filter support
//! - **Process Execution**: command execution with environment management
//! - **File Operations**: whole-file reads/writes, recursive staging copies
//!
//! ## Example
//!
//! ```no_run
//! use huddle_core::util::fs;
//!
//! let text = fs::slurp("frontend/config.js").unwrap();
//! fs::spit("frontend/config.js", &text).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod log;
pub mod util;

// Re-export commonly used items
pub use huddle_types::{HuddleError, Result};
