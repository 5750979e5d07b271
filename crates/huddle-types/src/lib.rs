//! # Huddle Types
//!
//! Core types and errors shared across all Huddle crates.
//!
//! This crate provides the fundamental building blocks for the Huddle
//! deployment packager, including:
//!
//! - Type-safe wrappers for deployment hosts and participant slot numbers
//! - The deployment parameter struct passed by value through the pipeline
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use huddle_types::{DeployParams, HostName};
//!
//! let host = HostName::new("conference.example.org").unwrap();
//! let params = DeployParams::new(host);
//!
//! // Scheme defaults apply until a port is pinned
//! assert_eq!(params.effective_port(), 8888);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod identifiers;
pub mod params;

// Re-export common types for convenience
pub use errors::{HuddleError, Result};
pub use identifiers::{HostName, ParticipantId};
pub use params::DeployParams;
