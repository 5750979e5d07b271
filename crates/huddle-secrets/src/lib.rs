//! # Huddle Secrets
//!
//! Secret generation and access provisioning for the Huddle deployment
//! packager.
//!
//! Secrets are opaque alphanumeric tokens from a cryptographically secure
//! source. They exist only for the duration of one packaging run and then
//! live solely inside the produced artifacts — this crate is not a vault
//! and keeps no state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod access;
pub mod generator;
pub mod turn;

pub use access::ParticipantAccess;
pub use generator::{generate, Secret};
pub use turn::TurnCredentialPair;
