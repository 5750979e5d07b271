//! Command implementations.

pub mod package;
pub mod version;
