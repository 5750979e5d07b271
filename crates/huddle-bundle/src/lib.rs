//! # Huddle Bundle
//!
//! Bundle assembly for the Huddle deployment packager: deploy-dir
//! preparation, backend build, frontend/cert staging, launch-script
//! emission, and the [`Packager`] pipeline that sequences it all with the
//! rewriting engine from `huddle-rewrite`.
//!
//! These are deliberately thin I/O wrappers; the algorithmic content
//! lives in `huddle-rewrite` and `huddle-secrets`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod build;
pub mod certs;
pub mod launcher;
pub mod layout;
pub mod packager;

pub use certs::StagedCerts;
pub use launcher::LaunchScript;
pub use layout::BundleLayout;
pub use packager::{BundleSummary, Packager};
