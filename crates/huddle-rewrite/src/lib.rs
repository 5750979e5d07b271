//! # Huddle Rewrite
//!
//! The configuration-injection and access-provisioning engine of the
//! Huddle deployment packager.
//!
//! Four pieces:
//!
//! - [`markers`]: marker-delimited region replacement in the frontend
//!   config (an explicit two-state scan, fails loudly on malformed regions)
//! - [`replacements`]: the typed builders that render what a recognized
//!   region becomes
//! - [`credentials`]: in-place rewrite of the coturn `user=` line
//! - [`entry_page`]: capability-URL rename plus per-participant secret
//!   injection into the entry page
//!
//! Every rewrite reads its file to completion before writing anything
//! back; there is no streaming merge and no partial-success mode.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod credentials;
pub mod entry_page;
mod line_split;
pub mod markers;
pub mod replacements;

pub use credentials::{CredentialFileEditor, MatchStrictness};
pub use entry_page::EntryPageProvisioner;
pub use markers::{MarkerRewriter, UnknownRegionPolicy};
pub use replacements::{ReplacementTable, RtcConfiguration, SignalEndpoint, TurnServer};
