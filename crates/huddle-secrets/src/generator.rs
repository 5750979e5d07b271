//! Secret generation.
//!
//! Every credential the packager hands out starts here: an opaque
//! alphanumeric token drawn from the operating system's secure randomness
//! source. Nothing is ever seeded or reproducible; two runs of the tool
//! never produce related values.

use huddle_types::{HuddleError, Result};
use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// An opaque generated secret.
///
/// Immutable once created. The inner value only leaves this type through
/// [`Secret::as_str`] or `Display`, both of which the caller invokes
/// deliberately; `Debug` is redacted so secrets cannot leak through
/// diagnostic output.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    /// Get the secret value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the secret in characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the secret is empty. Generated secrets never are.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(****)")
    }
}

/// Generate a new secret of exactly `length` alphanumeric characters.
///
/// Characters are drawn uniformly and independently from `[A-Za-z0-9]`
/// using `OsRng`. Collisions across calls are never checked; at the
/// default length of 48 the keyspace is 62^48.
///
/// # Errors
///
/// Returns an error when `length` is zero.
pub fn generate(length: usize) -> Result<Secret> {
    if length == 0 {
        return Err(HuddleError::Secret(
            "Secret length must be greater than 0".to_string(),
        ));
    }

    let value: String = OsRng
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect();

    Ok(Secret(value))
}
