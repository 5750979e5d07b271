//! TURN relay credentials.

use crate::generator::{self, Secret};
use huddle_types::Result;

/// A (username, password) pair for the STUN/TURN relay service.
///
/// Rotated on every packaging run; the old pair dies with the old bundle.
#[derive(Debug, Clone)]
pub struct TurnCredentialPair {
    /// Relay username
    pub username: Secret,
    /// Relay password
    pub password: Secret,
}

impl TurnCredentialPair {
    /// Generate a fresh credential pair.
    pub fn generate(secret_length: usize) -> Result<Self> {
        Ok(Self {
            username: generator::generate(secret_length)?,
            password: generator::generate(secret_length)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_pair() {
        let pair = TurnCredentialPair::generate(32).unwrap();
        assert_eq!(pair.username.len(), 32);
        assert_eq!(pair.password.len(), 32);
        assert_ne!(pair.username, pair.password);
    }
}
