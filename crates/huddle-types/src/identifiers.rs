//! Type-safe identifiers for deployment targets and participants.

use crate::errors::{HuddleError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated deployment host.
///
/// Hosts must be non-empty and contain only characters that can appear in
/// a hostname or IP address literal. The value is spliced verbatim into
/// WebSocket and STUN URLs, so anything that would break a URL is rejected
/// up front.
///
/// # Example
///
/// ```
/// use huddle_types::HostName;
///
/// let host = HostName::new("conference.example.org").unwrap();
/// assert_eq!(host.as_str(), "conference.example.org");
///
/// assert!(HostName::new("bad host").is_err());
/// assert!(HostName::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostName(String);

impl HostName {
    /// Create a new validated host name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name doesn't meet validation requirements.
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref();
        if !Self::is_valid(name) {
            return Err(HuddleError::Validation(format!(
                "Invalid host '{}': must be a non-empty hostname or IP address \
                (letters, digits, dots, hyphens, colons)",
                name
            )));
        }
        Ok(Self(name.to_string()))
    }

    /// Check if a host is valid without allocating.
    pub fn is_valid(name: &str) -> bool {
        if name.is_empty() {
            return false;
        }

        // Colons allowed for IPv6 literals
        name.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == ':')
    }

    /// Get the host as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HostName {
    type Err = HuddleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// A provisioned participant slot number.
///
/// Slots are numbered densely from 1; zero is never a valid slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(u32);

impl ParticipantId {
    /// Create a new participant id.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is zero.
    pub fn new(id: u32) -> Result<Self> {
        if id == 0 {
            return Err(HuddleError::Validation(
                "Participant ids start at 1".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// Get the raw slot number.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ParticipantId {
    type Err = HuddleError;

    fn from_str(s: &str) -> Result<Self> {
        let id: u32 = s.parse().map_err(|_| {
            HuddleError::Validation(format!("Invalid participant id: '{}'", s))
        })?;
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_name_validation() {
        assert!(HostName::new("localhost").is_ok());
        assert!(HostName::new("10.11.157.139").is_ok());
        assert!(HostName::new("conference.example.org").is_ok());
        assert!(HostName::new("::1").is_ok());

        assert!(HostName::new("").is_err());
        assert!(HostName::new("bad host").is_err());
        assert!(HostName::new("host/path").is_err());
    }

    #[test]
    fn test_participant_id() {
        let id = ParticipantId::new(3).unwrap();
        assert_eq!(id.get(), 3);
        assert_eq!(id.to_string(), "3");

        assert!(ParticipantId::new(0).is_err());
        assert!("7".parse::<ParticipantId>().is_ok());
        assert!("x".parse::<ParticipantId>().is_err());
    }
}
