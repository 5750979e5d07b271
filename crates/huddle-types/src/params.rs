//! Deployment parameters.
//!
//! Everything the packaging pipeline needs to know travels in one explicit
//! [`DeployParams`] value built at the CLI boundary. There is no global
//! mutable state.

use crate::errors::{HuddleError, Result};
use crate::identifiers::HostName;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default HTTP port when TLS is off.
pub const DEFAULT_HTTP_PORT: u16 = 8888;
/// Default HTTPS port when TLS is on.
pub const DEFAULT_HTTPS_PORT: u16 = 4444;
/// Default coturn (STUN/TURN) port.
pub const DEFAULT_COTURN_PORT: u16 = 3478;
/// Default number of participant slots.
pub const DEFAULT_PARTICIPANTS: usize = 10;
/// Default secret length (62^48 keyspace).
pub const DEFAULT_SECRET_LENGTH: usize = 48;

/// Parameters for one packaging run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployParams {
    /// Host or IP address of the server where the bundle will be deployed
    pub server_host: HostName,

    /// HTTP(S) server port; `None` selects the scheme default
    pub http_port: Option<u16>,

    /// Port of the coturn server (serves as both STUN and TURN)
    pub coturn_port: u16,

    /// Whether the signal server terminates TLS
    pub use_https: bool,

    /// Path to the TLS certificate; self-signed fallback when absent
    pub https_cert_path: Option<PathBuf>,

    /// Path to the TLS key; self-signed fallback when absent
    pub https_key_path: Option<PathBuf>,

    /// Number of participant slots to provision
    pub participants: usize,

    /// Length of every generated secret
    pub secret_length: usize,
}

impl DeployParams {
    /// Create parameters for a host with everything else defaulted.
    pub fn new(server_host: HostName) -> Self {
        Self {
            server_host,
            http_port: None,
            coturn_port: DEFAULT_COTURN_PORT,
            use_https: false,
            https_cert_path: None,
            https_key_path: None,
            participants: DEFAULT_PARTICIPANTS,
            secret_length: DEFAULT_SECRET_LENGTH,
        }
    }

    /// The port the signal server will actually listen on.
    ///
    /// An explicit port wins; otherwise 4444 under HTTPS, 8888 under HTTP.
    pub fn effective_port(&self) -> u16 {
        self.http_port.unwrap_or(if self.use_https {
            DEFAULT_HTTPS_PORT
        } else {
            DEFAULT_HTTP_PORT
        })
    }

    /// Validate parameter combinations that clap cannot express.
    ///
    /// # Errors
    ///
    /// Returns an error for zero participants or a zero secret length.
    pub fn validate(&self) -> Result<()> {
        if self.participants == 0 {
            return Err(HuddleError::Config(
                "At least one participant slot is required".to_string(),
            ));
        }
        if self.secret_length == 0 {
            return Err(HuddleError::Config(
                "Secret length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether user-supplied certificates cover both halves of the pair.
    ///
    /// The bundled self-signed pair is used when either path is missing,
    /// mirroring how partial cert configuration is treated as absent.
    pub fn has_custom_certs(&self) -> bool {
        self.https_cert_path.is_some() && self.https_key_path.is_some()
    }
}
