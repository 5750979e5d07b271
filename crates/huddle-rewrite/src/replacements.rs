//! Typed replacement builders.
//!
//! Exactly two declared names are recognized inside the frontend config:
//! the signal-server endpoint and the WebRTC configuration. Each has a
//! dedicated builder that renders its replacement block; the marker engine
//! itself stays agnostic to what either of them means.

use huddle_secrets::Secret;
use huddle_types::{DeployParams, HostName};
use std::collections::HashMap;

/// Declared name of the signal endpoint region.
pub const SIGNAL_ENDPOINT_VAR: &str = "signalServerEndpoint";
/// Declared name of the WebRTC configuration region.
pub const RTC_CONFIGURATION_VAR: &str = "webrtcConfiguration";

/// Well-known public STUN discovery service, always listed first.
pub const PUBLIC_STUN_SERVER: &str = "stun:stun.l.google.com:19302";

/// Declared-name to replacement-block table.
#[derive(Debug, Default)]
pub struct ReplacementTable {
    entries: HashMap<String, String>,
}

impl ReplacementTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a replacement block for a declared name.
    pub fn insert(&mut self, name: impl Into<String>, block: impl Into<String>) {
        self.entries.insert(name.into(), block.into());
    }

    /// Look up the block for a declared name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the standard two-entry table for a deployment.
    ///
    /// With TURN credentials supplied, the relay is advertised alongside
    /// the STUN entries; without them only discovery servers are listed.
    pub fn for_deployment(params: &DeployParams, turn: Option<TurnServer>) -> Self {
        let mut table = Self::new();

        let endpoint = SignalEndpoint {
            host: params.server_host.clone(),
            port: params.effective_port(),
            secure: params.use_https,
        };
        table.insert(SIGNAL_ENDPOINT_VAR, endpoint.render());

        let rtc = RtcConfiguration {
            host: params.server_host.clone(),
            stun_port: params.coturn_port,
            turn,
        };
        table.insert(RTC_CONFIGURATION_VAR, rtc.render());

        table
    }
}

/// Builder for the signal-server endpoint assignment.
#[derive(Debug, Clone)]
pub struct SignalEndpoint {
    /// Deployment host
    pub host: HostName,
    /// Signal server port
    pub port: u16,
    /// Whether the endpoint speaks TLS (`wss` vs `ws`)
    pub secure: bool,
}

impl SignalEndpoint {
    /// Render the single-line endpoint assignment.
    pub fn render(&self) -> String {
        let scheme = if self.secure { "wss" } else { "ws" };
        format!(
            "const {} = '{}://{}:{}';",
            SIGNAL_ENDPOINT_VAR, scheme, self.host, self.port
        )
    }
}

/// Builder for the WebRTC configuration object.
///
/// The rendered block is a structural literal, not computed row-by-row:
/// the public discovery server plus the deployment's own STUN endpoint.
#[derive(Debug, Clone)]
pub struct RtcConfiguration {
    /// Deployment host
    pub host: HostName,
    /// coturn STUN port
    pub stun_port: u16,
    /// Relay entry with credentials, when the deployment advertises TURN
    pub turn: Option<TurnServer>,
}

impl RtcConfiguration {
    /// Render the multi-line configuration assignment.
    pub fn render(&self) -> String {
        let mut entries = vec![
            format!(
                "        {{\n            urls: \"{}\"\n        }}",
                PUBLIC_STUN_SERVER
            ),
            format!(
                "        {{\n            urls: \"stun:{}:{}\"\n        }}",
                self.host, self.stun_port
            ),
        ];

        if let Some(turn) = &self.turn {
            entries.push(format!(
                "        {{\n            urls: \"turn:{}:{}\",\n            username: \"{}\",\n            credential: \"{}\"\n        }}",
                turn.host, turn.port, turn.username, turn.password
            ));
        }

        format!(
            "const {} = {{\n    iceServers: [\n{}\n    ],\n}};",
            RTC_CONFIGURATION_VAR,
            entries.join(",\n")
        )
    }
}

/// The deployment's own TURN relay, advertised to browsers once enabled.
#[derive(Debug, Clone)]
pub struct TurnServer {
    /// Relay host
    pub host: HostName,
    /// Relay port
    pub port: u16,
    /// Relay username
    pub username: Secret,
    /// Relay password
    pub password: Secret,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(name: &str) -> HostName {
        HostName::new(name).unwrap()
    }

    #[test]
    fn test_signal_endpoint_schemes() {
        let plain = SignalEndpoint {
            host: host("h"),
            port: 8888,
            secure: false,
        };
        assert_eq!(
            plain.render(),
            "const signalServerEndpoint = 'ws://h:8888';"
        );

        let tls = SignalEndpoint {
            host: host("h"),
            port: 4444,
            secure: true,
        };
        assert_eq!(tls.render(), "const signalServerEndpoint = 'wss://h:4444';");
    }

    #[test]
    fn test_rtc_configuration_lists_discovery_servers() {
        let rtc = RtcConfiguration {
            host: host("10.0.0.5"),
            stun_port: 3478,
            turn: None,
        };
        let block = rtc.render();

        assert!(block.starts_with("const webrtcConfiguration = {"));
        assert!(block.contains(PUBLIC_STUN_SERVER));
        assert!(block.contains("stun:10.0.0.5:3478"));
        assert!(!block.contains("turn:"));
        assert!(block.ends_with("};"));
    }

    #[test]
    fn test_rtc_configuration_advertises_turn_relay() {
        let user = huddle_secrets::generate(8).unwrap();
        let pass = huddle_secrets::generate(8).unwrap();
        let rtc = RtcConfiguration {
            host: host("10.0.0.5"),
            stun_port: 3478,
            turn: Some(TurnServer {
                host: host("10.0.0.5"),
                port: 3478,
                username: user.clone(),
                password: pass.clone(),
            }),
        };
        let block = rtc.render();

        assert!(block.contains("turn:10.0.0.5:3478"));
        assert!(block.contains(&format!("username: \"{}\"", user)));
        assert!(block.contains(&format!("credential: \"{}\"", pass)));
    }

    #[test]
    fn test_deployment_table_has_exactly_two_entries() {
        let params = DeployParams::new(host("example.org"));
        let table = ReplacementTable::for_deployment(&params, None);

        assert_eq!(table.len(), 2);
        assert!(table.get(SIGNAL_ENDPOINT_VAR).is_some());
        assert!(table.get(RTC_CONFIGURATION_VAR).is_some());
        assert!(table.get("somethingElse").is_none());
    }
}
