//! Network profiles and connection state.
//!
//! The profile table is fixed at process start: three networks, of which only
//! the developer network is role-gated. Role determination is entirely
//! server-side; the client holds the role names for display only.

use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel latency value meaning "not yet measured".
pub const LATENCY_UNKNOWN: i64 = -1;

/// Identifier for one of the supported networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKey {
    /// Production network (default port 8332).
    Mainnet,
    /// Public test network (default port 18332).
    Testnet,
    /// Developer network (default port 18443), governance role required.
    Devnet,
}

impl NetworkKey {
    /// The lowercase wire/config name of this network.
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkKey::Mainnet => "mainnet",
            NetworkKey::Testnet => "testnet",
            NetworkKey::Devnet => "devnet",
        }
    }

    /// The immutable connection profile for this network.
    pub fn profile(&self) -> &'static NetworkProfile {
        match self {
            NetworkKey::Mainnet => &NETWORK_PROFILES[0],
            NetworkKey::Testnet => &NETWORK_PROFILES[1],
            NetworkKey::Devnet => &NETWORK_PROFILES[2],
        }
    }
}

impl fmt::Display for NetworkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkKey {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(NetworkKey::Mainnet),
            "testnet" => Ok(NetworkKey::Testnet),
            "devnet" => Ok(NetworkKey::Devnet),
            other => Err(ClientError::UnknownNetwork(other.to_string())),
        }
    }
}

/// Immutable connection profile for a network, defined at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkProfile {
    /// The network this profile belongs to.
    pub key: NetworkKey,
    /// Human-readable network name.
    pub display_name: &'static str,
    /// Default RPC endpoint for this network.
    pub endpoint_url: &'static str,
    /// Accent colour hint for UI styling.
    pub accent_color: &'static str,
    /// Whether connecting requires a qualifying governance role.
    pub role_required: bool,
}

/// The fixed profile table. Devnet is the only role-gated entry.
pub const NETWORK_PROFILES: [NetworkProfile; 3] = [
    NetworkProfile {
        key: NetworkKey::Mainnet,
        display_name: "Mainnet",
        endpoint_url: "http://127.0.0.1:8332",
        accent_color: "#1f2a44",
        role_required: false,
    },
    NetworkProfile {
        key: NetworkKey::Testnet,
        display_name: "Testnet",
        endpoint_url: "http://127.0.0.1:18332",
        accent_color: "#fd7e14",
        role_required: false,
    },
    NetworkProfile {
        key: NetworkKey::Devnet,
        display_name: "Devnet",
        endpoint_url: "http://127.0.0.1:18443",
        accent_color: "#6f42c1",
        role_required: true,
    },
];

/// The governance roles that qualify an address for devnet access.
/// Display knowledge only: membership is decided by the node.
pub const DEVNET_ROLES: [&str; 4] = [
    "Boule member",
    "Prytany member",
    "EmergencyCouncil guardian",
    "Apophasis board member",
];

/// Result of the node-side devnet role check.
///
/// Access control fails closed: any failure to reach or understand the node
/// yields `denied()`, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevNetAccess {
    /// Whether the node granted access.
    #[serde(default)]
    pub granted: bool,
    /// The qualifying role the node reported, verbatim; empty when denied.
    #[serde(default)]
    pub role: String,
}

impl DevNetAccess {
    /// The safe-default response used on any failure path.
    pub fn denied() -> Self {
        Self::default()
    }
}

/// Combined live status of the session: connection state plus the active
/// profile's display metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStatus {
    /// The active network.
    pub network: NetworkKey,
    /// Display name of the active network.
    pub network_name: &'static str,
    /// Accent colour of the active network.
    pub network_color: &'static str,
    /// Whether the last RPC exchange succeeded.
    pub connected: bool,
    /// Last block height reported by the node.
    pub block_height: u64,
    /// Last peer count reported by the node.
    pub peer_count: u32,
    /// Last measured latency, or [`LATENCY_UNKNOWN`].
    pub latency_ms: i64,
    /// Node software version string, empty until reported.
    pub node_version: String,
}
