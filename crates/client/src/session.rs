//! The multi-network session state machine.
//!
//! State machine: `Disconnected --connect ok--> Connected --transport fault
//! on any RPC--> Disconnected`. A network switch always passes through
//! Disconnected before attempting the new connection, and a failed switch
//! never restores the previous network's state.

use crate::transport::{RpcTransport, DEFAULT_RPC_TIMEOUT};
use parthenon_types::error::ClientError;
use parthenon_types::network::{DevNetAccess, NetworkKey, NetworkStatus, LATENCY_UNKNOWN};
use parthenon_types::wallet::{Asset, Balances, TransactionRecord};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Default page size for `listtransactions`.
pub const DEFAULT_TX_LIMIT: u32 = 100;

struct SessionState {
    network: NetworkKey,
    block_height: u64,
    peer_count: u32,
    latency_ms: i64,
    node_version: String,
}

/// The single logical owner of the connection to a node.
///
/// One session is shared process-wide by explicit construction and
/// injection; governance and staking clients route every RPC through its
/// transport and observe its connection state. All methods take `&self`, so
/// the session is safe to share behind an [`Arc`].
pub struct NetworkSession {
    transport: Arc<RpcTransport>,
    state: RwLock<SessionState>,
    // Serializes periodic status refreshes so a slow node cannot pile up
    // concurrent polls; latecomers get the cached snapshot.
    refresh_gate: tokio::sync::Mutex<()>,
}

impl NetworkSession {
    /// Creates a session on `network` at its profile's default endpoint.
    pub fn new(network: NetworkKey) -> Result<Self, ClientError> {
        Self::with_timeout(network, DEFAULT_RPC_TIMEOUT)
    }

    /// Creates a session with a custom per-request timeout.
    pub fn with_timeout(network: NetworkKey, timeout: Duration) -> Result<Self, ClientError> {
        let transport = RpcTransport::new(network.profile().endpoint_url, timeout)?;
        Ok(Self {
            transport: Arc::new(transport),
            state: RwLock::new(SessionState {
                network,
                block_height: 0,
                peer_count: 0,
                latency_ms: LATENCY_UNKNOWN,
                node_version: String::new(),
            }),
            refresh_gate: tokio::sync::Mutex::new(()),
        })
    }

    /// The transport shared by every client on this session.
    pub fn transport(&self) -> Arc<RpcTransport> {
        Arc::clone(&self.transport)
    }

    fn read_state<T>(&self, f: impl FnOnce(&SessionState) -> T) -> T {
        let state = self
            .state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&state)
    }

    fn write_state<T>(&self, f: impl FnOnce(&mut SessionState) -> T) -> T {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut state)
    }

    /// Whether the last RPC exchange reached the node.
    pub fn is_connected(&self) -> bool {
        self.transport.is_connected()
    }

    /// Last block height reported by the node.
    pub fn block_height(&self) -> u64 {
        self.read_state(|s| s.block_height)
    }

    /// Attempts to connect, optionally overriding the endpoint URL first.
    ///
    /// Connecting is advisory, not transactional: the liveness check either
    /// moves the session to Connected and returns `true`, or leaves it
    /// Disconnected and returns `false`. It never raises.
    pub async fn connect(&self, override_url: Option<&str>) -> bool {
        if let Some(url) = override_url {
            self.transport.set_endpoint(url);
        }
        match self
            .transport
            .call_decoded::<u64>("getblockcount", Vec::new())
            .await
        {
            Ok(Some(height)) => {
                self.write_state(|s| s.block_height = height);
                self.transport.mark_connected(true);
                true
            }
            Ok(None) => {
                self.transport.mark_connected(false);
                false
            }
            Err(e) => {
                log::error!("connection error: {e}");
                self.transport.mark_connected(false);
                false
            }
        }
    }

    /// Switches to a different network and immediately attempts to connect,
    /// returning the connect result.
    pub async fn set_network(&self, network: NetworkKey) -> bool {
        self.write_state(|s| {
            s.network = network;
        });
        self.transport.set_endpoint(network.profile().endpoint_url);
        self.transport.mark_connected(false);
        self.connect(None).await
    }

    /// String-keyed [`set_network`](Self::set_network): fails fast with
    /// [`ClientError::UnknownNetwork`] before any state change.
    pub async fn set_network_str(&self, key: &str) -> Result<bool, ClientError> {
        let network: NetworkKey = key.parse()?;
        Ok(self.set_network(network).await)
    }

    /// Verifies that `address` holds a qualifying governance role for
    /// devnet access. Eligible roles: Boule, Prytany, EmergencyCouncil
    /// guardian, Apophasis board. Membership is decided entirely by
    /// the node; the client only relays the answer.
    ///
    /// Never raises. Access control fails closed: any transport or protocol
    /// failure yields `{granted: false, role: ""}`.
    pub async fn check_devnet_access(&self, address: &str) -> DevNetAccess {
        match self
            .transport
            .call_decoded::<DevNetAccess>("network/check_dev_access", vec![json!({ "address": address })])
            .await
        {
            Ok(Some(access)) => access,
            Ok(None) => DevNetAccess::denied(),
            Err(e) => {
                log::warn!("devnet access check failed: {e}");
                DevNetAccess::denied()
            }
        }
    }

    /// Pure read of the current connection state combined with the active
    /// profile's display metadata. No I/O.
    pub fn status(&self) -> NetworkStatus {
        self.read_state(|s| {
            let profile = s.network.profile();
            NetworkStatus {
                network: s.network,
                network_name: profile.display_name,
                network_color: profile.accent_color,
                connected: self.transport.is_connected(),
                block_height: s.block_height,
                peer_count: s.peer_count,
                latency_ms: s.latency_ms,
                node_version: s.node_version.clone(),
            }
        })
    }

    /// Best-effort telemetry pull (peers, latency, node version).
    ///
    /// Never raises; on failure the previous cached status is returned
    /// unchanged. Safe to call on a fixed interval: while one refresh is
    /// outstanding, further callers are answered from the cache without
    /// issuing another RPC.
    pub async fn refresh_status(&self) -> NetworkStatus {
        #[derive(Deserialize)]
        struct NodeStatusWire {
            #[serde(default)]
            peer_count: Option<u32>,
            #[serde(default)]
            latency_ms: Option<i64>,
            #[serde(default)]
            version: Option<String>,
        }

        let Ok(_guard) = self.refresh_gate.try_lock() else {
            return self.status();
        };

        match self
            .transport
            .call_decoded::<NodeStatusWire>("network/status", Vec::new())
            .await
        {
            Ok(Some(wire)) => self.write_state(|s| {
                if let Some(peers) = wire.peer_count {
                    s.peer_count = peers;
                }
                if let Some(latency) = wire.latency_ms {
                    s.latency_ms = latency;
                }
                if let Some(version) = wire.version {
                    s.node_version = version;
                }
            }),
            Ok(None) => {}
            Err(e) => log::warn!("error refreshing network status: {e}"),
        }
        self.status()
    }

    /// Best-effort block-height refresh; returns the previous height when
    /// the node cannot be asked.
    pub async fn update_block_height(&self) -> u64 {
        match self
            .transport
            .call_decoded::<u64>("getblockcount", Vec::new())
            .await
        {
            Ok(Some(height)) => {
                self.write_state(|s| s.block_height = height);
                height
            }
            Ok(None) => self.block_height(),
            Err(e) => {
                log::warn!("error updating block height: {e}");
                self.block_height()
            }
        }
    }

    /// Balances for all assets; zeroed on any failure.
    pub async fn get_balances(&self) -> Balances {
        match self
            .transport
            .call_decoded::<Balances>("getbalance", Vec::new())
            .await
        {
            Ok(Some(balances)) => balances,
            Ok(None) => Balances::default(),
            Err(e) => {
                log::warn!("error getting balance: {e}");
                Balances::default()
            }
        }
    }

    /// Most recent transactions, newest first; empty on any failure.
    pub async fn get_transactions(&self, limit: u32) -> Vec<TransactionRecord> {
        match self
            .transport
            .call_decoded::<Vec<TransactionRecord>>("listtransactions", vec![json!(limit)])
            .await
        {
            Ok(Some(rows)) => rows,
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("error getting transactions: {e}");
                Vec::new()
            }
        }
    }

    /// Submits a payment and returns the transaction id.
    ///
    /// This moves value, so failures propagate: transport faults and
    /// node-reported errors raise, and an answer without a txid is treated
    /// as a protocol violation rather than success.
    pub async fn send_transaction(
        &self,
        asset: Asset,
        address: &str,
        amount: f64,
        memo: Option<&str>,
    ) -> Result<String, ClientError> {
        let mut params: Vec<Value> = vec![json!(asset.ticker()), json!(address), json!(amount)];
        if let Some(memo) = memo.filter(|m| !m.is_empty()) {
            params.push(json!(memo));
        }
        match self
            .transport
            .call_decoded::<String>("sendtoaddress", params)
            .await?
        {
            Some(txid) => Ok(txid),
            None => Err(ClientError::Rpc {
                message: "sendtoaddress returned no transaction id".to_string(),
                code: None,
            }),
        }
    }

    /// Requests a fresh receiving address from the node; propagates failures.
    pub async fn get_new_address(&self) -> Result<String, ClientError> {
        match self
            .transport
            .call_decoded::<String>("getnewaddress", Vec::new())
            .await?
        {
            Some(address) => Ok(address),
            None => Err(ClientError::Rpc {
                message: "getnewaddress returned no address".to_string(),
                code: None,
            }),
        }
    }
}
