//! JSON-RPC 2.0 transport over HTTP POST.
//!
//! One transport instance belongs to one session. Request ids are assigned
//! from an atomic counter in call-issuance order, strictly increasing and
//! never reused for the lifetime of the instance. The transport performs no
//! retries and no queuing; retry policy belongs to callers.

use parthenon_types::error::ClientError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::Duration;

/// Default per-request timeout applied to every RPC.
pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: &'a [Value],
}

#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    #[serde(default)]
    message: String,
    #[serde(default)]
    code: Option<i64>,
}

/// The tagged shape of a successful exchange's `result` field.
///
/// A null or missing `result` is typed distinctly from a protocol error so
/// read paths map it to their documented defaults explicitly instead of
/// conflating "absent" with "failed".
#[derive(Debug)]
pub enum RpcOutcome {
    /// The node returned a non-null result value.
    Value(Value),
    /// The node answered without a usable result (`null` or missing).
    Absent,
}

impl RpcOutcome {
    /// Converts into an `Option`, discarding the distinction's name.
    pub fn value(self) -> Option<Value> {
        match self {
            RpcOutcome::Value(v) => Some(v),
            RpcOutcome::Absent => None,
        }
    }
}

/// HTTP JSON-RPC transport bound to a mutable endpoint URL.
///
/// Concurrent callers are safe: the atomic id counter is the only shared
/// request-building state. Switching the endpoint affects subsequent calls
/// only; requests already in flight keep the URL they were issued with.
pub struct RpcTransport {
    http: reqwest::Client,
    endpoint: RwLock<String>,
    next_id: AtomicU64,
    connected: AtomicBool,
}

impl RpcTransport {
    /// Creates a transport for `endpoint` with a finite per-request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Transport {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            http,
            endpoint: RwLock::new(endpoint.into()),
            next_id: AtomicU64::new(1),
            connected: AtomicBool::new(false),
        })
    }

    /// The endpoint subsequent calls will be issued against.
    pub fn endpoint(&self) -> String {
        self.endpoint
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Repoints the transport at a new endpoint URL.
    pub fn set_endpoint(&self, url: &str) {
        let mut endpoint = self
            .endpoint
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *endpoint = url.to_string();
    }

    /// Whether the last exchange reached the node.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }

    /// Records a connection-state transition decided by the session.
    pub fn mark_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::Relaxed);
    }

    fn transport_fault(&self, reason: String) -> ClientError {
        self.connected.store(false, Ordering::Relaxed);
        ClientError::Transport { reason }
    }

    /// Issues one JSON-RPC call and classifies the outcome.
    ///
    /// Transport-level faults (DNS, refused connection, timeout, unreadable
    /// body) and non-2xx HTTP statuses flip the connected flag and fail with
    /// the matching error. A node-reported error object fails with
    /// [`ClientError::Rpc`] carrying the message verbatim; the node
    /// answered, so the connected flag is left alone.
    pub async fn call(&self, method: &str, params: Vec<Value>) -> Result<RpcOutcome, ClientError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let url = self.endpoint();
        let request = RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params: &params,
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_fault(format!("{method}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            self.connected.store(false, Ordering::Relaxed);
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body: RpcResponse = response
            .json()
            .await
            .map_err(|e| self.transport_fault(format!("{method}: unreadable response body: {e}")))?;

        if let Some(err) = body.error {
            return Err(ClientError::Rpc {
                message: err.message,
                code: err.code,
            });
        }

        match body.result {
            Some(value) if !value.is_null() => Ok(RpcOutcome::Value(value)),
            _ => Ok(RpcOutcome::Absent),
        }
    }

    /// [`call`](Self::call), then decodes a present result into `T`.
    ///
    /// `Ok(None)` means the node answered without a result. A result that
    /// does not match the expected shape is a protocol-contract violation
    /// and fails like a node-reported error.
    pub async fn call_decoded<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<Option<T>, ClientError> {
        match self.call(method, params).await? {
            RpcOutcome::Value(value) => {
                serde_json::from_value(value)
                    .map(Some)
                    .map_err(|e| ClientError::Rpc {
                        message: format!("malformed {method} result: {e}"),
                        code: None,
                    })
            }
            RpcOutcome::Absent => Ok(None),
        }
    }
}
