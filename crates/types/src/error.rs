//! Client error taxonomy.
//!
//! Read-only aggregate queries swallow these and degrade to safe defaults;
//! state-changing operations propagate them unchanged. A node-reported
//! boolean rejection (vote not recorded, nomination already exists) is not
//! an error at all: it is a plain `false` return on the operation.

use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors produced by the wallet's RPC client stack.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never received a well-formed answer: DNS failure,
    /// connection refused, timeout, or an unreadable response body.
    #[error("transport failure: {reason}")]
    Transport {
        /// Description of the underlying fault.
        reason: String,
    },
    /// The node answered with an HTTP status outside the success range.
    #[error("HTTP error! status: {status}")]
    HttpStatus {
        /// The HTTP status code of the response.
        status: u16,
    },
    /// The node answered with a protocol-level error object. The message is
    /// surfaced verbatim so the UI can show the true cause.
    #[error("{message}")]
    Rpc {
        /// The node-reported error message, unmodified.
        message: String,
        /// The optional numeric error code from the error object.
        code: Option<i64>,
    },
    /// The caller requested a network key outside the fixed profile table.
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
    /// Transaction signing was requested but no real signer is integrated.
    /// A hash is not a signature; this fails loudly instead of fabricating
    /// an unauthenticated transaction.
    #[error(
        "transaction signing is not yet implemented; integrate Schnorr BIP-340 \
         signing before enabling transaction submission"
    )]
    SigningUnimplemented,
}

impl ClientError {
    /// True for faults that mean the node could not be reached at all.
    /// These flip the session's connected flag; a node that answered with an
    /// error object is, by construction, reachable.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::Transport { .. } | ClientError::HttpStatus { .. }
        )
    }
}

impl ErrorCode for ClientError {
    fn code(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "TRANSPORT_FAILURE",
            Self::HttpStatus { .. } => "HTTP_STATUS",
            Self::Rpc { .. } => "RPC_ERROR",
            Self::UnknownNetwork(_) => "UNKNOWN_NETWORK",
            Self::SigningUnimplemented => "SIGNING_UNIMPLEMENTED",
        }
    }
}
