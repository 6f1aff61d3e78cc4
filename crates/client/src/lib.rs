//! # ParthenonChain Wallet Client Lints
//!
//! Panics are disallowed in non-test code to promote robust error handling:
//! every network operation either returns a typed error or degrades to a
//! documented safe default.
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # ParthenonChain Wallet Client
//!
//! Client-side access layer for a ParthenonChain node: the JSON-RPC
//! transport, the multi-network session state machine, and the governance
//! and staking clients that route through it. One [`NetworkSession`] is
//! constructed explicitly and shared by every consumer; there are no
//! process-wide singletons.

pub mod governance;
pub mod session;
pub mod staking;
pub mod transport;
pub mod wallet;

// Re-export for convenience
pub use governance::GovernanceClient;
pub use session::NetworkSession;
pub use staking::StakingClient;
pub use transport::{RpcOutcome, RpcTransport, DEFAULT_RPC_TIMEOUT};
pub use wallet::{TransactionSigner, UnimplementedSigner};
