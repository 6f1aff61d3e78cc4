#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # ParthenonChain Wallet Types
//!
//! This crate is the foundational library for the ParthenonChain wallet core,
//! containing all shared data structures, error types, and display tables.
//!
//! ## Architectural Role
//!
//! As the base crate, `parthenon-types` has minimal dependencies and is itself
//! a dependency for every other crate in the workspace. It defines the domain
//! model the node exposes over JSON-RPC (proposals, votes, treasury tracks,
//! ostracism bans, stake positions) together with the client error taxonomy.
//! It performs no I/O.

/// A top-level, crate-wide `Result` type alias with a default error type.
pub type Result<T, E = crate::error::ClientError> = std::result::Result<T, E>;

/// The client error taxonomy shared by every wallet component.
pub mod error;
/// Governance domain types: proposals, votes, tallies, treasury, ostracism.
pub mod governance;
/// Network profiles, connection state, and the devnet access record.
pub mod network;
/// Staking layers, stake receipts, and node-derived voting power.
pub mod staking;
/// Asset, balance, and transaction-history records.
pub mod wallet;
