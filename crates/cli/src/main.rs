//! # ParthenonChain Wallet CLI
//!
//! Operator interface for a ParthenonChain node: connection management,
//! wallet operations, governance, and staking over JSON-RPC.

use anyhow::Result;
use clap::{Parser, Subcommand};
use parthenon_client::NetworkSession;
use parthenon_types::network::NetworkKey;
use std::sync::Arc;
use std::time::Duration;

mod commands;
mod config;

use commands::*;
use config::WalletConfig;

#[derive(Parser, Debug)]
#[clap(
    name = "parthenon",
    version,
    about = "The ParthenonChain wallet CLI.",
    long_about = "Connects to a ParthenonChain node over JSON-RPC and exposes wallet, \
governance, and staking operations from the terminal."
)]
struct Cli {
    /// Override the RPC endpoint URL for this invocation.
    #[clap(long, global = true)]
    url: Option<String>,

    /// Network to operate on (mainnet, testnet, devnet).
    #[clap(long, global = true)]
    network: Option<String>,

    /// Per-request timeout in seconds.
    #[clap(long, global = true, default_value_t = 10)]
    timeout_secs: u64,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the current connection status and node telemetry.
    Status,

    /// Connect to the node and report the outcome.
    Connect,

    /// Switch networks and check devnet access.
    Network(network::NetworkArgs),

    /// Balances, payments, history, and receiving addresses.
    Wallet(wallet::WalletArgs),

    /// Proposals, voting, treasury, and ostracism.
    Governance(governance::GovernanceArgs),

    /// Stake, unstake, and voting-power queries.
    Staking(staking::StakingArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let stored = WalletConfig::load_default().unwrap_or_default();
    let network = match &cli.network {
        Some(key) => key.parse::<NetworkKey>()?,
        None => stored.network.unwrap_or(NetworkKey::Mainnet),
    };

    let session = Arc::new(NetworkSession::with_timeout(
        network,
        Duration::from_secs(cli.timeout_secs),
    )?);
    if let Some(url) = cli.url.as_deref().or(stored.endpoint_override.as_deref()) {
        session.transport().set_endpoint(url);
    }

    match cli.command {
        Commands::Status => status::run_status(&session).await,
        Commands::Connect => status::run_connect(&session).await,
        Commands::Network(args) => network::run(args, &session).await,
        Commands::Wallet(args) => wallet::run(args, &session).await,
        Commands::Governance(args) => governance::run(args, &session).await,
        Commands::Staking(args) => staking::run(args, &session).await,
    }
}
