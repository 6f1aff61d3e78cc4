use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use parthenon_client::{NetworkSession, StakingClient};
use parthenon_types::staking::StakeLayer;
use std::sync::Arc;

#[derive(Parser, Debug)]
pub struct StakingArgs {
    #[clap(subcommand)]
    pub command: StakingCommands,
}

#[derive(Subcommand, Debug)]
pub enum StakingCommands {
    /// Stake tokens on a layer.
    Stake {
        /// Staker address (hex).
        address: String,
        /// Amount to stake.
        amount: f64,
        /// Staking layer (l2 or l3).
        #[clap(long, default_value = "l2")]
        layer: String,
    },
    /// Unstake tokens from a layer.
    Unstake {
        /// Staker address (hex).
        address: String,
        /// Amount to unstake.
        amount: f64,
        /// Staking layer (l2 or l3).
        #[clap(long, default_value = "l2")]
        layer: String,
    },
    /// Show the node-derived voting power for an address.
    Power {
        /// Staker address (hex).
        address: String,
    },
}

fn parse_layer(raw: &str) -> Result<StakeLayer> {
    match raw.to_ascii_lowercase().as_str() {
        "l2" => Ok(StakeLayer::L2),
        "l3" => Ok(StakeLayer::L3),
        other => bail!("unknown staking layer: {other} (expected l2 or l3)"),
    }
}

pub async fn run(args: StakingArgs, session: &Arc<NetworkSession>) -> Result<()> {
    let client = StakingClient::new(Arc::clone(session));
    match args.command {
        StakingCommands::Stake {
            address,
            amount,
            layer,
        } => {
            let receipt = client.stake(&address, amount, parse_layer(&layer)?).await?;
            println!("Stake submitted: {}", receipt.status);
            Ok(())
        }
        StakingCommands::Unstake {
            address,
            amount,
            layer,
        } => {
            let receipt = client
                .unstake(&address, amount, parse_layer(&layer)?)
                .await?;
            println!("Unstake submitted: {}", receipt.status);
            Ok(())
        }
        StakingCommands::Power { address } => {
            let power = client.staking_power(&address).await;
            println!("{}: voting power {}", power.address, power.voting_power);
            Ok(())
        }
    }
}
