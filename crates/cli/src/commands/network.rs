use crate::config::WalletConfig;
use anyhow::Result;
use clap::{Parser, Subcommand};
use parthenon_client::NetworkSession;
use parthenon_types::network::{NetworkKey, DEVNET_ROLES};
use std::sync::Arc;

#[derive(Parser, Debug)]
pub struct NetworkArgs {
    #[clap(subcommand)]
    pub command: NetworkCommands,
}

#[derive(Subcommand, Debug)]
pub enum NetworkCommands {
    /// Switch the active network and reconnect.
    Set {
        /// mainnet, testnet, or devnet.
        key: String,
    },
    /// Verify that an address holds a role that permits devnet access.
    Access {
        /// Governance address (hex) to check.
        address: String,
    },
}

pub async fn run(args: NetworkArgs, session: &Arc<NetworkSession>) -> Result<()> {
    match args.command {
        NetworkCommands::Set { key } => {
            let network: NetworkKey = key.parse()?;
            let connected = session.set_network(network).await;

            let mut config = WalletConfig::load_default().unwrap_or_default();
            config.network = Some(network);
            if let Err(e) = config.save_default() {
                log::warn!("could not persist network selection: {e}");
            }

            let profile = network.profile();
            println!("Switched to {} ({})", profile.display_name, profile.endpoint_url);
            if connected {
                println!("Connected (height {})", session.block_height());
            } else {
                println!("Not connected — the node did not answer the liveness check");
            }
            Ok(())
        }
        NetworkCommands::Access { address } => {
            let access = session.check_devnet_access(&address).await;
            if access.granted {
                let role = if access.role.is_empty() {
                    "Verified"
                } else {
                    access.role.as_str()
                };
                println!("Access granted — role: {role}");
            } else {
                println!("Access denied — the address holds no qualifying governance role.");
                println!("Qualifying roles: {}", DEVNET_ROLES.join(", "));
            }
            Ok(())
        }
    }
}
