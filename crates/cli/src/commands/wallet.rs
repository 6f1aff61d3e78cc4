use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use parthenon_client::{wallet, NetworkSession};
use parthenon_types::wallet::Asset;
use std::sync::Arc;

#[derive(Parser, Debug)]
pub struct WalletArgs {
    #[clap(subcommand)]
    pub command: WalletCommands,
}

#[derive(Subcommand, Debug)]
pub enum WalletCommands {
    /// Show balances for all assets.
    Balance,
    /// Send a payment.
    Send {
        /// Asset ticker (TALN, DRM, or OBL).
        asset: String,
        /// Destination address.
        address: String,
        /// Amount to send.
        amount: f64,
        /// Optional memo attached to the payment.
        #[clap(long)]
        memo: Option<String>,
    },
    /// Show recent transactions.
    History {
        /// Maximum number of rows.
        #[clap(long, default_value_t = parthenon_client::session::DEFAULT_TX_LIMIT)]
        limit: u32,
    },
    /// Request a fresh receiving address from the node.
    NewAddress,
}

fn parse_asset(raw: &str) -> Result<Asset> {
    match raw.to_ascii_uppercase().as_str() {
        "TALN" => Ok(Asset::Taln),
        "DRM" => Ok(Asset::Drm),
        "OBL" => Ok(Asset::Obl),
        other => bail!("unknown asset: {other} (expected TALN, DRM, or OBL)"),
    }
}

pub async fn run(args: WalletArgs, session: &Arc<NetworkSession>) -> Result<()> {
    match args.command {
        WalletCommands::Balance => {
            let balances = session.get_balances().await;
            println!("TALN: {}", balances.taln);
            println!("DRM:  {}", balances.drm);
            println!("OBL:  {}", balances.obl);
            Ok(())
        }
        WalletCommands::Send {
            asset,
            address,
            amount,
            memo,
        } => {
            let asset = parse_asset(&asset)?;
            if !wallet::validate_address(&address) {
                bail!("invalid destination address: {address}");
            }
            let txid = session
                .send_transaction(asset, &address, amount, memo.as_deref())
                .await?;
            println!("Sent. txid: {txid}");
            Ok(())
        }
        WalletCommands::History { limit } => {
            let rows = session.get_transactions(limit).await;
            if rows.is_empty() {
                println!("No transactions.");
                return Ok(());
            }
            for row in rows {
                let txid = row.txid.as_deref().unwrap_or("-");
                println!("{:>12}  {:>6}  {:>16}  {}", row.time, row.asset, row.amount, txid);
            }
            Ok(())
        }
        WalletCommands::NewAddress => {
            let address = session.get_new_address().await?;
            println!("{address}");
            Ok(())
        }
    }
}
