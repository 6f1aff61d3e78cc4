//! Staking client for the L2/L3 pools.
//!
//! Stake and unstake move real value, so they raise on any failure. Power
//! queries degrade: unknown power counts as none.

use crate::session::NetworkSession;
use parthenon_types::error::ClientError;
use parthenon_types::staking::{StakeLayer, StakeReceipt, StakingPower};
use serde_json::json;
use std::sync::Arc;

/// Client for the node's staking surface, routed through a shared session.
pub struct StakingClient {
    session: Arc<NetworkSession>,
}

impl StakingClient {
    /// Creates a staking client on the given session.
    pub fn new(session: Arc<NetworkSession>) -> Self {
        Self { session }
    }

    /// Stakes `amount` on `layer` for `address`; raises on any failure.
    pub async fn stake(
        &self,
        address: &str,
        amount: f64,
        layer: StakeLayer,
    ) -> Result<StakeReceipt, ClientError> {
        let params = vec![json!({ "address": address, "amount": amount, "layer": layer.as_str() })];
        let receipt = self
            .session
            .transport()
            .call_decoded::<StakeReceipt>("staking/stake", params)
            .await?;
        Ok(receipt.unwrap_or_default())
    }

    /// Unstakes `amount` from `layer` for `address`; raises on any failure.
    pub async fn unstake(
        &self,
        address: &str,
        amount: f64,
        layer: StakeLayer,
    ) -> Result<StakeReceipt, ClientError> {
        let params = vec![json!({ "address": address, "amount": amount, "layer": layer.as_str() })];
        let receipt = self
            .session
            .transport()
            .call_decoded::<StakeReceipt>("staking/unstake", params)
            .await?;
        Ok(receipt.unwrap_or_default())
    }

    /// Node-derived voting power for an address. Never raises: a transport
    /// fault, protocol error, or null result all yield zero power.
    pub async fn staking_power(&self, address: &str) -> StakingPower {
        match self
            .session
            .transport()
            .call_decoded::<StakingPower>("staking/get_power", vec![json!({ "address": address })])
            .await
        {
            Ok(Some(power)) => power,
            Ok(None) => StakingPower::none(address),
            Err(e) => {
                log::warn!("staking_power({address}) failed: {e}");
                StakingPower::none(address)
            }
        }
    }
}
