//! Staking types.
//!
//! Voting power is derived by the node as `floor(sqrt(staked_balance))` on
//! the position's layer; the client never recomputes it, only displays it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A staking/execution tier with its own token and staking pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StakeLayer {
    /// Layer-2 pool (Drachma).
    #[default]
    L2,
    /// Layer-3 pool (Obolos).
    L3,
}

impl StakeLayer {
    /// The wire form of this layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            StakeLayer::L2 => "l2",
            StakeLayer::L3 => "l3",
        }
    }
}

impl fmt::Display for StakeLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node-derived voting power for an address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StakingPower {
    /// The staker address.
    #[serde(default)]
    pub address: String,
    /// Voting power as computed by the node. Unknown power counts as none.
    #[serde(default)]
    pub voting_power: u64,
    /// The layer the power was reported for, when the node includes it.
    #[serde(default)]
    pub layer: Option<StakeLayer>,
}

impl StakingPower {
    /// The safe default used when the node cannot be asked or answers empty.
    pub fn none(address: &str) -> Self {
        Self {
            address: address.to_string(),
            voting_power: 0,
            layer: None,
        }
    }
}

/// Acknowledgement returned by the node for a stake or unstake submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StakeReceipt {
    /// Node-reported disposition, e.g. "accepted" or "queued".
    #[serde(default)]
    pub status: String,
    /// The layer the operation applied to, when echoed back.
    #[serde(default)]
    pub layer: Option<StakeLayer>,
    /// The amount the node acknowledged, when echoed back.
    #[serde(default)]
    pub amount: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_wire_form() {
        assert_eq!(serde_json::to_string(&StakeLayer::L2).unwrap(), "\"l2\"");
        assert_eq!(serde_json::to_string(&StakeLayer::L3).unwrap(), "\"l3\"");
        assert_eq!(StakeLayer::default(), StakeLayer::L2);
    }

    #[test]
    fn power_defaults_to_zero() {
        let power = StakingPower::none("addr1");
        assert_eq!(power.voting_power, 0);
        let decoded: StakingPower = serde_json::from_str(r#"{"address":"addr1"}"#).unwrap();
        assert_eq!(decoded.voting_power, 0);
    }

    #[test]
    fn receipt_decodes_node_shapes() {
        let receipt: StakeReceipt =
            serde_json::from_str(r#"{"status":"accepted","layer":"l2","amount":100.0}"#).unwrap();
        assert_eq!(receipt.status, "accepted");
        assert_eq!(receipt.layer, Some(StakeLayer::L2));
        assert_eq!(receipt.amount, Some(100.0));
    }
}
