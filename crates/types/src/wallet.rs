//! Asset and wallet-history records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three layer tokens of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Asset {
    /// Layer-1 token (Talanton).
    Taln,
    /// Layer-2 token (Drachma).
    Drm,
    /// Layer-3 token (Obolos).
    Obl,
}

impl Asset {
    /// The upper-case ticker used on the wire.
    pub fn ticker(&self) -> &'static str {
        match self {
            Asset::Taln => "TALN",
            Asset::Drm => "DRM",
            Asset::Obl => "OBL",
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ticker())
    }
}

/// Balances for all assets. Zeroed when the node cannot be asked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Balances {
    /// Talanton balance.
    #[serde(rename = "TALN", default)]
    pub taln: f64,
    /// Drachma balance.
    #[serde(rename = "DRM", default)]
    pub drm: f64,
    /// Obolos balance.
    #[serde(rename = "OBL", default)]
    pub obl: f64,
}

impl Balances {
    /// Balance for a single asset.
    pub fn get(&self, asset: Asset) -> f64 {
        match asset {
            Asset::Taln => self.taln,
            Asset::Drm => self.drm,
            Asset::Obl => self.obl,
        }
    }
}

/// One row of `listtransactions`. Decoded tolerantly: absent fields default,
/// unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Ticker of the asset moved.
    #[serde(default)]
    pub asset: String,
    /// Signed amount (negative for outgoing).
    #[serde(default)]
    pub amount: f64,
    /// UNIX timestamp of the transaction.
    #[serde(default)]
    pub time: u64,
    /// Counterparty address, when the node reports one.
    #[serde(default)]
    pub address: Option<String>,
    /// Transaction id, when the node reports one.
    #[serde(default)]
    pub txid: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_tickers() {
        assert_eq!(serde_json::to_string(&Asset::Taln).unwrap(), "\"TALN\"");
        assert_eq!(Asset::Drm.ticker(), "DRM");
        assert_eq!(Asset::Obl.to_string(), "OBL");
    }

    #[test]
    fn balances_decode_and_default() {
        let balances: Balances =
            serde_json::from_str(r#"{"TALN":10.5,"DRM":200.0,"OBL":50.0}"#).unwrap();
        assert_eq!(balances.get(Asset::Taln), 10.5);
        assert_eq!(balances.get(Asset::Drm), 200.0);
        assert_eq!(Balances::default().get(Asset::Obl), 0.0);
    }

    #[test]
    fn transaction_rows_decode_tolerantly() {
        let row: TransactionRecord =
            serde_json::from_str(r#"{"asset":"TALN","amount":1.0,"time":1700000000}"#).unwrap();
        assert_eq!(row.asset, "TALN");
        assert_eq!(row.txid, None);
    }
}
