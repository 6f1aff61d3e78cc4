//! Governance client: proposal lifecycle, voting, treasury, ostracism.
//!
//! Propagation policy (per operation): read-only aggregate queries swallow
//! transport and protocol failures and degrade to empty/zeroed data so
//! governance browsing can never crash the wallet; state-changing writes
//! propagate failures unchanged, with an explicit node-side rejection
//! surfaced as boolean `false` rather than an error.

use crate::session::NetworkSession;
use crate::transport::RpcTransport;
use parthenon_types::error::ClientError;
use parthenon_types::governance::{
    CastVote, OstracismBan, Proposal, SubmitProposal, TreasuryBalance, VoteTally,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
struct ProposalsWire {
    #[serde(default)]
    proposals: Vec<Proposal>,
}

#[derive(Deserialize)]
struct BansWire {
    #[serde(default)]
    bans: Vec<OstracismBan>,
}

#[derive(Deserialize)]
struct SubmitReceiptWire {
    proposal_id: u64,
}

#[derive(Deserialize)]
struct SuccessWire {
    #[serde(default)]
    success: bool,
}

/// Client for the node's governance surface, routed through a shared session.
pub struct GovernanceClient {
    session: Arc<NetworkSession>,
}

impl GovernanceClient {
    /// Creates a governance client on the given session.
    pub fn new(session: Arc<NetworkSession>) -> Self {
        Self { session }
    }

    fn transport(&self) -> Arc<RpcTransport> {
        self.session.transport()
    }

    /// Active proposals; empty on any failure or malformed answer.
    pub async fn list_proposals(&self) -> Vec<Proposal> {
        match self
            .transport()
            .call_decoded::<ProposalsWire>("governance/list_proposals", Vec::new())
            .await
        {
            Ok(Some(wire)) => wire.proposals,
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("list_proposals failed: {e}");
                Vec::new()
            }
        }
    }

    /// A single proposal by id; `None` on any failure.
    pub async fn get_proposal(&self, proposal_id: u64) -> Option<Proposal> {
        match self
            .transport()
            .call_decoded::<Proposal>("governance/get_proposal", vec![json!({ "proposal_id": proposal_id })])
            .await
        {
            Ok(found) => found,
            Err(e) => {
                log::warn!("get_proposal({proposal_id}) failed: {e}");
                None
            }
        }
    }

    /// Submits a new proposal and returns the node-assigned id.
    ///
    /// Failures propagate so the UI can show the true cause (insufficient
    /// deposit, forbidden, ...). `Ok(None)` means the node acknowledged the
    /// call without assigning an id; a success-shaped value is never
    /// fabricated on failure.
    pub async fn submit_proposal(
        &self,
        submission: &SubmitProposal,
    ) -> Result<Option<u64>, ClientError> {
        let params = vec![json!({
            "proposer": &submission.proposer,
            "type": submission.proposal_type.as_wire(),
            "title": &submission.title,
            "description": &submission.description,
            "deposit_amount": submission.deposit_amount,
        })];
        let receipt = self
            .transport()
            .call_decoded::<SubmitReceiptWire>("governance/submit_proposal", params)
            .await?;
        Ok(receipt.map(|r| r.proposal_id))
    }

    /// Casts a ballot. `Ok(true)` iff the node explicitly reports success;
    /// any other answer shape is `Ok(false)` (the vote was not recorded).
    /// Transport and protocol failures raise; they are distinct from an
    /// explicit rejection.
    pub async fn cast_vote(&self, vote: &CastVote) -> Result<bool, ClientError> {
        let params = vec![json!({
            "proposal_id": vote.proposal_id,
            "voter": &vote.voter,
            "choice": vote.choice.as_wire(),
            "voting_power": vote.voting_power,
            "signature": &vote.signature,
        })];
        match self
            .transport()
            .call_decoded::<SuccessWire>("governance/vote", params)
            .await?
        {
            Some(wire) => Ok(wire.success),
            None => Ok(false),
        }
    }

    /// Refreshed vote counts for a proposal; `None` on any failure.
    pub async fn tally_votes(&self, proposal_id: u64) -> Option<VoteTally> {
        match self
            .transport()
            .call_decoded::<VoteTally>("governance/tally", vec![json!({ "proposal_id": proposal_id })])
            .await
        {
            Ok(tally) => tally,
            Err(e) => {
                log::warn!("tally_votes({proposal_id}) failed: {e}");
                None
            }
        }
    }

    /// Treasury balances by track; all-zero on any failure so the treasury
    /// display degrades instead of erroring the screen.
    pub async fn treasury_balance(&self) -> TreasuryBalance {
        match self
            .transport()
            .call_decoded::<TreasuryBalance>("treasury/balance", Vec::new())
            .await
        {
            Ok(Some(balance)) => balance,
            Ok(None) => TreasuryBalance::default(),
            Err(e) => {
                log::warn!("treasury_balance failed: {e}");
                TreasuryBalance::default()
            }
        }
    }

    /// Active ostracism bans, optionally as of a specific block height;
    /// empty on any failure.
    pub async fn list_active_bans(&self, at_height: Option<u64>) -> Vec<OstracismBan> {
        let mut query = serde_json::Map::new();
        if let Some(height) = at_height {
            query.insert("block_height".to_string(), json!(height));
        }
        match self
            .transport()
            .call_decoded::<BansWire>("ostracism/list_bans", vec![query.into()])
            .await
        {
            Ok(Some(wire)) => wire.bans,
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("list_active_bans failed: {e}");
                Vec::new()
            }
        }
    }

    /// Nominates an address for ostracism. Mirrors [`cast_vote`]'s
    /// true/false-vs-raise split: an explicit `success: false` (already
    /// banned or nominated) is `Ok(false)`; transport/protocol failure
    /// raises. Confirmation only arrives via a later
    /// [`list_active_bans`](Self::list_active_bans) refresh.
    ///
    /// [`cast_vote`]: Self::cast_vote
    pub async fn nominate_ostracism(
        &self,
        target: &str,
        nominator: &str,
        reason: &str,
        at_height: Option<u64>,
    ) -> Result<bool, ClientError> {
        let mut nomination = serde_json::Map::new();
        nomination.insert("target".to_string(), json!(target));
        nomination.insert("nominator".to_string(), json!(nominator));
        nomination.insert("reason".to_string(), json!(reason));
        if let Some(height) = at_height {
            nomination.insert("block_height".to_string(), json!(height));
        }
        match self
            .transport()
            .call_decoded::<SuccessWire>("ostracism/nominate", vec![nomination.into()])
            .await?
        {
            Some(wire) => Ok(wire.success),
            None => Ok(false),
        }
    }
}
