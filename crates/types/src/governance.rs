//! Governance domain types.
//!
//! Proposals are created on the node and only refreshed client-side; the one
//! permitted local mutation is merging a fresh tally into a held copy. Vote
//! choices are final; no retraction operation exists anywhere in the API.
//!
//! Proposal categories and statuses are closed sums with an `Other` escape
//! that exists purely for forward-compatible decoding at the serialization
//! boundary; all internal matching is exhaustive.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Neutral colour returned for statuses outside the known table.
pub const NEUTRAL_STATUS_COLOR: &str = "#333";

/// The category of a governance proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProposalType {
    /// A generic proposal for signalling community intent.
    General,
    /// A proposal to change a registered on-chain parameter.
    ParameterChange,
    /// A proposal to spend from a treasury track.
    TreasurySpending,
    /// A proposal to perform a coordinated software upgrade.
    ProtocolUpgrade,
    /// A proposal amending the constitution (higher approval threshold).
    Constitutional,
    /// An emergency measure with an expedited voting window.
    Emergency,
    /// A category this client does not know. Carries the raw wire string.
    Other(String),
}

impl ProposalType {
    /// The protocol wire form of this category.
    pub fn as_wire(&self) -> &str {
        match self {
            ProposalType::General => "GENERAL",
            ProposalType::ParameterChange => "PARAMETER_CHANGE",
            ProposalType::TreasurySpending => "TREASURY_SPENDING",
            ProposalType::ProtocolUpgrade => "PROTOCOL_UPGRADE",
            ProposalType::Constitutional => "CONSTITUTIONAL",
            ProposalType::Emergency => "EMERGENCY",
            ProposalType::Other(raw) => raw,
        }
    }

    /// Decodes a wire string, preserving unknown values in `Other`.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "GENERAL" => ProposalType::General,
            "PARAMETER_CHANGE" => ProposalType::ParameterChange,
            "TREASURY_SPENDING" => ProposalType::TreasurySpending,
            "PROTOCOL_UPGRADE" => ProposalType::ProtocolUpgrade,
            "CONSTITUTIONAL" => ProposalType::Constitutional,
            "EMERGENCY" => ProposalType::Emergency,
            other => ProposalType::Other(other.to_string()),
        }
    }

    /// Human-readable label; unknown categories surface their raw string.
    pub fn label(&self) -> &str {
        match self {
            ProposalType::General => "General",
            ProposalType::ParameterChange => "Parameter Change",
            ProposalType::TreasurySpending => "Treasury Spending",
            ProposalType::ProtocolUpgrade => "Protocol Upgrade",
            ProposalType::Constitutional => "Constitutional",
            ProposalType::Emergency => "Emergency",
            ProposalType::Other(raw) => raw,
        }
    }
}

impl Default for ProposalType {
    fn default() -> Self {
        ProposalType::General
    }
}

impl fmt::Display for ProposalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ProposalType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for ProposalType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ProposalType::from_wire(&raw))
    }
}

/// The current status of a proposal in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProposalStatus {
    /// Submitted, voting not yet open.
    Pending,
    /// In its voting period.
    Active,
    /// Voting ended with approval.
    Passed,
    /// Voting ended without approval (or vetoed).
    Rejected,
    /// Approved and its on-chain effect applied.
    Executed,
    /// Lapsed without reaching quorum before the deadline.
    Expired,
    /// A status this client does not know. Carries the raw wire string.
    Other(String),
}

impl ProposalStatus {
    /// The protocol wire form of this status.
    pub fn as_wire(&self) -> &str {
        match self {
            ProposalStatus::Pending => "PENDING",
            ProposalStatus::Active => "ACTIVE",
            ProposalStatus::Passed => "PASSED",
            ProposalStatus::Rejected => "REJECTED",
            ProposalStatus::Executed => "EXECUTED",
            ProposalStatus::Expired => "EXPIRED",
            ProposalStatus::Other(raw) => raw,
        }
    }

    /// Decodes a wire string, preserving unknown values in `Other`.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "PENDING" => ProposalStatus::Pending,
            "ACTIVE" => ProposalStatus::Active,
            "PASSED" => ProposalStatus::Passed,
            "REJECTED" => ProposalStatus::Rejected,
            "EXECUTED" => ProposalStatus::Executed,
            "EXPIRED" => ProposalStatus::Expired,
            other => ProposalStatus::Other(other.to_string()),
        }
    }

    /// Human-readable label; unknown statuses surface their raw string.
    pub fn label(&self) -> &str {
        match self {
            ProposalStatus::Pending => "Pending",
            ProposalStatus::Active => "Active",
            ProposalStatus::Passed => "Passed",
            ProposalStatus::Rejected => "Rejected",
            ProposalStatus::Executed => "Executed",
            ProposalStatus::Expired => "Expired",
            ProposalStatus::Other(raw) => raw,
        }
    }

    /// Colour hint for styling; unknown statuses map to the neutral colour.
    pub fn color(&self) -> &'static str {
        match self {
            ProposalStatus::Pending => "#888",
            ProposalStatus::Active => "#007AFF",
            ProposalStatus::Passed => "#28a745",
            ProposalStatus::Rejected => "#dc3545",
            ProposalStatus::Executed => "#6f42c1",
            ProposalStatus::Expired => "#aaa",
            ProposalStatus::Other(_) => NEUTRAL_STATUS_COLOR,
        }
    }
}

impl Default for ProposalStatus {
    fn default() -> Self {
        ProposalStatus::Pending
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ProposalStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for ProposalStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ProposalStatus::from_wire(&raw))
    }
}

/// A ballot option. A cast vote is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoteChoice {
    /// In favour of the proposal.
    Yes,
    /// Against the proposal.
    No,
    /// Counts towards quorum but not the approval threshold.
    Abstain,
    /// Strongly against: if the veto share of cast votes exceeds the veto
    /// threshold the proposal is rejected regardless of the YES majority.
    Veto,
}

impl VoteChoice {
    /// The protocol wire form of this choice.
    pub fn as_wire(&self) -> &'static str {
        match self {
            VoteChoice::Yes => "YES",
            VoteChoice::No => "NO",
            VoteChoice::Abstain => "ABSTAIN",
            VoteChoice::Veto => "VETO",
        }
    }
}

impl fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Vote counts for a proposal, refreshed from the node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    /// Total weighted YES ballots.
    #[serde(default)]
    pub yes_votes: u64,
    /// Total weighted NO ballots.
    #[serde(default)]
    pub no_votes: u64,
    /// Total weighted ABSTAIN ballots.
    #[serde(default)]
    pub abstain_votes: u64,
    /// Total weighted VETO ballots.
    #[serde(default)]
    pub veto_votes: u64,
}

impl VoteTally {
    /// Total votes cast across all four choices. Missing fields decode as 0.
    pub fn total(&self) -> u64 {
        self.yes_votes + self.no_votes + self.abstain_votes + self.veto_votes
    }
}

fn default_approval_threshold() -> u64 {
    50
}

/// A governance proposal as reported by the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    /// The unique identifier for the proposal.
    #[serde(default)]
    pub proposal_id: u64,
    /// The title of the proposal.
    #[serde(default)]
    pub title: String,
    /// A detailed description of the proposal.
    #[serde(default)]
    pub description: String,
    /// The category of the proposal.
    #[serde(rename = "type", default)]
    pub proposal_type: ProposalType,
    /// The current lifecycle status.
    #[serde(default)]
    pub status: ProposalStatus,
    /// Hex address of the account that submitted the proposal.
    #[serde(default)]
    pub proposer: String,
    /// Anti-spam collateral locked with the proposal.
    #[serde(default)]
    pub deposit_amount: u64,
    /// Total weighted YES ballots.
    #[serde(default)]
    pub yes_votes: u64,
    /// Total weighted NO ballots.
    #[serde(default)]
    pub no_votes: u64,
    /// Total weighted ABSTAIN ballots.
    #[serde(default)]
    pub abstain_votes: u64,
    /// Total weighted VETO ballots.
    #[serde(default)]
    pub veto_votes: u64,
    /// Minimum total weighted votes for the outcome to be valid.
    #[serde(default)]
    pub quorum_requirement: u64,
    /// Approval percentage (0–100) required among non-abstain votes.
    #[serde(default = "default_approval_threshold")]
    pub approval_threshold: u64,
    /// Whether the Boule pre-approved the proposal.
    #[serde(default)]
    pub boule_approved: bool,
}

impl Proposal {
    /// Total votes cast across all four choices.
    pub fn total_votes(&self) -> u64 {
        self.yes_votes + self.no_votes + self.abstain_votes + self.veto_votes
    }

    /// Merges a fresh tally into this held copy, the only local mutation a
    /// proposal ever undergoes.
    pub fn apply_tally(&mut self, tally: &VoteTally) {
        self.yes_votes = tally.yes_votes;
        self.no_votes = tally.no_votes;
        self.abstain_votes = tally.abstain_votes;
        self.veto_votes = tally.veto_votes;
    }
}

/// Parameters for submitting a new proposal. Submission is a state-changing
/// write: failures propagate to the caller instead of degrading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitProposal {
    /// Hex address of the proposer.
    pub proposer: String,
    /// The category of the proposal.
    pub proposal_type: ProposalType,
    /// The title of the proposal.
    pub title: String,
    /// A detailed description of the proposal.
    pub description: String,
    /// Anti-spam collateral to lock with the proposal.
    pub deposit_amount: u64,
}

/// Parameters for casting a ballot on a proposal.
#[derive(Debug, Clone, PartialEq)]
pub struct CastVote {
    /// The proposal being voted on.
    pub proposal_id: u64,
    /// Hex address of the voter.
    pub voter: String,
    /// The ballot option. Final once recorded.
    pub choice: VoteChoice,
    /// The voter's node-derived voting power.
    pub voting_power: u64,
    /// Hex signature over the ballot.
    pub signature: String,
}

/// Treasury balances broken down by track. Non-authoritative client-side
/// cache of a node-computed value; all-zero when unavailable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasuryBalance {
    /// Sum across all tracks.
    #[serde(default)]
    pub total: u64,
    /// Core development track.
    #[serde(default)]
    pub core_development: u64,
    /// Grants track.
    #[serde(default)]
    pub grants: u64,
    /// Operations track.
    #[serde(default)]
    pub operations: u64,
    /// Emergency reserve track.
    #[serde(default)]
    pub emergency: u64,
}

/// An active ostracism ban. Read-only projection of node state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OstracismBan {
    /// The banned hex address.
    #[serde(default)]
    pub address: String,
    /// Block height at which the ban lapses.
    #[serde(default)]
    pub ban_end: u64,
    /// The recorded reason for the ban.
    #[serde(default)]
    pub reason: String,
}
