use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use parthenon_client::{GovernanceClient, NetworkSession};
use parthenon_types::governance::{CastVote, ProposalType, SubmitProposal, VoteChoice};
use std::sync::Arc;

#[derive(Parser, Debug)]
pub struct GovernanceArgs {
    #[clap(subcommand)]
    pub command: GovernanceCommands,
}

#[derive(Subcommand, Debug)]
pub enum GovernanceCommands {
    /// List proposals.
    List,
    /// Show one proposal in detail.
    Show {
        /// Proposal id.
        id: u64,
    },
    /// Submit a new proposal.
    Submit {
        /// Proposer address (hex).
        #[clap(long)]
        proposer: String,
        /// Proposal category (e.g. GENERAL, TREASURY_SPENDING).
        #[clap(long = "type", default_value = "GENERAL")]
        proposal_type: String,
        /// Title of the proposal.
        #[clap(long)]
        title: String,
        /// Detailed description.
        #[clap(long)]
        description: String,
        /// Anti-spam deposit to lock.
        #[clap(long, default_value_t = 0)]
        deposit: u64,
    },
    /// Cast a vote on a proposal.
    Vote {
        /// Proposal id.
        proposal_id: u64,
        /// Voter address (hex).
        #[clap(long)]
        voter: String,
        /// YES, NO, ABSTAIN, or VETO.
        #[clap(long)]
        choice: String,
        /// The voter's voting power.
        #[clap(long)]
        voting_power: u64,
        /// Hex signature over the ballot.
        #[clap(long)]
        signature: String,
    },
    /// Fetch the refreshed vote counts for a proposal.
    Tally {
        /// Proposal id.
        id: u64,
    },
    /// Show treasury balances by track.
    Treasury,
    /// List active ostracism bans.
    Bans {
        /// Query bans as of this block height.
        #[clap(long)]
        height: Option<u64>,
    },
    /// Nominate an address for ostracism.
    Nominate {
        /// Address to nominate (hex).
        target: String,
        /// Nominating address (hex).
        #[clap(long)]
        nominator: String,
        /// Reason for the nomination.
        #[clap(long)]
        reason: String,
        /// Nominate as of this block height.
        #[clap(long)]
        height: Option<u64>,
    },
}

fn parse_choice(raw: &str) -> Result<VoteChoice> {
    match raw.to_ascii_uppercase().as_str() {
        "YES" => Ok(VoteChoice::Yes),
        "NO" => Ok(VoteChoice::No),
        "ABSTAIN" => Ok(VoteChoice::Abstain),
        "VETO" => Ok(VoteChoice::Veto),
        other => bail!("unknown vote choice: {other} (expected YES, NO, ABSTAIN, or VETO)"),
    }
}

pub async fn run(args: GovernanceArgs, session: &Arc<NetworkSession>) -> Result<()> {
    let client = GovernanceClient::new(Arc::clone(session));
    match args.command {
        GovernanceCommands::List => {
            let proposals = client.list_proposals().await;
            if proposals.is_empty() {
                println!("No proposals.");
                return Ok(());
            }
            for p in proposals {
                println!(
                    "#{:<4} [{}] {} — {} (votes: {})",
                    p.proposal_id,
                    p.status.label(),
                    p.title,
                    p.proposal_type.label(),
                    p.total_votes()
                );
            }
            Ok(())
        }
        GovernanceCommands::Show { id } => match client.get_proposal(id).await {
            Some(p) => {
                println!("#{} {}", p.proposal_id, p.title);
                println!("Type:        {}", p.proposal_type.label());
                println!("Status:      {}", p.status.label());
                println!("Proposer:    {}", p.proposer);
                println!("Deposit:     {}", p.deposit_amount);
                println!(
                    "Votes:       yes {} / no {} / abstain {} / veto {}",
                    p.yes_votes, p.no_votes, p.abstain_votes, p.veto_votes
                );
                println!("Quorum:      {}", p.quorum_requirement);
                println!("Threshold:   {}%", p.approval_threshold);
                println!("Boule OK:    {}", p.boule_approved);
                println!();
                println!("{}", p.description);
                Ok(())
            }
            None => bail!("proposal {id} not found"),
        },
        GovernanceCommands::Submit {
            proposer,
            proposal_type,
            title,
            description,
            deposit,
        } => {
            let submission = SubmitProposal {
                proposer,
                proposal_type: ProposalType::from_wire(&proposal_type),
                title,
                description,
                deposit_amount: deposit,
            };
            match client.submit_proposal(&submission).await? {
                Some(id) => println!("Submitted proposal #{id}"),
                None => println!("Submitted; the node did not assign an id"),
            }
            Ok(())
        }
        GovernanceCommands::Vote {
            proposal_id,
            voter,
            choice,
            voting_power,
            signature,
        } => {
            let ballot = CastVote {
                proposal_id,
                voter,
                choice: parse_choice(&choice)?,
                voting_power,
                signature,
            };
            if client.cast_vote(&ballot).await? {
                println!("Vote recorded.");
                Ok(())
            } else {
                bail!("vote was not recorded (rejected by the node)")
            }
        }
        GovernanceCommands::Tally { id } => match client.tally_votes(id).await {
            Some(tally) => {
                println!(
                    "yes {} / no {} / abstain {} / veto {} (total {})",
                    tally.yes_votes,
                    tally.no_votes,
                    tally.abstain_votes,
                    tally.veto_votes,
                    tally.total()
                );
                Ok(())
            }
            None => bail!("no tally available for proposal {id}"),
        },
        GovernanceCommands::Treasury => {
            let balance = client.treasury_balance().await;
            println!("Total:            {}", balance.total);
            println!("Core development: {}", balance.core_development);
            println!("Grants:           {}", balance.grants);
            println!("Operations:       {}", balance.operations);
            println!("Emergency:        {}", balance.emergency);
            Ok(())
        }
        GovernanceCommands::Bans { height } => {
            let bans = client.list_active_bans(height).await;
            if bans.is_empty() {
                println!("No active bans.");
                return Ok(());
            }
            for ban in bans {
                println!("{}  until block {}  ({})", ban.address, ban.ban_end, ban.reason);
            }
            Ok(())
        }
        GovernanceCommands::Nominate {
            target,
            nominator,
            reason,
            height,
        } => {
            if client
                .nominate_ostracism(&target, &nominator, &reason, height)
                .await?
            {
                println!("Nomination recorded.");
                Ok(())
            } else {
                bail!("nomination failed (already nominated or banned)")
            }
        }
    }
}
