multiversx_sc::imports!();

use crate::types::{Proposal, ProposalState};

/// Height and time of the block being executed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ChainClock {
    pub height: u64,
    pub timestamp: u64,
}

/// Lifecycle state of a proposal at `clock`.
///
/// Cancellation dominates everything, the voting window dominates the
/// tally, and a passed proposal counts as queued once `eta` is set.
/// `grace_period` is only consulted for queued, unexecuted proposals, so
/// callers can hand in a timelock read without paying for it on every
/// derivation.
pub fn derive_state<M, G>(
    proposal: &Proposal<M>,
    quorum_votes: &BigUint<M>,
    clock: ChainClock,
    grace_period: G,
) -> ProposalState
where
    M: ManagedTypeApi,
    G: FnOnce() -> u64,
{
    if proposal.canceled {
        return ProposalState::Canceled;
    }
    if clock.height <= proposal.start_block {
        return ProposalState::Pending;
    }
    if clock.height <= proposal.end_block {
        return ProposalState::Active;
    }
    if proposal.for_votes <= proposal.against_votes || &proposal.for_votes < quorum_votes {
        return ProposalState::Defeated;
    }
    if proposal.eta == 0 {
        return ProposalState::Succeeded;
    }
    if proposal.executed {
        return ProposalState::Executed;
    }
    if clock.timestamp >= proposal.eta.saturating_add(grace_period()) {
        return ProposalState::Expired;
    }
    ProposalState::Queued
}
