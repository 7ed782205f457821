multiversx_sc::imports!();

use crate::{
    errors::*,
    types::{ProposalState, TimelockCall},
};

/// Queue, execute and cancel, kept consistent with the timelock.
///
/// Each loop over a proposal's actions runs inside one transaction: if the
/// timelock rejects any action, the revert also undoes the siblings already
/// sent to it and the proposal record is left untouched.
#[multiversx_sc::module]
pub trait OrchestratorModule:
    crate::config::ConfigModule
    + crate::events::EventsModule
    + crate::external::ExternalModule
    + crate::proposals::ProposalsModule
{
    // ========================================================
    // ENDPOINT: queue
    // ========================================================

    #[endpoint(queue)]
    fn queue(&self, proposal_id: u64) {
        let mut proposal = self.require_proposal(proposal_id);
        require!(
            self.proposal_state(&proposal) == ProposalState::Succeeded,
            ERR_NOT_SUCCEEDED
        );

        let Some(eta) = self
            .blockchain()
            .get_block_timestamp()
            .checked_add(self.timelock_delay())
        else {
            sc_panic!(ERR_SCHEDULE_OVERFLOW);
        };
        for action in self.proposal_actions(proposal_id).get().iter() {
            let call = TimelockCall::for_action(&action, eta);
            // Two identical calls at the same eta would share one queue key
            require!(
                !self.is_queued_in_timelock(&call),
                ERR_DUPLICATE_QUEUED_ACTION
            );
            self.timelock_queue(call);
        }

        proposal.eta = eta;
        self.proposals(proposal_id).set(&proposal);

        self.proposal_queued_event(proposal_id, eta);
    }

    // ========================================================
    // ENDPOINT: execute
    // Attached EGLD funds the per-action values.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(execute)]
    fn execute(&self, proposal_id: u64) {
        let mut proposal = self.require_proposal(proposal_id);
        require!(
            self.proposal_state(&proposal) == ProposalState::Queued,
            ERR_NOT_QUEUED
        );

        // Marked before any action runs: a re-entrant execute on this id
        // derives Executed and is refused.
        proposal.executed = true;
        self.proposals(proposal_id).set(&proposal);

        for action in self.proposal_actions(proposal_id).get().iter() {
            self.timelock_execute(TimelockCall::for_action(&action, proposal.eta));
        }

        self.proposal_executed_event(proposal_id);
    }

    // ========================================================
    // ENDPOINT: cancel
    // Guardian any time before a terminal state; anyone once the
    // proposer's standing has dropped below the threshold.
    // ========================================================

    #[endpoint(cancel)]
    fn cancel(&self, proposal_id: u64) {
        let mut proposal = self.require_proposal(proposal_id);
        require!(
            !self.proposal_state(&proposal).blocks_cancel(),
            ERR_CANNOT_CANCEL_TERMINAL
        );

        let caller = self.blockchain().get_caller();
        if caller != self.guardian().get() {
            let current_block = self.blockchain().get_block_nonce();
            let proposer_votes =
                self.prior_votes(&proposal.proposer, current_block.saturating_sub(1));
            require!(
                proposer_votes < self.proposal_threshold().get(),
                ERR_PROPOSER_ABOVE_THRESHOLD
            );
        }

        proposal.canceled = true;
        self.proposals(proposal_id).set(&proposal);

        // Only a queued proposal has anything sitting in the timelock
        if proposal.eta != 0 {
            for action in self.proposal_actions(proposal_id).get().iter() {
                self.timelock_cancel(TimelockCall::for_action(&action, proposal.eta));
            }
        }

        self.proposal_canceled_event(proposal_id);
    }
}
