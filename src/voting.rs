multiversx_sc::imports!();

use crate::{
    errors::*,
    types::{ProposalState, Receipt},
};

#[multiversx_sc::module]
pub trait VotingModule:
    crate::config::ConfigModule
    + crate::events::EventsModule
    + crate::external::ExternalModule
    + crate::proposals::ProposalsModule
{
    // ========================================================
    // ENDPOINT: castVote
    // ========================================================

    #[endpoint(castVote)]
    fn cast_vote(&self, proposal_id: u64, support: bool) {
        let voter = self.blockchain().get_caller();
        self.record_vote(&voter, proposal_id, support);
    }

    // ========================================================
    // INTERNAL: shared by direct and signed ballots
    // Weight is snapshotted at the window start, not at cast time.
    // ========================================================

    fn record_vote(&self, voter: &ManagedAddress, proposal_id: u64, support: bool) {
        let mut proposal = self.require_proposal(proposal_id);
        require!(
            self.proposal_state(&proposal) == ProposalState::Active,
            ERR_VOTING_CLOSED
        );

        let receipt_mapper = self.receipts(proposal_id, voter);
        require!(receipt_mapper.is_empty(), ERR_ALREADY_VOTED);

        let votes = self.prior_votes(voter, proposal.start_block);
        if support {
            proposal.for_votes += &votes;
        } else {
            proposal.against_votes += &votes;
        }

        receipt_mapper.set(Receipt {
            has_voted: true,
            support,
            votes: votes.clone(),
        });
        self.proposals(proposal_id).set(&proposal);

        self.vote_cast_event(voter, proposal_id, support, &votes);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getReceipt)]
    fn get_receipt(&self, proposal_id: u64, voter: ManagedAddress) -> Receipt<Self::Api> {
        self.require_proposal(proposal_id);
        let receipt_mapper = self.receipts(proposal_id, &voter);
        if receipt_mapper.is_empty() {
            return Receipt::not_voted();
        }
        receipt_mapper.get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("receipts")]
    fn receipts(
        &self,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<Receipt<Self::Api>>;
}
