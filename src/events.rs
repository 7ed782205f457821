multiversx_sc::imports!();

use crate::types::ProposalCreatedData;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] start_block: u64,
        #[indexed] end_block: u64,
        data: &ProposalCreatedData<Self::Api>,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] proposal_id: u64,
        #[indexed] support: bool,
        votes: &BigUint,
    );

    #[event("proposalQueued")]
    fn proposal_queued_event(&self, #[indexed] proposal_id: u64, #[indexed] eta: u64);

    #[event("proposalExecuted")]
    fn proposal_executed_event(&self, #[indexed] proposal_id: u64);

    #[event("proposalCanceled")]
    fn proposal_canceled_event(&self, #[indexed] proposal_id: u64);

    #[event("votingDelaySet")]
    fn voting_delay_set_event(&self, #[indexed] old_voting_delay: u64, new_voting_delay: u64);

    #[event("executorAuthorized")]
    fn executor_authorized_event(&self, #[indexed] executor: &ManagedAddress);

    #[event("executorUnauthorized")]
    fn executor_unauthorized_event(&self, #[indexed] executor: &ManagedAddress);

    #[event("guardianAbdicated")]
    fn guardian_abdicated_event(&self, #[indexed] previous_guardian: &ManagedAddress);
}
