multiversx_sc::imports!();

use crate::{
    config::{MAX_OPERATIONS, VOTING_PERIOD},
    errors::*,
    state::{derive_state, ChainClock},
    types::{Proposal, ProposalAction, ProposalCreatedData, ProposalState},
};

/// Append-only proposal registry. Records are indexed by a dense 1-based
/// id and never deleted; lifecycle state is recomputed on every read.
#[multiversx_sc::module]
pub trait ProposalsModule:
    crate::config::ConfigModule + crate::events::EventsModule + crate::external::ExternalModule
{
    // ========================================================
    // ENDPOINT: propose
    // ========================================================

    #[endpoint(propose)]
    fn propose(
        &self,
        targets: ManagedVec<ManagedAddress>,
        values: ManagedVec<BigUint>,
        signatures: ManagedVec<ManagedBuffer>,
        calldatas: ManagedVec<ManagedBuffer>,
        description: ManagedBuffer,
    ) -> u64 {
        let proposer = self.blockchain().get_caller();
        let current_block = self.blockchain().get_block_nonce();

        // Standing is read one block back, never at the current height
        let proposer_votes = self.prior_votes(&proposer, current_block.saturating_sub(1));
        require!(
            proposer_votes > self.proposal_threshold().get(),
            ERR_THRESHOLD_NOT_MET
        );

        let action_count = targets.len();
        require!(
            values.len() == action_count
                && signatures.len() == action_count
                && calldatas.len() == action_count,
            ERR_MALFORMED_ACTION_SET
        );
        require!(action_count != 0, ERR_EMPTY_ACTION_SET);
        require!(action_count <= MAX_OPERATIONS, ERR_TOO_MANY_ACTIONS);

        let latest_id = self.latest_proposal_id(&proposer).get();
        if latest_id != 0 {
            let latest_state = self.proposal_state(&self.proposals(latest_id).get());
            require!(
                latest_state != ProposalState::Active,
                ERR_LIVE_PROPOSAL_ACTIVE
            );
            require!(
                latest_state != ProposalState::Pending,
                ERR_LIVE_PROPOSAL_PENDING
            );
        }

        let mut actions = ManagedVec::new();
        for index in 0..action_count {
            actions.push(ProposalAction {
                target: targets.get(index).clone_value(),
                value: values.get(index).clone_value(),
                signature: signatures.get(index).clone_value(),
                data: calldatas.get(index).clone_value(),
            });
        }

        let Some(start_block) = current_block.checked_add(self.voting_delay().get()) else {
            sc_panic!(ERR_SCHEDULE_OVERFLOW);
        };
        let Some(end_block) = start_block.checked_add(VOTING_PERIOD) else {
            sc_panic!(ERR_SCHEDULE_OVERFLOW);
        };
        let proposal_id = self.proposal_count().get() + 1;

        let proposal = Proposal {
            id: proposal_id,
            proposer: proposer.clone(),
            eta: 0,
            start_block,
            end_block,
            for_votes: BigUint::zero(),
            against_votes: BigUint::zero(),
            canceled: false,
            executed: false,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_actions(proposal_id).set(&actions);
        self.proposal_count().set(proposal_id);
        self.latest_proposal_id(&proposer).set(proposal_id);

        self.proposal_created_event(
            proposal_id,
            &proposer,
            start_block,
            end_block,
            &ProposalCreatedData {
                actions,
                description,
            },
        );

        proposal_id
    }

    // ========================================================
    // INTERNAL: lookup and state derivation
    // ========================================================

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            proposal_id > 0 && proposal_id <= self.proposal_count().get(),
            ERR_INVALID_PROPOSAL_ID
        );
        self.proposals(proposal_id).get()
    }

    fn chain_clock(&self) -> ChainClock {
        ChainClock {
            height: self.blockchain().get_block_nonce(),
            timestamp: self.blockchain().get_block_timestamp(),
        }
    }

    fn proposal_state(&self, proposal: &Proposal<Self::Api>) -> ProposalState {
        derive_state(
            proposal,
            &self.quorum_votes().get(),
            self.chain_clock(),
            || self.timelock_grace_period(),
        )
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(state)]
    fn state(&self, proposal_id: u64) -> ProposalState {
        let proposal = self.require_proposal(proposal_id);
        self.proposal_state(&proposal)
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_proposal(proposal_id)
    }

    #[view(getActions)]
    fn get_actions(&self, proposal_id: u64) -> ManagedVec<ProposalAction<Self::Api>> {
        self.require_proposal(proposal_id);
        self.proposal_actions(proposal_id).get()
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        if count == 0 || total == 0 {
            return result;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for proposal_id in start..=end {
            result.push(self.proposals(proposal_id).get());
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(proposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    /// Written once by `propose`
    #[storage_mapper("proposalActions")]
    fn proposal_actions(
        &self,
        proposal_id: u64,
    ) -> SingleValueMapper<ManagedVec<ProposalAction<Self::Api>>>;

    #[view(latestProposalId)]
    #[storage_mapper("latestProposalIds")]
    fn latest_proposal_id(&self, proposer: &ManagedAddress) -> SingleValueMapper<u64>;
}
