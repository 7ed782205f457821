#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod ballot;
pub mod config;
pub mod errors;
pub mod events;
pub mod external;
pub mod orchestrator;
pub mod proposals;
pub mod state;
pub mod timelock_proxy;
pub mod types;
pub mod voting;
pub mod voting_power_proxy;

use errors::ERR_INVALID_CONFIG;

// ============================================================
// Contract
//
// Stakeholders propose batches of calls, vote with historical weight
// read from the voting-power oracle, and route passed proposals through
// the timelock: Pending → Active → Succeeded → Queued → Executed, with
// Defeated, Canceled and Expired as the other terminal states.
// ============================================================

#[multiversx_sc::contract]
pub trait TimelockGovernor:
    config::ConfigModule
    + events::EventsModule
    + external::ExternalModule
    + proposals::ProposalsModule
    + voting::VotingModule
    + ballot::BallotModule
    + orchestrator::OrchestratorModule
    + admin::AdminModule
{
    #[init]
    fn init(
        &self,
        timelock_address: ManagedAddress,
        voting_power_address: ManagedAddress,
        guardian: ManagedAddress,
        quorum_votes: BigUint,
        proposal_threshold: BigUint,
        voting_delay: u64,
        chain_id: ManagedBuffer,
    ) {
        require!(
            !timelock_address.is_zero() && !voting_power_address.is_zero(),
            ERR_INVALID_CONFIG
        );
        require!(!chain_id.is_empty(), ERR_INVALID_CONFIG);

        self.timelock_address().set(&timelock_address);
        self.voting_power_address().set(&voting_power_address);
        self.guardian().set(&guardian);
        self.quorum_votes().set(&quorum_votes);
        self.proposal_threshold().set(&proposal_threshold);
        self.voting_delay().set(voting_delay);
        self.chain_id().set(&chain_id);
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
