multiversx_sc::imports!();

// ============================================================
// Constants
// ============================================================

/// Voting window length in blocks (~3 days at 15s blocks)
pub const VOTING_PERIOD: u64 = 17_280;

/// Maximum number of actions in a single proposal
pub const MAX_OPERATIONS: usize = 10;

#[multiversx_sc::module]
pub trait ConfigModule {
    // ========================================================
    // VIEWS: configuration
    // ========================================================

    #[view(votingPeriod)]
    fn voting_period(&self) -> u64 {
        VOTING_PERIOD
    }

    #[view(proposalMaxOperations)]
    fn proposal_max_operations(&self) -> usize {
        MAX_OPERATIONS
    }

    #[view(isExecutorAuthorized)]
    fn is_executor_authorized(&self, executor: ManagedAddress) -> bool {
        self.authorized_executors().contains(&executor)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Collaborators ──

    #[view(timelockAddress)]
    #[storage_mapper("timelockAddress")]
    fn timelock_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(votingPowerAddress)]
    #[storage_mapper("votingPowerAddress")]
    fn voting_power_address(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Governance parameters ──

    #[view(quorumVotes)]
    #[storage_mapper("quorumVotes")]
    fn quorum_votes(&self) -> SingleValueMapper<BigUint>;

    #[view(proposalThreshold)]
    #[storage_mapper("proposalThreshold")]
    fn proposal_threshold(&self) -> SingleValueMapper<BigUint>;

    #[view(votingDelay)]
    #[storage_mapper("votingDelay")]
    fn voting_delay(&self) -> SingleValueMapper<u64>;

    /// Network identity bound into signed ballots
    #[view(chainId)]
    #[storage_mapper("chainId")]
    fn chain_id(&self) -> SingleValueMapper<ManagedBuffer>;

    // ── Roles ──

    /// Zero address once the guardian has abdicated
    #[view(guardian)]
    #[storage_mapper("guardian")]
    fn guardian(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("authorizedExecutors")]
    fn authorized_executors(&self) -> UnorderedSetMapper<ManagedAddress>;
}
