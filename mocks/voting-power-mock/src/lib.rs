#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Weight an account holds from `from_block` onwards.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Checkpoint<M: ManagedTypeApi> {
    pub from_block: u64,
    pub votes: BigUint<M>,
}

/// Test double for the voting-power oracle: checkpointed weights per
/// account, queried strictly in the past.
#[multiversx_sc::contract]
pub trait VotingPowerMock {
    #[init]
    fn init(&self) {}

    /// Checkpoints must be pushed in increasing `from_block` order.
    #[endpoint(setVotes)]
    fn set_votes(&self, account: ManagedAddress, from_block: u64, votes: BigUint) {
        self.checkpoints(&account).push(&Checkpoint { from_block, votes });
    }

    #[view(getPriorVotes)]
    fn get_prior_votes(&self, account: ManagedAddress, block_nonce: u64) -> BigUint {
        require!(
            block_nonce < self.blockchain().get_block_nonce(),
            "not yet determined"
        );

        let mut votes = BigUint::zero();
        for checkpoint in self.checkpoints(&account).iter() {
            if checkpoint.from_block > block_nonce {
                break;
            }
            votes = checkpoint.votes;
        }
        votes
    }

    #[storage_mapper("checkpoints")]
    fn checkpoints(&self, account: &ManagedAddress) -> VecMapper<Checkpoint<Self::Api>>;
}
