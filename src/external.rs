multiversx_sc::imports!();

use crate::{errors::ERR_QUEUE_KEY_MISMATCH, timelock_proxy, types::TimelockCall, voting_power_proxy};

/// Synchronous calls into the voting-power oracle and the timelock.
/// A failing call halts the whole transaction, so callers never observe a
/// partial result.
#[multiversx_sc::module]
pub trait ExternalModule: crate::config::ConfigModule {
    // ── Voting-power oracle ──

    fn prior_votes(&self, account: &ManagedAddress, block_nonce: u64) -> BigUint {
        let oracle = self.voting_power_address().get();
        self.tx()
            .to(&oracle)
            .typed(voting_power_proxy::VotingPowerProxy)
            .get_prior_votes(account.clone(), block_nonce)
            .returns(ReturnsResult)
            .sync_call()
    }

    // ── Timelock ──

    fn timelock_delay(&self) -> u64 {
        let timelock = self.timelock_address().get();
        self.tx()
            .to(&timelock)
            .typed(timelock_proxy::TimelockProxy)
            .delay()
            .returns(ReturnsResult)
            .sync_call()
    }

    fn timelock_grace_period(&self) -> u64 {
        let timelock = self.timelock_address().get();
        self.tx()
            .to(&timelock)
            .typed(timelock_proxy::TimelockProxy)
            .grace_period()
            .returns(ReturnsResult)
            .sync_call()
    }

    fn is_queued_in_timelock(&self, call: &TimelockCall<Self::Api>) -> bool {
        let call_hash = self.timelock_call_hash(call);
        let timelock = self.timelock_address().get();
        self.tx()
            .to(&timelock)
            .typed(timelock_proxy::TimelockProxy)
            .queued_transactions(call_hash)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Queue key: keccak256 over the top-encoded call.
    fn timelock_call_hash(&self, call: &TimelockCall<Self::Api>) -> ManagedByteArray<Self::Api, 32> {
        let mut encoded = ManagedBuffer::new();
        require!(
            call.top_encode(&mut encoded).is_ok(),
            "timelock call encoding failed"
        );
        self.crypto().keccak256(&encoded)
    }

    /// Fails if the timelock keys the call differently from `timelock_call_hash`.
    fn timelock_queue(&self, call: TimelockCall<Self::Api>) {
        let expected_key = self.timelock_call_hash(&call);
        let timelock = self.timelock_address().get();
        let queued_key: ManagedByteArray<Self::Api, 32> = self
            .tx()
            .to(&timelock)
            .typed(timelock_proxy::TimelockProxy)
            .queue_transaction(call.target, call.value, call.signature, call.data, call.eta)
            .returns(ReturnsResult)
            .sync_call();
        require!(queued_key == expected_key, ERR_QUEUE_KEY_MISMATCH);
    }

    fn timelock_cancel(&self, call: TimelockCall<Self::Api>) {
        let timelock = self.timelock_address().get();
        self.tx()
            .to(&timelock)
            .typed(timelock_proxy::TimelockProxy)
            .cancel_transaction(call.target, call.value, call.signature, call.data, call.eta)
            .sync_call();
    }

    /// Forwards `call.value` EGLD from this contract's balance.
    fn timelock_execute(&self, call: TimelockCall<Self::Api>) -> ManagedBuffer {
        let timelock = self.timelock_address().get();
        let value = call.value.clone();
        self.tx()
            .to(&timelock)
            .typed(timelock_proxy::TimelockProxy)
            .execute_transaction(call.target, call.value, call.signature, call.data, call.eta)
            .egld(value)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn timelock_accept_admin(&self) {
        let timelock = self.timelock_address().get();
        self.tx()
            .to(&timelock)
            .typed(timelock_proxy::TimelockProxy)
            .accept_admin()
            .sync_call();
    }
}
