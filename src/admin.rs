multiversx_sc::imports!();

use crate::{errors::*, types::TimelockCall};

/// Timelock endpoint that nominates its next admin.
pub const SET_PENDING_ADMIN_ENDPOINT: &[u8] = b"setPendingAdmin";

/// Owner and guardian controls. None of these are consulted by the
/// proposal state machine itself.
#[multiversx_sc::module]
pub trait AdminModule:
    crate::config::ConfigModule + crate::events::EventsModule + crate::external::ExternalModule
{
    // ========================================================
    // OWNER
    // ========================================================

    /// Applies to proposals created after this call.
    #[only_owner]
    #[endpoint(setVotingDelay)]
    fn set_voting_delay(&self, new_voting_delay: u64) {
        let old_voting_delay = self.voting_delay().replace(new_voting_delay);
        self.voting_delay_set_event(old_voting_delay, new_voting_delay);
    }

    #[only_owner]
    #[endpoint(authorizeExecutors)]
    fn authorize_executors(&self, executors: MultiValueEncoded<ManagedAddress>) {
        for executor in executors {
            if self.authorized_executors().insert(executor.clone()) {
                self.executor_authorized_event(&executor);
            }
        }
    }

    #[only_owner]
    #[endpoint(unauthorizeExecutors)]
    fn unauthorize_executors(&self, executors: MultiValueEncoded<ManagedAddress>) {
        for executor in executors {
            if self.authorized_executors().swap_remove(&executor) {
                self.executor_unauthorized_event(&executor);
            }
        }
    }

    // ========================================================
    // GUARDIAN
    // ========================================================

    /// One-way: there is no way to appoint a new guardian afterwards.
    #[endpoint(abdicate)]
    fn abdicate(&self) {
        let previous_guardian = self.require_guardian();
        self.guardian().set(ManagedAddress::zero());
        self.guardian_abdicated_event(&previous_guardian);
    }

    #[endpoint(acceptTimelockAdmin)]
    fn accept_timelock_admin(&self) {
        self.require_guardian();
        self.timelock_accept_admin();
    }

    #[endpoint(queueSetTimelockPendingAdmin)]
    fn queue_set_timelock_pending_admin(&self, new_pending_admin: ManagedAddress, eta: u64) {
        self.require_guardian();
        let call = self.set_pending_admin_call(new_pending_admin, eta);
        self.timelock_queue(call);
    }

    #[endpoint(executeSetTimelockPendingAdmin)]
    fn execute_set_timelock_pending_admin(&self, new_pending_admin: ManagedAddress, eta: u64) {
        self.require_guardian();
        let call = self.set_pending_admin_call(new_pending_admin, eta);
        self.timelock_execute(call);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_guardian(&self) -> ManagedAddress {
        let guardian = self.guardian().get();
        require!(
            !guardian.is_zero() && self.blockchain().get_caller() == guardian,
            ERR_NOT_GUARDIAN
        );
        guardian
    }

    fn set_pending_admin_call(
        &self,
        new_pending_admin: ManagedAddress,
        eta: u64,
    ) -> TimelockCall<Self::Api> {
        TimelockCall {
            target: self.timelock_address().get(),
            value: BigUint::zero(),
            signature: ManagedBuffer::new_from_bytes(SET_PENDING_ADMIN_ENDPOINT),
            data: new_pending_admin.as_managed_buffer().clone(),
            eta,
        }
    }
}
