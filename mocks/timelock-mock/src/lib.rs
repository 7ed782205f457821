#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Minimum seconds between queueing and execution
pub const DELAY: u64 = 172_800;

/// Seconds after `eta` during which a queued call stays executable
pub const GRACE_PERIOD: u64 = 1_209_600;

/// Hashed into the queue key; mirrors the governor's own layout.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct QueuedCall<M: ManagedTypeApi> {
    pub target: ManagedAddress<M>,
    pub value: BigUint<M>,
    pub signature: ManagedBuffer<M>,
    pub data: ManagedBuffer<M>,
    pub eta: u64,
}

/// Test double for the timelock gateway.
#[multiversx_sc::contract]
pub trait TimelockMock {
    #[init]
    fn init(&self, admin: ManagedAddress) {
        self.admin().set(&admin);
    }

    #[view(delay)]
    fn delay(&self) -> u64 {
        DELAY
    }

    #[view(gracePeriod)]
    fn grace_period(&self) -> u64 {
        GRACE_PERIOD
    }

    #[view(queuedTransactions)]
    fn queued_transactions(&self, tx_hash: ManagedByteArray<32>) -> bool {
        self.queued(&tx_hash).get()
    }

    #[endpoint(queueTransaction)]
    fn queue_transaction(
        &self,
        target: ManagedAddress,
        value: BigUint,
        signature: ManagedBuffer,
        data: ManagedBuffer,
        eta: u64,
    ) -> ManagedByteArray<32> {
        self.require_admin();
        require!(
            eta >= self.blockchain().get_block_timestamp() + DELAY,
            "estimated execution time must satisfy delay"
        );

        let tx_hash = self.call_hash(QueuedCall {
            target,
            value,
            signature,
            data,
            eta,
        });
        self.queued(&tx_hash).set(true);
        self.queue_count().update(|count| *count += 1);
        tx_hash
    }

    #[endpoint(cancelTransaction)]
    fn cancel_transaction(
        &self,
        target: ManagedAddress,
        value: BigUint,
        signature: ManagedBuffer,
        data: ManagedBuffer,
        eta: u64,
    ) {
        self.require_admin();
        let tx_hash = self.call_hash(QueuedCall {
            target,
            value,
            signature,
            data,
            eta,
        });
        self.queued(&tx_hash).clear();
        self.cancel_count().update(|count| *count += 1);
    }

    #[payable("EGLD")]
    #[endpoint(executeTransaction)]
    fn execute_transaction(
        &self,
        target: ManagedAddress,
        value: BigUint,
        signature: ManagedBuffer,
        data: ManagedBuffer,
        eta: u64,
    ) -> ManagedBuffer {
        self.require_admin();
        let tx_hash = self.call_hash(QueuedCall {
            target: target.clone(),
            value: value.clone(),
            signature: signature.clone(),
            data: data.clone(),
            eta,
        });
        require!(self.queued(&tx_hash).get(), "transaction hasn't been queued");
        let now = self.blockchain().get_block_timestamp();
        require!(now >= eta, "transaction hasn't surpassed time lock");
        require!(now <= eta + GRACE_PERIOD, "transaction is stale");

        self.queued(&tx_hash).clear();

        if signature.is_empty() {
            self.send().direct_egld(&target, &value);
            return ManagedBuffer::new();
        }

        let mut call = self.tx().to(&target).egld(&value).raw_call(signature);
        if !data.is_empty() {
            call = call.argument(&data);
        }
        let results = call.returns(ReturnsRawResult).sync_call();
        if results.is_empty() {
            return ManagedBuffer::new();
        }
        results.get(0).clone_value()
    }

    #[endpoint(acceptAdmin)]
    fn accept_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.pending_admin().get(),
            "call must come from pending admin"
        );
        self.admin().set(&caller);
        self.pending_admin().clear();
    }

    #[endpoint(setPendingAdmin)]
    fn set_pending_admin(&self, pending_admin: ManagedAddress) {
        require!(
            self.blockchain().get_caller() == self.blockchain().get_sc_address(),
            "call must come from timelock"
        );
        self.pending_admin().set(&pending_admin);
    }

    fn require_admin(&self) {
        require!(
            self.blockchain().get_caller() == self.admin().get(),
            "call must come from admin"
        );
    }

    /// Prepended to every encoded call before hashing. Empty by default.
    #[endpoint(setKeyPrefix)]
    fn set_key_prefix(&self, prefix: ManagedBuffer) {
        self.key_prefix().set(&prefix);
    }

    fn call_hash(&self, call: QueuedCall<Self::Api>) -> ManagedByteArray<32> {
        let mut encoded = ManagedBuffer::new();
        require!(call.top_encode(&mut encoded).is_ok(), "encoding failed");
        let mut preimage = self.key_prefix().get();
        preimage.append(&encoded);
        self.crypto().keccak256(&preimage)
    }

    #[storage_mapper("keyPrefix")]
    fn key_prefix(&self) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("queued")]
    fn queued(&self, tx_hash: &ManagedByteArray<32>) -> SingleValueMapper<bool>;

    #[view(admin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(pendingAdmin)]
    #[storage_mapper("pendingAdmin")]
    fn pending_admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(queueCount)]
    #[storage_mapper("queueCount")]
    fn queue_count(&self) -> SingleValueMapper<u64>;

    #[view(cancelCount)]
    #[storage_mapper("cancelCount")]
    fn cancel_count(&self) -> SingleValueMapper<u64>;
}
