#![no_std]

multiversx_sc::imports!();

/// Action target used to exercise the governor: `ping` is a benign call,
/// `reenterExecute` calls back into the governor's `execute`.
#[multiversx_sc::contract]
pub trait ReentrantTargetMock {
    #[init]
    fn init(&self, governor: ManagedAddress) {
        self.governor().set(&governor);
    }

    #[payable("EGLD")]
    #[endpoint(ping)]
    fn ping(&self) {
        self.ping_count().update(|count| *count += 1);
    }

    #[endpoint(reenterExecute)]
    fn reenter_execute(&self, proposal_id: u64) {
        let governor = self.governor().get();
        self.tx()
            .to(&governor)
            .raw_call("execute")
            .argument(&proposal_id)
            .sync_call();
    }

    #[view(getGovernor)]
    #[storage_mapper("governor")]
    fn governor(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(pingCount)]
    #[storage_mapper("pingCount")]
    fn ping_count(&self) -> SingleValueMapper<u64>;
}
