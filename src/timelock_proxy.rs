use multiversx_sc::proxy_imports::*;

pub struct TimelockProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for TimelockProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = TimelockProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        TimelockProxyMethods { wrapped_tx: tx }
    }
}

pub struct TimelockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> TimelockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn delay(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("delay")
            .original_result()
    }

    pub fn grace_period(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("gracePeriod")
            .original_result()
    }

    pub fn queued_transactions<Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>>(
        self,
        tx_hash: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("queuedTransactions")
            .argument(&tx_hash)
            .original_result()
    }

    pub fn queue_transaction<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg4: ProxyArg<u64>,
    >(
        self,
        target: Arg0,
        value: Arg1,
        signature: Arg2,
        data: Arg3,
        eta: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedByteArray<Env::Api, 32>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("queueTransaction")
            .argument(&target)
            .argument(&value)
            .argument(&signature)
            .argument(&data)
            .argument(&eta)
            .original_result()
    }

    pub fn cancel_transaction<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg4: ProxyArg<u64>,
    >(
        self,
        target: Arg0,
        value: Arg1,
        signature: Arg2,
        data: Arg3,
        eta: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("cancelTransaction")
            .argument(&target)
            .argument(&value)
            .argument(&signature)
            .argument(&data)
            .argument(&eta)
            .original_result()
    }

    /// Payable: the attached EGLD is forwarded to `target`.
    pub fn execute_transaction<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg4: ProxyArg<u64>,
    >(
        self,
        target: Arg0,
        value: Arg1,
        signature: Arg2,
        data: Arg3,
        eta: Arg4,
    ) -> TxTypedCall<Env, From, To, (), Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .raw_call("executeTransaction")
            .argument(&target)
            .argument(&value)
            .argument(&signature)
            .argument(&data)
            .argument(&eta)
            .original_result()
    }

    pub fn accept_admin(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("acceptAdmin")
            .original_result()
    }
}
