multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal State: derived on every read, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalState {
    /// Created, voting window not yet open.
    Pending,
    /// Voting window open.
    Active,
    /// Canceled by the guardian or because the proposer lost standing. Terminal.
    Canceled,
    /// Window closed without majority or quorum. Terminal.
    Defeated,
    /// Passed, waiting to be queued in the timelock.
    Succeeded,
    /// Sitting in the timelock until `eta`.
    Queued,
    /// Not executed within the grace period after `eta`. Terminal.
    Expired,
    /// Every action executed through the timelock. Terminal.
    Executed,
}

impl ProposalState {
    /// States from which `cancel` is refused.
    pub fn blocks_cancel(self) -> bool {
        matches!(
            self,
            ProposalState::Executed | ProposalState::Canceled | ProposalState::Expired
        )
    }
}

// ============================================================
// Proposal Action: one call routed through the timelock
// ============================================================

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug,
)]
pub struct ProposalAction<M: ManagedTypeApi> {
    pub target: ManagedAddress<M>,
    pub value: BigUint<M>,
    /// Endpoint name invoked on `target`. Empty for a plain EGLD transfer.
    pub signature: ManagedBuffer<M>,
    pub data: ManagedBuffer<M>,
}

// ============================================================
// Proposal: the core governance record
// ============================================================

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug,
)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    /// Timestamp from which the timelock accepts execution (0 until queued)
    pub eta: u64,
    pub start_block: u64,
    pub end_block: u64,
    pub for_votes: BigUint<M>,
    pub against_votes: BigUint<M>,
    pub canceled: bool,
    pub executed: bool,
}

// ============================================================
// Receipt: one per (proposal, voter), written once
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Receipt<M: ManagedTypeApi> {
    pub has_voted: bool,
    pub support: bool,
    pub votes: BigUint<M>,
}

impl<M: ManagedTypeApi> Receipt<M> {
    pub fn not_voted() -> Self {
        Receipt {
            has_voted: false,
            support: false,
            votes: BigUint::zero(),
        }
    }
}

// ============================================================
// Timelock call: the content hashed into a queue key
// ============================================================

/// Field order and encoding must match the timelock's own key derivation.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct TimelockCall<M: ManagedTypeApi> {
    pub target: ManagedAddress<M>,
    pub value: BigUint<M>,
    pub signature: ManagedBuffer<M>,
    pub data: ManagedBuffer<M>,
    pub eta: u64,
}

impl<M: ManagedTypeApi> TimelockCall<M> {
    pub fn for_action(action: &ProposalAction<M>, eta: u64) -> Self {
        TimelockCall {
            target: action.target.clone(),
            value: action.value.clone(),
            signature: action.signature.clone(),
            data: action.data.clone(),
            eta,
        }
    }
}

// ============================================================
// Event payloads
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ProposalCreatedData<M: ManagedTypeApi> {
    pub actions: ManagedVec<M, ProposalAction<M>>,
    pub description: ManagedBuffer<M>,
}
