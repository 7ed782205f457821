// ============================================================
// Error messages: every rejection aborts the whole transaction
// ============================================================

// ── Validation ──

pub const ERR_MALFORMED_ACTION_SET: &str =
    "proposal function information arity mismatch";
pub const ERR_EMPTY_ACTION_SET: &str = "must provide actions";
pub const ERR_TOO_MANY_ACTIONS: &str = "too many actions";
pub const ERR_INVALID_PROPOSAL_ID: &str = "invalid proposal id";
pub const ERR_INVALID_SIGNATURE: &str = "invalid signature";
pub const ERR_INVALID_CONFIG: &str = "invalid configuration";
pub const ERR_SCHEDULE_OVERFLOW: &str = "schedule overflows";

// ── Authorization ──

pub const ERR_THRESHOLD_NOT_MET: &str = "proposer votes below proposal threshold";
pub const ERR_PROPOSER_ABOVE_THRESHOLD: &str = "proposer above threshold";
pub const ERR_NOT_GUARDIAN: &str = "sender must be gov guardian";

// ── State conflict ──

pub const ERR_LIVE_PROPOSAL_ACTIVE: &str =
    "one live proposal per proposer, found an already active proposal";
pub const ERR_LIVE_PROPOSAL_PENDING: &str =
    "one live proposal per proposer, found an already pending proposal";
pub const ERR_VOTING_CLOSED: &str = "voting is closed";
pub const ERR_ALREADY_VOTED: &str = "voter already voted";
pub const ERR_NOT_SUCCEEDED: &str = "proposal can only be queued if it is succeeded";
pub const ERR_DUPLICATE_QUEUED_ACTION: &str =
    "proposal action already queued at eta";
pub const ERR_QUEUE_KEY_MISMATCH: &str = "timelock returned an unexpected queue key";
pub const ERR_NOT_QUEUED: &str = "proposal can only be executed if it is queued";
pub const ERR_CANNOT_CANCEL_TERMINAL: &str = "cannot cancel finished proposal";
