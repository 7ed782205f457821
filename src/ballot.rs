multiversx_sc::imports!();

use crate::errors::*;

// ============================================================
// Ballot digest scheme, version 1
//
// domainSeparator = keccak256(
//     keccak256(DOMAIN_TYPE) ++ keccak256(CONTRACT_NAME)
//     ++ keccak256(BALLOT_DIGEST_VERSION) ++ keccak256(chainId)
//     ++ contractAddress)
// structHash      = keccak256(
//     keccak256(BALLOT_TYPE) ++ proposalId (8 bytes, BE) ++ support (1 byte))
// digest          = keccak256(DIGEST_PREFIX ++ domainSeparator ++ structHash)
// ============================================================

pub const CONTRACT_NAME: &[u8] = b"TimelockGovernor";
pub const BALLOT_DIGEST_VERSION: &[u8] = b"1";
pub const DOMAIN_TYPE: &[u8] =
    b"Domain(string name,string version,string chainId,address verifyingContract)";
pub const BALLOT_TYPE: &[u8] = b"Ballot(uint64 proposalId,bool support)";
pub const DIGEST_PREFIX: &[u8] = b"\x19\x01";

/// Ed25519 signature length
pub const SIGNATURE_LEN: usize = 64;

#[multiversx_sc::module]
pub trait BallotModule:
    crate::config::ConfigModule
    + crate::events::EventsModule
    + crate::external::ExternalModule
    + crate::proposals::ProposalsModule
    + crate::voting::VotingModule
{
    // ========================================================
    // ENDPOINT: castVoteBySig
    // Anyone may relay; the signer is the one credited.
    // ========================================================

    #[endpoint(castVoteBySig)]
    fn cast_vote_by_sig(
        &self,
        proposal_id: u64,
        support: bool,
        signer: ManagedAddress,
        signature: ManagedBuffer,
    ) {
        require!(!signer.is_zero(), ERR_INVALID_SIGNATURE);
        require!(signature.len() == SIGNATURE_LEN, ERR_INVALID_SIGNATURE);

        let digest = self.ballot_digest(proposal_id, support);
        // Halts with "invalid signature" unless `signer` produced it
        self.crypto().verify_ed25519(
            signer.as_managed_buffer(),
            digest.as_managed_buffer(),
            &signature,
        );

        self.record_vote(&signer, proposal_id, support);
    }

    // ========================================================
    // VIEWS: digest construction, reproducible off-chain
    // ========================================================

    #[view(getDomainSeparator)]
    fn domain_separator(&self) -> ManagedByteArray<32> {
        let mut preimage = ManagedBuffer::new();
        preimage.append(self.keccak_bytes(DOMAIN_TYPE).as_managed_buffer());
        preimage.append(self.keccak_bytes(CONTRACT_NAME).as_managed_buffer());
        preimage.append(self.keccak_bytes(BALLOT_DIGEST_VERSION).as_managed_buffer());
        preimage.append(self.crypto().keccak256(&self.chain_id().get()).as_managed_buffer());
        preimage.append(self.blockchain().get_sc_address().as_managed_buffer());
        self.crypto().keccak256(&preimage)
    }

    #[view(getBallotDigest)]
    fn ballot_digest(&self, proposal_id: u64, support: bool) -> ManagedByteArray<32> {
        let mut struct_preimage = ManagedBuffer::new();
        struct_preimage.append(self.keccak_bytes(BALLOT_TYPE).as_managed_buffer());
        struct_preimage.append_bytes(&proposal_id.to_be_bytes());
        struct_preimage.append_bytes(&[u8::from(support)]);
        let struct_hash = self.crypto().keccak256(&struct_preimage);

        let mut digest_preimage = ManagedBuffer::new_from_bytes(DIGEST_PREFIX);
        digest_preimage.append(self.domain_separator().as_managed_buffer());
        digest_preimage.append(struct_hash.as_managed_buffer());
        self.crypto().keccak256(&digest_preimage)
    }

    fn keccak_bytes(&self, bytes: &[u8]) -> ManagedByteArray<32> {
        self.crypto().keccak256(&ManagedBuffer::new_from_bytes(bytes))
    }
}
