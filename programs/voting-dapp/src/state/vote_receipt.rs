use anchor_lang::prelude::*;

/// Proof that one wallet voted once on one poll.
///
/// The receipt lives at a PDA derived from the (poll, voter) pair, so its mere
/// existence is the double-vote guard. Never mutated after creation.
#[account]
#[derive(InitSpace)]
pub struct VoteReceipt {
    /// The poll this receipt belongs to.
    pub poll: Pubkey,
    /// The wallet that cast the vote.
    pub voter: Pubkey,
    /// true = yes, false = no
    pub option: bool,
    /// PDA bump seed
    pub bump: u8,
}
