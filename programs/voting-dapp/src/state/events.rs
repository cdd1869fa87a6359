use anchor_lang::prelude::*;

#[event]
pub struct PollCreated {
    pub poll: Pubkey,
    pub id: u64,
    pub creator: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct VoteCast {
    pub poll: Pubkey,
    pub voter: Pubkey,
    /// true = yes, false = no
    pub option: bool,
    pub timestamp: i64,
}

#[event]
pub struct PollClosed {
    pub poll: Pubkey,
    pub timestamp: i64,
}
