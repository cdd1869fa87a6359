use anchor_lang::prelude::*;

use crate::{constants::MAX_DESCRIPTION_LEN, errors::ErrorCode};

/// A single yes/no poll.
///
/// Tallies only move through [`Poll::record_vote`] while the poll is active.
/// Once closed the account is terminal and is never mutated again.
#[account]
#[derive(InitSpace)]
pub struct Poll {
    /// Caller-chosen identifier, immutable after creation.
    pub id: u64,
    /// The question voters respond to.
    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,
    /// Only this key may close the poll.
    pub creator: Pubkey,
    pub yes_votes: u64,
    pub no_votes: u64,
    /// Unix timestamp at creation.
    pub created_at: i64,
    pub is_active: bool,
    /// PDA bump seed
    pub bump: u8,
}

impl Poll {
    /// Adds one vote to the matching tally. Fails once the poll is closed.
    pub fn record_vote(&mut self, option: bool) -> Result<()> {
        require!(self.is_active, ErrorCode::PollNotActive);

        if option {
            self.yes_votes = self.yes_votes.checked_add(1).ok_or(ErrorCode::Overflow)?;
        } else {
            self.no_votes = self.no_votes.checked_add(1).ok_or(ErrorCode::Overflow)?;
        }

        Ok(())
    }

    /// Flips the poll to its terminal state. Creator-only, one-way.
    pub fn close(&mut self, caller: &Pubkey) -> Result<()> {
        require!(self.creator == *caller, ErrorCode::Unauthorized);
        require!(self.is_active, ErrorCode::PollNotActive);

        self.is_active = false;

        Ok(())
    }
}
