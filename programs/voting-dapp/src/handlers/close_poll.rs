use anchor_lang::prelude::*;

use crate::state::{Poll, PollClosed};

#[derive(Accounts)]
pub struct ClosePoll<'info> {
    #[account(mut)]
    pub poll: Account<'info, Poll>,

    pub creator: Signer<'info>,
}

/// Permanently stops voting on a poll.
///
/// Only the stored creator may close. The flag never flips back, so every
/// later vote on this poll fails with `PollNotActive`.
pub fn close_poll(ctx: Context<ClosePoll>) -> Result<()> {
    let creator = ctx.accounts.creator.key();
    let poll = &mut ctx.accounts.poll;

    Poll::close(poll, &creator)?;

    let clock = Clock::get()?;

    msg!("Poll id {} has been closed", poll.id);

    emit!(PollClosed {
        poll: poll.key(),
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
