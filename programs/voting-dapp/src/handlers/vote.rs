use anchor_lang::prelude::*;

use crate::{
    constants::SEED_VOTE,
    state::{Poll, VoteCast, VoteReceipt},
};

#[derive(Accounts)]
pub struct Vote<'info> {
    #[account(mut)]
    pub poll: Account<'info, Poll>,

    #[account(
        init,
        payer = voter,
        space = 8 + VoteReceipt::INIT_SPACE,
        seeds = [SEED_VOTE, poll.key().as_ref(), voter.key().as_ref()],
        bump,
    )]
    pub vote_receipt: Account<'info, VoteReceipt>,

    #[account(mut)]
    pub voter: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Casts a yes/no vote on an active poll.
///
/// The receipt PDA is derived from the poll and the voter, so each wallet gets
/// exactly one vote per poll: a second attempt collides with the existing
/// receipt and the runtime rejects the allocation. The receipt and the tally
/// update land in the same transaction, so they commit or fail together.
///
/// # Arguments
/// * `option` - true for yes, false for no
pub fn vote(ctx: Context<Vote>, option: bool) -> Result<()> {
    let poll = &mut ctx.accounts.poll;

    poll.record_vote(option)?;

    let receipt = &mut ctx.accounts.vote_receipt;
    receipt.poll = poll.key();
    receipt.voter = ctx.accounts.voter.key();
    receipt.option = option;
    receipt.bump = ctx.bumps.vote_receipt;

    let clock = Clock::get()?;

    msg!("Vote cast: {} for poll id {}", option, poll.id);

    emit!(VoteCast {
        poll: poll.key(),
        voter: receipt.voter,
        option,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
