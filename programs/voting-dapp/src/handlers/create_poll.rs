use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_DESCRIPTION_LEN, SEED_POLL},
    errors::ErrorCode,
    state::{Poll, PollCreated},
};

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct CreatePoll<'info> {
    #[account(
        init,
        payer = creator,
        space = 8 + Poll::INIT_SPACE,
        seeds = [SEED_POLL, poll_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub poll: Account<'info, Poll>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Opens a new yes/no poll under a caller-chosen id.
///
/// The poll account lives at a PDA derived from the id alone, so an id can only
/// ever be claimed once; a second `create_poll` with the same id fails when the
/// runtime refuses to allocate over the existing account.
///
/// # Arguments
/// * `poll_id` - Unique identifier for this poll
/// * `description` - The question voters will respond to, at most
///   [`MAX_DESCRIPTION_LEN`] bytes
pub fn create_poll(ctx: Context<CreatePoll>, poll_id: u64, description: String) -> Result<()> {
    require!(
        description.len() <= MAX_DESCRIPTION_LEN,
        ErrorCode::DescriptionTooLong
    );

    let clock = Clock::get()?;
    let poll = &mut ctx.accounts.poll;

    poll.id = poll_id;
    poll.description = description;
    poll.creator = ctx.accounts.creator.key();
    poll.yes_votes = 0;
    poll.no_votes = 0;
    poll.created_at = clock.unix_timestamp;
    poll.is_active = true;
    poll.bump = ctx.bumps.poll;

    msg!("Poll created with id {}", poll_id);

    emit!(PollCreated {
        poll: poll.key(),
        id: poll_id,
        creator: poll.creator,
        timestamp: poll.created_at,
    });

    Ok(())
}
