// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod handlers;
pub mod state;

pub use constants::*;
pub use errors::ErrorCode;
pub use handlers::*;
pub use state::*;

declare_id!("AqVFH6Vq5whfoYGWKtViGpd2oHCNCHi4nc7F8RDNFHxx");

#[program]
pub mod voting_dapp {
    use super::*;

    pub fn create_poll(
        ctx: Context<CreatePoll>,
        poll_id: u64,
        description: String,
    ) -> Result<()> {
        handlers::create_poll::create_poll(ctx, poll_id, description)
    }

    pub fn vote(ctx: Context<Vote>, option: bool) -> Result<()> {
        handlers::vote::vote(ctx, option)
    }

    pub fn close_poll(ctx: Context<ClosePoll>) -> Result<()> {
        handlers::close_poll::close_poll(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll_pda(poll_id: u64) -> Pubkey {
        Pubkey::find_program_address(&[SEED_POLL, poll_id.to_le_bytes().as_ref()], &ID).0
    }

    fn vote_pda(poll: &Pubkey, voter: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(&[SEED_VOTE, poll.as_ref(), voter.as_ref()], &ID).0
    }

    #[test]
    fn poll_address_is_deterministic() {
        assert_eq!(poll_pda(1), poll_pda(1));
        assert_eq!(poll_pda(u64::MAX), poll_pda(u64::MAX));
    }

    #[test]
    fn distinct_poll_ids_get_distinct_addresses() {
        assert_ne!(poll_pda(1), poll_pda(2));
        assert_ne!(poll_pda(0), poll_pda(u64::MAX));
    }

    #[test]
    fn vote_address_binds_poll_and_voter() {
        let poll_a = poll_pda(1);
        let poll_b = poll_pda(2);
        let voter_a = Pubkey::new_unique();
        let voter_b = Pubkey::new_unique();

        // Same pair always lands on the same receipt address.
        assert_eq!(vote_pda(&poll_a, &voter_a), vote_pda(&poll_a, &voter_a));

        // Changing either component moves the address.
        assert_ne!(vote_pda(&poll_a, &voter_a), vote_pda(&poll_a, &voter_b));
        assert_ne!(vote_pda(&poll_a, &voter_a), vote_pda(&poll_b, &voter_a));
    }

    #[test]
    fn account_layouts_are_stable() {
        // discriminator-relative sizes: id + (len prefix + description) + creator
        // + yes_votes + no_votes + created_at + is_active + bump
        assert_eq!(Poll::INIT_SPACE, 8 + 4 + MAX_DESCRIPTION_LEN + 32 + 8 + 8 + 8 + 1 + 1);
        // poll + voter + option + bump
        assert_eq!(VoteReceipt::INIT_SPACE, 32 + 32 + 1 + 1);
    }
}
