use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Poll is not active")]
    PollNotActive,
    #[msg("Only the poll creator can close the poll")]
    Unauthorized,
    #[msg("Poll description exceeds the maximum length")]
    DescriptionTooLong,
    #[msg("Vote counter overflow")]
    Overflow,
}
