pub const SEED_POLL: &[u8] = b"poll";
pub const SEED_VOTE: &[u8] = b"vote";

/// Upper bound on a poll description, in bytes. The poll account is sized for
/// exactly this much, so longer descriptions are rejected up front.
pub const MAX_DESCRIPTION_LEN: usize = 200;
