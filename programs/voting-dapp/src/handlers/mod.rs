pub mod create_poll;
pub use create_poll::*;

pub mod vote;
pub use vote::*;

pub mod close_poll;
pub use close_poll::*;
