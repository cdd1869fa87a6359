pub mod events;
pub mod poll;
pub mod vote_receipt;

pub use events::*;
pub use poll::*;
pub use vote_receipt::*;
