//! Instruction handlers for the airdrop staking pool.

pub mod admin;
pub mod claim;
pub mod initialize_pool;
pub mod preview_rewards;
pub mod record_snapshot;
pub mod withdraw;

pub use admin::*;
pub use claim::*;
pub use initialize_pool::*;
pub use preview_rewards::*;
pub use record_snapshot::*;
pub use withdraw::*;
