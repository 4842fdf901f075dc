//! State account definitions for the airdrop staking pool.

pub mod claim_receipt;
pub mod pool_state;
pub mod stake_position;

pub use claim_receipt::ClaimReceipt;
pub use pool_state::PoolState;
pub use stake_position::StakePosition;
