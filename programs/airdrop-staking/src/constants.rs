//! Program-wide constants shared with the off-chain allocation tooling.
//!
//! The budget and decimal constants must match the values the allowlist
//! builder used when encoding leaf amounts; a mismatch silently breaks the
//! reward-sum validation at `initialize_pool`.

/// Number of reward epochs (N). Snapshots and the reward curve are sized to
/// exactly this many entries.
pub const TOTAL_EPOCHS: usize = 20;

/// Length of one accounting epoch in seconds (one day).
pub const EPOCH_SECONDS: i64 = 86_400;

/// Claims are accepted while `now < start_time + CLAIM_WINDOW_EPOCHS` epochs.
pub const CLAIM_WINDOW_EPOCHS: i64 = 20;

/// Extra epochs after the reward program during which positions may still
/// withdraw with rewards. Past this, rewards are forfeited and residual funds
/// become recoverable.
pub const EXIT_WINDOW_EPOCHS: i64 = 15;

/// Fixed-point scale shared with the allocation builder.
pub const TOKEN_DECIMALS: u8 = 9;

/// Airdrop allocation: 50_000_000 tokens at 10^9 scale.
pub const AIRDROP_BUDGET: u64 = 50_000_000_000_000_000;

/// Staking reward budget: 100_000_000 tokens at 10^9 scale.
/// `daily_rewards` supplied at initialization must sum to exactly this.
pub const STAKING_BUDGET: u64 = 100_000_000_000_000_000;

/// PDA seed prefixes.
pub mod seeds {
    pub const POOL: &[u8] = b"pool";
    pub const VAULT: &[u8] = b"vault";
    pub const POSITION: &[u8] = b"position";
    pub const RECEIPT: &[u8] = b"receipt";
}
