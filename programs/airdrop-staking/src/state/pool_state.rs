//! Pool ledger state account.
//!
//! One record per token mint, holding the allocation commitment, cumulative
//! counters and the per-epoch reward/snapshot arrays. All mutation flows
//! through the instruction handlers; nothing writes these fields directly.

use anchor_lang::prelude::*;

use crate::constants::{STAKING_BUDGET, TOTAL_EPOCHS};
use crate::error::AirdropError;

/// Main pool ledger account.
///
/// PDA Seeds: `[b"pool", token_mint.key().as_ref()]`
#[account]
#[derive(Default)]
pub struct PoolState {
    /// Pool authority (admin) - can pause, backfill, terminate, recover, close
    pub authority: Pubkey,

    /// SPL token mint this pool distributes
    pub token_mint: Pubkey,

    /// Treasury vault PDA address (cached for convenience)
    pub vault: Pubkey,

    /// Root of the allocation commitment tree (immutable after init)
    pub commitment_root: [u8; 32],

    /// Program start; epoch 0 begins here
    pub start_time: i64,

    /// Sum of all currently staked positions
    pub total_staked: u64,

    /// Cumulative airdrop amount claimed, never exceeds AIRDROP_BUDGET
    pub total_claimed: u64,

    /// Number of epochs recorded so far. Snapshots are recorded strictly in
    /// order, so epochs `0..epoch_count` are exactly the recorded ones; a
    /// zero inside that range is a legitimately empty epoch.
    pub epoch_count: u8,

    /// Paused flag - blocks claims, snapshots and backfills; never withdrawals
    pub is_paused: bool,

    /// Terminated flag - permanent, set by terminate_pool
    pub is_terminated: bool,

    /// PDA bump seed
    pub bump: u8,

    /// Per-epoch reward budget, fixed at initialization
    pub daily_rewards: [u64; TOTAL_EPOCHS],

    /// Per-epoch frozen total-staked value, written once per epoch
    pub daily_snapshots: [u64; TOTAL_EPOCHS],

    /// Reserved space for future upgrades
    pub _reserved: [u8; 32],
}

impl PoolState {
    /// Account space calculation
    pub const LEN: usize = 8 // discriminator
        + 32 // authority
        + 32 // token_mint
        + 32 // vault
        + 32 // commitment_root
        + 8  // start_time
        + 8  // total_staked
        + 8  // total_claimed
        + 1  // epoch_count
        + 1  // is_paused
        + 1  // is_terminated
        + 1  // bump
        + 8 * TOTAL_EPOCHS // daily_rewards
        + 8 * TOTAL_EPOCHS // daily_snapshots
        + 32; // reserved

    /// Validate the reward-curve invariants: exact staking-budget sum and
    /// element-wise non-decreasing. The curve itself is produced off-chain;
    /// only these two properties matter here.
    pub fn validate_reward_curve(daily_rewards: &[u64; TOTAL_EPOCHS]) -> Result<()> {
        let mut sum: u64 = 0;
        for d in 0..TOTAL_EPOCHS {
            sum = sum
                .checked_add(daily_rewards[d])
                .ok_or(AirdropError::ArithmeticOverflow)?;
            if d > 0 {
                require!(
                    daily_rewards[d] >= daily_rewards[d - 1],
                    AirdropError::RewardCurveDecreasing
                );
            }
        }
        require!(sum == STAKING_BUDGET, AirdropError::RewardSumMismatch);
        Ok(())
    }

    /// Initialize pool ledger fields
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        token_mint: Pubkey,
        vault: Pubkey,
        commitment_root: [u8; 32],
        start_time: i64,
        daily_rewards: [u64; TOTAL_EPOCHS],
        bump: u8,
    ) {
        self.authority = authority;
        self.token_mint = token_mint;
        self.vault = vault;
        self.commitment_root = commitment_root;
        self.start_time = start_time;
        self.total_staked = 0;
        self.total_claimed = 0;
        self.epoch_count = 0;
        self.is_paused = false;
        self.is_terminated = false;
        self.bump = bump;
        self.daily_rewards = daily_rewards;
        self.daily_snapshots = [0; TOTAL_EPOCHS];
        self._reserved = [0u8; 32];
    }

    /// Check the pool is not paused
    pub fn require_not_paused(&self) -> Result<()> {
        require!(!self.is_paused, AirdropError::PoolPaused);
        Ok(())
    }

    /// Check the pool is not terminated
    pub fn require_not_terminated(&self) -> Result<()> {
        require!(!self.is_terminated, AirdropError::PoolTerminated);
        Ok(())
    }

    /// Claims and withdrawals at epoch `d >= 1` require epoch `d - 1` to be
    /// recorded already, so positions never run ahead of the accounting.
    pub fn require_snapshots_current(&self, current_epoch: u64) -> Result<()> {
        if current_epoch >= 1 {
            require!(
                self.epoch_count as u64 >= current_epoch,
                AirdropError::SnapshotRequiredFirst
            );
        }
        Ok(())
    }

    /// Record every fully elapsed but unrecorded epoch at the current
    /// `total_staked` value. `total_staked` did not change during epochs in
    /// which nobody acted, so a single late call fills forward correctly.
    ///
    /// Returns `(first_epoch_recorded, count_recorded)`.
    pub fn record_snapshots(&mut self, current_epoch: u64) -> Result<(u8, u8)> {
        require!(current_epoch >= 1, AirdropError::SnapshotTooEarly);
        require!(
            (self.epoch_count as u64) < current_epoch,
            AirdropError::SnapshotAlreadyRecorded
        );

        let from = self.epoch_count;
        while (self.epoch_count as u64) < current_epoch {
            self.daily_snapshots[self.epoch_count as usize] = self.total_staked;
            self.epoch_count += 1;
        }
        Ok((from, self.epoch_count - from))
    }

    /// Admin backfill of a single missed epoch. The target must be the next
    /// unrecorded index and must already have elapsed; lower indices are
    /// already recorded, higher ones would leave a hole.
    pub fn backfill_snapshot(&mut self, epoch_index: u64, current_epoch: u64) -> Result<()> {
        require!(epoch_index < current_epoch, AirdropError::EpochInFuture);
        require!(
            epoch_index >= self.epoch_count as u64,
            AirdropError::SnapshotAlreadyRecorded
        );
        require!(
            epoch_index == self.epoch_count as u64,
            AirdropError::EpochOutOfSequence
        );

        self.daily_snapshots[epoch_index as usize] = self.total_staked;
        self.epoch_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_with(total_staked: u64) -> PoolState {
        PoolState {
            total_staked,
            ..PoolState::default()
        }
    }

    fn flat_curve() -> [u64; TOTAL_EPOCHS] {
        [STAKING_BUDGET / TOTAL_EPOCHS as u64; TOTAL_EPOCHS]
    }

    #[test]
    fn account_space_matches_field_sum() {
        assert_eq!(PoolState::LEN, 8 + 32 * 3 + 32 + 8 + 8 + 8 + 4 + 160 + 160 + 32);
    }

    #[test]
    fn flat_curve_is_valid() {
        assert!(PoolState::validate_reward_curve(&flat_curve()).is_ok());
    }

    #[test]
    fn curve_sum_must_be_exact() {
        let mut curve = flat_curve();
        curve[0] -= 1;
        assert!(PoolState::validate_reward_curve(&curve).is_err());
        curve[0] += 2;
        assert!(PoolState::validate_reward_curve(&curve).is_err());
    }

    #[test]
    fn decreasing_curve_is_rejected() {
        let mut curve = flat_curve();
        // Keep the sum intact while introducing a decrease.
        curve[4] += 1;
        curve[5] -= 1;
        assert!(PoolState::validate_reward_curve(&curve).is_err());
    }

    #[test]
    fn increasing_curve_is_accepted() {
        let mut curve = flat_curve();
        curve[0] -= 10;
        curve[TOTAL_EPOCHS - 1] += 10;
        assert!(PoolState::validate_reward_curve(&curve).is_ok());
    }

    #[test]
    fn snapshot_requires_an_elapsed_epoch() {
        let mut pool = pool_with(500);
        assert!(pool.record_snapshots(0).is_err());
        assert_eq!(pool.epoch_count, 0);
    }

    #[test]
    fn snapshot_records_single_epoch() {
        let mut pool = pool_with(500);
        let (from, count) = pool.record_snapshots(1).unwrap();
        assert_eq!((from, count), (0, 1));
        assert_eq!(pool.epoch_count, 1);
        assert_eq!(pool.daily_snapshots[0], 500);
    }

    #[test]
    fn snapshot_is_idempotent_in_effect() {
        let mut pool = pool_with(500);
        pool.record_snapshots(1).unwrap();
        let before = pool.daily_snapshots;
        assert!(pool.record_snapshots(1).is_err());
        assert_eq!(pool.epoch_count, 1);
        assert_eq!(pool.daily_snapshots, before);
    }

    #[test]
    fn late_call_fills_forward() {
        let mut pool = pool_with(1234);
        let (from, count) = pool.record_snapshots(7).unwrap();
        assert_eq!((from, count), (0, 7));
        assert_eq!(pool.epoch_count, 7);
        for d in 0..7 {
            assert_eq!(pool.daily_snapshots[d], 1234);
        }
        assert_eq!(pool.daily_snapshots[7], 0);
    }

    #[test]
    fn epoch_count_never_exceeds_total() {
        let mut pool = pool_with(9);
        pool.record_snapshots(TOTAL_EPOCHS as u64).unwrap();
        assert_eq!(pool.epoch_count as usize, TOTAL_EPOCHS);
        // Everything elapsed is recorded; a further call must fail untouched.
        assert!(pool.record_snapshots(TOTAL_EPOCHS as u64).is_err());
        assert_eq!(pool.epoch_count as usize, TOTAL_EPOCHS);
    }

    #[test]
    fn zero_snapshot_inside_recorded_range_is_empty_not_missing() {
        // Nobody staked before epoch 3: the recorded values are genuinely
        // zero, and epoch_count still advances past them.
        let mut pool = pool_with(0);
        pool.record_snapshots(3).unwrap();
        pool.total_staked = 800;
        pool.record_snapshots(5).unwrap();
        assert_eq!(pool.epoch_count, 5);
        assert_eq!(pool.daily_snapshots[2], 0);
        assert_eq!(pool.daily_snapshots[3], 800);
    }

    #[test]
    fn backfill_records_exactly_the_next_epoch() {
        let mut pool = pool_with(300);
        pool.backfill_snapshot(0, 4).unwrap();
        assert_eq!(pool.epoch_count, 1);
        assert_eq!(pool.daily_snapshots[0], 300);
        // Already recorded.
        assert!(pool.backfill_snapshot(0, 4).is_err());
        // Hole.
        assert!(pool.backfill_snapshot(2, 4).is_err());
        // Future.
        assert!(pool.backfill_snapshot(4, 4).is_err());
        assert_eq!(pool.epoch_count, 1);
    }

    #[test]
    fn snapshot_sequencing_guard() {
        let pool = pool_with(0);
        assert!(pool.require_snapshots_current(0).is_ok());
        assert!(pool.require_snapshots_current(1).is_err());

        let mut pool = pool_with(10);
        pool.record_snapshots(2).unwrap();
        assert!(pool.require_snapshots_current(2).is_ok());
        assert!(pool.require_snapshots_current(3).is_err());
    }
}
