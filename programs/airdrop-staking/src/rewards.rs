//! Pro-rata reward accrual over recorded epoch snapshots.

use anchor_lang::prelude::*;

use crate::constants::TOTAL_EPOCHS;
use crate::error::AirdropError;

/// Total reward accrued by a position over the recorded epochs it was staked
/// for.
///
/// Accrual starts at `claim_epoch`: earlier snapshots did not include this
/// stake, and paying shares of them would distribute the same epoch budget
/// twice. For each recorded epoch `d >= claim_epoch` the position earns
/// `floor(staked_amount * daily_rewards[d] / daily_snapshots[d])`.
/// The multiplication is widened to u128 before the division; with u64
/// operands the product cannot overflow there, and the per-epoch share never
/// exceeds `daily_rewards[d]`, so the running sum stays well inside u64.
///
/// A snapshot of zero means nothing was staked that epoch; the epoch's budget
/// is simply not distributed. Epochs are recorded strictly in order, so
/// `d < epoch_count` is the "recorded" flag and a zero value inside that
/// range is a legitimately empty epoch, not a missing one.
pub fn accrued_reward(
    staked_amount: u64,
    claim_epoch: u64,
    epoch_count: u8,
    daily_rewards: &[u64; TOTAL_EPOCHS],
    daily_snapshots: &[u64; TOTAL_EPOCHS],
) -> Result<u64> {
    let recorded = (epoch_count as usize).min(TOTAL_EPOCHS);
    let first = (claim_epoch as usize).min(recorded);
    let mut total: u128 = 0;

    for d in first..recorded {
        let snapshot_total = daily_snapshots[d];
        if snapshot_total == 0 {
            continue;
        }
        let share = (staked_amount as u128)
            .checked_mul(daily_rewards[d] as u128)
            .ok_or(AirdropError::ArithmeticOverflow)?
            / snapshot_total as u128;
        total = total
            .checked_add(share)
            .ok_or(AirdropError::ArithmeticOverflow)?;
    }

    u64::try_from(total).map_err(|_| error!(AirdropError::ArithmeticOverflow))
}

/// Single-epoch reward share, used by the read-only preview instruction.
pub fn epoch_reward(staked_amount: u64, daily_reward: u64, snapshot_total: u64) -> u64 {
    if snapshot_total == 0 {
        return 0;
    }
    ((staked_amount as u128) * (daily_reward as u128) / (snapshot_total as u128)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_curve(per_epoch: u64) -> [u64; TOTAL_EPOCHS] {
        [per_epoch; TOTAL_EPOCHS]
    }

    #[test]
    fn two_stakers_split_three_to_one() {
        // Stakes of 3000 and 1000 against an equal 5-per-epoch curve: A earns
        // floor(3000*5/4000) = 3 per epoch, B earns 1, so 60 vs 20 overall.
        let rewards = flat_curve(5);
        let snapshots = flat_curve(4000);

        let a = accrued_reward(3000, 0, TOTAL_EPOCHS as u8, &rewards, &snapshots).unwrap();
        let b = accrued_reward(1000, 0, TOTAL_EPOCHS as u8, &rewards, &snapshots).unwrap();
        assert_eq!(a, 60);
        assert_eq!(b, 20);
        assert_eq!(a, 3 * b);
    }

    #[test]
    fn unrecorded_epochs_earn_nothing() {
        let rewards = flat_curve(100);
        let snapshots = flat_curve(1000);
        let partial = accrued_reward(1000, 0, 7, &rewards, &snapshots).unwrap();
        assert_eq!(partial, 7 * 100);
    }

    #[test]
    fn accrual_starts_at_claim_epoch() {
        // A position opened at epoch 12 earns nothing for the snapshots that
        // predate it, even when all 20 epochs are recorded.
        let rewards = flat_curve(100);
        let snapshots = flat_curve(1000);
        let late = accrued_reward(1000, 12, TOTAL_EPOCHS as u8, &rewards, &snapshots).unwrap();
        assert_eq!(late, 8 * 100);

        let past_end =
            accrued_reward(1000, TOTAL_EPOCHS as u64 + 5, TOTAL_EPOCHS as u8, &rewards, &snapshots)
                .unwrap();
        assert_eq!(past_end, 0);
    }

    #[test]
    fn empty_epoch_is_skipped() {
        let rewards = flat_curve(100);
        let mut snapshots = flat_curve(1000);
        snapshots[3] = 0;
        snapshots[4] = 0;
        let total = accrued_reward(1000, 0, 10, &rewards, &snapshots).unwrap();
        assert_eq!(total, 8 * 100);
    }

    #[test]
    fn sole_staker_takes_full_budget() {
        let rewards = flat_curve(5_000_000_000_000_000);
        let snapshots = flat_curve(777);
        let total = accrued_reward(777, 0, TOTAL_EPOCHS as u8, &rewards, &snapshots).unwrap();
        assert_eq!(total, TOTAL_EPOCHS as u64 * 5_000_000_000_000_000);
    }

    #[test]
    fn wide_intermediate_avoids_overflow() {
        // staked * daily_reward overflows u64 but not u128.
        let rewards = flat_curve(u64::MAX / 2);
        let snapshots = flat_curve(u64::MAX);
        let total = accrued_reward(u64::MAX, 0, 1, &rewards, &snapshots).unwrap();
        assert_eq!(total, u64::MAX / 2);
    }

    #[test]
    fn epoch_count_is_clamped_to_array_len() {
        let rewards = flat_curve(10);
        let snapshots = flat_curve(100);
        let total = accrued_reward(100, 0, u8::MAX, &rewards, &snapshots).unwrap();
        assert_eq!(total, TOTAL_EPOCHS as u64 * 10);
    }

    #[test]
    fn preview_share_matches_accrual_term() {
        assert_eq!(epoch_reward(3000, 5, 4000), 3);
        assert_eq!(epoch_reward(1000, 5, 4000), 1);
        assert_eq!(epoch_reward(1000, 5, 0), 0);
    }
}
