//! Preview Rewards Instruction
//!
//! Read-only helper: logs the caller's reward share for a given epoch.
//! Epochs before the position existed pay zero. Recorded epochs use the
//! stored snapshot; future epochs fall back to the latest recorded snapshot,
//! or the live total before any snapshot exists. No state mutation, no
//! transfer.

use anchor_lang::prelude::*;

use crate::constants::{seeds, TOTAL_EPOCHS};
use crate::error::AirdropError;
use crate::rewards::epoch_reward;
use crate::state::{PoolState, StakePosition};

#[derive(Accounts)]
pub struct PreviewRewards<'info> {
    #[account(
        seeds = [seeds::POOL, pool_state.token_mint.as_ref()],
        bump = pool_state.bump,
    )]
    pub pool_state: Box<Account<'info, PoolState>>,

    #[account(
        seeds = [seeds::POSITION, pool_state.key().as_ref(), stake_position.owner.as_ref()],
        bump = stake_position.bump,
    )]
    pub stake_position: Box<Account<'info, StakePosition>>,
}

pub fn handler(ctx: Context<PreviewRewards>, epoch: u64) -> Result<()> {
    let pool_state = &ctx.accounts.pool_state;
    let stake_position = &ctx.accounts.stake_position;

    require!(
        (epoch as usize) < TOTAL_EPOCHS,
        AirdropError::EpochInFuture
    );

    if epoch < stake_position.claim_epoch {
        msg!("Epoch {} reward for {}: 0", epoch, stake_position.owner);
        return Ok(());
    }

    let snapshot_total = if epoch < pool_state.epoch_count as u64 {
        pool_state.daily_snapshots[epoch as usize]
    } else if pool_state.epoch_count > 0 {
        pool_state.daily_snapshots[pool_state.epoch_count as usize - 1]
    } else {
        pool_state.total_staked
    };

    let reward = epoch_reward(
        stake_position.staked_amount,
        pool_state.daily_rewards[epoch as usize],
        snapshot_total,
    );

    msg!("Epoch {} reward for {}: {}", epoch, stake_position.owner, reward);
    Ok(())
}
