//! Backfill Epoch Snapshot Instruction
//!
//! Admin recovery path for missed permissionless snapshot triggers: records
//! one specific past epoch directly, with the same "already recorded" and
//! "not in the future" guards as the regular recorder.

use anchor_lang::prelude::*;

use crate::constants::seeds;
use crate::epoch::current_epoch;
use crate::error::AirdropError;
use crate::events::EpochSnapshotRecorded;
use crate::state::PoolState;

#[derive(Accounts)]
pub struct BackfillSnapshot<'info> {
    #[account(
        mut,
        seeds = [seeds::POOL, pool_state.token_mint.as_ref()],
        bump = pool_state.bump,
        has_one = authority @ AirdropError::Unauthorized,
    )]
    pub pool_state: Box<Account<'info, PoolState>>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<BackfillSnapshot>, epoch_index: u64) -> Result<()> {
    let clock = Clock::get()?;
    let pool_state = &mut ctx.accounts.pool_state;

    pool_state.require_not_terminated()?;
    pool_state.require_not_paused()?;

    let epoch = current_epoch(pool_state.start_time, clock.unix_timestamp);
    pool_state.backfill_snapshot(epoch_index, epoch)?;

    emit!(EpochSnapshotRecorded {
        pool: pool_state.key(),
        from_epoch: epoch_index as u8,
        recorded: 1,
        total_staked: pool_state.total_staked,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Backfilled snapshot for epoch {}, total_staked: {}",
        epoch_index,
        pool_state.total_staked
    );
    Ok(())
}
