//! Record Epoch Snapshot Instruction
//!
//! Permissionless: any signer may record snapshots, since the operation only
//! freezes objective state and never moves value. One call records every
//! fully elapsed but unrecorded epoch at the current `total_staked`.

use anchor_lang::prelude::*;

use crate::constants::seeds;
use crate::epoch::current_epoch;
use crate::events::EpochSnapshotRecorded;
use crate::state::PoolState;

#[derive(Accounts)]
pub struct RecordSnapshot<'info> {
    #[account(
        mut,
        seeds = [seeds::POOL, pool_state.token_mint.as_ref()],
        bump = pool_state.bump,
    )]
    pub pool_state: Box<Account<'info, PoolState>>,

    pub signer: Signer<'info>,
}

pub fn handler(ctx: Context<RecordSnapshot>) -> Result<()> {
    let clock = Clock::get()?;
    let pool_state = &mut ctx.accounts.pool_state;

    pool_state.require_not_terminated()?;
    pool_state.require_not_paused()?;

    let epoch = current_epoch(pool_state.start_time, clock.unix_timestamp);
    let (from_epoch, recorded) = pool_state.record_snapshots(epoch)?;

    emit!(EpochSnapshotRecorded {
        pool: pool_state.key(),
        from_epoch,
        recorded,
        total_staked: pool_state.total_staked,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Recorded {} snapshot(s) from epoch {}, total_staked: {}",
        recorded,
        from_epoch,
        pool_state.total_staked
    );
    Ok(())
}
