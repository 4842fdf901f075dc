//! Merkle airdrop with epoch-snapshot staking rewards.
//!
//! A fixed token allocation is committed off-chain as a keccak merkle root.
//! Allowlisted recipients claim their allocation exactly once against an
//! inclusion proof; the claimed amount is paid out immediately and staked
//! into a fixed-length reward program. Once per epoch the total staked value
//! is frozen by a permissionless snapshot, and each position accrues
//! `floor(stake * epoch_budget / snapshot)` per recorded epoch, settled on
//! withdrawal.

use anchor_lang::prelude::*;

pub mod constants;
pub mod epoch;
pub mod error;
pub mod events;
pub mod instructions;
pub mod merkle;
pub mod rewards;
pub mod state;


use constants::TOTAL_EPOCHS;
use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod airdrop_staking {
    use super::*;

    /// Create the pool ledger and treasury vault for one token mint.
    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        start_time: i64,
        commitment_root: [u8; 32],
        daily_rewards: [u64; TOTAL_EPOCHS],
    ) -> Result<()> {
        instructions::initialize_pool::handler(ctx, start_time, commitment_root, daily_rewards)
    }

    /// Claim a committed allocation against an inclusion proof. Pays the
    /// principal immediately and opens a staked position.
    pub fn claim(ctx: Context<Claim>, amount: u64, proof: Vec<[u8; 32]>) -> Result<()> {
        instructions::claim::handler(ctx, amount, proof)
    }

    /// Permissionless: freeze total_staked for every elapsed, unrecorded
    /// epoch.
    pub fn record_epoch_snapshot(ctx: Context<RecordSnapshot>) -> Result<()> {
        instructions::record_snapshot::handler(ctx)
    }

    /// Admin: record one specific missed epoch directly.
    pub fn backfill_epoch_snapshot(ctx: Context<BackfillSnapshot>, epoch_index: u64) -> Result<()> {
        instructions::admin::backfill_snapshot::handler(ctx, epoch_index)
    }

    /// Settle a position: pay the accrued reward and close the position.
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::handler(ctx)
    }

    /// Read-only reward estimate for one epoch.
    pub fn preview_rewards(ctx: Context<PreviewRewards>, epoch: u64) -> Result<()> {
        instructions::preview_rewards::handler(ctx, epoch)
    }

    /// Admin: block claims, snapshots and backfills.
    pub fn pause_pool(ctx: Context<PausePool>) -> Result<()> {
        instructions::admin::pause::handler(ctx)
    }

    /// Admin: resume normal operation.
    pub fn unpause_pool(ctx: Context<UnpausePool>) -> Result<()> {
        instructions::admin::unpause::handler(ctx)
    }

    /// Admin: permanent shutdown after the program has fully run.
    pub fn terminate_pool(ctx: Context<TerminatePool>) -> Result<()> {
        instructions::admin::terminate::handler(ctx)
    }

    /// Admin: sweep the treasury residual after the exit window.
    pub fn recover_residual(ctx: Context<RecoverResidual>) -> Result<()> {
        instructions::admin::recover_residual::handler(ctx)
    }

    /// Admin: reclaim storage once the pool is terminated and empty.
    pub fn close_pool(ctx: Context<ClosePool>) -> Result<()> {
        instructions::admin::close_pool::handler(ctx)
    }
}
