//! Pause Pool Instruction
//!
//! Emergency stop - blocks claims, snapshots and backfills.
//! Withdrawals stay open so user funds are never trapped.

use anchor_lang::prelude::*;

use crate::constants::seeds;
use crate::error::AirdropError;
use crate::events::PoolPaused;
use crate::state::PoolState;

#[derive(Accounts)]
pub struct PausePool<'info> {
    #[account(
        mut,
        seeds = [seeds::POOL, pool_state.token_mint.as_ref()],
        bump = pool_state.bump,
        has_one = authority @ AirdropError::Unauthorized,
    )]
    pub pool_state: Box<Account<'info, PoolState>>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<PausePool>) -> Result<()> {
    let pool_state = &mut ctx.accounts.pool_state;

    pool_state.require_not_terminated()?;
    require!(!pool_state.is_paused, AirdropError::AlreadyPaused);

    pool_state.is_paused = true;

    emit!(PoolPaused {
        pool: pool_state.key(),
        authority: ctx.accounts.authority.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Pool paused");
    Ok(())
}
