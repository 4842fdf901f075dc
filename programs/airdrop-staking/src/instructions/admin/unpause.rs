//! Unpause Pool Instruction
//!
//! Resumes claims, snapshots and backfills after an emergency pause.

use anchor_lang::prelude::*;

use crate::constants::seeds;
use crate::error::AirdropError;
use crate::events::PoolUnpaused;
use crate::state::PoolState;

#[derive(Accounts)]
pub struct UnpausePool<'info> {
    #[account(
        mut,
        seeds = [seeds::POOL, pool_state.token_mint.as_ref()],
        bump = pool_state.bump,
        has_one = authority @ AirdropError::Unauthorized,
    )]
    pub pool_state: Box<Account<'info, PoolState>>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<UnpausePool>) -> Result<()> {
    let pool_state = &mut ctx.accounts.pool_state;

    pool_state.require_not_terminated()?;
    require!(pool_state.is_paused, AirdropError::PoolNotPaused);

    pool_state.is_paused = false;

    emit!(PoolUnpaused {
        pool: pool_state.key(),
        authority: ctx.accounts.authority.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Pool unpaused");
    Ok(())
}
