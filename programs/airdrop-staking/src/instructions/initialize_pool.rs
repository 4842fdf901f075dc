//! Initialize Pool Instruction
//!
//! Creates the pool ledger and its treasury vault for one token mint.
//! The commitment root and the per-epoch reward curve are immutable after
//! this point; the admin funds the vault with the airdrop and staking
//! budgets out of band before `start_time`.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{seeds, TOTAL_EPOCHS};
use crate::error::AirdropError;
use crate::events::PoolInitialized;
use crate::state::PoolState;

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(
        init,
        payer = authority,
        space = PoolState::LEN,
        seeds = [seeds::POOL, token_mint.key().as_ref()],
        bump
    )]
    pub pool_state: Box<Account<'info, PoolState>>,

    #[account(
        init,
        payer = authority,
        token::mint = token_mint,
        token::authority = pool_state,
        seeds = [seeds::VAULT, pool_state.key().as_ref()],
        bump
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub token_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn handler(
    ctx: Context<InitializePool>,
    start_time: i64,
    commitment_root: [u8; 32],
    daily_rewards: [u64; TOTAL_EPOCHS],
) -> Result<()> {
    let clock = Clock::get()?;
    require!(start_time > clock.unix_timestamp, AirdropError::StartTimeInPast);

    PoolState::validate_reward_curve(&daily_rewards)?;

    let pool_state = &mut ctx.accounts.pool_state;
    pool_state.initialize(
        ctx.accounts.authority.key(),
        ctx.accounts.token_mint.key(),
        ctx.accounts.vault.key(),
        commitment_root,
        start_time,
        daily_rewards,
        ctx.bumps.pool_state,
    );

    emit!(PoolInitialized {
        pool: pool_state.key(),
        authority: pool_state.authority,
        token_mint: pool_state.token_mint,
        commitment_root,
        start_time,
        timestamp: clock.unix_timestamp,
    });

    msg!("Pool initialized, start_time: {}", start_time);
    Ok(())
}
