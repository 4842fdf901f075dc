//! Close Pool Instruction
//!
//! Terminal action: reclaims the pool's storage once everything is settled.
//! Requires prior termination, no remaining staked positions and an empty
//! treasury. Closes the vault via SPL CPI and the pool ledger via Anchor's
//! close constraint, returning rent to the admin.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, Token, TokenAccount};

use crate::constants::seeds;
use crate::error::AirdropError;
use crate::events::PoolClosed;
use crate::state::PoolState;

#[derive(Accounts)]
pub struct ClosePool<'info> {
    #[account(
        mut,
        seeds = [seeds::POOL, pool_state.token_mint.as_ref()],
        bump = pool_state.bump,
        has_one = authority @ AirdropError::Unauthorized,
        close = authority,
    )]
    pub pool_state: Box<Account<'info, PoolState>>,

    #[account(
        mut,
        seeds = [seeds::VAULT, pool_state.key().as_ref()],
        bump,
        constraint = vault.key() == pool_state.vault @ AirdropError::InvalidTokenAccount,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<ClosePool>) -> Result<()> {
    let pool_state = &ctx.accounts.pool_state;

    require!(pool_state.is_terminated, AirdropError::PoolNotTerminated);
    require!(pool_state.total_staked == 0, AirdropError::PoolNotEmpty);
    require!(ctx.accounts.vault.amount == 0, AirdropError::TreasuryNotEmpty);

    let token_mint = pool_state.token_mint;
    let pool_seeds = &[seeds::POOL, token_mint.as_ref(), &[pool_state.bump]];
    let signer_seeds = &[&pool_seeds[..]];
    let close_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        CloseAccount {
            account: ctx.accounts.vault.to_account_info(),
            destination: ctx.accounts.authority.to_account_info(),
            authority: pool_state.to_account_info(),
        },
        signer_seeds,
    );
    token::close_account(close_ctx)?;

    emit!(PoolClosed {
        pool: pool_state.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Pool closed, rent returned to admin");
    Ok(())
}
