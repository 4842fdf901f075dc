//! Recover Residual Instruction
//!
//! After the exit window, sweeps whatever the treasury holds above
//! `total_staked` back to the admin, with or without prior termination.
//! Staked principal accounting stays protected; once the vault balance
//! equals `total_staked` a further call fails rather than transferring zero.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::seeds;
use crate::epoch::has_expired;
use crate::error::AirdropError;
use crate::events::ResidualRecovered;
use crate::state::PoolState;

#[derive(Accounts)]
pub struct RecoverResidual<'info> {
    #[account(
        mut,
        seeds = [seeds::POOL, pool_state.token_mint.as_ref()],
        bump = pool_state.bump,
        has_one = authority @ AirdropError::Unauthorized,
    )]
    pub pool_state: Box<Account<'info, PoolState>>,

    #[account(
        mut,
        seeds = [seeds::VAULT, pool_state.key().as_ref()],
        bump,
        constraint = vault.key() == pool_state.vault @ AirdropError::InvalidTokenAccount,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    /// Admin's token account receiving the residual.
    #[account(
        mut,
        constraint = authority_token_account.mint == pool_state.token_mint
            @ AirdropError::InvalidTokenAccount,
        constraint = authority_token_account.owner == authority.key()
            @ AirdropError::InvalidTokenAccount,
    )]
    pub authority_token_account: Box<Account<'info, TokenAccount>>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<RecoverResidual>) -> Result<()> {
    let clock = Clock::get()?;
    let pool_state = &ctx.accounts.pool_state;

    require!(
        has_expired(pool_state.start_time, clock.unix_timestamp),
        AirdropError::ExitWindowNotFinished
    );

    let amount = ctx
        .accounts
        .vault
        .amount
        .saturating_sub(pool_state.total_staked);
    require!(amount > 0, AirdropError::NothingToRecover);

    let token_mint = pool_state.token_mint;
    let pool_seeds = &[seeds::POOL, token_mint.as_ref(), &[pool_state.bump]];
    let signer_seeds = &[&pool_seeds[..]];
    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.authority_token_account.to_account_info(),
            authority: pool_state.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, amount)?;

    emit!(ResidualRecovered {
        pool: pool_state.key(),
        amount,
        timestamp: clock.unix_timestamp,
    });

    msg!("Recovered residual: {}", amount);
    Ok(())
}
