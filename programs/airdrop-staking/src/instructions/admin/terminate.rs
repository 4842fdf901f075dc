//! Terminate Pool Instruction
//!
//! Permanent shutdown once the reward program has fully run: every epoch
//! snapshotted and the claim window elapsed. Sweeps the treasury balance
//! above the staking reward budget back to the admin. Principal was paid
//! out at claim time, so the outstanding obligation is accrued rewards,
//! bounded by `STAKING_BUDGET`; the retained reserve keeps every remaining
//! withdrawal payable, and `recover_residual` sweeps what is left of it
//! once the exit window closes.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{seeds, STAKING_BUDGET, TOTAL_EPOCHS};
use crate::epoch::claim_deadline;
use crate::error::AirdropError;
use crate::events::PoolTerminated;
use crate::state::PoolState;

#[derive(Accounts)]
pub struct TerminatePool<'info> {
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

    /// Admin's token account receiving the swept residual.
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

pub fn handler(ctx: Context<TerminatePool>) -> Result<()> {
    let clock = Clock::get()?;
    let pool_state = &mut ctx.accounts.pool_state;

    require!(!pool_state.is_terminated, AirdropError::AlreadyTerminated);
    require!(
        pool_state.epoch_count as usize >= TOTAL_EPOCHS,
        AirdropError::SnapshotsIncomplete
    );
    require!(
        clock.unix_timestamp >= claim_deadline(pool_state.start_time),
        AirdropError::ClaimWindowStillOpen
    );

    pool_state.is_terminated = true;

    let drainable = ctx.accounts.vault.amount.saturating_sub(STAKING_BUDGET);

    if drainable > 0 {
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
        token::transfer(transfer_ctx, drainable)?;
    }

    emit!(PoolTerminated {
        pool: pool_state.key(),
        drained: drainable,
        timestamp: clock.unix_timestamp,
    });

    msg!("Pool terminated, {} returned to admin", drainable);
    Ok(())
}
