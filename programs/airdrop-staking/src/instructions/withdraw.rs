//! Withdraw Instruction
//!
//! Settles a position: pays the pro-rata reward accrued over the recorded
//! epochs since the claim and closes the stake position (rent back to the
//! owner). The claim receipt stays, so the owner can never claim again.
//!
//! Deliberately NOT gated on pause or termination - a paused pool must never
//! trap user withdrawals. After the exit window the reward is forfeited and
//! only the position bookkeeping is closed out.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::seeds;
use crate::epoch::{current_epoch, has_expired};
use crate::error::AirdropError;
use crate::events::Withdrawn;
use crate::rewards::accrued_reward;
use crate::state::{PoolState, StakePosition};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [seeds::POOL, pool_state.token_mint.as_ref()],
        bump = pool_state.bump,
    )]
    pub pool_state: Box<Account<'info, PoolState>>,

    /// Owner's stake position - closed here, rent returned to the owner.
    #[account(
        mut,
        seeds = [seeds::POSITION, pool_state.key().as_ref(), owner.key().as_ref()],
        bump = stake_position.bump,
        constraint = stake_position.owner == owner.key() @ AirdropError::InvalidPositionOwner,
        close = owner,
    )]
    pub stake_position: Box<Account<'info, StakePosition>>,

    /// Treasury vault paying the reward.
    #[account(
        mut,
        seeds = [seeds::VAULT, pool_state.key().as_ref()],
        bump,
        constraint = vault.key() == pool_state.vault @ AirdropError::InvalidTokenAccount,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    /// Owner's token account receiving the reward.
    #[account(
        mut,
        constraint = owner_token_account.mint == pool_state.token_mint
            @ AirdropError::InvalidTokenAccount,
        constraint = owner_token_account.owner == owner.key()
            @ AirdropError::InvalidTokenAccount,
    )]
    pub owner_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Withdraw>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let pool_state = &mut ctx.accounts.pool_state;
    let stake_position = &ctx.accounts.stake_position;

    // Settlement must not read stale snapshots: every elapsed epoch has to
    // be recorded before rewards are paid out. While paused that requirement
    // would trap funds (snapshots are pause-blocked), so settlement then
    // runs over the recorded prefix only.
    let epoch = current_epoch(pool_state.start_time, now);
    if !pool_state.is_paused {
        pool_state.require_snapshots_current(epoch)?;
    }

    let reward = if has_expired(pool_state.start_time, now) {
        // Past the exit window accrued rewards are forfeited; the principal
        // was already paid at claim time.
        0
    } else {
        accrued_reward(
            stake_position.staked_amount,
            stake_position.claim_epoch,
            pool_state.epoch_count,
            &pool_state.daily_rewards,
            &pool_state.daily_snapshots,
        )?
    };

    if reward > 0 {
        let token_mint = pool_state.token_mint;
        let pool_seeds = &[seeds::POOL, token_mint.as_ref(), &[pool_state.bump]];
        let signer_seeds = &[&pool_seeds[..]];
        let transfer_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.owner_token_account.to_account_info(),
                authority: pool_state.to_account_info(),
            },
            signer_seeds,
        );
        token::transfer(transfer_ctx, reward)?;
    }

    pool_state.total_staked = pool_state
        .total_staked
        .checked_sub(stake_position.staked_amount)
        .ok_or(AirdropError::ArithmeticOverflow)?;

    emit!(Withdrawn {
        pool: pool_state.key(),
        owner: stake_position.owner,
        staked_amount: stake_position.staked_amount,
        reward,
        timestamp: now,
    });

    msg!(
        "Withdrawn: {} reward for {} staked, position closed",
        reward,
        stake_position.staked_amount
    );
    Ok(())
}
