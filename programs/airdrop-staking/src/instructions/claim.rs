//! Claim Instruction
//!
//! Pays out a committed allocation against an inclusion proof and stakes it
//! into the reward program in the same transaction.
//!
//! Guards run in order, first failure wins: lifecycle state, claim window,
//! claim receipt (via `init`), snapshot currency, airdrop budget, proof.
//! The allocation principal is transferred to the recipient immediately;
//! `withdraw` later settles only the accrued reward.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{seeds, AIRDROP_BUDGET};
use crate::epoch::{claim_window_open, current_epoch};
use crate::error::AirdropError;
use crate::events::AirdropClaimed;
use crate::merkle;
use crate::state::{ClaimReceipt, PoolState, StakePosition};

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(
        mut,
        seeds = [seeds::POOL, pool_state.token_mint.as_ref()],
        bump = pool_state.bump,
    )]
    pub pool_state: Box<Account<'info, PoolState>>,

    /// Permanent marker preventing a second claim. `init` fails if it is
    /// already initialized, which is the exactly-once guarantee; a merely
    /// pre-funded account does not trip it.
    #[account(
        init,
        payer = recipient,
        space = ClaimReceipt::LEN,
        seeds = [seeds::RECEIPT, pool_state.key().as_ref(), recipient.key().as_ref()],
        bump
    )]
    pub claim_receipt: Box<Account<'info, ClaimReceipt>>,

    /// Stake data, closed on withdraw (recipient recovers rent).
    #[account(
        init,
        payer = recipient,
        space = StakePosition::LEN,
        seeds = [seeds::POSITION, pool_state.key().as_ref(), recipient.key().as_ref()],
        bump
    )]
    pub stake_position: Box<Account<'info, StakePosition>>,

    /// Treasury vault paying the allocation.
    #[account(
        mut,
        seeds = [seeds::VAULT, pool_state.key().as_ref()],
        bump,
        constraint = vault.key() == pool_state.vault @ AirdropError::InvalidTokenAccount,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    /// Recipient's token account receiving the allocation.
    #[account(
        mut,
        constraint = recipient_token_account.mint == pool_state.token_mint
            @ AirdropError::InvalidTokenAccount,
        constraint = recipient_token_account.owner == recipient.key()
            @ AirdropError::InvalidTokenAccount,
    )]
    pub recipient_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub recipient: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Claim>, amount: u64, proof: Vec<[u8; 32]>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let pool_state = &mut ctx.accounts.pool_state;

    pool_state.require_not_terminated()?;
    pool_state.require_not_paused()?;

    require!(now >= pool_state.start_time, AirdropError::PoolNotStarted);
    require!(
        claim_window_open(pool_state.start_time, now),
        AirdropError::ClaimWindowClosed
    );

    let claim_epoch = current_epoch(pool_state.start_time, now);
    pool_state.require_snapshots_current(claim_epoch)?;

    let new_total_claimed = pool_state
        .total_claimed
        .checked_add(amount)
        .ok_or(AirdropError::ArithmeticOverflow)?;
    require!(
        new_total_claimed <= AIRDROP_BUDGET,
        AirdropError::AirdropBudgetExhausted
    );

    let leaf = merkle::hash_leaf(&ctx.accounts.recipient.key(), amount);
    require!(
        merkle::verify_proof(&proof, &pool_state.commitment_root, &leaf),
        AirdropError::InvalidProof
    );

    // Pay the allocation principal immediately; only the reward is settled
    // at withdrawal.
    let token_mint = pool_state.token_mint;
    let pool_seeds = &[seeds::POOL, token_mint.as_ref(), &[pool_state.bump]];
    let signer_seeds = &[&pool_seeds[..]];
    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.recipient_token_account.to_account_info(),
            authority: pool_state.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, amount)?;

    ctx.accounts.claim_receipt.initialize(
        pool_state.key(),
        ctx.accounts.recipient.key(),
        amount,
        now,
        ctx.bumps.claim_receipt,
    );
    ctx.accounts.stake_position.initialize(
        ctx.accounts.recipient.key(),
        amount,
        claim_epoch,
        ctx.bumps.stake_position,
    );

    pool_state.total_staked = pool_state
        .total_staked
        .checked_add(amount)
        .ok_or(AirdropError::ArithmeticOverflow)?;
    pool_state.total_claimed = new_total_claimed;

    emit!(AirdropClaimed {
        pool: pool_state.key(),
        recipient: ctx.accounts.recipient.key(),
        amount,
        claim_epoch,
        timestamp: now,
    });

    msg!(
        "Claimed and staked {} at epoch {} for {}",
        amount,
        claim_epoch,
        ctx.accounts.recipient.key()
    );
    Ok(())
}
