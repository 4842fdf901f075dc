//! Claim receipt tracking using a per-recipient PDA pattern.
//!
//! Each successful claim creates its own marker account, enabling O(1)
//! exactly-once enforcement via account initialization check.
//!
//! # Anti-Re-Claim Mechanism
//! 1. On claim, the program derives the receipt PDA from (pool, recipient)
//! 2. Anchor `init` fails if the account is already initialized -> reject
//! 3. The receipt is never closed, so withdraw-then-reclaim stays blocked
//!
//! An adversary pre-funding the PDA with lamports does not defeat this:
//! `init` keys off account data/ownership, not balance, and completes
//! normally on a merely pre-funded address.

use anchor_lang::prelude::*;

/// Permanent claim marker account.
///
/// PDA Seeds: `[b"receipt", pool_state.key().as_ref(), recipient.key().as_ref()]`
///
/// # Storage Cost
/// Rent for this small account is paid by the claimant and intentionally
/// never refunded; its continued existence is the exactly-once guarantee.
#[account]
pub struct ClaimReceipt {
    /// Reference to parent pool (for validation)
    pub pool: Pubkey,

    /// Recipient that claimed
    pub recipient: Pubkey,

    /// Committed amount that was claimed
    pub amount: u64,

    /// Unix timestamp of the claim
    pub claimed_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl ClaimReceipt {
    /// Account space (minimal to reduce rent costs)
    pub const LEN: usize = 8 // discriminator
        + 32 // pool
        + 32 // recipient
        + 8  // amount
        + 8  // claimed_at
        + 1; // bump

    /// Initialize receipt fields
    pub fn initialize(
        &mut self,
        pool: Pubkey,
        recipient: Pubkey,
        amount: u64,
        claimed_at: i64,
        bump: u8,
    ) {
        self.pool = pool;
        self.recipient = recipient;
        self.amount = amount;
        self.claimed_at = claimed_at;
        self.bump = bump;
    }
}
