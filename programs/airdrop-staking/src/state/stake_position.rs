//! Stake position account, one per claiming recipient.
//!
//! Created by `claim`, closed by `withdraw` (rent returned to the owner).
//! The permanent [`crate::state::ClaimReceipt`] is what blocks a re-claim
//! after this account is gone.

use anchor_lang::prelude::*;

/// A recipient's staked allocation.
///
/// PDA Seeds: `[b"position", pool_state.key().as_ref(), owner.key().as_ref()]`
#[account]
pub struct StakePosition {
    /// Position owner (the claiming recipient)
    pub owner: Pubkey,

    /// Staked amount, equal to the committed allocation
    pub staked_amount: u64,

    /// Epoch index active when the claim happened; reward accrual starts
    /// here, since earlier snapshots did not include this stake
    pub claim_epoch: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl StakePosition {
    /// Account space calculation
    pub const LEN: usize = 8 // discriminator
        + 32 // owner
        + 8  // staked_amount
        + 8  // claim_epoch
        + 1; // bump

    /// Initialize position fields
    pub fn initialize(&mut self, owner: Pubkey, staked_amount: u64, claim_epoch: u64, bump: u8) {
        self.owner = owner;
        self.staked_amount = staked_amount;
        self.claim_epoch = claim_epoch;
        self.bump = bump;
    }
}
