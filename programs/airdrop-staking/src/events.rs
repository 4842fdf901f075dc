use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub token_mint: Pubkey,
    pub commitment_root: [u8; 32],
    pub start_time: i64,
    pub timestamp: i64,
}

#[event]
pub struct AirdropClaimed {
    pub pool: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub claim_epoch: u64,
    pub timestamp: i64,
}

#[event]
pub struct EpochSnapshotRecorded {
    pub pool: Pubkey,
    /// First epoch index recorded by this call.
    pub from_epoch: u8,
    /// Number of epochs recorded (fill-forward may cover several).
    pub recorded: u8,
    pub total_staked: u64,
    pub timestamp: i64,
}

#[event]
pub struct Withdrawn {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub staked_amount: u64,
    pub reward: u64,
    pub timestamp: i64,
}

#[event]
pub struct PoolPaused {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PoolUnpaused {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PoolTerminated {
    pub pool: Pubkey,
    pub drained: u64,
    pub timestamp: i64,
}

#[event]
pub struct ResidualRecovered {
    pub pool: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct PoolClosed {
    pub pool: Pubkey,
    pub timestamp: i64,
}
