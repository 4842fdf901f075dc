//! Unified error types for the airdrop staking pool.
//!
//! Variants are grouped by failure class: temporal guards are retryable by
//! waiting, authorization and integrity failures are fatal for the caller,
//! budget failures are fatal for the input, resource-state failures clear
//! once the pool is driven to the required state. Codes are stable across
//! versions for client compatibility.

use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    // ========== Temporal Guards ==========

    /// Pool start must be strictly in the future at initialization
    #[msg("Start time must be in the future")]
    StartTimeInPast,

    /// Operation attempted before the pool's start time
    #[msg("Pool has not started yet")]
    PoolNotStarted,

    /// Claim attempted at or after the claim deadline
    #[msg("Claim window has closed")]
    ClaimWindowClosed,

    /// Terminate attempted while claims are still accepted
    #[msg("Claim window has not elapsed yet")]
    ClaimWindowStillOpen,

    /// Recovery attempted before the exit window finished
    #[msg("Exit window has not finished")]
    ExitWindowNotFinished,

    /// Pool is paused - claims, snapshots and backfills are blocked
    #[msg("Pool is paused")]
    PoolPaused,

    /// Unpause attempted on a pool that is not paused
    #[msg("Pool is not paused")]
    PoolNotPaused,

    /// Pause attempted on a pool that is already paused
    #[msg("Pool is already paused")]
    AlreadyPaused,

    /// Pool was terminated - no new claims or snapshots
    #[msg("Pool has been terminated")]
    PoolTerminated,

    /// Terminate attempted twice
    #[msg("Pool is already terminated")]
    AlreadyTerminated,

    /// Close attempted before termination
    #[msg("Pool must be terminated before closing")]
    PoolNotTerminated,

    // ========== Snapshot Sequencing ==========

    /// No epoch has fully elapsed yet, nothing to record
    #[msg("Too early to record a snapshot - epoch 0 is still running")]
    SnapshotTooEarly,

    /// Every elapsed epoch is already recorded
    #[msg("Snapshot already recorded for all elapsed epochs")]
    SnapshotAlreadyRecorded,

    /// Backfill target is not the next unrecorded epoch
    #[msg("Epoch index out of sequence for backfill")]
    EpochOutOfSequence,

    /// Backfill target has not elapsed yet
    #[msg("Cannot record a snapshot for a future epoch")]
    EpochInFuture,

    /// Claim or withdrawal attempted while the ledger lags the clock
    #[msg("Previous epoch snapshot must be recorded first")]
    SnapshotRequiredFirst,

    /// Terminate requires the full snapshot history
    #[msg("All epoch snapshots must be recorded before termination")]
    SnapshotsIncomplete,

    // ========== Authorization ==========

    /// Caller is not the pool authority
    #[msg("Unauthorized: caller is not the pool authority")]
    Unauthorized,

    /// Position account is not owned by the caller
    #[msg("Caller does not own this stake position")]
    InvalidPositionOwner,

    // ========== Integrity ==========

    /// Inclusion proof does not reconstruct the commitment root
    #[msg("Invalid allocation proof")]
    InvalidProof,

    /// Vault or token account does not match the pool configuration
    #[msg("Token account does not match pool configuration")]
    InvalidTokenAccount,

    // ========== Budget / Conservation ==========

    /// Claim would push total_claimed past the airdrop allocation
    #[msg("Airdrop budget exhausted")]
    AirdropBudgetExhausted,

    /// Supplied reward curve does not sum to the staking budget
    #[msg("Daily rewards must sum to exactly the staking budget")]
    RewardSumMismatch,

    /// Supplied reward curve decreases somewhere
    #[msg("Daily rewards must be non-decreasing")]
    RewardCurveDecreasing,

    /// Checked arithmetic failed
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    // ========== Resource State ==========

    /// Close attempted while positions remain staked
    #[msg("Pool still has staked positions")]
    PoolNotEmpty,

    /// Close attempted while the treasury still holds tokens
    #[msg("Treasury must be empty before closing")]
    TreasuryNotEmpty,

    /// Recovery attempted with nothing above the staked reserve
    #[msg("Nothing to recover")]
    NothingToRecover,
}
