//! Epoch index math and time-window predicates.
//!
//! All time gating in the program reduces to these pure functions evaluated
//! against the cluster clock at execution time. There are no scheduled
//! timers; a transition that is "due" simply becomes permitted.

use crate::constants::{CLAIM_WINDOW_EPOCHS, EPOCH_SECONDS, EXIT_WINDOW_EPOCHS, TOTAL_EPOCHS};

/// Epoch index for a given wall-clock time, capped at `TOTAL_EPOCHS`.
///
/// Returns 0 for any time at or before `start_time`; the cap makes the index
/// usable directly as an upper bound for the snapshot arrays.
pub fn current_epoch(start_time: i64, now: i64) -> u64 {
    if now <= start_time {
        return 0;
    }
    let elapsed = (now - start_time) as u64;
    let epoch = elapsed / EPOCH_SECONDS as u64;
    epoch.min(TOTAL_EPOCHS as u64)
}

/// End of the claim window: first instant at which `claim` is rejected.
pub fn claim_deadline(start_time: i64) -> i64 {
    start_time + CLAIM_WINDOW_EPOCHS * EPOCH_SECONDS
}

/// Claims are permitted in `[start_time, claim_deadline)`.
pub fn claim_window_open(start_time: i64, now: i64) -> bool {
    now >= start_time && now < claim_deadline(start_time)
}

/// End of the exit window, after which rewards are forfeited and residual
/// treasury funds become recoverable by the admin.
pub fn exit_deadline(start_time: i64) -> i64 {
    start_time + (CLAIM_WINDOW_EPOCHS + EXIT_WINDOW_EPOCHS) * EPOCH_SECONDS
}

/// Whether the whole program has expired (past the exit window).
pub fn has_expired(start_time: i64, now: i64) -> bool {
    now > exit_deadline(start_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_700_000_000;

    #[test]
    fn epoch_zero_before_and_at_start() {
        assert_eq!(current_epoch(START, START - 1), 0);
        assert_eq!(current_epoch(START, START), 0);
    }

    #[test]
    fn epoch_advances_on_exact_boundaries() {
        assert_eq!(current_epoch(START, START + 1), 0);
        assert_eq!(current_epoch(START, START + EPOCH_SECONDS - 1), 0);
        assert_eq!(current_epoch(START, START + EPOCH_SECONDS), 1);
        assert_eq!(current_epoch(START, START + 5 * EPOCH_SECONDS + 17), 5);
    }

    #[test]
    fn epoch_caps_at_total() {
        let far = START + 1000 * EPOCH_SECONDS;
        assert_eq!(current_epoch(START, far), TOTAL_EPOCHS as u64);
    }

    #[test]
    fn claim_window_boundaries() {
        assert!(!claim_window_open(START, START - 1));
        assert!(claim_window_open(START, START));
        let deadline = claim_deadline(START);
        assert!(claim_window_open(START, deadline - 1));
        assert!(!claim_window_open(START, deadline));
    }

    #[test]
    fn expiry_is_strictly_after_deadline() {
        let deadline = exit_deadline(START);
        assert!(!has_expired(START, deadline));
        assert!(has_expired(START, deadline + 1));
        // Exit deadline sits EXIT_WINDOW_EPOCHS past the claim deadline.
        assert_eq!(
            deadline - claim_deadline(START),
            EXIT_WINDOW_EPOCHS * EPOCH_SECONDS
        );
    }
}
