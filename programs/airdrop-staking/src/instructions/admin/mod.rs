//! Authority-gated instructions.

pub mod backfill_snapshot;
pub mod close_pool;
pub mod pause;
pub mod recover_residual;
pub mod terminate;
pub mod unpause;

pub use backfill_snapshot::*;
pub use close_pool::*;
pub use pause::*;
pub use recover_residual::*;
pub use terminate::*;
pub use unpause::*;
