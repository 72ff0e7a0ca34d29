//! `gate-signal` — checkpoint descriptors, periodic blocking signals, and the
//! period-folding optimization pass.
//!
//! # Crate layout
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`checkpoint`] | `Checkpoint` descriptor (position, height, period, phase) |
//! | [`signal`]     | `PeriodicSignal` — fixed-length boolean blocking cycle |
//! | [`set`]        | `CheckpointSet` — one composite signal per period      |
//! | [`merge`]      | `CheckpointSet::fold_periods` — divisor-period folding |
//! | [`loader`]     | `load_checkpoints_reader`, `load_checkpoints_path`     |
//! | [`error`]      | `SignalError`, `SignalResult<T>`                       |
//!
//! # Cycle model (summary)
//!
//! Every checkpoint blocks periodically.  A gate of height `h` has period
//! `2 * (h - 1)` ticks, and a token passing position `p` is blocked exactly
//! when its arrival tick satisfies:
//!
//! ```text
//! (departure + p) % period == 0
//! ```
//!
//! `PeriodicSignal` re-expresses that as a departure-time phase so that all
//! checkpoints can be consulted in lock-step:
//!
//! ```text
//! blocked_at(t)  ⇔  t % period == (-p) mod period
//! ```

pub mod checkpoint;
pub mod error;
pub mod loader;
pub mod merge;
pub mod set;
pub mod signal;


pub use checkpoint::Checkpoint;
pub use error::{SignalError, SignalResult};
pub use loader::{load_checkpoints_path, load_checkpoints_reader};
pub use set::CheckpointSet;
pub use signal::PeriodicSignal;
