//! Transit time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  One
//! tick is one traversal step: a token that departs at `Tick(t)` reaches the
//! checkpoint at path position `p` at `Tick(t + p)`.
//!
//! Using an integer tick as the canonical time unit means all periodic-phase
//! arithmetic is exact (no floating-point drift) and comparisons are O(1).

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute time-step counter.
///
/// Stored as `u64`: the feasibility search is bounded by the LCM of all gate
/// periods, which for any realistic checkpoint list fits comfortably.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    ///
    /// For a token departing at `self`, `offset(p)` is its arrival tick at
    /// path position `p`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
