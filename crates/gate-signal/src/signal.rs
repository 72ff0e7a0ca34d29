//! `PeriodicSignal` — a fixed-length boolean blocking cycle.
//!
//! Index `i` of the cycle answers "is the gate blocked at any tick `t` with
//! `t % period == i`".  Periodicity is the defining property: `blocked_at`
//! holds for every non-negative tick, not just ticks below the cycle length.
//!
//! A freshly built single-checkpoint signal has exactly one blocked slot (the
//! checkpoint's [`phase`][crate::Checkpoint::phase]).  Composite signals
//! produced by [`merge`][PeriodicSignal::merge] carry the OR of every
//! contributing checkpoint's slot and may have zero or more blocked slots.

use gate_core::Tick;

use crate::Checkpoint;

/// A periodic blocking pattern of fixed cycle length.
///
/// Invariant: the cycle is never empty (every constructor guarantees at
/// least one slot).  The serde representation is the bare slot vector, and
/// deserialization re-checks the invariant rather than trusting the input.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<bool>", into = "Vec<bool>")
)]
pub struct PeriodicSignal {
    /// `slots[i]` == blocked at every tick `t` with `t % len == i`.
    slots: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<Vec<bool>> for PeriodicSignal {
    type Error = crate::SignalError;

    fn try_from(slots: Vec<bool>) -> Result<Self, Self::Error> {
        if slots.is_empty() {
            return Err(crate::SignalError::EmptyCycle);
        }
        Ok(Self { slots })
    }
}

#[cfg(feature = "serde")]
impl From<PeriodicSignal> for Vec<bool> {
    fn from(signal: PeriodicSignal) -> Self {
        signal.slots
    }
}

impl PeriodicSignal {
    /// Build the signal for a single checkpoint: one blocked slot at its phase.
    pub fn from_checkpoint(checkpoint: Checkpoint) -> Self {
        let mut slots = vec![false; checkpoint.period() as usize];
        slots[checkpoint.phase() as usize] = true;
        Self { slots }
    }

    /// Cycle length in ticks.
    #[inline]
    pub fn period(&self) -> u64 {
        self.slots.len() as u64
    }

    /// Is the gate blocked at tick `t`?  Valid for all `t`, arbitrarily far
    /// beyond one cycle.
    #[inline]
    pub fn blocked_at(&self, tick: Tick) -> bool {
        self.slots[(tick.0 % self.period()) as usize]
    }

    /// `true` if at least one slot blocks.
    pub fn is_ever_blocked(&self) -> bool {
        self.slots.iter().any(|&b| b)
    }

    /// The blocked slot indices, ascending.
    pub fn blocked_slots(&self) -> impl Iterator<Item = u64> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(|(i, _)| i as u64)
    }

    /// Repeat this signal's pattern out to `target` ticks.
    ///
    /// `target` must be a positive multiple of `self.period()`; tiling to a
    /// non-multiple would change which ticks the signal blocks.
    pub fn tiled(&self, target: u64) -> Self {
        debug_assert!(
            target >= self.period() && target % self.period() == 0,
            "tile target {target} is not a multiple of period {}",
            self.period()
        );
        Self {
            slots: self.slots.iter().copied().cycle().take(target as usize).collect(),
        }
    }

    /// Combine two signals whose longer period is a multiple of the shorter.
    ///
    /// The shorter signal is tiled to the longer length, then the two are
    /// OR-ed slot-wise.  The result blocks at tick `t` iff either input
    /// blocks at `t` — which is why the operation is commutative and
    /// associative.
    pub fn merge(&self, other: &Self) -> Self {
        let (short, long) = if self.period() <= other.period() {
            (self, other)
        } else {
            (other, self)
        };
        let tiled = short.tiled(long.period());
        Self {
            slots: long
                .slots
                .iter()
                .zip(tiled.slots)
                .map(|(&a, b)| a || b)
                .collect(),
        }
    }
}
