//! The `Checkpoint` descriptor: one periodically blocking gate on the path.
//!
//! # Period model
//!
//! A gate of height `h` sweeps its blocking element down and back up across
//! `h` slots, so it returns to the blocking slot every `2 * (h - 1)` ticks.
//! Height 2 is the smallest meaningful gate (period 2); height 1 would block
//! on every tick and is rejected at construction.

use crate::{SignalError, SignalResult};

/// One checkpoint descriptor: where it sits on the path and how tall it is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Checkpoint {
    position: u64,
    height:   u64,
}

impl Checkpoint {
    /// Construct a checkpoint, rejecting `height < 2` and any height whose
    /// derived period `2 * (height - 1)` would not fit in u64.
    pub fn new(position: u64, height: u64) -> SignalResult<Self> {
        if height < 2 {
            return Err(SignalError::InvalidHeight { position, height });
        }
        if height - 1 > u64::MAX / 2 {
            return Err(SignalError::PeriodOverflow { position, height });
        }
        Ok(Self { position, height })
    }

    /// Path position: a token departing at tick `t` arrives here at `t + position`.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    #[inline]
    pub fn height(&self) -> u64 {
        self.height
    }

    /// Ticks for the blocking element to return to the blocking slot.
    ///
    /// Never overflows: [`Checkpoint::new`] rejects heights with
    /// `2 * (height - 1) > u64::MAX`.
    #[inline]
    pub fn period(&self) -> u64 {
        2 * (self.height - 1)
    }

    /// Departure-time phase at which this gate blocks: `(-position) mod period`.
    ///
    /// Computed as an explicit non-negative remainder.  A naive
    /// `-position % period` would need signed arithmetic and, in languages
    /// whose `%` follows the dividend's sign, yields a negative result — the
    /// wrap-around here keeps the phase in `0..period` by construction.
    #[inline]
    pub fn phase(&self) -> u64 {
        let period = self.period();
        (period - self.position % period) % period
    }
}
