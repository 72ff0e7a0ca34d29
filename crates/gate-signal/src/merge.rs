//! Period folding — absorb divisor-period signals into multiple-period ones.
//!
//! # Why this exists
//!
//! A signal with period `L` repeats identically when tiled to any multiple
//! `k·L`, so its constraint can be OR-ed into an existing entry at `k·L` and
//! its own entry dropped.  Every fold removes one signal from the set the
//! search consults on *every* tick, and the fold itself runs once.
//!
//! # Pass shape
//!
//! One ascending scan over the period keys.  Each period folds into the
//! *smallest* present multiple and stops looking; periods with no present
//! multiple stay.  The scan is not iterated to a fixed point: a fold only
//! ever moves blocking slots *into* a surviving entry, so the union of
//! blocked ticks is preserved no matter how many foldable pairs remain.
//! Whether the pass leaves the fewest possible entries is irrelevant to
//! correctness, and the brute-vs-folded search equivalence is pinned by
//! tests in `gate-search`.

use crate::CheckpointSet;

impl CheckpointSet {
    /// Fold every signal whose period has a larger multiple present in the
    /// set into that multiple's entry.  Returns the number of entries folded
    /// away.
    ///
    /// Idempotent: a second call finds nothing left to fold.  (After one
    /// pass, any still-foldable pair would need a key to have survived with
    /// a present multiple — but every such key was visited and folded when
    /// the scan reached it; keys are only ever removed, never added.)
    pub fn fold_periods(&mut self) -> usize {
        let Some(max_period) = self.by_period.keys().next_back().copied() else {
            return 0;
        };
        let periods: Vec<u64> = self.periods().collect();
        let mut folded = 0;

        for period in periods {
            // Smallest strict multiple of `period` present as a key.
            let host = (2u64..)
                .map_while(|k| period.checked_mul(k))
                .take_while(|&m| m <= max_period)
                .find(|m| self.by_period.contains_key(m));
            let Some(host) = host else { continue };

            let Some(signal) = self.by_period.remove(&period) else { continue };
            if let Some(entry) = self.by_period.get_mut(&host) {
                *entry = entry.merge(&signal);
                folded += 1;
            }
        }
        folded
    }
}
