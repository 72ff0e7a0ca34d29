//! The lock-step feasibility scan.

use gate_core::Tick;
use gate_signal::CheckpointSet;

use crate::{NoopObserver, SearchError, SearchObserver, SearchResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Find the minimal departure tick at which no signal in `set` blocks.
///
/// Scans t = 0, 1, 2, … and short-circuits each step on the first blocking
/// signal.  An empty set is trivially feasible at [`Tick::ZERO`].  The scan
/// is bounded by [`CheckpointSet::lcm_bound`]; exhausting the bound yields
/// [`SearchError::Infeasible`], and an overflowing bound yields
/// [`SearchError::BoundOverflow`].
pub fn find_departure(set: &CheckpointSet) -> SearchResult<Tick> {
    find_departure_with(set, &mut NoopObserver)
}

/// Like [`find_departure`], reporting every scanned tick to `observer`.
pub fn find_departure_with<O: SearchObserver>(
    set:      &CheckpointSet,
    observer: &mut O,
) -> SearchResult<Tick> {
    if set.is_empty() {
        observer.on_done(Tick::ZERO, 0);
        return Ok(Tick::ZERO);
    }
    let bound = set.lcm_bound().ok_or(SearchError::BoundOverflow)?;

    for t in 0..bound {
        let tick = Tick(t);
        let blocked = any_blocked(set, tick);
        observer.on_step(tick, blocked);
        if !blocked {
            observer.on_done(tick, t + 1);
            return Ok(tick);
        }
    }
    Err(SearchError::Infeasible { bound })
}

/// The unoptimized baseline: materialize every signal's state at each tick
/// and then test for any blocked, with no per-step short-circuiting.
///
/// Same outcome as [`find_departure`] on the same set; kept as the reference
/// the short-circuit path and the folded-set path are checked against.
pub fn find_departure_exhaustive(set: &CheckpointSet) -> SearchResult<Tick> {
    if set.is_empty() {
        return Ok(Tick::ZERO);
    }
    let bound = set.lcm_bound().ok_or(SearchError::BoundOverflow)?;

    for t in 0..bound {
        let tick = Tick(t);
        let states: Vec<bool> = set.signals().map(|s| s.blocked_at(tick)).collect();
        if !states.contains(&true) {
            return Ok(tick);
        }
    }
    Err(SearchError::Infeasible { bound })
}

// ── Per-tick evaluation ───────────────────────────────────────────────────────

#[cfg(not(feature = "parallel"))]
#[inline]
fn any_blocked(set: &CheckpointSet, tick: Tick) -> bool {
    set.signals().any(|s| s.blocked_at(tick))
}

#[cfg(feature = "parallel")]
#[inline]
fn any_blocked(set: &CheckpointSet, tick: Tick) -> bool {
    use rayon::iter::{ParallelBridge, ParallelIterator};

    set.signals().par_bridge().any(|s| s.blocked_at(tick))
}
