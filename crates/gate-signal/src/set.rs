//! `CheckpointSet` — one composite signal per distinct period.
//!
//! # Why a map keyed by period
//!
//! Two gates with the same period block at (possibly different) phases of the
//! *same* cycle, so their signals OR together losslessly at insertion time.
//! The feasibility search then consults one signal per distinct period rather
//! than one per checkpoint.  The [`fold_periods`][CheckpointSet::fold_periods]
//! pass shrinks the map further by absorbing divisor periods into multiples.
//!
//! A `BTreeMap` (not a hash map) keeps the period keys in ascending order,
//! which the folding pass iterates smallest-first.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use gate_core::lcm_all;

use crate::{Checkpoint, PeriodicSignal};

/// All checkpoints of one run, collapsed to one `PeriodicSignal` per period.
///
/// Built once from the full descriptor list, optionally folded once, then
/// only read by the search.  Insertion order never affects the final
/// signals (OR-merge is commutative and associative).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckpointSet {
    pub(crate) by_period: BTreeMap<u64, PeriodicSignal>,
}

impl CheckpointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a checkpoint list.
    pub fn from_checkpoints(checkpoints: impl IntoIterator<Item = Checkpoint>) -> Self {
        let mut set = Self::new();
        for checkpoint in checkpoints {
            set.add(checkpoint);
        }
        set
    }

    /// Insert one checkpoint, OR-merging into any existing entry of the same
    /// period.  Invariant: each period appears at most once as a key.
    pub fn add(&mut self, checkpoint: Checkpoint) {
        let signal = PeriodicSignal::from_checkpoint(checkpoint);
        match self.by_period.entry(checkpoint.period()) {
            Entry::Occupied(mut entry) => {
                let merged = entry.get().merge(&signal);
                entry.insert(merged);
            }
            Entry::Vacant(entry) => {
                entry.insert(signal);
            }
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `(period, signal)` pairs, ascending by period.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &PeriodicSignal)> {
        self.by_period.iter().map(|(&p, s)| (p, s))
    }

    /// The composite signals, ascending by period.
    pub fn signals(&self) -> impl Iterator<Item = &PeriodicSignal> {
        self.by_period.values()
    }

    /// Distinct period keys, ascending.
    pub fn periods(&self) -> impl Iterator<Item = u64> + '_ {
        self.by_period.keys().copied()
    }

    /// Number of independent signals the search must consult per tick.
    pub fn len(&self) -> usize {
        self.by_period.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_period.is_empty()
    }

    /// LCM of all period keys — the tick count after which the blocked/open
    /// configuration repeats exactly.  `None` if the LCM overflows u64;
    /// `Some(1)` for an empty set.
    pub fn lcm_bound(&self) -> Option<u64> {
        lcm_all(self.periods())
    }
}
