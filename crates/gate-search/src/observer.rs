//! Search observer trait for progress reporting and instrumentation.
//!
//! Timing and statistics live *outside* the search contract: an observer sees
//! every scanned tick but cannot influence the result.

use gate_core::Tick;

/// Callbacks invoked by [`find_departure_with`][crate::find_departure_with]
/// at each step of the scan.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SearchObserver for ProgressPrinter {
///     fn on_step(&mut self, tick: Tick, blocked: bool) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: blocked={blocked}");
///         }
///     }
/// }
/// ```
pub trait SearchObserver {
    /// Called once per scanned departure tick with the step's outcome.
    fn on_step(&mut self, _tick: Tick, _blocked: bool) {}

    /// Called once when a feasible departure tick is found.
    /// `steps` is the total number of ticks scanned, including this one.
    fn on_done(&mut self, _departure: Tick, _steps: u64) {}
}

/// A [`SearchObserver`] that does nothing.  Use when you need to call the
/// observer variant but don't want callbacks.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

// ── SearchStats ───────────────────────────────────────────────────────────────

/// Counts scanned and blocked ticks; records the result when found.
#[derive(Debug, Default)]
pub struct SearchStats {
    /// Departure ticks scanned so far.
    pub steps: u64,
    /// How many of those were blocked by at least one signal.
    pub blocked_steps: u64,
    /// The feasible departure tick, once found.
    pub departure: Option<Tick>,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchObserver for SearchStats {
    fn on_step(&mut self, _tick: Tick, blocked: bool) {
        self.steps += 1;
        if blocked {
            self.blocked_steps += 1;
        }
    }

    fn on_done(&mut self, departure: Tick, _steps: u64) {
        self.departure = Some(departure);
    }
}
