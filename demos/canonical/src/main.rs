//! canonical — smallest demo for the rust_gate toolkit.
//!
//! Runs the reference four-checkpoint list (answer: depart at tick 10)
//! through both search variants and reports timings: the exhaustive
//! baseline on the unfolded signal set, then the short-circuit search on
//! the folded set.  Pass a descriptor file path to run your own list:
//!
//! ```text
//! cargo run -p canonical -- path/to/checkpoints.txt
//! ```

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use gate_search::{SearchStats, find_departure_exhaustive, find_departure_with};
use gate_signal::{CheckpointSet, load_checkpoints_path, load_checkpoints_reader};

// ── Embedded descriptor list ──────────────────────────────────────────────────

// position: height — periods {4, 2, 6, 6}.
const CANONICAL: &str = "\
0: 3\n\
1: 2\n\
4: 4\n\
6: 4\n\
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== canonical — rust_gate departure search ===");
    println!();

    // 1. Load descriptors (embedded list, or a file if given).
    let checkpoints = match std::env::args().nth(1) {
        Some(path) => load_checkpoints_path(Path::new(&path))?,
        None => load_checkpoints_reader(Cursor::new(CANONICAL))?,
    };
    println!("Loaded {} checkpoint descriptors", checkpoints.len());

    // 2. Build the per-period signal set.
    let set = CheckpointSet::from_checkpoints(checkpoints);
    println!(
        "Signal set: {} composite signals, periods {:?}, LCM bound {:?}",
        set.len(),
        set.periods().collect::<Vec<_>>(),
        set.lcm_bound()
    );

    // 3. Exhaustive baseline on the unfolded set.
    let t0 = Instant::now();
    let baseline = find_departure_exhaustive(&set)?;
    let baseline_elapsed = t0.elapsed();

    // 4. Fold divisor periods, then run the short-circuit search.
    let mut folded = set.clone();
    let removed = folded.fold_periods();
    println!(
        "Folded {} entr{} away; {} signal(s) remain, periods {:?}",
        removed,
        if removed == 1 { "y" } else { "ies" },
        folded.len(),
        folded.periods().collect::<Vec<_>>()
    );

    let mut stats = SearchStats::new();
    let t1 = Instant::now();
    let departure = find_departure_with(&folded, &mut stats)?;
    let folded_elapsed = t1.elapsed();

    // 5. Summary.
    println!();
    println!("{:<28} {:<10} {:>12}", "Variant", "Departure", "Elapsed");
    println!("{}", "-".repeat(52));
    println!(
        "{:<28} {:<10} {:>9.3} µs",
        "exhaustive (unfolded)",
        baseline.to_string(),
        baseline_elapsed.as_secs_f64() * 1e6
    );
    println!(
        "{:<28} {:<10} {:>9.3} µs",
        "short-circuit (folded)",
        departure.to_string(),
        folded_elapsed.as_secs_f64() * 1e6
    );
    println!();
    println!(
        "Scanned {} ticks ({} blocked) against the folded set",
        stats.steps, stats.blocked_steps
    );

    anyhow::ensure!(
        baseline == departure,
        "search variants disagree: {baseline} vs {departure}"
    );
    println!("Depart at {departure}");

    Ok(())
}
