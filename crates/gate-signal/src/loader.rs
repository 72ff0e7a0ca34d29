//! Line-oriented checkpoint descriptor loader.
//!
//! # Format
//!
//! One descriptor per line, `<position>: <height>`, both non-negative
//! integers.  Blank lines are skipped; surrounding whitespace is tolerated.
//!
//! ```text
//! 0: 3
//! 1: 2
//! 4: 4
//! 6: 4
//! ```
//!
//! Line order is irrelevant to the eventual search result — the composite
//! per-period signals are the same whatever order descriptors arrive in.
//!
//! Malformed input (missing colon, non-integer field, height < 2) fails
//! immediately with the offending line number; the descriptor list is static,
//! so there is nothing to retry.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::{Checkpoint, SignalError, SignalResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load checkpoint descriptors from a file.
pub fn load_checkpoints_path(path: &Path) -> SignalResult<Vec<Checkpoint>> {
    let file = std::fs::File::open(path)?;
    load_checkpoints_reader(file)
}

/// Like [`load_checkpoints_path`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedded descriptor
/// text.
pub fn load_checkpoints_reader<R: Read>(reader: R) -> SignalResult<Vec<Checkpoint>> {
    let mut checkpoints = Vec::new();

    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Some((position, height)) = trimmed.split_once(':') else {
            return Err(SignalError::Parse {
                line: lineno,
                msg:  format!("expected \"<position>: <height>\", got {trimmed:?}"),
            });
        };
        let position = parse_field(position, "position", lineno)?;
        let height = parse_field(height, "height", lineno)?;

        checkpoints.push(Checkpoint::new(position, height)?);
    }

    Ok(checkpoints)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_field(raw: &str, what: &str, lineno: usize) -> SignalResult<u64> {
    raw.trim().parse::<u64>().map_err(|e| SignalError::Parse {
        line: lineno,
        msg:  format!("invalid {what} {:?}: {e}", raw.trim()),
    })
}
