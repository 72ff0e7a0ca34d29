//! `gate-search` — the lock-step departure-time feasibility search.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`search`]   | `find_departure`, `find_departure_with`, `find_departure_exhaustive` |
//! | [`observer`] | `SearchObserver` trait, `NoopObserver`, `SearchStats`      |
//! | [`error`]    | `SearchError`, `SearchResult<T>`                           |
//!
//! # Search model (summary)
//!
//! For departure tick t = 0, 1, 2, … consult every composite signal in the
//! [`CheckpointSet`][gate_signal::CheckpointSet]; the first t at which no
//! signal blocks is the answer.  The scan is bounded by the LCM of all
//! periods: beyond it the blocked/open configuration repeats exactly, so a
//! set with no feasible tick inside one LCM cycle has none at all and the
//! search reports [`SearchError::Infeasible`] instead of spinning.

pub mod error;
pub mod observer;
pub mod search;


pub use error::{SearchError, SearchResult};
pub use observer::{NoopObserver, SearchObserver, SearchStats};
pub use search::{find_departure, find_departure_exhaustive, find_departure_with};
