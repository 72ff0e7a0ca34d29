//! `gate-core` — foundational types for the `rust_gate` transit toolkit.
//!
//! This crate is a dependency of every other `gate-*` crate.  It intentionally
//! has no `gate-*` dependencies and no mandatory external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                      |
//! |-----------|-----------------------------------------------|
//! | [`time`]  | `Tick` — the integer time-step counter        |
//! | [`math`]  | `gcd`, `lcm`, `lcm_all` (checked arithmetic)  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod math;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use math::{gcd, lcm, lcm_all};
pub use time::Tick;
