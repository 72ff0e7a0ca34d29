//! Greatest-common-divisor / least-common-multiple helpers.
//!
//! The feasibility search terminates at the LCM of all gate periods (beyond
//! it the blocked/open configuration repeats), so the LCM must be computed
//! with *checked* arithmetic: an overflowing bound is reported to the caller
//! as `None` rather than wrapping silently into a bogus — possibly tiny —
//! scan limit.

/// Greatest common divisor (Euclid).  `gcd(0, n) == n`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple, `None` on u64 overflow.  `lcm(0, n) == Some(0)`.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// LCM over an iterator, `None` on overflow.  Empty input yields `Some(1)`.
pub fn lcm_all(periods: impl IntoIterator<Item = u64>) -> Option<u64> {
    periods.into_iter().try_fold(1u64, lcm)
}
