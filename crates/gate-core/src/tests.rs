//! Unit tests for gate-core primitives.

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick::ZERO.offset(7), Tick(7));
    }

    #[test]
    fn ordering() {
        assert!(Tick(0) < Tick(1));
        assert!(Tick(100) > Tick(99));
    }

    #[test]
    fn display() {
        assert_eq!(Tick(42).to_string(), "T42");
    }
}

#[cfg(test)]
mod math {
    use crate::{gcd, lcm, lcm_all};

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(12, 8), 4);
        assert_eq!(gcd(8, 12), 4);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(5, 0), 5);
    }

    #[test]
    fn lcm_basics() {
        assert_eq!(lcm(4, 6), Some(12));
        assert_eq!(lcm(2, 2), Some(2));
        assert_eq!(lcm(0, 9), Some(0));
    }

    #[test]
    fn lcm_overflow_is_none() {
        // Two large coprime values whose product exceeds u64.
        assert_eq!(lcm(u64::MAX, u64::MAX - 1), None);
    }

    #[test]
    fn lcm_all_over_periods() {
        // Canonical gate periods from the reference checkpoint list.
        assert_eq!(lcm_all([2, 4, 6]), Some(12));
        assert_eq!(lcm_all([4, 2, 6, 6]), Some(12));
    }

    #[test]
    fn lcm_all_empty_is_one() {
        assert_eq!(lcm_all(Vec::<u64>::new()), Some(1));
    }
}
