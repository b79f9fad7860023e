//! Property tests for the sieve and the distribution analyzer.

use primes_analysis::{analyze, distribution};
use proptest::prelude::*;

fn is_prime(n: u64) -> bool {
    n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

proptest! {
    #[test]
    fn below_two_is_always_empty(bound in i64::MIN..2) {
        let r = analyze(bound);
        prop_assert_eq!(r.prime_count, 0);
        prop_assert!(r.primes.is_empty());
        prop_assert!(r.twin_primes.is_empty());
        prop_assert!(r.gaps.is_empty());
        prop_assert_eq!(r.gap_stats.min, 0);
        prop_assert_eq!(r.gap_stats.max, 0);
        prop_assert_eq!(r.gap_stats.average, 0.0);
    }

    #[test]
    fn primes_are_exactly_the_primes_up_to_bound(bound in 2i64..4_000) {
        let r = analyze(bound);
        let expected: Vec<u64> = (2..=bound as u64).filter(|&n| is_prime(n)).collect();
        prop_assert_eq!(&r.primes, &expected);
        prop_assert_eq!(r.prime_count, expected.len());
    }

    #[test]
    fn histogram_sums_to_gap_count(bound in 3i64..20_000) {
        let r = analyze(bound);
        prop_assert_eq!(r.gaps.total(), (r.prime_count - 1) as u64);
    }

    #[test]
    fn gap_statistics_are_ordered(bound in 3i64..20_000) {
        let r = analyze(bound);
        let s = r.gap_stats;
        prop_assert!(s.min >= 1);
        prop_assert!(s.min as f64 <= s.average);
        prop_assert!(s.average <= s.max as f64);
        prop_assert_eq!(r.gaps.get(s.max).map(|c| c > 0), Some(true));
        prop_assert_eq!(r.gaps.get(s.min).map(|c| c > 0), Some(true));
    }

    #[test]
    fn twins_are_adjacent_and_ascending(bound in 2i64..20_000) {
        let r = analyze(bound);
        for pair in &r.twin_primes {
            prop_assert_eq!(pair.second(), pair.first() + 2);
            prop_assert!(is_prime(pair.first()) && is_prime(pair.second()));
        }
        prop_assert!(r.twin_primes.windows(2).all(|w| w[0].first() < w[1].first()));
        prop_assert_eq!(r.twin_primes.len() as u64, r.gaps.get(2).unwrap_or(0));
    }

    #[test]
    fn buckets_cover_every_prime(bound in 2i64..20_000, min in 1usize..20, extra in 0usize..40) {
        let r = analyze(bound);
        let buckets = distribution::bucketize(&r.primes, r.bound, min, min + extra);
        let counted: usize = buckets.iter().map(|b| b.count).sum();
        prop_assert_eq!(counted, r.prime_count);
        prop_assert_eq!(buckets.last().map(|b| b.end), Some(bound as u64));
        prop_assert!(buckets.len() <= min + extra);
    }
}
