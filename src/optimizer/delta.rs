use crate::distance::DistanceProvider;

/// Length change from reversing `route[start..=end]`, priced from the two
/// boundary edges only.
///
/// Only valid for symmetric providers: reversal flips the direction of every
/// interior edge, which is free when `d(a, b) == d(b, a)`.
#[inline(always)]
pub fn reversal_delta<P: DistanceProvider + ?Sized>(
    route: &[usize],
    provider: &P,
    start: usize,
    end: usize,
) -> f64 {
    let n = route.len();
    if n < 2 || start == end {
        return 0.0;
    }
    // reversing n-1 or n cities of a cycle only flips its direction
    if end - start + 1 >= n - 1 {
        return 0.0;
    }

    let prev = route[if start == 0 { n - 1 } else { start - 1 }];
    let next = route[if end == n - 1 { 0 } else { end + 1 }];
    let first = route[start];
    let last = route[end];

    let removed = provider.distance(prev, first) + provider.distance(last, next);
    let added = provider.distance(prev, last) + provider.distance(first, next);
    added - removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{EuclideanDistance, Point};
    use crate::route::Route;
    use fastrand::Rng;

    fn scattered(n: usize, seed: u64) -> EuclideanDistance {
        let mut rng = Rng::with_seed(seed);
        EuclideanDistance::new(
            (0..n)
                .map(|_| Point::new(rng.f64() * 100.0, rng.f64() * 100.0))
                .collect(),
        )
    }

    #[test]
    fn test_matches_full_recompute_on_every_segment() {
        let provider = scattered(9, 3);
        let route = Route::random(9, &mut Rng::with_seed(11));
        let base = route.length(&provider);

        for start in 0..9 {
            for end in start..9 {
                let mut moved = route.clone();
                moved.reverse_segment(start, end);
                let expected = moved.length(&provider) - base;
                let got = reversal_delta(route.cities(), &provider, start, end);
                assert!(
                    (expected - got).abs() < 1e-9,
                    "[{}, {}]: expected {}, got {}",
                    start,
                    end,
                    expected,
                    got
                );
            }
        }
    }

    #[test]
    fn test_wrapping_segment_at_front() {
        let provider = scattered(5, 8);
        let route = Route::identity(5);
        let mut moved = route.clone();
        moved.reverse_segment(0, 2);
        let expected = moved.length(&provider) - route.length(&provider);
        let got = reversal_delta(route.cities(), &provider, 0, 2);
        assert!((expected - got).abs() < 1e-9);
    }

    #[test]
    fn test_tiny_tours_never_change() {
        let provider = scattered(3, 1);
        let route = Route::identity(3);
        assert_eq!(reversal_delta(route.cities(), &provider, 0, 1), 0.0);
        assert_eq!(reversal_delta(route.cities(), &provider, 0, 2), 0.0);
    }
}
