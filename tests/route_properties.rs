use proptest::prelude::*;
use tsp_anneal::distance::{DistanceProvider, EuclideanDistance, Point};
use tsp_anneal::optimizer::delta::reversal_delta;
use tsp_anneal::route::Route;

// --- STRATEGIES ---

prop_compose! {
    fn arb_points(max: usize)(
        coords in prop::collection::vec((-500.0..500.0f64, -500.0..500.0f64), 2..max)
    ) -> Vec<Point> {
        coords.into_iter().map(|(x, y)| Point::new(x, y)).collect()
    }
}

prop_compose! {
    fn arb_instance(max: usize)(points in arb_points(max), seed in any::<u64>()) -> (EuclideanDistance, Route) {
        let n = points.len();
        let route = Route::random(n, &mut fastrand::Rng::with_seed(seed));
        (EuclideanDistance::new(points), route)
    }
}

fn segment(n: usize, a: usize, b: usize) -> (usize, usize) {
    let (a, b) = (a % n, b % n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

proptest! {
    #[test]
    fn prop_random_route_is_permutation(n in 0usize..200, seed in any::<u64>()) {
        let route = Route::random(n, &mut fastrand::Rng::with_seed(seed));
        prop_assert!(Route::from_cities(route.clone().into_cities()).is_ok());
        prop_assert_eq!(route.len(), n);
    }

    #[test]
    fn prop_reversal_is_involution((provider, route) in arb_instance(40), a in any::<usize>(), b in any::<usize>()) {
        let (start, end) = segment(route.len(), a, b);
        let mut moved = route.clone();
        moved.reverse_segment(start, end);
        prop_assert!(Route::from_cities(moved.cities().to_vec()).is_ok());
        moved.reverse_segment(start, end);
        prop_assert_eq!(&moved, &route);
        prop_assert_eq!(provider.city_count(), route.len());
    }

    #[test]
    fn prop_length_is_rotation_invariant((provider, route) in arb_instance(40), shift in any::<usize>()) {
        let mut cities = route.cities().to_vec();
        let k = shift % cities.len();
        cities.rotate_left(k);
        let rotated = Route::from_cities(cities).unwrap();
        let a = route.length(&provider);
        let b = rotated.length(&provider);
        prop_assert!((a - b).abs() <= 1e-9 * a.max(1.0), "{} vs {}", a, b);
    }

    #[test]
    fn prop_length_is_direction_invariant((provider, route) in arb_instance(40)) {
        let mut cities = route.cities().to_vec();
        cities.reverse();
        let reversed = Route::from_cities(cities).unwrap();
        let a = route.length(&provider);
        let b = reversed.length(&provider);
        prop_assert!((a - b).abs() <= 1e-9 * a.max(1.0));
    }

    #[test]
    fn prop_delta_matches_full_recompute((provider, route) in arb_instance(40), a in any::<usize>(), b in any::<usize>()) {
        let (start, end) = segment(route.len(), a, b);
        let before = route.length(&provider);
        let mut moved = route.clone();
        moved.reverse_segment(start, end);
        let expected = moved.length(&provider) - before;
        let got = reversal_delta(route.cities(), &provider, start, end);
        prop_assert!((expected - got).abs() <= 1e-7 * before.max(1.0), "expected {} got {}", expected, got);
    }
}
