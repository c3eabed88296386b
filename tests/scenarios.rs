use rstest::rstest;
use tsp_anneal::api::{solve_annealing, solve_nearest_neighbor, Problem};
use tsp_anneal::config::{AnnealParams, InitialTour};
use tsp_anneal::distance::{DistanceMatrix, Point};
use tsp_anneal::optimizer::SilentProgress;

fn square() -> Problem {
    Problem::from_points(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ])
}

fn circle(n: usize) -> Problem {
    Problem::from_points(
        (0..n)
            .map(|i| {
                let a = i as f64 / n as f64 * std::f64::consts::TAU;
                Point::new(100.0 * a.cos(), 100.0 * a.sin())
            })
            .collect(),
    )
}

#[test]
fn test_nearest_neighbor_square() {
    let s = solve_nearest_neighbor(&square(), 0).unwrap();
    assert_eq!(s.route.cities(), &[0, 1, 2, 3]);
    assert!((s.length - 40.0).abs() < 1e-9);
}

#[test]
fn test_three_city_matrix_any_tour_is_optimal() {
    let m = DistanceMatrix::from_rows(vec![
        vec![0.0, 1.0, 2.0],
        vec![1.0, 0.0, 1.0],
        vec![2.0, 1.0, 0.0],
    ])
    .unwrap();
    let problem = Problem::from_matrix(m);
    let s = solve_annealing(
        &problem,
        &AnnealParams::new(100.0, 0.9, 50),
        InitialTour::Random,
        Some(11),
        SilentProgress,
    )
    .unwrap();
    assert_eq!(s.length, 4.0);
    assert_eq!(s.stats.as_ref().unwrap().temperature_steps, 44);
}

#[test]
fn test_single_city_runs_no_trials() {
    let problem = Problem::from_points(vec![Point::new(3.0, 3.0)]);
    let s = solve_annealing(
        &problem,
        &AnnealParams::default(),
        InitialTour::Random,
        None,
        SilentProgress,
    )
    .unwrap();
    assert_eq!(s.route.cities(), &[0]);
    assert_eq!(s.length, 0.0);
    let stats = s.stats.unwrap();
    assert_eq!(stats.trials, 0);
    assert_eq!(stats.temperature_steps, 0);
}

#[test]
fn test_two_cities_out_and_back() {
    let problem = Problem::from_points(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
    let s = solve_annealing(
        &problem,
        &AnnealParams::new(10.0, 0.5, 10),
        InitialTour::Random,
        Some(2),
        SilentProgress,
    )
    .unwrap();
    assert_eq!(s.length, 10.0);

    let nn = solve_nearest_neighbor(&problem, 1).unwrap();
    assert_eq!(nn.route.cities(), &[1, 0]);
    assert_eq!(nn.length, 10.0);
}

#[rstest]
#[case(100.0, 0.9, 1.0, 44)]
#[case(50.0, 0.5, 1.0, 6)]
#[case(1000.0, 0.95, 0.5, 149)]
#[case(10_000.0, 0.999, 1.0, 9206)]
fn test_expected_temperature_steps(
    #[case] t0: f64,
    #[case] rate: f64,
    #[case] floor: f64,
    #[case] expected: usize,
) {
    let params = AnnealParams::new(t0, rate, 1).with_floor(floor);
    assert_eq!(params.expected_steps(), expected);
}

#[rstest]
#[case(InitialTour::Random, 1)]
#[case(InitialTour::Random, 99)]
#[case(InitialTour::NearestNeighbor, 1)]
#[case(InitialTour::NearestNeighbor, 99)]
fn test_best_never_exceeds_initial(#[case] init: InitialTour, #[case] seed: u64) {
    let problem = circle(25);
    let s = solve_annealing(
        &problem,
        &AnnealParams::new(50.0, 0.9, 500),
        init,
        Some(seed),
        SilentProgress,
    )
    .unwrap();
    assert!(s.length <= s.initial_length + 1e-9);
    assert!(tsp_anneal::route::Route::from_cities(s.route.cities().to_vec()).is_ok());
}

#[test]
fn test_annealing_improves_shuffled_circle() {
    let problem = circle(20);
    let s = solve_annealing(
        &problem,
        &AnnealParams::new(100.0, 0.95, 2_000).with_floor(0.01),
        InitialTour::Random,
        Some(5),
        SilentProgress,
    )
    .unwrap();
    // the 20-gon perimeter is 2 * 20 * 100 * sin(pi / 20)
    let optimum = 2.0 * 20.0 * 100.0 * (std::f64::consts::PI / 20.0).sin();
    assert!(s.length < s.initial_length);
    assert!(s.length <= optimum * 1.05, "{} vs optimum {}", s.length, optimum);
}
