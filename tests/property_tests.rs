//! Property-based tests for u-tsp-brute.
//!
//! Uses proptest to check search invariants across random city sets.

use proptest::prelude::*;
use u_tsp_brute::distance::{cycle_cost, DistanceMatrix};
use u_tsp_brute::models::City;
use u_tsp_brute::search::{
    enumerate, enumerate_parallel, enumerate_with_sink, route_count, Enumerator, SearchConfig,
    SearchMode,
};
use u_tsp_brute::TspResult;

// ============================================================================
// Instance Generation Strategies
// ============================================================================

fn cities_from(coords: Vec<(f64, f64)>) -> Vec<City> {
    coords
        .into_iter()
        .enumerate()
        .map(|(i, (x, y))| City::new((i + 1).to_string(), x, y).unwrap())
        .collect()
}

/// Random city sets small enough to enumerate exhaustively.
fn random_cities(max: usize) -> impl Strategy<Value = Vec<City>> {
    (1usize..=max)
        .prop_flat_map(|n| prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), n))
        .prop_map(cities_from)
}

// ============================================================================
// Enumeration Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(40))]

    #[test]
    fn prop_collect_all_generates_factorial_routes(cities in random_cities(7)) {
        let result = enumerate(&cities, SearchMode::CollectAll).unwrap();
        let all = result.all_routes().unwrap();
        prop_assert_eq!(all.len() as u64, route_count(cities.len()));
        prop_assert_eq!(result.evaluated(), route_count(cities.len()));
    }

    #[test]
    fn prop_every_route_is_anchored_permutation(cities in random_cities(6)) {
        let n = cities.len();
        let result = enumerate(&cities, SearchMode::CollectAll).unwrap();
        for route in result.all_routes().unwrap() {
            prop_assert!(route.is_permutation_of(n));
            prop_assert_eq!(route.order()[0], 0);
        }
        let mut orders: Vec<Vec<usize>> = result
            .all_routes()
            .unwrap()
            .iter()
            .map(|r| r.order().to_vec())
            .collect();
        orders.dedup();
        prop_assert_eq!(orders.len() as u64, route_count(n));
    }

    #[test]
    fn prop_min_route_is_minimal(cities in random_cities(7)) {
        let result = enumerate(&cities, SearchMode::CollectAll).unwrap();
        for route in result.all_routes().unwrap() {
            prop_assert!(result.min_cost() <= route.cost());
        }
    }

    #[test]
    fn prop_min_route_is_first_minimum(cities in random_cities(6)) {
        let result = enumerate(&cities, SearchMode::CollectAll).unwrap();
        let all = result.all_routes().unwrap();
        let first = all
            .iter()
            .find(|r| r.cost() == result.min_cost())
            .unwrap();
        prop_assert_eq!(first, result.min_route());
    }

    #[test]
    fn prop_reported_cost_matches_cost_model(cities in random_cities(6)) {
        let result = enumerate(&cities, SearchMode::MinOnly).unwrap();
        let route = result.min_route().cities(&cities);
        prop_assert_eq!(cycle_cost(&route), result.min_cost());
    }

    #[test]
    fn prop_cycle_cost_rotation_and_reversal_invariant(
        cities in random_cities(9),
        shift in 0usize..9
    ) {
        let refs: Vec<&City> = cities.iter().collect();
        let base = cycle_cost(&refs);

        let mut rotated = refs.clone();
        rotated.rotate_left(shift % refs.len());
        prop_assert!((cycle_cost(&rotated) - base).abs() < 1e-9);

        let mut reversed = refs.clone();
        reversed.reverse();
        prop_assert!((cycle_cost(&reversed) - base).abs() < 1e-9);
    }

    #[test]
    fn prop_deterministic(cities in random_cities(6)) {
        let a = enumerate(&cities, SearchMode::MinOnly).unwrap();
        let b = enumerate(&cities, SearchMode::MinOnly).unwrap();
        prop_assert_eq!(a.min_cost(), b.min_cost());
        prop_assert_eq!(a.min_route(), b.min_route());
    }

    #[test]
    fn prop_stream_matches_collect_all(cities in random_cities(6)) {
        let collected = enumerate(&cities, SearchMode::CollectAll).unwrap();
        let mut streamed: Vec<(Vec<usize>, f64)> = Vec::new();
        let mut sink = |order: &[usize], cost: f64| -> TspResult<()> {
            streamed.push((order.to_vec(), cost));
            Ok(())
        };
        let result = enumerate_with_sink(&cities, &mut sink).unwrap();
        let expected: Vec<(Vec<usize>, f64)> = collected
            .all_routes()
            .unwrap()
            .iter()
            .map(|r| (r.order().to_vec(), r.cost()))
            .collect();
        prop_assert_eq!(streamed, expected);
        prop_assert_eq!(result.min_route(), collected.min_route());
    }

    #[test]
    fn prop_parallel_matches_sequential(cities in random_cities(7)) {
        let config = SearchConfig::default().with_mode(SearchMode::CollectAll);
        let seq = Enumerator::new(config.clone()).run(&cities).unwrap();
        let par = enumerate_parallel(&cities, config).unwrap();
        prop_assert_eq!(seq.min_route(), par.min_route());
        prop_assert_eq!(seq.all_routes(), par.all_routes());
    }

    #[test]
    fn prop_matrix_agrees_with_city_costs(cities in random_cities(8)) {
        let dm = DistanceMatrix::from_cities(&cities);
        let order: Vec<usize> = (0..cities.len()).rev().collect();
        let refs: Vec<&City> = order.iter().map(|&i| &cities[i]).collect();
        prop_assert_eq!(dm.cycle_cost(&order), cycle_cost(&refs));
    }
}
