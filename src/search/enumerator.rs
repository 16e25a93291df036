//! Anchored permutation enumeration.
//!
//! # Algorithm
//!
//! `cities[0]` is fixed as the anchor. The remaining cities are permuted by
//! depth-first backtracking: at each level every unused city extends the
//! current prefix in input order, the search recurses, and the prefix and
//! used flags are restored on return. Each complete prefix is scored by its
//! closed-cycle cost and replaces the best route only if strictly cheaper,
//! so the first route reaching the minimum is kept.
//!
//! # Complexity
//!
//! Exactly (N-1)! leaves, each costing O(N) matrix lookups: O(N · N!).
//! Mirror-image tours are both generated.

use crate::distance::DistanceMatrix;
use crate::error::{TspError, TspResult};
use crate::models::{City, Route, SearchResult};

use super::cancel::CancelToken;
use super::config::{SearchConfig, SearchMode};
use super::parallel::enumerate_branches;
use super::sink::{DiscardRoutes, NoProgress, ProgressSink, RouteCollector, RouteSink};
use super::route_count;

/// City counts above this log a warning before the search starts.
const PRACTICAL_CITY_LIMIT: usize = 12;

/// Explicit accumulator threaded through the recursion.
///
/// Holds the current prefix, the used flags, the best route so far and the
/// leaf counter. One state per worker; nothing is shared between branches.
pub(crate) struct SearchState<'a> {
    distances: &'a DistanceMatrix,
    cancel: Option<&'a CancelToken>,
    prefix: Vec<usize>,
    used: Vec<bool>,
    best: Option<Route>,
    completed: u64,
    total: u64,
    cancelled: bool,
}

impl<'a> SearchState<'a> {
    /// Creates a state whose prefix is already fixed to `start`.
    ///
    /// `start` must begin with the anchor `0` and contain no repeats.
    pub(crate) fn new(
        distances: &'a DistanceMatrix,
        start: &[usize],
        total: u64,
        cancel: Option<&'a CancelToken>,
    ) -> Self {
        let n = distances.size();
        let mut prefix = Vec::with_capacity(n);
        let mut used = vec![false; n];
        for &i in start {
            prefix.push(i);
            used[i] = true;
        }
        Self {
            distances,
            cancel,
            prefix,
            used,
            best: None,
            completed: 0,
            total,
            cancelled: false,
        }
    }

    /// Runs the backtracking search below the current prefix.
    pub(crate) fn descend(
        &mut self,
        sink: &mut dyn RouteSink,
        progress: &mut dyn ProgressSink,
    ) -> TspResult<()> {
        if self.poll_cancel() {
            return Ok(());
        }

        let n = self.used.len();
        if self.prefix.len() == n {
            return self.score_leaf(sink, progress);
        }

        for next in 1..n {
            if self.used[next] {
                continue;
            }
            self.used[next] = true;
            self.prefix.push(next);
            let outcome = self.descend(sink, progress);
            self.prefix.pop();
            self.used[next] = false;
            outcome?;
            if self.cancelled {
                break;
            }
        }
        Ok(())
    }

    fn poll_cancel(&mut self) -> bool {
        if !self.cancelled && self.cancel.is_some_and(CancelToken::is_cancelled) {
            self.cancelled = true;
        }
        self.cancelled
    }

    fn score_leaf(
        &mut self,
        sink: &mut dyn RouteSink,
        progress: &mut dyn ProgressSink,
    ) -> TspResult<()> {
        let cost = self.distances.cycle_cost(&self.prefix);
        let improved = self.best.as_ref().map_or(true, |best| cost < best.cost());
        if improved {
            log::debug!(
                "search.best: improved cost={cost} evaluated={}",
                self.completed + 1
            );
            self.best = Some(Route::new(self.prefix.clone(), cost));
        }
        sink.accept(&self.prefix, cost)?;
        self.completed += 1;
        progress.update(self.completed, self.total);
        Ok(())
    }

    pub(crate) fn into_best(self) -> Option<Route> {
        self.best
    }

    pub(crate) fn completed(&self) -> u64 {
        self.completed
    }

    pub(crate) fn was_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Runs exhaustive searches under a fixed configuration.
///
/// # Examples
///
/// ```
/// use u_tsp_brute::models::City;
/// use u_tsp_brute::search::{Enumerator, SearchConfig, SearchMode};
///
/// let cities = vec![
///     City::new("1", 0.0, 0.0).unwrap(),
///     City::new("2", 1.0, 0.0).unwrap(),
///     City::new("3", 1.0, 1.0).unwrap(),
///     City::new("4", 0.0, 1.0).unwrap(),
/// ];
/// let enumerator = Enumerator::new(SearchConfig::default().with_mode(SearchMode::CollectAll));
/// let result = enumerator.run(&cities).unwrap();
/// assert!((result.min_cost() - 4.0).abs() < 1e-10);
/// assert_eq!(result.all_routes().map(|r| r.len()), Some(6));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Enumerator {
    config: SearchConfig,
    cancel: Option<CancelToken>,
}

impl Enumerator {
    /// Creates an enumerator with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Attaches a cancellation token polled during the search.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the search without progress reporting.
    pub fn run(&self, cities: &[City]) -> TspResult<SearchResult> {
        self.run_with_progress(cities, &mut NoProgress)
    }

    /// Runs the search, reporting `(completed, (N-1)!)` to `progress`.
    pub fn run_with_progress<P>(
        &self,
        cities: &[City],
        progress: &mut P,
    ) -> TspResult<SearchResult>
    where
        P: ProgressSink + Send,
    {
        let total = self.prepare(cities, self.config.mode, self.config.parallel)?;
        let distances = DistanceMatrix::from_cities(cities);

        if self.config.parallel {
            return enumerate_branches(
                &distances,
                total,
                &self.config,
                self.cancel.as_ref(),
                progress,
            );
        }

        let mut state = SearchState::new(&distances, &[0], total, self.cancel.as_ref());
        match self.config.mode {
            SearchMode::MinOnly => {
                state.descend(&mut DiscardRoutes, progress)?;
                finish(state, total, None)
            }
            SearchMode::CollectAll => {
                let mut collector = RouteCollector::new(self.config.route_budget);
                state.descend(&mut collector, progress)?;
                finish(state, total, Some(collector.into_routes()))
            }
        }
    }

    /// Streams every route to `sink` without retaining them.
    ///
    /// Always sequential, so the sink sees routes in generation order. The
    /// configured mode is ignored; only the minimum route is returned.
    pub fn stream<S, P>(
        &self,
        cities: &[City],
        sink: &mut S,
        progress: &mut P,
    ) -> TspResult<SearchResult>
    where
        S: RouteSink,
        P: ProgressSink,
    {
        // Nothing is retained, so the route budget does not apply.
        let total = self.prepare(cities, SearchMode::MinOnly, false)?;
        let distances = DistanceMatrix::from_cities(cities);
        let mut state = SearchState::new(&distances, &[0], total, self.cancel.as_ref());
        state.descend(sink, progress)?;
        finish(state, total, None)
    }

    /// Checks input and, for collect-all, the route budget. Returns `(N-1)!`.
    fn prepare(&self, cities: &[City], mode: SearchMode, parallel: bool) -> TspResult<u64> {
        if cities.is_empty() {
            return Err(TspError::EmptyInput);
        }
        let n = cities.len();
        let total = route_count(n);
        if n > PRACTICAL_CITY_LIMIT {
            log::warn!("search: factorial search is impractical n={n} total={total}");
        }
        if mode == SearchMode::CollectAll && total > self.config.route_budget {
            return Err(TspError::ResourceExhaustion {
                required: total,
                budget: self.config.route_budget,
            });
        }
        log::info!("search: start n={n} total={total} mode={mode:?} parallel={parallel}");
        Ok(total)
    }
}

/// Builds the result from a finished or cancelled state.
fn finish(
    state: SearchState<'_>,
    total: u64,
    routes: Option<Vec<Route>>,
) -> TspResult<SearchResult> {
    let completed = state.completed();
    let cancelled = state.was_cancelled();
    let best = state.into_best().ok_or(TspError::Cancelled)?;
    if cancelled {
        log::warn!(
            "search: cancelled evaluated={completed} total={total} best_cost={}",
            best.cost()
        );
    } else {
        log::info!("search: complete evaluated={completed} best_cost={}", best.cost());
    }
    let mut result = SearchResult::new(best, total).with_progress(completed, total);
    if let Some(routes) = routes {
        result = result.with_all_routes(routes);
    }
    Ok(result)
}

/// Enumerates all anchored permutations of `cities` and returns the
/// minimum closed-cycle route.
///
/// # Errors
///
/// - [`TspError::EmptyInput`] if `cities` is empty.
/// - [`TspError::ResourceExhaustion`] if `mode` is collect-all and (N-1)!
///   exceeds the default route budget.
///
/// # Examples
///
/// ```
/// use u_tsp_brute::models::City;
/// use u_tsp_brute::search::{enumerate, SearchMode};
///
/// let cities = vec![
///     City::new("1", 0.0, 0.0).unwrap(),
///     City::new("2", 3.0, 0.0).unwrap(),
///     City::new("3", 0.0, 4.0).unwrap(),
/// ];
/// let result = enumerate(&cities, SearchMode::MinOnly).unwrap();
/// assert!((result.min_cost() - 12.0).abs() < 1e-10);
/// assert_eq!(result.min_route().order(), &[0, 1, 2]);
/// ```
pub fn enumerate(cities: &[City], mode: SearchMode) -> TspResult<SearchResult> {
    Enumerator::new(SearchConfig::default().with_mode(mode)).run(cities)
}

/// Runs the search described by `config` with first-level branches spread
/// over the rayon pool, whatever `config.parallel` says.
///
/// Gives the same minimum route, and in collect-all mode the same route
/// order, as the sequential search.
pub fn enumerate_parallel(cities: &[City], config: SearchConfig) -> TspResult<SearchResult> {
    Enumerator::new(config.with_parallel(true)).run(cities)
}

/// Enumerates all anchored permutations, handing each route to `sink` as it
/// is completed.
///
/// # Examples
///
/// ```
/// use u_tsp_brute::models::City;
/// use u_tsp_brute::search::enumerate_with_sink;
/// use u_tsp_brute::TspResult;
///
/// let cities = vec![
///     City::new("1", 0.0, 0.0).unwrap(),
///     City::new("2", 1.0, 0.0).unwrap(),
///     City::new("3", 1.0, 1.0).unwrap(),
///     City::new("4", 0.0, 1.0).unwrap(),
/// ];
/// let mut count = 0;
/// let mut sink = |_order: &[usize], _cost: f64| -> TspResult<()> {
///     count += 1;
///     Ok(())
/// };
/// enumerate_with_sink(&cities, &mut sink).unwrap();
/// assert_eq!(count, 6);
/// ```
pub fn enumerate_with_sink<S: RouteSink>(
    cities: &[City],
    sink: &mut S,
) -> TspResult<SearchResult> {
    Enumerator::default().stream(cities, sink, &mut NoProgress)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str, x: f64, y: f64) -> City {
        City::new(name, x, y).expect("valid")
    }

    fn triangle() -> Vec<City> {
        vec![city("1", 0.0, 0.0), city("2", 3.0, 0.0), city("3", 0.0, 4.0)]
    }

    fn square() -> Vec<City> {
        vec![
            city("1", 0.0, 0.0),
            city("2", 1.0, 0.0),
            city("3", 1.0, 1.0),
            city("4", 0.0, 1.0),
        ]
    }

    #[test]
    fn test_triangle_cost() {
        let result = enumerate(&triangle(), SearchMode::CollectAll).expect("search");
        assert!((result.min_cost() - 12.0).abs() < 1e-10);
        let all = result.all_routes().expect("collected");
        assert_eq!(all.len(), 2);
        for r in all {
            assert!((r.cost() - 12.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_triangle_tie_keeps_first() {
        let result = enumerate(&triangle(), SearchMode::MinOnly).expect("search");
        assert_eq!(result.min_route().order(), &[0, 1, 2]);
    }

    #[test]
    fn test_square_perimeter() {
        let result = enumerate(&square(), SearchMode::CollectAll).expect("search");
        assert!((result.min_cost() - 4.0).abs() < 1e-10);
        assert_eq!(result.min_route().order(), &[0, 1, 2, 3]);
        let crossing = 2.0 + 2.0 * 2f64.sqrt();
        for r in result.all_routes().expect("collected") {
            let o = r.order();
            let diagonal = o.windows(2).any(|w| (w[0] + 2 == w[1]) || (w[1] + 2 == w[0]));
            if diagonal {
                assert!((r.cost() - crossing).abs() < 1e-10);
                assert!(r.cost() > result.min_cost());
            }
        }
    }

    #[test]
    fn test_generation_order_is_lexicographic() {
        let result = enumerate(&square(), SearchMode::CollectAll).expect("search");
        let orders: Vec<Vec<usize>> = result
            .all_routes()
            .expect("collected")
            .iter()
            .map(|r| r.order().to_vec())
            .collect();
        assert_eq!(
            orders,
            vec![
                vec![0, 1, 2, 3],
                vec![0, 1, 3, 2],
                vec![0, 2, 1, 3],
                vec![0, 2, 3, 1],
                vec![0, 3, 1, 2],
                vec![0, 3, 2, 1],
            ]
        );
    }

    #[test]
    fn test_single_city() {
        let result = enumerate(&[city("1", 5.0, 5.0)], SearchMode::MinOnly).expect("search");
        assert_eq!(result.min_cost(), 0.0);
        assert_eq!(result.min_route().order(), &[0]);
        assert_eq!(result.total(), 1);
    }

    #[test]
    fn test_two_cities() {
        let cities = vec![city("1", 0.0, 0.0), city("2", 0.0, 2.0)];
        let result = enumerate(&cities, SearchMode::MinOnly).expect("search");
        assert!((result.min_cost() - 4.0).abs() < 1e-10);
        assert_eq!(result.evaluated(), 1);
    }

    #[test]
    fn test_empty_input() {
        let err = enumerate(&[], SearchMode::MinOnly).unwrap_err();
        assert!(matches!(err, TspError::EmptyInput));
        let mut sink = DiscardRoutes;
        assert!(matches!(
            enumerate_with_sink(&[], &mut sink),
            Err(TspError::EmptyInput)
        ));
    }

    #[test]
    fn test_collect_all_over_budget() {
        let enumerator = Enumerator::new(
            SearchConfig::default()
                .with_mode(SearchMode::CollectAll)
                .with_route_budget(5),
        );
        let err = enumerator.run(&square()).unwrap_err();
        assert!(matches!(
            err,
            TspError::ResourceExhaustion {
                required: 6,
                budget: 5
            }
        ));
    }

    #[test]
    fn test_min_only_ignores_budget() {
        let enumerator = Enumerator::new(SearchConfig::default().with_route_budget(0));
        assert!(enumerator.run(&square()).is_ok());
    }

    #[test]
    fn test_stream_ignores_collect_all_budget() {
        let enumerator = Enumerator::new(
            SearchConfig::default()
                .with_mode(SearchMode::CollectAll)
                .with_route_budget(0)
                .with_parallel(true),
        );
        let mut seen = Vec::new();
        let mut sink = |order: &[usize], _cost: f64| -> TspResult<()> {
            seen.push(order.to_vec());
            Ok(())
        };
        let mut updates = Vec::new();
        let mut progress = |done: u64, total: u64| updates.push((done, total));
        let result = enumerator
            .stream(&square(), &mut sink, &mut progress)
            .expect("stream");
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[0], vec![0, 1, 2, 3]);
        assert!(result.all_routes().is_none());
        assert_eq!(updates.last(), Some(&(6, 6)));
    }

    #[test]
    fn test_stream_rejects_empty_and_honours_cancel() {
        let token = CancelToken::new();
        token.cancel();
        let enumerator = Enumerator::default().with_cancel(token);
        let mut sink = DiscardRoutes;
        assert!(matches!(
            enumerator.stream(&[], &mut sink, &mut NoProgress),
            Err(TspError::EmptyInput)
        ));
        assert!(matches!(
            enumerator.stream(&square(), &mut sink, &mut NoProgress),
            Err(TspError::Cancelled)
        ));
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut updates = Vec::new();
        let mut progress = |done: u64, total: u64| updates.push((done, total));
        Enumerator::default()
            .run_with_progress(&square(), &mut progress)
            .expect("search");
        assert_eq!(updates.len(), 6);
        assert!(updates.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(updates.last(), Some(&(6, 6)));
    }

    #[test]
    fn test_cancel_before_start() {
        let token = CancelToken::new();
        token.cancel();
        let err = Enumerator::default()
            .with_cancel(token)
            .run(&square())
            .unwrap_err();
        assert!(matches!(err, TspError::Cancelled));
    }

    #[test]
    fn test_cancel_mid_search_returns_best_so_far() {
        let token = CancelToken::new();
        let trigger = token.clone();
        let mut progress = move |done: u64, _total: u64| {
            if done == 2 {
                trigger.cancel();
            }
        };
        let result = Enumerator::default()
            .with_cancel(token)
            .run_with_progress(&square(), &mut progress)
            .expect("partial result");
        assert!(!result.is_complete());
        assert_eq!(result.evaluated(), 2);
        assert!(result.min_route().is_permutation_of(4));
    }

    #[test]
    fn test_sink_error_propagates() {
        let mut sink = |_order: &[usize], _cost: f64| -> TspResult<()> {
            Err(TspError::Cancelled)
        };
        assert!(matches!(
            enumerate_with_sink(&square(), &mut sink),
            Err(TspError::Cancelled)
        ));
    }

    #[test]
    fn test_state_restored_between_branches() {
        let cities = square();
        let dm = DistanceMatrix::from_cities(&cities);
        let mut state = SearchState::new(&dm, &[0], 6, None);
        state.descend(&mut DiscardRoutes, &mut NoProgress).expect("search");
        assert_eq!(state.prefix, vec![0]);
        assert_eq!(state.used, vec![true, false, false, false]);
        assert_eq!(state.completed(), 6);
        assert!(state.best.is_some());
    }
}
