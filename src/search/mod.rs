//! Exhaustive route enumeration.
//!
//! - [`enumerate`]: anchored backtracking, minimum only or collect-all
//! - [`enumerate_with_sink`]: streams every route to a [`RouteSink`]
//! - [`enumerate_parallel`]: the same search split over rayon workers
//! - [`Enumerator`]: configured runner with progress, cancellation and an
//!   optional parallel split over first-level branches
//!
//! For N cities exactly (N-1)! routes are generated: `cities[0]` is fixed as
//! the anchor to remove rotations. Reflections are not removed.

mod cancel;
mod config;
mod enumerator;
mod parallel;
mod sink;

pub use cancel::{CancelToken, Watchdog};
pub use config::{SearchConfig, SearchMode, DEFAULT_ROUTE_BUDGET};
pub use enumerator::{enumerate, enumerate_parallel, enumerate_with_sink, Enumerator};
pub use sink::{DiscardRoutes, NoProgress, ProgressSink, RouteCollector, RouteSink};

/// Number of anchored permutations for `n` cities, `(n-1)!`.
///
/// Zero for `n = 0`; saturates at `u64::MAX` (from n = 22 on).
///
/// # Examples
///
/// ```
/// use u_tsp_brute::search::route_count;
///
/// assert_eq!(route_count(1), 1);
/// assert_eq!(route_count(4), 6);
/// assert_eq!(route_count(10), 362_880);
/// ```
pub fn route_count(n: usize) -> u64 {
    if n == 0 {
        return 0;
    }
    (1..n as u64)
        .try_fold(1u64, |acc, k| acc.checked_mul(k))
        .unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_count() {
        assert_eq!(route_count(0), 0);
        assert_eq!(route_count(2), 1);
        assert_eq!(route_count(3), 2);
        assert_eq!(route_count(12), 39_916_800);
        assert_eq!(route_count(21), 2_432_902_008_176_640_000);
        assert_eq!(route_count(22), u64::MAX);
    }
}
