//! Search result type.

use serde::{Deserialize, Serialize};

use super::Route;

/// Outcome of an enumeration.
///
/// `min_route` is the first route found with the lowest closed-cycle cost.
/// `all_routes` is only populated in collect-all mode and keeps generation
/// order.
///
/// # Examples
///
/// ```
/// use u_tsp_brute::models::{Route, SearchResult};
///
/// let result = SearchResult::new(Route::new(vec![0], 0.0), 1);
/// assert_eq!(result.min_cost(), 0.0);
/// assert!(result.is_complete());
/// assert!(result.all_routes().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    min_route: Route,
    all_routes: Option<Vec<Route>>,
    evaluated: u64,
    total: u64,
    complete: bool,
}

impl SearchResult {
    /// Creates a complete result for a search that scored `total` routes.
    pub fn new(min_route: Route, total: u64) -> Self {
        Self {
            min_route,
            all_routes: None,
            evaluated: total,
            total,
            complete: true,
        }
    }

    /// Attaches the retained routes.
    pub fn with_all_routes(mut self, routes: Vec<Route>) -> Self {
        self.all_routes = Some(routes);
        self
    }

    /// Marks the result as partial after `evaluated` of `total` routes.
    pub fn with_progress(mut self, evaluated: u64, total: u64) -> Self {
        self.evaluated = evaluated;
        self.total = total;
        self.complete = evaluated == total;
        self
    }

    /// The minimum-cost route.
    pub fn min_route(&self) -> &Route {
        &self.min_route
    }

    /// Closed-cycle cost of the minimum route.
    pub fn min_cost(&self) -> f64 {
        self.min_route.cost()
    }

    /// Every generated route, in generation order, if retained.
    pub fn all_routes(&self) -> Option<&[Route]> {
        self.all_routes.as_deref()
    }

    /// Number of complete routes scored.
    pub fn evaluated(&self) -> u64 {
        self.evaluated
    }

    /// Number of routes the full search scores, `(N-1)!`.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// `false` if the search was cancelled before finishing.
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
