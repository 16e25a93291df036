//! Search configuration.

use serde::{Deserialize, Serialize};

/// Whether the search keeps every generated route or only the best one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Track only the minimum-cost route.
    #[default]
    MinOnly,
    /// Also retain every route in generation order, up to the route budget.
    CollectAll,
}

/// Default cap on routes retained in [`SearchMode::CollectAll`].
pub const DEFAULT_ROUTE_BUDGET: u64 = 1_000_000;

/// Configuration for an exhaustive search.
///
/// # Examples
///
/// ```
/// use u_tsp_brute::search::{SearchConfig, SearchMode};
///
/// let config = SearchConfig::default()
///     .with_mode(SearchMode::CollectAll)
///     .with_route_budget(5_040)
///     .with_parallel(true);
/// assert_eq!(config.mode, SearchMode::CollectAll);
/// assert_eq!(config.route_budget, 5_040);
/// assert!(config.parallel);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Retention mode.
    pub mode: SearchMode,
    /// Maximum number of routes retained in collect-all mode.
    pub route_budget: u64,
    /// Split first-level branches across rayon workers.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::MinOnly,
            route_budget: DEFAULT_ROUTE_BUDGET,
            parallel: false,
        }
    }
}

impl SearchConfig {
    /// Sets the retention mode.
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the collect-all route budget.
    pub fn with_route_budget(mut self, budget: u64) -> Self {
        self.route_budget = budget;
        self
    }

    /// Enables or disables the parallel search.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
