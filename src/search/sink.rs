//! Route and progress sinks fed by the search.

use crate::error::{TspError, TspResult};
use crate::models::Route;

/// Receives every completed route, in generation order.
///
/// `order` is only borrowed for the duration of the call; copy it if it must
/// outlive the callback. Returning an error aborts the search and the error
/// propagates to the caller.
pub trait RouteSink {
    /// Accepts one complete route and its closed-cycle cost.
    fn accept(&mut self, order: &[usize], cost: f64) -> TspResult<()>;
}

impl<F> RouteSink for F
where
    F: FnMut(&[usize], f64) -> TspResult<()>,
{
    fn accept(&mut self, order: &[usize], cost: f64) -> TspResult<()> {
        self(order, cost)
    }
}

/// Sink that drops every route.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardRoutes;

impl RouteSink for DiscardRoutes {
    fn accept(&mut self, _order: &[usize], _cost: f64) -> TspResult<()> {
        Ok(())
    }
}

/// Sink that retains routes up to a fixed budget.
///
/// Accepting a route past the budget fails with
/// [`TspError::ResourceExhaustion`] instead of silently truncating.
///
/// # Examples
///
/// ```
/// use u_tsp_brute::search::{RouteCollector, RouteSink};
///
/// let mut collector = RouteCollector::new(1);
/// assert!(collector.accept(&[0, 1, 2], 12.0).is_ok());
/// assert!(collector.accept(&[0, 2, 1], 12.0).is_err());
/// assert_eq!(collector.into_routes().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RouteCollector {
    routes: Vec<Route>,
    budget: u64,
}

impl RouteCollector {
    /// Creates a collector that holds at most `budget` routes.
    pub fn new(budget: u64) -> Self {
        Self {
            routes: Vec::new(),
            budget,
        }
    }

    /// Routes retained so far.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Consumes the collector, returning the retained routes.
    pub fn into_routes(self) -> Vec<Route> {
        self.routes
    }
}

impl RouteSink for RouteCollector {
    fn accept(&mut self, order: &[usize], cost: f64) -> TspResult<()> {
        let held = self.routes.len() as u64;
        if held >= self.budget {
            return Err(TspError::ResourceExhaustion {
                required: held + 1,
                budget: self.budget,
            });
        }
        self.routes.push(Route::new(order.to_vec(), cost));
        Ok(())
    }
}

/// Receives `(completed, total)` progress updates.
///
/// `completed` never decreases across calls within one search.
pub trait ProgressSink {
    /// Reports that `completed` of `total` routes have been scored.
    fn update(&mut self, completed: u64, total: u64);
}

impl<F> ProgressSink for F
where
    F: FnMut(u64, u64),
{
    fn update(&mut self, completed: u64, total: u64) {
        self(completed, total)
    }
}

/// Progress sink that ignores updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn update(&mut self, _completed: u64, _total: u64) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_keeps_order() {
        let mut c = RouteCollector::new(10);
        c.accept(&[0, 1, 2], 3.0).expect("within budget");
        c.accept(&[0, 2, 1], 4.0).expect("within budget");
        let routes = c.into_routes();
        assert_eq!(routes[0].order(), &[0, 1, 2]);
        assert_eq!(routes[1].cost(), 4.0);
    }

    #[test]
    fn test_collector_budget_error() {
        let mut c = RouteCollector::new(0);
        let err = c.accept(&[0], 0.0).unwrap_err();
        assert!(matches!(
            err,
            TspError::ResourceExhaustion {
                required: 1,
                budget: 0
            }
        ));
        assert!(c.routes().is_empty());
    }

    #[test]
    fn test_closure_sinks() {
        let mut seen = Vec::new();
        {
            let mut sink = |order: &[usize], cost: f64| -> TspResult<()> {
                seen.push((order.to_vec(), cost));
                Ok(())
            };
            sink.accept(&[0, 1], 2.0).expect("ok");
        }
        assert_eq!(seen, vec![(vec![0, 1], 2.0)]);

        let mut updates = Vec::new();
        {
            let mut progress = |done: u64, total: u64| updates.push((done, total));
            progress.update(1, 2);
        }
        assert_eq!(updates, vec![(1, 2)]);
    }

    #[test]
    fn test_discard() {
        assert!(DiscardRoutes.accept(&[0, 1, 2], 1.0).is_ok());
        NoProgress.update(1, 1);
    }
}
