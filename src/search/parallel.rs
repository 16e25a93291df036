//! Parallel search over first-level branches.
//!
//! The anchor is fixed, so the choice of the second city splits the
//! permutation tree into N-1 independent subtrees. Each subtree runs on a
//! rayon worker with its own [`SearchState`]; no state is shared during the
//! search except the progress counter and the cancel flag. Outcomes are
//! reduced in branch order with a strict less-than, which reproduces the
//! sequential first-found minimum and, in collect-all mode, the sequential
//! generation order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use rayon::prelude::*;

use crate::distance::DistanceMatrix;
use crate::error::{TspError, TspResult};
use crate::models::{Route, SearchResult};

use super::cancel::CancelToken;
use super::config::{SearchConfig, SearchMode};
use super::enumerator::SearchState;
use super::sink::{DiscardRoutes, ProgressSink, RouteCollector};

/// Forwarded progress updates per full search, at most.
const PROGRESS_STEPS: u64 = 1000;

/// Leaf counter shared by all workers.
///
/// Updates are forwarded to the caller's sink under a lock, and only when
/// they exceed the last forwarded count, so the sink sees a monotonic
/// sequence.
struct SharedProgress<'p, P> {
    counter: AtomicU64,
    stride: u64,
    sink: Mutex<(u64, &'p mut P)>,
}

impl<'p, P: ProgressSink> SharedProgress<'p, P> {
    fn new(total: u64, sink: &'p mut P) -> Self {
        Self {
            counter: AtomicU64::new(0),
            stride: (total / PROGRESS_STEPS).max(1),
            sink: Mutex::new((0, sink)),
        }
    }

    fn record(&self, total: u64) {
        let done = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        if done % self.stride != 0 && done != total {
            return;
        }
        // Progress is observational; a poisoned lock just stops updates.
        if let Ok(mut guard) = self.sink.lock() {
            let (last, sink) = &mut *guard;
            if done > *last {
                *last = done;
                sink.update(done, total);
            }
        }
    }
}

/// Per-worker view of the shared counter.
struct BranchProgress<'s, 'p, P> {
    shared: &'s SharedProgress<'p, P>,
}

impl<P: ProgressSink> ProgressSink for BranchProgress<'_, '_, P> {
    fn update(&mut self, _completed: u64, total: u64) {
        self.shared.record(total);
    }
}

struct BranchOutcome {
    best: Option<Route>,
    routes: Option<Vec<Route>>,
    completed: u64,
    cancelled: bool,
}

/// Runs the search with one rayon task per first-level branch.
pub(crate) fn enumerate_branches<P>(
    distances: &DistanceMatrix,
    total: u64,
    config: &SearchConfig,
    cancel: Option<&CancelToken>,
    progress: &mut P,
) -> TspResult<SearchResult>
where
    P: ProgressSink + Send,
{
    let n = distances.size();
    let starts: Vec<Vec<usize>> = if n == 1 {
        vec![vec![0]]
    } else {
        (1..n).map(|second| vec![0, second]).collect()
    };
    log::debug!(
        "search.parallel: branches={} threads={}",
        starts.len(),
        rayon::current_num_threads()
    );

    let shared = SharedProgress::new(total, progress);
    let outcomes = starts
        .par_iter()
        .map(|start| -> TspResult<BranchOutcome> {
            let mut state = SearchState::new(distances, start, total, cancel);
            let mut branch_progress = BranchProgress { shared: &shared };
            let routes = match config.mode {
                SearchMode::MinOnly => {
                    state.descend(&mut DiscardRoutes, &mut branch_progress)?;
                    None
                }
                SearchMode::CollectAll => {
                    let mut collector = RouteCollector::new(config.route_budget);
                    state.descend(&mut collector, &mut branch_progress)?;
                    Some(collector.into_routes())
                }
            };
            Ok(BranchOutcome {
                completed: state.completed(),
                cancelled: state.was_cancelled(),
                best: state.into_best(),
                routes,
            })
        })
        .collect::<TspResult<Vec<_>>>()?;

    merge(outcomes, total, config.mode)
}

/// Reduces branch outcomes in branch order.
fn merge(outcomes: Vec<BranchOutcome>, total: u64, mode: SearchMode) -> TspResult<SearchResult> {
    let mut best: Option<Route> = None;
    let mut completed = 0;
    let mut cancelled = false;
    let mut all_routes = match mode {
        SearchMode::MinOnly => None,
        SearchMode::CollectAll => Some(Vec::new()),
    };

    for outcome in outcomes {
        completed += outcome.completed;
        cancelled |= outcome.cancelled;
        if let Some(candidate) = outcome.best {
            if best.as_ref().map_or(true, |b| candidate.cost() < b.cost()) {
                best = Some(candidate);
            }
        }
        if let (Some(all), Some(routes)) = (all_routes.as_mut(), outcome.routes) {
            all.extend(routes);
        }
    }

    let best = best.ok_or(TspError::Cancelled)?;
    if cancelled {
        log::warn!(
            "search.parallel: cancelled evaluated={completed} total={total} best_cost={}",
            best.cost()
        );
    } else {
        log::info!("search.parallel: complete evaluated={completed} best_cost={}", best.cost());
    }

    let mut result = SearchResult::new(best, total).with_progress(completed, total);
    if let Some(routes) = all_routes {
        result = result.with_all_routes(routes);
    }
    Ok(result)
}
