//! # u-tsp-brute
//!
//! Exact Traveling Salesman solver by exhaustive enumeration. The first city
//! is fixed as an anchor and every permutation of the rest is scored by its
//! closed-cycle Euclidean length, giving the true optimum in O(N · N!) time.
//! Practical up to roughly 10–12 cities.
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (City, Route, SearchResult)
//! - [`distance`]: Euclidean distance, open-path and closed-cycle cost, distance matrix
//! - [`search`]: Anchored permutation enumeration, sinks, cancellation, parallel split
//! - [`instance`]: City file parser and seeded random instances
//! - [`report`]: Results file writer and console progress bar
//!
//! ## Example
//!
//! ```
//! use u_tsp_brute::models::City;
//! use u_tsp_brute::search::{enumerate, SearchMode};
//!
//! let cities = vec![
//!     City::new("1", 0.0, 0.0).unwrap(),
//!     City::new("2", 1.0, 0.0).unwrap(),
//!     City::new("3", 1.0, 1.0).unwrap(),
//!     City::new("4", 0.0, 1.0).unwrap(),
//! ];
//! let result = enumerate(&cities, SearchMode::MinOnly).unwrap();
//! assert_eq!(result.min_route().render(&cities), "[1-2-3-4]");
//! assert!((result.min_cost() - 4.0).abs() < 1e-10);
//! ```

pub mod distance;
pub mod error;
pub mod instance;
pub mod models;
pub mod report;
pub mod search;

pub use error::{TspError, TspResult};
