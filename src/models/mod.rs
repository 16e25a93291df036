//! Domain model types for exhaustive TSP search.
//!
//! Provides cities as named 2-D points, routes as index orderings closed into
//! a cycle, and the result of an enumeration.

mod city;
mod result;
mod route;

pub use city::{validate_cities, City};
pub use result::SearchResult;
pub use route::Route;
