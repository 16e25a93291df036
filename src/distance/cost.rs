//! Euclidean distance and route cost over cities.
//!
//! Two route costs exist. [`cycle_cost`] includes the edge closing the last
//! city back to the first and is the only objective used to rank complete
//! tours. [`open_path_cost`] omits that edge and is only meaningful as a
//! partial value.

use crate::models::City;

/// Euclidean distance between two cities.
///
/// # Examples
///
/// ```
/// use u_tsp_brute::models::City;
/// use u_tsp_brute::distance::distance;
///
/// let a = City::new("1", 0.0, 0.0).unwrap();
/// let b = City::new("2", 3.0, 4.0).unwrap();
/// assert!((distance(&a, &b) - 5.0).abs() < 1e-10);
/// ```
pub fn distance(a: &City, b: &City) -> f64 {
    let dx = b.x() - a.x();
    let dy = b.y() - a.y();
    (dx * dx + dy * dy).sqrt()
}

/// Sum of consecutive edge distances, without the closing edge.
///
/// Zero for routes of fewer than two cities.
pub fn open_path_cost(route: &[&City]) -> f64 {
    route.windows(2).map(|w| distance(w[0], w[1])).sum()
}

/// Sum of consecutive edge distances plus the edge from the last city back
/// to the first.
///
/// Zero for routes of fewer than two cities.
///
/// # Examples
///
/// ```
/// use u_tsp_brute::models::City;
/// use u_tsp_brute::distance::{cycle_cost, open_path_cost};
///
/// let a = City::new("1", 0.0, 0.0).unwrap();
/// let b = City::new("2", 3.0, 0.0).unwrap();
/// let c = City::new("3", 0.0, 4.0).unwrap();
/// let route = [&a, &b, &c];
/// assert!((open_path_cost(&route) - 8.0).abs() < 1e-10);
/// assert!((cycle_cost(&route) - 12.0).abs() < 1e-10);
/// ```
pub fn cycle_cost(route: &[&City]) -> f64 {
    match (route.first(), route.last()) {
        (Some(first), Some(last)) if route.len() > 1 => {
            open_path_cost(route) + distance(last, first)
        }
        _ => 0.0,
    }
}
