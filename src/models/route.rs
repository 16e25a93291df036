//! Route type.

use serde::{Deserialize, Serialize};

use super::City;

/// A visiting order over all cities, closed into a cycle for costing.
///
/// Stores indices into the caller-owned city slice rather than copies of the
/// cities. The last city connects back to the first.
///
/// # Examples
///
/// ```
/// use u_tsp_brute::models::{City, Route};
///
/// let cities = vec![
///     City::new("1", 0.0, 0.0).unwrap(),
///     City::new("2", 3.0, 0.0).unwrap(),
///     City::new("3", 0.0, 4.0).unwrap(),
/// ];
/// let route = Route::new(vec![0, 2, 1], 12.0);
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.render(&cities), "[1-3-2]");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    order: Vec<usize>,
    cost: f64,
}

impl Route {
    /// Creates a route from a visiting order and its closed-cycle cost.
    pub fn new(order: Vec<usize>, cost: f64) -> Self {
        Self { order, cost }
    }

    /// City indices in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Closed-cycle cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of cities on the route.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the route visits no city.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Resolves the route against the city slice it was built from.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds for `cities`.
    pub fn cities<'a>(&self, cities: &'a [City]) -> Vec<&'a City> {
        self.order.iter().map(|&i| &cities[i]).collect()
    }

    /// Renders the city names as `[n1-n2-...-nN]`.
    pub fn render(&self, cities: &[City]) -> String {
        let names: Vec<&str> = self.order.iter().map(|&i| cities[i].name()).collect();
        format!("[{}]", names.join("-"))
    }

    /// Returns `true` if the order is a permutation of `0..n`.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &i in &self.order {
            if i >= n || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }
}
