//! Dense distance matrix.

use crate::models::City;

use super::cost::distance;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once from the city list so the search can score routes by index.
/// Entries come from [`distance`], and the route costs below sum edges in the
/// same order as [`cycle_cost`](super::cycle_cost), so both agree exactly.
///
/// # Examples
///
/// ```
/// use u_tsp_brute::models::City;
/// use u_tsp_brute::distance::DistanceMatrix;
///
/// let cities = vec![
///     City::new("1", 0.0, 0.0).unwrap(),
///     City::new("2", 3.0, 4.0).unwrap(),
///     City::new("3", 6.0, 8.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the Euclidean distance matrix of the given cities.
    pub fn from_cities(cities: &[City]) -> Self {
        let n = cities.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = distance(&cities[i], &cities[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Open-path cost of an index route (no closing edge).
    pub fn path_cost(&self, route: &[usize]) -> f64 {
        route.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }

    /// Closed-cycle cost of an index route.
    ///
    /// Zero for routes of fewer than two locations.
    pub fn cycle_cost(&self, route: &[usize]) -> f64 {
        match (route.first(), route.last()) {
            (Some(&first), Some(&last)) if route.len() > 1 => {
                self.path_cost(route) + self.get(last, first)
            }
            _ => 0.0,
        }
    }
}
