//! Seeded random instances.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::TspResult;
use crate::models::City;

/// Side length of the square random cities are drawn from.
pub const GRID_SIZE: f64 = 1000.0;

/// Generates `n` cities uniformly in `[0, GRID_SIZE)²`, named `1..=n`.
///
/// The same seed always yields the same cities. Exactly `n` cities are
/// returned; any construction error is propagated, never skipped.
///
/// # Examples
///
/// ```
/// use u_tsp_brute::instance::random_cities;
///
/// let a = random_cities(5, 42).unwrap();
/// let b = random_cities(5, 42).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a[4].name(), "5");
/// ```
pub fn random_cities(n: usize, seed: u64) -> TspResult<Vec<City>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let cities = (1..=n)
        .map(|i| {
            let x = rng.random_range(0.0..GRID_SIZE);
            let y = rng.random_range(0.0..GRID_SIZE);
            City::new(i.to_string(), x, y)
        })
        .collect::<TspResult<Vec<_>>>()?;
    log::debug!("instance.random: cities={} seed={seed}", cities.len());
    Ok(cities)
}
