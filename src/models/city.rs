//! City type and input validation.

use serde::{Deserialize, Serialize};

use crate::error::{TspError, TspResult};

/// A named point in 2-D Euclidean space.
///
/// Equality is structural: two cities are equal when name and both
/// coordinates match. Fields are private so a city cannot change after
/// construction.
///
/// # Examples
///
/// ```
/// use u_tsp_brute::models::City;
///
/// let c = City::new("1", 41.0, 49.0).unwrap();
/// assert_eq!(c.name(), "1");
/// assert_eq!(c.x(), 41.0);
/// assert_eq!(c.y(), 49.0);
///
/// assert!(City::new("bad", f64::NAN, 0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    name: String,
    x: f64,
    y: f64,
}

impl City {
    /// Creates a new city.
    ///
    /// Returns [`TspError::InvalidCity`] if either coordinate is non-finite.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> TspResult<Self> {
        let name = name.into();
        if !x.is_finite() || !y.is_finite() {
            return Err(TspError::InvalidCity {
                reason: format!("non-finite coordinates ({x}, {y})"),
                name,
            });
        }
        Ok(Self { name, x, y })
    }

    /// City name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Checks a city list before it is handed to the search.
///
/// Rejects non-finite coordinates (possible after deserialization, which
/// bypasses [`City::new`]) and structurally duplicate cities.
///
/// # Examples
///
/// ```
/// use u_tsp_brute::models::{City, validate_cities};
///
/// let a = City::new("1", 0.0, 0.0).unwrap();
/// let b = City::new("2", 1.0, 0.0).unwrap();
/// assert!(validate_cities(&[a.clone(), b]).is_ok());
/// assert!(validate_cities(&[a.clone(), a]).is_err());
/// ```
pub fn validate_cities(cities: &[City]) -> TspResult<()> {
    for (i, city) in cities.iter().enumerate() {
        if !city.x.is_finite() || !city.y.is_finite() {
            return Err(TspError::InvalidCity {
                name: city.name.clone(),
                reason: format!("non-finite coordinates ({}, {})", city.x, city.y),
            });
        }
        if cities[..i].contains(city) {
            return Err(TspError::InvalidCity {
                name: city.name.clone(),
                reason: "duplicate city".into(),
            });
        }
    }
    Ok(())
}
