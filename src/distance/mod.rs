//! Cost model: Euclidean distance, route costs, and a dense distance matrix.

mod cost;
mod matrix;

pub use cost::{cycle_cost, distance, open_path_cost};
pub use matrix::DistanceMatrix;
