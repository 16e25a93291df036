//! City-list sources: the fixed-header city file format and seeded random
//! instances.

mod generate;
mod parser;

pub use generate::{random_cities, GRID_SIZE};
pub use parser::{parse_cities, read_cities, HEADER_LINES};
