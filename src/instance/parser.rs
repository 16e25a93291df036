//! City file parser.
//!
//! The format is a fixed 7-line metadata header followed by one city per
//! line as whitespace-separated `index x y`. The header is not interpreted
//! and the index column is ignored: cities are named by their 1-based
//! position after the header. Blank lines and a trailing `EOF` marker are
//! skipped.
//!
//! ```text
//! NAME: sample
//! TYPE: TSP
//! COMMENT: four corners
//! DIMENSION: 4
//! EDGE_WEIGHT_TYPE: EUC_2D
//! DISPLAY_DATA_TYPE: COORD_DISPLAY
//! NODE_COORD_SECTION
//! 1 0.0 0.0
//! 2 1.0 0.0
//! 3 1.0 1.0
//! 4 0.0 1.0
//! EOF
//! ```

use std::path::Path;

use crate::error::{TspError, TspResult};
use crate::models::{validate_cities, City};

/// Number of header lines preceding the city lines.
pub const HEADER_LINES: usize = 7;

/// Parses cities from file content.
///
/// # Errors
///
/// - [`TspError::Parse`] if a city line lacks coordinates or a coordinate is
///   not a number. `line` is the 1-based line in `content`.
/// - [`TspError::InvalidCity`] for non-finite coordinates or duplicates.
///
/// # Examples
///
/// ```
/// use u_tsp_brute::instance::parse_cities;
///
/// let text = "h\nh\nh\nh\nh\nh\nNODE_COORD_SECTION\n7 0.0 0.0\n9 3.0 4.0\nEOF\n";
/// let cities = parse_cities(text).unwrap();
/// assert_eq!(cities.len(), 2);
/// assert_eq!(cities[1].name(), "2");
/// assert_eq!(cities[1].x(), 3.0);
/// ```
pub fn parse_cities(content: &str) -> TspResult<Vec<City>> {
    let mut cities = Vec::new();

    for (idx, line) in content.lines().enumerate().skip(HEADER_LINES) {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() || line == "EOF" {
            continue;
        }

        let mut fields = line.split_whitespace().skip(1);
        let x = parse_coordinate(fields.next(), "x", line_no)?;
        let y = parse_coordinate(fields.next(), "y", line_no)?;
        let name = (cities.len() + 1).to_string();
        cities.push(City::new(name, x, y)?);
    }

    validate_cities(&cities)?;
    log::debug!("instance.parse: cities={}", cities.len());
    Ok(cities)
}

/// Reads and parses a city file.
pub fn read_cities(path: &Path) -> TspResult<Vec<City>> {
    let content = std::fs::read_to_string(path)?;
    let cities = parse_cities(&content)?;
    log::info!("instance.read: path={} cities={}", path.display(), cities.len());
    Ok(cities)
}

fn parse_coordinate(field: Option<&str>, axis: &str, line: usize) -> TspResult<f64> {
    let field = field.ok_or_else(|| TspError::Parse {
        line,
        cause: format!("missing {axis} coordinate"),
    })?;
    field.parse().map_err(|_| TspError::Parse {
        line,
        cause: format!("invalid {axis} coordinate: {field}"),
    })
}
