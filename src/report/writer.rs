//! Results file writer.

use std::io::Write;
use std::time::Duration;

use crate::error::TspResult;
use crate::models::{City, Route, SearchResult};

const SECTION_RULE: &str = "----------";
const FOOTER_RULE: &str = "=================================";

/// Default results file name for `n` cities.
pub fn results_file_name(n: usize) -> String {
    format!("results{n}.txt")
}

/// Renders a route as `[n1-n2-...-nN] = <closed-cycle cost>`.
///
/// # Examples
///
/// ```
/// use u_tsp_brute::models::{City, Route};
/// use u_tsp_brute::report::format_route;
///
/// let cities = vec![
///     City::new("1", 0.0, 0.0).unwrap(),
///     City::new("2", 3.0, 0.0).unwrap(),
///     City::new("3", 0.0, 4.0).unwrap(),
/// ];
/// let route = Route::new(vec![0, 1, 2], 12.0);
/// assert_eq!(format_route(&route, &cities), "[1-2-3] = 12.0");
/// ```
pub fn format_route(route: &Route, cities: &[City]) -> String {
    format!("{} = {:?}", route.render(cities), route.cost())
}

/// Formats a run time for the results footer.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.3} seconds", elapsed.as_secs_f64())
}

/// Writes search results in the plain-text results layout.
///
/// The minimum route comes first, followed by every retained route when the
/// search ran in collect-all mode, then the timing footer.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp_brute::models::City;
/// use u_tsp_brute::search::{enumerate, SearchMode};
/// use u_tsp_brute::report::ResultWriter;
///
/// let cities = vec![
///     City::new("1", 0.0, 0.0).unwrap(),
///     City::new("2", 3.0, 0.0).unwrap(),
///     City::new("3", 0.0, 4.0).unwrap(),
/// ];
/// let result = enumerate(&cities, SearchMode::MinOnly).unwrap();
///
/// let mut writer = ResultWriter::new(Vec::new());
/// writer.write_result(&cities, &result).unwrap();
/// writer.write_footer(Duration::from_millis(1500)).unwrap();
/// let text = String::from_utf8(writer.into_inner()).unwrap();
/// assert!(text.starts_with("Min route\n----------\n[1-2-3] = 12.0\n"));
/// assert!(text.contains("Results generated in 1.500 seconds"));
/// ```
#[derive(Debug)]
pub struct ResultWriter<W: Write> {
    out: W,
}

impl<W: Write> ResultWriter<W> {
    /// Wraps an output stream.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the minimum route section and, if retained, all routes.
    pub fn write_result(&mut self, cities: &[City], result: &SearchResult) -> TspResult<()> {
        writeln!(self.out, "Min route")?;
        writeln!(self.out, "{SECTION_RULE}")?;
        writeln!(self.out, "{}", format_route(result.min_route(), cities))?;
        if !result.is_complete() {
            writeln!(
                self.out,
                "(search stopped after {} of {} routes)",
                result.evaluated(),
                result.total()
            )?;
        }

        if let Some(routes) = result.all_routes() {
            writeln!(self.out)?;
            writeln!(self.out, "All routes")?;
            writeln!(self.out, "{SECTION_RULE}")?;
            for route in routes {
                writeln!(self.out, "{}", format_route(route, cities))?;
            }
        }
        Ok(())
    }

    /// Writes the timing footer.
    pub fn write_footer(&mut self, elapsed: Duration) -> TspResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{FOOTER_RULE}")?;
        writeln!(self.out, "Results generated in {}", format_elapsed(elapsed))?;
        writeln!(self.out, "{FOOTER_RULE}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Returns the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}
