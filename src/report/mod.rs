//! Output collaborators: the results file and the console progress bar.

mod progress_bar;
mod writer;

pub use progress_bar::ProgressBar;
pub use writer::{format_elapsed, format_route, results_file_name, ResultWriter};
