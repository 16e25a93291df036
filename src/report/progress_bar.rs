//! Console progress bar.

use std::io::Write;

use crate::search::ProgressSink;

/// Percent covered by one bar segment.
const PERCENT_INCREMENT: u64 = 5;
const BAR_WIDTH: usize = (100 / PERCENT_INCREMENT) as usize;

/// Text progress bar redrawn in place with a carriage return:
/// `[=========           ] 45.00% complete`.
///
/// Redraws only when the displayed percentage changes. Write errors are
/// ignored; the bar is cosmetic.
///
/// # Examples
///
/// ```
/// use u_tsp_brute::report::ProgressBar;
/// use u_tsp_brute::search::ProgressSink;
///
/// let mut bar = ProgressBar::new(Vec::new());
/// bar.update(9, 20);
/// let out = String::from_utf8(bar.into_inner()).unwrap();
/// assert_eq!(out, "\r[=========           ] 45.00% complete");
/// ```
#[derive(Debug)]
pub struct ProgressBar<W: Write> {
    out: W,
    last_hundredths: Option<u64>,
}

impl<W: Write> ProgressBar<W> {
    /// Creates a bar drawing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_hundredths: None,
        }
    }

    /// Blanks the bar line.
    pub fn clear(&mut self) {
        let _ = write!(self.out, "\r{}\r", " ".repeat(BAR_WIDTH + 20));
        let _ = self.out.flush();
    }

    /// Returns the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressSink for ProgressBar<W> {
    fn update(&mut self, completed: u64, total: u64) {
        if total == 0 {
            return;
        }
        // Hundredths of a percent, rounded half up.
        let hundredths = ((completed as u128 * 20_000 / total as u128 + 1) / 2) as u64;
        if self.last_hundredths == Some(hundredths) {
            return;
        }
        self.last_hundredths = Some(hundredths);

        let filled = ((hundredths / 100) / PERCENT_INCREMENT) as usize;
        let filled = filled.min(BAR_WIDTH);
        let _ = write!(
            self.out,
            "\r[{}{}] {}.{:02}% complete",
            "=".repeat(filled),
            " ".repeat(BAR_WIDTH - filled),
            hundredths / 100,
            hundredths % 100
        );
        let _ = self.out.flush();
    }
}
