//! Catalog loading from delimited course files
//!
//! Loading streams the file line by line, applies the course line parser to
//! every non-blank line, and inserts each parsed record into the catalog
//! keyed by its id. Malformed lines are skipped with a warning and recorded
//! in the load report; they never abort the batch. A failed open leaves the
//! catalog untouched.

use super::CourseCatalog;
use super::parser;
use super::report::LoadReport;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Policy for the first non-blank line of a course file
///
/// The input format specifies no header row, so files in the wild appear
/// both with and without one. The policy makes the choice explicit instead
/// of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderPolicy {
    /// Skip the first non-blank line only when its first field names the
    /// identifier column (e.g. `courseId`)
    #[default]
    Auto,
    /// Parse the first line as an ordinary record
    Parse,
    /// Always skip the first non-blank line
    Skip,
}

impl CourseCatalog {
    /// Load courses from a delimited text file using the default header policy
    ///
    /// See [`CourseCatalog::load_from_with`] for the full contract.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<LoadReport> {
        self.load_from_with(path, HeaderPolicy::default())
    }

    /// Load courses from a delimited text file
    ///
    /// Opens the file at `path`, streams its lines, and inserts every
    /// successfully parsed record into the catalog, overwriting any existing
    /// record with the same id. Loading is cumulative across calls: prior
    /// entries are kept, and newly parsed values win on key collision.
    ///
    /// Blank and whitespace-only lines are skipped silently before parsing.
    /// Malformed lines (fewer than two fields) are skipped with a warning
    /// and counted in the report; the load as a whole still succeeds.
    ///
    /// # Errors
    /// * Returns `Error::FileUnreadable` if the file cannot be opened; the
    ///   catalog is left completely unchanged in that case
    /// * Returns `Error::Io` if a read fails mid-stream
    pub fn load_from_with(
        &mut self,
        path: impl AsRef<Path>,
        header_policy: HeaderPolicy,
    ) -> Result<LoadReport> {
        let path = path.as_ref();
        let start_time = Instant::now();

        debug!("Loading course file: {}", path.display());

        let file = File::open(path).map_err(|e| Error::file_unreadable(path, e))?;
        let reader = BufReader::new(file);

        let mut report = LoadReport::new();
        let mut seen_first_line = false;

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                Error::io(
                    format!("failed to read line from '{}'", path.display()),
                    e,
                )
            })?;
            let line_number = index + 1;
            report.lines_read += 1;

            // Blank lines are not records and not errors
            if line.trim().is_empty() {
                continue;
            }

            if !seen_first_line {
                seen_first_line = true;
                let is_header = match header_policy {
                    HeaderPolicy::Skip => true,
                    HeaderPolicy::Auto => parser::looks_like_header(&line),
                    HeaderPolicy::Parse => false,
                };
                if is_header {
                    debug!("Skipping header line: '{}'", line);
                    report.header_skipped = true;
                    continue;
                }
            }

            match parser::parse_line(&line) {
                Ok(record) => {
                    if self.insert(record).is_some() {
                        debug!("Overwrote existing course at line {}", line_number);
                    }
                    report.records_loaded += 1;
                }
                Err(e) => {
                    warn!("Skipping malformed line {}: {}", line_number, e);
                    report.record_skip(line_number, &line);
                }
            }
        }

        report.load_duration = start_time.elapsed();

        info!(
            "Loaded {} courses from {} ({} lines skipped) in {:.2?}",
            report.records_loaded,
            path.display(),
            report.lines_skipped(),
            report.load_duration
        );

        Ok(report)
    }
}
