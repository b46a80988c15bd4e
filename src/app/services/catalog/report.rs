//! Load reporting and statistics tracking
//!
//! This module defines the summary returned by a catalog load operation:
//! counts of lines read, records loaded and lines skipped as malformed,
//! plus the elapsed wall-clock duration of the whole load.

use serde::Serialize;
use std::time::Duration;

/// A line skipped during loading, with its 1-based position in the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number within the source file
    pub line_number: usize,

    /// The raw line content that failed to parse
    pub content: String,
}

/// Summary of a single load operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    /// Total lines read from the file, including blank and skipped lines
    pub lines_read: usize,

    /// Number of records successfully parsed and inserted
    pub records_loaded: usize,

    /// Whether a header line was detected and skipped
    pub header_skipped: bool,

    /// Malformed lines skipped during the load
    pub skipped: Vec<SkippedLine>,

    /// Wall-clock duration of the whole load operation
    #[serde(with = "duration_secs")]
    pub load_duration: Duration,
}

impl LoadReport {
    /// Create a new empty load report
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines skipped as malformed
    pub fn lines_skipped(&self) -> usize {
        self.skipped.len()
    }

    /// Check whether any malformed lines were skipped
    pub fn has_skips(&self) -> bool {
        !self.skipped.is_empty()
    }

    /// Record a skipped line
    pub(crate) fn record_skip(&mut self, line_number: usize, content: &str) {
        self.skipped.push(SkippedLine {
            line_number,
            content: content.to_string(),
        });
    }

    /// Loading rate in records per second
    pub fn loading_rate(&self) -> f64 {
        if self.load_duration.is_zero() {
            0.0
        } else {
            self.records_loaded as f64 / self.load_duration.as_secs_f64()
        }
    }

    /// Get a summary string of the load
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} courses ({} malformed lines skipped) in {:.2?}",
            self.records_loaded,
            self.lines_skipped(),
            self.load_duration
        )
    }
}

/// Serialize `Duration` as fractional seconds for the JSON report
mod duration_secs {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(duration.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_is_empty() {
        let report = LoadReport::new();

        assert_eq!(report.lines_read, 0);
        assert_eq!(report.records_loaded, 0);
        assert_eq!(report.lines_skipped(), 0);
        assert!(!report.has_skips());
        assert_eq!(report.loading_rate(), 0.0);
    }

    #[test]
    fn test_record_skip() {
        let mut report = LoadReport::new();
        report.record_skip(3, "CSCI100");

        assert!(report.has_skips());
        assert_eq!(report.lines_skipped(), 1);
        assert_eq!(report.skipped[0].line_number, 3);
        assert_eq!(report.skipped[0].content, "CSCI100");
    }

    #[test]
    fn test_loading_rate() {
        let mut report = LoadReport::new();
        report.records_loaded = 800;
        report.load_duration = Duration::from_secs(4);

        assert_eq!(report.loading_rate(), 200.0);
    }

    #[test]
    fn test_summary() {
        let mut report = LoadReport::new();
        report.lines_read = 10;
        report.records_loaded = 8;
        report.record_skip(2, "bad");
        report.record_skip(7, "also-bad");
        report.load_duration = Duration::from_millis(1500);

        let summary = report.summary();
        assert!(summary.contains("8 courses"));
        assert!(summary.contains("2 malformed lines skipped"));
    }
}
