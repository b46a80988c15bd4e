//! Course line parsing
//!
//! One record per line, fields separated by commas with no quoting or
//! escaping support:
//!
//! ```text
//! <id>,<name>[,<prereq1>[,<prereq2>...]]
//! ```
//!
//! Fields are taken verbatim between delimiters; no whitespace trimming is
//! performed. Blank lines never reach the parser in the load path - the
//! loader skips them before parsing.

use crate::app::models::CourseRecord;
use crate::constants::{FIELD_DELIMITER, HEADER_ID_NAMES};
use crate::{Error, Result};

/// Parse one line of delimited text into a course record
///
/// The first field becomes the course id, the second the course name, and
/// any remaining fields become prerequisites in source order. A line ending
/// in a trailing comma yields an empty-string prerequisite entry, which is
/// preserved rather than filtered.
///
/// # Errors
/// Returns `Error::MalformedLine` when the line splits into fewer than two
/// fields. This is a recoverable condition: the loader skips the line and
/// continues with the rest of the batch.
pub fn parse_line(line: &str) -> Result<CourseRecord> {
    let mut tokens = line.split(FIELD_DELIMITER);

    let id = tokens.next().unwrap_or_default();
    let Some(name) = tokens.next() else {
        return Err(Error::malformed_line(line));
    };

    let prerequisites: Vec<String> = tokens.map(str::to_string).collect();

    Ok(CourseRecord::new(id, name, prerequisites))
}

/// Check whether a raw line looks like a header row
///
/// Used by the `auto` header policy for the first non-blank line of a file:
/// a line whose first field names the identifier column (e.g. `courseId`)
/// is treated as a header rather than a course.
pub fn looks_like_header(line: &str) -> bool {
    let first_field = line.split(FIELD_DELIMITER).next().unwrap_or_default();
    let first_field = first_field.trim().to_lowercase();
    HEADER_ID_NAMES.contains(&first_field.as_str())
}
