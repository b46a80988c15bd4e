//! Shared constants for course file parsing and CLI defaults.

/// Default course file name used when the caller supplies no path
pub const DEFAULT_COURSE_FILE: &str = "coursesFile.csv";

/// Field delimiter in course files
pub const FIELD_DELIMITER: char = ',';

/// Identifier-column names that mark a first line as a header under the
/// `auto` header policy (compared case-insensitively against the first field)
pub const HEADER_ID_NAMES: &[&str] = &["courseid", "course_id", "course id", "id"];

/// Application directory name used for the default config file location
pub const APP_CONFIG_DIR: &str = "course-catalog";

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";
