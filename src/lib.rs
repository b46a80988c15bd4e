//! Course Catalog Library
//!
//! A Rust library for loading course records from comma-delimited text files
//! into a sorted in-memory catalog.
//!
//! This library provides tools for:
//! - Parsing delimited course lines with tolerant handling of malformed input
//! - Maintaining an ordered course index keyed by course identifier
//! - Point lookup and full ordered traversal of loaded courses
//! - Load reporting with counts and elapsed wall-clock timing
//! - Comprehensive error handling and recovery

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::CourseRecord;
pub use app::services::catalog::{CourseCatalog, LoadReport};
pub use config::Config;

/// Result type alias for the course catalog
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The supplied course file path could not be opened for reading
    #[error("unable to open course file '{path}': {source}")]
    FileUnreadable {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line had fewer than the two mandatory fields (id and name)
    #[error("malformed course line (expected at least an id and a name): '{content}'")]
    MalformedLine { content: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a file-unreadable error for a failed open
    pub fn file_unreadable(path: impl Into<std::path::PathBuf>, source: std::io::Error) -> Self {
        Self::FileUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed-line error with the offending content
    pub fn malformed_line(content: impl Into<String>) -> Self {
        Self::MalformedLine {
            content: content.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
