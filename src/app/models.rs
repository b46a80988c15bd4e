//! Domain model for course records.
//!
//! A course record is the structured representation of one input line:
//! an identifier, a human-readable name, and the prerequisite identifiers
//! in the order they appeared in the source line.

use serde::Serialize;

/// A single course as loaded from the input file
///
/// The `id` is the unique key within the catalog; it is stored case-sensitive
/// exactly as it appeared in the source line. Prerequisite order is the
/// source-line order and is preserved for display only, never used as a sort
/// key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRecord {
    /// Unique course identifier (conventionally uppercase, e.g. "CSCI300")
    pub id: String,

    /// Human-readable course title; may be empty if the source supplied it
    /// as an empty field
    pub name: String,

    /// Prerequisite course identifiers in source order; may be empty
    pub prerequisites: Vec<String>,
}

impl CourseRecord {
    /// Create a new course record
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        prerequisites: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            prerequisites,
        }
    }

    /// Check whether the course has any prerequisites
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }

    /// Render the prerequisite list for display ("None" when empty)
    pub fn prerequisites_display(&self) -> String {
        if self.prerequisites.is_empty() {
            "None".to_string()
        } else {
            self.prerequisites.join(", ")
        }
    }
}
