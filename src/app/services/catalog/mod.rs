//! Course catalog service: an ordered course index with O(log n) lookups
//!
//! This module provides the sorted in-memory course index at the center of
//! the program. Courses are keyed by identifier in a `BTreeMap`, so ascending
//! lexicographic key order is a structural invariant of the index rather than
//! a sort step performed at query time. A hash map would satisfy point lookup
//! but cannot satisfy the ordered-traversal contract, so it is not used.

use crate::app::models::CourseRecord;
use std::collections::BTreeMap;

pub mod loader;
pub mod parser;
pub mod query;
pub mod report;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use loader::HeaderPolicy;
pub use report::LoadReport;

/// Sorted course index keyed by course identifier
///
/// The catalog is created empty and populated by zero or more load
/// operations; each load adds to or overwrites the existing entries without
/// clearing them first. Keys are compared byte-wise, so iteration order is
/// ascending lexicographic order of the stored identifiers. There is no
/// deletion operation; the catalog lives for the session and is discarded at
/// process exit.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    /// Courses indexed by id; BTreeMap keeps keys sorted on insert
    pub(crate) courses: BTreeMap<String, CourseRecord>,
}

impl CourseCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            courses: BTreeMap::new(),
        }
    }

    /// Insert a course, replacing any existing record with the same id
    ///
    /// Replacement is wholesale: prerequisite lists are never merged.
    /// Returns the previous record if one was displaced.
    pub fn insert(&mut self, record: CourseRecord) -> Option<CourseRecord> {
        self.courses.insert(record.id.clone(), record)
    }

    /// Get the total number of courses in the catalog
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Check whether the catalog holds no courses
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
