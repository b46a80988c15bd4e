//! Catalog lookup and ordered traversal
//!
//! Both query operations read the `BTreeMap` directly: point lookup is
//! O(log n) against the sorted keys, and ordered traversal is a linear
//! in-order walk with no sort step at call time.

use super::CourseCatalog;
use crate::app::models::CourseRecord;

impl CourseCatalog {
    /// Look up a course by exact identifier (O(log n))
    ///
    /// Matching is exact and case-sensitive; absence is a normal outcome,
    /// not an error. Callers wanting case-insensitive behavior normalize the
    /// query before calling (the interactive mode upper-cases queries by
    /// default, see `Config::lookup`).
    pub fn find(&self, id: &str) -> Option<&CourseRecord> {
        self.courses.get(id)
    }

    /// Check whether a course id is present in the catalog
    pub fn contains_course(&self, id: &str) -> bool {
        self.courses.contains_key(id)
    }

    /// Iterate over every course in ascending lexicographic id order (O(n))
    ///
    /// Ordering is a structural property of the index, maintained
    /// incrementally as records are inserted. An empty catalog yields an
    /// empty iterator.
    pub fn courses_in_order(&self) -> impl Iterator<Item = (&String, &CourseRecord)> {
        self.courses.iter()
    }

    /// Get all course ids in ascending order
    pub fn course_ids(&self) -> Vec<&String> {
        self.courses.keys().collect()
    }
}
