//! Partitioning of a section pool into requirement groups.
//!
//! Groups are ordered by ascending size so that a search which picks one
//! section per group branches as late as possible: single-section groups
//! contribute no branching and are fixed first, and the widest groups are
//! expanded once most of the schedule is already pinned down.

mod error;

pub use error::PartitionError;

use std::collections::HashMap;

use crate::section::{distinct_by_id, Section};

/// Sections sharing one group key, in first-encountered order.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<'a> {
    key: &'a str,
    sections: Vec<&'a Section>,
}

impl<'a> Group<'a> {
    pub fn key(&self) -> &'a str {
        self.key
    }

    pub fn sections(&self) -> &[&'a Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Splits a section pool by group key.
///
/// # Example
///
/// ```
/// use class_scheduler::partition::GroupPartitioner;
/// use class_scheduler::section::Section;
/// use class_scheduler::time::TimeInterval;
///
/// let t = |s: &str| s.parse::<TimeInterval>().unwrap();
/// let pool = vec![
///     Section::new("1", "CSCI 206", 1, t("MWF 9:00am - 9:50am")),
///     Section::new("2", "CSCI 206", 2, t("MWF 11:00am - 11:50am")),
///     Section::new("3", "CSCI 202", 1, t("TR 3:00pm - 3:50pm")),
/// ];
///
/// let groups = GroupPartitioner::new(&pool).partition().unwrap();
/// assert_eq!(groups[0].key(), "CSCI 202");
/// assert_eq!(groups[1].len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GroupPartitioner<'a> {
    sections: &'a [Section],
    required: Vec<String>,
}

impl<'a> GroupPartitioner<'a> {
    pub fn new(sections: &'a [Section]) -> Self {
        Self {
            sections,
            required: Vec::new(),
        }
    }

    /// Declares groups that must be filled; a declared group with no section
    /// makes [`partition`](Self::partition) fail.
    #[must_use]
    pub fn require<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required.extend(groups.into_iter().map(Into::into));
        self
    }

    /// Groups ordered by ascending size; equal sizes keep first-encountered
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `EmptyGroup` for the first required group that has no section.
    pub fn partition(&self) -> Result<Vec<Group<'a>>, PartitionError> {
        let groups = partition(self.sections);
        for key in &self.required {
            if !groups.iter().any(|g| g.key == key.as_str()) {
                return Err(PartitionError::EmptyGroup(key.clone()));
            }
        }
        Ok(groups)
    }
}

/// Partitions `sections` by group key, smallest groups first.
///
/// Duplicate section ids are dropped. An empty pool yields no groups.
pub fn partition(sections: &[Section]) -> Vec<Group<'_>> {
    let mut groups: Vec<Group<'_>> = Vec::new();
    let mut position: HashMap<&str, usize> = HashMap::new();

    for section in distinct_by_id(sections) {
        match position.get(section.group()) {
            Some(&i) => groups[i].sections.push(section),
            None => {
                position.insert(section.group(), groups.len());
                groups.push(Group {
                    key: section.group(),
                    sections: vec![section],
                });
            }
        }
    }

    // `sort_by_key` is stable, which keeps ties in encounter order.
    groups.sort_by_key(Group::len);
    groups
}
