use crate::section::Section;
use std::collections::HashSet;
use std::fmt;


/// Append-only record of the sections chosen along one search branch.
///
/// A `ScheduleBuilder` keeps sections in decision order and carries a
/// conflict flag that is raised the first time an appended section overlaps
/// one already present. The flag is never cleared.
///
/// # Invariants
///
/// - `has_conflict()` is true iff some pair of accepted sections conflicts
/// - sections are never removed or reordered
///
/// # Ownership
///
/// The builder borrows its sections from the caller's pool, so cloning a
/// builder to open a sibling branch copies only the reference sequence.
///
/// # Examples
///
/// ```
/// use class_scheduler::schedule::ScheduleBuilder;
/// use class_scheduler::section::Section;
/// use class_scheduler::time::TimeInterval;
///
/// let algo = Section::new("1", "CSCI 205", 1, TimeInterval::parse("9:00am", "9:50am", "MWF").unwrap());
/// let arch = Section::new("2", "CSCI 206", 1, TimeInterval::parse("9:30am", "10:20am", "MW").unwrap());
///
/// let mut schedule = ScheduleBuilder::new();
/// schedule.add(&algo);
/// assert!(!schedule.has_conflict());
///
/// // Branch off a copy; the parent is untouched.
/// let branch = schedule.extended(&arch);
/// assert!(branch.has_conflict());
/// assert_eq!(schedule.len(), 1);
/// assert!(branch.contains_group("CSCI 206"));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScheduleBuilder<'a> {
    sections: Vec<&'a Section>,
    has_conflict: bool,
}

impl<'a> ScheduleBuilder<'a> {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            has_conflict: false,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sections: Vec::with_capacity(capacity),
            has_conflict: false,
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Appends a section, raising the conflict flag if it overlaps any
    /// section already accepted.
    ///
    /// Complexity: O(k) in the number of accepted sections.
    pub fn add(&mut self, section: &'a Section) {
        if !self.has_conflict && self.sections.iter().any(|s| s.conflicts_with(section)) {
            self.has_conflict = true;
        }
        self.sections.push(section);
    }

    /// Returns a copy of this builder with `section` appended.
    #[must_use]
    pub fn extended(&self, section: &'a Section) -> Self {
        let mut next = Self::with_capacity(self.sections.len() + 1);
        next.sections.extend_from_slice(&self.sections);
        next.has_conflict = self.has_conflict;
        next.add(section);
        next
    }

    pub fn has_conflict(&self) -> bool {
        self.has_conflict
    }

    /// Accepted sections in decision order.
    pub fn sections(&self) -> &[&'a Section] {
        &self.sections
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Section> + '_ {
        self.sections.iter().copied()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.iter().map(Section::id)
    }

    /// True if an accepted section already belongs to `group`.
    pub fn contains_group(&self, group: &str) -> bool {
        self.sections.iter().any(|s| s.group() == group)
    }

    /// True if `candidate`'s group is already represented.
    pub fn represents_group_of(&self, candidate: &Section) -> bool {
        self.contains_group(candidate.group())
    }

    /// Structural completeness for the tree search: exactly one section per
    /// group and no conflict.
    pub fn is_complete(&self, group_count: usize) -> bool {
        self.sections.len() == group_count && !self.has_conflict
    }

    /// Every conflicting pair, found by exhaustive pairwise comparison.
    ///
    /// Independent of the incremental flag; useful for auditing it.
    pub fn conflicting_pairs(&self) -> Vec<(&'a Section, &'a Section)> {
        let mut pairs = Vec::new();
        for (i, &a) in self.sections.iter().enumerate() {
            for &b in &self.sections[i + 1..] {
                if a.conflicts_with(b) {
                    pairs.push((a, b));
                }
            }
        }
        pairs
    }

    /// Sections in presentation order (by start time, stable).
    pub fn sorted_by_start(&self) -> Vec<&'a Section> {
        let mut sorted = self.sections.clone();
        sorted.sort_by(|a, b| a.cmp_by_start(b));
        sorted
    }

    /// True if both builders hold the same sections, in any order.
    pub fn same_sections(&self, other: &ScheduleBuilder<'_>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mine: HashSet<&str> = self.sections.iter().map(|s| s.id()).collect();
        other.sections.iter().all(|s| mine.contains(s.id()))
    }
}

impl fmt::Display for ScheduleBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "─".repeat(62);
        writeln!(f, "┌{rule}┐")?;
        for section in self.sorted_by_start() {
            writeln!(f, "│ {section}")?;
        }
        if self.has_conflict {
            writeln!(f, "│ (conflicting)")?;
        }
        write!(f, "└{rule}┘")
    }
}
