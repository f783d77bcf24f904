use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::time::TimeInterval;
use crate::Id;

/// A schedulable course offering.
///
/// Every section belongs to exactly one group: the pool of mutually
/// substitutable sections from which a schedule may pick at most one. For a
/// required course the group is the course name; an elective alternative
/// carries the label of the elective pool it competes in.
///
/// # Identity
///
/// Equality and hashing use the identifier alone. Two sections with the same
/// id are the same section even if other fields differ.
///
/// # Ordering
///
/// Sections order by the start of their primary meeting. This is exposed as
/// [`cmp_by_start`](Self::cmp_by_start) rather than `Ord`, because an
/// ordering that ignores the id cannot agree with id-based equality.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    id: Id,
    name: String,
    index: u32,
    group: String,
    interval: TimeInterval,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    extra_meetings: Vec<TimeInterval>,
}

impl Section {
    /// Creates a required section; its group is its course name.
    pub fn new(
        id: impl Into<Id>,
        name: impl Into<String>,
        index: u32,
        interval: TimeInterval,
    ) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            group: name.clone(),
            name,
            index,
            interval,
            extra_meetings: Vec::new(),
        }
    }

    /// Creates an alternative for elective slot `slot` (group `ELECTIVE <slot>`).
    pub fn elective(
        id: impl Into<Id>,
        slot: u32,
        name: impl Into<String>,
        index: u32,
        interval: TimeInterval,
    ) -> Self {
        Self::new(id, name, index, interval).in_group(elective_group(slot))
    }

    /// Replaces the group key.
    #[must_use]
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Adds another weekly meeting, such as an evening lab.
    ///
    /// The earliest-starting meeting stays the primary [`interval`](Self::interval).
    #[must_use]
    pub fn with_meeting(mut self, meeting: TimeInterval) -> Self {
        if meeting.precedes_start_of(&self.interval) {
            let previous = std::mem::replace(&mut self.interval, meeting);
            self.extra_meetings.insert(0, previous);
        } else {
            self.extra_meetings.push(meeting);
        }
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// Primary (earliest-starting) meeting.
    pub fn interval(&self) -> &TimeInterval {
        &self.interval
    }

    /// All weekly meetings, primary first.
    pub fn meetings(&self) -> impl Iterator<Item = &TimeInterval> {
        std::iter::once(&self.interval).chain(&self.extra_meetings)
    }

    /// True when the group is the course's own name.
    pub fn is_required(&self) -> bool {
        self.group == self.name
    }

    /// True if any meeting of `self` overlaps any meeting of `other`.
    pub fn conflicts_with(&self, other: &Section) -> bool {
        self.meetings()
            .any(|mine| other.meetings().any(|theirs| mine.conflicts_with(theirs)))
    }

    /// True if this section's primary meeting starts strictly earlier than `other`'s.
    pub fn precedes(&self, other: &Section) -> bool {
        self.interval.precedes_start_of(&other.interval)
    }

    /// Orders by primary start time; id and group play no role.
    pub fn cmp_by_start(&self, other: &Section) -> Ordering {
        if self.precedes(other) {
            Ordering::Less
        } else if other.precedes(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Group label of elective slot `slot`.
pub fn elective_group(slot: u32) -> String {
    format!("ELECTIVE {slot}")
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Section {}

impl Hash for Section {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} -> {} {}-{:02} {}",
            self.group, self.id, self.name, self.index, self.interval
        )?;
        for meeting in &self.extra_meetings {
            write!(f, ", {meeting}")?;
        }
        Ok(())
    }
}

/// Returns the sections with duplicate ids removed, keeping first occurrences.
pub fn distinct_by_id(sections: &[Section]) -> Vec<&Section> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(sections.len());
    sections
        .iter()
        .filter(|section| {
            let fresh = seen.insert(section.id());
            if !fresh {
                tracing::warn!(
                    id = section.id(),
                    "duplicate section id; keeping the first occurrence"
                );
            }
            fresh
        })
        .collect()
}
