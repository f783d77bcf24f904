//! Adapter from registrar catalog records to [`Section`]s.
//!
//! A catalog record names a course as `"DEPT LEVEL SECTION"` (for example
//! `"CSCI 205 01"`) and lists its meeting strings (`"MWF 9:00 AM - 9:50 AM"`).
//! Records that cannot be placed on a weekly grid are skipped with a log
//! line; records that are present but unreadable are errors.

use std::collections::HashSet;

use tracing::{info, warn};

use super::error::CatalogError;
use super::section::Section;
use crate::time::TimeInterval;

const TO_BE_ANNOUNCED: &str = "TBA";

/// One raw catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogEntry {
    /// Registration number. A fresh id is generated when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub crn: Option<String>,
    /// `"DEPT LEVEL SECTION"`.
    pub course: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    /// Meeting strings; exactly one is supported per section.
    #[cfg_attr(feature = "serde", serde(default))]
    pub times: Vec<String>,
    /// Elective slot this record competes for, if it is an elective alternative.
    #[cfg_attr(feature = "serde", serde(default))]
    pub elective_slot: Option<u32>,
}

impl CatalogEntry {
    pub fn new(crn: impl Into<String>, course: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            crn: Some(crn.into()),
            course: course.into(),
            title: String::new(),
            times: vec![time.into()],
            elective_slot: None,
        }
    }

    #[must_use]
    pub fn as_elective(mut self, slot: u32) -> Self {
        self.elective_slot = Some(slot);
        self
    }
}

/// Converts catalog records into sections, in record order.
///
/// Registration numbers are zero-padded to five digits and course levels to
/// three, so `"MATH 95 01"` and `"MATH 095 02"` share the group `MATH 095`.
/// A record with several meeting strings (a lecture plus a lab, say) becomes
/// one section holding every meeting.
///
/// Skipped (logged, not errors):
/// - records with no meeting time, or any `TBA` meeting
/// - records whose registration number was already seen
///
/// # Errors
///
/// - `MalformedCourseCode` if `course` is not `"DEPT LEVEL SECTION"`
/// - `Time` if a meeting string cannot be parsed
pub fn sections_from_catalog(entries: &[CatalogEntry]) -> Result<Vec<Section>, CatalogError> {
    let mut seen_crns: HashSet<String> = HashSet::new();
    let mut sections = Vec::with_capacity(entries.len());

    for entry in entries {
        if entry.times.is_empty() {
            info!(course = %entry.course, "rejected: no meeting time");
            continue;
        }
        if entry.times.iter().any(|t| t.contains(TO_BE_ANNOUNCED)) {
            info!(course = %entry.course, "rejected: meeting time is TBA");
            continue;
        }
        if entry.times.len() > 1 {
            warn!(
                course = %entry.course,
                meetings = entry.times.len(),
                "section meets in several time blocks"
            );
        }

        let crn = entry.crn.as_deref().map(pad_crn);
        if let Some(crn) = &crn {
            if !seen_crns.insert(crn.clone()) {
                warn!(%crn, "registration number listed more than once; keeping the first");
                continue;
            }
        }

        let (name, index) = split_course_code(&entry.course)?;
        let mut meetings = entry
            .times
            .iter()
            .map(|time| {
                time.parse::<TimeInterval>()
                    .map_err(|source| CatalogError::Time {
                        course: entry.course.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?
            .into_iter();
        let Some(primary) = meetings.next() else {
            continue;
        };
        let id = crn.unwrap_or_else(crate::generate_id);

        let section = match entry.elective_slot {
            Some(slot) => Section::elective(id, slot, name, index, primary),
            None => Section::new(id, name, index, primary),
        };
        sections.push(meetings.fold(section, Section::with_meeting));
    }

    Ok(sections)
}

/// Left-pads a registration number with zeros to five digits.
fn pad_crn(crn: &str) -> String {
    format!("{crn:0>5}")
}

/// Splits `"CSCI 205 01"` into (`"CSCI 205"`, `1`), padding the level to
/// three characters (`"MATH 95"` becomes `"MATH 095"`).
fn split_course_code(course: &str) -> Result<(String, u32), CatalogError> {
    let malformed = || CatalogError::MalformedCourseCode(course.to_string());
    let mut parts = course.split_whitespace();
    let (Some(dept), Some(level), Some(section), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };
    let index = section.parse::<u32>().map_err(|_| malformed())?;
    Ok((format!("{dept} {level:0>3}"), index))
}
