//! Schedule enumeration strategies.
//!
//! Two interchangeable strategies produce every acceptable schedule from a
//! section pool:
//!
//! - [`BacktrackingEnumerator`] partitions the pool into groups (smallest
//!   first) and picks one section per group by recursive tree search.
//! - [`GraphEnumerator`] builds a compatibility DAG over the sections and
//!   walks every maximal chain depth-first with an explicit stack.
//!
//! Each search branch owns its own [`ScheduleBuilder`]; branches never share
//! mutable state and a fresh empty builder seeds every enumeration call.

mod backtracking;
mod config;
mod error;
pub mod graph;


pub use backtracking::BacktrackingEnumerator;
pub use config::{ChainAcceptance, EnumerationConfig};
pub use error::EnumerationError;
pub use graph::{CompatibilityGraph, GraphEnumerator};

use crate::schedule::ScheduleBuilder;
use crate::section::Section;

/// Strategy that enumerates acceptable schedules from a section pool.
pub trait Enumerator {
    /// Short strategy name for logs.
    fn name(&self) -> &'static str;

    /// Enumerates all accepted schedules in a deterministic order.
    ///
    /// The returned schedules borrow from `sections`.
    fn enumerate<'a>(&self, sections: &'a [Section]) -> Result<Enumeration<'a>, EnumerationError>;
}

/// Diagnostic counters collected during one enumeration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search nodes visited (recursive calls or stack pops).
    pub calls: usize,
    /// Completed candidates evaluated for acceptance.
    pub leaves: usize,
    pub accepted: usize,
    pub rejected: usize,
    /// Branches abandoned early because they already conflicted.
    pub pruned: usize,
}

/// Accepted schedules plus the counters of the run that produced them.
#[derive(Debug, Clone, Default)]
pub struct Enumeration<'a> {
    pub schedules: Vec<ScheduleBuilder<'a>>,
    pub stats: SearchStats,
}

impl<'a> Enumeration<'a> {
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    pub fn into_schedules(self) -> Vec<ScheduleBuilder<'a>> {
        self.schedules
    }

    pub(crate) fn accept(&mut self, schedule: ScheduleBuilder<'a>) {
        self.stats.leaves += 1;
        self.stats.accepted += 1;
        self.schedules.push(schedule);
    }

    pub(crate) fn reject(&mut self, schedule: &ScheduleBuilder<'a>) {
        self.stats.leaves += 1;
        self.stats.rejected += 1;
        tracing::trace!(
            sections = schedule.len(),
            conflict = schedule.has_conflict(),
            "candidate rejected"
        );
    }
}

/// Enumerates schedules by backtracking with the default configuration.
///
/// ```
/// use class_scheduler::{enumerate_by_backtracking, Section, TimeInterval};
///
/// let t = |s: &str| s.parse::<TimeInterval>().unwrap();
/// let pool = vec![
///     Section::new("50537", "CSCI 205", 1, t("MWF 9:00am - 9:50am")),
///     Section::new("50860", "CSCI 205", 2, t("MWF 10:00am - 10:50am")),
///     Section::new("50120", "CSCI 206", 1, t("MWF 9:00am - 9:50am")),
/// ];
///
/// let schedules = enumerate_by_backtracking(&pool);
/// assert_eq!(schedules.len(), 1);
/// assert_eq!(schedules[0].ids().collect::<Vec<_>>(), vec!["50120", "50860"]);
/// ```
pub fn enumerate_by_backtracking(sections: &[Section]) -> Vec<ScheduleBuilder<'_>> {
    let groups = crate::partition::partition(sections);
    BacktrackingEnumerator::default()
        .search(&groups)
        .into_schedules()
}

/// Enumerates schedules by compatibility-graph traversal with the default
/// configuration (full group coverage).
pub fn enumerate_by_graph(sections: &[Section]) -> Vec<ScheduleBuilder<'_>> {
    let graph = CompatibilityGraph::build(sections);
    GraphEnumerator::default().traverse(&graph).into_schedules()
}
