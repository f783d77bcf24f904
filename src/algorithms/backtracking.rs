//! Backtracking tree search over partitioned groups.

use tracing::debug;

use super::config::EnumerationConfig;
use super::error::EnumerationError;
use super::{Enumeration, Enumerator};
use crate::partition::{Group, GroupPartitioner};
use crate::schedule::ScheduleBuilder;
use crate::section::Section;

/// Picks exactly one section per group, visiting groups in partition order.
///
/// At each level every section of the current group opens its own branch
/// with a copy of the parent's builder. A leaf is reached once every group
/// has contributed a section, and is accepted iff it is complete (one section
/// per group) and conflict-free.
///
/// Worst-case work is the product of the group sizes.
#[derive(Debug, Clone, Default)]
pub struct BacktrackingEnumerator {
    required_groups: Vec<String>,
    prune_conflicts: bool,
}

impl BacktrackingEnumerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &EnumerationConfig) -> Self {
        Self {
            required_groups: config.required_groups.clone(),
            prune_conflicts: config.prune_conflicts,
        }
    }

    /// Runs the tree search over already partitioned groups.
    ///
    /// Groups and the sections within them are explored in the given order,
    /// so the output order is fully determined by the input.
    pub fn search<'a>(&self, groups: &[Group<'a>]) -> Enumeration<'a> {
        let mut run = Search {
            groups,
            prune_conflicts: self.prune_conflicts,
            out: Enumeration::default(),
        };
        if !groups.is_empty() {
            run.descend(0, ScheduleBuilder::with_capacity(groups.len()));
        }
        run.out
    }
}

impl Enumerator for BacktrackingEnumerator {
    fn name(&self) -> &'static str {
        "backtracking"
    }

    fn enumerate<'a>(&self, sections: &'a [Section]) -> Result<Enumeration<'a>, EnumerationError> {
        let groups = GroupPartitioner::new(sections)
            .require(self.required_groups.iter().cloned())
            .partition()?;
        debug!(
            strategy = self.name(),
            sections = sections.len(),
            groups = groups.len(),
            "enumeration started"
        );

        let out = self.search(&groups);
        debug!(
            strategy = self.name(),
            calls = out.stats.calls,
            leaves = out.stats.leaves,
            accepted = out.stats.accepted,
            pruned = out.stats.pruned,
            "enumeration finished"
        );
        Ok(out)
    }
}

struct Search<'g, 'a> {
    groups: &'g [Group<'a>],
    prune_conflicts: bool,
    out: Enumeration<'a>,
}

impl<'a> Search<'_, 'a> {
    fn descend(&mut self, depth: usize, schedule: ScheduleBuilder<'a>) {
        self.out.stats.calls += 1;

        let groups = self.groups;
        let Some(group) = groups.get(depth) else {
            if schedule.is_complete(groups.len()) {
                self.out.accept(schedule);
            } else {
                self.out.reject(&schedule);
            }
            return;
        };

        for &section in group.sections() {
            let branch = schedule.extended(section);
            if self.prune_conflicts && branch.has_conflict() {
                self.out.stats.pruned += 1;
                continue;
            }
            self.descend(depth + 1, branch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::{partition, PartitionError};
    use crate::time::TimeInterval;

    fn section(id: &str, group: &str, meeting: &str) -> Section {
        Section::new(id, group, 1, meeting.parse::<TimeInterval>().unwrap())
    }

    fn ids(out: &Enumeration<'_>) -> Vec<Vec<String>> {
        out.schedules
            .iter()
            .map(|s| s.ids().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn empty_input_yields_nothing() {
        let out = BacktrackingEnumerator::new().enumerate(&[]).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.stats.calls, 0);
    }

    #[test]
    fn single_section_yields_one_schedule() {
        let pool = vec![section("1", "A", "M 9:00am - 9:50am")];
        let out = BacktrackingEnumerator::new().enumerate(&pool).unwrap();
        assert_eq!(ids(&out), vec![vec!["1"]]);
    }

    #[test]
    fn disjoint_groups_combine() {
        let pool = vec![
            section("1", "A", "M 9:00am - 9:50am"),
            section("2", "B", "M 10:00am - 10:50am"),
        ];
        let out = BacktrackingEnumerator::new().enumerate(&pool).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.schedules[0].len(), 2);
    }

    #[test]
    fn same_group_sections_never_combine() {
        let pool = vec![
            section("1", "A", "M 9:00am - 9:50am"),
            section("2", "A", "M 9:00am - 9:50am"),
        ];
        let out = BacktrackingEnumerator::new().enumerate(&pool).unwrap();
        assert_eq!(ids(&out), vec![vec!["1"], vec!["2"]]);
        assert!(out.schedules.iter().all(|s| !s.has_conflict()));
    }

    #[test]
    fn overlapping_pair_is_rejected() {
        let pool = vec![
            section("1", "A", "M 9:00am - 9:50am"),
            section("2", "B", "M 9:30am - 10:00am"),
        ];
        let out = BacktrackingEnumerator::new().enumerate(&pool).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.stats.leaves, 1);
        assert_eq!(out.stats.rejected, 1);
    }

    #[test]
    fn visits_smallest_group_first() {
        // Input sizes {1, 3, 2}; partition order is sizes [1, 2, 3].
        let pool = vec![
            section("a1", "A", "M 8:00am - 8:50am"),
            section("b1", "B", "T 8:00am - 8:50am"),
            section("b2", "B", "T 9:00am - 9:50am"),
            section("b3", "B", "T 10:00am - 10:50am"),
            section("c1", "C", "W 8:00am - 8:50am"),
            section("c2", "C", "W 9:00am - 9:50am"),
        ];
        let groups = partition(&pool);
        let sizes: Vec<usize> = groups.iter().map(Group::len).collect();
        assert_eq!(sizes, vec![1, 2, 3]);

        let out = BacktrackingEnumerator::new().search(&groups);
        assert_eq!(out.stats.leaves, 6);
        // 1 root + 1 + 1*2 + 1*2*3
        assert_eq!(out.stats.calls, 10);
        assert_eq!(out.len(), 6);
        assert_eq!(out.schedules[0].ids().collect::<Vec<_>>(), vec!["a1", "c1", "b1"]);
        assert_eq!(out.schedules[5].ids().collect::<Vec<_>>(), vec!["a1", "c2", "b3"]);
    }

    #[test]
    fn pruning_keeps_output_and_skips_work() {
        let pool = vec![
            section("a1", "A", "M 9:00am - 9:50am"),
            section("b1", "B", "M 9:00am - 9:50am"),
            section("b2", "B", "M 10:00am - 10:50am"),
            section("c1", "C", "T 9:00am - 9:50am"),
            section("c2", "C", "T 10:00am - 10:50am"),
        ];
        let full = BacktrackingEnumerator::new().enumerate(&pool).unwrap();
        let pruned = BacktrackingEnumerator::from_config(
            &EnumerationConfig::default().with_pruning(true),
        )
        .enumerate(&pool)
        .unwrap();

        assert_eq!(ids(&full), ids(&pruned));
        assert_eq!(full.len(), 2);
        assert!(pruned.stats.calls < full.stats.calls);
        assert_eq!(pruned.stats.pruned, 1);
        assert_eq!(pruned.stats.rejected, 0);
    }

    #[test]
    fn required_group_without_sections_fails() {
        let pool = vec![section("1", "A", "M 9:00am - 9:50am")];
        let config = EnumerationConfig::default().with_required_groups(["A", "B"]);
        let result = BacktrackingEnumerator::from_config(&config).enumerate(&pool);
        assert_eq!(
            result.unwrap_err(),
            EnumerationError::Partition(PartitionError::EmptyGroup("B".to_string()))
        );
    }

    #[test]
    fn repeated_runs_are_identical() {
        let pool = vec![
            section("1", "A", "MWF 9:00am - 9:50am"),
            section("2", "A", "MWF 10:00am - 10:50am"),
            section("3", "B", "MWF 9:00am - 9:50am"),
            section("4", "B", "MWF 11:00am - 11:50am"),
        ];
        let enumerator = BacktrackingEnumerator::new();
        let first = enumerator.enumerate(&pool).unwrap();
        let second = enumerator.enumerate(&pool).unwrap();
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(first.stats, second.stats);
        assert_eq!(first.len(), 3);
    }
}
