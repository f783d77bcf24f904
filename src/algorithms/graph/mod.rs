//! Compatibility-graph formulation of schedule enumeration.
//!
//! Sections become nodes of a DAG whose edges join compatible, later-starting
//! sections of different groups. Every node serves as a traversal root, since
//! a schedule need not contain any particular early section. From each root
//! a depth-first walk with an explicit stack follows edges into groups not
//! yet represented; a node with no such edge closes a maximal chain, which is
//! then judged by the configured [`ChainAcceptance`].

mod compat;

pub use compat::CompatibilityGraph;

use tracing::debug;

use super::config::{ChainAcceptance, EnumerationConfig};
use super::error::EnumerationError;
use super::{Enumeration, Enumerator};
use crate::partition::GroupPartitioner;
use crate::schedule::ScheduleBuilder;
use crate::section::Section;

/// Depth-first enumerator over a [`CompatibilityGraph`].
#[derive(Debug, Clone, Default)]
pub struct GraphEnumerator {
    required_groups: Vec<String>,
    acceptance: ChainAcceptance,
}

impl GraphEnumerator {
    pub fn new(acceptance: ChainAcceptance) -> Self {
        Self {
            required_groups: Vec::new(),
            acceptance,
        }
    }

    pub fn from_config(config: &EnumerationConfig) -> Self {
        Self {
            required_groups: config.required_groups.clone(),
            acceptance: config.chain_acceptance,
        }
    }

    /// Walks every maximal chain of `graph`, roots in start-time order.
    ///
    /// The stack holds `(node, builder)` pairs where the builder does not yet
    /// contain `node`. Each push carries its own copy of the builder.
    pub fn traverse<'a>(&self, graph: &CompatibilityGraph<'a>) -> Enumeration<'a> {
        let mut out = Enumeration::default();
        let group_count = graph.group_count();

        for root in graph.nodes() {
            let mut stack = vec![(root, ScheduleBuilder::new())];

            while let Some((node, mut schedule)) = stack.pop() {
                out.stats.calls += 1;
                schedule.add(graph.section(node));

                let eligible: Vec<_> = graph
                    .successors(node)
                    .into_iter()
                    .filter(|&next| !schedule.represents_group_of(graph.section(next)))
                    .collect();

                if eligible.is_empty() {
                    if self.accepts(&schedule, group_count) {
                        out.accept(schedule);
                    } else {
                        out.reject(&schedule);
                    }
                    continue;
                }

                // Reverse so the nearest successor is popped first.
                for &next in eligible.iter().rev() {
                    stack.push((next, schedule.clone()));
                }
            }
        }

        out
    }

    fn accepts(&self, schedule: &ScheduleBuilder<'_>, group_count: usize) -> bool {
        if schedule.has_conflict() {
            return false;
        }
        match self.acceptance {
            ChainAcceptance::FullCoverage => schedule.len() == group_count,
            ChainAcceptance::Bounds { min, max } => (min..=max).contains(&schedule.len()),
        }
    }
}

impl Enumerator for GraphEnumerator {
    fn name(&self) -> &'static str {
        "graph"
    }

    fn enumerate<'a>(&self, sections: &'a [Section]) -> Result<Enumeration<'a>, EnumerationError> {
        if let ChainAcceptance::Bounds { min, max } = self.acceptance {
            if min > max {
                return Err(EnumerationError::InvalidBounds { min, max });
            }
        }
        if !self.required_groups.is_empty() {
            GroupPartitioner::new(sections)
                .require(self.required_groups.iter().cloned())
                .partition()?;
        }

        let graph = CompatibilityGraph::build(sections);
        debug!(
            strategy = self.name(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            groups = graph.group_count(),
            "enumeration started"
        );

        let out = self.traverse(&graph);
        debug!(
            strategy = self.name(),
            calls = out.stats.calls,
            leaves = out.stats.leaves,
            accepted = out.stats.accepted,
            "enumeration finished"
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::PartitionError;
    use crate::time::TimeInterval;

    fn section(id: &str, group: &str, meeting: &str) -> Section {
        Section::new(id, group, 1, meeting.parse::<TimeInterval>().unwrap())
    }

    fn ids(out: &Enumeration<'_>) -> Vec<String> {
        out.schedules
            .iter()
            .map(|s| s.ids().collect::<Vec<_>>().join(""))
            .collect()
    }

    fn chain_pool() -> Vec<Section> {
        vec![
            section("A", "GA", "MWF 8:00am - 8:50am"),
            section("B", "GB", "MWF 9:00am - 9:50am"),
            section("C", "GC", "MWF 10:00am - 10:50am"),
        ]
    }

    #[test]
    fn empty_input_yields_nothing() {
        let out = GraphEnumerator::default().enumerate(&[]).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.stats.calls, 0);
    }

    #[test]
    fn full_chain_is_the_only_full_coverage_schedule() {
        let pool = chain_pool();
        let out = GraphEnumerator::default().enumerate(&pool).unwrap();
        assert_eq!(ids(&out), vec!["ABC"]);
        // Maximal chains: ABC, AC, BC, C.
        assert_eq!(out.stats.leaves, 4);
        assert_eq!(out.stats.rejected, 3);
    }

    #[test]
    fn every_root_contributes_chains_under_bounds() {
        let pool = chain_pool();
        let out = GraphEnumerator::new(ChainAcceptance::Bounds { min: 1, max: 3 })
            .enumerate(&pool)
            .unwrap();
        assert_eq!(ids(&out), vec!["ABC", "AC", "BC", "C"]);
        // Root A visits A, AB, ABC, AC; root B visits B, BC; root C visits C.
        assert_eq!(out.stats.calls, 7);
    }

    #[test]
    fn bounds_filter_by_length() {
        let pool = chain_pool();
        let out = GraphEnumerator::new(ChainAcceptance::Bounds { min: 2, max: 2 })
            .enumerate(&pool)
            .unwrap();
        assert_eq!(ids(&out), vec!["AC", "BC"]);
    }

    #[test]
    fn non_adjacent_conflict_is_rejected() {
        // A and C share Friday 10:00-10:50 but are not adjacent on A → B → C.
        let pool = vec![
            section("A", "GA", "MWF 8:00am - 10:50am"),
            section("B", "GB", "TR 9:00am - 9:50am"),
            section("C", "GC", "F 10:00am - 10:50am"),
        ];
        let graph = CompatibilityGraph::build(&pool);
        assert!(graph.has_edge("A", "B"));
        assert!(graph.has_edge("B", "C"));
        assert!(!graph.has_edge("A", "C"));

        let out = GraphEnumerator::default().traverse(&graph);
        assert!(out.is_empty());
    }

    #[test]
    fn represented_group_stops_the_chain() {
        // B → A2 is an edge, but on the path A → B group GA is already taken.
        let pool = vec![
            section("A", "GA", "M 8:00am - 8:50am"),
            section("B", "GB", "T 9:00am - 9:50am"),
            section("A2", "GA", "W 10:00am - 10:50am"),
        ];
        let graph = CompatibilityGraph::build(&pool);
        assert!(graph.has_edge("B", "A2"));

        let out = GraphEnumerator::default().traverse(&graph);
        assert_eq!(ids(&out), vec!["AB", "BA2"]);
        assert!(out.schedules.iter().all(|s| s.len() == 2));
    }

    #[test]
    fn invalid_bounds_are_rejected() {
        let pool = chain_pool();
        let result = GraphEnumerator::new(ChainAcceptance::Bounds { min: 3, max: 1 }).enumerate(&pool);
        assert_eq!(
            result.unwrap_err(),
            EnumerationError::InvalidBounds { min: 3, max: 1 }
        );
    }

    #[test]
    fn required_group_without_sections_fails() {
        let pool = chain_pool();
        let config = EnumerationConfig::default().with_required_groups(["GA", "GZ"]);
        let result = GraphEnumerator::from_config(&config).enumerate(&pool);
        assert_eq!(
            result.unwrap_err(),
            EnumerationError::Partition(PartitionError::EmptyGroup("GZ".to_string()))
        );
    }

    #[test]
    fn repeated_runs_are_identical() {
        let pool = chain_pool();
        let enumerator = GraphEnumerator::new(ChainAcceptance::Bounds { min: 1, max: 3 });
        let first = enumerator.enumerate(&pool).unwrap();
        let second = enumerator.enumerate(&pool).unwrap();
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(first.stats, second.stats);
    }
}
