use std::collections::{HashMap, HashSet};
use std::fmt::Display;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::section::{distinct_by_id, Section};

/// Directed acyclic graph of pairwise-compatible sections.
///
/// # Invariants
///
/// - one node per distinct section id, inserted in start-time order (stable,
///   so equal starts keep input order)
/// - edge `a → b` iff `a` comes before `b` in that order, the two do not
///   conflict, and they belong to different groups
/// - edges only point forward in insertion order, so the graph is acyclic
///
/// Compatibility is pairwise only. A path may still join two sections that
/// are not adjacent on it and do conflict; the traversal's schedule builder
/// catches those.
#[derive(Debug, Clone)]
pub struct CompatibilityGraph<'a> {
    graph: DiGraph<&'a Section, ()>,
    node_by_id: HashMap<&'a str, NodeIndex>,
    group_count: usize,
}

impl<'a> CompatibilityGraph<'a> {
    /// Builds the graph with one O(n²) pass over section pairs.
    pub fn build(sections: &'a [Section]) -> Self {
        let mut ordered = distinct_by_id(sections);
        ordered.sort_by(|a, b| a.cmp_by_start(b));

        let mut graph = DiGraph::with_capacity(ordered.len(), 0);
        let mut node_by_id = HashMap::with_capacity(ordered.len());
        let nodes: Vec<NodeIndex> = ordered
            .iter()
            .map(|&section| {
                let node = graph.add_node(section);
                node_by_id.insert(section.id(), node);
                node
            })
            .collect();

        for (i, &from) in nodes.iter().enumerate() {
            for &to in &nodes[i + 1..] {
                if compatible(graph[from], graph[to]) {
                    graph.add_edge(from, to, ());
                }
            }
        }

        let group_count = ordered
            .iter()
            .map(|s| s.group())
            .collect::<HashSet<_>>()
            .len();

        Self {
            graph,
            node_by_id,
            group_count,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of distinct group keys among the nodes.
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Node indices in start-time order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn section(&self, node: NodeIndex) -> &'a Section {
        self.graph[node]
    }

    /// Returns the node index for a section id, if it exists.
    pub fn node_of(&self, id: &str) -> Option<NodeIndex> {
        self.node_by_id.get(id).copied()
    }

    /// Later compatible sections, nearest first.
    pub fn successors(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut next: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(node, Direction::Outgoing)
            .collect();
        next.sort_unstable();
        next
    }

    /// True if an edge runs from section `from` to section `to`.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.node_of(from), self.node_of(to)) {
            (Some(a), Some(b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    /// Returns reference to the underlying graph.
    pub fn graph(&self) -> &DiGraph<&'a Section, ()> {
        &self.graph
    }
}

fn compatible(earlier: &Section, later: &Section) -> bool {
    earlier.group() != later.group() && !earlier.conflicts_with(later)
}

impl Display for CompatibilityGraph<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Section | Later compatibles")?;
        for node in self.nodes() {
            let later: Vec<&str> = self
                .successors(node)
                .into_iter()
                .map(|n| self.graph[n].id())
                .collect();
            writeln!(f, "{} → {}", self.graph[node].id(), later.join(", "))?;
        }
        Ok(())
    }
}
