//! Configuration shared by the enumeration strategies.

/// Which maximal chains the graph traversal accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainAcceptance {
    /// Exactly one section for every distinct group, and no conflict.
    ///
    /// With this policy both strategies accept the same set of schedules.
    #[default]
    FullCoverage,
    /// Any conflict-free maximal chain with `min..=max` sections.
    Bounds { min: usize, max: usize },
}

impl ChainAcceptance {
    /// Checks that the policy can accept anything at all.
    pub fn is_valid(&self) -> bool {
        match *self {
            ChainAcceptance::FullCoverage => true,
            ChainAcceptance::Bounds { min, max } => min <= max,
        }
    }
}

/// Configuration for schedule enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnumerationConfig {
    /// Groups that must be present in the input pool. Enumeration fails fast
    /// if any of them has no section.
    pub required_groups: Vec<String>,
    /// Acceptance rule for graph traversal chains.
    pub chain_acceptance: ChainAcceptance,
    /// Stop descending into a backtracking branch as soon as it conflicts.
    /// Output is unchanged; only the number of explored nodes shrinks.
    pub prune_conflicts: bool,
}

impl EnumerationConfig {
    #[must_use]
    pub fn with_required_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_groups = groups.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_chain_acceptance(mut self, acceptance: ChainAcceptance) -> Self {
        self.chain_acceptance = acceptance;
        self
    }

    #[must_use]
    pub fn with_pruning(mut self, prune: bool) -> Self {
        self.prune_conflicts = prune;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EnumerationConfig::default();
        assert!(cfg.required_groups.is_empty());
        assert_eq!(cfg.chain_acceptance, ChainAcceptance::FullCoverage);
        assert!(!cfg.prune_conflicts);
    }

    #[test]
    fn builder_methods_set_fields() {
        let cfg = EnumerationConfig::default()
            .with_required_groups(["CSCI 205"])
            .with_chain_acceptance(ChainAcceptance::Bounds { min: 2, max: 4 })
            .with_pruning(true);
        assert_eq!(cfg.required_groups, vec!["CSCI 205".to_string()]);
        assert_eq!(cfg.chain_acceptance, ChainAcceptance::Bounds { min: 2, max: 4 });
        assert!(cfg.prune_conflicts);
    }

    #[test]
    fn bounds_validity() {
        assert!(ChainAcceptance::FullCoverage.is_valid());
        assert!(ChainAcceptance::Bounds { min: 3, max: 3 }.is_valid());
        assert!(!ChainAcceptance::Bounds { min: 4, max: 3 }.is_valid());
    }
}
