//! class_scheduler - weekly class schedule enumeration
//!
//! Generates every feasible weekly schedule from a pool of course sections,
//! picking at most one section per requirement group and rejecting schedules
//! whose meetings overlap. Two strategies are provided: a backtracking tree
//! search over partitioned groups and a depth-first walk over a compatibility
//! DAG.

pub mod algorithms;
pub mod partition;
pub mod schedule;
pub mod section;
pub mod time;

pub use algorithms::{enumerate_by_backtracking, enumerate_by_graph};
pub use schedule::ScheduleBuilder;
pub use section::Section;
pub use time::TimeInterval;

/// Identifier type used for sections (typically a registration number).
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
