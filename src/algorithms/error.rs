use thiserror::Error;

use crate::partition::PartitionError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnumerationError {
    #[error(transparent)]
    Partition(#[from] PartitionError),

    #[error("Invalid chain length bounds: min {min} exceeds max {max}")]
    InvalidBounds { min: usize, max: usize },
}
