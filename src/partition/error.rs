use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PartitionError {
    #[error("Required group has no sections: {0}")]
    EmptyGroup(String),
}
