//! Error types for the treemorph engine

use thiserror::Error;

/// Main error type for the engine
#[derive(Debug, Error)]
pub enum Error {
    #[error("category {0} is configured with zero particles")]
    ZeroCount(&'static str),

    #[error("category {0}: cluster size {1} does not divide particle count {2}")]
    ClusterMismatch(&'static str, usize, usize),

    #[error("category {0}: invalid radius range")]
    InvalidRadius(&'static str),
}
