//! Defines evaluation errors.

use thiserror::Error;

use crate::network::layout::Topology;

/// An error type for all network evaluations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The caller supplied data that does not match the network dimensions.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] Malformed),
    /// Transient storage for intermediate or output values could not be obtained.
    #[error("could not allocate storage for {len} values")]
    AllocationFailure {
        /// Number of values requested.
        len: usize,
    },
}

/// The ways caller data can disagree with a [`Topology`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Malformed {
    /// The input sequence holds fewer values than the network has inputs.
    #[error("expected {expected} input values, found {found}")]
    Inputs {
        /// Number of values required.
        expected: usize,
        /// Number of values available.
        found: usize,
    },
    /// The weight sequence does not hold the values required by the topology.
    #[error("expected {expected} weight values, found {found}")]
    Weights {
        /// Number of values required.
        expected: usize,
        /// Number of values available.
        found: usize,
    },
    /// The output buffer cannot hold one value per output unit.
    #[error("output buffer holds {found} values, {expected} required")]
    Outputs {
        /// Number of values required.
        expected: usize,
        /// Capacity of the buffer.
        found: usize,
    },
    /// The weight count of the topology does not fit in `usize`.
    #[error("weight count of topology {0} overflows")]
    Dimensions(Topology),
}
