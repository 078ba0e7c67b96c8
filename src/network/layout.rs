//! Network dimensions and the layout of the flat weight sequence.
//!
//! Weights are densely packed, one block per unit. A block starts with the unit's bias followed
//! by one weight per unit input, in input order. When the network has a hidden layer, the `nh`
//! hidden blocks (each `1 + nx` long) come first and are followed by the `ny` output blocks (each
//! `1 + nh` long). Without a hidden layer, the sequence holds only the `ny` output blocks, each
//! `1 + nx` long.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dimensions of a network with at most one hidden layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Topology {
    /// Number of network inputs (`nx`).
    pub inputs: usize,
    /// Number of hidden units (`nh`); zero means there is no hidden layer.
    pub hidden: usize,
    /// Number of output units (`ny`).
    pub outputs: usize,
}

impl Topology {
    /// Create a topology with `inputs` inputs, `hidden` hidden units and `outputs` output units.
    pub const fn new(inputs: usize, hidden: usize, outputs: usize) -> Self {
        Self {
            inputs,
            hidden,
            outputs,
        }
    }

    /// Check if the network has a hidden layer.
    pub const fn has_hidden_layer(&self) -> bool {
        self.hidden > 0
    }

    /// Number of values in the weight block of a hidden unit.
    pub const fn hidden_block_len(&self) -> usize {
        1 + self.inputs
    }

    /// Number of values in the weight block of an output unit.
    pub const fn output_block_len(&self) -> usize {
        if self.has_hidden_layer() {
            1 + self.hidden
        } else {
            1 + self.inputs
        }
    }

    /// Number of values consumed by the hidden layer.
    pub fn hidden_weight_count(&self) -> Option<usize> {
        if self.has_hidden_layer() {
            self.hidden.checked_mul(self.inputs.checked_add(1)?)
        } else {
            Some(0)
        }
    }

    /// Number of values consumed by the output layer.
    pub fn output_weight_count(&self) -> Option<usize> {
        let fan_in = if self.has_hidden_layer() {
            self.hidden
        } else {
            self.inputs
        };
        self.outputs.checked_mul(fan_in.checked_add(1)?)
    }

    /// Total number of weights `v` read by one evaluation, or `None` if it does not fit in
    /// `usize`.
    pub fn weight_count(&self) -> Option<usize> {
        self.hidden_weight_count()?
            .checked_add(self.output_weight_count()?)
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.inputs, self.hidden, self.outputs)
    }
}
