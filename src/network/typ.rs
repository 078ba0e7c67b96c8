//! Traits for types that can be used as values in a network evaluation.

use std::fmt::Debug;

/// Floating values.
///
/// Inputs, weights and outputs of one evaluation all share a single `Float` type.
pub trait Float: 'static + Copy + Debug + num::Float {}

impl Float for f32 {}
impl Float for f64 {}
