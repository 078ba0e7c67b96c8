//! Transfer functions applied to the linear combination of a unit, and the output policy choosing
//! between them and softmax.

use crate::network::typ::Float;

/// A scalar function applied to the linear combination computed by a unit.
///
/// Implemented by [`Logistic`], [`Identity`], and any closure or function `Fn(E) -> E`.
pub trait Transfer<E> {
    /// Apply the function to `x`.
    fn apply(&self, x: E) -> E;
}

impl<E, F> Transfer<E> for F
where
    F: Fn(E) -> E,
{
    fn apply(&self, x: E) -> E {
        self(x)
    }
}

/// The logistic function `1 / (1 + e^-x)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Logistic;

impl<E> Transfer<E> for Logistic
where
    E: Float,
{
    fn apply(&self, x: E) -> E {
        logistic(x)
    }
}

/// The identity function, leaving a unit's linear combination unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl<E> Transfer<E> for Identity
where
    E: Float,
{
    fn apply(&self, x: E) -> E {
        x
    }
}

/// Compute `1 / (1 + e^-x)`.
pub fn logistic<E>(x: E) -> E
where
    E: Float,
{
    E::one() / (E::one() + (-x).exp())
}

/// Normalize `values` in place into a distribution summing to one.
///
/// The maximum is subtracted before exponentiation so that large values do not overflow. An empty
/// slice is left as is.
pub fn softmax<E>(values: &mut [E])
where
    E: Float,
{
    let Some(max) = values.iter().copied().reduce(E::max) else {
        return;
    };
    let mut sum = E::zero();
    for x in values.iter_mut() {
        *x = (*x - max).exp();
        sum = sum + *x;
    }
    for x in values.iter_mut() {
        *x = *x / sum;
    }
}

/// How the linear values of the output layer are turned into network outputs.
///
/// The policy depends only on the number of outputs and cannot be overridden by the caller's
/// transfer function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputPolicy {
    /// There is nothing to produce.
    Empty,
    /// The single output unit goes through the unit transfer function.
    Unit,
    /// All output units are normalized jointly.
    Softmax,
}

impl OutputPolicy {
    /// Select the policy for a network with `outputs` output units.
    pub const fn for_outputs(outputs: usize) -> Self {
        match outputs {
            0 => Self::Empty,
            1 => Self::Unit,
            _ => Self::Softmax,
        }
    }

    /// Turn the linear values of the output layer into outputs, in place.
    pub fn apply<E, T>(self, transfer: &T, values: &mut [E])
    where
        E: Float,
        T: Transfer<E> + ?Sized,
    {
        match self {
            Self::Empty => {}
            Self::Unit => {
                for x in values.iter_mut() {
                    *x = transfer.apply(*x);
                }
            }
            Self::Softmax => softmax(values),
        }
    }
}
