//! Sequential reading of weight blocks.

use crate::network::{error::Malformed, typ::Float};

/// Reads weight blocks front to back from a weight sequence.
///
/// The cursor never pulls more than `expected` values from the underlying iterator.
#[derive(Debug)]
pub(crate) struct WeightCursor<I> {
    weights: I,
    consumed: usize,
    expected: usize,
}

impl<E, I> WeightCursor<I>
where
    E: Float,
    I: Iterator<Item = E>,
{
    /// Create a cursor reading `expected` weights in total.
    pub(crate) fn new(weights: I, expected: usize) -> Self {
        Self {
            weights,
            consumed: 0,
            expected,
        }
    }

    /// Number of weights read so far.
    pub(crate) fn consumed(&self) -> usize {
        self.consumed
    }

    fn next(&mut self) -> Result<E, Malformed> {
        if self.consumed == self.expected {
            return Err(self.short());
        }
        let w = self.weights.next().ok_or_else(|| self.short())?;
        self.consumed += 1;
        Ok(w)
    }

    fn short(&self) -> Malformed {
        Malformed::Weights {
            expected: self.expected,
            found: self.consumed,
        }
    }

    /// Read the next block (a bias followed by one weight per value in `inputs`) and return the
    /// unit's linear combination `bias + <weights, inputs>`.
    pub(crate) fn unit(&mut self, inputs: &[E]) -> Result<E, Malformed> {
        let mut linear = self.next()?;
        for x in inputs {
            linear = linear + self.next()? * *x;
        }
        Ok(linear)
    }
}
