//! Transient storage for intermediate values of one evaluation.

use smallvec::SmallVec;

use crate::network::{error::EvalError, typ::Float};

/// Number of values kept on the stack before spilling to the heap.
const INLINE: usize = 64;

/// A zero-filled buffer owned by a single evaluation, split into the buffered inputs, the hidden
/// unit outputs and the linear values of the output units.
#[derive(Debug)]
pub(crate) struct Scratch<E> {
    buf: SmallVec<[E; INLINE]>,
    inputs: usize,
    hidden: usize,
}

impl<E> Scratch<E>
where
    E: Float,
{
    /// Obtain storage for `inputs + hidden + outputs` values.
    pub(crate) fn new(inputs: usize, hidden: usize, outputs: usize) -> Result<Self, EvalError> {
        let len = inputs
            .checked_add(hidden)
            .and_then(|n| n.checked_add(outputs))
            .ok_or(EvalError::AllocationFailure { len: usize::MAX })?;
        let mut buf = SmallVec::new();
        buf.try_reserve_exact(len)
            .map_err(|_| EvalError::AllocationFailure { len })?;
        buf.resize(len, E::zero());
        Ok(Self {
            buf,
            inputs,
            hidden,
        })
    }

    /// Check if the values live on the heap.
    #[cfg(test)]
    pub(crate) fn spilled(&self) -> bool {
        self.buf.spilled()
    }

    /// Borrow the three regions of the buffer: inputs, hidden outputs, output linear values.
    pub(crate) fn regions(&mut self) -> (&mut [E], &mut [E], &mut [E]) {
        let (inputs, rest) = self.buf.split_at_mut(self.inputs);
        let (hidden, outputs) = rest.split_at_mut(self.hidden);
        (inputs, hidden, outputs)
    }
}
