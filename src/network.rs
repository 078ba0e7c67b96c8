//! Feed-forward networks with at most one hidden layer.
//!
//! A network is described by its [`Topology`] and a flat sequence of weights (see [`layout`] for
//! the order of the values). The free functions in [`eval`] evaluate such a sequence directly,
//! while [`Network`] keeps the dimensions, weights and transfer function together so the same
//! network can be applied to many input vectors.

mod cursor;
pub mod error;
pub mod eval;
pub mod layout;
mod scratch;
pub mod transfer;
pub mod typ;

pub use error::{EvalError, Malformed};
pub use eval::{evaluate, evaluate_into, evaluate_stream, evaluate_with};
pub use layout::Topology;
pub use transfer::{logistic, softmax, Identity, Logistic, OutputPolicy, Transfer};
pub use typ::Float;

/// A network with fixed dimensions, weights and unit transfer function.
///
/// The network is immutable once built; evaluating it never mutates shared state, so a single
/// network can be evaluated from several threads at once.
#[derive(Clone, Debug, PartialEq)]
pub struct Network<E, T = Logistic> {
    topology: Topology,
    weights: Vec<E>,
    transfer: T,
}

impl<E> Network<E>
where
    E: Float,
{
    /// Create a network with logistic units.
    ///
    /// `weights` must hold exactly `topology.weight_count()` values.
    pub fn new(topology: Topology, weights: Vec<E>) -> Result<Self, EvalError> {
        Self::with_transfer(topology, weights, Logistic)
    }
}

impl<E, T> Network<E, T>
where
    E: Float,
    T: Transfer<E>,
{
    /// Create a network whose hidden units, and single output unit if there is only one, use
    /// `transfer`.
    pub fn with_transfer(
        topology: Topology,
        weights: Vec<E>,
        transfer: T,
    ) -> Result<Self, EvalError> {
        let expected = topology
            .weight_count()
            .ok_or(Malformed::Dimensions(topology))?;
        if weights.len() != expected {
            return Err(Malformed::Weights {
                expected,
                found: weights.len(),
            }
            .into());
        }
        Ok(Self {
            topology,
            weights,
            transfer,
        })
    }

    /// Return the dimensions of the network.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Return the flat weight sequence.
    pub fn weights(&self) -> &[E] {
        &self.weights
    }

    /// Return the unit transfer function.
    pub fn transfer(&self) -> &T {
        &self.transfer
    }

    /// Compute the network outputs for `inputs`.
    pub fn compute(&self, inputs: &[E]) -> Result<Vec<E>, EvalError> {
        evaluate_with(inputs, &self.weights, &self.topology, &self.transfer)
    }

    /// Compute the network outputs for `inputs`, writing them to the front of `outputs`.
    pub fn compute_into(&self, inputs: &[E], outputs: &mut [E]) -> Result<(), EvalError> {
        evaluate_into(inputs, &self.weights, &self.topology, &self.transfer, outputs)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::{logistic, EvalError, Identity, Malformed, Network, Topology};

    #[test]
    fn weights_must_match_topology() {
        let topology = Topology::new(2, 1, 1);
        assert!(Network::new(topology, vec![0.0f64; 5]).is_ok());
        assert_eq!(
            Network::new(topology, vec![0.0f64; 6]).unwrap_err(),
            EvalError::MalformedInput(Malformed::Weights {
                expected: 5,
                found: 6
            })
        );
        assert_eq!(
            Network::new(topology, vec![0.0f64; 4]).unwrap_err(),
            EvalError::MalformedInput(Malformed::Weights {
                expected: 5,
                found: 4
            })
        );
    }

    #[test]
    fn compute_with_custom_transfer() {
        let net = Network::with_transfer(Topology::new(2, 0, 1), vec![1.0f64, 2.0, 3.0], Identity)
            .unwrap();
        assert_eq!(net.compute(&[1.0, 1.0]).unwrap(), vec![6.0]);
        assert_eq!(net.transfer(), &Identity);
        assert_eq!(net.weights(), &[1.0, 2.0, 3.0]);

        let net = Network::with_transfer(Topology::new(1, 0, 1), vec![0.0f64, 1.0], |x: f64| {
            x * x
        })
        .unwrap();
        assert_eq!(net.compute(&[-3.0]).unwrap(), vec![9.0]);
    }

    #[test]
    fn compute_into_buffer() {
        let net = Network::new(Topology::new(0, 0, 1), vec![0.0f32]).unwrap();
        let mut outputs = [0.0f32; 3];
        net.compute_into(&[], &mut outputs).unwrap();
        assert_eq!(outputs, [0.5, 0.0, 0.0]);
    }

    #[test]
    fn shared_between_threads() {
        let net = Network::new(Topology::new(1, 1, 1), vec![0.0f64, 1.0, 0.0, 1.0]).unwrap();
        let results: Vec<_> = thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let net = &net;
                    s.spawn(move || net.compute(&[f64::from(i)]).unwrap()[0])
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for (i, y) in results.into_iter().enumerate() {
            assert_eq!(y, logistic(logistic(i as f64)));
        }
    }
}
