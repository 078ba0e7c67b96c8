//! The forward pass of a network given as a flat weight sequence.
//!
//! Every unit computes `bias + <weights, inputs>` from its weight block. Hidden units then go
//! through the unit transfer function. The linear values of the output layer are all computed
//! before any output is produced: a single output goes through the unit transfer function, while
//! several outputs are normalized jointly with [`softmax`](crate::network::transfer::softmax).

use log::{debug, trace};

use crate::network::{
    cursor::WeightCursor,
    error::{EvalError, Malformed},
    layout::Topology,
    scratch::Scratch,
    transfer::{Logistic, OutputPolicy, Transfer},
    typ::Float,
};

/// Evaluate the network with logistic hidden units, returning one value per output unit.
///
/// `inputs` must hold at least `topology.inputs` values and `weights` at least
/// `topology.weight_count()` values laid out as described in [`layout`](crate::network::layout).
/// Extra trailing values are ignored.
pub fn evaluate<E>(inputs: &[E], weights: &[E], topology: &Topology) -> Result<Vec<E>, EvalError>
where
    E: Float,
{
    evaluate_with(inputs, weights, topology, &Logistic)
}

/// Evaluate the network with a caller-supplied unit transfer function.
///
/// `transfer` is applied to every hidden unit and, when the network has a single output, to that
/// output. With more than one output, softmax is used instead regardless of `transfer`.
pub fn evaluate_with<E, T>(
    inputs: &[E],
    weights: &[E],
    topology: &Topology,
    transfer: &T,
) -> Result<Vec<E>, EvalError>
where
    E: Float,
    T: Transfer<E> + ?Sized,
{
    check_dimensions(topology, topology.outputs)?;
    let mut outputs = allocate_outputs(topology.outputs)?;
    evaluate_into(inputs, weights, topology, transfer, &mut outputs)?;
    Ok(outputs)
}

/// Evaluate the network, writing one value per output unit to the front of `outputs`.
///
/// On failure, `outputs` is left untouched.
pub fn evaluate_into<E, T>(
    inputs: &[E],
    weights: &[E],
    topology: &Topology,
    transfer: &T,
    outputs: &mut [E],
) -> Result<(), EvalError>
where
    E: Float,
    T: Transfer<E> + ?Sized,
{
    let expected = check_dimensions(topology, outputs.len())?;
    if inputs.len() < topology.inputs {
        return Err(reject(
            topology,
            Malformed::Inputs {
                expected: topology.inputs,
                found: inputs.len(),
            },
        ));
    }
    if weights.len() < expected {
        return Err(reject(
            topology,
            Malformed::Weights {
                expected,
                found: weights.len(),
            },
        ));
    }
    if topology.outputs == 0 {
        return Ok(());
    }

    let mut scratch = Scratch::new(0, topology.hidden, topology.outputs)?;
    let (_, hidden, linear) = scratch.regions();
    let mut cursor = WeightCursor::new(weights.iter().copied(), expected);
    forward(
        &inputs[..topology.inputs],
        &mut cursor,
        topology,
        transfer,
        hidden,
        linear,
    )
    .map_err(|err| reject(topology, err))?;
    outputs[..topology.outputs].copy_from_slice(linear);
    Ok(())
}

/// Evaluate the network from single-pass sequences.
///
/// Exactly `topology.inputs` values are pulled from `inputs` and buffered, since every hidden unit
/// reads the whole input vector. Weights are read front to back and no value past
/// `topology.weight_count()` is pulled.
pub fn evaluate_stream<E, I, W, T>(
    inputs: I,
    weights: W,
    topology: &Topology,
    transfer: &T,
) -> Result<Vec<E>, EvalError>
where
    E: Float,
    I: IntoIterator<Item = E>,
    W: IntoIterator<Item = E>,
    T: Transfer<E> + ?Sized,
{
    let expected = check_dimensions(topology, topology.outputs)?;
    if topology.outputs == 0 {
        return Ok(Vec::new());
    }

    let mut scratch = Scratch::new(topology.inputs, topology.hidden, topology.outputs)?;
    let (buffered, hidden, linear) = scratch.regions();
    let mut found = 0;
    for (slot, x) in buffered.iter_mut().zip(inputs) {
        *slot = x;
        found += 1;
    }
    if found < topology.inputs {
        return Err(reject(
            topology,
            Malformed::Inputs {
                expected: topology.inputs,
                found,
            },
        ));
    }

    let mut cursor = WeightCursor::new(weights.into_iter(), expected);
    forward(buffered, &mut cursor, topology, transfer, hidden, linear)
        .map_err(|err| reject(topology, err))?;
    let mut outputs = allocate_outputs(topology.outputs)?;
    outputs.copy_from_slice(linear);
    Ok(outputs)
}

/// Run both layers, leaving the network outputs in `linear`.
fn forward<E, W, T>(
    inputs: &[E],
    weights: &mut WeightCursor<W>,
    topology: &Topology,
    transfer: &T,
    hidden: &mut [E],
    linear: &mut [E],
) -> Result<(), Malformed>
where
    E: Float,
    W: Iterator<Item = E>,
    T: Transfer<E> + ?Sized,
{
    trace!("evaluating {topology} network");
    for h in hidden.iter_mut() {
        *h = transfer.apply(weights.unit(inputs)?);
    }

    let fan_in: &[E] = if topology.has_hidden_layer() {
        &*hidden
    } else {
        inputs
    };
    for o in linear.iter_mut() {
        *o = weights.unit(fan_in)?;
    }
    trace!("read {} weights", weights.consumed());

    let policy = OutputPolicy::for_outputs(linear.len());
    trace!("applying {policy:?} output policy");
    policy.apply(transfer, linear);
    Ok(())
}

/// Check that the topology has a representable weight count and that `capacity` output slots are
/// enough, returning the weight count.
fn check_dimensions(topology: &Topology, capacity: usize) -> Result<usize, EvalError> {
    let expected = topology
        .weight_count()
        .ok_or_else(|| reject(topology, Malformed::Dimensions(*topology)))?;
    if capacity < topology.outputs {
        return Err(reject(
            topology,
            Malformed::Outputs {
                expected: topology.outputs,
                found: capacity,
            },
        ));
    }
    Ok(expected)
}

fn allocate_outputs<E>(len: usize) -> Result<Vec<E>, EvalError>
where
    E: Float,
{
    let mut outputs = Vec::new();
    outputs
        .try_reserve_exact(len)
        .map_err(|_| EvalError::AllocationFailure { len })?;
    outputs.resize(len, E::zero());
    Ok(outputs)
}

fn reject(topology: &Topology, err: Malformed) -> EvalError {
    debug!("rejecting evaluation of {topology} network: {err}");
    EvalError::MalformedInput(err)
}
