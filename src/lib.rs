//! Forward evaluation of fully-connected feed-forward neural networks with at most one hidden
//! layer, given as flat weight sequences.

#![deny(unsafe_code, rust_2018_idioms, rust_2021_compatibility)]
#![warn(missing_docs)]

pub mod network;
