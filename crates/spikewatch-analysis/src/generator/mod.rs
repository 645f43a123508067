//! Stream Generator — seasonal signal with Gaussian noise and additive spikes.
//!
//! `signal[t] = 10·sin(2πt/50) + 5·cos(2πt/200) + N(0, 1)`, then
//! `floor(n · rate)` distinct positions receive an extra `N(20, 5)` spike.
//! All randomness comes from the caller's RNG, so a seed fully determines
//! the output.

pub mod injection;
pub mod shape;
pub mod stream_generator;

pub use injection::spike_count;
pub use shape::{SignalShape, SpikeProfile};
pub use stream_generator::{generate, generate_labeled, GroundTruth, LabeledStream, StreamGenerator};
