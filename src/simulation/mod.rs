//! Synthetic accelerometer-magnitude traces for tests and benchmarks

pub mod signal_generator;

pub use signal_generator::{GaitPhase, PhaseKind, SignalGenerator};
