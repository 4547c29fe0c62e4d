//! Magnitude signal generation for realistic simulation
//! Location: src/simulation/signal_generator.rs

use crate::config::constants::simulator::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// What the horse is doing during a phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhaseKind {
    Stationary,
    /// Periodic loading at the stride frequency
    Gait { stride_hz: f64, amplitude: f64 },
}

/// A stretch of constant behavior
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaitPhase {
    pub kind: PhaseKind,
    pub seconds: f64,
}

impl GaitPhase {
    pub fn stationary(seconds: f64) -> Self {
        Self {
            kind: PhaseKind::Stationary,
            seconds,
        }
    }

    pub fn gait(stride_hz: f64, amplitude: f64, seconds: f64) -> Self {
        Self {
            kind: PhaseKind::Gait { stride_hz, amplitude },
            seconds,
        }
    }

    pub fn walk(seconds: f64) -> Self {
        Self::gait(WALK_STRIDE_HZ, WALK_AMPLITUDE, seconds)
    }

    pub fn trot(seconds: f64) -> Self {
        Self::gait(TROT_STRIDE_HZ, TROT_AMPLITUDE, seconds)
    }

    pub fn canter(seconds: f64) -> Self {
        Self::gait(CANTER_STRIDE_HZ, CANTER_AMPLITUDE, seconds)
    }
}

/// Seeded generator; the same seed and phases always give the same trace
pub struct SignalGenerator {
    sample_rate: u32,
    baseline: f64,
    noise_amplitude: f64,
    rng: StdRng,
    phase_accumulator: f64,
}

impl SignalGenerator {
    pub fn new(sample_rate: u32, seed: u64) -> Self {
        Self {
            sample_rate,
            baseline: BASELINE_MAGNITUDE,
            noise_amplitude: DEFAULT_NOISE_AMPLITUDE,
            rng: StdRng::seed_from_u64(seed),
            phase_accumulator: 0.0,
        }
    }

    /// Half-width of the uniform sensor noise added to every sample
    pub fn with_noise(mut self, amplitude: f64) -> Self {
        self.noise_amplitude = amplitude.abs();
        self
    }

    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples a phase of `seconds` occupies
    pub fn samples_for(&self, seconds: f64) -> usize {
        (seconds * self.sample_rate as f64).round().max(0.0) as usize
    }

    /// Render the phases back to back; stride phase carries over between phases
    pub fn generate(&mut self, phases: &[GaitPhase]) -> Vec<f64> {
        let total = phases.iter().map(|p| self.samples_for(p.seconds)).sum();
        let mut samples = Vec::with_capacity(total);

        for phase in phases {
            for _ in 0..self.samples_for(phase.seconds) {
                let value = self.generate_sample(phase.kind);
                samples.push(value);
            }
        }

        samples
    }

    fn generate_sample(&mut self, kind: PhaseKind) -> f64 {
        let signal = match kind {
            PhaseKind::Stationary => 0.0,
            PhaseKind::Gait { stride_hz, amplitude } => {
                let value = amplitude * self.phase_accumulator.sin();
                self.phase_accumulator += 2.0 * PI * stride_hz / self.sample_rate as f64;
                if self.phase_accumulator > 2.0 * PI {
                    self.phase_accumulator -= 2.0 * PI;
                }
                value
            }
        };

        let noise = if self.noise_amplitude > 0.0 {
            self.rng.gen_range(-self.noise_amplitude..=self.noise_amplitude)
        } else {
            0.0
        };

        (self.baseline + signal + noise).max(0.0)
    }
}
