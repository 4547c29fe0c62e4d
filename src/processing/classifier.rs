// src/processing/classifier.rs
//! Moving/stationary decision per window

/// Stateless variance threshold classifier; no hysteresis or smoothing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementClassifier {
    threshold: f64,
}

impl MovementClassifier {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Strictly greater than the threshold counts as moving
    pub fn is_moving(&self, variance: f64) -> bool {
        variance > self.threshold
    }

    pub fn classify(&self, variances: &[f64]) -> Vec<bool> {
        variances.iter().map(|&v| self.is_moving(v)).collect()
    }
}
