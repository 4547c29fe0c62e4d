// src/config/mod.rs
//! Configuration management for gait segmentation

pub mod constants;
pub mod loader;

pub use constants::*;
pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};
use crate::error::{GaitErrorBuilder, GaitResult};

/// Complete configuration file layout
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct GaitConfig {
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

/// Parameters of the segmentation algorithm.
///
/// Threshold values are deliberately not range-checked: a zero
/// `variance_threshold` is legal and simply makes detection more sensitive.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SegmentationConfig {
    #[serde(default = "defaults::sample_rate")]
    pub sample_rate: u32,

    #[serde(default = "defaults::movement_threshold")]
    pub movement_threshold: f64,

    #[serde(default = "defaults::variance_threshold")]
    pub variance_threshold: f64,

    #[serde(default = "defaults::frequency_threshold")]
    pub frequency_threshold: f64,

    #[serde(default = "defaults::min_segment_seconds")]
    pub min_segment_seconds: f64,
}

/// Session file reading options
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SessionConfig {
    /// Cap on samples read from one session; 0 disables the cap
    #[serde(default = "defaults::max_points")]
    pub max_points: usize,

    /// Only keep rows from this device when set
    #[serde(default)]
    pub device_id: Option<u32>,
}

/// Default value providers using constants
mod defaults {
    use crate::config::constants::*;

    pub fn sample_rate() -> u32 { signal::DEFAULT_SAMPLE_RATE_HZ }
    pub fn movement_threshold() -> f64 { segmentation::DEFAULT_MOVEMENT_THRESHOLD }
    pub fn variance_threshold() -> f64 { segmentation::DEFAULT_VARIANCE_THRESHOLD }
    pub fn frequency_threshold() -> f64 { segmentation::DEFAULT_FREQUENCY_THRESHOLD }
    pub fn min_segment_seconds() -> f64 { segmentation::DEFAULT_MIN_SEGMENT_SECONDS }

    pub fn max_points() -> usize { session::DEFAULT_MAX_POINTS }
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            sample_rate: defaults::sample_rate(),
            movement_threshold: defaults::movement_threshold(),
            variance_threshold: defaults::variance_threshold(),
            frequency_threshold: defaults::frequency_threshold(),
            min_segment_seconds: defaults::min_segment_seconds(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_points: defaults::max_points(),
            device_id: None,
        }
    }
}

impl SegmentationConfig {
    /// Default configuration at a different sample rate
    pub fn with_sample_rate(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            ..Self::default()
        }
    }

    /// Check the parts of the configuration the algorithm cannot work without
    pub fn validate(&self) -> GaitResult<()> {
        if self.sample_rate == 0 {
            return Err(GaitErrorBuilder::new("config", "validate")
                .invalid_configuration("sample_rate", "must be greater than zero"));
        }

        let thresholds = [
            ("movement_threshold", self.movement_threshold),
            ("variance_threshold", self.variance_threshold),
            ("frequency_threshold", self.frequency_threshold),
            ("min_segment_seconds", self.min_segment_seconds),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() {
                return Err(GaitErrorBuilder::new("config", "validate")
                    .invalid_configuration(name, "must be a finite number"));
            }
        }

        Ok(())
    }

    /// Analysis window length in samples (one second)
    pub fn window_size(&self) -> usize {
        self.sample_rate as usize
    }

    /// Hop between window starts (50% overlap), never zero
    pub fn window_step(&self) -> usize {
        (self.sample_rate as usize / 2).max(1)
    }

    /// Minimum spacing between kept boundaries, in samples
    pub fn min_samples(&self) -> usize {
        let samples = (self.min_segment_seconds * self.sample_rate as f64).floor();
        if samples > 0.0 { samples as usize } else { 0 }
    }
}
