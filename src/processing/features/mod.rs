//! Per-window feature extraction
//!
//! - Time domain: raw population variance of each window
//! - Frequency domain: dominant stride frequency inside the gait band

pub mod time_domain;
pub mod frequency;

pub use time_domain::{mean, population_std_dev, population_variance, window_variances};
pub use frequency::DominantFrequencyAnalyzer;
