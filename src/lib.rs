//! Gait-Core: offline movement and gait segmentation for equine accelerometer data
//!
//! This library splits a recorded accelerometer-magnitude trace into
//! stationary and moving segments, and flags likely gait transitions
//! (walk → trot → canter) inside moving stretches. It features:
//!
//! - Half-overlapping one-second analysis windows
//! - Variance-based movement classification
//! - FFT dominant stride frequency in the 0.5–5 Hz gait band
//! - Variance z-score and frequency-shift change scoring
//! - Minimum-duration boundary merging
//! - Layered configuration and a reader for recorded session files
//!
//! # Quick Start
//!
//! ```rust
//! use gait_core::{segment_gait, SegmentationConfig, SegmentType};
//!
//! let magnitude = vec![1.0; 400];
//! let result = segment_gait(&magnitude, &SegmentationConfig::default()).unwrap();
//!
//! assert_eq!(result.count, 1);
//! assert_eq!(result.types[0], SegmentType::Stationary);
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod acquisition;
pub mod config;
pub mod error;
pub mod processing;
pub mod simulation;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{ConfigLoader, GaitConfig, SegmentationConfig, SessionConfig};
pub use error::{ErrorContext, GaitError, GaitResult};
pub use processing::{
    segment_gait, ChangeEvent, ChangeKind, GaitSegmenter, Segment, SegmentType, SegmentationResult,
    WindowStatistics,
};
pub use acquisition::{Session, SessionReader};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn version_info() -> VersionInfo {
    VersionInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: "Offline gait and movement segmentation for equine accelerometer recordings".to_string(),
        features: vec![
            "Windowed movement classification".to_string(),
            "Dominant stride frequency analysis".to_string(),
            "Gait change scoring".to_string(),
            "Minimum-duration boundary merging".to_string(),
            "Session file reader".to_string(),
        ],
    }
}

/// Library version information
#[derive(Debug, Clone)]
pub struct VersionInfo {
    /// Library name
    pub name: String,
    /// Version string
    pub version: String,
    /// Description
    pub description: String,
    /// List of features
    pub features: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        let info = version_info();
        assert_eq!(info.name, NAME);
        assert_eq!(info.version, VERSION);
        assert!(!info.features.is_empty());
    }

    #[test]
    fn test_constants() {
        assert!(!VERSION.is_empty());
        assert!(!NAME.is_empty());
    }
}
