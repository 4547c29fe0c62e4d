// src/processing/mod.rs
//! Gait segmentation pipeline over accelerometer magnitude

pub mod types;
pub mod windowing;
pub mod features;
pub mod classifier;
pub mod change_scoring;
pub mod merge;
pub mod pipeline;

pub use types::*;
pub use windowing::{Window, Windower};
pub use features::DominantFrequencyAnalyzer;
pub use classifier::MovementClassifier;
pub use change_scoring::{ChangeScorer, VarianceReference};
pub use merge::BoundaryMerger;
pub use pipeline::{segment_gait, GaitSegmenter};
