// src/processing/types.rs
//! Data model shared by the segmentation stages

use crate::config::SegmentationConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentType {
    Stationary,
    Moving,
}

impl SegmentType {
    pub fn from_moving(is_moving: bool) -> Self {
        if is_moving {
            SegmentType::Moving
        } else {
            SegmentType::Stationary
        }
    }

    pub fn is_moving(self) -> bool {
        self == SegmentType::Moving
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SegmentType::Stationary => "stationary",
            SegmentType::Moving => "moving",
        }
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What produced a candidate boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// The seed boundary at sample 0
    Start,
    /// Moving/stationary flip between consecutive windows
    MovementTransition,
    /// Variance or rhythm shift inside a moving run
    GaitChange,
}

/// Per-window statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowStatistics {
    pub variance: f64,
    pub is_moving: bool,
    /// Hz; 0.0 when not moving or when no bin falls in the gait band
    pub dominant_frequency: f64,
}

/// A candidate segment boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeEvent {
    pub sample_index: usize,
    pub kind: ChangeKind,
    pub segment_type: SegmentType,
    pub confidence: f64,
}

impl ChangeEvent {
    pub fn new(sample_index: usize, kind: ChangeKind, segment_type: SegmentType, confidence: f64) -> Self {
        Self {
            sample_index,
            kind,
            segment_type,
            confidence,
        }
    }
}

/// One labeled interval of the series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start_index: usize,
    pub segment_type: SegmentType,
    pub confidence: f64,
    /// Seconds from the start of the series
    pub time: f64,
    /// Seconds until the next segment (or the end of the series)
    pub duration: f64,
}

/// Output of `segment_gait`: parallel arrays, one entry per segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentationResult {
    pub boundaries: Vec<usize>,
    pub times: Vec<f64>,
    pub types: Vec<SegmentType>,
    pub durations: Vec<f64>,
    pub confidences: Vec<f64>,
    pub count: usize,
    /// Configuration the result was computed with
    pub params: SegmentationConfig,
}

impl SegmentationResult {
    /// Build the result from final boundaries over a series of `total_samples`
    pub(crate) fn from_boundaries(
        events: &[ChangeEvent],
        total_samples: usize,
        params: &SegmentationConfig,
    ) -> Self {
        let rate = params.sample_rate as f64;
        let boundaries: Vec<usize> = events.iter().map(|e| e.sample_index).collect();

        let durations = boundaries
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = boundaries.get(i + 1).copied().unwrap_or(total_samples);
                end.saturating_sub(start) as f64 / rate
            })
            .collect();

        Self {
            times: boundaries.iter().map(|&b| b as f64 / rate).collect(),
            types: events.iter().map(|e| e.segment_type).collect(),
            confidences: events.iter().map(|e| e.confidence).collect(),
            durations,
            count: boundaries.len(),
            boundaries,
            params: params.clone(),
        }
    }

    /// Iterate segments as records instead of parallel arrays
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.count).map(move |i| Segment {
            start_index: self.boundaries[i],
            segment_type: self.types[i],
            confidence: self.confidences[i],
            time: self.times[i],
            duration: self.durations[i],
        })
    }

    /// Sum of all segment durations, in seconds
    pub fn total_duration(&self) -> f64 {
        self.durations.iter().sum()
    }

    /// Check the structural invariants of a result
    pub fn is_consistent(&self) -> bool {
        let n = self.count;
        let lengths_match = self.boundaries.len() == n
            && self.times.len() == n
            && self.types.len() == n
            && self.durations.len() == n
            && self.confidences.len() == n;

        lengths_match
            && self.boundaries.first() == Some(&0)
            && self.boundaries.windows(2).all(|w| w[0] < w[1])
            && self.confidences.iter().all(|c| (0.0..=1.0).contains(c))
    }
}
