// src/processing/change_scoring.rs
//! Candidate boundary detection from per-window statistics

use crate::config::constants::{scoring, segmentation::TRANSITION_CONFIDENCE};
use crate::config::SegmentationConfig;
use crate::processing::features::time_domain::{mean, population_std_dev};
use crate::processing::types::{ChangeEvent, ChangeKind, SegmentType, WindowStatistics};
use tracing::trace;

/// Mean and spread of variance over the moving windows only
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarianceReference {
    pub mean: f64,
    pub std_dev: f64,
}

impl VarianceReference {
    /// `None` when fewer than two windows move or their variances are all equal
    pub fn from_windows(stats: &[WindowStatistics]) -> Option<Self> {
        let moving: Vec<f64> = stats
            .iter()
            .filter(|s| s.is_moving)
            .map(|s| s.variance)
            .collect();

        if moving.len() < scoring::MIN_MOVING_WINDOWS {
            return None;
        }

        let std_dev = population_std_dev(&moving);
        (std_dev > 0.0).then(|| Self {
            mean: mean(&moving),
            std_dev,
        })
    }

    pub fn z_score(&self, variance: f64) -> f64 {
        (variance - self.mean).abs() / self.std_dev
    }
}

/// Scores consecutive window pairs for movement transitions and gait changes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeScorer {
    variance_threshold: f64,
    frequency_threshold: f64,
}

impl ChangeScorer {
    pub fn new(config: &SegmentationConfig) -> Self {
        Self {
            variance_threshold: config.variance_threshold,
            frequency_threshold: config.frequency_threshold,
        }
    }

    /// Weighted vote of the two change flags
    pub fn combined_score(var_change: bool, freq_change: bool) -> f64 {
        scoring::VARIANCE_WEIGHT * f64::from(u8::from(var_change))
            + scoring::FREQUENCY_WEIGHT * f64::from(u8::from(freq_change))
    }

    /// Raw boundary candidates in window order, starting with the seed at sample 0.
    ///
    /// A window whose moving state differs from its predecessor yields a
    /// movement transition and is not evaluated for a gait change.
    pub fn raw_candidates(&self, stats: &[WindowStatistics], centers: &[usize]) -> Vec<ChangeEvent> {
        let Some(first) = stats.first() else {
            return Vec::new();
        };

        let mut candidates = vec![ChangeEvent::new(
            0,
            ChangeKind::Start,
            SegmentType::from_moving(first.is_moving),
            TRANSITION_CONFIDENCE,
        )];
        candidates.extend(self.score(stats, centers));
        candidates
    }

    /// Change events for windows `1..`, excluding the seed
    pub fn score(&self, stats: &[WindowStatistics], centers: &[usize]) -> Vec<ChangeEvent> {
        let reference = VarianceReference::from_windows(stats);
        let mut events = Vec::new();

        for i in 1..stats.len().min(centers.len()) {
            let (prev, cur) = (&stats[i - 1], &stats[i]);

            if cur.is_moving != prev.is_moving {
                let segment_type = SegmentType::from_moving(cur.is_moving);
                trace!(window = i, sample = centers[i], %segment_type, "movement transition");
                events.push(ChangeEvent::new(
                    centers[i],
                    ChangeKind::MovementTransition,
                    segment_type,
                    TRANSITION_CONFIDENCE,
                ));
                continue;
            }

            if !cur.is_moving {
                continue;
            }

            let var_change = reference
                .map(|r| r.z_score(cur.variance) > self.variance_threshold)
                .unwrap_or(false);
            let freq_change =
                (cur.dominant_frequency - prev.dominant_frequency).abs() > self.frequency_threshold;

            let score = Self::combined_score(var_change, freq_change);
            if score > scoring::DECISION_THRESHOLD {
                trace!(window = i, sample = centers[i], score, var_change, freq_change, "gait change");
                events.push(ChangeEvent::new(
                    centers[i],
                    ChangeKind::GaitChange,
                    SegmentType::Moving,
                    score,
                ));
            }
        }

        events
    }
}
