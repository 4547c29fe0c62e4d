// src/processing/pipeline.rs
//! Batch segmentation pipeline
//!
//! magnitude → windows → per-window statistics → moving/stationary labels →
//! change candidates → merged boundaries → [`SegmentationResult`]

use crate::config::constants::{segmentation::TRANSITION_CONFIDENCE, signal};
use crate::config::SegmentationConfig;
use crate::error::GaitResult;
use crate::processing::change_scoring::ChangeScorer;
use crate::processing::classifier::MovementClassifier;
use crate::processing::features::{population_variance, window_variances, DominantFrequencyAnalyzer};
use crate::processing::merge::BoundaryMerger;
use crate::processing::types::{ChangeEvent, ChangeKind, SegmentType, SegmentationResult, WindowStatistics};
use crate::processing::windowing::Windower;
use crate::utils::validation::validate_request;
use tracing::{debug, debug_span};

/// Segments complete magnitude recordings with a fixed configuration.
///
/// Holds no per-call state: the same input always gives the same result,
/// and one segmenter can be shared across threads.
pub struct GaitSegmenter {
    config: SegmentationConfig,
    classifier: MovementClassifier,
    scorer: ChangeScorer,
    merger: BoundaryMerger,
    analyzer: DominantFrequencyAnalyzer,
}

impl GaitSegmenter {
    /// Fails only when the configuration cannot form windows
    pub fn new(config: SegmentationConfig) -> GaitResult<Self> {
        config.validate()?;

        Ok(Self {
            classifier: MovementClassifier::new(config.movement_threshold),
            scorer: ChangeScorer::new(&config),
            merger: BoundaryMerger::new(config.min_samples()),
            analyzer: DominantFrequencyAnalyzer::new(config.sample_rate, config.window_size()),
            config,
        })
    }

    pub fn config(&self) -> &SegmentationConfig {
        &self.config
    }

    /// Segment a whole recording
    pub fn segment(&self, magnitude: &[f64]) -> GaitResult<SegmentationResult> {
        validate_request(magnitude, &self.config)?;

        let span = debug_span!("segment_gait", samples = magnitude.len(), sample_rate = self.config.sample_rate);
        let _enter = span.enter();

        let windower = Windower::for_config(magnitude.len(), &self.config);
        let min_len = signal::MIN_ANALYSIS_SECONDS * self.config.sample_rate as usize;
        if magnitude.len() < min_len || windower.len() < signal::MIN_WINDOW_COUNT {
            debug!(windows = windower.len(), "series too short for windowed analysis");
            return Ok(self.single_segment(magnitude));
        }

        let stats = self.window_statistics(magnitude, &windower);
        let candidates = self.scorer.raw_candidates(&stats, &windower.centers());
        let boundaries = self.merger.merge(&candidates);

        debug!(
            windows = stats.len(),
            moving_windows = stats.iter().filter(|s| s.is_moving).count(),
            candidates = candidates.len(),
            boundaries = boundaries.len(),
            "segmentation complete"
        );

        Ok(SegmentationResult::from_boundaries(&boundaries, magnitude.len(), &self.config))
    }

    /// Variance, movement label and dominant frequency for every window
    pub fn window_statistics(&self, magnitude: &[f64], windower: &Windower) -> Vec<WindowStatistics> {
        let variances = window_variances(magnitude, windower);
        let is_moving = self.classifier.classify(&variances);
        let frequencies = self.analyzer.analyze(magnitude, windower, &is_moving);

        variances
            .into_iter()
            .zip(is_moving)
            .zip(frequencies)
            .map(|((variance, is_moving), dominant_frequency)| WindowStatistics {
                variance,
                is_moving,
                dominant_frequency,
            })
            .collect()
    }

    /// One segment over the whole input, labeled by its overall variance
    fn single_segment(&self, magnitude: &[f64]) -> SegmentationResult {
        let segment_type =
            SegmentType::from_moving(self.classifier.is_moving(population_variance(magnitude)));
        let seed = ChangeEvent::new(0, ChangeKind::Start, segment_type, TRANSITION_CONFIDENCE);

        SegmentationResult::from_boundaries(&[seed], magnitude.len(), &self.config)
    }
}

/// Segment a magnitude recording in one call
pub fn segment_gait(magnitude: &[f64], config: &SegmentationConfig) -> GaitResult<SegmentationResult> {
    GaitSegmenter::new(config.clone())?.segment(magnitude)
}
