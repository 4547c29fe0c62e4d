// src/processing/merge.rs
//! Resolution of raw candidates into final, minimum-spaced boundaries

use crate::processing::types::{ChangeEvent, ChangeKind};
use tracing::trace;

/// Enforces the minimum segment length over a window-ordered candidate list.
///
/// A candidate closer than `min_samples` to the last kept boundary replaces
/// it when it flips the movement state or carries strictly higher confidence;
/// otherwise it is dropped. The seed boundary never moves off sample 0: when
/// it is replaced, only its type and confidence are taken over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryMerger {
    min_samples: usize,
}

impl BoundaryMerger {
    pub fn new(min_samples: usize) -> Self {
        Self { min_samples }
    }

    pub fn min_samples(&self) -> usize {
        self.min_samples
    }

    pub fn merge(&self, candidates: &[ChangeEvent]) -> Vec<ChangeEvent> {
        let mut iter = candidates.iter().copied();
        let Some(seed) = iter.next() else {
            return Vec::new();
        };

        let mut kept = vec![seed];
        for candidate in iter {
            // `kept` is seeded above and only ever grows
            let Some(last) = kept.last_mut() else { break };

            let gap = candidate.sample_index.saturating_sub(last.sample_index);
            if gap >= self.min_samples {
                trace!(sample = candidate.sample_index, gap, "boundary kept");
                kept.push(candidate);
                continue;
            }

            let flips_state = candidate.segment_type != last.segment_type;
            if !flips_state && candidate.confidence <= last.confidence {
                trace!(sample = candidate.sample_index, gap, "boundary discarded");
                continue;
            }

            trace!(
                sample = candidate.sample_index,
                replaced = last.sample_index,
                flips_state,
                "boundary overwritten"
            );
            if last.kind == ChangeKind::Start {
                last.segment_type = candidate.segment_type;
                last.confidence = candidate.confidence;
            } else {
                *last = candidate;
            }
        }

        kept
    }
}
