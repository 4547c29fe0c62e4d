//! Input contract checks for the segmentation entry points
//!
//! Only conditions that would make the numeric pipeline undefined are
//! rejected; threshold values are the caller's business.

use crate::config::SegmentationConfig;
use crate::error::{GaitErrorBuilder, GaitResult};

/// Reject a magnitude series containing NaN or infinite values
pub fn validate_series(magnitude: &[f64]) -> GaitResult<()> {
    match magnitude.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(GaitErrorBuilder::new("segmenter", "validate_series").invalid_input(
            "magnitude",
            &format!("value {} is not finite", magnitude[index]),
            Some(index),
        )),
        None => Ok(()),
    }
}

/// Check configuration and series together before segmenting
pub fn validate_request(magnitude: &[f64], config: &SegmentationConfig) -> GaitResult<()> {
    config.validate()?;
    validate_series(magnitude)
}
