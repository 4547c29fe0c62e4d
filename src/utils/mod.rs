//! Common utility functions for gait-core

pub mod validation;

pub use validation::{validate_request, validate_series};
