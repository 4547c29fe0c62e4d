// src/config/constants.rs
//! System-wide configuration constants

/// Recording and sampling constants
pub mod signal {
    /// Default accelerometer sample rate of the recorder, in Hz
    pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 194;
    /// Minimum data length, in seconds, before windowed analysis is attempted
    pub const MIN_ANALYSIS_SECONDS: usize = 2;
    /// Minimum number of windows required for windowed analysis
    pub const MIN_WINDOW_COUNT: usize = 2;
}

/// Segmentation threshold defaults
pub mod segmentation {
    /// Window variance above which a window counts as moving
    pub const DEFAULT_MOVEMENT_THRESHOLD: f64 = 0.02;
    /// Z-score above which a moving window's variance counts as a change
    pub const DEFAULT_VARIANCE_THRESHOLD: f64 = 2.0;
    /// Dominant-frequency jump (Hz) between consecutive windows that counts as a change
    pub const DEFAULT_FREQUENCY_THRESHOLD: f64 = 0.3;
    /// Minimum spacing between kept boundaries, in seconds
    pub const DEFAULT_MIN_SEGMENT_SECONDS: f64 = 2.0;

    /// Confidence attached to movement transitions and the seed boundary
    pub const TRANSITION_CONFIDENCE: f64 = 1.0;
}

/// Change scoring weights
pub mod scoring {
    pub const VARIANCE_WEIGHT: f64 = 0.6;
    pub const FREQUENCY_WEIGHT: f64 = 0.4;
    /// Combined score must be strictly greater than this to emit a gait change
    pub const DECISION_THRESHOLD: f64 = 0.4;
    /// Fewer moving windows than this disables the variance z-score
    pub const MIN_MOVING_WINDOWS: usize = 2;
}

/// Spectral analysis constants
pub mod spectral {
    /// Lower edge of the gait band (walk), inclusive
    pub const GAIT_BAND_LOW_HZ: f64 = 0.5;
    /// Upper edge of the gait band (canter), inclusive
    pub const GAIT_BAND_HIGH_HZ: f64 = 5.0;
    pub const HANN_WINDOW_ALPHA: f64 = 0.5;
}

/// Session file constants
pub mod session {
    /// Maximum number of samples returned for interactive rendering
    pub const DEFAULT_MAX_POINTS: usize = 10_000;
    /// `timestamp,device_id,sequence,x,y,z`
    pub const MIN_ROW_FIELDS: usize = 6;
    pub const COMMENT_PREFIX: &str = "#";

    pub const LOCATION_KEY: &str = "Location";
    pub const NOTES_KEY: &str = "Notes";
    pub const START_TIME_KEY: &str = "Start Time";
    pub const END_TIME_KEY: &str = "End Time";
    pub const TOTAL_SAMPLES_KEY: &str = "Total Samples";
}

/// Simulator constants
pub mod simulator {
    /// Resting magnitude of a stationary sensor (1 g)
    pub const BASELINE_MAGNITUDE: f64 = 1.0;
    pub const DEFAULT_NOISE_AMPLITUDE: f64 = 0.01;

    pub const WALK_STRIDE_HZ: f64 = 1.0;
    pub const WALK_AMPLITUDE: f64 = 0.3;
    pub const TROT_STRIDE_HZ: f64 = 1.6;
    pub const TROT_AMPLITUDE: f64 = 0.6;
    pub const CANTER_STRIDE_HZ: f64 = 2.0;
    pub const CANTER_AMPLITUDE: f64 = 0.9;
}

/// Configuration file locations
pub mod paths {
    pub const SYSTEM_CONFIG_PATH: &str = "/etc/gait/config.toml";
    pub const USER_CONFIG_DIR: &str = ".config/gait";
    pub const DEFAULT_CONFIG_FILE: &str = "config/default.toml";
    pub const LOCAL_CONFIG_FILE: &str = "gait.toml";

    /// Prefix for environment overrides, e.g. `GAIT_SEGMENTATION__SAMPLE_RATE`
    pub const ENV_PREFIX: &str = "GAIT";
    pub const ENV_SEPARATOR: &str = "__";
}
