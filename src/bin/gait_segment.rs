//! gait-segment CLI entry point
//!
//! Segments one recorded session file and prints the result as JSON.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gait_core::{segment_gait, ConfigLoader, GaitConfig, SessionReader};

#[derive(Parser, Debug)]
#[command(name = "gait-segment")]
#[command(version)]
#[command(about = "Split an accelerometer session into stationary, moving and gait-change segments", long_about = None)]
struct Cli {
    /// Session CSV written by the recorder
    #[arg(required_unless_present = "print_config")]
    session: Option<PathBuf>,

    /// Configuration file (replaces the default search path)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sample rate in Hz
    #[arg(long)]
    sample_rate: Option<u32>,

    /// Window variance above which a window counts as moving
    #[arg(long)]
    movement_threshold: Option<f64>,

    /// Variance z-score that counts as a gait change
    #[arg(long)]
    variance_threshold: Option<f64>,

    /// Dominant-frequency jump in Hz that counts as a gait change
    #[arg(long)]
    frequency_threshold: Option<f64>,

    /// Minimum segment length in seconds
    #[arg(long)]
    min_segment_seconds: Option<f64>,

    /// Cap on samples read from the session (0 = no cap)
    #[arg(long)]
    max_points: Option<usize>,

    /// Only use rows from this device
    #[arg(long)]
    device_id: Option<u32>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut GaitConfig) {
        let segmentation = &mut config.segmentation;
        if let Some(rate) = self.sample_rate {
            segmentation.sample_rate = rate;
        }
        if let Some(threshold) = self.movement_threshold {
            segmentation.movement_threshold = threshold;
        }
        if let Some(threshold) = self.variance_threshold {
            segmentation.variance_threshold = threshold;
        }
        if let Some(threshold) = self.frequency_threshold {
            segmentation.frequency_threshold = threshold;
        }
        if let Some(seconds) = self.min_segment_seconds {
            segmentation.min_segment_seconds = seconds;
        }

        if let Some(max_points) = self.max_points {
            config.session.max_points = max_points;
        }
        if self.device_id.is_some() {
            config.session.device_id = self.device_id;
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging on stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let mut loader = match &cli.config {
        Some(path) => ConfigLoader::with_paths(vec![path.clone()]),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load().context("failed to load configuration")?;
    cli.apply_overrides(&mut config);

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let Some(session_path) = cli.session.as_ref() else {
        anyhow::bail!("a session file is required");
    };

    let session = SessionReader::new(config.session.clone())
        .read_path(session_path)
        .with_context(|| format!("failed to read session {}", session_path.display()))?;
    let magnitude = session.magnitudes();

    let result = segment_gait(&magnitude, &config.segmentation).context("segmentation failed")?;

    info!(
        session = %session_path.display(),
        samples = magnitude.len(),
        skipped_rows = session.skipped_rows,
        segments = result.count,
        duration_s = result.total_duration(),
        "segmentation finished"
    );

    let json = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", json);

    Ok(())
}
