// src/acquisition/session_reader.rs
//! Reader for recorded session files
//!
//! ```text
//! # Location: Paddock 2
//! # Notes: warm-up then canter
//! # Start Time: 2024-05-01T10:00:00
//! timestamp,device_id,sequence,x,y,z
//! 2024-05-01 10:00:00.000000,1,0,0.01,-0.02,0.99
//! # End Time: 2024-05-01T10:20:00
//! # Total Samples: 232800
//! ```

use crate::config::constants::session::*;
use crate::config::SessionConfig;
use crate::error::{GaitError, GaitResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Euclidean norm of a triaxial acceleration sample
pub fn magnitude(x: f64, y: f64, z: f64) -> f64 {
    (x * x + y * y + z * z).sqrt()
}

/// Header metadata written by the recorder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionMetadata {
    pub location: Option<String>,
    pub notes: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub total_samples: Option<u64>,
}

/// One accelerometer row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriaxialSample {
    pub timestamp: String,
    pub device_id: u32,
    pub sequence: u64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl TriaxialSample {
    pub fn magnitude(&self) -> f64 {
        magnitude(self.x, self.y, self.z)
    }
}

/// A parsed session file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub metadata: SessionMetadata,
    pub samples: Vec<TriaxialSample>,
    /// Data rows dropped because they could not be parsed
    pub skipped_rows: usize,
}

impl Session {
    /// Magnitude series in file order
    pub fn magnitudes(&self) -> Vec<f64> {
        self.samples.iter().map(TriaxialSample::magnitude).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Reads session files into triaxial samples
#[derive(Debug, Clone, Default)]
pub struct SessionReader {
    config: SessionConfig,
}

impl SessionReader {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> GaitResult<Session> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| GaitError::io(path, e))?;
        let session = self.read(BufReader::new(file)).map_err(|e| match e {
            GaitError::Io { source, .. } => GaitError::io(path, source),
            other => other,
        })?;

        debug!(
            path = %path.display(),
            samples = session.len(),
            skipped = session.skipped_rows,
            "session loaded"
        );
        Ok(session)
    }

    pub fn read<R: BufRead>(&self, reader: R) -> GaitResult<Session> {
        let mut session = Session::default();
        let mut header_seen = false;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| GaitError::io("<session>", e))?;
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            // Comments may also trail the data (end time, sample count)
            if let Some(comment) = line.strip_prefix(COMMENT_PREFIX) {
                Self::parse_metadata(comment, &mut session.metadata);
                continue;
            }

            if !header_seen {
                // First non-comment line is the column header
                header_seen = true;
                continue;
            }

            if self.is_full(&session) {
                continue;
            }

            match Self::parse_row(line) {
                Some(sample) => {
                    if self.config.device_id.is_some_and(|id| id != sample.device_id) {
                        continue;
                    }
                    session.samples.push(sample);
                }
                None => {
                    warn!(line = line_no + 1, row = line, "skipping malformed session row");
                    session.skipped_rows += 1;
                }
            }
        }

        Ok(session)
    }

    /// Rows past the point cap are not parsed; the trailer comments still are
    fn is_full(&self, session: &Session) -> bool {
        self.config.max_points > 0 && session.samples.len() >= self.config.max_points
    }

    fn parse_metadata(comment: &str, metadata: &mut SessionMetadata) {
        let Some((key, value)) = comment.split_once(':') else {
            return;
        };
        let value = value.trim().to_string();

        match key.trim() {
            LOCATION_KEY => metadata.location = Some(value),
            NOTES_KEY => metadata.notes = Some(value),
            START_TIME_KEY => metadata.start_time = Some(value),
            END_TIME_KEY => metadata.end_time = Some(value),
            TOTAL_SAMPLES_KEY => metadata.total_samples = value.parse().ok(),
            _ => {}
        }
    }

    fn parse_row(line: &str) -> Option<TriaxialSample> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < MIN_ROW_FIELDS {
            return None;
        }

        Some(TriaxialSample {
            timestamp: fields[0].to_string(),
            device_id: fields[1].parse().ok()?,
            sequence: fields[2].parse().ok()?,
            x: fields[3].parse().ok()?,
            y: fields[4].parse().ok()?,
            z: fields[5].parse().ok()?,
        })
    }
}
