// src/acquisition/mod.rs
//! Access to recorded accelerometer sessions

pub mod session_reader;

pub use session_reader::{magnitude, Session, SessionMetadata, SessionReader, TriaxialSample};
