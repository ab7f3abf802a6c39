//! Error types for the audio core.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while rendering or writing audio.
///
/// Out-of-range frame indices and MIDI clamping are deliberately not errors:
/// both are bounded silently so slightly drifting note math cannot crash a
/// render. Hard clipping in the writer is silent saturation.
#[derive(Debug, Error)]
pub enum AudioError {
    /// A track or interleave buffer could not be allocated.
    #[error("out of memory allocating {what} ({bytes} bytes)")]
    OutOfMemory {
        /// What was being allocated.
        what: &'static str,
        /// Requested size in bytes.
        bytes: usize,
    },

    /// The output file could not be created.
    #[error("cannot create '{path}': {source}")]
    Open {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing the output file failed. The partial file is removed.
    #[error("failed writing '{path}': {source}")]
    Write {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl AudioError {
    /// Stable diagnostic code for driver-level reporting.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::OutOfMemory { .. } => "OUT_OF_MEMORY",
            AudioError::Open { .. } => "IO_OPEN",
            AudioError::Write { .. } => "IO_WRITE",
        }
    }
}
