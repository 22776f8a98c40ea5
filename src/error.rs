//! # Error Types
//!
//! This module defines all error types for the jianpu transcriber.
//!
//! ## Error Types
//! - `InvalidTempo` - A tempo that parsed but is non-positive (or not
//!   finite); rejected before quantization ever divides by it
//! - `InvalidMeter` - Zero beats per bar
//! - `SettingsError` - Malformed YAML settings document
//! - `MidiError` - Unreadable or corrupt MIDI file
//! - `NoNotes` - The MIDI file contains no track with note events
//!
//! An empty note stream is deliberately NOT an error: transcribing zero
//! notes yields zero output lines.
//!
//! ## Usage
//! ```rust
//! use jianpu::{transcribe, JianpuError, Settings};
//!
//! let settings = Settings { bpm: -3.0, ..Settings::default() };
//! match transcribe(&[], &settings) {
//!     Err(JianpuError::InvalidTempo { bpm }) => eprintln!("bad tempo: {}", bpm),
//!     other => panic!("expected tempo rejection, got {:?}", other),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JianpuError {
    /// Tempo parsed as a number but is unusable.
    ///
    /// The quantizer divides by the beat duration (`60 / BPM`), so a
    /// non-positive or non-finite BPM must be rejected before the pipeline
    /// runs. Non-numeric tempo *input* is different: it falls back to the
    /// default of 80 (see [`crate::settings::parse_bpm`]).
    #[error("Invalid tempo: BPM must be positive, got {bpm}")]
    InvalidTempo { bpm: f64 },

    /// Beats per bar must be a positive integer.
    #[error("Invalid meter: beats per bar must be positive, got {beats_per_bar}")]
    InvalidMeter { beats_per_bar: u32 },

    /// The YAML settings document could not be parsed.
    #[error("Invalid settings: {0}")]
    SettingsError(String),

    /// The input bytes are not a readable Standard MIDI File.
    #[error("MIDI error: {0}")]
    MidiError(String),

    /// No track in the MIDI file contains note events, so there is nothing
    /// to transcribe.
    #[error("MIDI file contains no notes")]
    NoNotes,
}
