//! # MIDI Note Extraction
//!
//! Reads a Standard MIDI File and produces the ordered note stream the
//! transcription pipeline consumes. This is the upstream collaborator of
//! the core: everything past this point works purely on pitches and
//! second-valued timestamps.
//!
//! ## Behavior
//! - Notes are taken from the first track that contains any note events
//!   (the "first instrument"); other tracks are ignored, since merging
//!   voices is out of scope.
//! - Tick times convert to seconds using the file's first tempo event
//!   (default 120 BPM when absent) and the header resolution. A single
//!   tempo is assumed for the whole piece.
//! - A NoteOn with velocity zero counts as a NoteOff, per the MIDI spec.
//!   Overlapping notes on the same key pair off earliest-first.

use midly::{MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};

use crate::error::JianpuError;

/// Microseconds per quarter note when the file carries no tempo event
/// (the MIDI default of 120 BPM).
const DEFAULT_TEMPO: u32 = 500_000;

/// A single extracted note: MIDI key number plus onset and release times
/// in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub pitch: u8,
    pub start: f64,
    pub end: f64,
}

impl Note {
    /// Sounding length in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Extract the note stream from Standard MIDI File bytes.
///
/// Returns the notes of the first track containing any, sorted by onset
/// time (stable for ties).
///
/// # Errors
/// - [`JianpuError::MidiError`] if the bytes are not a readable SMF
/// - [`JianpuError::NoNotes`] if no track contains note events
pub fn extract_notes(bytes: &[u8]) -> Result<Vec<Note>, JianpuError> {
    let smf = Smf::parse(bytes).map_err(|e| JianpuError::MidiError(e.to_string()))?;
    let seconds_per_tick = seconds_per_tick(&smf);

    for track in &smf.tracks {
        let mut notes = track_notes(track, seconds_per_tick);
        if !notes.is_empty() {
            notes.sort_by(|a, b| a.start.total_cmp(&b.start));
            return Ok(notes);
        }
    }

    Err(JianpuError::NoNotes)
}

/// Compute the real-time length of one tick.
///
/// Metrical timing scales the first tempo event by the pulses-per-quarter
/// resolution; SMPTE timecode timing is tempo-independent.
fn seconds_per_tick(smf: &Smf) -> f64 {
    match smf.header.timing {
        Timing::Metrical(ticks_per_beat) => {
            let tempo = first_tempo(smf).unwrap_or(DEFAULT_TEMPO);
            tempo as f64 / 1_000_000.0 / ticks_per_beat.as_int() as f64
        }
        Timing::Timecode(fps, subframe) => 1.0 / (fps.as_f32() as f64 * subframe as f64),
    }
}

/// First tempo meta event in the file, in microseconds per quarter note.
fn first_tempo(smf: &Smf) -> Option<u32> {
    for track in &smf.tracks {
        for event in track {
            if let TrackEventKind::Meta(MetaMessage::Tempo(tempo)) = event.kind {
                return Some(tempo.as_int());
            }
        }
    }
    None
}

/// Pair NoteOn/NoteOff events of one track into notes.
///
/// Notes still open at the end of the track have no release time and are
/// dropped.
fn track_notes(track: &[TrackEvent], seconds_per_tick: f64) -> Vec<Note> {
    let mut notes = Vec::new();
    let mut open: Vec<(u8, u64)> = Vec::new(); // (key, start tick)
    let mut ticks: u64 = 0;

    for event in track {
        ticks += u64::from(event.delta.as_int());

        let (key, released) = match event.kind {
            TrackEventKind::Midi {
                message: MidiMessage::NoteOn { key, vel },
                ..
            } => (key.as_int(), vel.as_int() == 0),
            TrackEventKind::Midi {
                message: MidiMessage::NoteOff { key, .. },
                ..
            } => (key.as_int(), true),
            _ => continue,
        };

        if released {
            if let Some(i) = open.iter().position(|(k, _)| *k == key) {
                let (_, start_tick) = open.remove(i);
                notes.push(Note {
                    pitch: key,
                    start: start_tick as f64 * seconds_per_tick,
                    end: ticks as f64 * seconds_per_tick,
                });
            }
        } else {
            open.push((key, ticks));
        }
    }

    notes
}
