pub mod beat;
pub mod error;
pub mod layout;
pub mod midi;
pub mod pitch;
pub mod rhythm;
pub mod settings;

pub use beat::{quantize, BeatLength};
pub use error::JianpuError;
pub use layout::layout;
pub use midi::{extract_notes, Note};
pub use pitch::encode;
pub use rhythm::mark;
pub use settings::{parse_bpm, Settings, DEFAULT_BEATS_PER_BAR, DEFAULT_BPM};

/// Transcribe an ordered note stream to jianpu text, one bar per line.
/// This is the main entry point for the library.
///
/// Each note is encoded independently (pitch symbol plus quantized beat
/// length), combined into an annotated token, and laid out into bars of
/// `settings.beats_per_bar` beats. An empty note stream yields an empty
/// line list.
///
/// # Example
/// ```rust
/// use jianpu::{transcribe, Note, Settings};
///
/// // Four quarter notes at 80 BPM fill exactly one bar.
/// let notes: Vec<Note> = [(60, 0.0), (62, 0.75), (64, 1.5), (65, 2.25)]
///     .iter()
///     .map(|&(pitch, start)| Note { pitch, start, end: start + 0.75 })
///     .collect();
/// let lines = transcribe(&notes, &Settings::default())?;
/// assert_eq!(lines, vec!["1 2 3 4"]);
/// # Ok::<(), jianpu::JianpuError>(())
/// ```
///
/// # Errors
/// Returns [`JianpuError`] if the settings are invalid (non-positive tempo
/// or meter).
pub fn transcribe(notes: &[Note], settings: &Settings) -> Result<Vec<String>, JianpuError> {
    settings.validate()?;
    let beat_duration = settings.beat_duration();

    let tokens: Vec<(String, BeatLength)> = notes
        .iter()
        .map(|note| {
            let symbol = pitch::encode(i32::from(note.pitch));
            let beats = beat::quantize(note.duration(), beat_duration);
            (rhythm::mark(beats, &symbol), beats)
        })
        .collect();

    Ok(layout::layout(&tokens, f64::from(settings.beats_per_bar)))
}

/// Transcribe a Standard MIDI File to jianpu text.
///
/// Extracts the note stream of the first track containing notes, then runs
/// [`transcribe`] on it.
pub fn transcribe_midi(bytes: &[u8], settings: &Settings) -> Result<Vec<String>, JianpuError> {
    let notes = midi::extract_notes(bytes)?;
    transcribe(&notes, settings)
}
