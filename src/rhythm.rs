//! # Rhythm Markers
//!
//! Renders a pitch symbol and its [`BeatLength`] as an annotated token, the
//! unit of the output text. This is the single authoritative table mapping
//! beat classes to marker patterns; because the match over [`BeatLength`]
//! is exhaustive, it cannot drift out of sync with the quantizer.
//!
//! ## Marker Grammar
//! - Multi-beat notes get one trailing ` -` sustain continuation per beat
//!   beyond the first (`1 - - -` is a four-beat note).
//! - A trailing `.` dots the duration (1.5x).
//! - A leading letter selects the subdivision: `q` eighth, `s` sixteenth,
//!   `d` thirty-second, `h` sixty-fourth.
//! - The rest symbol `0` runs through the same table (`q0` is an
//!   eighth-note rest).
//!
//! This token grammar is the crate's output contract with downstream
//! jianpu renderers such as jianpu-ly; keep it stable.

use crate::beat::BeatLength;

/// Symbol used for rests when padding an underfull bar.
pub const REST_SYMBOL: &str = "0";

/// Render a pitch symbol with the rhythm marker for its beat class.
///
/// # Example
/// ```rust
/// use jianpu::{mark, BeatLength};
///
/// assert_eq!(mark(BeatLength::Whole, "1"), "1 - - -");
/// assert_eq!(mark(BeatLength::Eighth, "3"), "q3");
/// assert_eq!(mark(BeatLength::DottedEighth, "5'"), "q5'.");
/// ```
pub fn mark(beats: BeatLength, symbol: &str) -> String {
    match beats {
        BeatLength::Whole => format!("{} - - -", symbol),
        BeatLength::DottedHalf => format!("{} - -", symbol),
        BeatLength::Half => format!("{} -", symbol),
        BeatLength::DottedQuarter => format!("{}.", symbol),
        BeatLength::Quarter => symbol.to_string(),
        BeatLength::DottedEighth => format!("q{}.", symbol),
        BeatLength::Eighth => format!("q{}", symbol),
        BeatLength::DottedSixteenth => format!("s{}.", symbol),
        BeatLength::Sixteenth => format!("s{}", symbol),
        BeatLength::DottedThirtySecond => format!("d{}.", symbol),
        BeatLength::ThirtySecond => format!("d{}", symbol),
        BeatLength::DottedSixtyFourth => format!("h{}.", symbol),
        BeatLength::SixtyFourth => format!("h{}", symbol),
    }
}
