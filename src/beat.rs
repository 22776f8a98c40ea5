//! # Beat Lengths and Duration Quantization
//!
//! This module defines the closed set of beat-length classes a note can
//! occupy in the output notation, and the quantizer that maps a measured
//! note duration (in seconds) onto one of them.
//!
//! ## Beat-Length Classes
//! One beat corresponds to a quarter note, so the 13 classes run from a
//! sixty-fourth note (1/16 beat) up to a whole note (4 beats), with the
//! dotted (1.5x) value between each pair of neighbors:
//!
//! ```text
//! 0.0625  0.09375  0.125  0.1875  0.25  0.375  0.5  0.75  1  1.5  2  3  4
//! ```
//!
//! ## Quantization
//! `quantize` performs bucket-boundary quantization, not nearest-neighbor
//! rounding: a duration maps to the class of the largest threshold it is at
//! or above. Exact threshold equality therefore resolves upward (a note
//! lasting exactly one beat is a `Quarter`, not a `DottedEighth`).
//! Durations shorter than a sixty-fourth clamp to `SixtyFourth`; durations
//! of three beats or more map to `Whole`. The function is total: every
//! non-negative duration lands in exactly one class.
//!
//! ## Related Modules
//! - `rhythm` - Renders each class as its textual rhythm marker
//! - `layout` - Sums classes to place tokens into bars

/// A quantized note duration, expressed as a class of beat multiples.
///
/// Variants are named by note value (one beat = quarter note). The enum is
/// closed: every duration quantizes to one of these, and the rhythm marker
/// table in [`crate::rhythm`] covers all of them exhaustively, so no
/// unmapped-duration case can arise between the two tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeatLength {
    /// 4 beats
    Whole,
    /// 3 beats
    DottedHalf,
    /// 2 beats
    Half,
    /// 1.5 beats
    DottedQuarter,
    /// 1 beat
    Quarter,
    /// 3/4 beat
    DottedEighth,
    /// 1/2 beat
    Eighth,
    /// 3/8 beat
    DottedSixteenth,
    /// 1/4 beat
    Sixteenth,
    /// 3/16 beat
    DottedThirtySecond,
    /// 1/8 beat
    ThirtySecond,
    /// 3/32 beat
    DottedSixtyFourth,
    /// 1/16 beat
    SixtyFourth,
}

impl BeatLength {
    /// Returns the class value as a number of beats.
    pub fn beats(&self) -> f64 {
        match self {
            BeatLength::Whole => 4.0,
            BeatLength::DottedHalf => 3.0,
            BeatLength::Half => 2.0,
            BeatLength::DottedQuarter => 1.5,
            BeatLength::Quarter => 1.0,
            BeatLength::DottedEighth => 0.75,
            BeatLength::Eighth => 0.5,
            BeatLength::DottedSixteenth => 0.375,
            BeatLength::Sixteenth => 0.25,
            BeatLength::DottedThirtySecond => 0.1875,
            BeatLength::ThirtySecond => 0.125,
            BeatLength::DottedSixtyFourth => 0.09375,
            BeatLength::SixtyFourth => 0.0625,
        }
    }
}

/// Quantization ladder, largest threshold first. Each entry maps durations
/// at or above `fraction * beat_duration` (and below the next entry up) to
/// its class. `DottedHalf` is deliberately absent: durations of three beats
/// or more all map to `Whole`, so the 3-beat class is representable but
/// never produced by quantization.
const LADDER: [(f64, BeatLength); 12] = [
    (3.0, BeatLength::Whole),
    (2.0, BeatLength::Half),
    (1.5, BeatLength::DottedQuarter),
    (1.0, BeatLength::Quarter),
    (0.75, BeatLength::DottedEighth),
    (0.5, BeatLength::Eighth),
    (0.375, BeatLength::DottedSixteenth),
    (0.25, BeatLength::Sixteenth),
    (0.1875, BeatLength::DottedThirtySecond),
    (0.125, BeatLength::ThirtySecond),
    (0.09375, BeatLength::DottedSixtyFourth),
    (0.0625, BeatLength::SixtyFourth),
];

/// Quantize a note duration to a [`BeatLength`] class.
///
/// `beat_duration` is the length of one beat in seconds (`60 / BPM`) and
/// must be positive; callers are expected to have validated the tempo via
/// [`crate::Settings::validate`] before reaching this point.
///
/// # Example
/// ```rust
/// use jianpu::{quantize, BeatLength};
///
/// // At 80 BPM one beat lasts 0.75 s.
/// assert_eq!(quantize(0.75, 0.75), BeatLength::Quarter);
/// assert_eq!(quantize(1.2, 0.75), BeatLength::DottedQuarter);
/// ```
pub fn quantize(duration: f64, beat_duration: f64) -> BeatLength {
    for (fraction, class) in LADDER {
        if duration >= beat_duration * fraction {
            return class;
        }
    }
    BeatLength::SixtyFourth
}
