//! # Pitch Encoding
//!
//! Maps MIDI key numbers to jianpu scale-degree symbols with octave marks.
//!
//! ## Symbol Grammar
//! - Degrees `1`-`7` are the seven diatonic steps of the chromatic scale
//!   map; the five chromatic notes in between are written as sharped
//!   degrees (`#1`, `#2`, `#4`, `#5`, `#6`).
//! - The reference octave is octave 4, the one containing middle C
//!   (MIDI 60), written bare. Each octave above appends one `'` mark; each
//!   octave below appends one `,` mark.
//!
//! ## Example
//! ```rust
//! use jianpu::encode;
//!
//! assert_eq!(encode(60), "1");   // middle C
//! assert_eq!(encode(72), "1'");  // one octave up
//! assert_eq!(encode(48), "1,");  // one octave down
//! assert_eq!(encode(84), "1''"); // two octaves up
//! ```

/// Chromatic scale-degree symbols, indexed by pitch class (C = 0).
const DEGREES: [&str; 12] = [
    "1", "#1", "2", "#2", "3", "4", "#4", "5", "#5", "6", "#6", "7",
];

const HIGH_OCTAVE_MARK: &str = "'";
const LOW_OCTAVE_MARK: &str = ",";

/// Reference octave rendered without marks (contains middle C).
const REFERENCE_OCTAVE: i32 = 4;

/// Encode a MIDI-style key number as a jianpu pitch symbol.
///
/// The octave decoration is a pure function of the signed octave distance
/// from the reference octave: `n` octaves up yields `n` high marks, `n`
/// octaves down yields `n` low marks. The function is total over `i32`;
/// values outside the conventional 0-127 MIDI range simply produce longer
/// mark runs (euclidean division keeps the pitch class well defined even
/// for negative inputs).
pub fn encode(pitch: i32) -> String {
    let octave = pitch.div_euclid(12) - 1;
    let degree = DEGREES[pitch.rem_euclid(12) as usize];
    let distance = octave - REFERENCE_OCTAVE;
    let mark = if distance > 0 {
        HIGH_OCTAVE_MARK
    } else {
        LOW_OCTAVE_MARK
    };
    format!("{}{}", degree, mark.repeat(distance.unsigned_abs() as usize))
}
