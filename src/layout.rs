//! # Bar Layout
//!
//! Accumulates annotated tokens into fixed-capacity bars and emits one line
//! of text per bar, tokens separated by single spaces.
//!
//! ## Bar Accounting
//! A bar closes as soon as the running beat sum reaches or exceeds its
//! capacity. A note is never split across a barline: when a note overflows
//! the bar, the whole token stays in the closing bar and the excess carries
//! into the next bar's accounting (the sum is reduced by the capacity, not
//! reset to zero). The next bar therefore starts part-way full. This
//! mirrors how a sustained note is written once rather than re-tied into
//! the new bar.
//!
//! ## Rest Padding
//! When the input runs out mid-bar, the shortfall is filled with rest
//! tokens, greedily largest-first from one beat down to a sixty-fourth
//! (`0`, `q0`, `s0`, `d0`, `h0`). Any residual smaller than a sixty-fourth
//! is dropped; that precision loss is documented behavior, not an error.

use crate::beat::BeatLength;
use crate::rhythm::{mark, REST_SYMBOL};

/// Rest classes tried when padding an underfull final bar, largest first.
/// Only plain (undotted) rests are emitted.
const REST_FILL: [BeatLength; 5] = [
    BeatLength::Quarter,
    BeatLength::Eighth,
    BeatLength::Sixteenth,
    BeatLength::ThirtySecond,
    BeatLength::SixtyFourth,
];

/// Lay out annotated tokens into bars of `beats_per_bar` beats.
///
/// Returns one string per bar. An empty token stream yields no lines.
pub fn layout(tokens: &[(String, BeatLength)], beats_per_bar: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line_buffer: Vec<&str> = Vec::new();
    let mut current_beat = 0.0;

    for (token, beats) in tokens {
        line_buffer.push(token);
        current_beat += beats.beats();
        if current_beat >= beats_per_bar {
            lines.push(line_buffer.join(" "));
            line_buffer.clear();
            // Carry the overflow from a note that crossed the barline.
            current_beat -= beats_per_bar;
        }
    }

    if !line_buffer.is_empty() {
        let mut line = line_buffer.join(" ");
        for rest in rest_fill(beats_per_bar - current_beat) {
            line.push(' ');
            line.push_str(&rest);
        }
        lines.push(line);
    }

    lines
}

/// Build the rest tokens covering `shortfall` beats, greedily largest
/// class first. The shortfall is rounded to five decimal places up front to
/// absorb floating-point drift from the beat accumulation.
fn rest_fill(shortfall: f64) -> Vec<String> {
    let mut remaining = (shortfall * 100_000.0).round() / 100_000.0;
    let mut rests = Vec::new();
    while remaining > 0.0 {
        match REST_FILL.iter().find(|class| remaining >= class.beats()) {
            Some(class) => {
                rests.push(mark(*class, REST_SYMBOL));
                remaining -= class.beats();
            }
            // Residual below a sixty-fourth is dropped.
            None => break,
        }
    }
    rests
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(token: &str, beats: BeatLength) -> (String, BeatLength) {
        (token.to_string(), beats)
    }

    #[test]
    fn test_empty_stream_yields_no_lines() {
        assert!(layout(&[], 4.0).is_empty());
    }

    #[test]
    fn test_exact_multiple_produces_full_bars_without_padding() {
        let tokens = vec![
            note("1", BeatLength::Quarter),
            note("2", BeatLength::Quarter),
            note("3", BeatLength::Quarter),
            note("4", BeatLength::Quarter),
            note("5 -", BeatLength::Half),
            note("6 -", BeatLength::Half),
        ];
        let lines = layout(&tokens, 4.0);
        assert_eq!(lines, vec!["1 2 3 4", "5 - 6 -"]);
    }

    #[test]
    fn test_underfull_final_bar_is_padded_with_rests() {
        let tokens = vec![note("1", BeatLength::Quarter)];
        let lines = layout(&tokens, 4.0);
        assert_eq!(lines, vec!["1 0 0 0"]);
    }

    #[test]
    fn test_fractional_shortfall_uses_prefixed_rests() {
        // 1 + 1 + 0.5 = 2.5 beats, shortfall exactly 1.5.
        let tokens = vec![
            note("1", BeatLength::Quarter),
            note("2", BeatLength::Quarter),
            note("q3", BeatLength::Eighth),
        ];
        let lines = layout(&tokens, 4.0);
        assert_eq!(lines, vec!["1 2 q3 0 q0"]);
    }

    #[test]
    fn test_rest_fill_is_greedy_largest_first() {
        // Shortfall 4 - 0.09375 = 3.90625 = 3*1 + 0.5 + 0.25 + 0.125
        // with a 1/32 residual that gets dropped.
        let tokens = vec![note("h1.", BeatLength::DottedSixtyFourth)];
        let lines = layout(&tokens, 4.0);
        assert_eq!(lines, vec!["h1. 0 0 0 q0 s0 d0"]);
    }

    #[test]
    fn test_overflowing_note_closes_bar_and_carries_excess() {
        // The half note lands on beat 4 and pushes the sum to 5; the bar
        // closes with the whole token, and the next bar starts one beat in.
        let tokens = vec![
            note("1", BeatLength::Quarter),
            note("2", BeatLength::Quarter),
            note("3", BeatLength::Quarter),
            note("5 -", BeatLength::Half),
            note("6", BeatLength::Quarter),
            note("7", BeatLength::Quarter),
            note("1'", BeatLength::Quarter),
        ];
        let lines = layout(&tokens, 4.0);
        // Second bar: carry 1 + three quarters = 4 beats, closes cleanly.
        assert_eq!(lines, vec!["1 2 3 5 -", "6 7 1'"]);
    }

    #[test]
    fn test_custom_bar_capacity() {
        let tokens = vec![
            note("1", BeatLength::Quarter),
            note("2", BeatLength::Quarter),
            note("3", BeatLength::Quarter),
            note("4", BeatLength::Quarter),
        ];
        let lines = layout(&tokens, 3.0);
        assert_eq!(lines, vec!["1 2 3", "4 0 0"]);
    }

    #[test]
    fn test_accumulated_drift_is_absorbed_by_rounding() {
        // Twenty-one dotted thirty-seconds sum to 3.9375 in exact
        // arithmetic; the rounded shortfall of 0.0625 must come out as a
        // single sixty-fourth rest even with float accumulation error.
        let tokens: Vec<_> = (0..21)
            .map(|_| note("d1.", BeatLength::DottedThirtySecond))
            .collect();
        let lines = layout(&tokens, 4.0);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(" h0"), "got: {}", lines[0]);
    }
}
