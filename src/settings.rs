//! # Transcription Settings
//!
//! Tempo and meter configuration for a transcription run. Both values are
//! explicit parameters of the pipeline rather than embedded literals, so
//! the same core runs at any tempo or bar capacity.
//!
//! ## Tempo Input Semantics
//! `parse_bpm` mirrors the behavior of an interactive tempo prompt:
//! - empty or non-numeric input falls back to the default of 80 BPM
//! - a value that parses but is non-positive (or not finite) is a hard
//!   rejection, because the quantizer divides by the beat duration
//!
//! ## YAML Settings
//! A settings document uses kebab-case keys, in the same shape as other
//! YAML configuration in this family of tools:
//!
//! ```yaml
//! bpm: "96"
//! beats-per-bar: 3
//! ```

use serde::Deserialize;

use crate::error::JianpuError;

/// Tempo assumed when none is supplied (or the supplied one is not a
/// number).
pub const DEFAULT_BPM: f64 = 80.0;

/// Bar capacity assumed when none is supplied.
pub const DEFAULT_BEATS_PER_BAR: u32 = 4;

/// Configuration for one transcription run: a single constant tempo and a
/// fixed number of beats per bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Beats per minute; must be positive and finite.
    pub bpm: f64,
    /// Beat capacity of every bar; must be positive.
    pub beats_per_bar: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bpm: DEFAULT_BPM,
            beats_per_bar: DEFAULT_BEATS_PER_BAR,
        }
    }
}

/// Raw settings for YAML deserialization.
///
/// `bpm` is kept as a string so that non-numeric input can fall back to the
/// default instead of failing deserialization.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
pub struct RawSettings {
    pub bpm: Option<String>,
    pub beats_per_bar: Option<u32>,
}

impl Settings {
    /// Parse settings from a YAML document.
    ///
    /// Missing keys take their defaults; a malformed document is a
    /// [`JianpuError::SettingsError`]; a non-positive tempo or meter is
    /// rejected like any other.
    pub fn from_yaml(source: &str) -> Result<Self, JianpuError> {
        let raw: RawSettings = serde_yaml::from_str(source)
            .map_err(|e| JianpuError::SettingsError(e.to_string()))?;
        let settings = Self {
            bpm: parse_bpm(raw.bpm.as_deref().unwrap_or(""))?,
            beats_per_bar: raw.beats_per_bar.unwrap_or(DEFAULT_BEATS_PER_BAR),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Length of one beat in seconds (`60 / BPM`).
    pub fn beat_duration(&self) -> f64 {
        60.0 / self.bpm
    }

    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), JianpuError> {
        if !self.bpm.is_finite() || self.bpm <= 0.0 {
            return Err(JianpuError::InvalidTempo { bpm: self.bpm });
        }
        if self.beats_per_bar == 0 {
            return Err(JianpuError::InvalidMeter {
                beats_per_bar: self.beats_per_bar,
            });
        }
        Ok(())
    }
}

/// Parse a user-supplied tempo string.
///
/// Empty or non-numeric input yields [`DEFAULT_BPM`]; a parsed value that
/// is non-positive or not finite is rejected.
pub fn parse_bpm(input: &str) -> Result<f64, JianpuError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_BPM);
    }
    match trimmed.parse::<f64>() {
        Ok(bpm) if bpm.is_finite() && bpm > 0.0 => Ok(bpm),
        Ok(bpm) => Err(JianpuError::InvalidTempo { bpm }),
        Err(_) => Ok(DEFAULT_BPM),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.bpm, 80.0);
        assert_eq!(settings.beats_per_bar, 4);
        assert_eq!(settings.beat_duration(), 0.75);
    }

    #[test]
    fn test_parse_bpm_numeric() {
        assert_eq!(parse_bpm("120").unwrap(), 120.0);
        assert_eq!(parse_bpm(" 96.5 ").unwrap(), 96.5);
    }

    #[test]
    fn test_parse_bpm_empty_or_garbage_falls_back_to_default() {
        assert_eq!(parse_bpm("").unwrap(), DEFAULT_BPM);
        assert_eq!(parse_bpm("   ").unwrap(), DEFAULT_BPM);
        assert_eq!(parse_bpm("fast").unwrap(), DEFAULT_BPM);
    }

    #[test]
    fn test_parse_bpm_rejects_non_positive() {
        assert!(matches!(
            parse_bpm("0"),
            Err(JianpuError::InvalidTempo { .. })
        ));
        assert!(matches!(
            parse_bpm("-90"),
            Err(JianpuError::InvalidTempo { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_tempo_and_meter() {
        let bad_tempo = Settings { bpm: 0.0, ..Settings::default() };
        assert!(matches!(
            bad_tempo.validate(),
            Err(JianpuError::InvalidTempo { .. })
        ));

        let bad_meter = Settings { beats_per_bar: 0, ..Settings::default() };
        assert!(matches!(
            bad_meter.validate(),
            Err(JianpuError::InvalidMeter { .. })
        ));
    }

    #[test]
    fn test_from_yaml() {
        let settings = Settings::from_yaml("bpm: \"96\"\nbeats-per-bar: 3\n").unwrap();
        assert_eq!(settings.bpm, 96.0);
        assert_eq!(settings.beats_per_bar, 3);
    }

    #[test]
    fn test_from_yaml_missing_keys_take_defaults() {
        let settings = Settings::from_yaml("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_from_yaml_rejects_malformed_document() {
        assert!(matches!(
            Settings::from_yaml(": not yaml ["),
            Err(JianpuError::SettingsError(_))
        ));
    }

    #[test]
    fn test_from_yaml_rejects_negative_bpm() {
        assert!(matches!(
            Settings::from_yaml("bpm: \"-10\""),
            Err(JianpuError::InvalidTempo { .. })
        ));
    }
}
