//! Numeric prosody settings to SSML attribute strings.
//!
//! Vendors parse these values literally, so sign and unit formatting are
//! part of each function's contract.

use super::capability::PitchUnit;
use super::settings::{
    clamp_or, AMBIENCE_RANGE, EMPHASIS_RANGE, PACING_RANGE, SOLEMNITY_RANGE,
};
use serde::Serialize;

/// Pitch shift per unit of solemnity above neutral
const PITCH_PERCENT_PER_STEP: f64 = 10.0;
const PITCH_SEMITONES_PER_STEP: f64 = 2.0;

/// Full ambience range spans +/- this many dB around the midpoint
const VOLUME_DB_SPAN: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmphasisLevel {
    Reduced,
    None,
    Moderate,
    Strong,
}

impl EmphasisLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmphasisLevel::Reduced => "reduced",
            EmphasisLevel::None => "none",
            EmphasisLevel::Moderate => "moderate",
            EmphasisLevel::Strong => "strong",
        }
    }
}

/// Attribute values for one document, computed once per call
#[derive(Debug, Clone, PartialEq)]
pub struct ProsodyAttributes {
    pub rate: String,
    pub pitch: String,
    pub volume: String,
    pub emphasis: EmphasisLevel,
}

// Formatting -0.0 would print "-0"
fn positive_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Pacing multiplier (0.5 to 2.0) as a rate percentage, e.g. 0.95 -> "95%"
pub fn pacing_rate(multiplier: f64) -> String {
    let multiplier = clamp_or(multiplier, PACING_RANGE, 1.0);
    format!("{}%", (multiplier * 100.0).round() as i64)
}

/// Solemnity (0 to 2) as a pitch shift. Neutral 1.0 is zero; more solemn is lower.
pub fn pitch_shift(solemnity: f64, unit: PitchUnit) -> String {
    let offset = 1.0 - clamp_or(solemnity, SOLEMNITY_RANGE, 1.0);
    match unit {
        PitchUnit::Percent => {
            let percent = positive_zero((offset * PITCH_PERCENT_PER_STEP).round());
            format!("{:+}%", percent as i64)
        }
        PitchUnit::Semitones => {
            let semitones = positive_zero((offset * PITCH_SEMITONES_PER_STEP * 10.0).round() / 10.0);
            format!("{:+.1}st", semitones)
        }
    }
}

/// Emphasis strength (0 to 2) bucketed into an SSML level. Boundary values
/// belong to the lower bucket.
pub fn emphasis_level(strength: f64) -> EmphasisLevel {
    let strength = clamp_or(strength, EMPHASIS_RANGE, 1.0);
    if strength <= 0.5 {
        EmphasisLevel::Reduced
    } else if strength <= 1.0 {
        EmphasisLevel::None
    } else if strength <= 1.5 {
        EmphasisLevel::Moderate
    } else {
        EmphasisLevel::Strong
    }
}

/// Ambience (0 to 1, neutral 0.5) as a signed decibel offset
pub fn volume_offset(ambience: f64) -> String {
    let ambience = clamp_or(ambience, AMBIENCE_RANGE, 0.5);
    let db = positive_zero(((ambience - 0.5) * VOLUME_DB_SPAN * 10.0).round() / 10.0);
    format!("{:+.1}dB", db)
}

impl ProsodyAttributes {
    pub fn map(
        pacing_multiplier: f64,
        solemnity: f64,
        emphasis_strength: f64,
        ambience: f64,
        pitch_unit: PitchUnit,
    ) -> Self {
        Self {
            rate: pacing_rate(pacing_multiplier),
            pitch: pitch_shift(solemnity, pitch_unit),
            volume: volume_offset(ambience),
            emphasis: emphasis_level(emphasis_strength),
        }
    }
}
