use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// TTS vendors the markup can be rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    Azure,
    Google,
    Polly,
    #[serde(rename = "elevenlabs")]
    ElevenLabs,
    #[serde(rename = "openai")]
    OpenAi,
}

impl Vendor {
    pub const ALL: [Vendor; 5] = [
        Vendor::Azure,
        Vendor::Google,
        Vendor::Polly,
        Vendor::ElevenLabs,
        Vendor::OpenAi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Vendor::Azure => "azure",
            Vendor::Google => "google",
            Vendor::Polly => "polly",
            Vendor::ElevenLabs => "elevenlabs",
            Vendor::OpenAi => "openai",
        }
    }

    /// Human-readable name used in warnings
    pub fn display_name(&self) -> &'static str {
        match self {
            Vendor::Azure => "Azure Speech",
            Vendor::Google => "Google Cloud TTS",
            Vendor::Polly => "Amazon Polly",
            Vendor::ElevenLabs => "ElevenLabs",
            Vendor::OpenAi => "OpenAI TTS",
        }
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vendor: {0}")]
pub struct UnknownVendor(pub String);

impl FromStr for Vendor {
    type Err = UnknownVendor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Vendor::ALL
            .into_iter()
            .find(|vendor| vendor.as_str() == normalized)
            .ok_or_else(|| UnknownVendor(s.to_string()))
    }
}

/// Audio container requested from the vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputContainer {
    Mp3,
    Wav,
    Ogg,
}

impl OutputContainer {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputContainer::Mp3 => "mp3",
            OutputContainer::Wav => "wav",
            OutputContainer::Ogg => "ogg",
        }
    }
}

impl std::fmt::Display for OutputContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub const EMPHASIS_RANGE: (f64, f64) = (0.0, 2.0);
pub const SOLEMNITY_RANGE: (f64, f64) = (0.0, 2.0);
pub const PACING_RANGE: (f64, f64) = (0.5, 2.0);
pub const PAUSE_INTENSITY_RANGE: (f64, f64) = (0.0, 1.0);
pub const AMBIENCE_RANGE: (f64, f64) = (0.0, 1.0);

/// Clamp into `range`, mapping NaN to `neutral`
pub(crate) fn clamp_or(value: f64, range: (f64, f64), neutral: f64) -> f64 {
    if value.is_nan() {
        neutral
    } else {
        value.clamp(range.0, range.1)
    }
}

fn default_midpoint() -> f64 {
    0.5
}

/// Prosody parameters for one synthesis call. Immutable: adjustments return
/// a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProsodySettings {
    pub vendor: Vendor,
    #[serde(default)]
    pub voice_identifier: String,
    pub emphasis_strength: f64,
    pub solemnity: f64,
    pub pacing_multiplier: f64,
    pub output_container: OutputContainer,
    #[serde(default = "default_midpoint")]
    pub pause_intensity: f64,
    #[serde(default = "default_midpoint")]
    pub ambience: f64,
}

impl ProsodySettings {
    /// Neutral settings for `vendor`
    pub fn neutral(vendor: Vendor) -> Self {
        Self {
            vendor,
            voice_identifier: String::new(),
            emphasis_strength: 1.0,
            solemnity: 1.0,
            pacing_multiplier: 1.0,
            output_container: OutputContainer::Mp3,
            pause_intensity: 0.5,
            ambience: 0.5,
        }
    }

    /// Copy with every numeric field forced into its documented range
    pub fn clamped(&self) -> Self {
        Self {
            emphasis_strength: clamp_or(self.emphasis_strength, EMPHASIS_RANGE, 1.0),
            solemnity: clamp_or(self.solemnity, SOLEMNITY_RANGE, 1.0),
            pacing_multiplier: clamp_or(self.pacing_multiplier, PACING_RANGE, 1.0),
            pause_intensity: clamp_or(self.pause_intensity, PAUSE_INTENSITY_RANGE, 0.5),
            ambience: clamp_or(self.ambience, AMBIENCE_RANGE, 0.5),
            ..self.clone()
        }
    }

    pub fn with_vendor(&self, vendor: Vendor) -> Self {
        Self {
            vendor,
            ..self.clone()
        }
    }

    pub fn with_pacing(&self, pacing_multiplier: f64) -> Self {
        Self {
            pacing_multiplier,
            ..self.clone()
        }
    }

    pub fn with_emphasis(&self, emphasis_strength: f64) -> Self {
        Self {
            emphasis_strength,
            ..self.clone()
        }
    }

    pub fn with_solemnity(&self, solemnity: f64) -> Self {
        Self {
            solemnity,
            ..self.clone()
        }
    }

    pub fn with_pause_intensity(&self, pause_intensity: f64) -> Self {
        Self {
            pause_intensity,
            ..self.clone()
        }
    }

    pub fn with_voice(&self, voice_identifier: impl Into<String>) -> Self {
        Self {
            voice_identifier: voice_identifier.into(),
            ..self.clone()
        }
    }
}
