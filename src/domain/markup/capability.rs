use super::settings::{OutputContainer, Vendor};
use serde::Serialize;

/// Unit a vendor expects in the prosody `pitch` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PitchUnit {
    Percent,
    Semitones,
}

/// What a vendor honours in submitted markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorCapability {
    pub vendor: Vendor,
    pub supports_markup: bool,
    pub supports_phoneme_override: bool,
    pub supported_containers: &'static [OutputContainer],
    pub pitch_unit: PitchUnit,
    /// Azure rejects documents without a `<voice>` element
    pub requires_voice_element: bool,
}

const ALL_CONTAINERS: &[OutputContainer] = &[
    OutputContainer::Mp3,
    OutputContainer::Wav,
    OutputContainer::Ogg,
];

static CAPABILITIES: [VendorCapability; 5] = [
    VendorCapability {
        vendor: Vendor::Azure,
        supports_markup: true,
        supports_phoneme_override: true,
        supported_containers: ALL_CONTAINERS,
        pitch_unit: PitchUnit::Percent,
        requires_voice_element: true,
    },
    VendorCapability {
        vendor: Vendor::Google,
        supports_markup: true,
        supports_phoneme_override: true,
        supported_containers: ALL_CONTAINERS,
        pitch_unit: PitchUnit::Semitones,
        requires_voice_element: false,
    },
    VendorCapability {
        vendor: Vendor::Polly,
        supports_markup: true,
        supports_phoneme_override: true,
        supported_containers: &[OutputContainer::Mp3, OutputContainer::Ogg],
        pitch_unit: PitchUnit::Percent,
        requires_voice_element: false,
    },
    VendorCapability {
        vendor: Vendor::ElevenLabs,
        supports_markup: false,
        supports_phoneme_override: false,
        supported_containers: &[OutputContainer::Mp3],
        pitch_unit: PitchUnit::Percent,
        requires_voice_element: false,
    },
    VendorCapability {
        vendor: Vendor::OpenAi,
        supports_markup: false,
        supports_phoneme_override: false,
        supported_containers: &[OutputContainer::Mp3, OutputContainer::Wav],
        pitch_unit: PitchUnit::Percent,
        requires_voice_element: false,
    },
];

/// Capability record for `vendor`
pub fn capability(vendor: Vendor) -> &'static VendorCapability {
    let index = match vendor {
        Vendor::Azure => 0,
        Vendor::Google => 1,
        Vendor::Polly => 2,
        Vendor::ElevenLabs => 3,
        Vendor::OpenAi => 4,
    };
    &CAPABILITIES[index]
}

pub fn all_capabilities() -> &'static [VendorCapability] {
    &CAPABILITIES
}

pub fn supports_markup(vendor: Vendor) -> bool {
    capability(vendor).supports_markup
}

/// The requested container if the vendor can produce it, MP3 otherwise
pub fn resolve_container(vendor: Vendor, requested: OutputContainer) -> OutputContainer {
    if capability(vendor).supported_containers.contains(&requested) {
        requested
    } else {
        OutputContainer::Mp3
    }
}

/// Advisory messages about settings the vendor will silently drop.
///
/// Order is stable: the generic markup warning first, then the phoneme one.
/// Fully capable vendors get nothing.
pub fn get_warnings(vendor: Vendor, has_any_phonetic_transcription: bool) -> Vec<String> {
    let capability = capability(vendor);
    let mut warnings = Vec::new();

    if !capability.supports_markup {
        warnings.push(format!(
            "{} has limited markup support: emphasis, pitch and pause settings will not be applied.",
            vendor.display_name()
        ));

        if has_any_phonetic_transcription {
            warnings.push(format!(
                "{} ignores phoneme overrides: glossary pronunciations will be ignored and terms read as written.",
                vendor.display_name()
            ));
        }
    }

    warnings
}

/// Warning emitted when the requested container falls back to MP3
pub fn container_warning(vendor: Vendor, requested: OutputContainer) -> Option<String> {
    let resolved = resolve_container(vendor, requested);
    (resolved != requested).then(|| {
        format!(
            "{} cannot produce {} audio; {} will be used instead.",
            vendor.display_name(),
            requested,
            resolved
        )
    })
}
