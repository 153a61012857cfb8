//! SSML synthesis and vendor adaptation.
//!
//! Turns narration text, a pronunciation glossary and prosody settings into a
//! vendor-specific markup document. Everything here is pure: no I/O, no
//! shared state, safe to call concurrently (e.g. once per target language).

pub mod capability;
pub mod composer;
pub mod escape;
pub mod matcher;
pub mod pausing;
pub mod prosody;
pub mod settings;
pub mod term;

pub use capability::{
    all_capabilities, capability, get_warnings, resolve_container, supports_markup, PitchUnit,
    VendorCapability,
};
pub use composer::{
    synthesize, synthesize_preview, synthesize_preview_with_warnings, synthesize_with_warnings,
    MarkupStrategy, SynthesisResult, PREVIEW_CHAR_BUDGET,
};
pub use escape::escape;
pub use matcher::{match_terms, Segment, TermMatcher};
pub use pausing::insert_pausing;
pub use prosody::{emphasis_level, pacing_rate, pitch_shift, volume_offset, EmphasisLevel};
pub use settings::{OutputContainer, ProsodySettings, UnknownVendor, Vendor};
pub use term::{has_any_transcription, Term, TermCategory};
