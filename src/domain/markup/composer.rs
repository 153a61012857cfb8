use super::capability::{self, PitchUnit, VendorCapability};
use super::escape::escape;
use super::matcher::{self, Segment, TermMatcher};
use super::pausing::{self, break_tag};
use super::prosody::{pacing_rate, ProsodyAttributes};
use super::settings::ProsodySettings;
use super::term::{has_any_transcription, Term};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Source characters kept by the preview pipeline
pub const PREVIEW_CHAR_BUDGET: usize = 500;
pub const PREVIEW_ELLIPSIS: &str = "...";

/// Characters of a dropped term quoted in its warning
const QUOTED_TERM_CHARS: usize = 40;

const SSML_VERSION: &str = "1.0";
const SSML_NAMESPACE: &str = "http://www.w3.org/2001/10/synthesis";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisResult {
    pub markup_document: String,
    pub warnings: Vec<String>,
}

/// How a document is built, chosen once per call from the vendor capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupStrategy {
    FullMarkup {
        phoneme_overrides: bool,
        pitch_unit: PitchUnit,
        voice_element: bool,
    },
    PlainText,
}

impl MarkupStrategy {
    pub fn for_capability(capability: &VendorCapability) -> Self {
        if capability.supports_markup {
            MarkupStrategy::FullMarkup {
                phoneme_overrides: capability.supports_phoneme_override,
                pitch_unit: capability.pitch_unit,
                voice_element: capability.requires_voice_element,
            }
        } else {
            MarkupStrategy::PlainText
        }
    }

    fn name(&self) -> &'static str {
        match self {
            MarkupStrategy::FullMarkup { .. } => "full_markup",
            MarkupStrategy::PlainText => "plain_text",
        }
    }
}

/// Render segments, escaping every piece of raw text exactly once
fn render_segments(segments: &[Segment<'_>], out: &mut String) {
    for segment in segments {
        match *segment {
            Segment::Text(text) => out.push_str(&escape(text)),
            Segment::Term { text, phonetic } => {
                out.push_str(r#"<phoneme alphabet="ipa" ph=""#);
                out.push_str(&escape(phonetic));
                out.push_str(r#"">"#);
                out.push_str(&escape(text));
                out.push_str("</phoneme>");
            }
            Segment::Pause { millis } => out.push_str(&break_tag(millis)),
        }
    }
}

fn open_speak(language: &str, out: &mut String) {
    out.push_str(&format!(
        r#"<speak version="{}" xmlns="{}" xml:lang="{}">"#,
        SSML_VERSION,
        SSML_NAMESPACE,
        escape(&language.to_lowercase())
    ));
}

/// Warning for a glossary term whose override could not be applied
fn dropped_term_warning(text: &str) -> String {
    let quoted = match text.char_indices().nth(QUOTED_TERM_CHARS) {
        Some((cut, _)) => format!("{}{}", &text[..cut], PREVIEW_ELLIPSIS),
        None => text.to_string(),
    };
    format!(
        "Glossary term \"{}\" is too long to match; its phoneme override was dropped",
        quoted
    )
}

/// Build the document for `settings.vendor`.
///
/// Stages run in a fixed order:
/// 1. settings are clamped into range
/// 2. terms are matched into a span list (full markup with phoneme support only)
/// 3. pauses are inserted into text spans only, after term spans exist
/// 4. prosody attributes are mapped
/// 5. the envelope is written and every text span is escaped exactly once
pub fn synthesize(
    content: &str,
    terms: &[Term],
    settings: &ProsodySettings,
    language: &str,
) -> String {
    compose(content, terms, settings, language).0
}

/// The document plus one warning per glossary term that had to be dropped
fn compose(
    content: &str,
    terms: &[Term],
    settings: &ProsodySettings,
    language: &str,
) -> (String, Vec<String>) {
    let settings = settings.clamped();
    let capability = capability::capability(settings.vendor);
    let strategy = MarkupStrategy::for_capability(capability);

    let mut dropped = Vec::new();
    let mut document = String::with_capacity(content.len() * 2 + 256);
    open_speak(language, &mut document);

    match strategy {
        MarkupStrategy::FullMarkup {
            phoneme_overrides,
            pitch_unit,
            voice_element,
        } => {
            let segments = if phoneme_overrides {
                let term_matcher = TermMatcher::new(terms);
                dropped.extend(
                    term_matcher
                        .rejected()
                        .iter()
                        .map(|text| dropped_term_warning(text)),
                );
                term_matcher.segments(content)
            } else {
                matcher::whole(content)
            };
            let segments = pausing::insert_pauses(segments, settings.pause_intensity);
            let attributes = ProsodyAttributes::map(
                settings.pacing_multiplier,
                settings.solemnity,
                settings.emphasis_strength,
                settings.ambience,
                pitch_unit,
            );

            tracing::debug!(
                vendor = %settings.vendor,
                strategy = strategy.name(),
                segment_count = segments.len(),
                rate = %attributes.rate,
                pitch = %attributes.pitch,
                emphasis = attributes.emphasis.as_str(),
                "Composing markup document"
            );

            if voice_element {
                document.push_str(&format!(
                    r#"<voice name="{}">"#,
                    escape(&settings.voice_identifier)
                ));
            }
            document.push_str(&format!(
                r#"<prosody rate="{}" pitch="{}" volume="{}">"#,
                attributes.rate, attributes.pitch, attributes.volume
            ));
            document.push_str(&format!(
                r#"<emphasis level="{}">"#,
                attributes.emphasis.as_str()
            ));
            render_segments(&segments, &mut document);
            document.push_str("</emphasis></prosody>");
            if voice_element {
                document.push_str("</voice>");
            }
        }
        MarkupStrategy::PlainText => {
            tracing::debug!(
                vendor = %settings.vendor,
                strategy = strategy.name(),
                "Composing plain markup document"
            );

            document.push_str(&format!(
                r#"<prosody rate="{}">"#,
                pacing_rate(settings.pacing_multiplier)
            ));
            document.push_str(&escape(content));
            document.push_str("</prosody>");
        }
    }

    document.push_str("</speak>");
    (document, dropped)
}

/// Cut `content` to the preview budget, marking the cut with an ellipsis.
/// Runs before any markup exists, so no tag can be split.
pub fn truncate_for_preview(content: &str) -> Cow<'_, str> {
    match content.char_indices().nth(PREVIEW_CHAR_BUDGET) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &content[..cut], PREVIEW_ELLIPSIS)),
        None => Cow::Borrowed(content),
    }
}

/// [`synthesize`] over at most the first 500 characters of `content`
pub fn synthesize_preview(
    content: &str,
    terms: &[Term],
    settings: &ProsodySettings,
    language: &str,
) -> String {
    synthesize(&truncate_for_preview(content), terms, settings, language)
}

/// Capability and container warnings followed by dropped-term warnings
fn with_warnings(
    (markup_document, dropped): (String, Vec<String>),
    terms: &[Term],
    settings: &ProsodySettings,
) -> SynthesisResult {
    let mut warnings = collect_warnings(terms, settings);
    warnings.extend(dropped);
    SynthesisResult {
        markup_document,
        warnings,
    }
}

/// Vendor warnings plus a container fallback note when one applies
pub fn collect_warnings(terms: &[Term], settings: &ProsodySettings) -> Vec<String> {
    let mut warnings = capability::get_warnings(settings.vendor, has_any_transcription(terms));
    if let Some(warning) =
        capability::container_warning(settings.vendor, settings.output_container)
    {
        warnings.push(warning);
    }
    warnings
}

pub fn synthesize_with_warnings(
    content: &str,
    terms: &[Term],
    settings: &ProsodySettings,
    language: &str,
) -> SynthesisResult {
    with_warnings(compose(content, terms, settings, language), terms, settings)
}

pub fn synthesize_preview_with_warnings(
    content: &str,
    terms: &[Term],
    settings: &ProsodySettings,
    language: &str,
) -> SynthesisResult {
    with_warnings(
        compose(&truncate_for_preview(content), terms, settings, language),
        terms,
        settings,
    )
}
