use serde::{Deserialize, Serialize};

/// Glossary category assigned by the term detector or an editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TermCategory {
    Toponym,
    Person,
    EthnicGroup,
    HistoricalConcept,
    Date,
}

/// A glossary entry with an optional IPA pronunciation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic_transcription: Option<String>,
    pub category: TermCategory,
}

impl Term {
    pub fn new(text: impl Into<String>, category: TermCategory) -> Self {
        Self {
            text: text.into(),
            phonetic_transcription: None,
            category,
        }
    }

    pub fn with_transcription(mut self, transcription: impl Into<String>) -> Self {
        self.phonetic_transcription = Some(transcription.into());
        self
    }

    /// The transcription, if present and non-blank
    pub fn transcription(&self) -> Option<&str> {
        self.phonetic_transcription
            .as_deref()
            .filter(|ph| !ph.trim().is_empty())
    }
}

/// True when at least one term would produce a phoneme override
pub fn has_any_transcription(terms: &[Term]) -> bool {
    terms
        .iter()
        .any(|term| !term.text.trim().is_empty() && term.transcription().is_some())
}
