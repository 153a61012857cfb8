use crate::domain::markup::{OutputContainer, ProsodySettings, Term, Vendor};
use serde::{Deserialize, Serialize};

/// Body of POST /api/markup/synthesize and /api/markup/preview
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkupRequest {
    pub content: String,
    #[serde(default)]
    pub terms: Vec<Term>,
    pub settings: ProsodySettings,
    /// Target language tag; missing or "auto" means detect from content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkupResponse {
    pub markup_document: String,
    pub warnings: Vec<String>,
    /// Language tag written into the document
    pub language: String,
    /// Container the vendor will actually be asked for
    pub container: OutputContainer,
}

/// Body of POST /api/markup/warnings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningsRequest {
    pub vendor: Vendor,
    #[serde(default)]
    pub terms: Vec<Term>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningsResponse {
    pub warnings: Vec<String>,
}
