use super::dto::{MarkupRequest, MarkupResponse, WarningsRequest};
use super::error::MarkupServiceError;
use super::language::{explicit_language, LanguageCode};
use crate::domain::markup::{self, capability, has_any_transcription};
use async_trait::async_trait;
use lingua::{LanguageDetector, LanguageDetectorBuilder};
use moka::future::Cache;
use std::time::Duration;

/// Which pipeline a request runs through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineKind {
    Full,
    Preview,
}

impl PipelineKind {
    fn as_str(&self) -> &'static str {
        match self {
            PipelineKind::Full => "full",
            PipelineKind::Preview => "preview",
        }
    }
}

pub struct MarkupService {
    language_detector: LanguageDetector,
    cache: Option<Cache<String, MarkupResponse>>,
    max_content_chars: usize,
    max_terms: usize,
}

impl MarkupService {
    pub fn new(cache_enabled: bool, max_content_chars: usize, max_terms: usize) -> Self {
        // Only the languages enabled in Cargo.toml
        let language_detector = LanguageDetectorBuilder::from_all_languages().build();

        let cache = if cache_enabled {
            Some(
                Cache::builder()
                    .max_capacity(500)
                    .time_to_idle(Duration::from_secs(30 * 60)) // 30 minutes, refreshes on access
                    .build(),
            )
        } else {
            None
        };

        Self {
            language_detector,
            cache,
            max_content_chars,
            max_terms,
        }
    }
}

#[async_trait]
pub trait MarkupServiceApi: Send + Sync {
    /// Build the full markup document for a narration
    ///
    /// This operation:
    /// - Validates content and glossary size
    /// - Resolves the target language (explicit tag or detection)
    /// - Composes the vendor-specific document and its warnings
    async fn synthesize(&self, request: MarkupRequest) -> Result<MarkupResponse, MarkupServiceError>;

    /// Same as `synthesize` over the first 500 characters of the content
    async fn preview(&self, request: MarkupRequest) -> Result<MarkupResponse, MarkupServiceError>;

    /// Advisory warnings for a vendor and glossary, computed fresh each call
    fn warnings(&self, request: &WarningsRequest) -> Vec<String>;
}

#[async_trait]
impl MarkupServiceApi for MarkupService {
    async fn synthesize(&self, request: MarkupRequest) -> Result<MarkupResponse, MarkupServiceError> {
        self.run(request, PipelineKind::Full).await
    }

    async fn preview(&self, request: MarkupRequest) -> Result<MarkupResponse, MarkupServiceError> {
        self.run(request, PipelineKind::Preview).await
    }

    fn warnings(&self, request: &WarningsRequest) -> Vec<String> {
        markup::get_warnings(request.vendor, has_any_transcription(&request.terms))
    }
}

impl MarkupService {
    async fn run(
        &self,
        request: MarkupRequest,
        kind: PipelineKind,
    ) -> Result<MarkupResponse, MarkupServiceError> {
        tracing::info!(
            pipeline = kind.as_str(),
            vendor = %request.settings.vendor,
            content_length = request.content.chars().count(),
            term_count = request.terms.len(),
            "Markup synthesis request"
        );

        // 1. Guard request size
        self.guard_request(&request)?;

        // 2. Check cache (if enabled)
        let cache_key = match &self.cache {
            Some(_) => Some(Self::cache_key(&request, kind)?),
            None => None,
        };
        if let (Some(cache), Some(key)) = (&self.cache, &cache_key) {
            if let Some(cached) = cache.get(key).await {
                tracing::info!(
                    pipeline = kind.as_str(),
                    vendor = %request.settings.vendor,
                    "Markup cache hit - returning cached document"
                );
                return Ok(cached);
            }
        }

        // 3. Resolve language
        let language = self.resolve_language(&request);

        // 4. Compose
        let result = match kind {
            PipelineKind::Full => markup::synthesize_with_warnings(
                &request.content,
                &request.terms,
                &request.settings,
                &language,
            ),
            PipelineKind::Preview => markup::synthesize_preview_with_warnings(
                &request.content,
                &request.terms,
                &request.settings,
                &language,
            ),
        };

        if !result.warnings.is_empty() {
            tracing::info!(
                vendor = %request.settings.vendor,
                warnings = ?result.warnings,
                "Markup synthesized with vendor warnings"
            );
        }

        let response = MarkupResponse {
            markup_document: result.markup_document,
            warnings: result.warnings,
            language: language.to_lowercase(),
            container: capability::resolve_container(
                request.settings.vendor,
                request.settings.output_container,
            ),
        };

        tracing::info!(
            pipeline = kind.as_str(),
            vendor = %request.settings.vendor,
            language = %response.language,
            document_length = response.markup_document.len(),
            "Markup document composed"
        );

        // 5. Cache the result if caching is enabled
        if let (Some(cache), Some(key)) = (&self.cache, cache_key) {
            cache.insert(key, response.clone()).await;
        }

        Ok(response)
    }

    fn guard_request(&self, request: &MarkupRequest) -> Result<(), MarkupServiceError> {
        let content_chars = request.content.chars().count();
        if content_chars > self.max_content_chars {
            return Err(MarkupServiceError::PayloadTooLarge(format!(
                "Content must be {} characters or less, got {}",
                self.max_content_chars, content_chars
            )));
        }

        if request.terms.len() > self.max_terms {
            return Err(MarkupServiceError::Invalid(format!(
                "Glossary must have {} terms or less, got {}",
                self.max_terms,
                request.terms.len()
            )));
        }

        Ok(())
    }

    fn resolve_language(&self, request: &MarkupRequest) -> String {
        if let Some(tag) = explicit_language(request.language.as_deref()) {
            return tag.to_string();
        }

        match self.language_detector.detect_language_of(&request.content) {
            Some(language) => {
                let code = LanguageCode::from_lingua(language);
                tracing::info!(language_detected = %code, "Language detected for narration");
                code.as_str().to_string()
            }
            None => {
                tracing::warn!("Could not detect language, falling back to English");
                LanguageCode::English.as_str().to_string()
            }
        }
    }

    fn cache_key(request: &MarkupRequest, kind: PipelineKind) -> Result<String, MarkupServiceError> {
        let serialized = serde_json::to_string(request)
            .map_err(|e| anyhow::anyhow!("failed to build cache key: {}", e))?;
        Ok(format!("{}:{}", kind.as_str(), serialized))
    }
}
