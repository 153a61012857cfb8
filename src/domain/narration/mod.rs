pub mod dto;
pub mod error;
pub mod language;
pub mod service;

pub use dto::{MarkupRequest, MarkupResponse, WarningsRequest, WarningsResponse};
pub use error::MarkupServiceError;
pub use language::LanguageCode;
pub use service::{MarkupService, MarkupServiceApi, PipelineKind};
