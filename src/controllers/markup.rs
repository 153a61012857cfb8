use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::{
        markup::{self, Vendor, VendorCapability},
        narration::{
            MarkupRequest, MarkupResponse, MarkupService, MarkupServiceApi, WarningsRequest,
            WarningsResponse,
        },
    },
    error::{AppError, AppResult},
};

pub struct MarkupController {
    markup_service: Arc<MarkupService>,
}

impl MarkupController {
    pub fn new(markup_service: Arc<MarkupService>) -> Self {
        Self { markup_service }
    }

    /// POST /api/markup/synthesize - Build the full markup document
    pub async fn synthesize(
        State(controller): State<Arc<MarkupController>>,
        payload: Result<Json<MarkupRequest>, JsonRejection>,
    ) -> AppResult<Json<MarkupResponse>> {
        let Json(request) = payload?;

        let response = controller
            .markup_service
            .synthesize(request)
            .await
            .map_err(AppError::from)?;

        Ok(Json(response))
    }

    /// POST /api/markup/preview - Build the markup for the first 500 characters
    pub async fn preview(
        State(controller): State<Arc<MarkupController>>,
        payload: Result<Json<MarkupRequest>, JsonRejection>,
    ) -> AppResult<Json<MarkupResponse>> {
        let Json(request) = payload?;

        let response = controller
            .markup_service
            .preview(request)
            .await
            .map_err(AppError::from)?;

        Ok(Json(response))
    }

    /// POST /api/markup/warnings - What the vendor will silently ignore
    pub async fn warnings(
        State(controller): State<Arc<MarkupController>>,
        payload: Result<Json<WarningsRequest>, JsonRejection>,
    ) -> AppResult<Json<WarningsResponse>> {
        let Json(request) = payload?;

        Ok(Json(WarningsResponse {
            warnings: controller.markup_service.warnings(&request),
        }))
    }

    /// GET /api/vendors - Capability table
    pub async fn list_vendors() -> Json<&'static [VendorCapability]> {
        Json(markup::all_capabilities())
    }

    /// GET /api/vendors/:vendor - Capability record of one vendor
    pub async fn get_vendor(Path(vendor): Path<String>) -> AppResult<Json<&'static VendorCapability>> {
        let vendor: Vendor = vendor
            .parse()
            .map_err(|e: markup::UnknownVendor| AppError::NotFound(e.to_string()))?;

        Ok(Json(markup::capability(vendor)))
    }
}
