use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::domain::markup;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready() -> impl IntoResponse {
    // Nothing external to wait on: the engine is pure and the vendor table static
    let vendors: Vec<&str> = markup::all_capabilities()
        .iter()
        .map(|capability| capability.vendor.as_str())
        .collect();

    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "markup": "available",
            "vendors": vendors
        })),
    )
}
