//! services/api/src/web/ai.rs
//!
//! The two text-generation helpers. Each request is one call to the
//! collaborator: no retries, and failures come back as a generic error.

use crate::web::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use catalog_core::{
    MarketingContentRequest, PortError, TextGenerationService, ToolAdviceRequest,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct MarketingContentPayload {
    pub platform: String,
}

#[derive(Serialize, ToSchema)]
pub struct MarketingContentResponse {
    pub content: String,
}

#[derive(Deserialize, ToSchema)]
pub struct ToolAdvicePayload {
    pub goal: String,
}

#[derive(Serialize, ToSchema)]
pub struct ToolAdviceResponse {
    pub advice: String,
}

fn generator(state: &AppState) -> Result<&Arc<dyn TextGenerationService>, (StatusCode, String)> {
    state.text_generator.as_ref().ok_or((
        StatusCode::SERVICE_UNAVAILABLE,
        "Text generation is not configured".to_string(),
    ))
}

fn generation_failure(action: &str, e: PortError) -> (StatusCode, String) {
    if let PortError::InvalidInput(msg) = e {
        return (StatusCode::BAD_REQUEST, msg);
    }
    error!("Failed to {}: {:?}", action, e);
    (StatusCode::BAD_GATEWAY, format!("Failed to {}", action))
}

fn require_field(name: &str, value: &str) -> Result<(), (StatusCode, String)> {
    if value.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, format!("{} must not be empty", name)));
    }
    Ok(())
}

/// Generate a marketing post for a social media platform.
#[utoipa::path(
    post,
    path = "/ai/marketing-content",
    request_body = MarketingContentPayload,
    responses(
        (status = 200, description = "Generated content", body = MarketingContentResponse),
        (status = 502, description = "The text-generation provider failed"),
        (status = 503, description = "Text generation is not configured")
    )
)]
pub async fn marketing_content_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MarketingContentPayload>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    require_field("platform", &req.platform)?;
    let request = MarketingContentRequest {
        platform: req.platform.trim().to_string(),
    };
    let generated = generator(&state)?
        .generate_marketing_content(&request)
        .await
        .map_err(|e| generation_failure("generate marketing content", e))?;
    Ok(Json(MarketingContentResponse {
        content: generated.content,
    }))
}

/// Advise which tools help reach a marketing goal.
#[utoipa::path(
    post,
    path = "/ai/tool-advice",
    request_body = ToolAdvicePayload,
    responses(
        (status = 200, description = "Generated advice", body = ToolAdviceResponse),
        (status = 502, description = "The text-generation provider failed"),
        (status = 503, description = "Text generation is not configured")
    )
)]
pub async fn tool_advice_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ToolAdvicePayload>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    require_field("goal", &req.goal)?;
    let request = ToolAdviceRequest {
        goal: req.goal.trim().to_string(),
    };
    let generated = generator(&state)?
        .get_tool_use_advice(&request)
        .await
        .map_err(|e| generation_failure("get tool-use advice", e))?;
    Ok(Json(ToolAdviceResponse {
        advice: generated.advice,
    }))
}
