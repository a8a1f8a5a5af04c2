//! services/api/src/web/favorites.rs
//!
//! Per-profile favorites and the grouped catalog view they are merged into.
//! A profile stands in for one browser: the client sends a stable id in the
//! `x-profile-id` header.

use crate::web::middleware::session_token;
use crate::web::rest::{port_rejection, ToolResponse};
use crate::web::state::AppState;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use catalog_core::view::{CategorySection, ToolCard};
use catalog_core::{build_catalog_view, Audience, CatalogView, FavoriteSet};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use utoipa::ToSchema;

pub const PROFILE_HEADER: &str = "x-profile-id";
const MAX_PROFILE_LEN: usize = 64;

//=========================================================================================
// Response Types
//=========================================================================================

#[derive(Serialize, ToSchema)]
pub struct FavoritesResponse {
    pub favorites: Vec<String>,
}

impl From<FavoriteSet> for FavoritesResponse {
    fn from(set: FavoriteSet) -> Self {
        Self {
            favorites: set.into_iter().collect(),
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToolCardResponse {
    pub tool: ToolResponse,
    pub category_name: String,
    pub is_favorite: bool,
}

impl From<ToolCard> for ToolCardResponse {
    fn from(card: ToolCard) -> Self {
        Self {
            tool: ToolResponse::from(card.tool),
            category_name: card.category_name,
            is_favorite: card.is_favorite,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionResponse {
    pub category_id: String,
    pub category_name: String,
    pub tools: Vec<ToolCardResponse>,
}

impl From<CategorySection> for SectionResponse {
    fn from(section: CategorySection) -> Self {
        Self {
            category_id: section.category_id,
            category_name: section.category_name,
            tools: section.tools.into_iter().map(ToolCardResponse::from).collect(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct CatalogViewResponse {
    pub favorites: Vec<ToolCardResponse>,
    pub sections: Vec<SectionResponse>,
}

impl From<CatalogView> for CatalogViewResponse {
    fn from(view: CatalogView) -> Self {
        Self {
            favorites: view.favorites.into_iter().map(ToolCardResponse::from).collect(),
            sections: view.sections.into_iter().map(SectionResponse::from).collect(),
        }
    }
}

//=========================================================================================
// Helpers
//=========================================================================================

fn profile_id(headers: &HeaderMap) -> Result<Option<&str>, (StatusCode, String)> {
    let Some(value) = headers.get(PROFILE_HEADER) else {
        return Ok(None);
    };
    let profile = value
        .to_str()
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid x-profile-id format".to_string()))?;

    let valid = !profile.is_empty()
        && profile.len() <= MAX_PROFILE_LEN
        && profile
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err((
            StatusCode::BAD_REQUEST,
            "Invalid x-profile-id format".to_string(),
        ));
    }
    Ok(Some(profile))
}

fn require_profile(headers: &HeaderMap) -> Result<&str, (StatusCode, String)> {
    profile_id(headers)?.ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            "x-profile-id header is required".to_string(),
        )
    })
}

//=========================================================================================
// Handlers
//=========================================================================================

/// The grouped catalog with the profile's favorites merged in.
///
/// Without `x-profile-id` the view has no favorites. A valid admin session
/// cookie yields the admin view, which has no favorites section.
#[utoipa::path(
    get,
    path = "/catalog",
    params(("x-profile-id" = Option<String>, Header, description = "Stable id of the visitor's browser profile.")),
    responses(
        (status = 200, description = "Grouped catalog", body = CatalogViewResponse),
        (status = 400, description = "Malformed profile id")
    )
)]
pub async fn catalog_view_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let profile = profile_id(&headers)?;

    let audience = match session_token(&headers) {
        Some(token) if state.session.validate(token).await => Audience::Admin,
        _ => Audience::Visitor,
    };

    let (tools, categories) = tokio::join!(state.catalog.fetch_tools(), state.catalog.fetch_categories());
    let tools = tools.map_err(|e| port_rejection("load tools", e))?;
    let categories = categories.map_err(|e| port_rejection("load categories", e))?;

    if audience == Audience::Admin {
        // Surfaces dangling category references to whoever can fix them.
        let report = state
            .catalog
            .check_integrity()
            .await
            .map_err(|e| port_rejection("check catalog integrity", e))?;
        debug!("Catalog integrity: {} dangling tool(s)", report.dangling.len());
    }

    let favorite_set = match profile {
        Some(profile) => state.favorites_for(profile).load().await,
        None => FavoriteSet::new(),
    };

    let view = build_catalog_view(
        &tools,
        &categories,
        &favorite_set,
        state.favorites_keying,
        audience,
    );
    Ok(Json(CatalogViewResponse::from(view)))
}

#[utoipa::path(
    get,
    path = "/favorites",
    params(("x-profile-id" = String, Header, description = "Stable id of the visitor's browser profile.")),
    responses(
        (status = 200, description = "The profile's favorite tool keys", body = FavoritesResponse),
        (status = 400, description = "Missing or malformed profile id")
    )
)]
pub async fn list_favorites_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let profile = require_profile(&headers)?;
    let favorites = state.favorites_for(profile).load().await;
    Ok(Json(FavoritesResponse::from(favorites)))
}

/// Flip one tool key in the profile's favorites and persist the result.
#[utoipa::path(
    post,
    path = "/favorites/{key}/toggle",
    params(
        ("key" = String, Path, description = "Tool name or id, depending on FAVORITES_KEY."),
        ("x-profile-id" = String, Header, description = "Stable id of the visitor's browser profile.")
    ),
    responses(
        (status = 200, description = "The updated favorite set", body = FavoritesResponse),
        (status = 400, description = "Missing or malformed profile id")
    )
)]
pub async fn toggle_favorite_handler(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let profile = require_profile(&headers)?;
    if key.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Favorite key must not be empty".to_string()));
    }

    let next = state.favorites_for(profile).toggle(&key).await;
    Ok(Json(FavoritesResponse::from(next)))
}
