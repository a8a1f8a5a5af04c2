//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the catalog REST endpoints (tools, categories,
//! advertisements) and the master definition for the OpenAPI specification.

use crate::web::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use catalog_core::{
    AdDraft, AdPatch, Advertisement, Category, CategoryPatch, IconName, IntegrityReport,
    PortError, Tool, ToolDraft, ToolPatch,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        list_tools_handler,
        create_tool_handler,
        update_tool_handler,
        delete_tool_handler,
        list_categories_handler,
        create_category_handler,
        update_category_handler,
        delete_category_handler,
        list_ads_handler,
        create_ad_handler,
        update_ad_handler,
        delete_ad_handler,
        integrity_handler,
        crate::web::favorites::catalog_view_handler,
        crate::web::favorites::list_favorites_handler,
        crate::web::favorites::toggle_favorite_handler,
        crate::web::ai::marketing_content_handler,
        crate::web::ai::tool_advice_handler,
        crate::web::auth::login_handler,
        crate::web::auth::logout_handler,
        crate::web::auth::status_handler,
    ),
    components(
        schemas(
            ToolResponse, CreateToolRequest, UpdateToolRequest,
            CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest,
            AdResponse, CreateAdRequest, UpdateAdRequest,
            IntegrityResponse, DanglingToolResponse,
            crate::web::favorites::CatalogViewResponse,
            crate::web::favorites::SectionResponse,
            crate::web::favorites::ToolCardResponse,
            crate::web::favorites::FavoritesResponse,
            crate::web::ai::MarketingContentPayload,
            crate::web::ai::MarketingContentResponse,
            crate::web::ai::ToolAdvicePayload,
            crate::web::ai::ToolAdviceResponse,
            crate::web::auth::LoginRequest,
            crate::web::auth::AuthStatusResponse,
        )
    ),
    tags(
        (name = "Marketing Tool Catalog API", description = "Catalog, favorites, admin CRUD and AI helper endpoints.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Error Mapping
//=========================================================================================

/// Maps a port failure onto a status code and a message safe to show users.
/// Unexpected failures are logged and replaced by a generic message.
pub fn port_rejection(action: &str, e: PortError) -> (StatusCode, String) {
    match &e {
        PortError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        PortError::Conflict { .. } => (StatusCode::CONFLICT, e.to_string()),
        PortError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        PortError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
        PortError::Unexpected(_) => {
            error!("Failed to {}: {:?}", action, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to {}", action),
            )
        }
    }
}

fn parse_icon(name: &str) -> Result<IconName, (StatusCode, String)> {
    name.parse::<IconName>()
        .map_err(|e| port_rejection("parse icon name", e))
}

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub link: String,
    pub icon_name: String,
    /// Renderable icon handle resolved from `iconName`.
    pub icon: String,
    pub category: String,
    pub version: u64,
}

impl From<Tool> for ToolResponse {
    fn from(tool: Tool) -> Self {
        Self {
            icon_name: tool.icon_name.as_str().to_string(),
            icon: tool.icon().to_string(),
            id: tool.id,
            name: tool.name,
            description: tool.description,
            link: tool.link,
            category: tool.category,
            version: tool.version,
        }
    }
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateToolRequest {
    pub name: String,
    pub description: String,
    pub link: String,
    pub icon_name: String,
    pub category: String,
}

/// Omitted fields keep their current value.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateToolRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub icon_name: Option<String>,
    pub category: Option<String>,
    /// Rejects the update with 409 when the stored version differs.
    pub if_version: Option<u64>,
}

#[derive(Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub version: u64,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            version: category.version,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub if_version: Option<u64>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub image_url: String,
    pub version: u64,
}

impl From<Advertisement> for AdResponse {
    fn from(ad: Advertisement) -> Self {
        Self {
            id: ad.id,
            title: ad.title,
            description: ad.description,
            link: ad.link,
            image_url: ad.image_url,
            version: ad.version,
        }
    }
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdRequest {
    pub title: String,
    pub description: String,
    pub link: String,
    pub image_url: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image_url: Option<String>,
    pub if_version: Option<u64>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DanglingToolResponse {
    pub tool_id: String,
    pub tool_name: String,
    pub category: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityResponse {
    pub consistent: bool,
    pub dangling: Vec<DanglingToolResponse>,
}

impl From<IntegrityReport> for IntegrityResponse {
    fn from(report: IntegrityReport) -> Self {
        Self {
            consistent: report.is_consistent(),
            dangling: report
                .dangling
                .into_iter()
                .map(|d| DanglingToolResponse {
                    tool_id: d.tool_id,
                    tool_name: d.tool_name,
                    category: d.category,
                })
                .collect(),
        }
    }
}

//=========================================================================================
// Tool Handlers
//=========================================================================================

/// List every tool in stored order.
#[utoipa::path(
    get,
    path = "/tools",
    responses((status = 200, description = "All tools", body = [ToolResponse]))
)]
pub async fn list_tools_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let tools = state
        .catalog
        .fetch_tools()
        .await
        .map_err(|e| port_rejection("load tools", e))?;
    Ok(Json(tools.into_iter().map(ToolResponse::from).collect::<Vec<_>>()))
}

/// Add a tool. Requires an admin session.
#[utoipa::path(
    post,
    path = "/admin/tools",
    request_body = CreateToolRequest,
    responses(
        (status = 201, description = "Tool created", body = ToolResponse),
        (status = 400, description = "Unknown icon or category, or empty name"),
        (status = 401, description = "No admin session")
    )
)]
pub async fn create_tool_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateToolRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let draft = ToolDraft {
        icon_name: parse_icon(&req.icon_name)?,
        name: req.name,
        description: req.description,
        link: req.link,
        category: req.category,
    };
    let tool = state
        .catalog
        .add_tool(draft)
        .await
        .map_err(|e| port_rejection("add tool", e))?;
    Ok((StatusCode::CREATED, Json(ToolResponse::from(tool))))
}

/// Partially update a tool. Requires an admin session.
#[utoipa::path(
    patch,
    path = "/admin/tools/{id}",
    request_body = UpdateToolRequest,
    params(("id" = String, Path, description = "Tool id")),
    responses(
        (status = 200, description = "Tool updated", body = ToolResponse),
        (status = 404, description = "No tool with this id"),
        (status = 409, description = "Stale ifVersion")
    )
)]
pub async fn update_tool_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateToolRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let icon_name = req.icon_name.as_deref().map(parse_icon).transpose()?;
    let patch = ToolPatch {
        name: req.name,
        description: req.description,
        link: req.link,
        icon_name,
        category: req.category,
    };
    let tool = state
        .catalog
        .update_tool(&id, patch, req.if_version)
        .await
        .map_err(|e| port_rejection("update tool", e))?;
    Ok(Json(ToolResponse::from(tool)))
}

/// Delete a tool. Deleting an unknown id succeeds.
#[utoipa::path(
    delete,
    path = "/admin/tools/{id}",
    params(("id" = String, Path, description = "Tool id")),
    responses((status = 204, description = "Tool absent after the call"))
)]
pub async fn delete_tool_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .catalog
        .delete_tool(&id)
        .await
        .map_err(|e| port_rejection("delete tool", e))?;
    Ok(StatusCode::NO_CONTENT)
}

//=========================================================================================
// Category Handlers
//=========================================================================================

#[utoipa::path(
    get,
    path = "/categories",
    responses((status = 200, description = "All categories", body = [CategoryResponse]))
)]
pub async fn list_categories_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let categories = state
        .catalog
        .fetch_categories()
        .await
        .map_err(|e| port_rejection("load categories", e))?;
    Ok(Json(
        categories
            .into_iter()
            .map(CategoryResponse::from)
            .collect::<Vec<_>>(),
    ))
}

/// Add a category; its id is the slug of the name.
#[utoipa::path(
    post,
    path = "/admin/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Empty name")
    )
)]
pub async fn create_category_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let category = state
        .catalog
        .add_category(&req.name)
        .await
        .map_err(|e| port_rejection("add category", e))?;
    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))))
}

/// Rename a category. The id never changes.
#[utoipa::path(
    patch,
    path = "/admin/categories/{id}",
    request_body = UpdateCategoryRequest,
    params(("id" = String, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 404, description = "No category with this id"),
        (status = 409, description = "Stale ifVersion")
    )
)]
pub async fn update_category_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let category = state
        .catalog
        .update_category(&id, CategoryPatch { name: req.name }, req.if_version)
        .await
        .map_err(|e| port_rejection("update category", e))?;
    Ok(Json(CategoryResponse::from(category)))
}

/// Delete a category and move its tools to "uncategorized".
#[utoipa::path(
    delete,
    path = "/admin/categories/{id}",
    params(("id" = String, Path, description = "Category id")),
    responses((status = 204, description = "Category absent after the call"))
)]
pub async fn delete_category_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .catalog
        .delete_category(&id)
        .await
        .map_err(|e| port_rejection("delete category", e))?;
    Ok(StatusCode::NO_CONTENT)
}

//=========================================================================================
// Advertisement Handlers
//=========================================================================================

#[utoipa::path(
    get,
    path = "/ads",
    responses((status = 200, description = "All ad cards", body = [AdResponse]))
)]
pub async fn list_ads_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let ads = state
        .catalog
        .fetch_ads()
        .await
        .map_err(|e| port_rejection("load ads", e))?;
    Ok(Json(ads.into_iter().map(AdResponse::from).collect::<Vec<_>>()))
}

#[utoipa::path(
    post,
    path = "/admin/ads",
    request_body = CreateAdRequest,
    responses((status = 201, description = "Ad created", body = AdResponse))
)]
pub async fn create_ad_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAdRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let draft = AdDraft {
        title: req.title,
        description: req.description,
        link: req.link,
        image_url: req.image_url,
    };
    let ad = state
        .catalog
        .add_ad(draft)
        .await
        .map_err(|e| port_rejection("add advertisement", e))?;
    Ok((StatusCode::CREATED, Json(AdResponse::from(ad))))
}

#[utoipa::path(
    patch,
    path = "/admin/ads/{id}",
    request_body = UpdateAdRequest,
    params(("id" = String, Path, description = "Advertisement id")),
    responses(
        (status = 200, description = "Ad updated", body = AdResponse),
        (status = 404, description = "No ad with this id"),
        (status = 409, description = "Stale ifVersion")
    )
)]
pub async fn update_ad_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateAdRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let patch = AdPatch {
        title: req.title,
        description: req.description,
        link: req.link,
        image_url: req.image_url,
    };
    let ad = state
        .catalog
        .update_ad(&id, patch, req.if_version)
        .await
        .map_err(|e| port_rejection("update advertisement", e))?;
    Ok(Json(AdResponse::from(ad)))
}

#[utoipa::path(
    delete,
    path = "/admin/ads/{id}",
    params(("id" = String, Path, description = "Advertisement id")),
    responses((status = 204, description = "Ad absent after the call"))
)]
pub async fn delete_ad_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .catalog
        .delete_ad(&id)
        .await
        .map_err(|e| port_rejection("delete advertisement", e))?;
    Ok(StatusCode::NO_CONTENT)
}

//=========================================================================================
// Consistency
//=========================================================================================

/// Report tools whose category no longer exists.
#[utoipa::path(
    get,
    path = "/admin/integrity",
    responses((status = 200, description = "Integrity report", body = IntegrityResponse))
)]
pub async fn integrity_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let report = state
        .catalog
        .check_integrity()
        .await
        .map_err(|e| port_rejection("check catalog integrity", e))?;
    Ok(Json(IntegrityResponse::from(report)))
}
