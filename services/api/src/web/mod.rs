pub mod ai;
pub mod auth;
pub mod favorites;
pub mod middleware;
pub mod rest;
pub mod state;

use axum::{
    middleware as axum_middleware,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

use self::state::AppState;

/// Builds every API route. Routes under `/admin` sit behind `require_admin`.
pub fn build_router(state: Arc<AppState>) -> Router {
    let public_routes = Router::new()
        .route("/tools", get(rest::list_tools_handler))
        .route("/categories", get(rest::list_categories_handler))
        .route("/ads", get(rest::list_ads_handler))
        .route("/catalog", get(favorites::catalog_view_handler))
        .route("/favorites", get(favorites::list_favorites_handler))
        .route("/favorites/{key}/toggle", post(favorites::toggle_favorite_handler))
        .route("/ai/marketing-content", post(ai::marketing_content_handler))
        .route("/ai/tool-advice", post(ai::tool_advice_handler))
        .route("/auth/login", post(auth::login_handler))
        .route("/auth/logout", post(auth::logout_handler))
        .route("/auth/status", get(auth::status_handler));

    let admin_routes = Router::new()
        .route("/admin/tools", post(rest::create_tool_handler))
        .route(
            "/admin/tools/{id}",
            patch(rest::update_tool_handler).delete(rest::delete_tool_handler),
        )
        .route("/admin/categories", post(rest::create_category_handler))
        .route(
            "/admin/categories/{id}",
            patch(rest::update_category_handler).delete(rest::delete_category_handler),
        )
        .route("/admin/ads", post(rest::create_ad_handler))
        .route(
            "/admin/ads/{id}",
            patch(rest::update_ad_handler).delete(rest::delete_ad_handler),
        )
        .route("/admin/integrity", get(rest::integrity_handler))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::require_admin,
        ));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .with_state(state)
}
