//! services/api/src/web/auth.rs
//!
//! Authentication endpoints for the admin login, logout and status check.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use catalog_core::PortError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::web::middleware::{session_token, SESSION_COOKIE};
use crate::web::rest::port_rejection;
use crate::web::state::AppState;

//=========================================================================================
// Request/Response Types
//=========================================================================================

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatusResponse {
    pub logged_in: bool,
}

//=========================================================================================
// Handlers
//=========================================================================================

/// POST /auth/login - Start the admin session
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthStatusResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "The session could not be stored")
    )
)]
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let token = match state.session.login(&req.email, &req.password).await {
        Ok(token) => token,
        Err(PortError::Unauthorized) => {
            return Err((StatusCode::UNAUTHORIZED, "Invalid email or password".to_string()))
        }
        Err(e) => return Err(port_rejection("start the admin session", e)),
    };

    // The session has no expiry; the cookie lives until logout or browser close.
    let cookie = format!(
        "{}={}; HttpOnly; Secure; SameSite=Lax; Path=/",
        SESSION_COOKIE, token
    );

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(AuthStatusResponse { logged_in: true }),
    ))
}

/// POST /auth/logout - End the admin session
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Logout successful", body = AuthStatusResponse),
        (status = 401, description = "No active session")
    )
)]
pub async fn logout_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let token = session_token(&headers)
        .ok_or((StatusCode::UNAUTHORIZED, "No session found".to_string()))?;
    if !state.session.validate(token).await {
        return Err((StatusCode::UNAUTHORIZED, "No session found".to_string()));
    }

    state.session.logout().await;

    let cookie = format!(
        "{}=; HttpOnly; Secure; SameSite=Lax; Path=/; Max-Age=0",
        SESSION_COOKIE
    );
    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(AuthStatusResponse { logged_in: false }),
    ))
}

/// GET /auth/status - Whether an admin session is active
#[utoipa::path(
    get,
    path = "/auth/status",
    responses((status = 200, description = "Session presence", body = AuthStatusResponse))
)]
pub async fn status_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(AuthStatusResponse {
        logged_in: state.session.is_logged_in().await,
    })
}
