//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{OpenAiTextAdapter, PgKeyValueStore},
    config::Config,
    error::ApiError,
    web::{build_router, favorites::PROFILE_HEADER, rest::ApiDoc, state::AppState},
};
use async_openai::{config::OpenAIConfig, Client};
use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, HeaderName, HeaderValue, Method},
    Router,
};
use catalog_core::{
    AdminCredentials, AdminSession, FavoritesBook, JsonStore, LatencyProfile, LocalCatalog,
    TextGenerationService,
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Connect to Database & Run Migrations ---
    info!("Connecting to database...");
    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    let kv_store = Arc::new(PgKeyValueStore::new(db_pool));
    info!("Running database migrations...");
    kv_store.run_migrations().await?;
    info!("Database migrations complete.");

    // --- 3. Build the Catalog, Session and Text Generation ---
    let store = JsonStore::new(kv_store);
    let latency = if config.simulate_latency {
        LatencyProfile::simulated()
    } else {
        LatencyProfile::none()
    };
    let catalog = Arc::new(LocalCatalog::new(store.clone(), latency));

    let session = AdminSession::new(
        store.clone(),
        AdminCredentials {
            email: config.admin_email.clone(),
            password_hash: config.admin_password_hash.clone(),
        },
    )?;

    let text_generator: Option<Arc<dyn TextGenerationService>> = match &config.openai_api_key {
        Some(api_key) => {
            let client = Client::with_config(OpenAIConfig::new().with_api_key(api_key));
            Some(Arc::new(OpenAiTextAdapter::new(
                client,
                config.content_model.clone(),
                config.advice_model.clone(),
            )))
        }
        None => {
            warn!("OPENAI_API_KEY is not set; the AI endpoints will answer 503");
            None
        }
    };

    // --- 4. Build the Shared AppState ---
    let app_state = Arc::new(AppState {
        catalog,
        favorites: FavoritesBook::new(store),
        session,
        text_generator,
        favorites_keying: config.favorites_keying,
    });

    // --- 5. Create the Web Router ---
    let origin = config.cors_origin.parse::<HeaderValue>().map_err(|e| {
        ApiError::Internal(format!("Invalid CORS origin '{}': {}", config.cors_origin, e))
    })?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(PROFILE_HEADER)]);

    let api_router = build_router(app_state)
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(cors);

    let app = Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 6. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
