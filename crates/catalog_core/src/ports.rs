//! crates/catalog_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the catalog's core logic.
//! These traits form the boundary of the hexagonal architecture, so the same
//! catalog behavior can run against an in-memory map, a database table or a
//! remote API without touching callers.

use crate::domain::{
    AdDraft, AdPatch, Advertisement, Category, CategoryPatch, IntegrityReport,
    MarketingContent, MarketingContentRequest, Tool, ToolAdvice, ToolAdviceRequest, ToolDraft,
    ToolPatch,
};
use async_trait::async_trait;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., database, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Version conflict on {id}: expected {expected}, found {actual}")]
    Conflict {
        id: String,
        expected: u64,
        actual: u64,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
    #[error("Unauthorized")]
    Unauthorized,
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Raw string storage keyed by string. Implementations must make
/// `write_batch` all-or-nothing.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> PortResult<Option<String>>;

    async fn set(&self, key: &str, value: String) -> PortResult<()>;

    async fn remove(&self, key: &str) -> PortResult<()>;

    /// Writes every entry, or none of them.
    async fn write_batch(&self, entries: Vec<(String, String)>) -> PortResult<()>;
}

/// The catalog repository: tools, categories and advertisements.
///
/// `update_*` takes an optional expected version; a stale version is rejected
/// with `PortError::Conflict` instead of overwriting a concurrent edit.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    // --- Tools ---
    async fn fetch_tools(&self) -> PortResult<Vec<Tool>>;

    async fn add_tool(&self, draft: ToolDraft) -> PortResult<Tool>;

    async fn update_tool(
        &self,
        id: &str,
        patch: ToolPatch,
        if_version: Option<u64>,
    ) -> PortResult<Tool>;

    async fn delete_tool(&self, id: &str) -> PortResult<()>;

    // --- Categories ---
    async fn fetch_categories(&self) -> PortResult<Vec<Category>>;

    async fn add_category(&self, name: &str) -> PortResult<Category>;

    async fn update_category(
        &self,
        id: &str,
        patch: CategoryPatch,
        if_version: Option<u64>,
    ) -> PortResult<Category>;

    /// Deletes the category and moves its tools to `UNCATEGORIZED` in one write.
    async fn delete_category(&self, id: &str) -> PortResult<()>;

    // --- Advertisements ---
    async fn fetch_ads(&self) -> PortResult<Vec<Advertisement>>;

    async fn add_ad(&self, draft: AdDraft) -> PortResult<Advertisement>;

    async fn update_ad(
        &self,
        id: &str,
        patch: AdPatch,
        if_version: Option<u64>,
    ) -> PortResult<Advertisement>;

    async fn delete_ad(&self, id: &str) -> PortResult<()>;

    // --- Consistency ---
    async fn check_integrity(&self) -> PortResult<IntegrityReport>;
}

#[async_trait]
pub trait TextGenerationService: Send + Sync {
    /// Generates a platform-specific marketing post.
    async fn generate_marketing_content(
        &self,
        request: &MarketingContentRequest,
    ) -> PortResult<MarketingContent>;

    /// Advises which tool categories and tools help reach a marketing goal.
    async fn get_tool_use_advice(&self, request: &ToolAdviceRequest) -> PortResult<ToolAdvice>;
}
