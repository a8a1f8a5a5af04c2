pub mod auth;
pub mod catalog;
pub mod domain;
pub mod favorites;
pub mod ids;
pub mod ports;
pub mod records;
pub mod seed;
pub mod store;
pub mod view;

pub use auth::{AdminCredentials, AdminSession};
pub use catalog::{LatencyProfile, LocalCatalog};
pub use domain::{
    AdDraft, AdPatch, Advertisement, Category, CategoryPatch, DanglingTool, IconName,
    IntegrityReport, MarketingContent, MarketingContentRequest, Tool, ToolAdvice,
    ToolAdviceRequest, ToolDraft, ToolPatch, UNCATEGORIZED,
};
pub use favorites::{FavoriteKeying, FavoriteSet, FavoritesBook, FavoritesTracker};
pub use ports::{CatalogRepository, KeyValueStore, PortError, PortResult, TextGenerationService};
pub use store::{JsonStore, MemoryStore};
pub use view::{build_catalog_view, Audience, CatalogView};
