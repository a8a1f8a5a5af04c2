//! crates/catalog_core/src/catalog.rs
//!
//! `LocalCatalog` implements the `CatalogRepository` port on top of a
//! `JsonStore`. Each collection is stored as one ordered JSON array; every
//! mutation is a read-modify-write of that array, serialized through a write
//! gate so concurrent callers in this process cannot lose each other's updates.

use crate::domain::{
    AdDraft, AdPatch, Advertisement, Category, CategoryPatch, DanglingTool, IntegrityReport, Tool,
    ToolDraft, ToolPatch, UNCATEGORIZED,
};
use crate::ids::{generate_id, slugify};
use crate::ports::{CatalogRepository, PortError, PortResult};
use crate::records::{
    AdRecord, CategoryRecord, Record, ToolRecord, CATEGORIES_KEY, TOOLS_KEY,
};
use crate::store::{Batch, JsonStore};
use async_trait::async_trait;
use std::collections::HashSet;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

//=========================================================================================
// Simulated Latency
//=========================================================================================

/// Artificial delay applied before each operation on a collection. It keeps
/// callers' loading states meaningful while the backing store is local.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub tools: Duration,
    pub categories: Duration,
    pub ads: Duration,
}

impl LatencyProfile {
    pub fn simulated() -> Self {
        Self {
            tools: Duration::from_millis(500),
            categories: Duration::from_millis(200),
            ads: Duration::from_millis(300),
        }
    }

    pub fn none() -> Self {
        Self {
            tools: Duration::ZERO,
            categories: Duration::ZERO,
            ads: Duration::ZERO,
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::simulated()
    }
}

async fn delay(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

//=========================================================================================
// The Local Catalog
//=========================================================================================

pub struct LocalCatalog {
    store: JsonStore,
    latency: LatencyProfile,
    write_gate: Mutex<()>,
}

impl LocalCatalog {
    pub fn new(store: JsonStore, latency: LatencyProfile) -> Self {
        Self {
            store,
            latency,
            write_gate: Mutex::new(()),
        }
    }

    async fn load<R: Record>(&self) -> Vec<R> {
        self.store.read(R::KEY, R::defaults()).await
    }

    /// Appends `record` to its collection. Caller holds the write gate.
    async fn insert_locked<R: Record>(&self, record: R) -> R {
        let mut records = self.load::<R>().await;
        records.push(record.clone());
        self.store.write(R::KEY, &records).await;
        record
    }

    /// Finds `id`, checks the expected version, applies `apply` and bumps the
    /// version. Caller holds the write gate.
    async fn modify_locked<R, F>(&self, id: &str, if_version: Option<u64>, apply: F) -> PortResult<R>
    where
        R: Record,
        F: FnOnce(&mut R),
    {
        let mut records = self.load::<R>().await;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| PortError::NotFound(format!("{} {} not found", R::LABEL, id)))?;

        if let Some(expected) = if_version {
            if record.version() != expected {
                return Err(PortError::Conflict {
                    id: id.to_string(),
                    expected,
                    actual: record.version(),
                });
            }
        }

        apply(&mut *record);
        let next = record.version() + 1;
        record.set_version(next);
        let updated = record.clone();

        self.store.write(R::KEY, &records).await;
        Ok(updated)
    }

    /// Removes `id` from its collection. Returns whether anything was removed.
    async fn remove<R: Record>(&self, id: &str) -> bool {
        let _gate = self.write_gate.lock().await;
        let mut records = self.load::<R>().await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            debug!("{} {} already absent, nothing to delete", R::LABEL, id);
            return false;
        }
        self.store.write(R::KEY, &records).await;
        true
    }

    async fn ensure_category_exists(&self, category: &str) -> PortResult<()> {
        if category == UNCATEGORIZED {
            return Ok(());
        }
        let categories = self.load::<CategoryRecord>().await;
        if categories.iter().any(|c| c.id == category) {
            Ok(())
        } else {
            Err(PortError::InvalidInput(format!(
                "Category '{}' does not exist",
                category
            )))
        }
    }
}

fn require_text(field: &str, value: &str) -> PortResult<()> {
    if value.trim().is_empty() {
        return Err(PortError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(())
}

//=========================================================================================
// `CatalogRepository` Trait Implementation
//=========================================================================================

#[async_trait]
impl CatalogRepository for LocalCatalog {
    async fn fetch_tools(&self) -> PortResult<Vec<Tool>> {
        delay(self.latency.tools).await;
        let records = self.load::<ToolRecord>().await;
        Ok(records.into_iter().map(ToolRecord::to_domain).collect())
    }

    async fn add_tool(&self, draft: ToolDraft) -> PortResult<Tool> {
        require_text("Tool name", &draft.name)?;
        delay(self.latency.tools).await;

        let _gate = self.write_gate.lock().await;
        self.ensure_category_exists(&draft.category).await?;

        let tool = Tool {
            id: generate_id("tool"),
            name: draft.name,
            description: draft.description,
            link: draft.link,
            icon_name: draft.icon_name,
            category: draft.category,
            version: 1,
        };
        self.insert_locked(ToolRecord::from_domain(&tool)).await;
        info!("Added tool {} ({})", tool.id, tool.name);
        Ok(tool)
    }

    async fn update_tool(
        &self,
        id: &str,
        patch: ToolPatch,
        if_version: Option<u64>,
    ) -> PortResult<Tool> {
        if let Some(name) = &patch.name {
            require_text("Tool name", name)?;
        }
        delay(self.latency.tools).await;

        let _gate = self.write_gate.lock().await;
        if let Some(category) = &patch.category {
            self.ensure_category_exists(category).await?;
        }

        let record = self
            .modify_locked::<ToolRecord, _>(id, if_version, |record| record.apply(patch))
            .await?;
        Ok(record.to_domain())
    }

    async fn delete_tool(&self, id: &str) -> PortResult<()> {
        delay(self.latency.tools).await;
        if self.remove::<ToolRecord>(id).await {
            info!("Deleted tool {}", id);
        }
        Ok(())
    }

    async fn fetch_categories(&self) -> PortResult<Vec<Category>> {
        delay(self.latency.categories).await;
        let records = self.load::<CategoryRecord>().await;
        Ok(records.into_iter().map(CategoryRecord::to_domain).collect())
    }

    async fn add_category(&self, name: &str) -> PortResult<Category> {
        require_text("Category name", name)?;
        delay(self.latency.categories).await;

        let _gate = self.write_gate.lock().await;
        let id = slugify(name);
        let existing = self.load::<CategoryRecord>().await;
        if existing.iter().any(|c| c.id == id) {
            // Kept as-is: both categories share the slug and its tools.
            warn!("Category slug \"{}\" already exists; adding \"{}\" anyway", id, name);
        }

        let category = Category {
            id,
            name: name.to_string(),
            version: 1,
        };
        self.insert_locked(CategoryRecord::from_domain(&category)).await;
        info!("Added category {} ({})", category.id, category.name);
        Ok(category)
    }

    async fn update_category(
        &self,
        id: &str,
        patch: CategoryPatch,
        if_version: Option<u64>,
    ) -> PortResult<Category> {
        if let Some(name) = &patch.name {
            require_text("Category name", name)?;
        }
        delay(self.latency.categories).await;

        let _gate = self.write_gate.lock().await;
        let record = self
            .modify_locked::<CategoryRecord, _>(id, if_version, |record| {
                if let Some(name) = patch.name {
                    record.name = name;
                }
            })
            .await?;
        Ok(record.to_domain())
    }

    async fn delete_category(&self, id: &str) -> PortResult<()> {
        delay(self.latency.categories).await;

        let _gate = self.write_gate.lock().await;
        let mut categories = self.load::<CategoryRecord>().await;
        let before = categories.len();
        categories.retain(|c| c.id != id);
        let removed = before - categories.len();

        let mut tools = self.load::<ToolRecord>().await;
        let mut reassigned = 0;
        if id != UNCATEGORIZED {
            for tool in tools.iter_mut().filter(|t| t.category == id) {
                tool.category = UNCATEGORIZED.to_string();
                tool.version += 1;
                reassigned += 1;
            }
        }

        if removed == 0 && reassigned == 0 {
            debug!("Category {} already absent, nothing to delete", id);
            return Ok(());
        }

        self.store
            .commit(
                Batch::new()
                    .put(CATEGORIES_KEY, &categories)
                    .put(TOOLS_KEY, &tools),
            )
            .await;
        info!(
            "Deleted category {} and moved {} tool(s) to \"{}\"",
            id, reassigned, UNCATEGORIZED
        );
        Ok(())
    }

    async fn fetch_ads(&self) -> PortResult<Vec<Advertisement>> {
        delay(self.latency.ads).await;
        let records = self.load::<AdRecord>().await;
        Ok(records.into_iter().map(AdRecord::to_domain).collect())
    }

    async fn add_ad(&self, draft: AdDraft) -> PortResult<Advertisement> {
        require_text("Ad title", &draft.title)?;
        delay(self.latency.ads).await;

        let _gate = self.write_gate.lock().await;
        let ad = Advertisement {
            id: generate_id("ad"),
            title: draft.title,
            description: draft.description,
            link: draft.link,
            image_url: draft.image_url,
            version: 1,
        };
        self.insert_locked(AdRecord::from_domain(&ad)).await;
        info!("Added advertisement {} ({})", ad.id, ad.title);
        Ok(ad)
    }

    async fn update_ad(
        &self,
        id: &str,
        patch: AdPatch,
        if_version: Option<u64>,
    ) -> PortResult<Advertisement> {
        if let Some(title) = &patch.title {
            require_text("Ad title", title)?;
        }
        delay(self.latency.ads).await;

        let _gate = self.write_gate.lock().await;
        let record = self
            .modify_locked::<AdRecord, _>(id, if_version, |record| {
                let mut ad = record.clone().to_domain();
                patch.apply_to(&mut ad);
                *record = AdRecord::from_domain(&ad);
            })
            .await?;
        Ok(record.to_domain())
    }

    async fn delete_ad(&self, id: &str) -> PortResult<()> {
        delay(self.latency.ads).await;
        if self.remove::<AdRecord>(id).await {
            info!("Deleted advertisement {}", id);
        }
        Ok(())
    }

    async fn check_integrity(&self) -> PortResult<IntegrityReport> {
        let categories = self.load::<CategoryRecord>().await;
        let known: HashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();

        let dangling: Vec<DanglingTool> = self
            .load::<ToolRecord>()
            .await
            .into_iter()
            .filter(|t| t.category != UNCATEGORIZED && !known.contains(t.category.as_str()))
            .map(|t| DanglingTool {
                tool_id: t.id,
                tool_name: t.name,
                category: t.category,
            })
            .collect();

        if !dangling.is_empty() {
            warn!(
                "{} tool(s) reference categories that do not exist: {:?}",
                dangling.len(),
                dangling.iter().map(|d| &d.tool_id).collect::<Vec<_>>()
            );
        }
        Ok(IntegrityReport { dangling })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IconName;
    use crate::ports::KeyValueStore;
    use crate::records::ADS_KEY;
    use crate::store::MemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn setup_catalog() -> (Arc<MemoryStore>, LocalCatalog) {
        let backend = Arc::new(MemoryStore::new());
        let catalog = LocalCatalog::new(JsonStore::new(backend.clone()), LatencyProfile::none());
        (backend, catalog)
    }

    fn draft(name: &str, category: &str) -> ToolDraft {
        ToolDraft {
            name: name.to_string(),
            description: format!("{} description", name),
            link: "https://example.com/".to_string(),
            icon_name: IconName::TrendingUp,
            category: category.to_string(),
        }
    }

    /// Counts single-key and batch writes passing through to a `MemoryStore`.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        sets: AtomicUsize,
        batches: AtomicUsize,
    }

    #[async_trait]
    impl KeyValueStore for CountingStore {
        async fn get(&self, key: &str) -> PortResult<Option<String>> {
            self.inner.get(key).await
        }
        async fn set(&self, key: &str, value: String) -> PortResult<()> {
            self.sets.fetch_add(1, Ordering::SeqCst);
            self.inner.set(key, value).await
        }
        async fn remove(&self, key: &str) -> PortResult<()> {
            self.inner.remove(key).await
        }
        async fn write_batch(&self, entries: Vec<(String, String)>) -> PortResult<()> {
            self.batches.fetch_add(1, Ordering::SeqCst);
            self.inner.write_batch(entries).await
        }
    }

    #[tokio::test]
    async fn test_seeding_is_idempotent() {
        let (backend, catalog) = setup_catalog();

        let first = catalog.fetch_tools().await.unwrap();
        let snapshot = backend.raw(TOOLS_KEY).await.expect("tools seeded");
        let second = catalog.fetch_tools().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(
            snapshot,
            serde_json::to_string(&crate::seed::default_tools()).unwrap()
        );
    }

    #[tokio::test]
    async fn test_default_dataset_shape() {
        let (_, catalog) = setup_catalog();

        let tools = catalog.fetch_tools().await.unwrap();
        let categories = catalog.fetch_categories().await.unwrap();
        let ads = catalog.fetch_ads().await.unwrap();

        assert_eq!(tools.len(), 16);
        assert_eq!(categories.len(), 7);
        assert_eq!(ads.len(), 4);
        let grouped: HashSet<&str> = tools.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(grouped.len(), 7);
        assert_eq!(tools[0].icon(), "image");
    }

    #[tokio::test]
    async fn test_add_tool_round_trip() {
        let (_, catalog) = setup_catalog();
        let before = catalog.fetch_tools().await.unwrap();

        let created = catalog.add_tool(draft("Semrush", "trends")).await.unwrap();
        let after = catalog.fetch_tools().await.unwrap();

        assert_eq!(after.len(), before.len() + 1);
        assert!(before.iter().all(|t| t.id != created.id));
        let stored = after.iter().find(|t| t.id == created.id).unwrap();
        assert_eq!(stored, &created);
        assert_eq!(stored.name, "Semrush");
        assert_eq!(stored.description, "Semrush description");
        assert_eq!(stored.link, "https://example.com/");
        assert_eq!(stored.icon_name, IconName::TrendingUp);
        assert_eq!(stored.category, "trends");
        assert_eq!(stored.version, 1);
    }

    #[tokio::test]
    async fn test_add_tool_rejects_unknown_category() {
        let (_, catalog) = setup_catalog();

        let err = catalog.add_tool(draft("Semrush", "seo")).await.unwrap_err();
        assert!(matches!(err, PortError::InvalidInput(_)));
        assert_eq!(catalog.fetch_tools().await.unwrap().len(), 16);
    }

    #[tokio::test]
    async fn test_add_tool_accepts_sentinel_category() {
        let (_, catalog) = setup_catalog();

        let created = catalog
            .add_tool(draft("Loose", UNCATEGORIZED))
            .await
            .unwrap();
        assert_eq!(created.category, UNCATEGORIZED);
    }

    #[tokio::test]
    async fn test_partial_update_preserves_untouched_fields() {
        let (_, catalog) = setup_catalog();
        let original = catalog.fetch_tools().await.unwrap().remove(0);

        let patch = ToolPatch {
            name: Some("X".to_string()),
            ..Default::default()
        };
        let updated = catalog.update_tool(&original.id, patch, None).await.unwrap();

        assert_eq!(updated.name, "X");
        assert_eq!(updated.description, original.description);
        assert_eq!(updated.link, original.link);
        assert_eq!(updated.category, original.category);
        assert_eq!(updated.icon_name, original.icon_name);
        assert_eq!(updated.version, original.version + 1);

        let refetched = catalog.fetch_tools().await.unwrap().remove(0);
        assert_eq!(refetched, updated);
    }

    #[tokio::test]
    async fn test_update_keeps_unknown_stored_icon_name() {
        let (backend, catalog) = setup_catalog();
        let raw = r#"[{"id":"9","name":"Legacy","description":"d","link":"https://example.com/","iconName":"Sparkles","category":"trends","version":1}]"#;
        backend.set(TOOLS_KEY, raw.to_string()).await.unwrap();

        let patch = ToolPatch {
            description: Some("new".to_string()),
            ..Default::default()
        };
        let updated = catalog.update_tool("9", patch, None).await.unwrap();
        assert_eq!(updated.description, "new");
        assert_eq!(updated.icon_name, IconName::PenSquare);

        let stored = backend.raw(TOOLS_KEY).await.unwrap();
        assert!(stored.contains(r#""iconName":"Sparkles""#), "{}", stored);

        let patch = ToolPatch {
            icon_name: Some(IconName::Hash),
            ..Default::default()
        };
        catalog.update_tool("9", patch, None).await.unwrap();
        let stored = backend.raw(TOOLS_KEY).await.unwrap();
        assert!(stored.contains(r#""iconName":"Hash""#), "{}", stored);
    }

    #[tokio::test]
    async fn test_update_missing_tool_is_not_found() {
        let (_, catalog) = setup_catalog();

        let err = catalog
            .update_tool("missing", ToolPatch::default(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, PortError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_stale_version_is_rejected() {
        let (_, catalog) = setup_catalog();
        let patch = |name: &str| ToolPatch {
            name: Some(name.to_string()),
            ..Default::default()
        };

        catalog.update_tool("1", patch("First"), Some(1)).await.unwrap();
        let err = catalog
            .update_tool("1", patch("Second"), Some(1))
            .await
            .unwrap_err();

        match err {
            PortError::Conflict { expected, actual, .. } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 2);
            }
            other => panic!("expected conflict, got {:?}", other),
        }
        let tool = catalog.fetch_tools().await.unwrap().remove(0);
        assert_eq!(tool.name, "First");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (backend, catalog) = setup_catalog();
        catalog.fetch_tools().await.unwrap();
        let snapshot = backend.raw(TOOLS_KEY).await;

        catalog.delete_tool("does-not-exist").await.unwrap();
        assert_eq!(backend.raw(TOOLS_KEY).await, snapshot);

        catalog.delete_tool("1").await.unwrap();
        catalog.delete_tool("1").await.unwrap();
        let tools = catalog.fetch_tools().await.unwrap();
        assert_eq!(tools.len(), 15);
        assert!(tools.iter().all(|t| t.id != "1"));
    }

    #[tokio::test]
    async fn test_category_delete_cascades_to_tools() {
        let (_, catalog) = setup_catalog();
        let category = catalog.add_category("c1").await.unwrap();
        let t1 = catalog.add_tool(draft("t1", &category.id)).await.unwrap();

        catalog.delete_category(&category.id).await.unwrap();

        let categories = catalog.fetch_categories().await.unwrap();
        assert!(categories.iter().all(|c| c.id != "c1"));
        let tools = catalog.fetch_tools().await.unwrap();
        let moved = tools.iter().find(|t| t.id == t1.id).unwrap();
        assert_eq!(moved.category, UNCATEGORIZED);
        assert_eq!(moved.version, t1.version + 1);
        assert!(catalog.check_integrity().await.unwrap().is_consistent());
    }

    #[tokio::test]
    async fn test_category_cascade_is_a_single_batch_write() {
        let backend = Arc::new(CountingStore::default());
        let catalog = LocalCatalog::new(JsonStore::new(backend.clone()), LatencyProfile::none());
        catalog.fetch_tools().await.unwrap();
        catalog.fetch_categories().await.unwrap();
        let sets_before = backend.sets.load(Ordering::SeqCst);

        catalog.delete_category("video").await.unwrap();

        assert_eq!(backend.batches.load(Ordering::SeqCst), 1);
        assert_eq!(backend.sets.load(Ordering::SeqCst), sets_before);
        let tools = catalog.fetch_tools().await.unwrap();
        assert_eq!(
            tools.iter().filter(|t| t.category == UNCATEGORIZED).count(),
            2
        );
    }

    #[tokio::test]
    async fn test_deleting_absent_category_writes_nothing() {
        let backend = Arc::new(CountingStore::default());
        let catalog = LocalCatalog::new(JsonStore::new(backend.clone()), LatencyProfile::none());
        catalog.fetch_tools().await.unwrap();
        catalog.fetch_categories().await.unwrap();

        catalog.delete_category("nope").await.unwrap();

        assert_eq!(backend.batches.load(Ordering::SeqCst), 0);
        assert_eq!(catalog.fetch_categories().await.unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_rename_category_keeps_id() {
        let (_, catalog) = setup_catalog();

        let renamed = catalog
            .update_category(
                "video",
                CategoryPatch {
                    name: Some("Short-form Video".to_string()),
                },
                None,
            )
            .await
            .unwrap();

        assert_eq!(renamed.id, "video");
        assert_eq!(renamed.name, "Short-form Video");
    }

    #[tokio::test]
    async fn test_slug_collision_is_kept() {
        let (_, catalog) = setup_catalog();

        let first = catalog.add_category("Paid Ads").await.unwrap();
        let second = catalog.add_category("paid   ads").await.unwrap();

        assert_eq!(first.id, second.id);
        let categories = catalog.fetch_categories().await.unwrap();
        assert_eq!(categories.iter().filter(|c| c.id == "paid-ads").count(), 2);
    }

    #[tokio::test]
    async fn test_integrity_check_reports_dangling_tools() {
        let (backend, catalog) = setup_catalog();
        let mut tools = crate::seed::default_tools();
        tools[0].category = "ghost".to_string();
        backend
            .set(TOOLS_KEY, serde_json::to_string(&tools).unwrap())
            .await
            .unwrap();

        let report = catalog.check_integrity().await.unwrap();

        assert_eq!(report.dangling.len(), 1);
        assert_eq!(report.dangling[0].tool_id, "1");
        assert_eq!(report.dangling[0].category, "ghost");
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_not_lost() {
        let backend = Arc::new(MemoryStore::new());
        let latency = LatencyProfile {
            tools: Duration::from_millis(5),
            categories: Duration::from_millis(5),
            ads: Duration::from_millis(5),
        };
        let catalog = Arc::new(LocalCatalog::new(JsonStore::new(backend), latency));

        let (a, b) = tokio::join!(
            catalog.add_tool(draft("A", "trends")),
            catalog.add_tool(draft("B", "trends")),
        );
        a.unwrap();
        b.unwrap();

        assert_eq!(catalog.fetch_tools().await.unwrap().len(), 18);
    }

    #[tokio::test]
    async fn test_ad_crud() {
        let (backend, catalog) = setup_catalog();

        let ad = catalog
            .add_ad(AdDraft {
                title: "Spring Promo".to_string(),
                description: "Two months free".to_string(),
                link: "https://example.com/promo".to_string(),
                image_url: "https://placehold.co/600x400.png".to_string(),
            })
            .await
            .unwrap();
        assert!(ad.id.starts_with("ad-"));
        assert_eq!(catalog.fetch_ads().await.unwrap().len(), 5);

        let updated = catalog
            .update_ad(
                &ad.id,
                AdPatch {
                    description: Some("Three months free".to_string()),
                    ..Default::default()
                },
                Some(1),
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Spring Promo");
        assert_eq!(updated.description, "Three months free");

        catalog.delete_ad(&ad.id).await.unwrap();
        assert_eq!(catalog.fetch_ads().await.unwrap().len(), 4);
        assert!(backend.raw(ADS_KEY).await.is_some());
    }

    #[tokio::test]
    async fn test_detached_catalog_serves_defaults_without_persisting() {
        let catalog = LocalCatalog::new(JsonStore::detached(), LatencyProfile::none());

        catalog.delete_tool("1").await.unwrap();
        assert_eq!(catalog.fetch_tools().await.unwrap().len(), 16);
    }

    #[tokio::test]
    async fn test_example_scenario() {
        let (_, catalog) = setup_catalog();

        let tools = catalog.fetch_tools().await.unwrap();
        assert_eq!(tools.len(), 16);

        let paid = catalog.add_category("Paid Ads").await.unwrap();
        assert_eq!(paid.id, "paid-ads");
        assert_eq!(paid.name, "Paid Ads");

        let patch = ToolPatch {
            category: Some("paid-ads".to_string()),
            ..Default::default()
        };
        catalog.update_tool("1", patch, None).await.unwrap();

        let canva = catalog
            .fetch_tools()
            .await
            .unwrap()
            .into_iter()
            .find(|t| t.id == "1")
            .unwrap();
        assert_eq!(canva.name, "Canva");
        assert_eq!(canva.category, "paid-ads");
    }
}
