//! crates/catalog_core/src/favorites.rs
//!
//! Per-profile favorite tools. Independent of the catalog: the set only holds
//! tool keys and is merged into the catalog view at read time.

use crate::domain::Tool;
use crate::ports::PortError;
use crate::store::JsonStore;
use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

pub const FAVORITES_KEY: &str = "favorites";

pub type FavoriteSet = BTreeSet<String>;

/// Which tool field identifies a favorite.
///
/// Names are not unique, so `ByName` makes two tools sharing a name share
/// their favorite status. `ById` does not, but loses favorites stored by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FavoriteKeying {
    #[default]
    ByName,
    ById,
}

impl FavoriteKeying {
    pub fn key_for<'a>(&self, tool: &'a Tool) -> &'a str {
        match self {
            FavoriteKeying::ByName => &tool.name,
            FavoriteKeying::ById => &tool.id,
        }
    }
}

impl FromStr for FavoriteKeying {
    type Err = PortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(FavoriteKeying::ByName),
            "id" => Ok(FavoriteKeying::ById),
            other => Err(PortError::InvalidInput(format!(
                "Favorites key must be 'name' or 'id', got '{}'",
                other
            ))),
        }
    }
}

/// Returns a copy of `current` with `key` removed if present, added otherwise.
pub fn toggle(key: &str, current: &FavoriteSet) -> FavoriteSet {
    let mut next = current.clone();
    if !next.remove(key) {
        next.insert(key.to_string());
    }
    next
}

/// Hands out per-profile trackers. Every tracker from one book shares a
/// write gate, so toggles never interleave their read-modify-write cycles.
#[derive(Clone)]
pub struct FavoritesBook {
    store: JsonStore,
    write_gate: Arc<Mutex<()>>,
}

impl FavoritesBook {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store,
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    /// A tracker whose set lives under `favorites:<profile>`.
    pub fn for_profile(&self, profile: &str) -> FavoritesTracker {
        FavoritesTracker {
            store: self.store.clone(),
            key: format!("{}:{}", FAVORITES_KEY, profile),
            write_gate: self.write_gate.clone(),
        }
    }
}

/// Loads and updates one profile's favorite set.
#[derive(Clone)]
pub struct FavoritesTracker {
    store: JsonStore,
    key: String,
    write_gate: Arc<Mutex<()>>,
}

impl FavoritesTracker {
    /// The stored set, or an empty one when absent or unreadable.
    pub async fn load(&self) -> FavoriteSet {
        self.store
            .read_optional::<Vec<String>>(&self.key)
            .await
            .map(|keys| keys.into_iter().collect())
            .unwrap_or_default()
    }

    /// Flips `key` in the stored set, persists it and returns the new set.
    pub async fn toggle(&self, key: &str) -> FavoriteSet {
        let _gate = self.write_gate.lock().await;
        let next = toggle(key, &self.load().await);
        self.save(&next).await;
        debug!("Toggled favorite \"{}\" under {}", key, self.key);
        next
    }

    async fn save(&self, favorites: &FavoriteSet) {
        self.store.write(&self.key, favorites).await;
    }
}
