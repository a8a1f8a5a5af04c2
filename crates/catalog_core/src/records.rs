//! crates/catalog_core/src/records.rs
//!
//! The persisted JSON shapes of the catalog collections and their mapping to
//! the domain structs. Field names are camelCase to keep the stored layout
//! stable across versions.

use crate::domain::{Advertisement, Category, IconName, Tool, ToolPatch};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const TOOLS_KEY: &str = "tools";
pub const CATEGORIES_KEY: &str = "categories";
pub const ADS_KEY: &str = "ads";

fn first_version() -> u64 {
    1
}

/// A record stored as one element of a collection under `KEY`.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const KEY: &'static str;
    /// Human-readable entity name used in error messages.
    const LABEL: &'static str;

    fn id(&self) -> &str;
    fn version(&self) -> u64;
    fn set_version(&mut self, version: u64);
    /// The built-in dataset seeded into an empty store.
    fn defaults() -> Vec<Self>;
}

//=========================================================================================
// Tool
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub link: String,
    pub icon_name: String,
    pub category: String,
    #[serde(default = "first_version")]
    pub version: u64,
}

impl ToolRecord {
    pub fn to_domain(self) -> Tool {
        let icon_name = self.icon_name.parse::<IconName>().unwrap_or_else(|_| {
            warn!(
                "Tool {} has unknown icon \"{}\", using the default icon",
                self.id, self.icon_name
            );
            IconName::default()
        });
        Tool {
            id: self.id,
            name: self.name,
            description: self.description,
            link: self.link,
            icon_name,
            category: self.category,
            version: self.version,
        }
    }

    pub fn from_domain(tool: &Tool) -> Self {
        Self {
            id: tool.id.clone(),
            name: tool.name.clone(),
            description: tool.description.clone(),
            link: tool.link.clone(),
            icon_name: tool.icon_name.as_str().to_string(),
            category: tool.category.clone(),
            version: tool.version,
        }
    }

    /// Overwrites the fields `patch` provides. Omitted fields keep their stored
    /// text, including icon names this build does not know.
    pub fn apply(&mut self, patch: ToolPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(link) = patch.link {
            self.link = link;
        }
        if let Some(icon_name) = patch.icon_name {
            self.icon_name = icon_name.as_str().to_string();
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }
}

impl Record for ToolRecord {
    const KEY: &'static str = TOOLS_KEY;
    const LABEL: &'static str = "Tool";

    fn id(&self) -> &str {
        &self.id
    }
    fn version(&self) -> u64 {
        self.version
    }
    fn set_version(&mut self, version: u64) {
        self.version = version;
    }
    fn defaults() -> Vec<Self> {
        crate::seed::default_tools()
    }
}

//=========================================================================================
// Category
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    #[serde(default = "first_version")]
    pub version: u64,
}

impl CategoryRecord {
    pub fn to_domain(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
            version: self.version,
        }
    }

    pub fn from_domain(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            version: category.version,
        }
    }
}

impl Record for CategoryRecord {
    const KEY: &'static str = CATEGORIES_KEY;
    const LABEL: &'static str = "Category";

    fn id(&self) -> &str {
        &self.id
    }
    fn version(&self) -> u64 {
        self.version
    }
    fn set_version(&mut self, version: u64) {
        self.version = version;
    }
    fn defaults() -> Vec<Self> {
        crate::seed::default_categories()
    }
}

//=========================================================================================
// Advertisement
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub image_url: String,
    #[serde(default = "first_version")]
    pub version: u64,
}

impl AdRecord {
    pub fn to_domain(self) -> Advertisement {
        Advertisement {
            id: self.id,
            title: self.title,
            description: self.description,
            link: self.link,
            image_url: self.image_url,
            version: self.version,
        }
    }

    pub fn from_domain(ad: &Advertisement) -> Self {
        Self {
            id: ad.id.clone(),
            title: ad.title.clone(),
            description: ad.description.clone(),
            link: ad.link.clone(),
            image_url: ad.image_url.clone(),
            version: ad.version,
        }
    }
}

impl Record for AdRecord {
    const KEY: &'static str = ADS_KEY;
    const LABEL: &'static str = "Advertisement";

    fn id(&self) -> &str {
        &self.id
    }
    fn version(&self) -> u64 {
        self.version
    }
    fn set_version(&mut self, version: u64) {
        self.version = version;
    }
    fn defaults() -> Vec<Self> {
        crate::seed::default_ads()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_tool_without_version_reads_as_first_version() {
        let raw = r#"{"id":"1","name":"Canva","description":"d","link":"https://www.canva.com/","iconName":"ImageIcon","category":"creation"}"#;
        let record: ToolRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.version, 1);
    }

    #[test]
    fn unknown_stored_icon_falls_back_to_default() {
        let record = ToolRecord {
            id: "x".to_string(),
            name: "X".to_string(),
            description: String::new(),
            link: String::new(),
            icon_name: "Sparkles".to_string(),
            category: "creation".to_string(),
            version: 1,
        };
        assert_eq!(record.to_domain().icon_name, IconName::PenSquare);
    }

    #[test]
    fn ad_record_uses_camel_case_fields() {
        let ad = AdRecord {
            id: "ad-1".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            link: "#".to_string(),
            image_url: "https://placehold.co/600x400.png".to_string(),
            version: 2,
        };
        let value = serde_json::to_value(&ad).unwrap();
        assert_eq!(value["imageUrl"], "https://placehold.co/600x400.png");
        assert!(value.get("image_url").is_none());
    }
}
