//! crates/catalog_core/src/domain.rs
//!
//! Defines the pure, core data structures for the catalog.
//! The persisted JSON shapes live in `records`; these structs are what the
//! rest of the application works with.

use crate::ports::PortError;
use std::fmt;
use std::str::FromStr;

/// The fallback category id assigned to tools whose category was deleted.
pub const UNCATEGORIZED: &str = "uncategorized";

//=========================================================================================
// Icons
//=========================================================================================

/// The closed set of icons a tool can be displayed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconName {
    ImageIcon,
    #[default]
    PenSquare,
    BotMessageSquare,
    TrendingUp,
    Hash,
    Mic,
    CalendarClock,
    Video,
}

impl IconName {
    pub const ALL: [IconName; 8] = [
        IconName::ImageIcon,
        IconName::PenSquare,
        IconName::BotMessageSquare,
        IconName::TrendingUp,
        IconName::Hash,
        IconName::Mic,
        IconName::CalendarClock,
        IconName::Video,
    ];

    /// The identifier stored in the `iconName` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::ImageIcon => "ImageIcon",
            IconName::PenSquare => "PenSquare",
            IconName::BotMessageSquare => "BotMessageSquare",
            IconName::TrendingUp => "TrendingUp",
            IconName::Hash => "Hash",
            IconName::Mic => "Mic",
            IconName::CalendarClock => "CalendarClock",
            IconName::Video => "Video",
        }
    }

    /// The renderable icon handle (an icon-set glyph name) for this icon.
    pub fn handle(&self) -> &'static str {
        match self {
            IconName::ImageIcon => "image",
            IconName::PenSquare => "pen-square",
            IconName::BotMessageSquare => "bot-message-square",
            IconName::TrendingUp => "trending-up",
            IconName::Hash => "hash",
            IconName::Mic => "mic",
            IconName::CalendarClock => "calendar-clock",
            IconName::Video => "video",
        }
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconName {
    type Err = PortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconName::ALL
            .iter()
            .copied()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| PortError::InvalidInput(format!("Unknown icon name '{}'", s)))
    }
}

//=========================================================================================
// Catalog Entities
//=========================================================================================

/// A third-party marketing tool listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub description: String,
    pub link: String,
    pub icon_name: IconName,
    /// Id of the owning `Category`, or `UNCATEGORIZED`.
    pub category: String,
    pub version: u64,
}

impl Tool {
    /// Icon handle resolved from `icon_name`. Never persisted.
    pub fn icon(&self) -> &'static str {
        self.icon_name.handle()
    }
}

/// A grouping of tools. The id is the slug of the name at creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub version: u64,
}

/// A promotional ad card. Unrelated to tools and categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advertisement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub image_url: String,
    pub version: u64,
}

//=========================================================================================
// Drafts (creation input) and Patches (partial updates)
//=========================================================================================

/// Everything needed to create a tool; the id is assigned by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDraft {
    pub name: String,
    pub description: String,
    pub link: String,
    pub icon_name: IconName,
    pub category: String,
}

/// A partial tool update. `None` fields keep their previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub icon_name: Option<IconName>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdDraft {
    pub title: String,
    pub description: String,
    pub link: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image_url: Option<String>,
}

impl AdPatch {
    pub fn apply_to(self, ad: &mut Advertisement) {
        if let Some(title) = self.title {
            ad.title = title;
        }
        if let Some(description) = self.description {
            ad.description = description;
        }
        if let Some(link) = self.link {
            ad.link = link;
        }
        if let Some(image_url) = self.image_url {
            ad.image_url = image_url;
        }
    }
}

//=========================================================================================
// Integrity Reporting
//=========================================================================================

/// A tool whose category id matches neither an existing category nor the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingTool {
    pub tool_id: String,
    pub tool_name: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    pub dangling: Vec<DanglingTool>,
}

impl IntegrityReport {
    pub fn is_consistent(&self) -> bool {
        self.dangling.is_empty()
    }
}

//=========================================================================================
// Text Generation Contract
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketingContentRequest {
    /// e.g. "Instagram", "LinkedIn".
    pub platform: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketingContent {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolAdviceRequest {
    pub goal: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolAdvice {
    pub advice: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_names_parse_back_from_their_identifier() {
        for icon in IconName::ALL {
            assert_eq!(icon.as_str().parse::<IconName>().unwrap(), icon);
        }
    }

    #[test]
    fn unknown_icon_name_is_rejected() {
        let err = "Sparkles".parse::<IconName>().unwrap_err();
        assert!(matches!(err, PortError::InvalidInput(_)));
    }
}
