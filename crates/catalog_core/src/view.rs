//! The grouped catalog read model: tools per category, plus the visitor's
//! favorites merged in.

use crate::domain::{Category, Tool, UNCATEGORIZED};
use crate::favorites::{FavoriteKeying, FavoriteSet};
use std::collections::{HashMap, HashSet};

/// Display name for tools without an existing category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Visitor,
    /// Admins manage the catalog; they get no favorites section.
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCard {
    pub tool: Tool,
    pub category_name: String,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    pub category_id: String,
    pub category_name: String,
    pub tools: Vec<ToolCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogView {
    pub favorites: Vec<ToolCard>,
    pub sections: Vec<CategorySection>,
}

/// Builds the view. Sections are sorted by category name and empty ones are
/// dropped; tools keep their stored order. Orphaned tools are collected into a
/// trailing "Uncategorized" section.
pub fn build_catalog_view(
    tools: &[Tool],
    categories: &[Category],
    favorites: &FavoriteSet,
    keying: FavoriteKeying,
    audience: Audience,
) -> CatalogView {
    let mut names: HashMap<&str, &str> = HashMap::new();
    for c in categories {
        names.entry(c.id.as_str()).or_insert(c.name.as_str());
    }

    let cards: Vec<ToolCard> = tools
        .iter()
        .map(|tool| ToolCard {
            tool: tool.clone(),
            category_name: names
                .get(tool.category.as_str())
                .copied()
                .unwrap_or(UNCATEGORIZED_LABEL)
                .to_string(),
            is_favorite: favorites.contains(keying.key_for(tool)),
        })
        .collect();

    let favorite_cards = match audience {
        Audience::Visitor => cards.iter().filter(|c| c.is_favorite).cloned().collect(),
        Audience::Admin => Vec::new(),
    };

    let mut sections: Vec<CategorySection> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for category in categories {
        // Duplicate slugs render once.
        if !seen.insert(category.id.as_str()) {
            continue;
        }
        let members: Vec<ToolCard> = cards
            .iter()
            .filter(|c| c.tool.category == category.id)
            .cloned()
            .collect();
        if !members.is_empty() {
            sections.push(CategorySection {
                category_id: category.id.clone(),
                category_name: category.name.clone(),
                tools: members,
            });
        }
    }
    sections.sort_by_key(|s| s.category_name.to_lowercase());

    let orphans: Vec<ToolCard> = cards
        .into_iter()
        .filter(|c| !names.contains_key(c.tool.category.as_str()))
        .collect();
    if !orphans.is_empty() {
        sections.push(CategorySection {
            category_id: UNCATEGORIZED.to_string(),
            category_name: UNCATEGORIZED_LABEL.to_string(),
            tools: orphans,
        });
    }

    CatalogView {
        favorites: favorite_cards,
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IconName;

    fn tool(id: &str, name: &str, category: &str) -> Tool {
        Tool {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            link: String::new(),
            icon_name: IconName::Hash,
            category: category.to_string(),
            version: 1,
        }
    }

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            version: 1,
        }
    }

    fn favorites(keys: &[&str]) -> FavoriteSet {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn sections_are_sorted_by_name_and_skip_empty_categories() {
        let tools = vec![tool("1", "Buffer", "sched"), tool("2", "Canva", "create")];
        let categories = vec![
            category("sched", "Scheduling"),
            category("empty", "Archive"),
            category("create", "creation"),
        ];

        let view = build_catalog_view(
            &tools,
            &categories,
            &FavoriteSet::new(),
            FavoriteKeying::ByName,
            Audience::Visitor,
        );

        let names: Vec<&str> = view.sections.iter().map(|s| s.category_name.as_str()).collect();
        assert_eq!(names, vec!["creation", "Scheduling"]);
        assert!(view.favorites.is_empty());
    }

    #[test]
    fn orphans_land_in_trailing_uncategorized_section() {
        let tools = vec![
            tool("1", "Buffer", UNCATEGORIZED),
            tool("2", "Canva", "ghost"),
            tool("3", "Later", "sched"),
        ];
        let categories = vec![category("sched", "Scheduling")];

        let view = build_catalog_view(
            &tools,
            &categories,
            &FavoriteSet::new(),
            FavoriteKeying::ById,
            Audience::Visitor,
        );

        let last = view.sections.last().unwrap();
        assert_eq!(last.category_id, UNCATEGORIZED);
        assert_eq!(last.tools.len(), 2);
        assert!(last.tools.iter().all(|c| c.category_name == UNCATEGORIZED_LABEL));
    }

    #[test]
    fn favorites_keyed_by_name_match_every_tool_with_that_name() {
        let tools = vec![tool("1", "Gemini", "ai"), tool("2", "Gemini", "ai")];
        let categories = vec![category("ai", "AI")];

        let by_name = build_catalog_view(
            &tools,
            &categories,
            &favorites(&["Gemini"]),
            FavoriteKeying::ByName,
            Audience::Visitor,
        );
        assert_eq!(by_name.favorites.len(), 2);

        let by_id = build_catalog_view(
            &tools,
            &categories,
            &favorites(&["2"]),
            FavoriteKeying::ById,
            Audience::Visitor,
        );
        assert_eq!(by_id.favorites.len(), 1);
        assert_eq!(by_id.favorites[0].tool.id, "2");
        assert!(!by_id.sections[0].tools[0].is_favorite);
        assert!(by_id.sections[0].tools[1].is_favorite);
    }

    #[test]
    fn admin_view_has_no_favorites_section() {
        let tools = vec![tool("1", "Canva", "create")];
        let categories = vec![category("create", "Creation")];

        let view = build_catalog_view(
            &tools,
            &categories,
            &favorites(&["Canva"]),
            FavoriteKeying::ByName,
            Audience::Admin,
        );

        assert!(view.favorites.is_empty());
        assert!(view.sections[0].tools[0].is_favorite);
    }

    #[test]
    fn duplicate_category_slugs_render_one_section() {
        let tools = vec![tool("1", "Canva", "paid-ads")];
        let categories = vec![category("paid-ads", "Paid Ads"), category("paid-ads", "paid ads")];

        let view = build_catalog_view(
            &tools,
            &categories,
            &FavoriteSet::new(),
            FavoriteKeying::ByName,
            Audience::Visitor,
        );

        assert_eq!(view.sections.len(), 1);
        assert_eq!(view.sections[0].category_name, "Paid Ads");
    }
}
