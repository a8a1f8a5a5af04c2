//! Identifier generation for catalog entities.

use chrono::Utc;
use uuid::Uuid;

const SUFFIX_LEN: usize = 9;

/// `<prefix>-<unix millis>-<9 random base-16 chars>`, e.g. `tool-1718000000000-3f9a0c1b2`.
pub fn generate_id(prefix: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{}-{}-{}",
        prefix,
        Utc::now().timestamp_millis(),
        &suffix[..SUFFIX_LEN]
    )
}

/// Lowercases `name` and replaces every run of whitespace with a single `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}
