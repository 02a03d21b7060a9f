//! Common utility functions

use uuid::Uuid;

/// Generate a new UUID v4
pub fn generate_id() -> Uuid {
    Uuid::new_v4()
}

/// Generate a URL-safe slug from a title
pub fn generate_slug(input: &str) -> String {
    slug::slugify(input)
}

/// Generate a slug with a numeric suffix, for resolving slug collisions.
///
/// `unique_slug("My Post", 0)` returns `my-post`; subsequent attempts
/// return `my-post-1`, `my-post-2`, ...
pub fn unique_slug(input: &str, attempt: u32) -> String {
    let base = generate_slug(input);
    if attempt == 0 {
        base
    } else {
        format!("{}-{}", base, attempt)
    }
}

/// Mask sensitive data for logging
pub fn mask_sensitive(data: &str) -> String {
    if data.len() <= 8 {
        "***".to_string()
    } else {
        format!("{}***{}", &data[..4], &data[data.len() - 4..])
    }
}
