// src/application/ports/util.rs

/// Produces the URL-safe base for a talent slug from its display name.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
