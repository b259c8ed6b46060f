// src/domain/slug.rs
//! URL identifiers derived from display names.

use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

pub const MAX_SLUG_LEN: usize = 100;

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Lower-cases, strips diacritics and collapses every run of characters
/// outside `[a-z0-9]` into a single hyphen. The result never starts or ends
/// with a hyphen before truncation to [`MAX_SLUG_LEN`] characters.
///
/// Input without any ASCII letter or digit produces an empty string.
pub fn generate_slug(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for c in lowered.trim().nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    // only ASCII survives the filter above, so byte and char counts agree
    slug.truncate(MAX_SLUG_LEN);
    slug
}

/// Returns `base_slug` (or the slug of `text` when no base is given) if it is
/// free, otherwise the first of `base-1`, `base-2`, ... that is not present in
/// `existing`.
pub fn generate_unique_slug<S: AsRef<str>>(
    text: &str,
    existing: &[S],
    base_slug: Option<&str>,
) -> String {
    let base = match base_slug {
        Some(base) if !base.is_empty() => base.to_owned(),
        _ => generate_slug(text),
    };

    let taken: HashSet<&str> = existing.iter().map(AsRef::as_ref).collect();
    if !taken.contains(base.as_str()) {
        return base;
    }

    let mut counter = 1u64;
    loop {
        let candidate = format!("{base}-{counter}");
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        counter += 1;
    }
}
