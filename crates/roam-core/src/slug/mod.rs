//! Detail-page slugs.
//!
//! Detail paths look like `/{kind}/{slug}-{fragment}`, where the slug is
//! derived from the listing name and location and the fragment is the first
//! few characters of the listing id. [`extract_id_from_slug`] recovers the
//! fragment from a path segment on the way back in.

mod extract;

pub use extract::extract_id_from_slug;

use crate::catalog::ListingKind;
use crate::config::{default_fragment_len, default_max_len, SlugConfig};
use crate::ids::prefix_chars;

/// Build a URL-safe slug from a name and optional location.
///
/// Lowercases, drops everything but ASCII word characters, whitespace and
/// hyphens, turns whitespace runs into a hyphen, collapses hyphen runs and
/// truncates to 100 characters. Never fails; input with nothing sluggable in
/// it gives an empty string.
pub fn generate_slug(name: &str, location: Option<&str>) -> String {
    slugify(name, location, default_max_len())
}

/// Build `/{kind}/{slug}-{first 8 chars of id}`.
///
/// Ids shorter than 8 characters are appended whole.
pub fn create_detail_path(kind: &str, id: &str, name: &str, location: Option<&str>) -> String {
    SlugCodec::default().detail_path(kind, id, name, location)
}

/// [`create_detail_path`] for a typed listing kind.
pub fn detail_path_for(kind: ListingKind, id: &str, name: &str, location: Option<&str>) -> String {
    create_detail_path(kind.as_str(), id, name, location)
}

/// Slug generation with configurable limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugCodec {
    max_len: usize,
    fragment_len: usize,
}

impl Default for SlugCodec {
    fn default() -> Self {
        Self {
            max_len: default_max_len(),
            fragment_len: default_fragment_len(),
        }
    }
}

impl SlugCodec {
    pub fn new(config: &SlugConfig) -> Self {
        Self {
            max_len: config.max_len,
            fragment_len: config.fragment_len,
        }
    }

    pub fn slug(&self, name: &str, location: Option<&str>) -> String {
        slugify(name, location, self.max_len)
    }

    pub fn detail_path(&self, kind: &str, id: &str, name: &str, location: Option<&str>) -> String {
        format!(
            "/{}/{}-{}",
            kind,
            self.slug(name, location),
            prefix_chars(id, self.fragment_len)
        )
    }

    /// Best-effort id recovery; see [`extract_id_from_slug`].
    pub fn extract(&self, slug_with_id: &str) -> String {
        extract_id_from_slug(slug_with_id)
    }
}

fn slugify(name: &str, location: Option<&str>, max_len: usize) -> String {
    let text = match location {
        Some(location) if !location.is_empty() => format!("{}-{}", name, location),
        _ => name.to_string(),
    };
    let lowered = text.to_lowercase();

    let mut slug = String::with_capacity(lowered.len());
    for c in lowered.trim().chars() {
        if c.is_whitespace() || c == '-' {
            if !slug.ends_with('-') {
                slug.push('-');
            }
        } else if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c);
        }
    }

    // only ASCII remains, so byte and char lengths agree
    slug.truncate(max_len);
    slug
}
