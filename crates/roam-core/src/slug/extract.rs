//! Id recovery from detail-path segments.

use tracing::trace;

use crate::ids::{is_hex, is_uuid};

/// Shortest trailing hex segment accepted as an id fragment.
const MIN_FRAGMENT_LEN: usize = 6;

/// Length of the hex run searched for when no segment qualifies.
const HEX_RUN_LEN: usize = 8;

/// Recover a listing id (or id fragment) from a path segment.
///
/// Full UUIDs pass through unchanged. Otherwise, in order:
///
/// 1. the last hyphen-separated segment that is hex and at least 6 long
/// 2. the first run of 8 hex characters anywhere
/// 3. whatever follows the last hyphen
/// 4. the whole cleaned input
///
/// This is a heuristic: a name containing a hex-looking word (`"decade"`,
/// `"facade"`) can shadow the real fragment. Callers must still check the
/// result resolves to a listing.
pub fn extract_id_from_slug(slug_with_id: &str) -> String {
    if slug_with_id.is_empty() {
        return String::new();
    }

    if is_uuid(slug_with_id) {
        return slug_with_id.to_string();
    }

    let cleaned = slug_with_id
        .split('-')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if cleaned.is_empty() {
        return String::new();
    }

    if let Some(segment) = cleaned
        .rsplit('-')
        .find(|segment| segment.len() >= MIN_FRAGMENT_LEN && is_hex(segment))
    {
        return segment.to_string();
    }

    if let Some(run) = first_hex_run(&cleaned, HEX_RUN_LEN) {
        trace!(slug = slug_with_id, run, "id recovered from embedded hex run");
        return run.to_string();
    }

    match cleaned.rsplit_once('-') {
        Some((_, tail)) => tail.to_string(),
        None => cleaned,
    }
}

/// First run of `len` consecutive ASCII hex digits.
fn first_hex_run(s: &str, len: usize) -> Option<&str> {
    let mut run = 0;
    for (idx, byte) in s.bytes().enumerate() {
        if byte.is_ascii_hexdigit() {
            run += 1;
            if run == len {
                let start = idx + 1 - len;
                return Some(&s[start..=idx]);
            }
        } else {
            run = 0;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(extract_id_from_slug(""), "");
        assert_eq!(extract_id_from_slug("---"), "");
    }

    #[test]
    fn test_uuid_passthrough() {
        let uuid = "550e8400-e29b-41d4-a716-446655440000";
        assert_eq!(extract_id_from_slug(uuid), uuid);

        let upper = "550E8400-E29B-41D4-A716-446655440000";
        assert_eq!(extract_id_from_slug(upper), upper);
    }

    #[test]
    fn test_trailing_fragment() {
        assert_eq!(extract_id_from_slug("ocean-view-mombasa-abcdef12"), "abcdef12");
        assert_eq!(extract_id_from_slug("ocean-view-mombasa-ABCDEF12"), "ABCDEF12");
        assert_eq!(extract_id_from_slug("--ocean--view-abcdef12--"), "abcdef12");
    }

    #[test]
    fn test_short_hex_segment_skipped() {
        // "cafe" is hex but too short; "beef42" qualifies
        assert_eq!(extract_id_from_slug("beef42-cafe"), "beef42");
    }

    #[test]
    fn test_hex_word_in_name_shadows() {
        // only the last qualifying segment wins, even if it is part of the name
        assert_eq!(extract_id_from_slug("the-decade-lodge-xyz"), "decade");
    }

    #[test]
    fn test_embedded_hex_run() {
        assert_eq!(extract_id_from_slug("lodge-xx12345678yy"), "12345678");
    }

    #[test]
    fn test_last_segment_fallback() {
        assert_eq!(extract_id_from_slug("jazz-night-abc"), "abc");
        assert_eq!(extract_id_from_slug("-jazz-night-"), "night");
    }

    #[test]
    fn test_no_hyphen_fallback() {
        assert_eq!(extract_id_from_slug("lodge"), "lodge");
        assert_eq!(extract_id_from_slug("12ab"), "12ab");
    }

    #[test]
    fn test_first_hex_run() {
        assert_eq!(first_hex_run("zz0123456789", 8), Some("01234567"));
        assert_eq!(first_hex_run("0123456", 8), None);
        assert_eq!(first_hex_run("ééabcdef01", 8), Some("abcdef01"));
    }
}
