//! Newtype IDs for type-safe identifiers.
//!
//! Listing and booking ids are opaque strings handed out by the backend
//! (usually UUIDs). Wrapping them keeps a booking id from being routed as a
//! listing id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// An opaque identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Leading `len` characters of the id, or the whole id if shorter.
            pub fn short(&self, len: usize) -> &str {
                prefix_chars(&self.0, len)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ListingId);
define_id!(BookingId);

/// Leading `len` characters of `s`, never splitting a code point.
pub fn prefix_chars(s: &str, len: usize) -> &str {
    match s.char_indices().nth(len) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Group lengths of the canonical hyphenated UUID form.
const UUID_GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

/// Check whether `s` is exactly a canonical `8-4-4-4-12` UUID (any case).
pub fn is_uuid(s: &str) -> bool {
    let mut groups = s.split('-');
    for expected in UUID_GROUPS {
        match groups.next() {
            Some(group) if group.len() == expected && is_hex(group) => {}
            _ => return false,
        }
    }
    groups.next().is_none()
}

/// Non-empty and made only of ASCII hex digits.
pub(crate) fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}
