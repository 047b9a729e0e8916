//! Normalized identifier newtypes for catalog lookups.
//!
//! The storyteller service echoes location and character identifiers back as
//! free-form strings, with whatever casing and whitespace the model felt
//! like. Every lookup key is therefore case-insensitive and
//! whitespace-trimmed, and the only way to obtain a key is through
//! [`CharacterKey::parse`] / [`LocationKey::parse`], which apply that
//! normalization. The registry and spawn index key off these types, so the
//! two can never normalize differently.

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around a normalized identifier string.
macro_rules! define_key {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Normalize a raw identifier into a key.
            ///
            /// Trims surrounding whitespace and lowercases the remainder.
            /// Returns `None` when the input is empty after trimming, so an
            /// absent or blank identifier can never match a catalog entry.
            pub fn parse(raw: &str) -> Option<Self> {
                let normalized = raw.trim().to_lowercase();
                if normalized.is_empty() {
                    None
                } else {
                    Some(Self(normalized))
                }
            }

            /// View the normalized key as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_key! {
    /// Normalized identifier for a character in the world catalog.
    CharacterKey
}

define_key! {
    /// Normalized identifier for a location in the world catalog.
    LocationKey
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_lowercases() {
        let key = CharacterKey::parse("  LionGladiator ");
        assert_eq!(key.as_ref().map(CharacterKey::as_str), Some("liongladiator"));
    }

    #[test]
    fn parse_idempotent_on_normalized_input() {
        let first = LocationKey::parse("holyTree");
        let second = LocationKey::parse("holytree");
        assert_eq!(first, second);
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(CharacterKey::parse(""), None);
        assert_eq!(CharacterKey::parse("   "), None);
        assert_eq!(LocationKey::parse("\t\n"), None);
    }

    #[test]
    fn keys_serialize_as_plain_strings() {
        let key = LocationKey::parse("HolyTree");
        let json = key.as_ref().and_then(|k| serde_json::to_string(k).ok());
        assert_eq!(json.as_deref(), Some("\"holytree\""));
    }
}
