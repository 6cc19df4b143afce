use std::fmt;

use serde::{Deserialize, Serialize};

/// A language a dialog text can be authored in. Extensible via
/// `Custom(String)` for languages without a built-in variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// English — the default authoring language.
    #[default]
    En,
    /// German.
    De,
    /// A user-defined language tag not covered by built-in variants.
    Custom(String),
}

impl Language {
    /// Parse a language from a tag like "en", "de", or anything else
    /// (which becomes a custom tag, lowercased).
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Self::En,
            "de" | "german" => Self::De,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::De => write!(f, "de"),
            Self::Custom(s) => write!(f, "{s}"),
        }
    }
}
