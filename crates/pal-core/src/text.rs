//! Localized text with a total fallback-resolution policy.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// What to return when a [`LocalizedText`] has no entry for the requested
/// language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Try a configured fallback language; if that is also missing,
    /// behave like [`FallbackPolicy::DebugOutput`].
    Language,
    /// Return a diagnostic marker embedding the text's description.
    #[default]
    DebugOutput,
    /// Return an empty string.
    EmptyString,
}

/// One translation entry of a [`LocalizedText`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// The language this entry is written in.
    pub language: Language,
    /// The translated text.
    pub text: String,
}

/// A string keyed by language.
///
/// Holds at most one entry per language; [`LocalizedText::set`] replaces an
/// existing entry rather than adding a second one. Resolution never fails:
/// a missing language is always mapped to *some* string according to the
/// supplied [`FallbackPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    /// Authoring-only label, never shown to players (except through the
    /// [`FallbackPolicy::DebugOutput`] marker).
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    entries: Vec<LanguageEntry>,
}

impl LocalizedText {
    /// Create an empty localized text with the given authoring label.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            entries: Vec::new(),
        }
    }

    /// Add or replace the entry for a language.
    pub fn with(mut self, language: Language, text: impl Into<String>) -> Self {
        self.set(language, text);
        self
    }

    /// Add or replace the entry for a language.
    pub fn set(&mut self, language: Language, text: impl Into<String>) {
        let text = text.into();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.language == language) {
            entry.text = text;
        } else {
            self.entries.push(LanguageEntry { language, text });
        }
    }

    /// Look up the exact entry for a language.
    pub fn get(&self, language: &Language) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| &e.language == language)
            .map(|e| e.text.as_str())
    }

    /// Returns true if no translation entry is present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the translation entries in authoring order.
    pub fn entries(&self) -> impl Iterator<Item = &LanguageEntry> {
        self.entries.iter()
    }

    /// Resolve this text for a language.
    ///
    /// Exact matches win; otherwise the policy decides. The result is
    /// always a string — missing text is a fallback concern, never an
    /// error.
    pub fn resolve(
        &self,
        language: &Language,
        policy: FallbackPolicy,
        fallback_language: &Language,
    ) -> String {
        if let Some(text) = self.get(language) {
            return text.to_string();
        }
        match policy {
            FallbackPolicy::Language => match self.get(fallback_language) {
                Some(text) => text.to_string(),
                None => self.debug_marker(),
            },
            FallbackPolicy::DebugOutput => self.debug_marker(),
            FallbackPolicy::EmptyString => String::new(),
        }
    }

    fn debug_marker(&self) -> String {
        format!("localized text not found: {}", self.description)
    }
}
