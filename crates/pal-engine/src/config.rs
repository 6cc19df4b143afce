//! Configuration for a conversation engine.

use pal_core::{FallbackPolicy, Language, LocalizedText};

/// Knobs controlling text resolution and answer fallback behavior.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// What to do when a text has no entry for the requested language.
    pub fallback: FallbackPolicy,
    /// The language to resort to when `fallback` is
    /// [`FallbackPolicy::Language`].
    pub fallback_language: Language,
    /// Inject a synthetic "end conversation" answer when every option of
    /// a node is gated out.
    pub use_end_fallback: bool,
    /// Display text of the synthetic end answer.
    pub end_fallback_text: LocalizedText,
    /// RNG seed for reproducible text-variant selection.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fallback: FallbackPolicy::default(),
            fallback_language: Language::En,
            use_end_fallback: false,
            end_fallback_text: LocalizedText::new("End Conversation")
                .with(Language::En, "End conversation."),
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Set the fallback policy.
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Set the fallback language.
    pub fn with_fallback_language(mut self, language: Language) -> Self {
        self.fallback_language = language;
        self
    }

    /// Enable the end-conversation fallback with the given display text.
    pub fn with_end_fallback(mut self, text: LocalizedText) -> Self {
        self.use_end_fallback = true;
        self.end_fallback_text = text;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
