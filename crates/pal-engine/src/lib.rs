//! Conversation engine for Palaver.
//!
//! Loads a dialog collection from [`pal_core`] and answers two requests:
//! which topics are currently available to a `(player, npc, world)`
//! context tuple, and what follows from a chosen answer. Calls are
//! synchronous and the engine keeps no per-conversation state — the
//! returned [`Conversation`] plus the caller's contexts carry everything
//! needed for the next step.

/// Availability evaluation for dialog nodes.
pub mod availability;
/// Engine configuration.
pub mod config;
/// Conversation and answer protocol types.
pub mod conversation;
/// The conversation engine itself.
pub mod engine;
/// Error types for the engine.
pub mod error;

/// Re-export availability evaluation.
pub use availability::is_available;
/// Re-export the configuration type.
pub use config::EngineConfig;
/// Re-export protocol types.
pub use conversation::{Answer, Conversation, ConversationKind};
/// Re-export the engine type.
pub use engine::ConversationEngine;
/// Re-export error types.
pub use error::{EngineError, EngineResult};
