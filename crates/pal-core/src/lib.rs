//! Core types for Palaver: dialog graphs, localization, requirements, and
//! actions.
//!
//! This crate defines the data model a conversation engine runs on. It is
//! independent of any persistence format — construct a [`DialogCollection`]
//! programmatically or deserialize one from whatever a loader provides.

/// Side effects attached to dialog options.
pub mod action;
/// Ordered sets of root dialogs.
pub mod collection;
/// Capability interfaces for player, NPC, and world contexts.
pub mod context;
/// Error types used throughout the crate.
pub mod error;
/// Languages dialog text can be authored in.
pub mod language;
/// Named registries of dialog collections.
pub mod library;
/// Dialog nodes, the vertices of the conversation graph.
pub mod node;
/// Dialog options, the edges of the conversation graph.
pub mod option;
/// Requirements gating dialog availability.
pub mod requirement;
/// Localized text with fallback resolution.
pub mod text;
/// Authoring-time graph validation.
pub mod validate;

/// Re-export action types.
pub use action::{Action, Notification, NotificationKind, NotificationTarget};
/// Re-export the collection type.
pub use collection::DialogCollection;
/// Re-export the context capability traits.
pub use context::{NpcContext, PlayerContext, WorldContext};
/// Re-export error types.
pub use error::{PalError, PalResult};
/// Re-export the language type.
pub use language::Language;
/// Re-export the library type.
pub use library::DialogLibrary;
/// Re-export graph vertex types.
pub use node::{DialogId, DialogNode, RequirementMode};
/// Re-export graph edge types.
pub use option::{DialogLink, DialogOption};
/// Re-export requirement types.
pub use requirement::{Requirement, RequirementTarget};
/// Re-export localized text types.
pub use text::{FallbackPolicy, LanguageEntry, LocalizedText};
/// Re-export validation types.
pub use validate::{ValidationIssue, validate_collection};
