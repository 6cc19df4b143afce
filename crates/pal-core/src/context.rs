//! Capability interfaces the engine requires from its collaborators.
//!
//! Requirements read these traits, actions write through them. The engine
//! holds no reference to a context between calls — the caller supplies the
//! tuple fresh on every request.

use crate::action::Notification;
use crate::node::DialogId;

/// The conversing player, as seen by requirements and actions.
pub trait PlayerContext {
    /// The player's tracked integer value, read by
    /// [`Requirement::PlayerIntValue`](crate::Requirement::PlayerIntValue).
    fn int_value(&self) -> i64;

    /// Whether the player has completed the dialog with the given id.
    fn has_completed(&self, id: DialogId) -> bool;

    /// Called when an option action reports a dialog as completed.
    fn on_dialog_completed(&mut self, id: DialogId);

    /// Receiver hook for option notifications addressed to the player.
    fn on_notification(&mut self, _notification: &Notification) {}
}

/// The NPC that owns the topics of the current conversation.
pub trait NpcContext {
    /// Whether the named flag is set on this NPC.
    fn flag(&self, key: &str) -> bool;

    /// Receiver hook for option notifications addressed to the NPC.
    fn on_notification(&mut self, _notification: &Notification) {}
}

/// Shared world state. Conversations that need no world state may run
/// without one — world-targeted requirements treat an absent context as
/// vacuously satisfied.
pub trait WorldContext {
    /// Whether the named flag is set in the world.
    fn flag(&self, key: &str) -> bool;

    /// Seconds of world time elapsed since the reference point the host
    /// chooses (e.g. session start).
    fn elapsed_seconds(&self) -> f64;

    /// Receiver hook for option notifications addressed to the world.
    fn on_notification(&mut self, _notification: &Notification) {}
}
