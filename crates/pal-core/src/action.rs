//! Actions run as side effects of choosing a dialog option.

use serde::{Deserialize, Serialize};

use crate::context::{NpcContext, PlayerContext, WorldContext};
use crate::node::{DialogId, DialogNode};

/// Which conversation party receives a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationTarget {
    /// Deliver to the player context.
    Player,
    /// Deliver to the NPC context.
    Npc,
    /// Deliver to the world context, if one is supplied.
    World,
}

/// The kind of payload a notification carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// The active dialog was completed; the value is its id.
    DialogCompleted,
    /// A free-form notification; the value is author-defined.
    Other,
}

/// A message delivered to a context's receiver hook when an option with a
/// [`Action::Notify`] action is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// What the notification means.
    pub kind: NotificationKind,
    /// The dialog the chosen option belongs to.
    pub source: DialogId,
    /// Payload; for [`NotificationKind::DialogCompleted`] this is the
    /// source dialog's id.
    pub value: String,
}

/// A side-effecting operation attached to a dialog option, run when the
/// option is chosen. Effects go through the context capability traits
/// only — actions never touch the dialog graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Report the active dialog as completed to the player.
    CompleteDialog,
    /// Deliver a [`Notification`] to one of the conversation parties.
    Notify {
        /// Who receives the notification.
        target: NotificationTarget,
        /// What the notification means.
        kind: NotificationKind,
        /// Author-defined payload, overridden by the source dialog id for
        /// [`NotificationKind::DialogCompleted`].
        #[serde(default)]
        value: String,
    },
}

impl Action {
    /// Execute this action for an option of `source`.
    ///
    /// A [`NotificationTarget::World`] notification is dropped when no
    /// world context is supplied.
    pub fn execute(
        &self,
        source: &DialogNode,
        player: &mut dyn PlayerContext,
        npc: &mut dyn NpcContext,
        world: Option<&mut (dyn WorldContext + '_)>,
    ) {
        match self {
            Self::CompleteDialog => player.on_dialog_completed(source.id),
            Self::Notify {
                target,
                kind,
                value,
            } => {
                let notification = Notification {
                    kind: *kind,
                    source: source.id,
                    value: match kind {
                        NotificationKind::DialogCompleted => source.id.to_string(),
                        NotificationKind::Other => value.clone(),
                    },
                };
                match target {
                    NotificationTarget::Player => player.on_notification(&notification),
                    NotificationTarget::Npc => npc.on_notification(&notification),
                    NotificationTarget::World => {
                        if let Some(world) = world {
                            world.on_notification(&notification);
                        }
                    }
                }
            }
        }
    }
}
