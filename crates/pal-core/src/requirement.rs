//! Requirements gate the availability of dialog nodes.

use serde::{Deserialize, Serialize};

use crate::context::{NpcContext, PlayerContext, WorldContext};
use crate::node::DialogId;

/// Which context a requirement inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementTarget {
    /// Evaluated against the player context.
    Player,
    /// Evaluated against the NPC context.
    Npc,
    /// Evaluated against the world context.
    World,
}

/// A predicate evaluated against exactly one of the three conversation
/// contexts. Evaluation is pure: it reads the context and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// The player's tracked integer value equals `value`.
    PlayerIntValue {
        /// Expected value.
        value: i64,
    },
    /// The player has completed the dialog with id `id` before.
    PlayerCompletedDialog {
        /// The dialog that must have been completed.
        id: DialogId,
    },
    /// The NPC flag `key` is set.
    NpcFlag {
        /// Flag key.
        key: String,
    },
    /// The world flag `key` is set.
    WorldFlag {
        /// Flag key.
        key: String,
    },
    /// More than `min_seconds` of world time have elapsed.
    WorldLifetime {
        /// Threshold in seconds (exclusive).
        min_seconds: f64,
    },
}

impl Requirement {
    /// The context this requirement evaluates against, derived from the
    /// variant.
    pub fn target(&self) -> RequirementTarget {
        match self {
            Self::PlayerIntValue { .. } | Self::PlayerCompletedDialog { .. } => {
                RequirementTarget::Player
            }
            Self::NpcFlag { .. } => RequirementTarget::Npc,
            Self::WorldFlag { .. } | Self::WorldLifetime { .. } => RequirementTarget::World,
        }
    }

    /// Evaluate against the supplied contexts. Only the context matching
    /// [`Requirement::target`] is read; the others are ignored.
    ///
    /// World-targeted requirements are vacuously true when no world
    /// context is supplied — availability never gates on optional context.
    pub fn evaluate(
        &self,
        player: &dyn PlayerContext,
        npc: &dyn NpcContext,
        world: Option<&dyn WorldContext>,
    ) -> bool {
        match self {
            Self::PlayerIntValue { value } => player.int_value() == *value,
            Self::PlayerCompletedDialog { id } => player.has_completed(*id),
            Self::NpcFlag { key } => npc.flag(key),
            Self::WorldFlag { key } => world.is_none_or(|w| w.flag(key)),
            Self::WorldLifetime { min_seconds } => {
                world.is_none_or(|w| w.elapsed_seconds() > *min_seconds)
            }
        }
    }
}
