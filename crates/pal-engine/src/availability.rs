//! Availability evaluation for dialog nodes.

use pal_core::{DialogNode, NpcContext, PlayerContext, RequirementMode, WorldContext};

/// Evaluate whether a node is currently available.
///
/// A node with no requirements is available in either mode. `And` stops at
/// the first failing requirement, `Or` at the first passing one.
pub fn is_available(
    node: &DialogNode,
    player: &dyn PlayerContext,
    npc: &dyn NpcContext,
    world: Option<&dyn WorldContext>,
) -> bool {
    if node.requirements.is_empty() {
        return true;
    }
    match node.requirement_mode {
        RequirementMode::And => node
            .requirements
            .iter()
            .all(|r| r.evaluate(player, npc, world)),
        RequirementMode::Or => node
            .requirements
            .iter()
            .any(|r| r.evaluate(player, npc, world)),
    }
}
