//! Ordered sets of root dialogs — the entry points of conversations.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{PalError, PalResult};
use crate::node::{DialogId, DialogNode};

/// An ordered set of root dialog nodes.
///
/// Roots are the only conversation entry points an engine exposes as
/// topics; every other node is reached through option traversal. The
/// collection keeps node ids unique across its whole owned forest —
/// [`DialogCollection::add_dialog`] rejects a subtree reusing any id.
/// Graphs built by deserialization bypass this bookkeeping; run
/// [`validate_collection`](crate::validate::validate_collection) on those.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DialogCollection {
    /// Display name, used for [`DialogLibrary`](crate::DialogLibrary)
    /// lookups.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    dialogs: Vec<DialogNode>,
}

impl DialogCollection {
    /// Create an empty collection with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dialogs: Vec::new(),
        }
    }

    /// Append a root dialog, rejecting it if any node id in its owned
    /// subtree is already used by this collection (or repeated within the
    /// subtree itself).
    pub fn add_dialog(&mut self, dialog: DialogNode) -> PalResult<()> {
        let mut used: HashSet<DialogId> = self.used_ids().into_iter().collect();
        let mut duplicate = None;
        dialog.walk(&mut |node| {
            if duplicate.is_none() && !used.insert(node.id) {
                duplicate = Some(node.id);
            }
        });
        match duplicate {
            Some(id) => Err(PalError::DuplicateId(id)),
            None => {
                self.dialogs.push(dialog);
                Ok(())
            }
        }
    }

    /// The root dialogs, in authoring order.
    pub fn dialogs(&self) -> &[DialogNode] {
        &self.dialogs
    }

    /// Depth-first search for a node by id across all roots. Redirection
    /// edges are never followed, so the search terminates on graphs with
    /// redirect cycles.
    pub fn find(&self, id: DialogId) -> Option<&DialogNode> {
        self.dialogs.iter().find_map(|dialog| dialog.find(id))
    }

    /// Every node id used by this collection's owned forest, in traversal
    /// order.
    pub fn used_ids(&self) -> Vec<DialogId> {
        let mut ids = Vec::new();
        for dialog in &self.dialogs {
            dialog.walk(&mut |node| ids.push(node.id));
        }
        ids
    }

    /// Number of root dialogs.
    pub fn len(&self) -> usize {
        self.dialogs.len()
    }

    /// Returns true if the collection has no root dialogs.
    pub fn is_empty(&self) -> bool {
        self.dialogs.is_empty()
    }
}
