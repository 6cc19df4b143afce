//! Dialog options, the edges of the conversation graph.

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::node::{DialogId, DialogNode};
use crate::text::LocalizedText;

/// Where an option leads.
///
/// Forward edges own their destination subtree; dropping a node drops
/// everything it owns and nothing it merely points back to. A redirection
/// is a non-owning back-reference by id to a node owned elsewhere in the
/// graph — the only way cycles enter the graph, and the edge kind every
/// exhaustive traversal skips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogLink {
    /// An owned tree edge to the destination subtree.
    Node(Box<DialogNode>),
    /// A non-owning back-reference to a node reachable elsewhere.
    Redirect(DialogId),
}

impl DialogLink {
    /// The id of the destination node.
    pub fn target_id(&self) -> DialogId {
        match self {
            Self::Node(node) => node.id,
            Self::Redirect(id) => *id,
        }
    }

    /// Returns true for a non-owning back-reference.
    pub fn is_redirection(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }
}

/// A player-selectable answer: display text, the actions it triggers, and
/// an optional link to the next node.
///
/// An option without a link is terminal — choosing it ends the
/// conversation after its actions run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogOption {
    /// The answer text shown to the player.
    pub text: LocalizedText,
    /// User-defined metadata tag, passed through to answers.
    #[serde(default)]
    pub tag: String,
    /// Skip the destination's availability check when this option is
    /// chosen or enumerated.
    #[serde(default)]
    pub ignore_requirements: bool,
    /// Actions run, in order, when this option is chosen.
    #[serde(default)]
    pub actions: Vec<Action>,
    /// The destination link, or `None` for a terminal option.
    #[serde(default)]
    pub next: Option<DialogLink>,
}

impl DialogOption {
    /// Create a terminal option with the given display text.
    pub fn new(text: LocalizedText) -> Self {
        Self {
            text,
            tag: String::new(),
            ignore_requirements: false,
            actions: Vec::new(),
            next: None,
        }
    }

    /// Set the metadata tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Add an action.
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Link this option to an owned destination subtree.
    pub fn with_next(mut self, node: DialogNode) -> Self {
        self.next = Some(DialogLink::Node(Box::new(node)));
        self
    }

    /// Link this option back to a node owned elsewhere in the graph.
    pub fn with_redirect(mut self, id: impl Into<DialogId>) -> Self {
        self.next = Some(DialogLink::Redirect(id.into()));
        self
    }

    /// Returns true if choosing this option ends the conversation.
    pub fn is_terminal(&self) -> bool {
        self.next.is_none()
    }
}
