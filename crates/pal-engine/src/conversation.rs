//! The data a caller receives for a requested dialog, and the answers it
//! sends back.

use pal_core::DialogId;
use serde::{Deserialize, Serialize};

/// Whether a conversation is a resolved dialog or a list of topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationKind {
    /// One resolved dialog node; answers are its available options.
    Single,
    /// More than one topic is available; answers list the topics.
    TopicList,
}

/// One selectable answer of a [`Conversation`].
///
/// The meaning of `index` depends on the conversation kind: in a topic
/// list it is the **destination node's id**; in a single conversation it
/// is the **option's position** in the source node's option list, or
/// [`Answer::END_INDEX`] for the synthetic end-conversation answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Node id (topic list) or option position (single); see type docs.
    pub index: i32,
    /// Resolved display text.
    pub text: String,
    /// The option's (or topic's) metadata tag.
    pub tag: String,
}

impl Answer {
    /// `index` value of the synthetic end-conversation answer; also
    /// accepted from callers as an explicit close signal.
    pub const END_INDEX: i32 = -1;

    /// An explicit close signal a caller can send to end a conversation.
    pub fn end() -> Self {
        Self {
            index: Self::END_INDEX,
            text: String::new(),
            tag: String::new(),
        }
    }
}

/// The data used to display a requested dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// The source node's id, or [`Conversation::TOPIC_LIST_ID`] when this
    /// conversation is a topic list.
    pub id: DialogId,
    /// Resolved title; empty for topic lists.
    pub title: String,
    /// Resolved body text; empty for topic lists.
    pub text: String,
    /// The source node's metadata tag; empty for topic lists.
    pub tag: String,
    /// Whether this is a resolved dialog or a topic list.
    pub kind: ConversationKind,
    /// Selectable answers; see [`Answer::index`] for their meaning.
    pub answers: Vec<Answer>,
}

impl Conversation {
    /// Sentinel id marking a topic-list conversation.
    pub const TOPIC_LIST_ID: DialogId = DialogId(-1);

    pub(crate) fn topic_list(answers: Vec<Answer>) -> Self {
        Self {
            id: Self::TOPIC_LIST_ID,
            title: String::new(),
            text: String::new(),
            tag: String::new(),
            kind: ConversationKind::TopicList,
            answers,
        }
    }

    /// Returns true if this conversation lists topics rather than a
    /// resolved dialog.
    pub fn is_topic_list(&self) -> bool {
        self.kind == ConversationKind::TopicList
    }
}
