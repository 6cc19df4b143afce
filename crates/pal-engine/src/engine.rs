//! The conversation engine: topic listing, answer transitions, and graph
//! search.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::warn;

use pal_core::{
    DialogCollection, DialogId, DialogLink, DialogNode, Language, NpcContext, PlayerContext,
    WorldContext,
};

use crate::availability::is_available;
use crate::config::EngineConfig;
use crate::conversation::{Answer, Conversation, ConversationKind};
use crate::error::{EngineError, EngineResult};

/// The three conversation contexts, bundled for read-only evaluation.
#[derive(Clone, Copy)]
struct Parties<'a> {
    player: &'a dyn PlayerContext,
    npc: &'a dyn NpcContext,
    world: Option<&'a dyn WorldContext>,
}

/// Answers conversation requests against a loaded dialog collection.
///
/// The engine holds the graph, its configuration, and a seeded RNG for
/// text-variant selection — nothing else. Contexts are supplied fresh on
/// every call, so one engine can serve any number of interleaved
/// conversations as long as the caller serializes the calls.
pub struct ConversationEngine {
    dialogs: DialogCollection,
    config: EngineConfig,
    rng: StdRng,
}

impl ConversationEngine {
    /// Create an engine with no dialogs loaded.
    pub fn new(config: EngineConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            dialogs: DialogCollection::default(),
            config,
            rng,
        }
    }

    /// Replace the active graph wholesale.
    ///
    /// An empty collection is rejected and the previously loaded graph is
    /// kept.
    pub fn load_dialogs(&mut self, collection: DialogCollection) -> EngineResult<()> {
        if collection.is_empty() {
            return Err(EngineError::EmptyCollection);
        }
        self.dialogs = collection;
        Ok(())
    }

    /// The currently loaded collection.
    pub fn dialogs(&self) -> &DialogCollection {
        &self.dialogs
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the topics currently available to the given contexts.
    ///
    /// Returns `None` when no root is available, a single resolved
    /// conversation when exactly one is, and a topic list otherwise.
    pub fn get_available_topics(
        &mut self,
        npc: &dyn NpcContext,
        player: &dyn PlayerContext,
        world: Option<&dyn WorldContext>,
        language: &Language,
    ) -> Option<Conversation> {
        let Self {
            dialogs,
            config,
            rng,
        } = self;
        let parties = Parties { player, npc, world };

        let available: Vec<&DialogNode> = dialogs
            .dialogs()
            .iter()
            .filter(|d| is_available(d, player, npc, world))
            .collect();

        match available.as_slice() {
            [] => None,
            [topic] => Some(resolve_single(dialogs, topic, parties, language, config, rng)),
            topics => {
                let answers = topics
                    .iter()
                    .map(|topic| Answer {
                        index: topic.id.0,
                        text: topic
                            .title
                            .resolve(language, config.fallback, &config.fallback_language),
                        tag: topic.tag.clone(),
                    })
                    .collect();
                Some(Conversation::topic_list(answers))
            }
        }
    }

    /// Advance a conversation by one answer.
    ///
    /// From a topic list, `answer.index` names the chosen node id; from a
    /// single conversation it names the chosen option position, with
    /// [`Answer::END_INDEX`] as an explicit close signal. The chosen
    /// option's actions run exactly once, before the destination's
    /// availability is evaluated. Invalid selections are logged and
    /// surface as `None` — the same value that signals a normally ended
    /// conversation.
    pub fn answer(
        &mut self,
        npc: &mut dyn NpcContext,
        player: &mut dyn PlayerContext,
        mut world: Option<&mut (dyn WorldContext + '_)>,
        previous: &Conversation,
        answer: &Answer,
        language: &Language,
    ) -> Option<Conversation> {
        let Self {
            dialogs,
            config,
            rng,
        } = self;

        if previous.id == Conversation::TOPIC_LIST_ID {
            // The answer names a node id chosen from a topic list.
            let Some(topic) = dialogs.find(DialogId(answer.index)) else {
                warn!(index = answer.index, "selection from topic list invalid");
                return None;
            };
            let parties = Parties {
                player: &*player,
                npc: &*npc,
                world: world.as_deref(),
            };
            if !is_available(topic, parties.player, parties.npc, parties.world) {
                warn!(id = %topic.id, "selection from topic list invalid");
                return None;
            }
            return Some(resolve_single(
                dialogs, topic, parties, language, config, rng,
            ));
        }

        let node = dialogs.find(previous.id)?;
        if answer.index == Answer::END_INDEX {
            return None;
        }
        let Some(option) = usize::try_from(answer.index)
            .ok()
            .and_then(|index| node.options.get(index))
        else {
            warn!(
                index = answer.index,
                options = node.options.len(),
                "answer index out of bounds"
            );
            return None;
        };

        for action in &option.actions {
            action.execute(node, &mut *player, &mut *npc, world.as_deref_mut());
        }

        let link = option.next.as_ref()?;
        let Some(destination) = resolve_link(dialogs, link) else {
            warn!(redirect = %link.target_id(), "redirection target not found");
            return None;
        };
        let parties = Parties {
            player: &*player,
            npc: &*npc,
            world: world.as_deref(),
        };
        if option.ignore_requirements
            || is_available(destination, parties.player, parties.npc, parties.world)
        {
            Some(resolve_single(
                dialogs,
                destination,
                parties,
                language,
                config,
                rng,
            ))
        } else {
            None
        }
    }
}

/// Resolve a link to its destination node. Owned edges carry the node;
/// redirections resolve through root-level search.
fn resolve_link<'a>(dialogs: &'a DialogCollection, link: &'a DialogLink) -> Option<&'a DialogNode> {
    match link {
        DialogLink::Node(node) => Some(&**node),
        DialogLink::Redirect(id) => dialogs.find(*id),
    }
}

/// Resolve a node into a single conversation: title, a randomly picked
/// body text variant, and the currently available answers.
fn resolve_single(
    dialogs: &DialogCollection,
    node: &DialogNode,
    parties: Parties<'_>,
    language: &Language,
    config: &EngineConfig,
    rng: &mut StdRng,
) -> Conversation {
    let title = node
        .title
        .resolve(language, config.fallback, &config.fallback_language);
    let text = node
        .pick_text(rng)
        .map(|t| t.resolve(language, config.fallback, &config.fallback_language))
        .unwrap_or_default();
    let answers = available_answers(dialogs, node, parties, language, config);
    Conversation {
        id: node.id,
        title,
        text,
        tag: node.tag.clone(),
        kind: ConversationKind::Single,
        answers,
    }
}

/// Enumerate a node's currently selectable options.
///
/// Terminal options are always kept; the rest are gated by their
/// destination's availability unless the option ignores requirements.
/// When everything is gated out and the end-conversation fallback is
/// enabled, a single synthetic answer with [`Answer::END_INDEX`] is
/// injected so the caller is never stranded without a choice.
fn available_answers(
    dialogs: &DialogCollection,
    node: &DialogNode,
    parties: Parties<'_>,
    language: &Language,
    config: &EngineConfig,
) -> Vec<Answer> {
    let mut answers = Vec::new();
    for (index, option) in node.options.iter().enumerate() {
        let selectable = match &option.next {
            None => true,
            Some(_) if option.ignore_requirements => true,
            Some(link) => match resolve_link(dialogs, link) {
                Some(destination) => {
                    is_available(destination, parties.player, parties.npc, parties.world)
                }
                None => {
                    warn!(redirect = %link.target_id(), "redirection target not found");
                    false
                }
            },
        };
        if selectable {
            answers.push(Answer {
                index: index as i32,
                text: option
                    .text
                    .resolve(language, config.fallback, &config.fallback_language),
                tag: option.tag.clone(),
            });
        }
    }
    if answers.is_empty() && config.use_end_fallback {
        answers.push(Answer {
            index: Answer::END_INDEX,
            text: config.end_fallback_text.resolve(
                language,
                config.fallback,
                &config.fallback_language,
            ),
            tag: String::new(),
        });
    }
    answers
}

#[cfg(test)]
mod tests {
    use super::*;
    use pal_core::{
        Action, DialogOption, FallbackPolicy, LocalizedText, Notification, Requirement,
    };

    #[derive(Default)]
    struct RecordingPlayer {
        int_value: i64,
        completed: Vec<DialogId>,
        notifications: Vec<Notification>,
    }

    impl PlayerContext for RecordingPlayer {
        fn int_value(&self) -> i64 {
            self.int_value
        }

        fn has_completed(&self, id: DialogId) -> bool {
            self.completed.contains(&id)
        }

        fn on_dialog_completed(&mut self, id: DialogId) {
            self.completed.push(id);
        }

        fn on_notification(&mut self, notification: &Notification) {
            self.notifications.push(notification.clone());
        }
    }

    #[derive(Default)]
    struct RecordingNpc {
        flags: Vec<String>,
        notifications: Vec<Notification>,
    }

    impl NpcContext for RecordingNpc {
        fn flag(&self, key: &str) -> bool {
            self.flags.iter().any(|f| f == key)
        }

        fn on_notification(&mut self, notification: &Notification) {
            self.notifications.push(notification.clone());
        }
    }

    fn text(value: &str) -> LocalizedText {
        LocalizedText::new(value).with(Language::En, value)
    }

    // A requirement the default RecordingPlayer (int value 0) fails.
    fn locked() -> Requirement {
        Requirement::PlayerIntValue { value: 99 }
    }

    fn engine_with(dialogs: Vec<DialogNode>) -> ConversationEngine {
        engine_with_config(dialogs, EngineConfig::default())
    }

    fn engine_with_config(dialogs: Vec<DialogNode>, config: EngineConfig) -> ConversationEngine {
        let mut collection = DialogCollection::new("test");
        for dialog in dialogs {
            collection.add_dialog(dialog).unwrap();
        }
        let mut engine = ConversationEngine::new(config);
        engine.load_dialogs(collection).unwrap();
        engine
    }

    fn bye_node(id: i32) -> DialogNode {
        DialogNode::new(id, text("Smalltalk"))
            .with_text(text("Nice weather today."))
            .with_option(DialogOption::new(text("Bye")))
    }

    #[test]
    fn load_rejects_empty_collection_and_keeps_previous_graph() {
        let mut engine = engine_with(vec![bye_node(5)]);
        let result = engine.load_dialogs(DialogCollection::new("empty"));
        assert!(matches!(result, Err(EngineError::EmptyCollection)));

        let player = RecordingPlayer::default();
        let conversation = engine
            .get_available_topics(&RecordingNpc::default(), &player, None, &Language::En)
            .unwrap();
        assert_eq!(conversation.id, DialogId(5));
    }

    #[test]
    fn single_available_topic_resolves_directly() {
        // Scenario: one root (id 5), no requirements, one terminal option.
        let mut engine = engine_with(vec![bye_node(5)]);
        let player = RecordingPlayer::default();
        let conversation = engine
            .get_available_topics(&RecordingNpc::default(), &player, None, &Language::En)
            .unwrap();

        assert_eq!(conversation.id, DialogId(5));
        assert_eq!(conversation.kind, ConversationKind::Single);
        assert_eq!(conversation.title, "Smalltalk");
        assert_eq!(conversation.text, "Nice weather today.");
        assert_eq!(conversation.answers.len(), 1);
        assert_eq!(conversation.answers[0].index, 0);
        assert_eq!(conversation.answers[0].text, "Bye");
    }

    #[test]
    fn single_match_resolves_the_matched_root() {
        // The first root is gated out; the resolved conversation must
        // carry the second root's content, not the first's.
        let gated = bye_node(1).with_requirement(locked());
        let mut engine = engine_with(vec![gated, bye_node(2)]);
        let player = RecordingPlayer::default();
        let conversation = engine
            .get_available_topics(&RecordingNpc::default(), &player, None, &Language::En)
            .unwrap();
        assert_eq!(conversation.id, DialogId(2));
        assert_eq!(conversation.title, "Smalltalk");
    }

    #[test]
    fn multiple_topics_become_a_topic_list() {
        // Scenario: two available roots; answer indices are node ids in
        // root order.
        let mut engine = engine_with(vec![
            bye_node(5),
            bye_node(9).with_tag("gossip"),
        ]);
        let player = RecordingPlayer::default();
        let conversation = engine
            .get_available_topics(&RecordingNpc::default(), &player, None, &Language::En)
            .unwrap();

        assert!(conversation.is_topic_list());
        assert_eq!(conversation.id, Conversation::TOPIC_LIST_ID);
        assert!(conversation.title.is_empty());
        let indices: Vec<i32> = conversation.answers.iter().map(|a| a.index).collect();
        assert_eq!(indices, vec![5, 9]);
        assert_eq!(conversation.answers[1].tag, "gossip");
    }

    #[test]
    fn no_available_topics_is_none() {
        let mut engine = engine_with(vec![bye_node(5).with_requirement(locked())]);
        let player = RecordingPlayer::default();
        assert!(
            engine
                .get_available_topics(&RecordingNpc::default(), &player, None, &Language::En)
                .is_none()
        );
    }

    #[test]
    fn topic_list_selection_resolves_the_chosen_node() {
        let mut engine = engine_with(vec![bye_node(5), bye_node(9)]);
        let mut player = RecordingPlayer::default();
        let mut npc = RecordingNpc::default();
        let topics = engine
            .get_available_topics(&npc, &player, None, &Language::En)
            .unwrap();

        let chosen = topics.answers[1].clone();
        let conversation = engine
            .answer(&mut npc, &mut player, None, &topics, &chosen, &Language::En)
            .unwrap();
        assert_eq!(conversation.id, DialogId(9));
        assert_eq!(conversation.kind, ConversationKind::Single);
    }

    #[test]
    fn topic_list_selection_no_longer_available_is_none() {
        // Scenario: the chosen topic was available when listed but is
        // gated out by the time the answer arrives.
        let gated = DialogNode::new(5, text("Secret"))
            .with_text(text("..."))
            .with_requirement(Requirement::PlayerIntValue { value: 0 })
            .with_option(DialogOption::new(text("Bye")));
        let mut engine = engine_with(vec![gated, bye_node(9)]);
        let mut player = RecordingPlayer::default();
        let mut npc = RecordingNpc::default();
        let topics = engine
            .get_available_topics(&npc, &player, None, &Language::En)
            .unwrap();
        assert!(topics.is_topic_list());

        player.int_value = 1; // id 5's requirement now fails
        let chosen = topics.answers[0].clone();
        assert_eq!(chosen.index, 5);
        assert!(
            engine
                .answer(&mut npc, &mut player, None, &topics, &chosen, &Language::En)
                .is_none()
        );
    }

    #[test]
    fn topic_list_selection_with_unknown_id_is_none() {
        let mut engine = engine_with(vec![bye_node(5), bye_node(9)]);
        let mut player = RecordingPlayer::default();
        let mut npc = RecordingNpc::default();
        let topics = engine
            .get_available_topics(&npc, &player, None, &Language::En)
            .unwrap();

        let bogus = Answer {
            index: 404,
            text: String::new(),
            tag: String::new(),
        };
        assert!(
            engine
                .answer(&mut npc, &mut player, None, &topics, &bogus, &Language::En)
                .is_none()
        );
    }

    #[test]
    fn or_mode_with_one_passing_requirement_is_available() {
        // Scenario: requirements evaluate to [false, true] under Or.
        let node = bye_node(5)
            .with_mode(pal_core::RequirementMode::Or)
            .with_requirement(locked())
            .with_requirement(Requirement::PlayerIntValue { value: 0 });
        let mut engine = engine_with(vec![node]);
        let player = RecordingPlayer::default();
        assert!(
            engine
                .get_available_topics(&RecordingNpc::default(), &player, None, &Language::En)
                .is_some()
        );
    }

    #[test]
    fn answer_follows_the_chosen_option() {
        let next = bye_node(2);
        let root = DialogNode::new(1, text("Greeting"))
            .with_text(text("Hello."))
            .with_option(DialogOption::new(text("Go on")).with_next(next));
        let mut engine = engine_with(vec![root]);
        let mut player = RecordingPlayer::default();
        let mut npc = RecordingNpc::default();
        let conversation = engine
            .get_available_topics(&npc, &player, None, &Language::En)
            .unwrap();

        let chosen = conversation.answers[0].clone();
        let following = engine
            .answer(
                &mut npc,
                &mut player,
                None,
                &conversation,
                &chosen,
                &Language::En,
            )
            .unwrap();
        assert_eq!(following.id, DialogId(2));
    }

    #[test]
    fn terminal_option_runs_actions_then_ends() {
        let root = DialogNode::new(1, text("Greeting"))
            .with_text(text("Hello."))
            .with_option(DialogOption::new(text("Bye")).with_action(Action::CompleteDialog));
        let mut engine = engine_with(vec![root]);
        let mut player = RecordingPlayer::default();
        let mut npc = RecordingNpc::default();
        let conversation = engine
            .get_available_topics(&npc, &player, None, &Language::En)
            .unwrap();

        let chosen = conversation.answers[0].clone();
        let result = engine.answer(
            &mut npc,
            &mut player,
            None,
            &conversation,
            &chosen,
            &Language::En,
        );
        assert!(result.is_none());
        assert_eq!(player.completed, vec![DialogId(1)]);
    }

    #[test]
    fn actions_run_before_destination_gating() {
        // The destination is gated out, but the chosen option's actions
        // must still have executed by the time None comes back.
        let gated = bye_node(2).with_requirement(locked());
        let root = DialogNode::new(1, text("Greeting"))
            .with_text(text("Hello."))
            .with_option(
                DialogOption::new(text("Go on"))
                    .with_action(Action::CompleteDialog)
                    .with_next(gated),
            );
        let mut engine = engine_with(vec![root]);
        let mut player = RecordingPlayer::default();
        let mut npc = RecordingNpc::default();
        let single = Conversation {
            id: DialogId(1),
            title: String::new(),
            text: String::new(),
            tag: String::new(),
            kind: ConversationKind::Single,
            answers: vec![],
        };

        let chosen = Answer {
            index: 0,
            text: String::new(),
            tag: String::new(),
        };
        let result = engine.answer(&mut npc, &mut player, None, &single, &chosen, &Language::En);
        assert!(result.is_none());
        assert_eq!(player.completed, vec![DialogId(1)]);
    }

    #[test]
    fn ignore_requirements_bypasses_destination_gating() {
        // Scenario: the option points at a gated node but ignores its
        // requirements, so the transition still resolves.
        let gated = bye_node(2).with_requirement(locked());
        let mut option = DialogOption::new(text("Push through")).with_next(gated);
        option.ignore_requirements = true;
        let root = DialogNode::new(1, text("Greeting"))
            .with_text(text("Hello."))
            .with_option(option);
        let mut engine = engine_with(vec![root]);
        let mut player = RecordingPlayer::default();
        let mut npc = RecordingNpc::default();
        let conversation = engine
            .get_available_topics(&npc, &player, None, &Language::En)
            .unwrap();
        // The gated destination is also listed, not filtered out.
        assert_eq!(conversation.answers.len(), 1);

        let chosen = conversation.answers[0].clone();
        let following = engine
            .answer(
                &mut npc,
                &mut player,
                None,
                &conversation,
                &chosen,
                &Language::En,
            )
            .unwrap();
        assert_eq!(following.id, DialogId(2));
    }

    #[test]
    fn out_of_range_index_is_none_and_runs_no_actions() {
        let root = DialogNode::new(1, text("Greeting"))
            .with_text(text("Hello."))
            .with_option(DialogOption::new(text("Bye")).with_action(Action::CompleteDialog));
        let mut engine = engine_with(vec![root]);
        let mut player = RecordingPlayer::default();
        let mut npc = RecordingNpc::default();
        let conversation = engine
            .get_available_topics(&npc, &player, None, &Language::En)
            .unwrap();

        for index in [1, 7, -3] {
            let bogus = Answer {
                index,
                text: String::new(),
                tag: String::new(),
            };
            assert!(
                engine
                    .answer(
                        &mut npc,
                        &mut player,
                        None,
                        &conversation,
                        &bogus,
                        &Language::En,
                    )
                    .is_none()
            );
        }
        assert!(player.completed.is_empty());
    }

    #[test]
    fn end_index_closes_without_error() {
        let mut engine = engine_with(vec![bye_node(1)]);
        let mut player = RecordingPlayer::default();
        let mut npc = RecordingNpc::default();
        let conversation = engine
            .get_available_topics(&npc, &player, None, &Language::En)
            .unwrap();

        assert!(
            engine
                .answer(
                    &mut npc,
                    &mut player,
                    None,
                    &conversation,
                    &Answer::end(),
                    &Language::En,
                )
                .is_none()
        );
    }

    #[test]
    fn gated_options_are_not_listed() {
        let open = bye_node(2);
        let gated = bye_node(3).with_requirement(locked());
        let root = DialogNode::new(1, text("Greeting"))
            .with_text(text("Hello."))
            .with_option(DialogOption::new(text("Open")).with_next(open))
            .with_option(DialogOption::new(text("Locked")).with_next(gated));
        let mut engine = engine_with(vec![root]);
        let player = RecordingPlayer::default();
        let conversation = engine
            .get_available_topics(&RecordingNpc::default(), &player, None, &Language::En)
            .unwrap();

        assert_eq!(conversation.answers.len(), 1);
        assert_eq!(conversation.answers[0].index, 0);
        assert_eq!(conversation.answers[0].text, "Open");
    }

    #[test]
    fn end_fallback_injected_when_everything_is_gated() {
        let gated = bye_node(2).with_requirement(locked());
        let root = DialogNode::new(1, text("Greeting"))
            .with_text(text("Hello."))
            .with_option(DialogOption::new(text("Locked")).with_next(gated));
        let config = EngineConfig::default()
            .with_end_fallback(text("That would be all."));
        let mut engine = engine_with_config(vec![root], config);
        let player = RecordingPlayer::default();
        let conversation = engine
            .get_available_topics(&RecordingNpc::default(), &player, None, &Language::En)
            .unwrap();

        assert_eq!(conversation.answers.len(), 1);
        assert_eq!(conversation.answers[0].index, Answer::END_INDEX);
        assert_eq!(conversation.answers[0].text, "That would be all.");
        assert!(conversation.answers[0].tag.is_empty());
    }

    #[test]
    fn without_end_fallback_answers_may_be_empty() {
        let gated = bye_node(2).with_requirement(locked());
        let root = DialogNode::new(1, text("Greeting"))
            .with_text(text("Hello."))
            .with_option(DialogOption::new(text("Locked")).with_next(gated));
        let mut engine = engine_with(vec![root]);
        let player = RecordingPlayer::default();
        let conversation = engine
            .get_available_topics(&RecordingNpc::default(), &player, None, &Language::En)
            .unwrap();
        assert!(conversation.answers.is_empty());
    }

    #[test]
    fn redirection_cycle_resolves_and_terminates() {
        // 1 -> 2 (owned), 2 -> 1 (redirect): a conversation loop.
        let inner = DialogNode::new(2, text("Inner"))
            .with_text(text("Round and round."))
            .with_option(DialogOption::new(text("Again")).with_redirect(1));
        let root = DialogNode::new(1, text("Outer"))
            .with_text(text("Hello."))
            .with_option(DialogOption::new(text("Go in")).with_next(inner));
        let mut engine = engine_with(vec![root]);
        let mut player = RecordingPlayer::default();
        let mut npc = RecordingNpc::default();

        let outer = engine
            .get_available_topics(&npc, &player, None, &Language::En)
            .unwrap();
        let inner = engine
            .answer(
                &mut npc,
                &mut player,
                None,
                &outer,
                &outer.answers[0].clone(),
                &Language::En,
            )
            .unwrap();
        assert_eq!(inner.id, DialogId(2));

        // Following the redirect lands back on node 1.
        let again = engine
            .answer(
                &mut npc,
                &mut player,
                None,
                &inner,
                &inner.answers[0].clone(),
                &Language::En,
            )
            .unwrap();
        assert_eq!(again.id, DialogId(1));
    }

    #[test]
    fn dangling_redirect_is_none() {
        let root = DialogNode::new(1, text("Outer"))
            .with_text(text("Hello."))
            .with_option(
                DialogOption::new(text("Into the void"))
                    .with_redirect(404),
            );
        let mut engine = engine_with(vec![root]);
        let mut player = RecordingPlayer::default();
        let mut npc = RecordingNpc::default();
        let single = Conversation {
            id: DialogId(1),
            title: String::new(),
            text: String::new(),
            tag: String::new(),
            kind: ConversationKind::Single,
            answers: vec![],
        };
        let chosen = Answer {
            index: 0,
            text: String::new(),
            tag: String::new(),
        };
        assert!(
            engine
                .answer(&mut npc, &mut player, None, &single, &chosen, &Language::En)
                .is_none()
        );
    }

    #[test]
    fn answer_indices_resolve_against_their_sources() {
        // Topic-list indices are node ids; single indices are option
        // positions.
        let mut engine = engine_with(vec![bye_node(5), bye_node(9)]);
        let player = RecordingPlayer::default();
        let topics = engine
            .get_available_topics(&RecordingNpc::default(), &player, None, &Language::En)
            .unwrap();
        for answer in &topics.answers {
            assert!(engine.dialogs().find(DialogId(answer.index)).is_some());
        }

        let mut engine = engine_with(vec![bye_node(5)]);
        let single = engine
            .get_available_topics(&RecordingNpc::default(), &player, None, &Language::En)
            .unwrap();
        let source = engine.dialogs().find(single.id).unwrap();
        for answer in &single.answers {
            assert!((answer.index as usize) < source.options.len());
        }
    }

    #[test]
    fn actions_run_in_option_order() {
        use pal_core::{NotificationKind, NotificationTarget};

        let root = DialogNode::new(1, text("Greeting"))
            .with_text(text("Hello."))
            .with_option(
                DialogOption::new(text("Bye"))
                    .with_action(Action::Notify {
                        target: NotificationTarget::Npc,
                        kind: NotificationKind::Other,
                        value: "first".to_string(),
                    })
                    .with_action(Action::Notify {
                        target: NotificationTarget::Npc,
                        kind: NotificationKind::Other,
                        value: "second".to_string(),
                    }),
            );
        let mut engine = engine_with(vec![root]);
        let mut player = RecordingPlayer::default();
        let mut npc = RecordingNpc::default();
        let conversation = engine
            .get_available_topics(&npc, &player, None, &Language::En)
            .unwrap();

        engine.answer(
            &mut npc,
            &mut player,
            None,
            &conversation,
            &conversation.answers[0].clone(),
            &Language::En,
        );
        let values: Vec<&str> = npc.notifications.iter().map(|n| n.value.as_str()).collect();
        assert_eq!(values, vec!["first", "second"]);
    }

    #[test]
    fn text_variant_pick_is_seeded() {
        let node = || {
            DialogNode::new(1, text("Greeting"))
                .with_text(text("Morning."))
                .with_text(text("Evening."))
                .with_text(text("Well met."))
                .with_option(DialogOption::new(text("Bye")))
        };
        let player = RecordingPlayer::default();

        let mut first = engine_with_config(vec![node()], EngineConfig::default().with_seed(3));
        let mut second = engine_with_config(vec![node()], EngineConfig::default().with_seed(3));
        for _ in 0..8 {
            let a = first
                .get_available_topics(&RecordingNpc::default(), &player, None, &Language::En)
                .unwrap();
            let b = second
                .get_available_topics(&RecordingNpc::default(), &player, None, &Language::En)
                .unwrap();
            assert_eq!(a.text, b.text);
        }
    }

    #[test]
    fn missing_language_resolves_through_policy() {
        let mut engine = engine_with_config(
            vec![bye_node(1)],
            EngineConfig::default().with_fallback(FallbackPolicy::EmptyString),
        );
        let player = RecordingPlayer::default();
        let conversation = engine
            .get_available_topics(&RecordingNpc::default(), &player, None, &Language::De)
            .unwrap();
        assert_eq!(conversation.title, "");
        assert_eq!(conversation.text, "");
    }
}
