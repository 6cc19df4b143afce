use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use colored::Colorize;
use pal_core::{DialogId, Language, Notification, NpcContext, PlayerContext, WorldContext};
use pal_engine::{Conversation, ConversationEngine, EngineConfig};

/// In-process player double for interactive play.
struct DemoPlayer {
    int_value: i64,
    completed: Vec<DialogId>,
}

impl PlayerContext for DemoPlayer {
    fn int_value(&self) -> i64 {
        self.int_value
    }

    fn has_completed(&self, id: DialogId) -> bool {
        self.completed.contains(&id)
    }

    fn on_dialog_completed(&mut self, id: DialogId) {
        self.completed.push(id);
        println!("{}", format!("[player] dialog {id} completed").dimmed());
    }

    fn on_notification(&mut self, notification: &Notification) {
        println!(
            "{}",
            format!(
                "[player] notification {:?}: {}",
                notification.kind, notification.value
            )
            .dimmed()
        );
    }
}

/// In-process NPC double for interactive play.
#[derive(Default)]
struct DemoNpc {
    flags: Vec<String>,
}

impl NpcContext for DemoNpc {
    fn flag(&self, key: &str) -> bool {
        self.flags.iter().any(|f| f == key)
    }

    fn on_notification(&mut self, notification: &Notification) {
        println!(
            "{}",
            format!(
                "[npc] notification {:?}: {}",
                notification.kind, notification.value
            )
            .dimmed()
        );
    }
}

/// In-process world double; time starts when play starts.
struct DemoWorld {
    started: Instant,
    flags: Vec<String>,
}

impl DemoWorld {
    fn new() -> Self {
        Self {
            started: Instant::now(),
            flags: Vec::new(),
        }
    }
}

impl WorldContext for DemoWorld {
    fn flag(&self, key: &str) -> bool {
        self.flags.iter().any(|f| f == key)
    }

    fn elapsed_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    fn on_notification(&mut self, notification: &Notification) {
        println!(
            "{}",
            format!(
                "[world] notification {:?}: {}",
                notification.kind, notification.value
            )
            .dimmed()
        );
    }
}

pub fn run(
    file: &Path,
    collection_name: Option<&str>,
    language: &str,
    seed: u64,
) -> Result<(), String> {
    let library = super::load_library(file)?;
    let collection = match collection_name {
        Some(name) => library
            .collection(name)
            .ok_or_else(|| format!("no collection named '{name}'"))?,
        None => library
            .collections()
            .first()
            .ok_or_else(|| "library has no collections".to_string())?,
    };
    let language = Language::parse(language);

    let config = EngineConfig {
        use_end_fallback: true,
        ..EngineConfig::default().with_seed(seed)
    };
    let mut engine = ConversationEngine::new(config);
    engine
        .load_dialogs(collection.clone())
        .map_err(|e| e.to_string())?;

    let mut player = DemoPlayer {
        int_value: 0,
        completed: Vec::new(),
    };
    let mut npc = DemoNpc::default();
    let mut world = DemoWorld::new();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut current = engine.get_available_topics(&npc, &player, Some(&world), &language);
    if current.is_none() {
        println!("No topics available.");
        return Ok(());
    }

    while let Some(conversation) = current.take() {
        print_conversation(&conversation);
        if conversation.answers.is_empty() {
            break;
        }

        print!("> ");
        io::stdout().flush().ok();
        let Some(Ok(line)) = lines.next() else { break };
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        let selection = input.parse::<usize>().ok();
        let Some(answer) = selection
            .and_then(|s| s.checked_sub(1))
            .and_then(|index| conversation.answers.get(index))
            .cloned()
        else {
            println!("enter an answer number, or 'q' to quit");
            current = Some(conversation);
            continue;
        };

        current = engine.answer(
            &mut npc,
            &mut player,
            Some(&mut world),
            &conversation,
            &answer,
            &language,
        );
    }

    println!("Conversation ended.");
    Ok(())
}

fn print_conversation(conversation: &Conversation) {
    println!();
    if conversation.is_topic_list() {
        println!("{}", "Topics:".bold());
    } else {
        if !conversation.title.is_empty() {
            println!("{}", conversation.title.bold());
        }
        if !conversation.text.is_empty() {
            println!("{}", conversation.text);
        }
    }
    for (index, answer) in conversation.answers.iter().enumerate() {
        println!("  [{}] {}", index + 1, answer.text);
    }
}
