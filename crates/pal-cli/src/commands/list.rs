use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use pal_core::DialogNode;

pub fn run(file: &Path) -> Result<(), String> {
    let library = super::load_library(file)?;

    if library.is_empty() {
        println!("  No collections.");
        return Ok(());
    }

    for collection in library.collections() {
        println!("{}:", collection.name);

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Id", "Title", "Tag", "Options"]);

        for dialog in collection.dialogs() {
            table.add_row(vec![
                dialog.id.to_string(),
                title_label(dialog),
                dialog.tag.clone(),
                dialog.options.len().to_string(),
            ]);
        }

        println!("{table}");
        let total = collection.used_ids().len();
        println!(
            "  {} root dialog{}, {} node{} total",
            collection.len(),
            if collection.len() == 1 { "" } else { "s" },
            total,
            if total == 1 { "" } else { "s" },
        );
        println!();
    }

    Ok(())
}

/// A display label for a dialog title: its first entry, or the authoring
/// description when no entry exists.
fn title_label(dialog: &DialogNode) -> String {
    dialog
        .title
        .entries()
        .next()
        .map(|entry| entry.text.clone())
        .unwrap_or_else(|| dialog.title.description.clone())
}
