use std::path::Path;

use colored::Colorize;
use pal_core::validate_collection;

pub fn run(file: &Path) -> Result<(), String> {
    let library = super::load_library(file)?;

    let mut errors = 0;
    let mut warnings = 0;
    for collection in library.collections() {
        let issues = validate_collection(collection);
        if issues.is_empty() {
            continue;
        }
        println!("{}", collection.name.bold());
        for issue in &issues {
            if issue.is_error {
                errors += 1;
                println!("  {}", issue.to_string().red());
            } else {
                warnings += 1;
                println!("  {}", issue.to_string().yellow());
            }
        }
    }

    if errors > 0 {
        Err(format!(
            "{} error{} found",
            errors,
            if errors == 1 { "" } else { "s" },
        ))
    } else {
        println!(
            "{} collection{} checked, {} warning{}",
            library.len(),
            if library.len() == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
        );
        Ok(())
    }
}
