use std::path::Path;

pub fn run(file: &Path) -> Result<(), String> {
    let library = super::load_library(file)?;

    for collection in library.collections() {
        let ids: Vec<String> = collection
            .used_ids()
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("{}: {}", collection.name, ids.join(", "));
    }
    println!("next free id: {}", library.next_free_id());

    Ok(())
}
