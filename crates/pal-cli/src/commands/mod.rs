pub mod check;
pub mod ids;
pub mod list;
pub mod play;

use std::path::Path;

use pal_core::DialogLibrary;

/// Load a dialog library from a JSON file.
fn load_library(path: &Path) -> Result<DialogLibrary, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&data).map_err(|e| format!("cannot parse {}: {e}", path.display()))
}
