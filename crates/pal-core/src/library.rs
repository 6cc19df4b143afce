//! A named registry of dialog collections.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::collection::DialogCollection;
use crate::error::{PalError, PalResult};
use crate::node::DialogId;

/// A set of [`DialogCollection`]s addressed by name, plus the id allocator
/// authoring tools use to mint fresh node ids.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DialogLibrary {
    #[serde(default)]
    collections: Vec<DialogCollection>,
}

impl DialogLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collection, rejecting a name already present
    /// (case-insensitive).
    pub fn add_collection(&mut self, collection: DialogCollection) -> PalResult<()> {
        if self
            .collections
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(&collection.name))
        {
            return Err(PalError::DuplicateCollection(collection.name));
        }
        self.collections.push(collection);
        Ok(())
    }

    /// Look up a collection by name, case-insensitive.
    pub fn collection(&self, name: &str) -> Option<&DialogCollection> {
        self.collections
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// All collections, in insertion order.
    pub fn collections(&self) -> &[DialogCollection] {
        &self.collections
    }

    /// The smallest non-negative id not used by any collection in this
    /// library.
    pub fn next_free_id(&self) -> DialogId {
        let used: HashSet<DialogId> = self
            .collections
            .iter()
            .flat_map(|c| c.used_ids())
            .collect();
        let mut id = 0;
        while used.contains(&DialogId(id)) {
            id += 1;
        }
        DialogId(id)
    }

    /// Number of collections.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Returns true if the library holds no collections.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}
