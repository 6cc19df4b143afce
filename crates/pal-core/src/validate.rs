//! Authoring-time validation of dialog graph invariants.
//!
//! The runtime engine assumes a well-formed graph (unique ids, redirects
//! pointing at nodes that exist) and keeps its hot path free of guards.
//! Editors and loaders are expected to run these checks before handing a
//! graph to an engine.

use std::collections::HashSet;
use std::fmt;

use crate::collection::DialogCollection;
use crate::node::{DialogId, DialogNode};
use crate::option::DialogLink;

/// A problem found while validating a dialog collection.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Which dialog (or collection) the issue was found in.
    pub dialog: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(dialog: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            dialog: dialog.into(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(dialog: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            dialog: dialog.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.dialog, self.message)
    }
}

/// Check a collection against the invariants the runtime relies on.
///
/// Errors: duplicate node ids, redirection targets that resolve to no
/// owned node, nodes without any body text. Warnings: an empty
/// collection, titles or option texts with no localized entries.
pub fn validate_collection(collection: &DialogCollection) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if collection.is_empty() {
        issues.push(ValidationIssue::warning(
            format!("collection '{}'", collection.name),
            "no dialogs",
        ));
        return issues;
    }

    let mut nodes: Vec<&DialogNode> = Vec::new();
    for root in collection.dialogs() {
        root.walk(&mut |node| nodes.push(node));
    }

    let mut seen: HashSet<DialogId> = HashSet::new();
    for node in &nodes {
        if !seen.insert(node.id) {
            issues.push(ValidationIssue::error(
                format!("dialog {}", node.id),
                "duplicate id",
            ));
        }
    }

    for node in &nodes {
        let label = format!("dialog {}", node.id);

        if node.texts.is_empty() {
            issues.push(ValidationIssue::error(label.clone(), "no text variants"));
        }
        if node.title.is_empty() {
            issues.push(ValidationIssue::warning(
                label.clone(),
                "title has no localized entries",
            ));
        }

        for (index, option) in node.options.iter().enumerate() {
            if option.text.is_empty() {
                issues.push(ValidationIssue::warning(
                    label.clone(),
                    format!("option {index} has no localized entries"),
                ));
            }
            if let Some(DialogLink::Redirect(target)) = &option.next
                && !seen.contains(target)
            {
                issues.push(ValidationIssue::error(
                    label.clone(),
                    format!("option {index} redirects to unknown dialog {target}"),
                ));
            }
        }
    }

    issues
}
