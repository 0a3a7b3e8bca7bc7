//! Migration action classification.
//!
//! The migration name itself decides what the schema bodies look like:
//! `delete_...` drops columns, `update_...` opens an alter block,
//! `add_...` appends columns, and anything else creates a table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a migration does to its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Create the table from scratch
    Create,
    /// Add columns to an existing table
    Add,
    /// Alter an existing table in place
    Update,
    /// Drop columns from an existing table
    Delete,
}

impl Action {
    /// Classify a migration name by scanning for action keywords.
    ///
    /// The scan is case-insensitive and the leftmost keyword wins. `delete`
    /// and `update` match anywhere, even inside a longer word, so
    /// `create_updated_flags_table` classifies as `Update`. `add` only
    /// counts when followed by an underscore, which keeps names like
    /// `create_addresses_table` out of the `Add` bucket. Names without any
    /// keyword default to `Create`.
    pub fn classify(name: &str) -> Self {
        let lower = name.to_lowercase();
        for (i, _) in lower.char_indices() {
            let rest = &lower[i..];
            if rest.starts_with("delete") {
                return Action::Delete;
            }
            if rest.starts_with("update") {
                return Action::Update;
            }
            if let Some(after) = rest.strip_prefix("add") {
                if after.starts_with('_') {
                    return Action::Add;
                }
            }
        }
        Action::Create
    }

    /// Whether the migration operates on an already existing table.
    pub fn alters_existing(&self) -> bool {
        !matches!(self, Action::Create)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Action::Create => "create",
            Action::Add => "add",
            Action::Update => "update",
            Action::Delete => "delete",
        };
        write!(f, "{}", word)
    }
}

// ============================================================================
// Tests
// ============================================================================
