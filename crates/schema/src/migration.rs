//! Migration requests and plans.
//!
//! A [`MigrationRequest`] is the raw command line: a migration name plus
//! column tokens. [`MigrationPlan::from_request`] resolves it into
//! everything the code generator needs: class name, target table, action,
//! and parsed columns. All parsing happens here, before any file is
//! written, so a bad token aborts with nothing on disk.

use laragen_core::{GeneratorError, GeneratorResult, capitalize_words};
use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::column::ColumnSpec;
use crate::table::infer_table_name;

// ============================================================================
// MigrationRequest
// ============================================================================

/// Raw migration arguments as they arrived on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationRequest {
    /// The migration name, e.g. "create_users_table"
    pub name: String,

    /// Column tokens, e.g. ["id:integer", "email:string"]
    pub columns: Vec<String>,
}

impl MigrationRequest {
    /// Create a new request.
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }
}

// ============================================================================
// MigrationPlan
// ============================================================================

/// A fully resolved migration, ready for code generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationPlan {
    /// PHP class name, e.g. "Create_Users_Table"
    pub class_name: String,

    /// Target table, e.g. "users"
    pub table_name: String,

    /// What the migration does to the table
    pub action: Action,

    /// Parsed column specifications, in argument order
    pub columns: Vec<ColumnSpec>,
}

impl MigrationPlan {
    /// Resolve a raw request into a plan.
    ///
    /// Fails on an empty name or on the first malformed column token.
    pub fn from_request(request: &MigrationRequest) -> GeneratorResult<Self> {
        if request.name.is_empty() {
            return Err(GeneratorError::missing_arguments(
                "please provide a name for the migration",
            ));
        }

        let columns = ColumnSpec::parse_all(&request.columns)?;

        Ok(Self {
            class_name: capitalize_words(&request.name),
            table_name: infer_table_name(&request.name),
            action: Action::classify(&request.name),
            columns,
        })
    }

    /// The migration file stem, without timestamp or extension.
    ///
    /// Lowercasing the class name rather than reusing the raw input keeps
    /// the file name and class name in lockstep for mixed-case input.
    pub fn file_stem(&self) -> String {
        self.class_name.to_lowercase()
    }
}

// ============================================================================
// Tests
// ============================================================================
