//! Column specifications.
//!
//! Migration arguments after the name describe columns as
//! `field:type` or `field:type:modifier`, e.g. `age:integer` or
//! `email:string:unique`.

use laragen_core::{GeneratorError, GeneratorResult};
use serde::{Deserialize, Serialize};

/// One parsed column argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name, e.g. "email"
    pub field: String,

    /// Schema builder method name, e.g. "string" or "integer"
    #[serde(rename = "type")]
    pub ty: String,

    /// Optional chained modifier, e.g. "nullable" or "unique"
    pub modifier: Option<String>,
}

impl ColumnSpec {
    /// Create a column without a modifier.
    pub fn new(field: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ty: ty.into(),
            modifier: None,
        }
    }

    /// Create a column with a modifier.
    pub fn with_modifier(
        field: impl Into<String>,
        ty: impl Into<String>,
        modifier: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            ty: ty.into(),
            modifier: Some(modifier.into()),
        }
    }

    /// Parse a single `field:type[:modifier]` token.
    ///
    /// Both field and type must be present and non-empty. Anything past the
    /// third segment is ignored, and an empty modifier segment counts as no
    /// modifier at all, so `name:string:` equals `name:string`.
    pub fn parse(token: &str) -> GeneratorResult<Self> {
        let mut parts = token.split(':');
        let field = parts.next().unwrap_or_default();
        let ty = parts.next().unwrap_or_default();
        let modifier = parts.next().filter(|m| !m.is_empty());

        if field.is_empty() || ty.is_empty() {
            return Err(GeneratorError::malformed_column(token));
        }

        Ok(Self {
            field: field.to_string(),
            ty: ty.to_string(),
            modifier: modifier.map(str::to_string),
        })
    }

    /// Parse every token, failing on the first malformed one.
    pub fn parse_all(tokens: &[String]) -> GeneratorResult<Vec<Self>> {
        tokens.iter().map(|t| Self::parse(t)).collect()
    }

    /// Whether this column renders as an auto-incrementing primary key.
    ///
    /// Only the exact pair `id:integer` does; `id:string` or `user_id:integer`
    /// are ordinary columns.
    pub fn is_auto_increment(&self) -> bool {
        self.field == "id" && self.ty == "integer"
    }
}

// ============================================================================
// Tests
// ============================================================================
