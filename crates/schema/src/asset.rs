//! Asset specifications.
//!
//! Asset arguments are plain file names routed by extension: `.css` files
//! land in the stylesheet directory, `.js` files in the script directory.
//! Anything else is skipped with a warning.

use std::path::Path;

use laragen_core::{GeneratorError, GeneratorResult};
use serde::{Deserialize, Serialize};

/// Which asset pipeline a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Css,
    Js,
}

/// One asset file to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSpec {
    /// File name as given, e.g. "style.css"
    pub file_name: String,

    /// Routing decision derived from the extension
    pub kind: AssetKind,
}

impl AssetSpec {
    /// Route a file name by its extension.
    pub fn classify(file_name: &str) -> GeneratorResult<Self> {
        let kind = match Path::new(file_name).extension().and_then(|e| e.to_str()) {
            Some("css") => AssetKind::Css,
            Some("js") => AssetKind::Js,
            _ => {
                return Err(GeneratorError::UnknownAssetExtension(
                    file_name.to_string(),
                ));
            }
        };

        Ok(Self {
            file_name: file_name.to_string(),
            kind,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
