//! Path configuration for generated files.
//!
//! Every generator resolves its output path through [`PathsConfig`]. The
//! defaults mirror a stock Laravel application layout; a `laragen.toml` at
//! the application root can override any of them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, GeneratorResult};

/// Name of the optional config file looked up in the application directory.
pub const CONFIG_FILE: &str = "laragen.toml";

// ============================================================================
// PathsConfig
// ============================================================================

/// Where each kind of generated file lands, relative to the application root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory for controller classes
    pub controllers_dir: PathBuf,

    /// Directory for Eloquent models
    pub models_dir: PathBuf,

    /// Directory for migration files
    pub migrations_dir: PathBuf,

    /// Directory for view templates
    pub views_dir: PathBuf,

    /// Directory for stylesheet assets
    pub css_dir: PathBuf,

    /// Directory for script assets
    pub js_dir: PathBuf,

    /// Extension for PHP sources (without the dot)
    pub extension: String,

    /// Whether views use the Blade template extension
    pub blade: bool,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            controllers_dir: PathBuf::from("application/controllers"),
            models_dir: PathBuf::from("application/models"),
            migrations_dir: PathBuf::from("application/migrations"),
            views_dir: PathBuf::from("application/views"),
            css_dir: PathBuf::from("public/css"),
            js_dir: PathBuf::from("public/js"),
            extension: "php".to_string(),
            blade: true,
        }
    }
}

impl PathsConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the controllers directory
    pub fn with_controllers_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.controllers_dir = dir.into();
        self
    }

    /// Set the models directory
    pub fn with_models_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.models_dir = dir.into();
        self
    }

    /// Set the migrations directory
    pub fn with_migrations_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.migrations_dir = dir.into();
        self
    }

    /// Set the views directory
    pub fn with_views_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.views_dir = dir.into();
        self
    }

    /// Set the PHP source extension
    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = ext.into();
        self
    }

    /// Generate plain `.php` views instead of `.blade.php`
    pub fn without_blade(mut self) -> Self {
        self.blade = false;
        self
    }

    /// The extension used for view files.
    pub fn view_extension(&self) -> String {
        if self.blade {
            format!("blade.{}", self.extension)
        } else {
            self.extension.clone()
        }
    }

    /// Load the configuration from `laragen.toml` in `app_dir`.
    ///
    /// A missing file is not an error; defaults apply. A present but
    /// unreadable or invalid file is.
    pub fn load(app_dir: &Path) -> GeneratorResult<Self> {
        let path = app_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path).map_err(|e| GeneratorError::ConfigRead {
            path: path.clone(),
            message: e.to_string(),
        })?;

        toml::from_str(&raw).map_err(|e| GeneratorError::ConfigParse {
            path,
            message: e.to_string(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_layout() {
        let config = PathsConfig::default();
        assert_eq!(
            config.controllers_dir,
            PathBuf::from("application/controllers")
        );
        assert_eq!(config.migrations_dir, PathBuf::from("application/migrations"));
        assert_eq!(config.css_dir, PathBuf::from("public/css"));
        assert_eq!(config.extension, "php");
        assert!(config.blade);
    }

    #[test]
    fn test_builder() {
        let config = PathsConfig::new()
            .with_models_dir("app/models")
            .with_extension("php8")
            .without_blade();

        assert_eq!(config.models_dir, PathBuf::from("app/models"));
        assert_eq!(config.extension, "php8");
        assert!(!config.blade);
    }

    #[test]
    fn test_view_extension() {
        assert_eq!(PathsConfig::default().view_extension(), "blade.php");
        assert_eq!(PathsConfig::new().without_blade().view_extension(), "php");
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: PathsConfig = toml::from_str(
            r#"
            models_dir = "domain/models"
            blade = false
            "#,
        )
        .unwrap();

        assert_eq!(config.models_dir, PathBuf::from("domain/models"));
        assert!(!config.blade);
        // Untouched keys keep their defaults
        assert_eq!(config.controllers_dir, PathBuf::from("application/controllers"));
        assert_eq!(config.extension, "php");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PathsConfig::load(dir.path()).unwrap();
        assert_eq!(config, PathsConfig::default());
    }

    #[test]
    fn test_load_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "migrations_dir = \"database/migrations\"\n",
        )
        .unwrap();

        let config = PathsConfig::load(dir.path()).unwrap();
        assert_eq!(config.migrations_dir, PathBuf::from("database/migrations"));
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "blade = \"maybe\"\n").unwrap();

        let err = PathsConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, GeneratorError::ConfigParse { .. }));
    }
}
