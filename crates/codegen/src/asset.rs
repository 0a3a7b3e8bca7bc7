//! Asset generation.
//!
//! Each argument is a file name routed by extension into the css or js
//! directory. Unrecognized extensions are collected as warnings and the
//! rest of the batch proceeds.

use laragen_core::{GeneratorError, GeneratorResult};
use laragen_schema::{AssetKind, AssetSpec};

use crate::{GeneratedFile, ScaffoldContext, relative_path};

/// Planned asset files plus warnings for the arguments that were skipped.
#[derive(Debug, Clone, Default)]
pub struct AssetBatch {
    /// Files to write, in argument order
    pub files: Vec<GeneratedFile>,

    /// One warning per skipped argument
    pub warnings: Vec<String>,
}

/// Route every asset argument, skipping unrecognized extensions.
pub fn generate_assets(names: &[String], ctx: &ScaffoldContext) -> GeneratorResult<AssetBatch> {
    if names.is_empty() {
        return Err(GeneratorError::missing_arguments(
            "please provide at least one asset file name",
        ));
    }

    let mut batch = AssetBatch::default();

    for name in names {
        match AssetSpec::classify(name) {
            Ok(spec) => batch.files.push(asset_file(&spec, ctx)),
            Err(err) => {
                tracing::warn!(asset = %name, "skipping asset argument");
                batch.warnings.push(err.to_string());
            }
        }
    }

    Ok(batch)
}

fn asset_file(spec: &AssetSpec, ctx: &ScaffoldContext) -> GeneratedFile {
    // A leading separator would re-root the join below
    let file_name = relative_path(&spec.file_name);

    match spec.kind {
        AssetKind::Css => GeneratedFile::css(
            ctx.paths.css_dir.join(&file_name),
            format!("/* {} */\n", file_name),
        ),
        AssetKind::Js => GeneratedFile::js(
            ctx.paths.js_dir.join(&file_name),
            format!("// {}\n", file_name),
        ),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FileKind;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_routes_by_extension() {
        let batch = generate_assets(
            &names(&["style.css", "app.js"]),
            &ScaffoldContext::default(),
        )
        .unwrap();

        assert_eq!(batch.files.len(), 2);
        assert_eq!(batch.files[0].path, PathBuf::from("public/css/style.css"));
        assert_eq!(batch.files[0].kind, FileKind::Css);
        assert_eq!(batch.files[1].path, PathBuf::from("public/js/app.js"));
        assert_eq!(batch.files[1].kind, FileKind::Js);
        assert!(batch.warnings.is_empty());
    }

    #[test]
    fn test_starter_content_names_the_file() {
        let batch = generate_assets(&names(&["style.css"]), &ScaffoldContext::default()).unwrap();
        assert_eq!(batch.files[0].content, "/* style.css */\n");
    }

    #[test]
    fn test_leading_separator_stays_under_the_asset_dir() {
        let batch = generate_assets(&names(&["/style.css"]), &ScaffoldContext::default()).unwrap();

        assert_eq!(batch.files[0].path, PathBuf::from("public/css/style.css"));
        assert_eq!(batch.files[0].content, "/* style.css */\n");
    }

    #[test]
    fn test_unknown_extension_is_skipped_with_warning() {
        let batch = generate_assets(
            &names(&["style.css", "notes.txt", "app.js"]),
            &ScaffoldContext::default(),
        )
        .unwrap();

        assert_eq!(batch.files.len(), 2);
        assert_eq!(batch.warnings.len(), 1);
        assert!(batch.warnings[0].contains("notes.txt"));
    }

    #[test]
    fn test_empty_batch_is_missing_arguments() {
        let err = generate_assets(&[], &ScaffoldContext::default()).unwrap_err();
        assert!(err.is_usage());
    }
}
