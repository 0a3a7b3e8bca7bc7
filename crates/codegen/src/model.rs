//! Model generation.
//!
//! Models are bare Eloquent skeletons; everything interesting lives on the
//! base class, so the generated file is a naming exercise.

use laragen_core::{GeneratorError, GeneratorResult, capitalize_words, normalize};

use crate::{GeneratedFile, ScaffoldContext};

/// Render an Eloquent model class for the given name.
pub fn generate_model(name: &str, ctx: &ScaffoldContext) -> GeneratorResult<GeneratedFile> {
    if name.is_empty() {
        return Err(GeneratorError::missing_arguments(
            "please provide a name for the model",
        ));
    }

    let stem = normalize(name);
    let class_name = capitalize_words(&stem);

    let content = format!("<?php\n\nclass {} extends Eloquent\n{{\n\n}}\n", class_name);

    let path = ctx
        .paths
        .models_dir
        .join(format!("{}.{}", stem, ctx.paths.extension));

    tracing::debug!(class = %class_name, "assembled model");

    Ok(GeneratedFile::php(path, content))
}

// ============================================================================
// Tests
// ============================================================================
