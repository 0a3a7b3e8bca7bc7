//! View generation.
//!
//! View arguments are dotted paths in Laravel's `View::make` convention:
//! `book.admin.show` becomes `views/book/admin/show.blade.php`. The
//! configured layout decides between Blade and plain PHP extensions.

use laragen_core::{GeneratorError, GeneratorResult};

use crate::{FileKind, GeneratedFile, ScaffoldContext, relative_path};

/// Render one view template from a dotted path.
///
/// Empty segments from leading, trailing, or doubled dots are dropped, so
/// `.admin.show` lands under the views directory like `admin.show` does.
pub fn generate_view(dotted: &str, ctx: &ScaffoldContext) -> GeneratedFile {
    let relative = relative_path(&dotted.replace('.', "/"));

    let path = ctx
        .paths
        .views_dir
        .join(format!("{}.{}", relative, ctx.paths.view_extension()));

    let kind = if ctx.paths.blade {
        FileKind::Blade
    } else {
        FileKind::Php
    };

    let landing = ctx.target(ctx.paths.views_dir.join(&relative));
    let content = format!("This is the {} view.\n", landing.display());

    GeneratedFile::new(path, content, kind)
}

/// Render every requested view.
pub fn generate_views(dotted: &[String], ctx: &ScaffoldContext) -> GeneratorResult<Vec<GeneratedFile>> {
    if dotted.is_empty() {
        return Err(GeneratorError::missing_arguments(
            "please provide at least one view path",
        ));
    }

    Ok(dotted.iter().map(|d| generate_view(d, ctx)).collect())
}

// ============================================================================
// Tests
// ============================================================================
