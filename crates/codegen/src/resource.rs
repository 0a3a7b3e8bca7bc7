//! Resource generation.
//!
//! A resource is the bundle: one controller, one view per method, and one
//! model. `laragen resource user index show` yields
//! `controllers/users.php`, `views/user/index.blade.php`,
//! `views/user/show.blade.php`, and `models/user.php`.

use std::collections::HashSet;

use laragen_core::{GeneratorError, GeneratorResult, normalize};
use laragen_schema::ControllerSpec;

use crate::controller::generate_controller;
use crate::model::generate_model;
use crate::view::generate_view;
use crate::{GeneratedFile, ScaffoldContext};

/// Plan the full controller / views / model bundle, in that order.
///
/// Views are named after the method and live under the singular resource
/// name; the `restful` flag and duplicate method names (e.g. `index` plus
/// `index:post`) produce a single view.
pub fn generate_resource(
    name: &str,
    tokens: &[String],
    ctx: &ScaffoldContext,
) -> GeneratorResult<Vec<GeneratedFile>> {
    if name.is_empty() {
        return Err(GeneratorError::missing_arguments(
            "please provide a name for the resource",
        ));
    }

    let controller = ControllerSpec::from_args(name, tokens)?;
    let singular = normalize(name);

    let mut files = vec![generate_controller(&controller, ctx)];

    let mut seen: HashSet<&str> = HashSet::new();
    for method in &controller.methods {
        if seen.insert(&method.name) {
            files.push(generate_view(&format!("{}.{}", singular, method.name), ctx));
        }
    }

    files.push(generate_model(name, ctx)?);

    Ok(files)
}

// ============================================================================
// Tests
// ============================================================================
