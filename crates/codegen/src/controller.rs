//! Controller generation.
//!
//! Renders a [`ControllerSpec`] into a class extending `Base_Controller`
//! with one empty stub per method. Restful controllers carry the
//! `public $restful = true;` property and default their unprefixed
//! methods to `get_`.

use laragen_schema::ControllerSpec;

use crate::{GeneratedFile, ScaffoldContext};

/// Render the controller class described by a [`ControllerSpec`].
pub fn generate_controller(spec: &ControllerSpec, ctx: &ScaffoldContext) -> GeneratedFile {
    let mut sections: Vec<String> = Vec::new();

    if spec.restful {
        sections.push("\tpublic $restful = true;".to_string());
    }

    for method in &spec.methods {
        sections.push(format!(
            "\tpublic function {}()\n\t{{\n\n\t}}",
            method.handler_name(spec.restful)
        ));
    }

    let body = if sections.is_empty() {
        "\n".to_string()
    } else {
        format!("{}\n", sections.join("\n\n"))
    };

    let content = format!(
        "<?php\n\nclass {} extends Base_Controller\n{{\n{}}}\n",
        spec.class_name(),
        body
    );

    let path = ctx
        .paths
        .controllers_dir
        .join(format!("{}.{}", spec.file_stem(), ctx.paths.extension));

    tracing::debug!(class = %spec.class_name(), "assembled controller");

    GeneratedFile::php(path, content)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn spec(name: &str, tokens: &[&str]) -> ControllerSpec {
        ControllerSpec::from_args(name, &tokens.iter().map(|t| t.to_string()).collect::<Vec<_>>())
            .unwrap()
    }

    #[test]
    fn test_empty_controller_source() {
        let file = generate_controller(&spec("Admin", &[]), &ScaffoldContext::default());

        assert_eq!(
            file.content,
            "<?php\n\nclass Admins_Controller extends Base_Controller\n{\n\n}\n"
        );
        assert_eq!(
            file.path,
            PathBuf::from("application/controllers/admins.php")
        );
    }

    #[test]
    fn test_plain_methods_use_action_prefix() {
        let file = generate_controller(
            &spec("admin", &["index", "show"]),
            &ScaffoldContext::default(),
        );

        assert!(file.content.contains("public function action_index()"));
        assert!(file.content.contains("public function action_show()"));
        assert!(!file.content.contains("$restful"));
    }

    #[test]
    fn test_restful_controller() {
        let file = generate_controller(
            &spec("admin", &["index", "index:post", "update:put", "restful"]),
            &ScaffoldContext::default(),
        );

        assert!(file.content.contains("public $restful = true;"));
        assert!(file.content.contains("public function get_index()"));
        assert!(file.content.contains("public function post_index()"));
        assert!(file.content.contains("public function put_update()"));
        assert!(!file.content.contains("action_"));
    }

    #[test]
    fn test_method_stubs_have_empty_bodies() {
        let file = generate_controller(&spec("admin", &["index"]), &ScaffoldContext::default());
        assert!(
            file.content
                .contains("\tpublic function action_index()\n\t{\n\n\t}\n")
        );
    }

    #[test]
    fn test_custom_controllers_dir() {
        let paths = laragen_core::PathsConfig::new().with_controllers_dir("app/http");
        let ctx = ScaffoldContext::new(paths);
        let file = generate_controller(&spec("admin", &[]), &ctx);
        assert_eq!(file.path, PathBuf::from("app/http/admins.php"));
    }
}
