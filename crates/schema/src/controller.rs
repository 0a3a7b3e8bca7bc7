//! Controller specifications.
//!
//! `laragen controller admin index show:post restful` describes one
//! controller class plus its methods. The literal token `restful` is a
//! flag, not a method, and may appear anywhere in the list.

use laragen_core::{GeneratorError, GeneratorResult, capitalize_words, normalize, pluralize};
use serde::{Deserialize, Serialize};

// ============================================================================
// MethodSpec
// ============================================================================

/// One controller method, optionally pinned to an HTTP verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSpec {
    /// Method name, e.g. "index"
    pub name: String,

    /// Explicit HTTP verb, e.g. "post" in "index:post"
    pub verb: Option<String>,
}

impl MethodSpec {
    /// Parse a `name` or `name:verb` token.
    ///
    /// Anything past the second segment is ignored, and an empty verb
    /// segment counts as no verb at all, so `index:` equals `index`.
    pub fn parse(token: &str) -> Self {
        let mut parts = token.split(':');
        let name = parts.next().unwrap_or_default();
        let verb = parts.next().filter(|v| !v.is_empty());

        Self {
            name: name.to_string(),
            verb: verb.map(str::to_string),
        }
    }

    /// The function name as it appears in the class body.
    ///
    /// An explicit verb always wins: `index:post` becomes `post_index`.
    /// Without one, restful controllers default to `get_`, plain
    /// controllers to `action_`.
    pub fn handler_name(&self, restful: bool) -> String {
        match &self.verb {
            Some(verb) => format!("{}_{}", verb, self.name),
            None if restful => format!("get_{}", self.name),
            None => format!("action_{}", self.name),
        }
    }
}

// ============================================================================
// ControllerSpec
// ============================================================================

/// A fully resolved controller, ready for code generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerSpec {
    /// Pluralized snake_case name, e.g. "admins"
    pub name: String,

    /// Whether the class routes through HTTP verb prefixes
    pub restful: bool,

    /// Methods in argument order, `restful` flag removed
    pub methods: Vec<MethodSpec>,
}

impl ControllerSpec {
    /// Resolve a controller name and method tokens.
    pub fn from_args(name: &str, tokens: &[String]) -> GeneratorResult<Self> {
        if name.is_empty() {
            return Err(GeneratorError::missing_arguments(
                "please provide a name for the controller",
            ));
        }

        let restful = tokens.iter().any(|t| t == "restful");
        let methods = tokens
            .iter()
            .filter(|t| *t != "restful")
            .map(|t| MethodSpec::parse(t))
            .collect();

        Ok(Self {
            name: pluralize(&normalize(name)),
            restful,
            methods,
        })
    }

    /// PHP class name, e.g. "Admins_Controller".
    pub fn class_name(&self) -> String {
        format!("{}_Controller", capitalize_words(&self.name))
    }

    /// File name without extension, e.g. "admins".
    pub fn file_stem(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_method_parse_plain() {
        let m = MethodSpec::parse("index");
        assert_eq!(m.name, "index");
        assert_eq!(m.verb, None);
    }

    #[test]
    fn test_method_parse_with_verb() {
        let m = MethodSpec::parse("update:put");
        assert_eq!(m.name, "update");
        assert_eq!(m.verb.as_deref(), Some("put"));
    }

    #[test]
    fn test_method_parse_empty_verb() {
        let m = MethodSpec::parse("index:");
        assert_eq!(m.verb, None);
    }

    #[test]
    fn test_method_parse_ignores_extra_segments() {
        let m = MethodSpec::parse("index:post:put");
        assert_eq!(m.name, "index");
        assert_eq!(m.verb.as_deref(), Some("post"));
        assert_eq!(m.handler_name(false), "post_index");
    }

    #[test]
    fn test_handler_names() {
        assert_eq!(MethodSpec::parse("index").handler_name(false), "action_index");
        assert_eq!(MethodSpec::parse("index").handler_name(true), "get_index");
        assert_eq!(MethodSpec::parse("index:post").handler_name(false), "post_index");
        assert_eq!(MethodSpec::parse("index:post").handler_name(true), "post_index");
    }

    #[test]
    fn test_controller_name_is_pluralized() {
        let spec = ControllerSpec::from_args("Admin", &[]).unwrap();
        assert_eq!(spec.name, "admins");
        assert_eq!(spec.class_name(), "Admins_Controller");
        assert_eq!(spec.file_stem(), "admins");
    }

    #[test]
    fn test_multi_word_controller_name() {
        let spec = ControllerSpec::from_args("BlogPost", &[]).unwrap();
        assert_eq!(spec.name, "blog_posts");
        assert_eq!(spec.class_name(), "Blog_Posts_Controller");
    }

    #[test]
    fn test_restful_flag_is_extracted_anywhere() {
        let spec =
            ControllerSpec::from_args("admin", &tokens(&["index", "restful", "show"])).unwrap();
        assert!(spec.restful);
        assert_eq!(spec.methods.len(), 2);
        assert_eq!(spec.methods[0].name, "index");
        assert_eq!(spec.methods[1].name, "show");
    }

    #[test]
    fn test_without_restful_flag() {
        let spec = ControllerSpec::from_args("admin", &tokens(&["index"])).unwrap();
        assert!(!spec.restful);
    }

    #[test]
    fn test_empty_name_is_missing_arguments() {
        let err = ControllerSpec::from_args("", &[]).unwrap_err();
        assert!(err.is_usage());
    }
}
