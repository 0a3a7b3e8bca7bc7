//! Naming rules shared by every generator.
//!
//! Laravel class and file names are built from underscore-separated words:
//! a migration named `create_users_table` becomes class `Create_Users_Table`
//! in file `<timestamp>_create_users_table.php`. This module holds the word
//! casing, normalization, and pluralization helpers behind those names.

use heck::ToSnakeCase;

/// Convert a name to `snake_case` (e.g. "BlogPost" → "blog_post").
pub fn normalize(name: &str) -> String {
    name.to_snake_case()
}

/// Capitalize each underscore-separated word, keeping the separators
/// (e.g. "create_users_table" → "Create_Users_Table").
///
/// Characters after the first of each word are left untouched, so mixed
/// input like "fooBar_baz" becomes "FooBar_Baz".
pub fn capitalize_words(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("_")
}

/// Pluralize a snake_case word with simple English heuristics.
pub fn pluralize(word: &str) -> String {
    let s = word.to_snake_case();
    if s.ends_with('s')
        || s.ends_with('x')
        || s.ends_with("ch")
        || s.ends_with("sh")
        || s.ends_with("ss")
    {
        format!("{}es", s)
    } else if s.ends_with('y')
        && !s.ends_with("ey")
        && !s.ends_with("ay")
        && !s.ends_with("oy")
        && !s.ends_with("uy")
    {
        format!("{}ies", &s[..s.len() - 1])
    } else {
        format!("{}s", s)
    }
}

// ============================================================================
// Tests
// ============================================================================
