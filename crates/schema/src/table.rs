//! Table name inference.
//!
//! The target table is read straight out of the migration name, so
//! `add_user_id_to_posts_table` lands on `posts` without any extra flag.

/// Placeholder written into the migration when no table name can be read
/// from the migration name. The developer edits it by hand afterwards.
pub const TABLE_PLACEHOLDER: &str = "TABLE";

/// Infer the table a migration targets from its name.
///
/// Three rules, in order:
///
/// 1. If some word is immediately followed by a literal `table` word,
///    that word is the table: `create_users_table` → `users`.
/// 2. Otherwise, with at least one underscore present, the last word is
///    the table: `add_user_id_to_posts` → `posts`.
/// 3. Otherwise the [`TABLE_PLACEHOLDER`] is returned.
pub fn infer_table_name(name: &str) -> String {
    let words: Vec<&str> = name.split('_').collect();

    for i in 1..words.len() {
        if words[i] == "table" && !words[i - 1].is_empty() {
            return words[i - 1].to_string();
        }
    }

    if name.contains('_') {
        if let Some(last) = words.iter().rev().find(|w| !w.is_empty()) {
            return (*last).to_string();
        }
    }

    TABLE_PLACEHOLDER.to_string()
}

// ============================================================================
// Tests
// ============================================================================
