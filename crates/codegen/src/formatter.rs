//! Cosmetic formatting for generated PHP sources.
//!
//! [`format_source`] makes two passes: first it breaks statements onto
//! their own lines (after `;` and `{`, before `}`), then it rebuilds the
//! leading indentation from brace depth using tabs. Only whitespace ever
//! changes, so running the formatter twice yields the same text as running
//! it once.
//!
//! The scan is textual and does not track string literals, which is fine
//! for generated sources where literals are bare identifiers like table
//! and column names.

/// Normalize line breaks and indentation of a PHP source string.
pub fn format_source(source: &str) -> String {
    let normalized = source.replace("\r\n", "\n");
    reindent(&break_lines(&normalized))
}

/// Ensure every statement terminator and brace starts or ends a line.
fn break_lines(source: &str) -> String {
    let mut out = String::with_capacity(source.len() + 64);
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ';' | '{' => {
                out.push(c);
                while matches!(chars.peek(), Some(' ') | Some('\t')) {
                    chars.next();
                }
                match chars.peek() {
                    None | Some('\n') => {}
                    _ => out.push('\n'),
                }
            }
            '}' => {
                // A closer starts its own line
                if !out.is_empty() && !out.ends_with('\n') {
                    while out.ends_with(' ') || out.ends_with('\t') {
                        out.pop();
                    }
                    if !out.ends_with('\n') {
                        out.push('\n');
                    }
                }
                out.push('}');
                while matches!(chars.peek(), Some(' ') | Some('\t')) {
                    chars.next();
                }
                // `});` style tails stay attached to the closer
                match chars.peek() {
                    None | Some('\n') | Some(')') | Some(';') | Some(',') => {}
                    _ => out.push('\n'),
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Rewrite the leading whitespace of every line from brace depth.
fn reindent(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut depth: usize = 0;

    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            out.push('\n');
            continue;
        }

        let effective = if trimmed.starts_with('}') {
            depth.saturating_sub(1)
        } else {
            depth
        };
        for _ in 0..effective {
            out.push('\t');
        }
        out.push_str(trimmed);
        out.push('\n');

        for c in trimmed.chars() {
            match c {
                '{' => depth += 1,
                '}' => depth = depth.saturating_sub(1),
                _ => {}
            }
        }
    }

    out
}

// ============================================================================
// Tests
// ============================================================================
