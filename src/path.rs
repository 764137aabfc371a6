//! Path handling for the flat `path` column.
//!
//! Stored paths have no leading or trailing delimiter and no empty, `.` or
//! `..` segments. The empty string is the root.

use crate::error::{Result, SqlError};
use crate::schema::DELIMITER;

/// Normalize a caller-supplied path into its stored form.
///
/// - `\` is treated as a delimiter
/// - leading, trailing and repeated delimiters are dropped
/// - `.` segments are dropped and `..` pops the previous segment
///
/// A `..` that would climb above the root is rejected.
pub fn normalize(path: &str) -> Result<String> {
    let unified = path.replace('\\', "/");
    let mut parts: Vec<&str> = Vec::new();

    for segment in unified.split(DELIMITER) {
        match segment {
            "" | "." => continue,
            ".." => {
                if parts.pop().is_none() {
                    return Err(SqlError::invalid_path(path));
                }
            }
            _ => parts.push(segment),
        }
    }

    Ok(parts.join("/"))
}

/// Normalize and require a non-root path.
pub fn normalize_entry(path: &str) -> Result<String> {
    let normalized = normalize(path)?;
    if normalized.is_empty() {
        return Err(SqlError::invalid_path(path));
    }
    Ok(normalized)
}

/// Parent of a normalized path; `""` for top-level entries.
pub fn dirname(path: &str) -> &str {
    match path.rfind(DELIMITER) {
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// True when `path` is `root` or lies below it.
///
/// Respects segment boundaries: `docs2/file.txt` is not within `docs`.
pub fn is_within(path: &str, root: &str) -> bool {
    if root.is_empty() {
        return true;
    }
    match path.strip_prefix(root) {
        Some("") => true,
        Some(rest) => rest.starts_with(DELIMITER),
        None => false,
    }
}

/// True when `path` lies strictly below `root`.
pub fn is_descendant(path: &str, root: &str) -> bool {
    path != root && is_within(path, root)
}

/// Move `path` from under `from` to under `to`, keeping the suffix.
///
/// `from/x/y` rebased onto `to` becomes `to/x/y`. Callers must only pass
/// paths within `from`.
pub fn rebase(path: &str, from: &str, to: &str) -> String {
    let suffix = &path[from.len()..];
    if to.is_empty() {
        suffix.trim_start_matches(DELIMITER).to_string()
    } else {
        format!("{}{}", to, suffix)
    }
}

/// Ancestors of a path from nearest to farthest, excluding the root.
pub fn ancestors(path: &str) -> impl Iterator<Item = &str> {
    let mut current = path;
    std::iter::from_fn(move || {
        let parent = dirname(current);
        if parent.is_empty() {
            None
        } else {
            current = parent;
            Some(parent)
        }
    })
}

/// `LIKE` pattern matching everything strictly below `dir`.
///
/// `%`, `_` and `\` in the directory name are escaped with `\`; statements
/// using the pattern must declare that escape character.
pub fn descendant_pattern(dir: &str) -> String {
    let mut pattern = String::with_capacity(dir.len() + 2);
    for c in dir.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push(DELIMITER);
    pattern.push('%');
    pattern
}
