//! Path helpers shared by the locator and the resolver.

use std::path::{Path, PathBuf};

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Extension suffix of a stored name: the text after the last path separator and
/// then after the last dot, without the dot. Empty when the name has no dot.
///
/// Unlike [`Path::extension`], a leading dot counts (`.htaccess` yields `htaccess`)
/// so that names behave the same whether they came from a client or from disk.
pub fn path_extension(name: &str) -> &str {
    let trimmed = name.trim_end_matches(is_separator);
    let basename = match trimmed.rfind(is_separator) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    };
    match basename.rfind('.') {
        Some(idx) => &basename[idx + 1..],
        None => "",
    }
}

/// Join a stored relative name onto a root, treating any leading separators in the
/// name as part of the relative path rather than as an absolute path.
pub fn join_relative(root: &Path, name: &str) -> PathBuf {
    root.join(name.trim_start_matches(is_separator))
}

/// Canonical form of `path`, or `path` itself when it cannot be resolved
/// (typically because it does not exist).
pub fn canonicalize_or_raw(path: PathBuf) -> PathBuf {
    std::fs::canonicalize(&path).unwrap_or(path)
}
