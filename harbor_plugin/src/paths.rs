//! Path comparison helpers
//!
//! Environment prefixes arrive from configuration files, environment
//! variables, and command lines, so the same directory can show up under
//! several spellings. Comparisons go through the filesystem when possible
//! and fall back to a lexical component comparison otherwise.

use std::path::Path;

/// Check whether two paths refer to the same location.
///
/// Both paths are canonicalized before comparison; if either cannot be
/// canonicalized (for example, it does not exist yet) the comparison falls
/// back to comparing normalized components.
pub fn paths_equal(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a.components().eq(b.components()),
    }
}
