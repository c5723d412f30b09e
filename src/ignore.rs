//! Exclusion patterns for the tree walk.
//! Paths matching any of the configured globs are left out of the
//! embedded file system, similar to .gitignore functionality.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

/// Compiles the exclusion globs into a single matcher.
///
/// # Arguments
/// * `patterns` - Glob patterns, matched against paths relative to the root directory
///
/// # Returns
/// * `Result<GlobSet>` - Set of compiled glob patterns for path matching
///
/// # Notes
/// - An empty pattern list yields an empty GlobSet that matches nothing
/// - Invalid patterns will result in an IgnorePatternError
///
/// # Example
/// ```
/// let set = codefs::ignore::build_exclude_set(&["*.map", "drafts/**"]).unwrap();
/// assert!(set.is_match("js/app.js.map"));
/// assert!(!set.is_match("index.html"));
/// ```
pub fn build_exclude_set<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        debug!("Excluding paths matching '{pattern}'");
        builder.add(Glob::new(pattern).map_err(|e| {
            Error::IgnorePatternError(format!("invalid pattern '{pattern}': {e}"))
        })?);
    }
    builder
        .build()
        .map_err(|e| Error::IgnorePatternError(format!("pattern set loading failed: {e}")))
}
