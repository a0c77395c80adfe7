//! Path filters: excluded directory fragments and allowed file extensions.

use crate::defaults;
use std::collections::HashSet;
use std::path::Path;

// ============================================================================
// Exclusion set
// ============================================================================

/// Directory path fragments that prune a subtree.
///
/// Matching is a plain substring test on the whole path, not a path-segment
/// comparison: `dist` also excludes `mydist/` and `.git` also excludes
/// `.github/`.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    fragments: Vec<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fragments: fragments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(defaults::EXCLUDED_FRAGMENTS.iter().copied())
    }

    pub fn is_excluded(&self, dir: &Path) -> bool {
        let path = dir.to_string_lossy();
        self.fragments.iter().any(|f| path.contains(f.as_str()))
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// Extension filter
// ============================================================================

/// Extension of a file name, dot included.
///
/// Leading dots never start an extension, so `.json` and `..json` have none
/// while `a.min.js` yields `.js`.
pub fn file_extension(name: &str) -> Option<&str> {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    let dot = name[stem_start..].rfind('.')?;
    Some(&name[stem_start + dot..])
}

/// Set of accepted extensions. Case-sensitive, no normalization.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    allowed: HashSet<String>,
}

impl ExtensionFilter {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: extensions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(defaults::ALLOWED_EXTENSIONS.iter().copied())
    }

    pub fn accepts(&self, file_name: &str) -> bool {
        file_extension(file_name).is_some_and(|ext| self.allowed.contains(ext))
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::builtin()
    }
}
