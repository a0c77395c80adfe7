//! Compiled-in run settings.
//!
//! There is no config file: the root, the replacement rules, the allowed
//! extensions and the excluded path fragments all live here.

use serde::Serialize;

/// Tree rewritten when no root is given on the command line.
pub const ROOT_DIR: &str = "d:/Printing Price Pro/3D Print Price Calculator";

/// Ordered (search, replacement) literals. Only the first rule that matches a
/// file is applied to it.
pub const REPLACEMENTS: &[(&str, &str)] = &[
    (" * 3D Print Price Calculator", " * PolymagicPrice"),
    ("3d-print-price-calculator", "polymagicprice"),
];

/// File suffixes eligible for rewriting, dot included. Case-sensitive.
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    ".ts", ".tsx", ".js", ".jsx", ".css", ".html", ".md", ".json",
];

/// Any directory whose path contains one of these is pruned.
pub const EXCLUDED_FRAGMENTS: &[&str] = &["node_modules", ".git", "dist"];

/// Snapshot of the settings a run used, for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct Defaults {
    pub root: String,
    pub extensions: Vec<String>,
    pub excluded: Vec<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            root: ROOT_DIR.to_string(),
            extensions: ALLOWED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            excluded: EXCLUDED_FRAGMENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replacements_have_non_empty_search_literals() {
        assert!(REPLACEMENTS.iter().all(|(search, _)| !search.is_empty()));
    }

    #[test]
    fn extensions_carry_leading_dot() {
        assert!(ALLOWED_EXTENSIONS.iter().all(|ext| ext.starts_with('.')));
        assert_eq!(ALLOWED_EXTENSIONS.len(), 8);
    }
}
