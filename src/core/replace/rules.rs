//! Replacement rules: ordered literal (search → replacement) pairs.

use crate::defaults;
use crate::error::{Error, Result};
use serde::Serialize;

/// A single literal substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplacementRule {
    pub search: String,
    pub replacement: String,
}

impl ReplacementRule {
    /// Build a rule. An empty search literal would match between every
    /// character, so it is rejected.
    pub fn new(search: impl Into<String>, replacement: impl Into<String>) -> Result<Self> {
        let search = search.into();
        if search.is_empty() {
            return Err(Error::validation_invalid_argument(
                "search",
                "Search literal must not be empty",
                None,
            ));
        }

        Ok(Self {
            search,
            replacement: replacement.into(),
        })
    }

    pub fn matches(&self, content: &str) -> bool {
        content.contains(&self.search)
    }

    /// Replace every non-overlapping occurrence, scanning left to right.
    pub fn apply(&self, content: &str) -> String {
        content.replace(&self.search, &self.replacement)
    }
}

/// Rules in priority order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<ReplacementRule>,
}

impl RuleSet {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self> {
        let rules = pairs
            .iter()
            .map(|(search, replacement)| ReplacementRule::new(*search, *replacement))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// The compiled-in rules from [`defaults::REPLACEMENTS`].
    pub fn builtin() -> Result<Self> {
        Self::from_pairs(defaults::REPLACEMENTS)
    }

    /// First rule whose search literal occurs in `content`, with its index.
    pub fn first_match(&self, content: &str) -> Option<(usize, &ReplacementRule)> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(content))
    }

    pub fn get(&self, index: usize) -> Option<&ReplacementRule> {
        self.rules.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReplacementRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
