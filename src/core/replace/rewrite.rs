//! In-place rewriting of a single file.

use super::rules::RuleSet;
use crate::error::Result;
use crate::utils::io;
use std::path::Path;

/// What happened to a file that was read successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// Rewritten with the rule at this index.
    Updated { rule_index: usize },
    /// No rule matched; the file was not touched.
    Unchanged,
}

impl RewriteOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, RewriteOutcome::Updated { .. })
    }
}

/// Apply the first matching rule to the file at `path`.
///
/// Rules are tried in order and only the first one whose search literal
/// occurs in the content is applied, even if later rules would also match.
/// Files with no match are never written.
pub fn rewrite_file(path: &Path, rules: &RuleSet) -> Result<RewriteOutcome> {
    let content = io::read_text(path)?;

    let Some((rule_index, rule)) = rules.first_match(&content) else {
        return Ok(RewriteOutcome::Unchanged);
    };

    io::write_text(path, &rule.apply(&content))?;
    Ok(RewriteOutcome::Updated { rule_index })
}
