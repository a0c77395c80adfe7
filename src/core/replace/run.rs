//! Run controller: walk, filter, rewrite, count.

use super::filter::{ExclusionSet, ExtensionFilter};
use super::rewrite::{rewrite_file, RewriteOutcome};
use super::rules::RuleSet;
use super::walk::walk;
use crate::error::Result;
use serde::Serialize;
use std::path::Path;

/// Everything a run needs besides the root.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub rules: RuleSet,
    pub extensions: ExtensionFilter,
    pub exclusions: ExclusionSet,
}

impl RunConfig {
    /// Compiled-in rules, extensions and exclusions.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            rules: RuleSet::builtin()?,
            extensions: ExtensionFilter::builtin(),
            exclusions: ExclusionSet::builtin(),
        })
    }
}

/// Per-file progress, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileEvent {
    Updated { path: String, rule: usize },
    Failed { path: String, message: String },
}

impl FileEvent {
    pub fn path(&self) -> &str {
        match self {
            FileEvent::Updated { path, .. } | FileEvent::Failed { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Files rewritten.
    pub updated: usize,
    /// Candidate files inspected.
    pub scanned: usize,
    /// Candidate files that could not be read or written.
    pub failed: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub summary: RunSummary,
    pub events: Vec<FileEvent>,
}

impl RunReport {
    pub fn updated_paths(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            FileEvent::Updated { path, .. } => Some(path.as_str()),
            FileEvent::Failed { .. } => None,
        })
    }
}

/// Process the whole tree under `root`, handing each event to `on_event` as
/// it happens.
///
/// File-level failures are reported and counted but never abort the run.
/// Only an unusable root is fatal.
pub fn run_with<F>(root: &Path, config: &RunConfig, mut on_event: F) -> Result<RunSummary>
where
    F: FnMut(&FileEvent),
{
    let mut summary = RunSummary::default();

    for entry in walk(root, config.exclusions.clone())? {
        for (path, name) in entry.file_paths() {
            if !config.extensions.accepts(&name) {
                continue;
            }
            summary.scanned += 1;

            let display = path.display().to_string();
            let event = match rewrite_file(&path, &config.rules) {
                Ok(RewriteOutcome::Updated { rule_index }) => {
                    summary.updated += 1;
                    FileEvent::Updated {
                        path: display,
                        rule: rule_index,
                    }
                }
                Ok(RewriteOutcome::Unchanged) => continue,
                Err(err) => {
                    summary.failed += 1;
                    FileEvent::Failed {
                        path: display,
                        message: err.message,
                    }
                }
            };
            on_event(&event);
        }
    }

    Ok(summary)
}

/// Like [`run_with`], collecting events into a report.
pub fn run(root: &Path, config: &RunConfig) -> Result<RunReport> {
    let mut events = Vec::new();
    let summary = run_with(root, config, |event| events.push(event.clone()))?;
    Ok(RunReport { summary, events })
}
