use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use rebrand::defaults::{self, Defaults};
use rebrand::{log_status, FileEvent, RuleSet, RunConfig, RunSummary};

use crate::commands::{CmdResult, GlobalArgs};
use crate::output;

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Directory to rewrite (defaults to the built-in project root)
    #[arg(value_name = "ROOT")]
    pub root: Option<String>,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum RunOutput {
    #[serde(rename = "rebrand.run")]
    Run {
        settings: Defaults,
        rules: RuleSet,
        summary: RunSummary,
        updated: Vec<String>,
        errors: Vec<FileErrorSummary>,
    },
}

impl RunOutput {
    pub fn summary(&self) -> RunSummary {
        match self {
            RunOutput::Run { summary, .. } => *summary,
        }
    }
}

#[derive(Serialize)]
pub struct FileErrorSummary {
    pub path: String,
    pub message: String,
}

/// Resolve the root argument, falling back to the built-in root.
pub fn resolve_root(root: Option<&str>) -> PathBuf {
    let raw = root.unwrap_or(defaults::ROOT_DIR);
    PathBuf::from(shellexpand::tilde(raw).to_string())
}

/// Text line for a single file event.
pub fn event_line(event: &FileEvent) -> String {
    match event {
        FileEvent::Updated { path, .. } => format!("Updated: {}", path),
        FileEvent::Failed { path, message } => format!("Error processing {}: {}", path, message),
    }
}

pub fn summary_line(summary: &RunSummary) -> String {
    format!("Total files updated: {}", summary.updated)
}

pub fn run(args: RunArgs, global: &GlobalArgs) -> CmdResult<RunOutput> {
    let root = resolve_root(args.root.as_deref());
    let config = RunConfig::builtin()?;

    log_status!("rebrand", "Scanning {}", root.display());

    let mut updated = Vec::new();
    let mut errors = Vec::new();
    let summary = rebrand::run_with(&root, &config, |event| {
        if !global.json {
            if let Err(err) = output::print_line(&event_line(event)) {
                log_status!("output", "Failed to write progress line: {}", err);
            }
        }
        match event {
            FileEvent::Updated { path, .. } => updated.push(path.clone()),
            FileEvent::Failed { path, message } => errors.push(FileErrorSummary {
                path: path.clone(),
                message: message.clone(),
            }),
        }
    })?;

    log_status!(
        "rebrand",
        "Scanned {} file(s), {} failed",
        summary.scanned,
        summary.failed
    );

    Ok((
        RunOutput::Run {
            settings: Defaults {
                root: root.display().to_string(),
                ..Defaults::default()
            },
            rules: config.rules,
            summary,
            updated,
            errors,
        },
        0,
    ))
}
