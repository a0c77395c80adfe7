//! Bulk literal find-and-replace across a directory tree.
//!
//! Walks the tree top-down, prunes directories whose path contains an
//! excluded fragment, keeps files with an allowed extension, and rewrites
//! each one with the first replacement rule that matches it.

mod filter;
mod rewrite;
mod rules;
mod run;
mod walk;

pub use filter::{file_extension, ExclusionSet, ExtensionFilter};
pub use rewrite::{rewrite_file, RewriteOutcome};
pub use rules::{ReplacementRule, RuleSet};
pub use run::{run, run_with, FileEvent, RunConfig, RunReport, RunSummary};
pub use walk::{walk, WalkEntry, Walker};
