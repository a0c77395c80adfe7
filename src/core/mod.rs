pub mod defaults;
pub mod error;
pub mod replace;

pub use error::{Error, ErrorCode, Result};
pub use replace::{
    file_extension, rewrite_file, run, run_with, walk, ExclusionSet, ExtensionFilter, FileEvent,
    ReplacementRule, RewriteOutcome, RuleSet, RunConfig, RunReport, RunSummary, WalkEntry, Walker,
};
