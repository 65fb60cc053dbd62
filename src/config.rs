//! Run configuration for yaml-readme.
//! Everything a run needs is collected here once and passed down explicitly.

use std::path::PathBuf;

use crate::cli::Args;
use crate::constants::{DEFAULT_PATTERN, DEFAULT_TEMPLATE_FILE};
use crate::sort::SortSpec;

/// Options for one run of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Glob selecting the data files
    pub pattern: String,
    /// Template file; the built-in table is used when it cannot be read
    pub template_file: PathBuf,
    /// Whether to prepend the attribution banner
    pub include_header: bool,
    /// Sort applied to the flat record list
    pub sort_by: Option<SortSpec>,
    /// Field to group by; switches the template data to `groups`
    pub group_by: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            template_file: PathBuf::from(DEFAULT_TEMPLATE_FILE),
            include_header: true,
            sort_by: None,
            group_by: None,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            pattern: args.pattern,
            template_file: args.template,
            include_header: args.include_header,
            sort_by: SortSpec::parse(&args.sort_by),
            group_by: Some(args.group_by).filter(|field| !field.is_empty()),
        }
    }
}
