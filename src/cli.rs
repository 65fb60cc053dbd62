//! Command-line interface implementation for yaml-readme.
//! Provides argument parsing using clap.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::constants::{DEFAULT_PATTERN, DEFAULT_TEMPLATE_FILE};

/// Command-line arguments structure for yaml-readme.
#[derive(Parser, Debug)]
#[command(
    name = "yaml-readme",
    author,
    version,
    about = "A helper to generate a README file from a template and a set of YAML files",
    long_about = None
)]
pub struct Args {
    /// The glob pattern used to find the data files
    #[arg(short, long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// The template file, written in MiniJinja (Jinja2) syntax
    #[arg(short, long, default_value = DEFAULT_TEMPLATE_FILE)]
    pub template: PathBuf,

    /// Include a notice header on the top of the generated file
    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub include_header: bool,

    /// Sort the data descending by this field, or ascending with a '!' prefix.
    /// For example: --sort-by '!year'
    #[arg(long, value_name = "FIELD", default_value = "")]
    pub sort_by: String,

    /// Group the data by this field; the template then receives `groups`
    #[arg(long, value_name = "FIELD", default_value = "")]
    pub group_by: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    Args::parse()
}
