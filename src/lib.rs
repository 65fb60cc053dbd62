//! yaml-readme compiles many small per-item data files into one document.
//! It loads YAML (or JSON) records, optionally sorts and groups them, and
//! renders them through a MiniJinja template.

/// Command-line interface module
pub mod cli;

/// Run configuration passed through the pipeline
pub mod config;

/// Shared constants, including the built-in template
pub mod constants;

/// Error types and handling
pub mod error;

/// Grouping of records by a field value
pub mod group;

/// Data file discovery and loading
pub mod loader;

/// Logger setup
pub mod logger;

/// Pipeline orchestration
/// Combines all components to generate the final output
pub mod processor;

/// Normalized records and data formats
pub mod record;

/// Template rendering
pub mod renderer;

/// Stable ordering of records by a field
pub mod sort;

/// Tagged field values
pub mod value;
