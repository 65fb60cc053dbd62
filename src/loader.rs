//! Data file discovery and loading.
//! Resolves the input glob to a list of files and turns each file into a
//! record, skipping files that cannot be read or parsed.

use std::fs;
use std::path::{Path, PathBuf};

use globset::GlobBuilder;
use log::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::group::GroupIndex;
use crate::record::Record;

const GLOB_META: [char; 4] = ['*', '?', '[', '{'];

fn has_glob_meta(s: &str) -> bool {
    s.contains(GLOB_META)
}

/// Splits a pattern into the directory to walk and the walk depth needed.
///
/// The directory is the longest leading run of components without glob
/// characters. The depth is `None` when the rest contains `**`.
fn split_pattern(pattern: &str) -> (PathBuf, Option<usize>) {
    let components: Vec<&str> = pattern.split('/').collect();
    let literal = components.iter().take_while(|c| !has_glob_meta(c)).count();
    let rest = &components[literal..];

    let base = components[..literal].join("/");
    let base = if base.is_empty() && pattern.starts_with('/') {
        PathBuf::from("/")
    } else if base.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(base)
    };

    let depth = if rest.iter().any(|c| c.contains("**")) { None } else { Some(rest.len()) };
    (base, depth)
}

/// Resolves a glob pattern to the matching files, in lexical order.
///
/// `*`, `?` and `[...]` never match a path separator; `**` spans directories.
/// A pattern without glob characters matches itself if the file exists.
///
/// # Arguments
/// * `pattern` - Glob pattern, relative to the working directory or absolute
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Matching files; empty if nothing matched
///
/// # Errors
/// * `Error::PatternError` if the pattern is malformed
pub fn find_files(pattern: &str) -> Result<Vec<PathBuf>> {
    if !has_glob_meta(pattern) {
        let path = PathBuf::from(pattern);
        return Ok(if path.is_file() { vec![path] } else { Vec::new() });
    }

    let matcher = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|source| Error::PatternError { pattern: pattern.to_string(), source })?
        .compile_matcher();

    let (base, depth) = split_pattern(pattern);
    if !base.is_dir() {
        debug!("Directory '{}' does not exist, no files matched.", base.display());
        return Ok(Vec::new());
    }

    let mut walker = WalkDir::new(&base).min_depth(1).sort_by_file_name();
    if let Some(depth) = depth {
        walker = walker.max_depth(depth);
    }

    let relative_to_cwd = base == Path::new(".") && !pattern.starts_with("./");
    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("{}", Error::WalkError(e));
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        let path = if relative_to_cwd {
            entry.path().strip_prefix(".").unwrap_or(entry.path()).to_path_buf()
        } else {
            entry.path().to_path_buf()
        };
        if matcher.is_match(&path) {
            files.push(path);
        }
    }

    debug!("Pattern '{}' matched {} file(s).", pattern, files.len());
    Ok(files)
}

/// Reads and parses a single data file.
///
/// # Errors
/// * `Error::IoError` if the file cannot be read
/// * Any error from [`Record::parse`]
pub fn load_record<P: AsRef<Path>>(path: P) -> Result<Record> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    Record::parse(path, &content)
}

/// Result of the load pass: the flat record list and, when grouping was
/// requested, the records grouped in the order the files were found.
#[derive(Debug, Default)]
pub struct LoadedRecords {
    pub items: Vec<Record>,
    pub groups: Option<GroupIndex>,
}

/// Loads every file in order.
///
/// Files that fail to read or parse are reported and skipped. Records marked
/// `ignore: true` are dropped before they reach either collection.
///
/// # Arguments
/// * `paths` - Data files in discovery order
/// * `group_by` - Field to group by, if grouping is on
///
/// # Returns
/// * `LoadedRecords` - The flat list, plus the groups when `group_by` is set
pub fn load_records<P: AsRef<Path>>(paths: &[P], group_by: Option<&str>) -> LoadedRecords {
    let mut loaded = LoadedRecords {
        items: Vec::new(),
        groups: group_by.map(GroupIndex::new),
    };

    for path in paths {
        let path = path.as_ref();
        debug!("Loading '{}'.", path.display());

        let record = match load_record(path) {
            Ok(record) => record,
            Err(Error::IoError(e)) => {
                warn!("failed to read file [{}], error: {}", path.display(), e);
                continue;
            }
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };

        if record.is_ignored() {
            debug!("Skipping '{}', marked as ignored.", path.display());
            continue;
        }

        if let Some(groups) = loaded.groups.as_mut() {
            if !groups.insert(&record) {
                debug!(
                    "'{}' has no usable '{}' value, left out of groups.",
                    path.display(),
                    groups.field()
                );
            }
        }
        loaded.items.push(record);
    }

    loaded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pattern() {
        assert_eq!(split_pattern("items/*.yaml"), (PathBuf::from("items"), Some(1)));
        assert_eq!(split_pattern("*.yaml"), (PathBuf::from("."), Some(1)));
        assert_eq!(split_pattern("a/b/*/c/*.yml"), (PathBuf::from("a/b"), Some(3)));
        assert_eq!(split_pattern("docs/**/*.yaml"), (PathBuf::from("docs"), None));
        assert_eq!(split_pattern("/srv/data/*.yaml"), (PathBuf::from("/srv/data"), Some(1)));
        assert_eq!(split_pattern("/*.yaml"), (PathBuf::from("/"), Some(1)));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = find_files("items/[.yaml").unwrap_err();
        assert!(matches!(err, Error::PatternError { .. }));
    }

    #[test]
    fn test_missing_directory_matches_nothing() {
        let files = find_files("definitely-not-a-directory/*.yaml").unwrap();
        assert!(files.is_empty());
    }
}
