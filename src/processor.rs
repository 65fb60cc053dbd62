//! Pipeline orchestration for yaml-readme.
//! Finds and loads the data files, sorts and groups them as configured, and
//! renders the document.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::config::Config;
use crate::constants::DEFAULT_TEMPLATE;
use crate::error::Result;
use crate::loader::{find_files, load_records};
use crate::renderer::{banner, RenderData, TemplateRenderer};
use crate::sort::sort_records;

/// Reads the template file, falling back to the built-in table.
///
/// # Arguments
/// * `template_file` - Path of the configured template
///
/// # Returns
/// * `String` - The file's content, or `DEFAULT_TEMPLATE` if it cannot be read
///
/// # Notes
/// A read failure is logged as a warning and never fails the run.
pub fn load_template<P: AsRef<Path>>(template_file: P) -> String {
    let template_file = template_file.as_ref();
    match fs::read_to_string(template_file) {
        Ok(content) => content,
        Err(e) => {
            warn!(
                "failed to load template '{}', using the default one, error: {}",
                template_file.display(),
                e
            );
            DEFAULT_TEMPLATE.to_string()
        }
    }
}

/// Runs the whole pipeline for one configuration.
pub struct Processor<'a> {
    config: &'a Config,
    engine: &'a dyn TemplateRenderer,
}

impl<'a> Processor<'a> {
    /// Creates a new Processor instance.
    ///
    /// # Arguments
    /// * `config` - Options for this run
    /// * `engine` - Template engine used for the final render
    pub fn new(config: &'a Config, engine: &'a dyn TemplateRenderer) -> Self {
        Self { config, engine }
    }

    /// Produces the rendered document.
    ///
    /// # Flow
    /// 1. Resolves the input pattern; a malformed pattern matches no files
    /// 2. Loads every file, filling the flat list and the groups in one pass
    /// 3. Sorts the flat list; the groups keep file discovery order
    /// 4. Reads the template, or falls back to the default one
    /// 5. Renders the groups if grouping is on, otherwise the flat list
    /// 6. Prepends the banner if requested
    ///
    /// # Returns
    /// * `Result<String>` - The complete document, banner included
    ///
    /// # Errors
    /// * `Error::TemplateParseError` / `Error::TemplateRenderError` if the
    ///   template fails; nothing is returned unless rendering succeeds as a whole
    pub fn run(&self) -> Result<String> {
        let files = find_files(&self.config.pattern).unwrap_or_else(|e| {
            warn!("{}", e);
            Vec::new()
        });
        let mut loaded = load_records(&files, self.config.group_by.as_deref());
        debug!("Loaded {} record(s) from {} file(s).", loaded.items.len(), files.len());

        if let Some(spec) = &self.config.sort_by {
            debug!("Sorting by '{}', descending: {}.", spec.field, spec.descending);
            sort_records(&mut loaded.items, spec);
        }

        let template = load_template(&self.config.template_file);
        let data = match &loaded.groups {
            Some(groups) => RenderData::Groups { groups, items: &loaded.items },
            None => RenderData::Items(&loaded.items),
        };
        let body = self.engine.render(&template, data)?;

        if self.config.include_header {
            Ok(banner(&self.config.template_file) + &body)
        } else {
            Ok(body)
        }
    }
}
