//! Template rendering for yaml-readme.
//! Binds either the flat record list or the grouped records into a MiniJinja
//! template and produces the final document text.

use std::path::Path;

use minijinja::{context, AutoEscape, Environment};

use crate::constants::PROJECT_URL;
use crate::error::{Error, Result};
use crate::group::GroupIndex;
use crate::record::Record;

/// Data bound into the template for one run.
#[derive(Debug, Clone, Copy)]
pub enum RenderData<'a> {
    /// Flat record list, bound as `items`
    Items(&'a [Record]),
    /// Grouped records, bound as `groups`; the flat list stays bound as `items`
    Groups {
        groups: &'a GroupIndex,
        items: &'a [Record],
    },
}

impl RenderData<'_> {
    /// Builds the template context. The active shape is also bound as `data`.
    ///
    /// `items` is bound in both shapes so the built-in table still lists the
    /// records when grouping is on.
    pub fn context(&self) -> minijinja::Value {
        match self {
            RenderData::Items(items) => {
                let items = minijinja::Value::from_serialize(items);
                context! { items => items.clone(), data => items }
            }
            RenderData::Groups { groups, items } => {
                let groups = minijinja::Value::from_serialize(groups);
                let items = minijinja::Value::from_serialize(items);
                context! { groups => groups.clone(), items => items, data => groups }
            }
        }
    }
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given data.
    ///
    /// # Errors
    /// * `Error::TemplateParseError` if the template is not valid syntax
    /// * `Error::TemplateRenderError` if executing the template fails
    fn render(&self, template: &str, data: RenderData<'_>) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
///
/// Output is plain text/Markdown, so auto-escaping is off regardless of the
/// template file's extension, and the template's trailing newline is kept.
#[derive(Debug, Default)]
pub struct MiniJinjaRenderer {}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        Self {}
    }

    fn environment<'source>(&self) -> Environment<'source> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, data: RenderData<'_>) -> Result<String> {
        let env = self.environment();
        let tmpl = env.template_from_str(template).map_err(Error::TemplateParseError)?;
        tmpl.render(data.context()).map_err(Error::TemplateRenderError)
    }
}

/// Attribution line placed above the rendered document.
///
/// Names the template file by its base name and ends with a blank line.
pub fn banner<P: AsRef<Path>>(template_file: P) -> String {
    let name = template_file
        .as_ref()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!(
        "> This file was generated by [{name}]({name}) via [yaml-readme]({PROJECT_URL}), please don't edit it directly!\n\n"
    )
}
