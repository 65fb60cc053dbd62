//! Common constants used throughout yaml-readme.

/// Glob used to find data files when none is given
pub const DEFAULT_PATTERN: &str = "items/*.yaml";

/// Template file used when none is given
pub const DEFAULT_TEMPLATE_FILE: &str = "README.tpl";

/// Project link placed in the attribution banner
pub const PROJECT_URL: &str = "https://github.com/LinuxSuRen/yaml-readme";

/// Fallback template, used only when the template file cannot be read.
pub const DEFAULT_TEMPLATE: &str = r#"
|中文名称|英文名称|JD|
|---|---|---|
{%- for val in items %}
|{{ val.zh }}|{{ val.en }}|{{ val.jd }}|
{% endfor %}
"#;

/// Field marking a record to be left out of the output
pub const IGNORE_FIELD: &str = "ignore";

/// Derived field: base name of the source file without its extension
pub const FILENAME_FIELD: &str = "filename";

/// Derived field: base name of the directory holding the source file
pub const PARENTNAME_FIELD: &str = "parentname";

/// Derived field: path the source file was loaded from
pub const FULLPATH_FIELD: &str = "fullpath";
