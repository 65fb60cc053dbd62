//! Normalized records built from data files.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::{FILENAME_FIELD, FULLPATH_FIELD, IGNORE_FIELD, PARENTNAME_FIELD};
use crate::error::{Error, Result};
use crate::value::FieldValue;

/// Data file formats understood by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Yaml,
    Json,
}

impl DataFormat {
    /// Picks the format from the file extension. Anything but `.json` is YAML.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DataFormat::Json,
            _ => DataFormat::Yaml,
        }
    }
}

/// Reads the first YAML document of `content` and resolves `<<` merge keys.
///
/// Later documents in a multi-document file are not read.
fn parse_yaml(content: &str) -> std::result::Result<serde_yaml::Value, serde_yaml::Error> {
    let mut value = match serde_yaml::Deserializer::from_str(content).next() {
        Some(document) => serde_yaml::Value::deserialize(document)?,
        None => serde_yaml::Value::Null,
    };
    value.apply_merge()?;
    Ok(value)
}

/// One data file's fields plus the derived location fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    /// Parses `content` loaded from `path` and attaches the derived fields.
    ///
    /// # Errors
    /// * `Error::YamlError` / `Error::JsonError` if the content is malformed
    /// * `Error::InvalidDocument` if the document root is not a mapping
    pub fn parse<P: AsRef<Path>>(path: P, content: &str) -> Result<Self> {
        let path = path.as_ref();
        let value = match DataFormat::from_path(path) {
            DataFormat::Json => serde_json::from_str::<serde_json::Value>(content)
                .map(FieldValue::from)
                .map_err(|source| Error::JsonError { path: path.to_path_buf(), source })?,
            DataFormat::Yaml => parse_yaml(content)
                .map(FieldValue::from)
                .map_err(|source| Error::YamlError { path: path.to_path_buf(), source })?,
        };

        let fields = match value {
            FieldValue::Map(fields) => fields,
            // An empty document has no fields of its own.
            FieldValue::Null => IndexMap::new(),
            other => {
                return Err(Error::InvalidDocument {
                    path: path.to_path_buf(),
                    kind: other.kind(),
                })
            }
        };

        let mut record = Self { fields };
        record.attach_location(path);
        Ok(record)
    }

    /// Sets `filename`, `parentname` and `fullpath`, replacing any existing values.
    fn attach_location(&mut self, path: &Path) {
        let filename = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let parentname = path
            .parent()
            .and_then(|parent| parent.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_string());

        self.insert(FILENAME_FIELD, filename);
        self.insert(PARENTNAME_FIELD, parentname);
        self.insert(FULLPATH_FIELD, path.to_string_lossy().into_owned());
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Sets a field, keeping its original position if it already existed.
    pub fn insert<K: Into<String>, V: Into<FieldValue>>(&mut self, field: K, value: V) {
        self.fields.insert(field.into(), value.into());
    }

    /// True when the record carries `ignore: true`.
    pub fn is_ignored(&self) -> bool {
        self.get(IGNORE_FIELD).and_then(FieldValue::as_bool).unwrap_or(false)
    }

    pub fn fields(&self) -> &IndexMap<String, FieldValue> {
        &self.fields
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_format_from_path() {
        assert_eq!(DataFormat::from_path("items/a.yaml"), DataFormat::Yaml);
        assert_eq!(DataFormat::from_path("items/a.yml"), DataFormat::Yaml);
        assert_eq!(DataFormat::from_path("items/a.JSON"), DataFormat::Json);
        assert_eq!(DataFormat::from_path("items/noext"), DataFormat::Yaml);
    }

    #[test]
    fn test_derived_fields() {
        let record = Record::parse("items/apple.yaml", "zh: 苹果\nen: apple").unwrap();

        assert_eq!(record.get("filename").and_then(FieldValue::as_text), Some("apple"));
        assert_eq!(record.get("parentname").and_then(FieldValue::as_text), Some("items"));
        assert_eq!(
            record.get("fullpath").and_then(FieldValue::as_text),
            Some("items/apple.yaml")
        );
        assert_eq!(record.get("zh").and_then(FieldValue::as_text), Some("苹果"));
    }

    #[test]
    fn test_derived_fields_override_raw_values() {
        let record =
            Record::parse("data/cow.yaml", "filename: custom\nparentname: 1\nfullpath: x").unwrap();

        assert_eq!(record.get("filename").and_then(FieldValue::as_text), Some("cow"));
        assert_eq!(record.get("parentname").and_then(FieldValue::as_text), Some("data"));
        assert_eq!(record.get("fullpath").and_then(FieldValue::as_text), Some("data/cow.yaml"));
    }

    #[test]
    fn test_only_last_extension_is_stripped() {
        let record = Record::parse("items/archive.tar.yaml", "").unwrap();
        assert_eq!(record.get("filename").and_then(FieldValue::as_text), Some("archive.tar"));
    }

    #[test]
    fn test_file_in_current_directory() {
        let record = Record::parse("apple.yaml", "en: apple").unwrap();
        assert_eq!(record.get("parentname").and_then(FieldValue::as_text), Some("."));
    }

    #[test]
    fn test_empty_document() {
        let record = Record::parse("items/empty.yaml", "").unwrap();
        assert_eq!(record.fields().len(), 3);
    }

    #[test]
    fn test_first_document_only() {
        let record = Record::parse("items/multi.yaml", "---\nen: apple\n---\nen: other\n").unwrap();
        assert_eq!(record.get("en").and_then(FieldValue::as_text), Some("apple"));
    }

    #[test]
    fn test_merge_keys() {
        let content = "base: &base\n  jd: fruit\n  zh: 苹果\n<<: *base\nen: apple\nzh: 青苹果\n";
        let record = Record::parse("items/merge.yaml", content).unwrap();

        assert_eq!(record.get("jd").and_then(FieldValue::as_text), Some("fruit"));
        assert_eq!(record.get("zh").and_then(FieldValue::as_text), Some("青苹果"));
        assert!(record.get("<<").is_none());
    }

    #[test]
    fn test_non_mapping_document() {
        let err = Record::parse("items/list.yaml", "- a\n- b").unwrap_err();
        assert!(matches!(err, Error::InvalidDocument { kind: "sequence", .. }));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = Record::parse("items/bad.yaml", "zh: [unclosed").unwrap_err();
        assert!(matches!(err, Error::YamlError { .. }));
    }

    #[test]
    fn test_json_document() {
        let record = Record::parse("items/cow.json", r#"{"en": "cow", "year": 2020}"#).unwrap();
        assert_eq!(record.get("year").and_then(FieldValue::as_integer), Some(2020));

        let err = Record::parse("items/bad.json", "{").unwrap_err();
        assert!(matches!(err, Error::JsonError { .. }));
    }

    #[test]
    fn test_is_ignored() {
        assert!(Record::parse("a.yaml", "ignore: true").unwrap().is_ignored());
        assert!(!Record::parse("a.yaml", "ignore: false").unwrap().is_ignored());
        assert!(!Record::parse("a.yaml", "ignore: 'true'").unwrap().is_ignored());
        assert!(!Record::parse("a.yaml", "ignore: 1").unwrap().is_ignored());
        assert!(!Record::parse("a.yaml", "en: x").unwrap().is_ignored());
    }
}
