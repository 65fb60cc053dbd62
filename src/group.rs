//! Grouping of records by the value of one field.

use indexmap::IndexMap;
use serde::Serialize;

use crate::record::Record;
use crate::value::FieldValue;

/// Computes the group key of a record.
///
/// Text is used as-is and integers in decimal form. Empty text, a missing field
/// or any other kind of value yields `None`.
pub fn group_key(record: &Record, field: &str) -> Option<String> {
    match record.get(field)? {
        FieldValue::Text(s) if !s.is_empty() => Some(s.clone()),
        FieldValue::Integer(i) => Some(i.to_string()),
        _ => None,
    }
}

/// Records bucketed by group key, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GroupIndex {
    #[serde(skip)]
    field: String,
    groups: IndexMap<String, Vec<Record>>,
}

impl GroupIndex {
    pub fn new<S: Into<String>>(field: S) -> Self {
        Self { field: field.into(), groups: IndexMap::new() }
    }

    /// Groups `records` in the order given.
    pub fn build<'a, I, S>(records: I, field: S) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
        S: Into<String>,
    {
        let mut index = Self::new(field);
        for record in records {
            index.insert(record);
        }
        index
    }

    /// Appends a record to its group. Returns false if it has no group key.
    pub fn insert(&mut self, record: &Record) -> bool {
        match group_key(record, &self.field) {
            Some(key) => {
                self.groups.entry(key).or_default().push(record.clone());
                true
            }
            None => false,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn get(&self, key: &str) -> Option<&[Record]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Group keys in discovery order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}
