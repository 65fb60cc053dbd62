//! Ordering of records by one field.

use std::cmp::Ordering;

use crate::record::Record;

/// Which field to sort by, and in which direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub descending: bool,
}

impl SortSpec {
    /// Parses a `--sort-by` value.
    ///
    /// A bare field name sorts descending; a leading `!` sorts ascending.
    /// Returns `None` when no field name is left.
    ///
    /// ```
    /// use yaml_readme::sort::SortSpec;
    ///
    /// let spec = SortSpec::parse("!year").unwrap();
    /// assert_eq!(spec.field, "year");
    /// assert!(!spec.descending);
    /// assert!(SortSpec::parse("year").unwrap().descending);
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let (field, descending) = match text.strip_prefix('!') {
            Some(field) => (field, false),
            None => (text, true),
        };
        if field.is_empty() {
            return None;
        }
        Some(Self { field: field.to_string(), descending })
    }
}

/// Stably sorts records by the text value of `spec.field`.
///
/// Only records whose field holds text are reordered, and only among the slots
/// they already occupy. Records with a missing or non-text value compare with
/// nothing and stay where they are. Ties keep their relative order.
pub fn sort_records(records: &mut [Record], spec: &SortSpec) {
    let slots: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| sort_text(record, &spec.field).is_some())
        .map(|(i, _)| i)
        .collect();

    let mut sortable: Vec<Record> = slots.iter().map(|&i| records[i].clone()).collect();
    sortable.sort_by(|a, b| {
        let ordering = compare_text(a, b, &spec.field);
        if spec.descending {
            ordering.reverse()
        } else {
            ordering
        }
    });

    for (slot, record) in slots.into_iter().zip(sortable) {
        records[slot] = record;
    }
}

fn sort_text<'a>(record: &'a Record, field: &str) -> Option<&'a str> {
    record.get(field).and_then(|value| value.as_text())
}

fn compare_text(a: &Record, b: &Record, field: &str) -> Ordering {
    match (sort_text(a, field), sort_text(b, field)) {
        (Some(a), Some(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FieldValue;

    fn record(name: &str, year: FieldValue) -> Record {
        [("name", FieldValue::from(name)), ("year", year)].into_iter().collect()
    }

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().filter_map(|r| r.get("name").and_then(FieldValue::as_text)).collect()
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!(
            SortSpec::parse("year"),
            Some(SortSpec { field: "year".to_string(), descending: true })
        );
        assert_eq!(
            SortSpec::parse("!year"),
            Some(SortSpec { field: "year".to_string(), descending: false })
        );
        assert_eq!(SortSpec::parse(""), None);
        assert_eq!(SortSpec::parse("!"), None);
        // Only one `!` is stripped.
        assert_eq!(SortSpec::parse("!!year").unwrap().field, "!year");
    }

    #[test]
    fn test_descending_by_default() {
        let mut records =
            vec![record("a", "2019".into()), record("b", "2021".into()), record("c", "2020".into())];
        sort_records(&mut records, &SortSpec::parse("year").unwrap());
        assert_eq!(names(&records), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_ascending_with_prefix() {
        let mut records =
            vec![record("a", "2019".into()), record("b", "2021".into()), record("c", "2020".into())];
        sort_records(&mut records, &SortSpec::parse("!year").unwrap());
        assert_eq!(names(&records), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_ties_are_stable_in_both_directions() {
        let original =
            vec![record("a", "x".into()), record("b", "y".into()), record("c", "x".into())];

        let mut records = original.clone();
        sort_records(&mut records, &SortSpec::parse("year").unwrap());
        assert_eq!(names(&records), vec!["b", "a", "c"]);

        let mut records = original;
        sort_records(&mut records, &SortSpec::parse("!year").unwrap());
        assert_eq!(names(&records), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_non_text_values_keep_their_slot() {
        let mut records = vec![
            record("a", "2019".into()),
            record("n", 2050.into()),
            record("b", "2021".into()),
            record("m", FieldValue::Null),
            record("c", "2020".into()),
        ];
        sort_records(&mut records, &SortSpec::parse("year").unwrap());
        assert_eq!(names(&records), vec!["b", "n", "c", "m", "a"]);
    }

    #[test]
    fn test_byte_wise_comparison() {
        let mut records =
            vec![record("upper", "B".into()), record("lower", "a".into()), record("cjk", "苹".into())];
        sort_records(&mut records, &SortSpec::parse("!year").unwrap());
        assert_eq!(names(&records), vec!["upper", "lower", "cjk"]);
    }

    #[test]
    fn test_missing_field() {
        let mut records = vec![record("a", "1".into()), record("b", "2".into())];
        sort_records(&mut records, &SortSpec::parse("absent").unwrap());
        assert_eq!(names(&records), vec!["a", "b"]);
    }
}
