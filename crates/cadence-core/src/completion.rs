//! Sparse per-day compliance records.
//!
//! The canonical shape is a date-keyed map, `{"2024-01-05": true}`. Older
//! records store a plain list of date or timestamp strings; those are adapted
//! once on read and always written back in the canonical shape.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::date::legacy_entry_date;

/// Which days a commitment was satisfied.
///
/// A missing key means "not compliant". The engine only reads this; the owning
/// layer edits it through [`mark`](Self::mark), [`unmark`](Self::unmark) and
/// [`toggle`](Self::toggle).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompletionRecord {
    entries: BTreeMap<NaiveDate, bool>,
}

impl CompletionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adapt the legacy list-of-strings shape.
    ///
    /// Each entry contributes the calendar day it names. Entries that do not
    /// start with a `YYYY-MM-DD` date are skipped.
    pub fn from_legacy_dates<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut record = Self::new();
        for entry in entries {
            match legacy_entry_date(entry.as_ref()) {
                Some(date) => record.mark(date),
                None => warn!(entry = entry.as_ref(), "skipping unreadable completion entry"),
            }
        }
        record
    }

    /// Whether `date` is recorded as compliant.
    pub fn is_compliant(&self, date: NaiveDate) -> bool {
        self.entries.get(&date).copied().unwrap_or(false)
    }

    pub fn mark(&mut self, date: NaiveDate) {
        self.entries.insert(date, true);
    }

    pub fn unmark(&mut self, date: NaiveDate) {
        self.entries.remove(&date);
    }

    /// Flip compliance for `date` and return the new state.
    pub fn toggle(&mut self, date: NaiveDate) -> bool {
        if self.is_compliant(date) {
            self.unmark(date);
            false
        } else {
            self.mark(date);
            true
        }
    }

    /// Compliant dates in ascending order.
    pub fn iter_compliant(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.entries
            .iter()
            .filter(|(_, compliant)| **compliant)
            .map(|(date, _)| *date)
    }

    /// Number of compliant days.
    pub fn len(&self) -> usize {
        self.iter_compliant().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<NaiveDate> for CompletionRecord {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        let mut record = Self::new();
        for date in iter {
            record.mark(date);
        }
        record
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl<'de> Deserialize<'de> for CompletionRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let record = match value {
            Value::Object(map) => {
                let mut entries = BTreeMap::new();
                for (key, flag) in &map {
                    match legacy_entry_date(key) {
                        Some(date) => {
                            let compliant = is_truthy(flag);
                            // a timestamp key and a date key for the same day: any true wins
                            let slot = entries.entry(date).or_insert(false);
                            *slot = *slot || compliant;
                        }
                        None => warn!(key = key.as_str(), "skipping unreadable completion key"),
                    }
                }
                Self { entries }
            }
            Value::Array(items) => {
                let strings: Vec<&str> = items
                    .iter()
                    .filter_map(|item| match item.as_str() {
                        Some(s) => Some(s),
                        None => {
                            warn!(entry = %item, "skipping non-string completion entry");
                            None
                        }
                    })
                    .collect();
                Self::from_legacy_dates(strings)
            }
            // legacy rows sometimes store a lone date string
            Value::String(s) => Self::from_legacy_dates([s.as_str()]),
            Value::Null => Self::new(),
            other => {
                warn!(value = %other, "ignoring completion record of unexpected shape");
                Self::new()
            }
        };
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_missing_key_is_not_compliant() {
        let record = CompletionRecord::new();
        assert!(!record.is_compliant(date(2024, 1, 1)));
        assert!(record.is_empty());
    }

    #[test]
    fn test_mark_unmark_toggle() {
        let mut record = CompletionRecord::new();
        record.mark(date(2024, 1, 1));
        assert!(record.is_compliant(date(2024, 1, 1)));

        assert!(!record.toggle(date(2024, 1, 1)));
        assert!(!record.is_compliant(date(2024, 1, 1)));
        assert!(record.toggle(date(2024, 1, 2)));

        record.unmark(date(2024, 1, 2));
        assert!(record.is_empty());
    }

    #[test]
    fn test_decodes_canonical_map() {
        let record: CompletionRecord =
            serde_json::from_str(r#"{"2024-01-02":true,"2024-01-01":true,"2024-01-03":false}"#)
                .unwrap();
        assert_eq!(
            record.iter_compliant().collect::<Vec<_>>(),
            vec![date(2024, 1, 1), date(2024, 1, 2)]
        );
        assert!(!record.is_compliant(date(2024, 1, 3)));
    }

    #[test]
    fn test_decodes_legacy_list() {
        let record: CompletionRecord = serde_json::from_str(
            r#"["2024-01-01", "2024-01-02T23:59:00.000Z", "garbage", 42, "2024-01-02"]"#,
        )
        .unwrap();
        assert_eq!(
            record.iter_compliant().collect::<Vec<_>>(),
            vec![date(2024, 1, 1), date(2024, 1, 2)]
        );
    }

    #[test]
    fn test_decodes_null_and_lone_string() {
        let record: CompletionRecord = serde_json::from_str("null").unwrap();
        assert!(record.is_empty());
        let record: CompletionRecord = serde_json::from_str(r#""2024-01-09""#).unwrap();
        assert!(record.is_compliant(date(2024, 1, 9)));
    }

    #[test]
    fn test_serializes_canonical_map() {
        let record = CompletionRecord::from_legacy_dates(["2024-01-02T08:00:00Z", "2024-01-01"]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"2024-01-01":true,"2024-01-02":true}"#);
    }
}
