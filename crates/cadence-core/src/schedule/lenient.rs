//! Forgiving field decoders for stored schedules.
//!
//! Stored rules may be partially migrated or hand-edited. Each decoder reads
//! the raw value and maps anything it does not understand to the value that
//! makes the schedule inert, so decoding a commitment never fails because of
//! its schedule.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

use super::{RepeatKind, Schedule};
use crate::date::legacy_entry_date;

pub(super) fn repeat_kind<'de, D>(deserializer: D) -> Result<Option<RepeatKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s.parse().ok(),
        _ => None,
    })
}

pub(super) fn days_of_week<'de, D>(deserializer: D) -> Result<BTreeSet<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(BTreeSet::new());
    };
    Ok(items
        .iter()
        .filter_map(Value::as_u64)
        .filter(|d| *d <= 6)
        .map(|d| d as u8)
        .collect())
}

/// Absent, null, zero or negative all mean 1. Non-numeric input is kept as
/// `None` so the schedule stays inert.
pub(super) fn interval_days<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let raw = match &value {
        Value::Null => return Ok(Some(1)),
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.floor() as i64)),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(Some(1));
            }
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.floor() as i64)
            })
        }
        _ => None,
    };
    Ok(raw.map(|n| n.clamp(1, i64::from(u32::MAX)) as u32))
}

/// Marker written for a malformed interval. `null` would read back as 1.
const MALFORMED_INTERVAL: &str = "NaN";

pub(super) fn serialize_interval_days<S>(
    value: &Option<u32>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(n) => serializer.serialize_u32(*n),
        None => serializer.serialize_str(MALFORMED_INTERVAL),
    }
}

pub(super) fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => legacy_entry_date(&s),
        _ => None,
    })
}

/// Schedule stored as an object, as a JSON-encoded string, or as null.
///
/// A string that does not parse yields an inert default schedule rather than
/// an error.
pub(crate) fn optional_schedule<'de, D>(deserializer: D) -> Result<Option<Schedule>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(s) => Some(serde_json::from_str(&s).unwrap_or_default()),
        other @ Value::Object(_) => Some(serde_json::from_value(other).unwrap_or_default()),
        _ => Some(Schedule::default()),
    })
}
