//! Site Data Models
//!
//! Shapes of the hand-maintained JSON documents under `data/`.
//!
//! The files are typed by hand, so record fields are read leniently: a number
//! where text was expected is shown as that number, and a wrong-typed optional
//! counter counts as unset. Only `goal` and `raised` are strict.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::format::format_count;

/// Fundraising summary (`data/site.json`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSummary {
    pub goal: f64,
    pub raised: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub events_run: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub volunteers: Option<f64>,
}

/// One entry of `data/events.json`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EventRecord {
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub date: String,
    #[serde(deserialize_with = "lenient_text")]
    pub location: String,
    #[serde(deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(deserialize_with = "lenient_optional_text")]
    pub image: Option<String>,
}

/// One entry of `data/members.json`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MemberRecord {
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_optional_text")]
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient_optional_text")]
    pub photo: Option<String>,
    #[serde(deserialize_with = "lenient_optional_text")]
    pub linkedin: Option<String>,
    #[serde(deserialize_with = "lenient_optional_text")]
    pub email: Option<String>,
}

impl EventRecord {
    pub fn image(&self) -> Option<&str> {
        present(&self.image)
    }
}

impl MemberRecord {
    pub fn role(&self) -> Option<&str> {
        present(&self.role)
    }

    pub fn photo(&self) -> Option<&str> {
        present(&self.photo)
    }

    pub fn linkedin(&self) -> Option<&str> {
        present(&self.linkedin)
    }

    pub fn email(&self) -> Option<&str> {
        present(&self.email)
    }
}

/// Decode each array entry on its own. Entries that are not records at all
/// (a bare string, a number, `null`) are dropped and counted.
pub fn decode_records<T: DeserializeOwned>(values: Vec<Value>) -> (Vec<T>, usize) {
    let total = values.len();
    let records: Vec<T> = values
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect();
    let skipped = total - records.len();
    (records, skipped)
}

/// Empty strings in the data files mean "not set"
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Scalar as display text; null and containers have none
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => n.as_f64().map(format_count),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
