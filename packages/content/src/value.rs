//! # Content value model
//!
//! The site content is a tree of nested JSON data with exactly five
//! possible shapes at any node: a string, a boolean, a list of strings,
//! a list of records, or a record of named fields. Instead of inspecting
//! `serde_json::Value` at runtime, the shapes are a closed enum so every
//! consumer dispatches with a `match`.
//!
//! Numbers and nulls never occur in the content files and are rejected
//! when a document is parsed.

use std::fmt;

use serde::de::Error as DeError;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Deserializer, Serialize};

/// A single node of the content tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Free text, edited as a single- or multi-line input.
    Text(String),
    /// An on/off flag (e.g. `popup.enabled`).
    Flag(bool),
    /// An ordered list of strings (e.g. `about.paragraphs`).
    TextList(Vec<String>),
    /// An ordered list of records, homogeneous in shape (e.g. `timeline`).
    RecordList(Vec<Fields>),
    /// A record of named sub-values (e.g. the `hero` section).
    Record(Fields),
}

impl Value {
    /// Human-readable shape name, used in diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Flag(_) => "flag",
            Value::TextList(_) => "list of strings",
            Value::RecordList(_) => "list of records",
            Value::Record(_) => "record",
        }
    }

    pub fn text(s: impl Into<String>) -> Value {
        Value::Text(s.into())
    }

    /// Convert a raw JSON value into the closed shape set.
    ///
    /// Empty arrays carry no element shape of their own and parse as an
    /// empty `TextList`; the patching layer decides what appends mean for
    /// them (see `Change`).
    pub fn from_json(raw: serde_json::Value) -> Result<Value, ShapeError> {
        match raw {
            serde_json::Value::String(s) => Ok(Value::Text(s)),
            serde_json::Value::Bool(b) => Ok(Value::Flag(b)),
            serde_json::Value::Array(items) => {
                if items.is_empty() {
                    return Ok(Value::TextList(Vec::new()));
                }
                if items.iter().all(|v| v.is_string()) {
                    let strings = items
                        .into_iter()
                        .map(|v| match v {
                            serde_json::Value::String(s) => s,
                            _ => unreachable!(),
                        })
                        .collect();
                    return Ok(Value::TextList(strings));
                }
                if items.iter().all(|v| v.is_object()) {
                    let records = items
                        .into_iter()
                        .map(|v| match v {
                            serde_json::Value::Object(map) => Fields::from_json_map(map),
                            _ => unreachable!(),
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    return Ok(Value::RecordList(records));
                }
                Err(ShapeError::MixedList)
            }
            serde_json::Value::Object(map) => Ok(Value::Record(Fields::from_json_map(map)?)),
            other => Err(ShapeError::Unsupported(json_kind(other))),
        }
    }
}

fn json_kind(v: serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// A JSON shape outside the five supported ones.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("unsupported JSON value of type `{0}` in content data")]
    Unsupported(&'static str),

    #[error("lists must hold only strings or only objects")]
    MixedList,
}

/// An insertion-ordered record of named fields.
///
/// Field order is preserved so saved documents diff cleanly against the
/// files the original site shipped with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fields {
    entries: Vec<(String, Value)>,
}

impl Fields {
    pub fn new() -> Fields {
        Fields::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Replace an existing field or append a new one at the end.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.get_mut(&name) {
            Some(slot) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// A new record with the same field names, string fields reset to
    /// empty and everything else copied. This is what "add item" appends
    /// to a generic record list.
    pub fn blank_like(&self) -> Fields {
        let entries = self
            .entries
            .iter()
            .map(|(k, v)| {
                let blank = match v {
                    Value::Text(_) => Value::Text(String::new()),
                    other => other.clone(),
                };
                (k.clone(), blank)
            })
            .collect();
        Fields { entries }
    }

    fn from_json_map(map: serde_json::Map<String, serde_json::Value>) -> Result<Fields, ShapeError> {
        let entries = map
            .into_iter()
            .map(|(k, v)| Value::from_json(v).map(|v| (k, v)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Fields { entries })
    }
}

impl FromIterator<(String, Value)> for Fields {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Fields {
        Fields {
            entries: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.shape())
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Text(s) => serializer.serialize_str(s),
            Value::Flag(b) => serializer.serialize_bool(*b),
            Value::TextList(items) => items.serialize(serializer),
            Value::RecordList(items) => items.serialize(serializer),
            Value::Record(fields) => fields.serialize(serializer),
        }
    }
}

impl Serialize for Fields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Value::from_json(raw).map_err(D::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Fields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Fields, D::Error> {
        let raw = serde_json::Map::deserialize(deserializer)?;
        Fields::from_json_map(raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_five_shapes() {
        let raw = serde_json::json!({
            "title": "Badin",
            "enabled": true,
            "paragraphs": ["a", "b"],
            "timeline": [{ "year": "1960" }],
            "company": { "name": "Badin" }
        });

        let fields: Fields = serde_json::from_value(raw).unwrap();
        assert!(matches!(fields.get("title"), Some(Value::Text(_))));
        assert!(matches!(fields.get("enabled"), Some(Value::Flag(true))));
        assert!(matches!(fields.get("paragraphs"), Some(Value::TextList(p)) if p.len() == 2));
        assert!(matches!(fields.get("timeline"), Some(Value::RecordList(t)) if t.len() == 1));
        assert!(matches!(fields.get("company"), Some(Value::Record(_))));
    }

    #[test]
    fn rejects_numbers_and_nulls() {
        let numbers: Result<Fields, _> = serde_json::from_value(serde_json::json!({ "n": 7 }));
        assert!(numbers.is_err());

        let nulls: Result<Fields, _> = serde_json::from_value(serde_json::json!({ "n": null }));
        assert!(nulls.is_err());
    }

    #[test]
    fn rejects_mixed_lists() {
        let raw = serde_json::json!({ "items": ["a", { "b": "c" }] });
        let parsed: Result<Fields, _> = serde_json::from_value(raw);
        assert!(parsed.is_err());
    }

    #[test]
    fn empty_array_parses_as_empty_text_list() {
        let fields: Fields = serde_json::from_value(serde_json::json!({ "items": [] })).unwrap();
        assert_eq!(fields.get("items"), Some(&Value::TextList(Vec::new())));
    }

    #[test]
    fn field_order_survives_a_round_trip() {
        let raw = r#"{"zebra":"z","alpha":"a","mid":{"b":"1","a":"2"}}"#;
        let fields: Fields = serde_json::from_str(raw).unwrap();
        let back = serde_json::to_string(&fields).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn blank_like_resets_strings_only() {
        let template: Fields = serde_json::from_value(serde_json::json!({
            "title": "Hello",
            "enabled": true
        }))
        .unwrap();

        let blank = template.blank_like();
        assert_eq!(blank.get("title"), Some(&Value::Text(String::new())));
        assert_eq!(blank.get("enabled"), Some(&Value::Flag(true)));
    }
}
