//! # Content changes
//!
//! Edits arrive as one named change at a time: set a field, append to a
//! list, or remove a list element. A change is applied to a copy of the
//! document, so a failed apply leaves the caller's document untouched
//! and only the addressed subtree ever differs between the two.
//!
//! Two routes are hard-coded on purpose. The `timeline` list always
//! lives at `about.timeline`, while `features` sits at the document
//! root rather than inside a section. That asymmetry comes from the
//! shape of the production data files and is preserved here exactly;
//! normalizing it would orphan the existing content.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::ContentDocument;
use crate::path::{Path, PathError, Segment};
use crate::value::{Fields, Value};

/// Default icon for a freshly added feature card.
pub const DEFAULT_FEATURE_ICON: &str = "GrapeIcon";

/// A single edit intent against the content document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Change {
    /// Replace the node at `path` with `value`.
    Set { path: Path, value: Value },

    /// Append a blank `{year, title, description}` entry to the
    /// timeline. Always routed to `about.timeline`.
    AppendTimeline,

    /// Remove the timeline entry at `index`.
    RemoveTimeline { index: usize },

    /// Append a blank `{icon, title, description}` entry to the
    /// feature list. Always routed to the root-level `features` key.
    AppendFeature,

    /// Remove the feature entry at `index`.
    RemoveFeature { index: usize },

    /// Append a default element to the list at `path`: an empty string
    /// for string lists, a blank copy of the first element for record
    /// lists.
    Append { path: Path },

    /// Remove the element at `index` from the list at `path`.
    Remove { path: Path, index: usize },
}

/// A change that could not be applied. The document is never mutated
/// when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChangeError {
    #[error("no field `{field}` at `{at}`")]
    UnknownField { field: String, at: Path },

    #[error("index {index} is out of bounds at `{at}` (length {len})")]
    IndexOutOfBounds { index: usize, len: usize, at: Path },

    #[error("expected {expected} at `{at}`, found {found}")]
    ShapeMismatch {
        expected: &'static str,
        found: &'static str,
        at: Path,
    },

    #[error("`{at}` is not a list")]
    NotAList { at: Path },

    #[error("cannot add to the empty list at `{at}`: no element shape to copy")]
    EmptyListShape { at: Path },

    #[error(transparent)]
    Path(#[from] PathError),
}

impl Change {
    /// Apply this change to a copy of `doc` and return the new document.
    ///
    /// On error the original is untouched and the copy is discarded, so
    /// callers get at-most-one-mutation-per-call semantics for free.
    pub fn apply(&self, doc: &ContentDocument) -> Result<ContentDocument, ChangeError> {
        let mut next = doc.clone();
        self.apply_in_place(&mut next)?;
        Ok(next)
    }

    fn apply_in_place(&self, doc: &mut ContentDocument) -> Result<(), ChangeError> {
        match self {
            Change::Set { path, value } => set_at(doc.root_mut(), path, value.clone()),

            Change::AppendTimeline => {
                let at = timeline_route();
                push_record(doc.root_mut(), &at, blank_timeline_entry())
            }
            Change::RemoveTimeline { index } => remove_at(doc.root_mut(), &timeline_route(), *index),

            Change::AppendFeature => {
                let at = features_route();
                push_record(doc.root_mut(), &at, blank_feature())
            }
            Change::RemoveFeature { index } => remove_at(doc.root_mut(), &features_route(), *index),

            Change::Append { path } => append_default(doc.root_mut(), path),
            Change::Remove { path, index } => remove_at(doc.root_mut(), path, *index),
        }
    }
}

/// The fixed storage location of the timeline list.
pub fn timeline_route() -> Path {
    Path::field("about").join("timeline")
}

/// The fixed storage location of the feature list. Root level, not
/// nested under a section.
pub fn features_route() -> Path {
    Path::field("features")
}

fn blank_timeline_entry() -> Fields {
    [
        ("year".to_string(), Value::text("")),
        ("title".to_string(), Value::text("")),
        ("description".to_string(), Value::text("")),
    ]
    .into_iter()
    .collect()
}

fn blank_feature() -> Fields {
    [
        ("icon".to_string(), Value::text(DEFAULT_FEATURE_ICON)),
        ("title".to_string(), Value::text("")),
        ("description".to_string(), Value::text("")),
    ]
    .into_iter()
    .collect()
}

/// Walk to the value slot addressed by `path`.
fn slot_mut<'a>(root: &'a mut Fields, path: &Path) -> Result<&'a mut Value, ChangeError> {
    let segments = path.segments();
    let (first, rest) = match segments.split_first() {
        Some(split) => split,
        None => return Err(ChangeError::Path(PathError::Empty)),
    };

    let name = match first {
        Segment::Field(name) => name,
        Segment::Index(_) => {
            return Err(ChangeError::ShapeMismatch {
                expected: "field name",
                found: "list index",
                at: Path::root(),
            })
        }
    };

    let mut current = root.get_mut(name).ok_or_else(|| ChangeError::UnknownField {
        field: name.clone(),
        at: Path::root(),
    })?;

    for (depth, segment) in rest.iter().enumerate() {
        let at = || path.prefix(depth + 1);
        current = match (segment, current) {
            (Segment::Field(field), Value::Record(fields)) => {
                fields
                    .get_mut(field)
                    .ok_or_else(|| ChangeError::UnknownField {
                        field: field.clone(),
                        at: at(),
                    })?
            }
            (Segment::Field(_), found) => {
                return Err(ChangeError::ShapeMismatch {
                    expected: "record",
                    found: found.shape(),
                    at: at(),
                })
            }
            (Segment::Index(index), Value::RecordList(items)) => {
                let len = items.len();
                let record = items.get_mut(*index).ok_or(ChangeError::IndexOutOfBounds {
                    index: *index,
                    len,
                    at: at(),
                })?;
                // An index lands on a record, not a value; the rest of
                // the walk continues inside it.
                return descend_record(record, path, depth + 2);
            }
            (Segment::Index(_), found) => {
                return Err(ChangeError::ShapeMismatch {
                    expected: "list of records",
                    found: found.shape(),
                    at: at(),
                })
            }
        };
    }

    Ok(current)
}

/// Continue a walk inside a record list element.
fn descend_record<'a>(
    record: &'a mut Fields,
    path: &Path,
    from_depth: usize,
) -> Result<&'a mut Value, ChangeError> {
    let segments = &path.segments()[from_depth..];
    let (first, rest) = match segments.split_first() {
        Some(split) => split,
        None => {
            // The path ends on the record itself; there is no single
            // value slot to hand back.
            return Err(ChangeError::ShapeMismatch {
                expected: "field name after list index",
                found: "end of path",
                at: path.prefix(from_depth),
            });
        }
    };

    let name = match first {
        Segment::Field(name) => name,
        Segment::Index(_) => {
            return Err(ChangeError::ShapeMismatch {
                expected: "field name",
                found: "list index",
                at: path.prefix(from_depth),
            })
        }
    };

    let mut current = record.get_mut(name).ok_or_else(|| ChangeError::UnknownField {
        field: name.clone(),
        at: path.prefix(from_depth),
    })?;

    for (offset, segment) in rest.iter().enumerate() {
        let depth = from_depth + offset + 1;
        let at = || path.prefix(depth);
        current = match (segment, current) {
            (Segment::Field(field), Value::Record(fields)) => {
                fields
                    .get_mut(field)
                    .ok_or_else(|| ChangeError::UnknownField {
                        field: field.clone(),
                        at: at(),
                    })?
            }
            (Segment::Field(_), found) => {
                return Err(ChangeError::ShapeMismatch {
                    expected: "record",
                    found: found.shape(),
                    at: at(),
                })
            }
            (Segment::Index(index), Value::RecordList(items)) => {
                let len = items.len();
                let inner = items.get_mut(*index).ok_or(ChangeError::IndexOutOfBounds {
                    index: *index,
                    len,
                    at: at(),
                })?;
                return descend_record(inner, path, depth + 1);
            }
            (Segment::Index(_), found) => {
                return Err(ChangeError::ShapeMismatch {
                    expected: "list of records",
                    found: found.shape(),
                    at: at(),
                })
            }
        };
    }

    Ok(current)
}

fn set_at(root: &mut Fields, path: &Path, value: Value) -> Result<(), ChangeError> {
    // A path ending in an index addresses a list element. Elements are
    // not `Value` slots themselves (strings in a TextList, records in a
    // RecordList), so they are replaced through their parent list.
    if let Some((Segment::Index(index), head)) = path.segments().split_last() {
        let prefix = Path::from_segments(head.to_vec());
        let slot = slot_mut(root, &prefix)?;
        return match (slot, value) {
            (Value::TextList(items), Value::Text(text)) => {
                let len = items.len();
                let element = items.get_mut(*index).ok_or(ChangeError::IndexOutOfBounds {
                    index: *index,
                    len,
                    at: prefix.clone(),
                })?;
                *element = text;
                Ok(())
            }
            (Value::RecordList(items), Value::Record(record)) => {
                let len = items.len();
                let element = items.get_mut(*index).ok_or(ChangeError::IndexOutOfBounds {
                    index: *index,
                    len,
                    at: prefix.clone(),
                })?;
                *element = record;
                Ok(())
            }
            (Value::TextList(_), other) => Err(ChangeError::ShapeMismatch {
                expected: "text",
                found: other.shape(),
                at: path.clone(),
            }),
            (Value::RecordList(_), other) => Err(ChangeError::ShapeMismatch {
                expected: "record",
                found: other.shape(),
                at: path.clone(),
            }),
            (found, _) => Err(ChangeError::ShapeMismatch {
                expected: "list",
                found: found.shape(),
                at: prefix.clone(),
            }),
        };
    }

    let slot = slot_mut(root, path)?;
    *slot = value;
    Ok(())
}

fn push_record(root: &mut Fields, at: &Path, record: Fields) -> Result<(), ChangeError> {
    let slot = slot_mut(root, at)?;
    match slot {
        Value::RecordList(items) => {
            items.push(record);
            Ok(())
        }
        // An empty list parses as an empty TextList; the fixed-shape
        // routes know their element shape, so promote it.
        Value::TextList(items) if items.is_empty() => {
            *slot = Value::RecordList(vec![record]);
            Ok(())
        }
        _ => Err(ChangeError::NotAList { at: at.clone() }),
    }
}

fn append_default(root: &mut Fields, path: &Path) -> Result<(), ChangeError> {
    let slot = slot_mut(root, path)?;
    match slot {
        Value::TextList(items) => {
            items.push(String::new());
            Ok(())
        }
        Value::RecordList(items) => match items.first() {
            Some(first) => {
                let blank = first.blank_like();
                items.push(blank);
                Ok(())
            }
            None => Err(ChangeError::EmptyListShape { at: path.clone() }),
        },
        _ => Err(ChangeError::NotAList { at: path.clone() }),
    }
}

fn remove_at(root: &mut Fields, path: &Path, index: usize) -> Result<(), ChangeError> {
    let slot = slot_mut(root, path)?;
    match slot {
        Value::TextList(items) => {
            if index >= items.len() {
                return Err(ChangeError::IndexOutOfBounds {
                    index,
                    len: items.len(),
                    at: path.clone(),
                });
            }
            items.remove(index);
            Ok(())
        }
        Value::RecordList(items) => {
            if index >= items.len() {
                return Err(ChangeError::IndexOutOfBounds {
                    index,
                    len: items.len(),
                    at: path.clone(),
                });
            }
            items.remove(index);
            Ok(())
        }
        _ => Err(ChangeError::NotAList { at: path.clone() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> ContentDocument {
        ContentDocument::default()
    }

    #[test]
    fn set_replaces_only_the_addressed_node() {
        let before = doc();
        let change = Change::Set {
            path: Path::parse("hero.title").unwrap(),
            value: Value::text("Test Winery"),
        };

        let after = change.apply(&before).unwrap();

        assert_eq!(
            after.get(&Path::parse("hero.title").unwrap()),
            Some(&Value::text("Test Winery"))
        );
        // Siblings at every level are untouched.
        assert_eq!(
            after.get(&Path::parse("hero.badge").unwrap()),
            before.get(&Path::parse("hero.badge").unwrap())
        );
        assert_eq!(
            after.get(&Path::parse("about").unwrap()),
            before.get(&Path::parse("about").unwrap())
        );
        // And the input document itself did not move.
        assert_eq!(
            before.get(&Path::parse("hero.title").unwrap()),
            Some(&Value::text("Vinařství Badin"))
        );
    }

    #[test]
    fn set_is_idempotent() {
        let change = Change::Set {
            path: Path::parse("hero.title").unwrap(),
            value: Value::text("Twice"),
        };

        let once = change.apply(&doc()).unwrap();
        let twice = change.apply(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn set_fails_without_mutating_on_bad_paths() {
        let before = doc();

        // Descends into a string as though it were a record.
        let change = Change::Set {
            path: Path::parse("hero.title.deeper").unwrap(),
            value: Value::text("x"),
        };
        let err = change.apply(&before).unwrap_err();
        assert!(matches!(err, ChangeError::ShapeMismatch { .. }));

        let change = Change::Set {
            path: Path::parse("hero.nonsense").unwrap(),
            value: Value::text("x"),
        };
        let err = change.apply(&before).unwrap_err();
        assert!(matches!(err, ChangeError::UnknownField { .. }));

        assert_eq!(before, doc());
    }

    #[test]
    fn set_reaches_into_string_lists() {
        let change = Change::Set {
            path: Path::parse("contact.details.phones[1]").unwrap(),
            value: Value::text("+420000000000"),
        };

        let after = change.apply(&doc()).unwrap();
        match after.get(&Path::parse("contact.details.phones").unwrap()) {
            Some(Value::TextList(phones)) => {
                assert_eq!(phones[0], "+420731658533");
                assert_eq!(phones[1], "+420000000000");
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn timeline_append_then_remove_restores_the_document() {
        let before = doc();

        let appended = Change::AppendTimeline.apply(&before).unwrap();
        match appended.get(&timeline_route()) {
            Some(Value::RecordList(items)) => {
                assert_eq!(items.len(), 5);
                let last = items.last().unwrap();
                assert_eq!(last.get("year"), Some(&Value::text("")));
                assert_eq!(last.get("title"), Some(&Value::text("")));
                assert_eq!(last.get("description"), Some(&Value::text("")));
            }
            other => panic!("unexpected shape: {other:?}"),
        }

        let removed = Change::RemoveTimeline { index: 4 }.apply(&appended).unwrap();
        assert_eq!(removed, before);
    }

    #[test]
    fn feature_append_targets_the_document_root() {
        let appended = Change::AppendFeature.apply(&doc()).unwrap();
        match appended.get(&features_route()) {
            Some(Value::RecordList(items)) => {
                assert_eq!(items.len(), 4);
                assert_eq!(
                    items.last().unwrap().get("icon"),
                    Some(&Value::text(DEFAULT_FEATURE_ICON))
                );
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn generic_append_copies_the_first_element_shape() {
        let before = doc();
        let path = features_route();

        let appended = Change::Append { path: path.clone() }.apply(&before).unwrap();
        match appended.get(&path) {
            Some(Value::RecordList(items)) => {
                let last = items.last().unwrap();
                // Field names copied from element 0, strings emptied.
                assert_eq!(last.get("icon"), Some(&Value::text("")));
                assert_eq!(last.get("title"), Some(&Value::text("")));
                assert!(last.get("description").is_some());
            }
            other => panic!("unexpected shape: {other:?}"),
        }

        let removed = Change::Remove { path, index: 3 }.apply(&appended).unwrap();
        assert_eq!(removed, before);
    }

    #[test]
    fn generic_append_on_empty_record_list_is_rejected() {
        let mut document = doc();
        document.root_mut().set("extras", Value::RecordList(Vec::new()));

        let err = Change::Append {
            path: Path::field("extras"),
        }
        .apply(&document)
        .unwrap_err();
        assert!(matches!(err, ChangeError::EmptyListShape { .. }));
    }

    #[test]
    fn append_on_a_non_list_is_a_reported_error_not_a_panic() {
        let before = doc();
        let err = Change::Append {
            path: Path::parse("hero.title").unwrap(),
        }
        .apply(&before)
        .unwrap_err();
        assert!(matches!(err, ChangeError::NotAList { .. }));
        assert_eq!(before, doc());
    }

    #[test]
    fn remove_out_of_bounds_reports_the_length() {
        let err = Change::RemoveTimeline { index: 99 }.apply(&doc()).unwrap_err();
        assert_eq!(
            err,
            ChangeError::IndexOutOfBounds {
                index: 99,
                len: 4,
                at: timeline_route(),
            }
        );
    }

    #[test]
    fn named_routes_promote_an_empty_list() {
        let mut document = doc();
        document
            .root_mut()
            .set("features", Value::TextList(Vec::new()));

        let appended = Change::AppendFeature.apply(&document).unwrap();
        match appended.get(&features_route()) {
            Some(Value::RecordList(items)) => assert_eq!(items.len(), 1),
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn changes_round_trip_through_json() {
        let change = Change::Set {
            path: Path::parse("popup.enabled").unwrap(),
            value: Value::Flag(false),
        };
        let json = serde_json::to_string(&change).unwrap();
        let back: Change = serde_json::from_str(&json).unwrap();
        assert_eq!(back, change);

        let json = serde_json::to_string(&Change::AppendTimeline).unwrap();
        assert!(json.contains("appendTimeline"));
    }
}
