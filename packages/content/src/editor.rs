//! # Generic editor dispatch
//!
//! The admin edits the content document through a form that is derived
//! from the document itself: every node's shape decides which input it
//! gets. This module builds that form as a tree of [`Control`]s, which
//! the admin frontend renders and whose edit intents come back as
//! [`Change`](crate::Change)s.
//!
//! Dispatch precedence matters and is reproduced here exactly:
//!
//! 1. a field literally named `timeline` holding a list;
//! 2. a field literally named `features` holding a list;
//! 3. strings (image upload when the name mentions an image/url, else
//!    single- or multi-line text by length);
//! 4. booleans;
//! 5. lists of strings;
//! 6. lists of records;
//! 7. records.
//!
//! Rules 1 and 2 fire on the field NAME alone, at any depth; their
//! edits are routed to the fixed storage locations regardless of where
//! the list was encountered. Empty lists cannot fire rules 1-2's record
//! handling nor offer a shaped "add" in rule 6, see `can_append`.

use serde::Serialize;

use crate::changes::{features_route, timeline_route};
use crate::path::Path;
use crate::value::{Fields, Value};

/// Maximum length of a string edited on a single line.
const SINGLE_LINE_LIMIT: usize = 50;

/// Where list edits for a card list are routed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "target", rename_all = "camelCase")]
pub enum ListRoute {
    /// `Change::AppendTimeline` / `Change::RemoveTimeline`.
    Timeline,
    /// `Change::AppendFeature` / `Change::RemoveFeature`.
    Features,
    /// Generic `Change::Append` / `Change::Remove` at this path.
    At { path: Path },
}

/// One piece of the derived form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Control {
    /// Single-line text input.
    Text {
        path: Path,
        label: String,
        value: String,
    },
    /// Multi-line text input.
    TextArea {
        path: Path,
        label: String,
        value: String,
    },
    /// Image upload; the stored value stays a plain URL string.
    Image {
        path: Path,
        label: String,
        url: String,
    },
    /// On/off switch.
    Toggle {
        path: Path,
        label: String,
        on: bool,
    },
    /// Editable list of strings with per-line remove and append-empty.
    TextList {
        path: Path,
        label: String,
        items: Vec<String>,
    },
    /// A list of records rendered as cards. `cards[i]` holds the
    /// controls for element `i`; append/remove intents go through
    /// `route`.
    Cards {
        label: String,
        route: ListRoute,
        cards: Vec<Vec<Control>>,
        can_append: bool,
    },
    /// A nested record; children carry their own fully-qualified paths.
    Group {
        label: String,
        children: Vec<Control>,
    },
}

/// Build the full form for a document: one control per top-level key.
pub fn plan_document(doc: &crate::ContentDocument) -> Vec<Control> {
    doc.root()
        .iter()
        .map(|(name, value)| plan_field(name, value, &Path::root()))
        .collect()
}

/// Decide how to edit `value`, reached through `prefix` as field `name`.
pub fn plan_field(name: &str, value: &Value, prefix: &Path) -> Control {
    // Rules 1-2: literal field names, any depth, routed targets. These
    // fire for ANY list value; elements that are not records render as
    // blank cards, the same as the admin always did.
    if name == "timeline" {
        match value {
            Value::RecordList(items) => return timeline_cards(items),
            Value::TextList(items) => {
                let blanks = vec![Fields::new(); items.len()];
                return timeline_cards(&blanks);
            }
            _ => {}
        }
    }
    if name == "features" {
        match value {
            Value::RecordList(items) => return feature_cards(items),
            Value::TextList(items) => {
                let blanks = vec![Fields::new(); items.len()];
                return feature_cards(&blanks);
            }
            _ => {}
        }
    }

    let path = prefix.join(name);
    match value {
        Value::Text(text) => plan_text(name, path, text),
        Value::Flag(on) => Control::Toggle {
            path,
            label: format_field_name(name),
            on: *on,
        },
        Value::TextList(items) => Control::TextList {
            path,
            label: format_field_name(name),
            items: items.clone(),
        },
        Value::RecordList(items) => {
            let cards = items
                .iter()
                .enumerate()
                .map(|(index, record)| plan_record(record, &path.join_index(index)))
                .collect::<Vec<_>>();
            Control::Cards {
                label: format_field_name(name),
                route: ListRoute::At { path },
                // No element shape to copy from an empty list.
                can_append: !items.is_empty(),
                cards,
            }
        }
        Value::Record(fields) => Control::Group {
            label: format_field_name(name),
            children: plan_record(fields, &path),
        },
    }
}

fn plan_text(name: &str, path: Path, text: &str) -> Control {
    let label = format_field_name(name);
    if is_image_field(name) {
        Control::Image {
            path,
            label,
            url: text.to_string(),
        }
    } else if text.chars().count() > SINGLE_LINE_LIMIT {
        Control::TextArea {
            path,
            label,
            value: text.to_string(),
        }
    } else {
        Control::Text {
            path,
            label,
            value: text.to_string(),
        }
    }
}

fn plan_record(record: &Fields, prefix: &Path) -> Vec<Control> {
    record
        .iter()
        .map(|(name, value)| plan_field(name, value, prefix))
        .collect()
}

/// Timeline cards use the fixed three-field shape with the labels the
/// admin has always shown, and paths under the routed storage location.
fn timeline_cards(items: &[Fields]) -> Control {
    let route = timeline_route();
    let cards = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let base = route.join_index(index);
            vec![
                Control::Text {
                    path: base.join("year"),
                    label: "Rok".to_string(),
                    value: item_text(item, "year"),
                },
                Control::Text {
                    path: base.join("title"),
                    label: "Název události".to_string(),
                    value: item_text(item, "title"),
                },
                Control::TextArea {
                    path: base.join("description"),
                    label: "Popis".to_string(),
                    value: item_text(item, "description"),
                },
            ]
        })
        .collect();

    Control::Cards {
        label: format_field_name("timeline"),
        route: ListRoute::Timeline,
        cards,
        can_append: true,
    }
}

fn feature_cards(items: &[Fields]) -> Control {
    let route = features_route();
    let cards = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let base = route.join_index(index);
            vec![
                Control::Text {
                    path: base.join("icon"),
                    label: "Ikona".to_string(),
                    value: item_text(item, "icon"),
                },
                Control::Text {
                    path: base.join("title"),
                    label: "Název funkce".to_string(),
                    value: item_text(item, "title"),
                },
                Control::TextArea {
                    path: base.join("description"),
                    label: "Popis".to_string(),
                    value: item_text(item, "description"),
                },
            ]
        })
        .collect();

    Control::Cards {
        label: format_field_name("features"),
        route: ListRoute::Features,
        cards,
        can_append: true,
    }
}

fn item_text(item: &Fields, field: &str) -> String {
    match item.get(field) {
        Some(Value::Text(text)) => text.clone(),
        _ => String::new(),
    }
}

fn is_image_field(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.contains("image") || lower.contains("img") || lower.contains("url")
}

/// Turn a camelCase or snake_case field name into a label:
/// `backgroundImage` becomes `Background Image`.
pub fn format_field_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch == '_' {
            out.push(' ');
        } else if ch.is_uppercase() && !out.is_empty() {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    let mut chars = out.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
