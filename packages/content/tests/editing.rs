//! End-to-end editing behavior over the public crate API.

use badin_content::{
    plan_field, Change, ContentDocument, Control, EditSession, ListRoute, Path, Value,
};

fn set(path: &str, value: &str) -> Change {
    Change::Set {
        path: Path::parse(path).unwrap(),
        value: Value::text(value),
    }
}

#[test]
fn sibling_subtrees_survive_every_kind_of_change() {
    let before = ContentDocument::default();

    let changes = vec![
        set("hero.title", "Test Winery"),
        set("contact.details.company.name", "Jiné vinařství"),
        Change::AppendTimeline,
        Change::AppendFeature,
        Change::Set {
            path: Path::parse("popup.enabled").unwrap(),
            value: Value::Flag(false),
        },
    ];

    let mut doc = before.clone();
    for change in &changes {
        doc = change.apply(&doc).unwrap();
    }

    // Untouched branches are deep-equal to the original.
    for untouched in ["news", "wines"] {
        assert_eq!(
            doc.get(&Path::parse(untouched).unwrap()),
            before.get(&Path::parse(untouched).unwrap()),
            "section {untouched} must not change"
        );
    }
    assert_eq!(
        doc.get(&Path::parse("about.paragraphs").unwrap()),
        before.get(&Path::parse("about.paragraphs").unwrap())
    );
    assert_eq!(
        doc.get(&Path::parse("hero.backgroundImage").unwrap()),
        before.get(&Path::parse("hero.backgroundImage").unwrap())
    );
}

#[test]
fn applying_the_same_change_twice_is_idempotent() {
    let change = set("wines.cta", "Přijďte ochutnat");
    let once = change.apply(&ContentDocument::default()).unwrap();
    let twice = change.apply(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn append_then_remove_is_a_no_op_for_each_list_kind() {
    let before = ContentDocument::default();

    let appended = Change::AppendTimeline.apply(&before).unwrap();
    let restored = Change::RemoveTimeline { index: 4 }.apply(&appended).unwrap();
    assert_eq!(restored, before);

    let appended = Change::AppendFeature.apply(&before).unwrap();
    let restored = Change::RemoveFeature { index: 3 }.apply(&appended).unwrap();
    assert_eq!(restored, before);

    let paragraphs = Path::parse("about.paragraphs").unwrap();
    let appended = Change::Append {
        path: paragraphs.clone(),
    }
    .apply(&before)
    .unwrap();
    let restored = Change::Remove {
        path: paragraphs,
        index: 2,
    }
    .apply(&appended)
    .unwrap();
    assert_eq!(restored, before);
}

#[test]
fn timeline_rule_fires_on_the_literal_name_anywhere() {
    // A `timeline` list nested far away from `about`.
    let raw = serde_json::json!({
        "weird": {
            "deeply": {
                "timeline": [ { "year": "2001", "title": "t", "description": "d" } ]
            }
        }
    });
    let doc: ContentDocument = serde_json::from_value(raw).unwrap();

    let nested = doc
        .get(&Path::parse("weird.deeply.timeline").unwrap())
        .unwrap();
    let control = plan_field("timeline", nested, &Path::parse("weird.deeply").unwrap());

    match control {
        Control::Cards { route, .. } => assert_eq!(route, ListRoute::Timeline),
        other => panic!("unexpected control: {other:?}"),
    }
}

#[test]
fn feature_changes_ignore_the_panel_prefix() {
    let before = ContentDocument::default();

    // However the editor was instantiated, the change itself targets the
    // root-level key.
    let appended = Change::AppendFeature.apply(&before).unwrap();
    match appended.get(&Path::parse("features").unwrap()) {
        Some(Value::RecordList(items)) => assert_eq!(items.len(), 4),
        other => panic!("unexpected shape: {other:?}"),
    }
    // No section gained a features list.
    assert!(appended.get(&Path::parse("about.features").unwrap()).is_none());
}

#[test]
fn a_session_accumulates_changes_and_survives_failures() {
    let mut session = EditSession::new(ContentDocument::default());

    session.apply(&set("hero.title", "Test Winery")).unwrap();
    session
        .apply(&Change::RemoveTimeline { index: 3 })
        .unwrap();
    // A bad edit reports and changes nothing.
    assert!(session.apply(&set("hero.title.nope", "x")).is_err());

    let doc = session.into_document();
    assert_eq!(
        doc.get(&Path::parse("hero.title").unwrap()),
        Some(&Value::text("Test Winery"))
    );
    match doc.get(&Path::parse("about.timeline").unwrap()) {
        Some(Value::RecordList(items)) => assert_eq!(items.len(), 3),
        other => panic!("unexpected shape: {other:?}"),
    }
}

#[test]
fn the_form_for_the_default_document_serializes() {
    let doc = ContentDocument::default();
    let controls = badin_content::plan_document(&doc);

    let json = serde_json::to_value(&controls).unwrap();
    let rendered = json.as_array().unwrap();
    assert_eq!(rendered.len(), 7);

    // Spot-check: the hero section exposes an image control for the
    // background with its full path.
    let hero = rendered
        .iter()
        .find(|c| c["label"] == "Hero")
        .expect("hero group");
    let background = hero["children"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["kind"] == "image")
        .expect("image control");
    assert_eq!(background["path"], "hero.backgroundImage");
}
