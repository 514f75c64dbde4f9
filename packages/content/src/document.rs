//! # The content document
//!
//! All editable site text and configuration lives in one nested
//! document. It is loaded whole, edited field by field in memory, and
//! written back whole on save; there is no per-field persistence.
//!
//! The default document below mirrors the data file the site launched
//! with, so a fresh install renders the full public site before anyone
//! has touched the admin.

use serde::{Deserialize, Serialize};

use crate::path::{Path, Segment};
use crate::value::{Fields, Value};

/// The whole editable site content as one tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentDocument {
    root: Fields,
}

impl ContentDocument {
    pub fn new(root: Fields) -> ContentDocument {
        ContentDocument { root }
    }

    pub fn root(&self) -> &Fields {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Fields {
        &mut self.root
    }

    /// Read-only lookup of the node at `path`, if the path resolves.
    ///
    /// String-list elements are not `Value` nodes and resolve to `None`;
    /// callers read them through the parent list.
    pub fn get(&self, path: &Path) -> Option<&Value> {
        let mut segments = path.segments().iter();
        let first = match segments.next()? {
            Segment::Field(name) => name,
            Segment::Index(_) => return None,
        };

        let mut current = self.root.get(first)?;
        while let Some(segment) = segments.next() {
            current = match (segment, current) {
                (Segment::Field(name), Value::Record(fields)) => fields.get(name)?,
                (Segment::Index(index), Value::RecordList(items)) => {
                    // Step into the record and continue with its fields.
                    let record = items.get(*index)?;
                    return get_in_record(record, segments);
                }
                _ => return None,
            };
        }
        Some(current)
    }
}

fn get_in_record<'a, 'b>(
    record: &'a Fields,
    mut segments: impl Iterator<Item = &'b Segment>,
) -> Option<&'a Value> {
    let first = match segments.next() {
        Some(Segment::Field(name)) => name,
        _ => return None,
    };

    let mut current = record.get(first)?;
    while let Some(segment) = segments.next() {
        current = match (segment, current) {
            (Segment::Field(name), Value::Record(fields)) => fields.get(name)?,
            (Segment::Index(index), Value::RecordList(items)) => {
                let inner = items.get(*index)?;
                return get_in_record(inner, segments);
            }
            _ => return None,
        };
    }
    Some(current)
}

impl Default for ContentDocument {
    fn default() -> ContentDocument {
        ContentDocument {
            root: default_root(),
        }
    }
}

fn record(entries: Vec<(&str, Value)>) -> Value {
    Value::Record(fields(entries))
}

fn fields(entries: Vec<(&str, Value)>) -> Fields {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn text(s: &str) -> Value {
    Value::text(s)
}

fn text_list(items: &[&str]) -> Value {
    Value::TextList(items.iter().map(|s| s.to_string()).collect())
}

fn default_root() -> Fields {
    fields(vec![
        (
            "hero",
            record(vec![
                ("badge", text("Rodinné vinařství od roku 1960")),
                ("title", text("Vinařství Badin")),
                (
                    "subtitle",
                    text(
                        "Tradiční rodinné vinařství v Moravských Bránicích, kde každá láhev \
                         vypráví příběh naší rodiny a našeho terroir.",
                    ),
                ),
                ("buttonPrimary", text("Objevte naše vína")),
                ("buttonSecondary", text("Navštivte nás")),
                ("backgroundImage", text("/vinice.jpeg")),
            ]),
        ),
        (
            "about",
            record(vec![
                ("badge", text("Od roku 1960")),
                ("title", text("Rodinné vinařství s tradicí")),
                (
                    "paragraphs",
                    text_list(&[
                        "Malé rodinné vinařství Badinovi bylo založeno v roce 1992. Navázali \
                         jsme na zkušenosti našich rodičů a prarodičů, kteří se věnovali vínu \
                         již od roku 1960.",
                        "Snažíme se o produkci vín z hroznů vypěstovaných převážně ve \
                         vlastních vinicích.",
                    ]),
                ),
                (
                    "timeline",
                    Value::RecordList(vec![
                        fields(vec![
                            ("year", text("1960")),
                            ("title", text("Začátek rodinné tradice")),
                            (
                                "description",
                                text(
                                    "Naši rodiče a prarodiče začali s pěstováním vinné révy a \
                                     výrobou vína.",
                                ),
                            ),
                        ]),
                        fields(vec![
                            ("year", text("1992")),
                            ("title", text("Založení vinařství")),
                            (
                                "description",
                                text(
                                    "Oficiální založení Vinařství Badin a pokračování v rodinné \
                                     tradici.",
                                ),
                            ),
                        ]),
                        fields(vec![
                            ("year", text("2008")),
                            ("title", text("Otevření vinného sklepa")),
                            (
                                "description",
                                text(
                                    "Začali jsme prodávat víno ve vlastním sklepě v Moravských \
                                     Bránicích.",
                                ),
                            ),
                        ]),
                        fields(vec![
                            ("year", text("2020")),
                            ("title", text("Rekonstrukce sklepa")),
                            (
                                "description",
                                text(
                                    "Kompletní rekonstrukce vinného sklepa pro lepší zážitek \
                                     našich zákazníků.",
                                ),
                            ),
                        ]),
                    ]),
                ),
                ("cta", text("Navštivte nás")),
            ]),
        ),
        (
            "news",
            record(vec![
                ("title", text("Aktuality")),
                (
                    "subtitle",
                    text(
                        "Nejnovější informace z našeho vinařství, pozvánky na akce a novinky \
                         v nabídce vín.",
                    ),
                ),
            ]),
        ),
        (
            "wines",
            record(vec![
                ("title", text("Naše vína")),
                (
                    "subtitle",
                    text(
                        "Vyrábíme kvalitní vína z hroznů z vlastních vinic. Každá láhev je \
                         výsledkem naší péče a lásky k vinařskému řemeslu.",
                    ),
                ),
                ("cta", text("Navštivte naši vinotéku")),
            ]),
        ),
        (
            "contact",
            record(vec![
                ("title", text("Kde nás najdete")),
                (
                    "intro",
                    text(
                        "Víno prodáváme ve vlastním sklepě v Moravských Bránicích od roku \
                         2008. V roce 2020 jsme sklep rekonstruovali. V nabídce máme prodej \
                         vín v lahvích, v bag in boxech a stáčených do PET lahví.",
                    ),
                ),
                (
                    "details",
                    record(vec![
                        (
                            "company",
                            record(vec![
                                ("name", text("Vinařství Badin")),
                                ("ico", text("46912126")),
                            ]),
                        ),
                        ("owner", text("František Badin")),
                        ("address", text("Moravské Bránice č.p. 383")),
                        ("phones", text_list(&["+420731658533", "+420734853217"])),
                        ("email", text("info@vinarstvibadin.cz")),
                        (
                            "openingHours",
                            text("Návštěvu prosím domluvte předem telefonicky"),
                        ),
                        ("gps", text("49.1769719N, 16.4129109E")),
                    ]),
                ),
            ]),
        ),
        // Root level on purpose; every other editable list lives inside
        // its section. The patch routing depends on this location.
        (
            "features",
            Value::RecordList(vec![
                fields(vec![
                    ("icon", text("GrapeIcon")),
                    ("title", text("Vlastní vinice")),
                    (
                        "description",
                        text("Pěstujeme hrozny ve vlastních vinicích s láskou a péčí."),
                    ),
                ]),
                fields(vec![
                    ("icon", text("WineIcon")),
                    ("title", text("Tradiční výroba")),
                    (
                        "description",
                        text("Navazujeme na rodinnou tradici výroby vína od roku 1960."),
                    ),
                ]),
                fields(vec![
                    ("icon", text("MapPinIcon")),
                    ("title", text("Moravské Bránice")),
                    (
                        "description",
                        text("Najdete nás v srdci moravského vinařského regionu."),
                    ),
                ]),
            ]),
        ),
        (
            "popup",
            record(vec![
                ("title", text("Jarní otevřené sklepy 2023")),
                (
                    "description",
                    text(
                        "Navštivte naše sklepy ve dnech 15.-16. dubna a ochutnejte nové \
                         ročníky našich vín. Těšíme se na vás!",
                    ),
                ),
                ("buttonText", text("Více informací")),
                ("buttonLink", text("#aktuality")),
                ("imageUrl", text("/vineyard-event.jpg")),
                ("enabled", Value::Flag(true)),
            ]),
        ),
    ])
}
