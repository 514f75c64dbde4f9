//! # Typed content paths
//!
//! The admin UI addresses fields with dotted/bracketed strings like
//! `about.timeline[0].year`. Parsing happens once, at the edge; everything
//! past that point works with a typed segment list so a malformed path is
//! a diagnosable error instead of a silent miss.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// One step into the content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Descend into a record field by name.
    Field(String),
    /// Descend into a list element by position.
    Index(usize),
}

/// An ordered sequence of segments identifying a node in the document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// The empty path, addressing the document root.
    pub fn root() -> Path {
        Path::default()
    }

    /// A single-field path.
    pub fn field(name: impl Into<String>) -> Path {
        Path {
            segments: vec![Segment::Field(name.into())],
        }
    }

    /// Build a path from an owned segment list.
    pub fn from_segments(segments: Vec<Segment>) -> Path {
        Path { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Extend with a field segment, returning the new path.
    pub fn join(&self, name: impl Into<String>) -> Path {
        let mut segments = self.segments.clone();
        segments.push(Segment::Field(name.into()));
        Path { segments }
    }

    /// Extend with an index segment, returning the new path.
    pub fn join_index(&self, index: usize) -> Path {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        Path { segments }
    }

    /// The first `depth` segments as a path, used for error reporting.
    pub fn prefix(&self, depth: usize) -> Path {
        Path {
            segments: self.segments[..depth.min(self.segments.len())].to_vec(),
        }
    }

    /// Parse the dotted/bracketed syntax (`contact.details.phones`,
    /// `about.timeline[2].title`).
    pub fn parse(text: &str) -> Result<Path, PathError> {
        if text.is_empty() {
            return Err(PathError::Empty);
        }

        let mut segments = Vec::new();
        let mut chars = text.char_indices().peekable();
        let mut field_start: Option<usize> = None;
        let mut expect_field = true;

        while let Some((at, ch)) = chars.next() {
            match ch {
                '.' => {
                    flush_field(text, field_start.take(), &mut segments)?;
                    if segments.is_empty() || expect_field {
                        return Err(PathError::EmptySegment {
                            text: text.to_string(),
                        });
                    }
                    expect_field = true;
                }
                '[' => {
                    flush_field(text, field_start.take(), &mut segments)?;
                    if segments.is_empty() {
                        return Err(PathError::EmptySegment {
                            text: text.to_string(),
                        });
                    }
                    let mut digits = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == ']' {
                            closed = true;
                            break;
                        }
                        digits.push(c);
                    }
                    if !closed {
                        return Err(PathError::UnclosedBracket {
                            text: text.to_string(),
                        });
                    }
                    let index = digits.parse::<usize>().map_err(|_| PathError::BadIndex {
                        text: text.to_string(),
                        index: digits.clone(),
                    })?;
                    segments.push(Segment::Index(index));
                    expect_field = false;
                }
                ']' => {
                    return Err(PathError::UnexpectedChar {
                        text: text.to_string(),
                        at,
                    })
                }
                _ => {
                    if field_start.is_none() {
                        field_start = Some(at);
                    }
                    expect_field = false;
                }
            }
        }

        flush_field(text, field_start, &mut segments)?;
        if expect_field {
            return Err(PathError::EmptySegment {
                text: text.to_string(),
            });
        }

        Ok(Path { segments })
    }
}

fn flush_field(
    text: &str,
    start: Option<usize>,
    segments: &mut Vec<Segment>,
) -> Result<(), PathError> {
    if let Some(start) = start {
        let end = text[start..]
            .find(['.', '['])
            .map(|off| start + off)
            .unwrap_or(text.len());
        let name = &text[start..end];
        if name.is_empty() {
            return Err(PathError::EmptySegment {
                text: text.to_string(),
            });
        }
        segments.push(Segment::Field(name.to_string()));
    }
    Ok(())
}

/// A path string that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("empty path")]
    Empty,

    #[error("empty segment in path `{text}`")]
    EmptySegment { text: String },

    #[error("`{index}` is not a list index in path `{text}`")]
    BadIndex { text: String, index: String },

    #[error("unclosed `[` in path `{text}`")]
    UnclosedBracket { text: String },

    #[error("unexpected character at offset {at} in path `{text}`")]
    UnexpectedChar { text: String, at: usize },
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{name}")?;
                }
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Path, PathError> {
        Path::parse(s)
    }
}

// Paths travel over the wire in their string form.
impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Path, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Path::parse(&raw).map_err(D::Error::custom)
    }
}
