//! # Badin content engine
//!
//! The editable heart of the winery site: one nested content document,
//! typed paths into it, one-change-at-a-time patching, and a form model
//! derived from the document's own shape.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ editor: document shape → Control tree       │
//! │   (what the admin form looks like)          │
//! └─────────────────────────────────────────────┘
//!                     ↓ edit intents
//! ┌─────────────────────────────────────────────┐
//! │ changes: Change applied at a typed Path     │
//! │   - copy-on-apply, siblings preserved       │
//! │   - fixed routes for timeline / features    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ document: the whole-site content tree,      │
//! │   loaded whole and saved whole              │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use badin_content::{Change, ContentDocument, EditSession, Path, Value};
//!
//! let mut session = EditSession::new(ContentDocument::default());
//!
//! session.apply(&Change::Set {
//!     path: Path::parse("hero.title").unwrap(),
//!     value: Value::text("Test Winery"),
//! }).unwrap();
//!
//! let edited = session.into_document();
//! assert_eq!(
//!     edited.get(&Path::parse("hero.title").unwrap()),
//!     Some(&Value::text("Test Winery")),
//! );
//! ```

mod changes;
mod document;
mod editor;
mod path;
mod session;
mod value;

pub use changes::{features_route, timeline_route, Change, ChangeError, DEFAULT_FEATURE_ICON};
pub use document::ContentDocument;
pub use editor::{format_field_name, plan_document, plan_field, Control, ListRoute};
pub use path::{Path, PathError, Segment};
pub use session::EditSession;
pub use value::{Fields, ShapeError, Value};
