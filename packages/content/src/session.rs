//! # Edit sessions
//!
//! An edit session is one admin's private working copy of the content
//! document. Changes apply to the copy one at a time; a change that
//! fails leaves the copy exactly as it was, so a single bad edit never
//! aborts the session. Saving and reloading are the caller's business:
//! the session hands the finished document back and can be reset to a
//! freshly fetched one.

use crate::changes::{Change, ChangeError};
use crate::document::ContentDocument;

/// A private in-memory working copy of the document.
#[derive(Debug, Clone)]
pub struct EditSession {
    original: ContentDocument,
    working: ContentDocument,
}

impl EditSession {
    pub fn new(document: ContentDocument) -> EditSession {
        EditSession {
            working: document.clone(),
            original: document,
        }
    }

    /// The current state of the working copy.
    pub fn document(&self) -> &ContentDocument {
        &self.working
    }

    /// Whether any change has been applied since the session started or
    /// was last reset.
    pub fn is_dirty(&self) -> bool {
        self.working != self.original
    }

    /// Apply one change to the working copy.
    ///
    /// On error the working copy is untouched; the error is returned for
    /// local reporting and the session stays usable.
    pub fn apply(&mut self, change: &Change) -> Result<(), ChangeError> {
        self.working = change.apply(&self.working)?;
        Ok(())
    }

    /// Discard all edits, e.g. after a failed save-and-refetch.
    pub fn reset(&mut self, document: ContentDocument) {
        self.working = document.clone();
        self.original = document;
    }

    /// Hand the edited document over for saving.
    pub fn into_document(self) -> ContentDocument {
        self.working
    }
}
