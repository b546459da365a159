// ScanScope - app/annotations.rs
//
// Session-lifetime annotation store: the mutable checked/comment side-table
// keyed by record identity. Owned by the app layer and passed by reference
// into render calls; both grouped views resolve through the same key, so a
// mutation made in one view is the mutation seen in the other.
//
// Nothing here is persisted. A new scan clears the table.

use crate::core::model::RecordKey;
use std::collections::HashMap;

/// User annotations for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    /// User-toggleable review flag.
    pub checked: bool,

    /// Free-text note.
    pub comment: String,
}

impl Annotation {
    /// True when the annotation still holds its defaults and need not be
    /// stored.
    pub fn is_default(&self) -> bool {
        !self.checked && self.comment.is_empty()
    }
}

/// Annotations for the current session, keyed by `(host, port)`.
#[derive(Debug, Clone, Default)]
pub struct AnnotationStore {
    map: HashMap<RecordKey, Annotation>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The annotation for `key`, if one has been made.
    pub fn get(&self, key: &RecordKey) -> Option<&Annotation> {
        self.map.get(key)
    }

    /// The checked flag for `key` (false when unannotated).
    pub fn checked(&self, key: &RecordKey) -> bool {
        self.map.get(key).map(|a| a.checked).unwrap_or(false)
    }

    /// The comment for `key` (empty when unannotated).
    pub fn comment(&self, key: &RecordKey) -> &str {
        self.map.get(key).map(|a| a.comment.as_str()).unwrap_or("")
    }

    /// Mutable access to the annotation for `key`, creating a default
    /// entry on first touch.
    pub fn entry(&mut self, key: &RecordKey) -> &mut Annotation {
        self.map.entry(key.clone()).or_default()
    }

    /// Number of records carrying a non-default annotation.
    pub fn annotated_count(&self) -> usize {
        self.map.values().filter(|a| !a.is_default()).count()
    }

    /// Number of records currently checked.
    pub fn checked_count(&self) -> usize {
        self.map.values().filter(|a| a.checked).count()
    }

    /// Drop all annotations (new scan loaded).
    pub fn clear(&mut self) {
        self.map.clear();
    }
}
