// src/catalog/view.rs
// Expand/collapse state for the example catalog. At most one record is
// expanded at a time, tracked as a single optional index.

use tracing::warn;

use crate::clipboard::Clipboard;

use super::ExampleRecord;

/// Presents a sequence of records, one of which may be expanded.
///
/// The view owns its state for the lifetime of one catalog surface; it starts
/// fully collapsed and is dropped with the surface. Records are read-only
/// from here.
pub struct CatalogView {
    records: Vec<ExampleRecord>,
    expanded: Option<usize>,
}

impl CatalogView {
    pub fn new(records: Vec<ExampleRecord>) -> Self {
        Self {
            records,
            expanded: None,
        }
    }

    pub fn records(&self) -> &[ExampleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the currently expanded record, if any.
    pub fn expanded_index(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Toggle a record between collapsed and expanded. Expanding one record
    /// collapses whichever record was expanded before, in the same update.
    /// `index` must be in range; passing an out-of-range index is a caller
    /// bug, not a runtime condition.
    pub fn toggle_expand(&mut self, index: usize) {
        debug_assert!(index < self.records.len(), "index out of range");
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Hand `records[index].code` to the clipboard, verbatim. Best effort:
    /// the catalog surface shows no confirmation either way, so failures are
    /// only logged.
    pub fn copy_code(&self, index: usize, clipboard: &mut dyn Clipboard) {
        let record = &self.records[index];
        if let Err(e) = clipboard.copy_text(&record.code) {
            warn!("clipboard copy failed for '{}': {}", record.title, e);
        }
    }
}
