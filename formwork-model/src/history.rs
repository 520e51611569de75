//! Bounded generation history.

use formwork_types::{Generation, TemplateRef};
use serde::{Deserialize, Serialize};

/// Upper bound on retained history entries per unit.
pub const MAX_ENTRIES: usize = 10;

/// An immutable snapshot of a past generation's configuration.
///
/// Created only as a side effect of successfully applying an update,
/// never on creation or deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub generation: Generation,
    pub template_ref: TemplateRef,
    #[serde(default)]
    pub values: serde_json::Value,
}

impl HistoryEntry {
    /// Creates a history entry.
    #[must_use]
    pub fn new(generation: Generation, template_ref: TemplateRef, values: serde_json::Value) -> Self {
        Self {
            generation,
            template_ref,
            values,
        }
    }
}

/// A unit's prior configurations, newest first, capped at
/// [`MAX_ENTRIES`].
///
/// Serializes as a bare array, matching the persisted resource format.
/// The type is a value: [`History::recording`] returns a new history and
/// never mutates or aliases the existing entry list. The bound is
/// enforced when recording; a stored history is carried as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(Vec<HistoryEntry>);

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The retained entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.0
    }

    /// The most recently recorded entry.
    #[must_use]
    pub fn newest(&self) -> Option<&HistoryEntry> {
        self.0.first()
    }

    /// Iterates entries newest first.
    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.0.iter()
    }

    /// Returns a new history with `entry` prepended and the tail capped
    /// at [`MAX_ENTRIES`], dropping the oldest entries.
    #[must_use]
    pub fn recording(&self, entry: HistoryEntry) -> Self {
        let mut entries = Vec::with_capacity((self.0.len() + 1).min(MAX_ENTRIES));
        entries.push(entry);
        entries.extend(self.0.iter().take(MAX_ENTRIES - 1).cloned());
        Self(entries)
    }

    /// Finds the entry whose generation stringifies to `requested`.
    ///
    /// Generations are monotonic and unique under normal operation, but
    /// duplicates are not structurally prevented; when they occur, the
    /// last match in scan order wins.
    #[must_use]
    pub fn entry_for(&self, requested: &str) -> Option<&HistoryEntry> {
        self.0
            .iter()
            .filter(|entry| entry.generation.to_string() == requested)
            .next_back()
    }
}

impl From<Vec<HistoryEntry>> for History {
    /// Wraps entries as stored; the bound applies when recording, not
    /// here.
    fn from(entries: Vec<HistoryEntry>) -> Self {
        Self(entries)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
