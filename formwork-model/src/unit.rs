//! The managed configuration unit.

use crate::{History, HistoryEntry};
use formwork_types::{Error, Generation, Result, TemplateRef};
use serde::{Deserialize, Serialize};

/// A declarative configuration unit: a versioned description of a
/// deployable workload, defined by a template reference and the
/// user-supplied parameter values for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub name: String,
    /// Version marker owned and incremented by the resource store.
    #[serde(default)]
    pub generation: Generation,
    /// Opaque optimistic-concurrency token owned by the resource store;
    /// carried through updates unchanged.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_version: String,
    pub spec: UnitSpec,
    /// Derived/observed state. Opaque to this core.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub status: serde_json::Value,
    #[serde(default, skip_serializing_if = "History::is_empty")]
    pub history: History,
}

/// What the unit deploys: which template, with which parameter values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitSpec {
    pub template_ref: TemplateRef,
    #[serde(default)]
    pub values: serde_json::Value,
}

impl UnitSpec {
    /// Creates a spec.
    #[must_use]
    pub fn new(template_ref: TemplateRef, values: serde_json::Value) -> Self {
        Self {
            template_ref,
            values,
        }
    }

    /// Extracts a value from `values` using a JSON pointer (e.g.
    /// "/general/image").
    #[must_use]
    pub fn value_at(&self, pointer: &str) -> Option<&serde_json::Value> {
        self.values.pointer(pointer)
    }

    /// Extracts a string value from `values` using a JSON pointer.
    #[must_use]
    pub fn value_str(&self, pointer: &str) -> Option<&str> {
        self.value_at(pointer).and_then(|v| v.as_str())
    }

    /// Extracts a boolean value from `values` using a JSON pointer.
    #[must_use]
    pub fn value_bool(&self, pointer: &str) -> Option<bool> {
        self.value_at(pointer).and_then(|v| v.as_bool())
    }
}

impl Unit {
    /// Creates a unit with no status and an empty history.
    #[must_use]
    pub fn new(name: impl Into<String>, spec: UnitSpec) -> Self {
        Self {
            name: name.into(),
            generation: Generation::default(),
            resource_version: String::new(),
            spec,
            status: serde_json::Value::Null,
            history: History::new(),
        }
    }

    /// The history entry capturing this unit's current configuration:
    /// its generation, template reference, and values as they stand.
    #[must_use]
    pub fn snapshot_entry(&self) -> HistoryEntry {
        HistoryEntry::new(
            self.generation,
            self.spec.template_ref.clone(),
            self.spec.values.clone(),
        )
    }

    /// Returns the unit as it should be persisted after replacing its
    /// spec: the prior configuration is recorded at the front of the
    /// history (capped at [`crate::history::MAX_ENTRIES`]); name,
    /// generation, resource version, and status carry through unchanged.
    ///
    /// Runs synchronously as part of every update; the store increments
    /// the generation and enforces at-most-one-writer when persisting.
    #[must_use]
    pub fn with_spec(&self, spec: UnitSpec) -> Self {
        Self {
            name: self.name.clone(),
            generation: self.generation,
            resource_version: self.resource_version.clone(),
            spec,
            status: self.status.clone(),
            history: self.history.recording(self.snapshot_entry()),
        }
    }

    /// Resolves a requested historical generation into a reconstructed
    /// unit snapshot.
    ///
    /// An empty `requested` means "current": the unit is returned
    /// unchanged. Otherwise the history is scanned for an entry whose
    /// generation matches (last match wins on duplicates); the snapshot
    /// carries the entry's generation, template reference, and values,
    /// keeps the current identity and status, and has no history of its
    /// own.
    ///
    /// # Errors
    ///
    /// [`Error::GenerationNotFound`] when no history entry matches.
    pub fn at_generation(&self, requested: &str) -> Result<Self> {
        if requested.is_empty() {
            return Ok(self.clone());
        }

        let entry = self
            .history
            .entry_for(requested)
            .ok_or_else(|| Error::GenerationNotFound {
                requested: requested.to_string(),
            })?;

        Ok(Self {
            name: self.name.clone(),
            generation: entry.generation,
            resource_version: self.resource_version.clone(),
            spec: UnitSpec::new(entry.template_ref.clone(), entry.values.clone()),
            status: self.status.clone(),
            history: History::new(),
        })
    }
}
