//! Configuration unit model for Formwork.
//!
//! A [`Unit`] is the managed configuration entity: a name, a spec
//! (template reference plus parameter values), opaque observed status,
//! and a bounded, newest-first [`History`] of prior configurations.
//!
//! The two operations this crate owns:
//! - [`Unit::with_spec`] — replace the spec, recording the prior
//!   configuration in the history (prepend, cap at
//!   [`history::MAX_ENTRIES`])
//! - [`Unit::at_generation`] — resolve a requested historical generation
//!   back into a reconstructed unit snapshot
//!
//! Both are pure: inputs are read-only, outputs newly constructed. The
//! resource store owns the generation counter and write serialization.

pub mod history;
mod unit;

pub use history::{History, HistoryEntry};
pub use unit::{Unit, UnitSpec};
