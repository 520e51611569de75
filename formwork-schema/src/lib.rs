//! Template parameter schemas and their rendering projection.
//!
//! A template declares its configurable parameters as a tree of typed,
//! constrained [`Property`] nodes. Before a unit's parameter form can be
//! rendered, that tree is projected into an ordered [`Field`] tree by
//! [`map_fields`], which also merges in the pre-resolved parameter
//! surfaces of the template's declared dependencies.
//!
//! - [`Property`] / [`PropertyKind`] — a declared schema node
//! - [`Field`] / [`FieldKind`] — the rendering-oriented projection
//! - [`Dependency`] — an externally pre-built field subtree
//! - [`map_fields`] — the schema → field transform
//!
//! The mapper is a total, pure function: no I/O, no domain errors,
//! graceful degradation on missing optional sub-structures.

mod field;
mod mapper;
mod property;

pub use field::{Dependency, Field, FieldKind};
pub use mapper::map_fields;
pub use property::{Property, PropertyKind};
