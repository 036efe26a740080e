//! Interface generation module
//!
//! Turns merged samples into named TypeScript interface declarations.
//!
//! # Overview
//!
//! - `InterfaceGenerator` - collects variations for one entity and runs generation
//! - `NameAllocator` - unique `<enclosing>_<field>` names with numeric suffixes
//! - `GeneratedInterfaces` - declarations in discovery order plus diagnostics
//!
//! Structurally identical nested objects are emitted once and referenced by
//! name everywhere they appear. Arrays of objects get one declaration per
//! occurrence.

mod emitter;
#[allow(clippy::module_inception)]
mod generator;
mod names;
mod types;

pub use generator::InterfaceGenerator;
pub use names::NameAllocator;
pub use types::{
    Diagnostic, DiagnosticKind, GeneratedInterfaces, GeneratedSchema, GeneratorOptions,
    SchemaField, TypeRef, DEFAULT_HEADER,
};

#[cfg(test)]
mod tests;
