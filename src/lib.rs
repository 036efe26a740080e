//! # merged-interfaces
//!
//! Infer one TypeScript interface per entity from several JSON sample
//! documents that describe the same thing in different shapes.
//!
//! ## Features
//!
//! - **Field Union**: Fields from every sample end up in the interface
//! - **Optional Fields**: A field missing from any sample is marked `?`
//! - **Nested Objects**: Merged recursively, emitted as named interfaces
//! - **Arrays of Objects**: Collapsed into one merged element interface
//! - **Primitive Unions**: `[1, "a"]` becomes `(number | string)[]`
//! - **Deduplication**: Identical nested shapes are emitted once and reused
//!
//! ## Quick Start
//!
//! ```rust
//! use merged_interfaces::InterfaceGenerator;
//! use serde_json::json;
//!
//! let mut generator = InterfaceGenerator::new("User");
//! generator.add_variation(json!({"id": 1}));
//! generator.add_variation(json!({"id": 2, "email": "b@example.com"}));
//!
//! let output = generator.generate().unwrap();
//! assert!(output.render().contains("email?: string;"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! samples ──► loader ──► schema::Merger ──► generator::Emitter ──► output
//!  (files)              (MergedObject)      (GeneratedSchema list)   (.ts file)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Sample merging and structural signatures
pub mod schema;

/// Interface generation, naming and emission
pub mod generator;

/// Reading sample documents from disk
pub mod loader;

/// Writing generated files
pub mod output;

/// Project configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use generator::{GeneratedInterfaces, GeneratorOptions, InterfaceGenerator};
pub use schema::{merge_samples, Merger};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
