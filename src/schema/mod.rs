//! Schema merging module
//!
//! Merges several sample documents of one entity into a single structural
//! description.
//!
//! # Features
//!
//! - **Field Union**: Every field seen in any sample is kept
//! - **Optional Detection**: Fields missing from some samples are optional
//! - **Nested Merging**: Nested objects are merged across all samples at once
//! - **Array Collapsing**: Arrays of objects collapse into one element schema
//! - **Primitive Unions**: Mixed primitive arrays keep every element type
//! - **Structural Signatures**: Order-insensitive fingerprints for deduplication

mod merge;
mod types;

pub use merge::{merge_samples, Merger};
pub use types::{
    ConflictPolicy, MergeOptions, MergedArray, MergedField, MergedNode, MergedObject, Signature,
};
