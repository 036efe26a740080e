//! Output module
//!
//! Persists generated interface text.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Resolving the target `.ts` file for an entity
//! - Backing up an existing file with a timestamp before overwriting
//! - Writing through a temporary file and rename

mod writer;

pub use writer::{backup_path, write_interfaces, write_interfaces_at, OutputTarget, WriteReport};
