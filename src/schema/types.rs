//! Merged schema types

use crate::types::PrimitiveType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do when samples disagree on the shape of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Keep the shape of the first sample that has the field
    #[default]
    FirstWins,
    /// Fail with `Error::ConflictingShape`
    Reject,
}

/// Options for the sample merger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeOptions {
    pub conflict_policy: ConflictPolicy,
}

/// One field of a merged object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedField {
    /// Field name as it appears in the samples
    pub name: String,
    /// True when at least one sample lacks the field
    pub optional: bool,
    /// Merged value of the field across the samples that have it
    pub node: MergedNode,
}

/// Merged element type of an array field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergedArray {
    /// Every element merged into one object schema
    Objects(MergedObject),
    /// Distinct element tags in first-seen order; empty when no sample had elements
    Primitives(Vec<PrimitiveType>),
}

/// Unified representation of one field position across all samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergedNode {
    Leaf(PrimitiveType),
    Object(MergedObject),
    Array(MergedArray),
}

/// A merged object: fields in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedObject {
    pub fields: Vec<MergedField>,
}

impl MergedObject {
    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&MergedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Structural fingerprint of this object, including nested shapes
    pub fn signature(&self) -> Signature {
        let mut out = String::new();
        write_object(&mut out, self);
        Signature(out)
    }
}

/// Canonical structural fingerprint of a merged object
///
/// Fields are sorted by name so the signature does not depend on the order
/// keys appeared in the samples. Nested objects and array element shapes are
/// part of the signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(String);

impl Signature {
    /// Canonical text form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn write_object(out: &mut String, object: &MergedObject) {
    let mut fields: Vec<&MergedField> = object.fields.iter().collect();
    fields.sort_by(|a, b| a.name.cmp(&b.name));

    out.push('{');
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        // Quote names so separators inside keys stay unambiguous
        out.push_str(&serde_json::Value::String(field.name.clone()).to_string());
        if field.optional {
            out.push('?');
        }
        out.push(':');
        write_node(out, &field.node);
    }
    out.push('}');
}

fn write_node(out: &mut String, node: &MergedNode) {
    match node {
        MergedNode::Leaf(tag) => out.push_str(tag.name()),
        MergedNode::Object(object) => write_object(out, object),
        MergedNode::Array(MergedArray::Objects(object)) => {
            out.push('[');
            write_object(out, object);
            out.push(']');
        }
        MergedNode::Array(MergedArray::Primitives(tags)) => {
            let mut names: Vec<&str> = tags.iter().map(PrimitiveType::name).collect();
            names.sort_unstable();
            out.push('[');
            out.push_str(&names.join("|"));
            out.push(']');
        }
    }
}
