//! Merging sample documents into one structural description

use super::types::{
    ConflictPolicy, MergeOptions, MergedArray, MergedField, MergedNode, MergedObject,
};
use crate::error::{Error, Result};
use crate::types::{JsonObject, PrimitiveType};
use serde_json::Value;
use std::collections::HashSet;

/// Path used for error messages when the caller gives no root name
const ROOT_PATH: &str = "$";

/// Merges sibling sample values into a single `MergedObject`
#[derive(Debug, Clone, Default)]
pub struct Merger {
    options: MergeOptions,
}

impl Merger {
    /// Create a merger with default settings (first shape wins)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the conflict policy
    #[must_use]
    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.options.conflict_policy = policy;
        self
    }

    /// Merge a list of samples of the same object
    ///
    /// The field set is the union over every object sample. A field is
    /// optional when fewer samples carry it than were passed in. Samples that
    /// are not objects contribute no fields but still count as samples.
    pub fn merge(&self, samples: &[&Value]) -> Result<MergedObject> {
        self.merge_at(samples, ROOT_PATH)
    }

    /// Same as [`Merger::merge`], with `root` used as the path prefix in errors
    pub fn merge_rooted(&self, root: &str, samples: &[&Value]) -> Result<MergedObject> {
        self.merge_at(samples, root)
    }

    /// Merge owned samples
    pub fn merge_values(&self, samples: &[Value]) -> Result<MergedObject> {
        let refs: Vec<&Value> = samples.iter().collect();
        self.merge(&refs)
    }

    fn merge_at(&self, samples: &[&Value], path: &str) -> Result<MergedObject> {
        if samples.is_empty() {
            return Err(Error::empty_input(path));
        }

        let mut fields = Vec::new();
        for key in union_keys(samples) {
            let present: Vec<&Value> = samples.iter().filter_map(|s| s.get(key)).collect();
            let field_path = format!("{path}.{key}");
            let node = self.merge_field(&present, &field_path)?;

            fields.push(MergedField {
                name: key.to_string(),
                optional: present.len() < samples.len(),
                node,
            });
        }

        Ok(MergedObject { fields })
    }

    /// Merge the values one field takes across the samples that have it
    fn merge_field(&self, present: &[&Value], path: &str) -> Result<MergedNode> {
        let Some(first) = present.first() else {
            return Err(Error::empty_input(path));
        };
        self.check_shapes(present, path)?;

        match first {
            Value::Object(_) => Ok(MergedNode::Object(self.merge_at(present, path)?)),
            Value::Array(_) => {
                let elements: Vec<&Value> = present
                    .iter()
                    .filter_map(|v| v.as_array())
                    .flatten()
                    .collect();
                Ok(MergedNode::Array(self.merge_elements(&elements, path)?))
            }
            other => Ok(MergedNode::Leaf(PrimitiveType::of(other))),
        }
    }

    /// Merge the flattened elements of every array found for one field
    ///
    /// Shapes are checked over every element, whichever one comes first.
    fn merge_elements(&self, elements: &[&Value], path: &str) -> Result<MergedArray> {
        let item_path = format!("{path}[]");
        self.check_shapes(elements, &item_path)?;

        if let Some(Value::Object(_)) = elements.first() {
            return Ok(MergedArray::Objects(self.merge_at(elements, &item_path)?));
        }

        let mut tags = Vec::new();
        for element in elements {
            let tag = PrimitiveType::of(element);
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        Ok(MergedArray::Primitives(tags))
    }

    /// Detect samples disagreeing on object/array/leaf shape
    ///
    /// `null` never conflicts. Differing leaf kinds are not shape conflicts.
    /// The first non-null value sets the expected shape.
    fn check_shapes(&self, values: &[&Value], path: &str) -> Result<()> {
        let mut shapes = values
            .iter()
            .map(|v| Shape::of(v))
            .filter(|shape| *shape != Shape::Null);
        let Some(expected) = shapes.next() else {
            return Ok(());
        };

        for found in shapes {
            if found == expected {
                continue;
            }

            match self.options.conflict_policy {
                ConflictPolicy::Reject => {
                    return Err(Error::conflicting_shape(
                        path,
                        expected.name(),
                        found.name(),
                    ));
                }
                ConflictPolicy::FirstWins => {
                    tracing::debug!(
                        "Conflicting shapes at {}: keeping {}, ignoring {}",
                        path,
                        expected.name(),
                        found.name()
                    );
                }
            }
        }
        Ok(())
    }
}

/// Merge owned samples with default settings (convenience function)
pub fn merge_samples(samples: &[Value]) -> Result<MergedObject> {
    Merger::new().merge_values(samples)
}

/// Union of keys over all object samples, in first-seen order
fn union_keys<'a>(samples: &[&'a Value]) -> Vec<&'a str> {
    let objects: Vec<&'a JsonObject> = samples.iter().filter_map(|s| s.as_object()).collect();

    let mut seen = HashSet::new();
    let mut keys = Vec::new();
    for map in objects {
        for key in map.keys() {
            if seen.insert(key.as_str()) {
                keys.push(key.as_str());
            }
        }
    }
    keys
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Object,
    Array,
    Leaf,
    Null,
}

impl Shape {
    fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Shape::Object,
            Value::Array(_) => Shape::Array,
            Value::Null => Shape::Null,
            _ => Shape::Leaf,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Shape::Object => "object",
            Shape::Array => "array",
            Shape::Leaf => "primitive",
            Shape::Null => "null",
        }
    }
}
