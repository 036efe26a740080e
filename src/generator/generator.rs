//! Interface generator entry point

use super::emitter::Emitter;
use super::types::{GeneratedInterfaces, GeneratorOptions};
use crate::error::{Error, Result};
use crate::schema::Merger;
use crate::types::JsonValue;

/// Collects sample documents ("variations") for one entity and generates
/// TypeScript interfaces from them
#[derive(Debug, Clone)]
pub struct InterfaceGenerator {
    name: String,
    variations: Vec<JsonValue>,
    options: GeneratorOptions,
}

impl InterfaceGenerator {
    /// Create a generator for the named entity
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variations: Vec::new(),
            options: GeneratorOptions::default(),
        }
    }

    /// Set generation options
    #[must_use]
    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Start with a set of variations
    #[must_use]
    pub fn with_variations(mut self, variations: impl IntoIterator<Item = JsonValue>) -> Self {
        self.variations.extend(variations);
        self
    }

    /// Add one sample document
    pub fn add_variation(&mut self, variation: JsonValue) {
        self.variations.push(variation);
    }

    /// Entity name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current options
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Samples added so far
    pub fn variations(&self) -> &[JsonValue] {
        &self.variations
    }

    /// Number of samples added so far
    pub fn variation_count(&self) -> usize {
        self.variations.len()
    }

    /// Merge all variations and generate the interfaces
    ///
    /// Every call starts from a clean slate, so generating twice from the
    /// same variations yields identical output.
    pub fn generate(&self) -> Result<GeneratedInterfaces> {
        if self.variations.is_empty() {
            return Err(Error::no_sample_data(&self.name));
        }

        let mut emitter = Emitter::new(&self.name);
        for (index, variation) in self.variations.iter().enumerate() {
            if !variation.is_object() {
                emitter.note_non_object_sample(index);
            }
        }

        let samples: Vec<&JsonValue> = self.variations.iter().collect();
        let merged = Merger::new()
            .with_conflict_policy(self.options.conflict_policy)
            .merge_rooted(&self.name, &samples)?;

        emitter.emit_root(&merged);
        let output = emitter.finish(&self.options.header);

        tracing::info!(
            "Generated {} interface(s) for {} from {} variation(s)",
            output.declarations.len(),
            self.name,
            self.variation_count()
        );
        Ok(output)
    }

    /// Generate and render the TypeScript text
    pub fn generate_text(&self) -> Result<String> {
        Ok(self.generate()?.render())
    }
}
