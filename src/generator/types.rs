//! Generated declaration types

use crate::schema::ConflictPolicy;
use crate::types::PrimitiveType;
use serde::Serialize;
use std::fmt;

/// Header comment written above every generated file
pub const DEFAULT_HEADER: &str = "// Generated by merged-interfaces";

/// Reference to a type from a field declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "type", rename_all = "snake_case")]
pub enum TypeRef {
    /// A leaf type (`string`, `number`, ...)
    Primitive(PrimitiveType),
    /// Another generated declaration
    Named(String),
    /// Array of the inner type
    ArrayOf(Box<TypeRef>),
    /// Union of several types
    Union(Vec<TypeRef>),
    /// No example data was available
    Unknown,
}

impl TypeRef {
    /// Array of `inner`
    pub fn array_of(inner: TypeRef) -> Self {
        TypeRef::ArrayOf(Box::new(inner))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(tag) => write!(f, "{tag}"),
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::ArrayOf(inner) => match inner.as_ref() {
                TypeRef::Union(_) => write!(f, "({inner})[]"),
                _ => write!(f, "{inner}[]"),
            },
            TypeRef::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
            TypeRef::Unknown => f.write_str("unknown"),
        }
    }
}

/// One line of a generated declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaField {
    pub name: String,
    pub optional: bool,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

impl fmt::Display for SchemaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if is_identifier(&self.name) {
            f.write_str(&self.name)?;
        } else {
            // JSON string escaping is valid TypeScript string literal syntax
            write!(f, "{}", serde_json::Value::String(self.name.clone()))?;
        }
        let marker = if self.optional { "?" } else { "" };
        write!(f, "{}: {};", marker, self.type_ref)
    }
}

/// Character allowed in a TypeScript identifier
pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Whether `name` can be written as a bare TypeScript property name
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if !first.is_ascii_digit() && is_identifier_char(first) => {
            chars.all(is_identifier_char)
        }
        _ => false,
    }
}

/// A named interface declaration
///
/// Created once and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSchema {
    pub name: String,
    pub fields: Vec<SchemaField>,
}

impl GeneratedSchema {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Render as a TypeScript interface
    pub fn render(&self) -> String {
        let mut out = format!("export interface {} {{\n", self.name);
        for field in &self.fields {
            out.push_str("  ");
            out.push_str(&field.to_string());
            out.push('\n');
        }
        out.push_str("}\n");
        out
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Kind of advisory diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// No sample had an element for this array
    EmptyArray,
    /// A top-level sample was not an object and contributed no fields
    NonObjectSample { index: usize },
}

/// Advisory message produced during generation; never aborts the run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Entity being generated
    pub entity: String,
    /// Dotted path of the offending position
    pub path: String,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::EmptyArray => write!(
                f,
                "{}: The array at {} is empty. Generated type will be 'unknown[]'. \
                 Consider adding variations with data for this field.",
                self.entity, self.path
            ),
            DiagnosticKind::NonObjectSample { index } => write!(
                f,
                "{}: Variation {} at {} is not an object and contributes no fields.",
                self.entity, index, self.path
            ),
        }
    }
}

// ============================================================================
// Options & Output
// ============================================================================

/// Options for an interface generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Comment line written before all declarations (empty = none)
    pub header: String,
    /// How to treat samples that disagree on a field's shape
    pub conflict_policy: ConflictPolicy,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            conflict_policy: ConflictPolicy::default(),
        }
    }
}

impl GeneratorOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header comment
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Set the conflict policy
    #[must_use]
    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }
}

/// Result of one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedInterfaces {
    /// Root entity name
    pub entity: String,
    /// Header comment
    #[serde(skip)]
    pub header: String,
    /// All declarations in discovery order; the root comes after its nested types
    pub declarations: Vec<GeneratedSchema>,
    /// Advisory diagnostics raised during generation
    pub diagnostics: Vec<Diagnostic>,
}

impl GeneratedInterfaces {
    /// Declaration for the root entity
    pub fn root(&self) -> Option<&GeneratedSchema> {
        self.get(&self.entity)
    }

    /// Look up a declaration by name
    pub fn get(&self, name: &str) -> Option<&GeneratedSchema> {
        self.declarations.iter().find(|d| d.name == name)
    }

    /// Render the full TypeScript file contents
    pub fn render(&self) -> String {
        let mut out = String::new();
        if !self.header.is_empty() {
            out.push_str(&self.header);
            out.push('\n');
        }
        for (i, declaration) in self.declarations.iter().enumerate() {
            if i > 0 || !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&declaration.render());
        }
        out
    }

    /// Serialize declarations and diagnostics as pretty JSON
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
