//! Field type resolution and declaration emission
//!
//! One `Emitter` lives for exactly one generation run. It owns the run-scoped
//! state: signature to name map, reserved names, accumulated declarations
//! and diagnostics.

use super::names::NameAllocator;
use super::types::{
    Diagnostic, DiagnosticKind, GeneratedInterfaces, GeneratedSchema, SchemaField, TypeRef,
};
use crate::schema::{MergedArray, MergedNode, MergedObject, Signature};
use std::collections::HashMap;
use tracing::{debug, warn};

pub(crate) struct Emitter<'a> {
    entity: &'a str,
    signatures: HashMap<Signature, String>,
    names: NameAllocator,
    declarations: Vec<GeneratedSchema>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(entity: &'a str) -> Self {
        let mut names = NameAllocator::new();
        names.reserve(entity);

        Self {
            entity,
            signatures: HashMap::new(),
            names,
            declarations: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Resolve every field of the merged root and append its declaration
    pub(crate) fn emit_root(&mut self, root: &MergedObject) {
        let fields = self.resolve_fields(root, self.entity);
        self.declarations.push(GeneratedSchema {
            name: self.entity.to_string(),
            fields,
        });
    }

    pub(crate) fn note_non_object_sample(&mut self, index: usize) {
        self.push_diagnostic(
            format!("{}[{index}]", self.entity),
            DiagnosticKind::NonObjectSample { index },
        );
    }

    pub(crate) fn finish(self, header: &str) -> GeneratedInterfaces {
        GeneratedInterfaces {
            entity: self.entity.to_string(),
            header: header.to_string(),
            declarations: self.declarations,
            diagnostics: self.diagnostics,
        }
    }

    fn resolve_fields(&mut self, object: &MergedObject, enclosing: &str) -> Vec<SchemaField> {
        object
            .fields
            .iter()
            .map(|field| SchemaField {
                name: field.name.clone(),
                optional: field.optional,
                type_ref: self.resolve_field_type(&field.node, enclosing, &field.name),
            })
            .collect()
    }

    fn resolve_field_type(&mut self, node: &MergedNode, enclosing: &str, field: &str) -> TypeRef {
        match node {
            MergedNode::Leaf(tag) => TypeRef::Primitive(*tag),
            MergedNode::Object(object) => self.resolve_object(object, enclosing, field),
            MergedNode::Array(MergedArray::Objects(element)) => {
                // Every array-of-objects occurrence gets its own declaration
                let name = self.names.allocate(enclosing, field);
                let fields = self.resolve_fields(element, &name);
                self.push_declaration(name.clone(), fields);
                TypeRef::array_of(TypeRef::Named(name))
            }
            MergedNode::Array(MergedArray::Primitives(tags)) => match tags.as_slice() {
                [] => {
                    let path = format!("{enclosing}.{field}");
                    self.push_diagnostic(path, DiagnosticKind::EmptyArray);
                    TypeRef::array_of(TypeRef::Unknown)
                }
                [tag] => TypeRef::array_of(TypeRef::Primitive(*tag)),
                many => TypeRef::array_of(TypeRef::Union(
                    many.iter().copied().map(TypeRef::Primitive).collect(),
                )),
            },
        }
    }

    /// Reuse the declaration for an identical shape, or create a new one
    fn resolve_object(&mut self, object: &MergedObject, enclosing: &str, field: &str) -> TypeRef {
        let signature = object.signature();
        if let Some(existing) = self.signatures.get(&signature) {
            debug!("Reusing {} for {}.{}", existing, enclosing, field);
            return TypeRef::Named(existing.clone());
        }

        // Prefixed with the enclosing declaration itself (`Root_a_b`), not the
        // declaration above it
        let name = self.names.allocate(enclosing, field);
        let fields = self.resolve_fields(object, &name);
        self.signatures.insert(signature, name.clone());
        self.push_declaration(name.clone(), fields);
        TypeRef::Named(name)
    }

    fn push_declaration(&mut self, name: String, fields: Vec<SchemaField>) {
        debug!("Generated declaration {} with {} field(s)", name, fields.len());
        self.declarations.push(GeneratedSchema { name, fields });
    }

    fn push_diagnostic(&mut self, path: String, kind: DiagnosticKind) {
        let diagnostic = Diagnostic {
            entity: self.entity.to_string(),
            path,
            kind,
        };
        warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}
