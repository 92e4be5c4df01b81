//! Single pass over the document's definitions.

use gqodegen_codegen::{Indent, Renderable, ScalarMapper};
use gqodegen_ir::{Definition, FieldDef, SchemaDocument};
use indexmap::IndexMap;

use crate::{
    declaration::{input_declaration, object_declaration},
    error::EmitError,
    signature::{function_signature, is_root_type},
};

/// Everything the walk collected, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accumulators {
    /// Mapped scalar names, each once.
    pub scalars: Vec<String>,
    /// Enum values by enum name. Redeclaring an enum replaces its values but
    /// keeps its first position.
    pub enums: IndexMap<String, Vec<String>>,
    /// Rendered type declarations separated by blank lines.
    pub types: String,
    /// Rendered function signatures, one per line.
    pub functions: String,
}

impl Accumulators {
    fn register_scalar(&mut self, name: &str) {
        if !self.scalars.iter().any(|s| s == name) {
            self.scalars.push(name.to_string());
        }
    }

    fn register_enum(&mut self, name: &str, values: &[String]) {
        self.enums.insert(name.to_string(), values.to_vec());
    }

    fn push_declaration(&mut self, text: &str) {
        if !self.types.is_empty() {
            self.types.push('\n');
        }
        self.types.push_str(text);
    }

    fn push_signature(&mut self, line: &str) {
        self.functions.push_str(line);
        self.functions.push('\n');
    }
}

/// Walks the definitions of a document and dispatches each one to its
/// emitter.
pub struct SchemaWalker<'a> {
    mapper: &'a dyn ScalarMapper,
    render_defaults: bool,
}

impl<'a> SchemaWalker<'a> {
    pub fn new(mapper: &'a dyn ScalarMapper) -> Self {
        Self {
            mapper,
            render_defaults: false,
        }
    }

    /// Render argument defaults as initializers in function signatures.
    pub fn render_defaults(mut self, enabled: bool) -> Self {
        self.render_defaults = enabled;
        self
    }

    /// Walk `document` once, front to back.
    ///
    /// Stops at the first `extend type` of a non-root type.
    pub fn walk(&self, document: &SchemaDocument) -> Result<Accumulators, EmitError> {
        let mut acc = Accumulators::default();

        for definition in &document.definitions {
            match definition {
                Definition::Scalar(def) => acc.register_scalar(self.mapper.map_scalar(&def.name)),
                Definition::Enum(def) => acc.register_enum(&def.name, &def.values),
                Definition::Object(def) if is_root_type(&def.name) => {
                    self.push_signatures(&mut acc, &def.fields)
                }
                Definition::Object(def) => acc.push_declaration(
                    &object_declaration(def, self.mapper).render(Indent::TYPESCRIPT),
                ),
                Definition::ObjectExtension(ext) if is_root_type(&ext.name) => {
                    self.push_signatures(&mut acc, &ext.fields)
                }
                Definition::ObjectExtension(ext) => {
                    return Err(EmitError::InvalidExtension {
                        name: ext.name.clone(),
                        filename: document.filename.clone(),
                        location: ext.location,
                    });
                }
                Definition::Input(def) => acc.push_declaration(
                    &input_declaration(def, self.mapper).render(Indent::TYPESCRIPT),
                ),
                other @ Definition::Other { .. } => {
                    tracing::debug!(
                        kind = other.kind(),
                        name = ?other.name(),
                        "skipping definition"
                    );
                }
            }
        }

        tracing::info!(
            scalars = acc.scalars.len(),
            enums = acc.enums.len(),
            "walked schema"
        );
        Ok(acc)
    }

    fn push_signatures(&self, acc: &mut Accumulators, fields: &[FieldDef]) {
        for field in fields {
            let sig = function_signature(field, self.render_defaults, self.mapper);
            acc.push_signature(&sig.to_line());
        }
    }
}
