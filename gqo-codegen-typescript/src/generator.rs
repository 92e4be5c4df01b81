//! TypeScript declaration generator.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use gqodegen_codegen::{generation::OutputFile, pipeline::CompilationContext};
use gqodegen_ir::SchemaDocument;

use crate::{
    assembler::DocumentAssembler, error::EmitError, type_mapper::TypeScriptScalarMapper,
    walker::SchemaWalker,
};

/// Options controlling the generated file.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Module the non-primitive scalars are imported from.
    pub scalar_module: String,
    /// Render argument defaults as initializers in function signatures.
    pub render_defaults: bool,
    /// Timestamp written in the header.
    pub generated_at: NaiveDateTime,
}

impl GeneratorOptions {
    pub fn new(generated_at: NaiveDateTime) -> Self {
        Self {
            scalar_module: "types.ts".to_string(),
            render_defaults: false,
            generated_at,
        }
    }

    pub fn scalar_module(mut self, module: impl Into<String>) -> Self {
        self.scalar_module = module.into();
        self
    }

    pub fn render_defaults(mut self, enabled: bool) -> Self {
        self.render_defaults = enabled;
        self
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::new(chrono::Local::now().naive_local())
    }
}

/// Generates one TypeScript file from a schema document.
pub struct Generator<'a> {
    document: &'a SchemaDocument,
    options: GeneratorOptions,
}

impl<'a> Generator<'a> {
    pub fn new(document: &'a SchemaDocument, options: GeneratorOptions) -> Self {
        Self { document, options }
    }

    /// Generate from a validated pipeline context.
    pub fn from_context(ctx: &'a CompilationContext, options: GeneratorOptions) -> Self {
        Self::new(&ctx.document, options)
    }

    /// Render the whole file.
    pub fn render(&self) -> Result<String, EmitError> {
        let mapper = TypeScriptScalarMapper;
        let acc = SchemaWalker::new(&mapper)
            .render_defaults(self.options.render_defaults)
            .walk(self.document)?;

        let assembler =
            DocumentAssembler::new(&self.options.scalar_module, self.options.generated_at);
        Ok(assembler.assemble(acc))
    }

    /// Render the file destined for `path`, without writing it.
    pub fn output(&self, path: impl Into<PathBuf>) -> Result<OutputFile, EmitError> {
        Ok(OutputFile::new(path, self.render()?))
    }
}
