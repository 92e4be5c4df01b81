//! TypeScript declaration generator for gqodegen.
//!
//! Turns a lowered GraphQL schema into a single TypeScript file holding type
//! declarations for object and input types, enums with matching string
//! tuples, and `export function` signatures for every `Query` and `Mutation`
//! field.
//!
//! # Usage
//!
//! ```ignore
//! use gqodegen_codegen::pipeline::Pipeline;
//! use gqodegen_codegen_typescript::{Generator, GeneratorOptions};
//!
//! let document = gqodegen_schema::parse_str(sdl)?;
//! let ctx = Pipeline::new().run(document);
//! let source = Generator::from_context(&ctx, GeneratorOptions::default()).render()?;
//! ```
//!
//! # Generated Output
//!
//! Sections appear in a fixed order: header, `// scalars` import,
//! `// enums`, `// enum strings`, `// types` and `// query headers`.

mod assembler;
mod declaration;
mod error;
mod flatten;
mod generator;
mod literal;
mod signature;
mod type_mapper;
mod walker;

pub mod ast;

pub use assembler::{DocumentAssembler, PRELUDE_SCALARS, module_specifier};
pub use declaration::{input_declaration, object_declaration};
pub use error::EmitError;
pub use flatten::flatten_type;
pub use generator::{Generator, GeneratorOptions};
pub use literal::{UNSUPPORTED_PLACEHOLDER, render_literal};
pub use signature::{ROOT_TYPES, function_signature, is_root_type};
pub use type_mapper::TypeScriptScalarMapper;
pub use walker::{Accumulators, SchemaWalker};
