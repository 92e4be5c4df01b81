//! Best-effort validation of a lowered schema.
//!
//! The [`Pipeline`] runs the [`ValidatePhase`] lints over a
//! [`SchemaDocument`](gqodegen_ir::SchemaDocument) and collects
//! [`Diagnostic`]s into a [`CompilationContext`]. Validation never stops
//! generation: the pipeline logs the first diagnostic and hands the context
//! on, and callers that want the full list (the `check` command) read it from
//! the context.
//!
//! # Example
//!
//! ```ignore
//! let ctx = Pipeline::new().run(document);
//! for diag in &ctx.diagnostics {
//!     eprintln!("{}", diag);
//! }
//! ```

mod context;
mod diagnostic;
mod runner;
pub mod validate;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use runner::Pipeline;
pub use validate::{Lint, LintInfo, ValidatePhase};
