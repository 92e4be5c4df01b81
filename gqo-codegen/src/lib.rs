//! Shared code generation utilities for gqodegen.
//!
//! This crate provides the language-agnostic pieces used by the target
//! language generators (e.g., `gqodegen-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - The seam a target language plugs into (ScalarMapper)
//! - [`pipeline`] - Best-effort schema validation (lints and diagnostics)
//! - [`generation`] - Writing generated output to disk

pub mod builder;
pub mod generation;
pub mod language;
pub mod pipeline;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use language::ScalarMapper;
